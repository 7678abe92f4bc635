use clap::{Parser, Subcommand};
use dialoguer::{Input, Password, Select};
use promptforge::domain::{Preferences, PromptCategory, ResponseStyle, USER_ROLES};
use promptforge::services::{PastedTokenProvider, StaticTokenProvider};
use promptforge::{AppError, BuildOptions, CopyTarget, ProfileOptions, RegisterOptions};

#[derive(Parser)]
#[command(name = "promptforge")]
#[command(version)]
#[command(
    about = "Build, execute, and manage AI prompts against a promptforge backend",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login {
        /// Username (prompted when omitted)
        #[arg(short, long)]
        username: Option<String>,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
        /// Sign in with a Google ID token instead of a password
        #[arg(long)]
        google: bool,
        /// ID token for --google (prompted when omitted)
        #[arg(long, requires = "google")]
        id_token: Option<String>,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// Password (prompted with confirmation when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Role: student, educator, researcher, developer, ... (prompted when omitted)
        #[arg(long)]
        role: Option<String>,
        /// Default category for new drafts
        #[arg(long)]
        default_category: Option<String>,
        /// Default style for new drafts
        #[arg(long)]
        default_style: Option<String>,
    },
    /// Remove the stored session
    Logout,
    /// Show the signed-in profile, or update it when flags are given
    Profile {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<String>,
        /// Default category for new drafts
        #[arg(long)]
        default_category: Option<String>,
        /// Default style for new drafts
        #[arg(long)]
        default_style: Option<String>,
    },
    /// Build and execute a prompt
    #[clap(visible_alias = "b")]
    Build {
        /// Prompt input text (prompted when omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Category: doubt, image_generation, learning_roadmap, video_generation, deep_research, idea_exploration
        #[arg(short, long)]
        category: Option<String>,
        /// Response style: concise, detailed, creative, formal, technical
        #[arg(short, long)]
        style: Option<String>,
        /// Additional context for the template
        #[arg(short, long)]
        description: Option<String>,
        /// Title for the saved prompt
        #[arg(short, long)]
        title: Option<String>,
        /// Load an existing prompt for editing
        #[arg(short, long)]
        edit: Option<u64>,
        /// Render the prompt locally without executing
        #[arg(long)]
        preview: bool,
        /// Save to the library after execution
        #[arg(long)]
        save: bool,
        /// Copy the generated prompt to the clipboard
        #[arg(long, conflicts_with = "copy_response")]
        copy: bool,
        /// Copy the AI response to the clipboard
        #[arg(long)]
        copy_response: bool,
    },
    /// List saved prompts
    #[clap(visible_alias = "ls")]
    List {
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Show one saved prompt
    Show { id: u64 },
    /// Delete a saved prompt
    #[clap(visible_alias = "rm")]
    Delete { id: u64 },
    /// Show dashboard statistics
    Stats,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Login { username, password, google, id_token } => {
            if google {
                return match id_token {
                    Some(token) => promptforge::login_google(&StaticTokenProvider(token)),
                    None => promptforge::login_google(&PastedTokenProvider),
                };
            }
            let username = match username {
                Some(name) => name,
                None => ask_input("Username")?,
            };
            let password = match password {
                Some(secret) => secret,
                None => ask_password("Password", false)?,
            };
            promptforge::login(&username, &password)
        }
        Commands::Register { username, email, password, role, default_category, default_style } => {
            let (password, confirm_password) = match password {
                Some(secret) => (secret.clone(), secret),
                None => {
                    let secret = ask_password("Password", true)?;
                    (secret.clone(), secret)
                }
            };
            let role = match role {
                Some(role) => role,
                None => ask_role()?,
            };
            let preferences = Preferences {
                default_category: parse_category(default_category)?,
                default_style: parse_style(default_style)?,
                theme: None,
            };
            promptforge::register(RegisterOptions {
                username,
                email,
                password,
                confirm_password,
                role,
                preferences,
            })
        }
        Commands::Logout => promptforge::logout(),
        Commands::Profile { email, role, default_category, default_style } => {
            let options = ProfileOptions {
                email,
                role,
                default_category: parse_category(default_category)?,
                default_style: parse_style(default_style)?,
            };
            if options.is_empty() {
                promptforge::profile_show()
            } else {
                promptforge::profile_update(options)
            }
        }
        Commands::Build {
            input,
            category,
            style,
            description,
            title,
            edit,
            preview,
            save,
            copy,
            copy_response,
        } => {
            let copy = if copy {
                CopyTarget::Prompt
            } else if copy_response {
                CopyTarget::Response
            } else {
                CopyTarget::Nothing
            };
            let options = BuildOptions {
                edit,
                title,
                input_text: input,
                category: parse_category(category)?,
                style: parse_style(style)?,
                description,
                preview,
                save,
                copy,
            };
            promptforge::build(options).map(|_| ())
        }
        Commands::List { page } => promptforge::list(page),
        Commands::Show { id } => promptforge::show(id),
        Commands::Delete { id } => promptforge::delete(id),
        Commands::Stats => promptforge::dashboard_stats(),
    }
}

fn parse_category(raw: Option<String>) -> Result<Option<PromptCategory>, AppError> {
    raw.map(|s| s.parse()).transpose()
}

fn parse_style(raw: Option<String>) -> Result<Option<ResponseStyle>, AppError> {
    raw.map(|s| s.parse()).transpose()
}

fn ask_input(prompt: &str) -> Result<String, AppError> {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .map_err(|e| AppError::config_error(format!("Interactive prompt failed: {e}")))
}

fn ask_password(prompt: &str, confirm: bool) -> Result<String, AppError> {
    let mut password = Password::new().with_prompt(prompt);
    if confirm {
        password = password.with_confirmation("Confirm password", "Passwords do not match");
    }
    password
        .interact()
        .map_err(|e| AppError::config_error(format!("Interactive prompt failed: {e}")))
}

fn ask_role() -> Result<String, AppError> {
    let index = Select::new()
        .with_prompt("Role")
        .items(&USER_ROLES)
        .default(0)
        .interact()
        .map_err(|e| AppError::config_error(format!("Interactive prompt failed: {e}")))?;
    Ok(USER_ROLES[index].to_string())
}
