//! The prompt builder: draft assembly, preview, execution, and save.

use dialoguer::{Input, Select};

use crate::domain::{
    AppError, GeneratedArtifact, PersistedPrompt, PromptCategory, PromptDraft, ResponseStyle,
    TemplateInputs, UserProfile, template,
};
use crate::ports::{ClipboardWriter, PromptApi};
use crate::services::ExecutionWorkflow;

/// What to copy to the clipboard after an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyTarget {
    #[default]
    Nothing,
    Prompt,
    Response,
}

/// Builder inputs, already parsed at the CLI boundary.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Load an existing prompt for editing before applying overrides.
    pub edit: Option<u64>,
    pub title: Option<String>,
    pub input_text: Option<String>,
    pub category: Option<PromptCategory>,
    pub style: Option<ResponseStyle>,
    pub description: Option<String>,
    /// Render the template locally instead of executing.
    pub preview: bool,
    /// Persist after a successful execution.
    pub save: bool,
    pub copy: CopyTarget,
}

/// Outcome of one builder run.
#[derive(Debug)]
pub enum BuildOutcome {
    /// Locally rendered prompt; nothing was executed.
    Preview(String),
    /// Executed artifact, plus the saved record when saving was requested.
    Executed { artifact: GeneratedArtifact, saved: Option<PersistedPrompt> },
}

/// Run the builder once.
pub fn execute(
    client: &impl PromptApi,
    user: &UserProfile,
    clipboard: Option<&mut dyn ClipboardWriter>,
    options: BuildOptions,
) -> Result<BuildOutcome, AppError> {
    let mut workflow = ExecutionWorkflow::default();

    if let Some(id) = options.edit {
        workflow.load_for_edit(client, id)?;
        println!("Loaded prompt #{id} for editing");
    }

    apply_overrides(workflow.draft_mut(), user, &options);
    fill_missing_interactively(workflow.draft_mut())?;

    if options.preview {
        let draft = workflow.draft();
        let category = draft.category.ok_or(AppError::MissingField("category"))?;
        let inputs = TemplateInputs::for_draft(draft, user)?;
        let prompt = template::render(category, &inputs)?;
        println!("{prompt}");
        return Ok(BuildOutcome::Preview(prompt));
    }

    let artifact = workflow.execute(client)?;
    println!("--- Generated prompt ---");
    println!("{}", artifact.generated_prompt);
    println!();
    println!("--- AI response ---");
    println!("{}", artifact.ai_response);

    copy_artifact(clipboard, options.copy, &artifact);

    let saved = if options.save { Some(workflow.save(client)?) } else { None };
    if let Some(prompt) = &saved {
        if options.edit.is_some() {
            println!("✅ Updated prompt #{}", prompt.id);
        } else {
            println!("✅ Saved prompt #{} to your library", prompt.id);
        }
    }

    Ok(BuildOutcome::Executed { artifact, saved })
}

/// Flags override the draft; profile preferences fill what is still unset.
fn apply_overrides(draft: &mut PromptDraft, user: &UserProfile, options: &BuildOptions) {
    if let Some(title) = &options.title {
        draft.title = Some(title.clone());
    }
    if let Some(input) = &options.input_text {
        draft.input_text = input.clone();
    }
    if let Some(category) = options.category {
        draft.category = Some(category);
    }
    if let Some(style) = options.style {
        draft.style = Some(style);
    }
    if let Some(description) = &options.description {
        draft.description = Some(description.clone());
    }

    if draft.category.is_none() {
        draft.category = user.preferences.default_category;
    }
    if draft.style.is_none() {
        draft.style = user.preferences.default_style;
    }
}

/// Ask for whatever the flags and preferences left unset.
///
/// Without a terminal there is nothing to ask; draft validation then names
/// the missing field.
fn fill_missing_interactively(draft: &mut PromptDraft) -> Result<(), AppError> {
    use std::io::IsTerminal;

    if !std::io::stdin().is_terminal() {
        return Ok(());
    }

    if draft.category.is_none() {
        let items: Vec<String> = PromptCategory::ALL
            .iter()
            .map(|c| format!("{} ({})", c.label(), c.description()))
            .collect();
        let index = Select::new()
            .with_prompt("Category")
            .items(&items)
            .default(0)
            .interact()
            .map_err(interaction_error)?;
        draft.category = Some(PromptCategory::ALL[index]);
    }

    if draft.style.is_none() {
        let items: Vec<String> = ResponseStyle::ALL
            .iter()
            .map(|s| format!("{} ({})", s.label(), s.description()))
            .collect();
        let index = Select::new()
            .with_prompt("Response style")
            .items(&items)
            .default(0)
            .interact()
            .map_err(interaction_error)?;
        draft.style = Some(ResponseStyle::ALL[index]);
    }

    if draft.input_text.trim().is_empty() {
        let text: String = Input::new()
            .with_prompt("Prompt text")
            .interact_text()
            .map_err(interaction_error)?;
        draft.input_text = text;
    }

    Ok(())
}

fn interaction_error(err: dialoguer::Error) -> AppError {
    AppError::config_error(format!("Interactive prompt failed: {err}"))
}

/// Clipboard failures never abort the build; they are reported and ignored.
fn copy_artifact(
    clipboard: Option<&mut dyn ClipboardWriter>,
    target: CopyTarget,
    artifact: &GeneratedArtifact,
) {
    let text = match target {
        CopyTarget::Nothing => return,
        CopyTarget::Prompt => &artifact.generated_prompt,
        CopyTarget::Response => &artifact.ai_response,
    };
    match clipboard {
        Some(writer) => match writer.write_text(text) {
            Ok(()) => println!("Copied to clipboard"),
            Err(err) => eprintln!("Warning: {err}"),
        },
        None => eprintln!("Warning: clipboard unavailable"),
    }
}
