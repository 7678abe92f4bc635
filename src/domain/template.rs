//! Prompt template engine.
//!
//! Renders the category-specific prompt skeletons locally. The backend runs
//! the same skeletons on `/prompts/execute/`; the local engine powers
//! `build --preview` and keeps the prompt text testable offline.
//!
//! Rendering is pure: no clock, no randomness, no I/O. The skeletons are
//! embedded at compile time and rendered with strict semantics, so a
//! skeleton referencing an unknown variable fails loudly instead of
//! producing silently empty output.

use std::sync::OnceLock;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use super::{AppError, PromptCategory, PromptDraft, ResponseStyle, UserProfile};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Variables interpolated into every skeleton.
///
/// `description` is always present in the render context (as `none` when
/// absent) so the skeletons' `{% if description %}` guards work under strict
/// undefined behavior.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInputs<'a> {
    pub username: &'a str,
    pub role: &'a str,
    pub input_text: &'a str,
    pub style: &'a str,
    pub description: Option<&'a str>,
}

impl<'a> TemplateInputs<'a> {
    pub fn new(
        username: &'a str,
        role: &'a str,
        input_text: &'a str,
        style: ResponseStyle,
        description: Option<&'a str>,
    ) -> Self {
        Self { username, role, input_text, style: style.as_str(), description }
    }

    /// Inputs for a validated draft, on behalf of the given user.
    pub fn for_draft(draft: &'a PromptDraft, user: &'a UserProfile) -> Result<Self, AppError> {
        draft.validate()?;
        let style = draft.style.ok_or(AppError::MissingField("style"))?;
        Ok(Self::new(
            &user.username,
            &user.role,
            draft.input_text.trim(),
            style,
            draft.context(),
        ))
    }
}

/// Render the skeleton for `category` with the given inputs.
///
/// Identical inputs always yield identical output text.
pub fn render(category: PromptCategory, inputs: &TemplateInputs<'_>) -> Result<String, AppError> {
    let name = template_name(category);
    let source = TEMPLATE_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::TemplateRender {
            template: name.to_string(),
            reason: "embedded template missing or not UTF-8".to_string(),
        })?;

    let rendered = environment()
        .render_str(source, inputs)
        .map_err(|err| AppError::TemplateRender {
            template: name.to_string(),
            reason: err.to_string(),
        })?;

    Ok(rendered.trim().to_string())
}

/// Skeleton file for each category. Exhaustive on purpose: adding a category
/// forces a decision here.
fn template_name(category: PromptCategory) -> &'static str {
    match category {
        PromptCategory::Doubt => "doubt.j2",
        PromptCategory::ImageGeneration => "image_generation.j2",
        PromptCategory::LearningRoadmap => "learning_roadmap.j2",
        PromptCategory::VideoGeneration => "video_generation.j2",
        PromptCategory::DeepResearch => "deep_research.j2",
        PromptCategory::IdeaExploration => "idea_exploration.j2",
    }
}

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}
