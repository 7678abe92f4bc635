//! Prompt category taxonomy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Prompt categories accepted by the backend.
///
/// The set is closed at this boundary: everything past `FromStr` works with
/// the variants and an unknown category is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptCategory {
    Doubt,
    ImageGeneration,
    LearningRoadmap,
    VideoGeneration,
    DeepResearch,
    IdeaExploration,
}

impl PromptCategory {
    /// All categories, in the order the builder presents them.
    pub const ALL: [PromptCategory; 6] = [
        PromptCategory::Doubt,
        PromptCategory::ImageGeneration,
        PromptCategory::LearningRoadmap,
        PromptCategory::VideoGeneration,
        PromptCategory::DeepResearch,
        PromptCategory::IdeaExploration,
    ];

    /// Wire name used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptCategory::Doubt => "doubt",
            PromptCategory::ImageGeneration => "image_generation",
            PromptCategory::LearningRoadmap => "learning_roadmap",
            PromptCategory::VideoGeneration => "video_generation",
            PromptCategory::DeepResearch => "deep_research",
            PromptCategory::IdeaExploration => "idea_exploration",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PromptCategory::Doubt => "Question & Doubt",
            PromptCategory::ImageGeneration => "Image Generation",
            PromptCategory::LearningRoadmap => "Learning Roadmap",
            PromptCategory::VideoGeneration => "Video Generation",
            PromptCategory::DeepResearch => "Deep Research",
            PromptCategory::IdeaExploration => "Idea Exploration",
        }
    }

    /// One-line description shown in interactive selection.
    pub fn description(&self) -> &'static str {
        match self {
            PromptCategory::Doubt => "Get clear answers to your questions",
            PromptCategory::ImageGeneration => "Create detailed image prompts",
            PromptCategory::LearningRoadmap => "Build structured learning paths",
            PromptCategory::VideoGeneration => "Generate video scripts and concepts",
            PromptCategory::DeepResearch => "Comprehensive research and analysis",
            PromptCategory::IdeaExploration => "Brainstorm and explore new concepts",
        }
    }
}

impl FromStr for PromptCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doubt" => Ok(PromptCategory::Doubt),
            "image_generation" => Ok(PromptCategory::ImageGeneration),
            "learning_roadmap" => Ok(PromptCategory::LearningRoadmap),
            "video_generation" => Ok(PromptCategory::VideoGeneration),
            "deep_research" => Ok(PromptCategory::DeepResearch),
            "idea_exploration" => Ok(PromptCategory::IdeaExploration),
            other => Err(AppError::InvalidCategory(other.to_string())),
        }
    }
}

impl fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
