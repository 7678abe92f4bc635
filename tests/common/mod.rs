//! Shared testing utilities for promptforge CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment for CLI exercises: a private promptforge home plus a
/// backend URL override applied per invocation.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    api_url: Option<String>,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with no backend configured.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root, api_url: None }
    }

    /// Point subsequent CLI invocations at a mock backend.
    pub fn set_backend(&mut self, url: impl Into<String>) {
        self.api_url = Some(url.into());
    }

    /// Path to the promptforge home used for CLI invocations.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the stored session file.
    pub fn session_file(&self) -> PathBuf {
        self.home().join("session.toml")
    }

    /// Build a command for invoking the compiled `promptforge` binary within
    /// the isolated home.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("promptforge").expect("Failed to locate promptforge binary");
        cmd.env("PROMPTFORGE_HOME", self.home());
        cmd.env_remove("PROMPTFORGE_API_URL");
        if let Some(url) = &self.api_url {
            cmd.env("PROMPTFORGE_API_URL", url);
        }
        cmd
    }

    /// Write a stored session as if a login had already happened.
    pub fn seed_session(&self) {
        let session = r#"access = "old-access"
refresh = "refresh-token"

[user]
id = 1
username = "ada"
email = "ada@example.com"
role = "student"
"#;
        fs::write(self.session_file(), session).expect("Failed to write session file");
    }

    /// Assert that a session file exists.
    pub fn assert_session_exists(&self) {
        assert!(self.session_file().exists(), "session file should exist");
    }

    /// Assert that no session file exists.
    pub fn assert_session_not_exists(&self) {
        assert!(!self.session_file().exists(), "session file should not exist");
    }
}

/// A saved prompt record as the backend serializes it.
#[allow(dead_code)]
pub fn prompt_json(id: u64, ai_response: &str) -> String {
    format!(
        r#"{{"id": {id}, "title": "Doubt - What is recursion?", "input_text": "What is recursion?",
            "category": "doubt", "response_style": "concise", "description": "",
            "generated_prompt": "As an AI assistant helping ada (a student)...",
            "ai_response": "{ai_response}", "user": 1,
            "created_at": "2025-11-02T09:15:00Z", "updated_at": "2025-11-02T09:15:00Z"}}"#
    )
}
