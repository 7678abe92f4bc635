//! Contract tests for the builder command.

mod common;

use common::{TestContext, prompt_json};
use predicates::prelude::*;

const EXECUTE_BODY: &str =
    r#"{"generated_prompt": "As an AI assistant helping ada (a student)...", "response": "Recursion is a function calling itself."}"#;

#[test]
fn preview_renders_locally_without_backend() {
    let ctx = TestContext::new();
    ctx.seed_session();

    ctx.cli()
        .args([
            "build",
            "--preview",
            "--input",
            "What is recursion?",
            "--category",
            "doubt",
            "--style",
            "concise",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("a student"))
        .stdout(predicate::str::contains("concise"))
        .stdout(predicate::str::contains("Question: What is recursion?"))
        .stdout(predicate::str::contains("Additional context").not());
}

#[test]
fn preview_with_description_adds_context_line() {
    let ctx = TestContext::new();
    ctx.seed_session();

    ctx.cli()
        .args([
            "build",
            "--preview",
            "--input",
            "What is recursion?",
            "--category",
            "doubt",
            "--style",
            "concise",
            "--description",
            "first-year CS course",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Additional context: first-year CS course"));
}

#[test]
fn build_executes_and_prints_artifact() {
    let mut server = mockito::Server::new();
    let execute = server
        .mock("POST", "/prompts/execute/")
        .match_header("authorization", "Bearer old-access")
        .with_status(200)
        .with_body(EXECUTE_BODY)
        .expect(1)
        .create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());
    ctx.seed_session();

    ctx.cli()
        .args([
            "build",
            "--input",
            "What is recursion?",
            "--category",
            "doubt",
            "--style",
            "concise",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Generated prompt ---"))
        .stdout(predicate::str::contains("--- AI response ---"))
        .stdout(predicate::str::contains("Recursion is a function calling itself."));

    execute.assert();
}

#[test]
fn build_save_posts_to_library() {
    let mut server = mockito::Server::new();
    let execute = server
        .mock("POST", "/prompts/execute/")
        .with_status(200)
        .with_body(EXECUTE_BODY)
        .expect(1)
        .create();
    let create = server
        .mock("POST", "/prompts/")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"category": "doubt", "response_style": "concise",
                "ai_response": "Recursion is a function calling itself."}"#
                .to_string(),
        ))
        .with_status(201)
        .with_body(prompt_json(41, "Recursion is a function calling itself."))
        .expect(1)
        .create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());
    ctx.seed_session();

    ctx.cli()
        .args([
            "build",
            "--save",
            "--input",
            "What is recursion?",
            "--category",
            "doubt",
            "--style",
            "concise",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved prompt #41"));

    execute.assert();
    create.assert();
}

#[test]
fn build_rejects_unknown_category_before_any_request() {
    let ctx = TestContext::new();
    ctx.seed_session();

    ctx.cli()
        .args(["build", "--input", "hello", "--category", "poetry", "--style", "concise"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category 'poetry'"));
}

#[test]
fn build_requires_input_text() {
    let mut server = mockito::Server::new();
    let execute = server.mock("POST", "/prompts/execute/").expect(0).create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());
    ctx.seed_session();

    // Empty input with no TTY: the interactive fallback is skipped and
    // validation fails before any request is issued.
    ctx.cli()
        .args(["build", "--input", "   ", "--category", "doubt", "--style", "concise"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: input_text"));

    execute.assert();
}

#[test]
fn edit_mode_hydrates_without_executing() {
    let mut server = mockito::Server::new();
    let fetch = server
        .mock("GET", "/prompts/12/")
        .with_status(200)
        .with_body(prompt_json(12, "Recursion is a function calling itself."))
        .expect(1)
        .create();
    let execute = server.mock("POST", "/prompts/execute/").expect(0).create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());
    ctx.seed_session();

    ctx.cli()
        .args(["build", "--edit", "12", "--preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded prompt #12 for editing"))
        .stdout(predicate::str::contains("Question: What is recursion?"));

    fetch.assert();
    execute.assert();
}

#[test]
fn edit_mode_update_patches_existing_record() {
    let mut server = mockito::Server::new();
    let _fetch = server
        .mock("GET", "/prompts/12/")
        .with_status(200)
        .with_body(prompt_json(12, "Old answer."))
        .create();
    let _execute = server
        .mock("POST", "/prompts/execute/")
        .with_status(200)
        .with_body(EXECUTE_BODY)
        .create();
    let update = server
        .mock("PATCH", "/prompts/12/")
        .with_status(200)
        .with_body(prompt_json(12, "Recursion is a function calling itself."))
        .expect(1)
        .create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());
    ctx.seed_session();

    ctx.cli()
        .args(["build", "--edit", "12", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated prompt #12"));

    update.assert();
}
