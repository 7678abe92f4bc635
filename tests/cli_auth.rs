//! Contract tests for authentication commands.

mod common;

use common::TestContext;
use predicates::prelude::*;

const AUTH_BODY: &str = r#"{"access": "a1", "refresh": "r1",
    "user": {"id": 1, "username": "ada", "email": "ada@example.com", "role": "student"}}"#;

#[test]
fn login_stores_session_file() {
    let mut server = mockito::Server::new();
    let login = server
        .mock("POST", "/auth/login/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(AUTH_BODY)
        .expect(1)
        .create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());

    ctx.cli()
        .args(["login", "--username", "ada", "--password", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ada"));

    ctx.assert_session_exists();
    login.assert();
}

#[test]
fn login_failure_reports_backend_detail() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/auth/login/")
        .with_status(401)
        .with_body(r#"{"detail": "No active account found with the given credentials"}"#)
        .create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());

    ctx.cli()
        .args(["login", "--username", "ada", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active account found"));

    ctx.assert_session_not_exists();
}

#[test]
fn google_login_exchanges_id_token() {
    let mut server = mockito::Server::new();
    let google = server
        .mock("POST", "/auth/google/")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"id_token": "tok-123"}"#.to_string(),
        ))
        .with_status(200)
        .with_body(AUTH_BODY)
        .expect(1)
        .create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());

    ctx.cli()
        .args(["login", "--google", "--id-token", "tok-123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ada"));

    ctx.assert_session_exists();
    google.assert();
}

#[test]
fn register_creates_account_and_session() {
    let mut server = mockito::Server::new();
    let register = server
        .mock("POST", "/auth/register/")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"username": "ada", "confirm_password": "pw", "role": "student"}"#.to_string(),
        ))
        .with_status(201)
        .with_body(AUTH_BODY)
        .expect(1)
        .create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());

    ctx.cli()
        .args([
            "register",
            "--username",
            "ada",
            "--email",
            "ada@example.com",
            "--password",
            "pw",
            "--role",
            "student",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered and signed in as ada"));

    ctx.assert_session_exists();
    register.assert();
}

#[test]
fn logout_removes_session() {
    let ctx = TestContext::new();
    ctx.seed_session();

    ctx.cli().arg("logout").assert().success().stdout(predicate::str::contains("Signed out"));

    ctx.assert_session_not_exists();
}

#[test]
fn authenticated_commands_require_login() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

#[test]
fn failed_refresh_clears_credentials() {
    let mut server = mockito::Server::new();
    let stale = server
        .mock("GET", "/prompts/?page=1")
        .with_status(401)
        .with_body(r#"{"detail": "Given token not valid"}"#)
        .expect(1)
        .create();
    let refresh = server
        .mock("POST", "/auth/token/refresh/")
        .with_status(401)
        .with_body(r#"{"detail": "Token is invalid or expired"}"#)
        .expect(1)
        .create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());
    ctx.seed_session();

    ctx.cli()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Session expired"));

    ctx.assert_session_not_exists();
    stale.assert();
    refresh.assert();
}

#[test]
fn refreshed_token_is_persisted() {
    let mut server = mockito::Server::new();
    let _stale = server
        .mock("GET", "/prompts/?page=1")
        .match_header("authorization", "Bearer old-access")
        .with_status(401)
        .expect(1)
        .create();
    let _refresh = server
        .mock("POST", "/auth/token/refresh/")
        .with_status(200)
        .with_body(r#"{"access": "new-access"}"#)
        .expect(1)
        .create();
    let retried = server
        .mock("GET", "/prompts/?page=1")
        .match_header("authorization", "Bearer new-access")
        .with_status(200)
        .with_body(r#"{"count": 0, "next": null, "previous": null, "results": []}"#)
        .expect(1)
        .create();

    let mut ctx = TestContext::new();
    ctx.set_backend(server.url());
    ctx.seed_session();

    ctx.cli().arg("list").assert().success();

    retried.assert();
    let stored = std::fs::read_to_string(ctx.session_file()).unwrap();
    assert!(stored.contains("new-access"), "refreshed token should be persisted");
}
