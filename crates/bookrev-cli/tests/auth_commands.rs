//! Integration tests for login, logout and status.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a temp BOOKREV_HOME directory for test isolation.
fn temp_home() -> TempDir {
    TempDir::new().expect("create temp bookrev home")
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

const TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.payload.signature";

async fn accepting_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"usernameOrEmail": "admin", "password": "admin123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Bad credentials"})),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_login_status_logout_flow() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = accepting_server().await;
    let session_path = home.path().join("session.json");

    cargo_bin_cmd!("bookrev")
        .env("BOOKREV_HOME", home.path())
        .env("BOOKREV_BASE_URL", server.uri())
        .args(["login", "--user", "admin", "--password", "admin123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&session_path).unwrap()).unwrap();
    assert_eq!(stored["jwt_token"], TOKEN);

    cargo_bin_cmd!("bookrev")
        .env("BOOKREV_HOME", home.path())
        .env("BOOKREV_BASE_URL", server.uri())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in (token eyJh...ture)"))
        .stdout(predicate::str::contains(TOKEN).not());

    cargo_bin_cmd!("bookrev")
        .env("BOOKREV_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));
    assert!(!session_path.exists());

    cargo_bin_cmd!("bookrev")
        .env("BOOKREV_HOME", home.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));
}

#[tokio::test]
async fn test_rejected_login_keeps_session_absent() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = accepting_server().await;

    cargo_bin_cmd!("bookrev")
        .env("BOOKREV_HOME", home.path())
        .env("BOOKREV_BASE_URL", server.uri())
        .args(["login", "--user", "admin", "--password", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Login failed for 'admin'"))
        .stderr(predicate::str::contains("Bad credentials"));

    assert!(!home.path().join("session.json").exists());
}

#[tokio::test]
async fn test_login_prompts_for_password_on_stdin() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let home = temp_home();
    let server = accepting_server().await;

    cargo_bin_cmd!("bookrev")
        .env("BOOKREV_HOME", home.path())
        .args(["--base-url", &server.uri(), "login", "--user", "admin"])
        .write_stdin("admin123\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Password:"))
        .stdout(predicate::str::contains("Logged in as admin"));
}

#[test]
fn test_login_with_empty_password_sends_nothing() {
    let home = temp_home();

    // Nothing listens here; a request would fail with a connection error.
    cargo_bin_cmd!("bookrev")
        .env("BOOKREV_HOME", home.path())
        .args(["--base-url", "http://127.0.0.1:9", "login", "--user", "admin"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("password is required"));
}

#[test]
fn test_logout_without_session_is_ok() {
    let home = temp_home();

    cargo_bin_cmd!("bookrev")
        .env("BOOKREV_HOME", home.path())
        .arg("logout")
        .assert()
        .success();
}
