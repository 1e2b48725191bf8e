use assert_cmd::Command;
use assert_cmd::cargo;
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn venues() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("venues"));
    cmd.env_remove("VENUES_ORIGIN").env_remove("VENUES_TIMEOUT_MS");
    cmd
}

#[test]
fn test_exchange_relative_to_origin() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api/vue")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"foo": 1})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "success", "received": true}"#)
        .create();

    venues()
        .arg("--origin")
        .arg(server.url())
        .arg("exchange")
        .arg("--data")
        .arg(r#"{"foo": 1}"#)
        .assert()
        .success()
        .stdout(predicates::str::contains(r#""status": "success""#))
        .stdout(predicates::str::contains(r#""received": true"#));

    mock.assert();
}

#[test]
fn test_exchange_origin_from_env() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api/vue")
        .match_body(Matcher::Json(json!({})))
        .with_status(200)
        .with_body("done")
        .create();

    venues()
        .env("VENUES_ORIGIN", server.url())
        .arg("exchange")
        .assert()
        .success()
        .stdout("done\n");

    mock.assert();
}

#[test]
fn test_exchange_base_url_override() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api/vue")
        .match_body(Matcher::Json(json!({"venue": "hall"})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok": true}"#)
        .create();

    // The origin is unreachable; only the override can succeed.
    venues()
        .arg("--origin")
        .arg("http://127.0.0.1:9")
        .arg("exchange")
        .arg("--base-url")
        .arg(server.url())
        .arg("--data")
        .arg(r#"{"venue": "hall"}"#)
        .assert()
        .success()
        .stdout(predicates::str::contains(r#""ok": true"#));

    mock.assert();
}

#[test]
fn test_exchange_payload_from_file() {
    let mut server = Server::new();
    let dir = tempdir().unwrap();
    let payload = dir.path().join("payload.json");
    std::fs::write(&payload, r#"{"items": [1, 2, 3]}"#).unwrap();

    let mock = server
        .mock("POST", "/api/vue")
        .match_body(Matcher::Json(json!({"items": [1, 2, 3]})))
        .with_status(200)
        .create();

    venues()
        .arg("--origin")
        .arg(server.url())
        .arg("exchange")
        .arg("--data-file")
        .arg(&payload)
        .assert()
        .success()
        .stdout("null\n");

    mock.assert();
}

#[test]
fn test_exchange_server_error_fails() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/api/vue")
        .with_status(500)
        .expect(1)
        .create();

    venues()
        .arg("--origin")
        .arg(server.url())
        .arg("exchange")
        .assert()
        .failure()
        .stderr(predicates::str::contains("500"));

    mock.assert();
}

#[test]
fn test_exchange_invalid_json_fails() {
    venues()
        .arg("exchange")
        .arg("--data")
        .arg("{not json")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to parse --data as JSON"));
}

#[test]
fn test_exchange_invalid_origin_fails() {
    venues()
        .arg("--origin")
        .arg("not a url")
        .arg("exchange")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Invalid origin"));
}

#[test]
fn test_delay_waits() {
    let start = Instant::now();
    venues().arg("delay").arg("200").assert().success();
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[test]
fn test_delay_zero() {
    venues().arg("delay").arg("0").assert().success().stdout("");
}
