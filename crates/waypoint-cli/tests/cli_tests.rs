use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

/// Command with plain output against the given server
fn wp_cmd(server_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("wp").expect("Failed to find wp binary");
    cmd.env_remove("WAYPOINT_SERVER_URL")
        .args(["--no-color", "--server-url", server_url]);
    cmd
}

fn path_body(hours: &[f64]) -> Value {
    let milestones: Vec<Value> = hours
        .iter()
        .enumerate()
        .map(|(i, h)| {
            json!({
                "id": i + 1,
                "title": format!("Milestone {}", i + 1),
                "description": format!("Description {}", i + 1),
                "order": i,
                "estimated_hours": h,
                "resources": ["The Rust Book"],
                "completed": false,
            })
        })
        .collect();

    json!({
        "id": 1,
        "title": "Learn Rust",
        "description": "Systems programming from scratch",
        "experience_level": "beginner",
        "time_commitment": "5-10 hours/week",
        "milestones": milestones,
    })
}

#[test]
fn test_help_lists_commands() {
    Command::cargo_bin("wp")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("toggle"))
        .stdout(predicate::str::contains("--server-url"));
}

#[test]
fn test_blank_goal_rejected_before_network() {
    // Nothing listens here; reaching the network would fail differently
    wp_cmd("http://127.0.0.1:9")
        .args(["generate", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("goal"));
}

#[test]
fn test_invalid_server_url_is_rejected() {
    wp_cmd("ftp://example.com")
        .arg("health")
        .assert()
        .failure()
        .stderr(predicate::str::contains("http://"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_renders_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_json(json!({
            "goal": "Learn Rust",
            "experience_level": "intermediate",
            "time_commitment": "10-20 hours/week",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(path_body(&[10.0, 15.0, 20.0])))
        .expect(1)
        .mount(&server)
        .await;

    wp_cmd(&server.uri())
        .args(["generate", "Learn Rust", "--level", "intermediate", "--commitment", "10-20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated learning path with ID: 1"))
        .stdout(predicate::str::contains("**0/3** milestones completed, **45h** total"))
        .stdout(predicate::str::contains("### 1. ○ Milestone 1 (10h)"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_generate_surfaces_server_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "rate limited" })))
        .expect(1)
        .mount(&server)
        .await;

    wp_cmd(&server.uri())
        .args(["generate", "Learn Rust"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rate limited"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_and_missing_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/paths/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(path_body(&[2.0])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/paths/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    wp_cmd(&server.uri())
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Learn Rust"))
        .stdout(predicate::str::contains("What You'll Learn"));

    wp_cmd(&server.uri())
        .args(["show", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Learning path with ID 2 not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/paths"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    wp_cmd(&server.uri())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No learning paths found."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_toggle_patches_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/paths/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(path_body(&[10.0, 15.0, 20.0])))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/milestones/1"))
        .and(body_json(json!({ "completed": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "completed": true })))
        .expect(1)
        .mount(&server)
        .await;

    wp_cmd(&server.uri())
        .args(["toggle", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked 'Milestone 1' as complete"))
        .stdout(predicate::str::contains("33%"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_toggle_sync_failure_is_reported_not_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/paths/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(path_body(&[10.0, 10.0])))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    wp_cmd(&server.uri())
        .args(["toggle", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("as complete"))
        .stdout(predicate::str::contains("Could not save the change"))
        .stdout(predicate::str::contains("50%"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .mount(&server)
        .await;

    wp_cmd(&server.uri())
        .arg("health")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Server is healthy"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_interactive_session_generates_and_completes() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(path_body(&[10.0, 15.0, 20.0])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/milestones/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 2, "completed": true })))
        .expect(1)
        .mount(&server)
        .await;

    wp_cmd(&server.uri())
        .arg("session")
        .write_stdin("new\nLearn Rust\n\n\nexpand 2\ndone 2\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generating your learning path..."))
        .stdout(predicate::str::contains("Description 2"))
        .stdout(predicate::str::contains("### 2. ✓ Milestone 2"))
        .stdout(predicate::str::contains("**1/3** milestones completed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_interactive_session_shows_generation_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "detail": "rate limited" })))
        .expect(1)
        .mount(&server)
        .await;

    wp_cmd(&server.uri())
        .write_stdin("new\nLearn Rust\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: rate limited"))
        .stdout(predicate::str::contains("No learning path yet"));
}

#[test]
fn test_interactive_blank_goal_is_rejected() {
    wp_cmd("http://127.0.0.1:9")
        .write_stdin("new\n\n\n\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Describe what you want to learn"));
}
