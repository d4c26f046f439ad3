use assert_cmd::Command;
use axum::routing::post;
use axum::{Json, Router};
use moodflag_runtime::{RuntimeConfig, build_runtime};
use predicates::prelude::*;
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

fn moodflag() -> Command {
    let mut cmd = Command::cargo_bin("moodflag").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn answers_file(body: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{body}").unwrap();
    file
}

fn complete_answers() -> Value {
    json!({
        "Gender": "Female",
        "Country": "Canada",
        "Occupation": "Student",
        "self_employed": "No",
        "family_history": "Yes",
        "treatment": "No",
        "Days_Indoors": "Go out Every day",
        "Growing_Stress": "Maybe",
        "Changes_Habits": "No",
        "Mental_Health_History": "No",
        "Coping_Struggles": "No",
        "Work_Interest": "Yes",
        "Social_Weakness": "No",
        "mental_health_interview": "Maybe",
        "care_options": "Yes"
    })
}

fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Serves `/predict` from a background thread on its own runtime.
fn spawn_service(status: u16, reply: Value) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let rt = build_runtime(&RuntimeConfig::service().with_worker_threads(1)).unwrap();
        rt.block_on(async move {
            let status = axum::http::StatusCode::from_u16(status).unwrap();
            let app = Router::new()
                .route("/predict", post(move || async move { (status, Json(reply.clone())) }));
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    format!("http://{addr}")
}

#[test]
fn help_lists_the_options() {
    moodflag()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--answers"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--no-delay"));
}

#[test]
fn success_shows_badge_and_risk_message() {
    let base_url = spawn_service(200, json!({"prediction": 0}));
    let answers = answers_file(&complete_answers());

    moodflag()
        .args(["--no-delay", "--base-url", &base_url, "--answers"])
        .arg(answers.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Data"))
        .stdout(predicate::str::contains("Wait for it..."))
        .stdout(predicate::str::contains("[Success]"))
        .stdout(predicate::str::contains("High risk of mood swings detected."))
        .stdout(predicate::str::contains("Your well-being matters."));
}

#[test]
fn server_detail_is_an_outcome_not_a_crash() {
    let base_url = spawn_service(400, json!({"detail": "invalid country"}));
    let answers = answers_file(&complete_answers());

    moodflag()
        .args(["--no-delay", "--base-url", &base_url, "--answers"])
        .arg(answers.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: invalid country"))
        .stdout(predicate::str::contains("[Success]").not());
}

#[test]
fn unreachable_service_reports_connection_failure() {
    let answers = answers_file(&complete_answers());

    moodflag()
        .args(["--no-delay", "--base-url", &refused_base_url(), "--answers"])
        .arg(answers.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to connect to prediction API: "));
}

#[test]
fn prompts_accept_defaults_from_stdin() {
    moodflag()
        .args(["--no-delay", "--base-url", &refused_base_url()])
        .write_stdin("\n".repeat(15))
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/15] Gender"))
        .stdout(predicate::str::contains("Days_Indoors            | 1-14 days"))
        .stdout(predicate::str::contains("Failed to connect to prediction API"));
}

#[test]
fn closed_stdin_aborts_the_form() {
    moodflag()
        .args(["--base-url", &refused_base_url()])
        .write_stdin("2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Questionnaire was not completed"));
}

#[test]
fn missing_answers_file_fails_at_startup() {
    moodflag()
        .args(["--answers", "definitely/missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read answers file"));
}

#[test]
fn out_of_set_answer_is_rejected() {
    let mut body = complete_answers();
    body["Country"] = json!("Atlantis");
    let answers = answers_file(&body);

    moodflag()
        .args(["--base-url", &refused_base_url(), "--answers"])
        .arg(answers.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid answers in"));
}

#[test]
fn relative_base_url_fails_at_startup() {
    moodflag()
        .args(["--base-url", "moodflag-api.onrender.com"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to set up the prediction client"));
}

#[test]
fn env_override_sets_the_base_url() {
    let answers = answers_file(&complete_answers());

    moodflag()
        .env("MOODFLAG__PREDICTION__BASE_URL", "ftp://nowhere")
        .arg("--answers")
        .arg(answers.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be an absolute http(s) URL"));
}
