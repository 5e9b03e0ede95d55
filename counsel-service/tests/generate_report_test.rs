//! `/api/generate_report` contract tests against mock providers.

mod common;

use common::TestApp;
use counsel_service::services::providers::mock::MockTextProvider;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;

const MOCK_REPORT: &str = "<h1>EASYSKILL CAREER ACADEMY</h1>\
<div class=\"styled-underline\"></div>\
<h2>1. Executive Profile Snapshot</h2><ul><li><strong>Analytical</strong> problem solver</li></ul>\
<h2>2. Top 3 Recommended Career Paths</h2><p>Role: Data Analyst</p>\
<h2>3. The 30-Day Action Plan</h2><ul><li>Complete the Google Data Analytics certificate</li></ul>\
<h2>4. Skill Gap Analysis</h2><ul><li>SQL fundamentals</li></ul>\
<footer><p>Contact Us: +91 908 154 5252</p></footer>";

fn unused_question_provider() -> Arc<MockTextProvider> {
    Arc::new(MockTextProvider::with_response("unused"))
}

#[tokio::test]
async fn generate_report_wraps_model_text() {
    let report_provider = Arc::new(MockTextProvider::with_response(MOCK_REPORT));
    let question_provider = unused_question_provider();
    let app = TestApp::spawn(question_provider.clone(), report_provider.clone()).await;
    let client = Client::new();

    let body = json!({
        "name": "Asha",
        "age": 23,
        "gender": "Female",
        "language": "English",
        "history": [
            { "question": "Where have you studied?", "answer": "B.Tech" }
        ]
    });

    let response = client
        .post(format!("{}/api/generate_report", app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let payload: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let report = payload["report"].as_str().expect("report must be a string");

    // Behavioral contract on the model, asserted post-hoc
    assert!(!report.contains("```"));
    assert!(!report.contains("<!DOCTYPE"));
    assert!(!report.contains("<html"));
    assert!(!report.contains("<body"));
    assert!(report.contains("EASYSKILL CAREER ACADEMY"));

    // The report provider served the call, not the question provider
    assert_eq!(report_provider.calls().len(), 1);
    assert!(question_provider.calls().is_empty());
}

#[tokio::test]
async fn report_prompt_carries_language_and_full_history() {
    let report_provider = Arc::new(MockTextProvider::with_response(MOCK_REPORT));
    let app = TestApp::spawn(unused_question_provider(), report_provider.clone()).await;
    let client = Client::new();

    let body = json!({
        "language": "Hindi",
        "history": [
            { "question": "Q1", "answer": "A1" },
            { "question": "Q2", "answer": "A2" },
            { "question": "Q3", "answer": "A3" }
        ]
    });

    client
        .post(format!("{}/api/generate_report", app.address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");

    let calls = report_provider.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].system_instruction.contains("strictly in Hindi."));

    let contents = &calls[0].contents;
    assert!(contents.starts_with("User's Q&A History:\n"));
    for pair in ["Q: Q1\nA: A1\n", "Q: Q2\nA: A2\n", "Q: Q3\nA: A3\n"] {
        assert!(contents.contains(pair), "missing pair {:?}", pair);
    }
    assert!(contents.ends_with("\nGenerate the final counseling report and course pitch."));
}

#[tokio::test]
async fn non_json_body_returns_400() {
    let app = TestApp::spawn(
        unused_question_provider(),
        Arc::new(MockTextProvider::with_response(MOCK_REPORT)),
    )
    .await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/generate_report", app.address))
        .header("content-type", "application/json")
        .body("[[[")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Invalid request format");
}

#[tokio::test]
async fn provider_failure_returns_generic_500() {
    let app = TestApp::spawn(unused_question_provider(), Arc::new(MockTextProvider::failing())).await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/generate_report", app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Failed to generate report.");
    assert!(body.get("details").is_none());
}
