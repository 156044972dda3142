use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use erudio::application::ports::{LlmClient, LlmClientError};
use erudio::domain::TurnMessage;
use erudio::infrastructure::llm::GeminiClient;

use crate::helpers::spawn_stub;

const MODEL: &str = "gemini-2.0-flash";
const PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn client(base_url: String) -> GeminiClient {
    GeminiClient::new(
        Some(base_url),
        "test-key".to_string(),
        MODEL.to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn given_candidate_when_completing_then_returns_joined_parts() {
    let (base_url, _) = spawn_stub(
        PATH,
        StatusCode::OK,
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Plants "}, {"text": "convert light."}]}
            }]
        }),
    )
    .await;

    let reply = client(base_url)
        .complete(&[TurnMessage::user("Explain photosynthesis")], "system")
        .await
        .unwrap();

    assert_eq!(reply, "Plants convert light.");
}

#[tokio::test]
async fn given_history_when_completing_then_maps_assistant_to_model_and_sends_system_instruction() {
    let (base_url, captured) = spawn_stub(
        PATH,
        StatusCode::OK,
        json!({"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}),
    )
    .await;
    let history = vec![
        TurnMessage::user("q1"),
        TurnMessage::assistant("a1"),
        TurnMessage::from_wire("tool", "ignored"),
        TurnMessage::user("q2"),
    ];

    client(base_url).complete(&history, "be brief").await.unwrap();

    let captured = captured.lock().unwrap().clone();
    let body = captured.body.unwrap();
    assert_eq!(
        body["systemInstruction"]["parts"][0]["text"],
        json!("be brief")
    );
    let roles: Vec<&str> = body["contents"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["role"].as_str().unwrap())
        .collect();
    assert_eq!(roles, vec!["user", "model", "user"]);
    assert_eq!(body["contents"][1]["parts"][0]["text"], json!("a1"));
    assert_eq!(
        captured.headers.unwrap().get("x-goog-api-key").unwrap(),
        "test-key"
    );
}

#[tokio::test]
async fn given_rate_limit_status_when_completing_then_returns_rate_limited() {
    let (base_url, _) = spawn_stub(PATH, StatusCode::TOO_MANY_REQUESTS, json!({})).await;

    let result = client(base_url).complete(&[TurnMessage::user("hi")], "s").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_unknown_model_status_when_completing_then_returns_api_error() {
    let (base_url, _) = spawn_stub(
        PATH,
        StatusCode::NOT_FOUND,
        json!({"error": {"message": "model not found"}}),
    )
    .await;

    let result = client(base_url).complete(&[TurnMessage::user("hi")], "s").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(msg)) if msg.contains("404")));
}

#[tokio::test]
async fn given_no_candidates_when_completing_then_returns_invalid_response() {
    let (base_url, _) = spawn_stub(PATH, StatusCode::OK, json!({"candidates": []})).await;

    let result = client(base_url).complete(&[TurnMessage::user("hi")], "s").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[test]
fn given_model_when_constructed_then_name_includes_provider_and_model() {
    let client = client("http://localhost:1".to_string());

    assert_eq!(client.name(), "gemini:gemini-2.0-flash");
}
