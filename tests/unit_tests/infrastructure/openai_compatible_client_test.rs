use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;

use erudio::application::ports::{LlmClient, LlmClientError};
use erudio::domain::TurnMessage;
use erudio::infrastructure::llm::OpenAiCompatibleClient;

use crate::helpers::spawn_stub;

fn client(base_url: String, api_key: Option<&str>) -> OpenAiCompatibleClient {
    OpenAiCompatibleClient::new(
        "local".to_string(),
        base_url,
        api_key.map(str::to_string),
        "llama-3.1-8b-instruct".to_string(),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn given_choice_when_completing_then_returns_message_content() {
    let (base_url, _) = spawn_stub(
        "/v1/chat/completions",
        StatusCode::OK,
        json!({"choices": [{"message": {"role": "assistant", "content": "Hi there"}}]}),
    )
    .await;

    let reply = client(format!("{}/v1/", base_url), None)
        .complete(&[TurnMessage::user("hello")], "system")
        .await
        .unwrap();

    assert_eq!(reply, "Hi there");
}

#[tokio::test]
async fn given_history_when_completing_then_prepends_system_message_and_sends_bearer_key() {
    let (base_url, captured) = spawn_stub(
        "/chat/completions",
        StatusCode::OK,
        json!({"choices": [{"message": {"role": "assistant", "content": "ok"}}]}),
    )
    .await;
    let history = vec![TurnMessage::user("q1"), TurnMessage::assistant("a1")];

    client(base_url, Some("sk-local"))
        .with_sampling(Some(256), Some(0.2))
        .complete(&history, "be brief")
        .await
        .unwrap();

    let captured = captured.lock().unwrap().clone();
    let body = captured.body.unwrap();
    assert_eq!(body["model"], json!("llama-3.1-8b-instruct"));
    assert_eq!(body["max_tokens"], json!(256));
    assert_eq!(
        body["messages"],
        json!([
            {"role": "system", "content": "be brief"},
            {"role": "user", "content": "q1"},
            {"role": "assistant", "content": "a1"}
        ])
    );
    assert_eq!(
        captured.headers.unwrap().get("authorization").unwrap(),
        "Bearer sk-local"
    );
}

#[tokio::test]
async fn given_no_api_key_when_completing_then_omits_authorization_header() {
    let (base_url, captured) = spawn_stub(
        "/chat/completions",
        StatusCode::OK,
        json!({"choices": [{"message": {"role": "assistant", "content": "ok"}}]}),
    )
    .await;

    client(base_url, None)
        .complete(&[TurnMessage::user("q")], "s")
        .await
        .unwrap();

    let headers = captured.lock().unwrap().headers.clone().unwrap();
    assert!(headers.get("authorization").is_none());
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_returns_invalid_response() {
    let (base_url, _) = spawn_stub("/chat/completions", StatusCode::OK, json!({"choices": []})).await;

    let result = client(base_url, None).complete(&[TurnMessage::user("q")], "s").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_unreachable_endpoint_when_completing_then_returns_api_error() {
    let result = client("http://127.0.0.1:1".to_string(), None)
        .complete(&[TurnMessage::user("q")], "s")
        .await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}
