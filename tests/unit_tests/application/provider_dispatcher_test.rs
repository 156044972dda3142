use std::sync::Arc;
use std::time::Duration;

use erudio::application::ports::{LlmClient, LlmClientError};
use erudio::application::services::{DispatchError, ProviderDispatcher};
use erudio::domain::TurnMessage;

use crate::helpers::{Script, ScriptedLlmClient};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);

fn history() -> Vec<TurnMessage> {
    vec![TurnMessage::user("Explain photosynthesis")]
}

fn dispatcher(backends: &[Arc<ScriptedLlmClient>], timeout: Duration) -> ProviderDispatcher {
    let backends: Vec<Arc<dyn LlmClient>> = backends
        .iter()
        .map(|b| Arc::clone(b) as Arc<dyn LlmClient>)
        .collect();
    ProviderDispatcher::new(backends, timeout)
}

#[tokio::test]
async fn given_failing_then_empty_then_ok_backends_when_dispatching_then_returns_ok_and_stops() {
    let a = Arc::new(ScriptedLlmClient::failing(
        "a",
        LlmClientError::ApiRequestFailed("boom".to_string()),
    ));
    let b = Arc::new(ScriptedLlmClient::replying("b", ""));
    let c = Arc::new(ScriptedLlmClient::replying("c", "ok"));
    let d = Arc::new(ScriptedLlmClient::replying("d", "never"));
    let dispatcher = dispatcher(&[a.clone(), b.clone(), c.clone(), d.clone()], TEST_TIMEOUT);

    let reply = dispatcher.dispatch(&history(), "system").await.unwrap();

    assert_eq!(reply, "ok");
    assert_eq!(a.calls(), 1);
    assert_eq!(b.calls(), 1);
    assert_eq!(c.calls(), 1);
    assert_eq!(d.calls(), 0);
}

#[tokio::test]
async fn given_all_backends_fail_when_dispatching_then_provider_exhausted_with_last_error() {
    let a = Arc::new(ScriptedLlmClient::failing("a", LlmClientError::RateLimited));
    let b = Arc::new(ScriptedLlmClient::failing(
        "b",
        LlmClientError::InvalidResponse("no candidates".to_string()),
    ));
    let dispatcher = dispatcher(&[a, b], TEST_TIMEOUT);

    let error = dispatcher.dispatch(&history(), "system").await.unwrap_err();

    assert!(matches!(error, DispatchError::ProviderExhausted { .. }));
    assert!(matches!(
        error.last_error(),
        Some(LlmClientError::InvalidResponse(msg)) if msg == "no candidates"
    ));
    assert_eq!(error.attempts().len(), 2);
    assert_eq!(error.attempts()[0].backend, "a");
    assert!(error.to_string().contains("no candidates"));
}

#[tokio::test]
async fn given_whitespace_only_replies_when_dispatching_then_treated_as_failures() {
    let a = Arc::new(ScriptedLlmClient::replying("a", "   \n\t"));
    let dispatcher = dispatcher(&[a.clone()], TEST_TIMEOUT);

    let error = dispatcher.dispatch(&history(), "system").await.unwrap_err();

    assert!(matches!(error.last_error(), Some(LlmClientError::EmptyResponse)));
    assert_eq!(a.calls(), 1);
}

#[tokio::test]
async fn given_stalled_backend_when_dispatching_then_times_out_and_falls_through() {
    let slow = Arc::new(ScriptedLlmClient::new(
        "slow",
        Script::Stall(Duration::from_secs(30)),
    ));
    let fast = Arc::new(ScriptedLlmClient::replying("fast", "answer"));
    let dispatcher = dispatcher(&[slow.clone(), fast.clone()], Duration::from_millis(50));

    let reply = dispatcher.dispatch(&history(), "system").await.unwrap();

    assert_eq!(reply, "answer");
    assert_eq!(slow.calls(), 1);
    assert_eq!(fast.calls(), 1);
}

#[tokio::test]
async fn given_no_backends_when_dispatching_then_returns_no_backends() {
    let dispatcher = ProviderDispatcher::new(Vec::new(), TEST_TIMEOUT);

    let error = dispatcher.dispatch(&history(), "system").await.unwrap_err();

    assert!(matches!(error, DispatchError::NoBackends));
    assert!(error.last_error().is_none());
}

#[tokio::test]
async fn given_backend_when_dispatching_then_receives_history_and_instruction_verbatim() {
    let a = Arc::new(ScriptedLlmClient::replying("a", "reply"));
    let dispatcher = dispatcher(&[a.clone()], TEST_TIMEOUT);
    let history = vec![
        TurnMessage::user("q1"),
        TurnMessage::assistant("a1"),
        TurnMessage::user("q2"),
    ];

    dispatcher.dispatch(&history, "be brief").await.unwrap();

    assert_eq!(a.last_history(), Some(history));
    assert_eq!(a.last_instruction().as_deref(), Some("be brief"));
}

#[test]
fn given_backends_when_listing_names_then_keeps_configured_order() {
    let dispatcher = dispatcher(
        &[
            Arc::new(ScriptedLlmClient::replying("custom", "x")),
            Arc::new(ScriptedLlmClient::replying("gemini:gemini-2.0-flash", "x")),
        ],
        TEST_TIMEOUT,
    );

    assert_eq!(
        dispatcher.backend_names(),
        vec!["custom", "gemini:gemini-2.0-flash"]
    );
}
