use std::sync::{Arc, Mutex};

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::Value;
use tokio::net::TcpListener;

/// What a stub endpoint saw on its last call.
#[derive(Default, Clone)]
pub struct Captured {
    pub body: Option<Value>,
    pub headers: Option<HeaderMap>,
}

/// Serves `status` + `response` on `path` from an ephemeral local port and
/// returns the base URL together with the captured request.
pub async fn spawn_stub(
    path: &str,
    status: StatusCode,
    response: Value,
) -> (String, Arc<Mutex<Captured>>) {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let sink = captured.clone();

    let app = Router::new().route(
        path,
        post(move |headers: HeaderMap, axum::Json(body): axum::Json<Value>| {
            let sink = sink.clone();
            let response = response.clone();
            async move {
                {
                    let mut guard = sink.lock().unwrap();
                    guard.body = Some(body);
                    guard.headers = Some(headers);
                }
                (status, axum::Json(response))
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), captured)
}
