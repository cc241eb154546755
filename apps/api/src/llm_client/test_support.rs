//! Local stand-in for the Responses API, shared by the client and collaborator tests.

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    routing::post,
    Router,
};
use serde_json::Value;

use crate::llm_client::LlmClient;

/// A successful Responses API reply whose message text is `text`.
pub fn message_response(text: &str) -> String {
    serde_json::json!({
        "output": [
            {
                "type": "reasoning",
                "summary": [{"type": "summary_text", "text": "Considered the request."}]
            },
            {
                "type": "message",
                "role": "assistant",
                "content": [{"type": "output_text", "text": text, "annotations": []}]
            }
        ],
        "usage": {"input_tokens": 12, "output_tokens": 7, "total_tokens": 19}
    })
    .to_string()
}

type Replies = Arc<Vec<(StatusCode, String)>>;
type Requests = Arc<Mutex<Vec<Value>>>;

/// Serves canned `(status, raw body)` replies in order, repeating the last one,
/// and records every request body it receives.
pub struct StubProvider {
    pub base_url: String,
    requests: Requests,
}

impl StubProvider {
    pub async fn spawn(replies: Vec<(StatusCode, String)>) -> Self {
        let requests: Requests = Arc::default();
        let state = (Arc::new(replies), requests.clone());

        async fn respond(
            State((replies, requests)): State<(Replies, Requests)>,
            body: Bytes,
        ) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
            let n = {
                let mut seen = requests.lock().unwrap();
                seen.push(serde_json::from_slice(&body).unwrap_or(Value::Null));
                seen.len() - 1
            };
            let (status, body) = replies[n.min(replies.len() - 1)].clone();
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }

        let app = Router::new()
            .route("/v1/responses", post(respond))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}/v1"),
            requests,
        }
    }

    pub fn client(&self, debug: bool) -> LlmClient {
        LlmClient::new("test-key".to_string(), debug)
            .unwrap()
            .with_base_url(&self.base_url)
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Request bodies received so far, oldest first.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}
