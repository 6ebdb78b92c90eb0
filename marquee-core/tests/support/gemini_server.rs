//! In-process stand-in for the Gemini `generateContent` endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// A request as the fake server saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: Value,
}

#[derive(Debug, Clone)]
struct FakeState {
    status: StatusCode,
    reply: Value,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

#[derive(Debug)]
pub struct FakeGemini {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl FakeGemini {
    /// Serves `reply` with `status` for every request.
    pub async fn start(status: StatusCode, reply: Value) -> anyhow::Result<Self> {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            status,
            reply,
            captured: Arc::clone(&captured),
        };

        let app = Router::new()
            .route("/v1beta/models/{*rest}", post(generate_content))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{addr}"),
            captured,
        })
    }

    /// Replies with a single candidate whose text is `payload` serialized.
    pub async fn with_json_text(payload: Value) -> anyhow::Result<Self> {
        Self::start(StatusCode::OK, candidate_text(&payload.to_string())).await
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

/// Wraps `text` in a `generateContent` response body.
pub fn candidate_text(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] }
        }]
    })
}

pub fn error_body(code: u16, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message } })
}

async fn generate_content(
    State(state): State<FakeState>,
    Path(rest): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let api_key = headers
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    state.captured.lock().unwrap().push(CapturedRequest {
        path: rest,
        api_key,
        body,
    });
    (state.status, Json(state.reply.clone()))
}
