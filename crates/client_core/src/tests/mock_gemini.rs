//! Local stand-in for the generateContent endpoint.

use std::{collections::HashMap, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use shared::protocol::GenerateContentResponse;
use tokio::{net::TcpListener, sync::Mutex};

use crate::gemini::GeminiConfig;

pub const MOCK_MODEL: &str = "test-model";

#[derive(Clone)]
pub enum MockReply {
    Json(StatusCode, serde_json::Value),
    Text(StatusCode, String),
    Delayed(Duration, serde_json::Value),
}

impl MockReply {
    pub fn model_text(text: &str) -> Self {
        Self::Json(StatusCode::OK, model_text_body(text))
    }
}

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub model_action: String,
    pub query: HashMap<String, String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct MockState {
    reply: MockReply,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockGemini {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockGemini {
    pub fn config(&self, api_key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_base_url: self.base_url.clone(),
            model: MOCK_MODEL.to_string(),
            api_key: api_key.map(str::to_string),
        }
    }

    pub async fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().await.clone()
    }
}

pub fn model_text_body(text: &str) -> serde_json::Value {
    serde_json::to_value(GenerateContentResponse::from_text(text)).expect("encode response")
}

async fn handle_generate(
    State(state): State<MockState>,
    Path(model_action): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.captured.lock().await.push(CapturedRequest {
        model_action,
        query,
        body,
    });

    match state.reply {
        MockReply::Json(status, value) => (status, Json(value)).into_response(),
        MockReply::Text(status, text) => (status, text).into_response(),
        MockReply::Delayed(delay, value) => {
            tokio::time::sleep(delay).await;
            Json(value).into_response()
        }
    }
}

pub async fn spawn_gemini_server(reply: MockReply) -> Result<MockGemini> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let captured = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        reply,
        captured: captured.clone(),
    };
    let app = Router::new()
        .route("/v1beta/models/*model_action", post(handle_generate))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(MockGemini {
        base_url: format!("http://{addr}/v1beta"),
        captured,
    })
}

/// Base URL of a port that was bound and released, so connects are refused.
pub async fn unreachable_base_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{addr}/v1beta"))
}
