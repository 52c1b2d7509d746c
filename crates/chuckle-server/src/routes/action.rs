use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use bytes::Bytes;
use chuckle::models::response::{ActionResult, SlashResponse};
use serde_json::Value;

// The action ignores its arguments, so anything that is not JSON is passed on as null
fn parse_args(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or_else(|_| {
        if !body.is_empty() {
            tracing::debug!(len = body.len(), "body is not JSON, invoking with null args");
        }
        Value::Null
    })
}

async fn invoke(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ActionResult>, ApiError> {
    let args = parse_args(&body);
    let result = state.action.invoke(&args).await?;
    tracing::info!(text_len = result.body.text.len(), "action invoked");
    Ok(Json(result))
}

// Slash command hosts post form-encoded fields and render the envelope's body directly
async fn slash_command(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SlashResponse>, ApiError> {
    let args = parse_args(&body);
    let result = state.action.invoke(&args).await?;
    tracing::info!("slash command answered");
    Ok(Json(result.body))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/invoke", post(invoke))
        .route("/slack", post(slash_command))
        .with_state(state)
}
