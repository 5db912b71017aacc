//! API endpoint handlers.
//!
//! Every handler answers through an [`EnvelopeBuilder`], so clients always
//! get the same body shape and decide themselves (via `httpCodes`) whether
//! the transport status should follow the logical code.

use axum::{body::Bytes, extract::State, http::Uri};
use serde_json::{json, Value};

use crate::envelope::{EnvelopeBuilder, ResponseEnvelope, StatusLineSink};
use crate::http::extract::ApiContext;
use crate::http::response::ApiResponse;
use crate::http::server::AppState;

/// `GET /api/status`
pub async fn status(State(state): State<AppState>, ctx: ApiContext) -> ApiResponse {
    let mut builder = ctx.builder();
    let envelope = status_envelope(&state, &mut builder);
    state.respond(envelope, builder.into_sink())
}

/// `GET /api/summary`
///
/// Calls the status operation as an internal invocation and nests its
/// envelope. The nested call never touches the status line.
pub async fn summary(State(state): State<AppState>, ctx: ApiContext) -> ApiResponse {
    let inner_ctx = ApiContext::internal(ctx.request.clone());
    let mut inner = inner_ctx.builder();
    let status = status_envelope(&state, &mut inner);

    let mut builder = ctx.builder();
    let envelope = match serde_json::to_value(&status) {
        Ok(status) => builder.success("Summary", Some(json!({ "status": status }))),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode nested status envelope");
            builder.error("Failed to build summary", None)
        }
    };
    state.respond(envelope, builder.into_sink())
}

/// `POST /api/echo`
pub async fn echo(State(state): State<AppState>, ctx: ApiContext, body: Bytes) -> ApiResponse {
    let mut builder = ctx.builder();
    let envelope = match serde_json::from_slice::<Value>(&body) {
        Ok(payload) => builder.created("Payload accepted", Some(payload)),
        Err(e) => {
            tracing::warn!(error = %e, "Rejected echo payload");
            builder.error("Invalid JSON payload", None)
        }
    };
    state.respond(envelope, builder.into_sink())
}

/// `GET /api/forbidden`
pub async fn forbidden(State(state): State<AppState>, ctx: ApiContext) -> ApiResponse {
    let mut builder = ctx.builder();
    let envelope = builder.forbidden("Access denied", None);
    state.respond(envelope, builder.into_sink())
}

/// Fallback for every unmatched path.
pub async fn not_found(State(state): State<AppState>, ctx: ApiContext, uri: Uri) -> ApiResponse {
    tracing::debug!(path = %uri.path(), "No endpoint matched");
    let mut builder = ctx.builder();
    let envelope = builder.not_found("Endpoint not found", Some(json!({ "path": uri.path() })));
    state.respond(envelope, builder.into_sink())
}

fn status_envelope<S: StatusLineSink>(
    state: &AppState,
    builder: &mut EnvelopeBuilder<'_, S>,
) -> ResponseEnvelope {
    builder.success(
        "Service is running",
        Some(json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "uptime_secs": state.started_at.elapsed().as_secs(),
        })),
    )
}
