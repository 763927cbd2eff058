//! API handlers

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::AppState;
use crate::topic::{StreamPath, TopicName};

const STREAM_PATH_HINT: &str = "URLs should be of the form /<namespace>/<stream-name>\n";

/// Provision a stream
///
/// Maps `PUT /<namespace>/<stream-name>` to the coordinates a client needs:
/// the configured gateway address and the fully-qualified topic backing the
/// stream. Registered as the router fallback so every path lands here.
pub async fn provision(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, (StatusCode, String)> {
    if method != Method::PUT {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    }

    let stream = StreamPath::parse(uri.path())
        .map_err(|_| (StatusCode::BAD_REQUEST, STREAM_PATH_HINT.to_string()))?;

    let topic = TopicName::for_stream(state.tenant(), state.namespace(), &stream);

    tracing::info!(%topic, "Reported topic for provisioned stream");

    Ok(Json(ProvisionResponse {
        gateway: state.gateway().to_string(),
        topic: topic.to_string(),
    })
    .into_response())
}

#[derive(Debug, Serialize)]
pub struct ProvisionResponse {
    pub gateway: String,
    pub topic: String,
}
