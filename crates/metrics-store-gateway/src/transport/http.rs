//! `/metrics` HTTP handler.
//!
//! GET lists every stored record, POST stores one record, anything else is
//! 405. The Store is never touched when a guard rejects the request.

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::json;

use metrics_store_core::error::{ClientCode, MetricsStoreError};

use crate::app_state::AppState;

pub const ALLOW_METHODS: &str = "POST, GET";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP rendering of [`MetricsStoreError`].
#[derive(Debug)]
pub struct ApiError(pub MetricsStoreError);

impl From<MetricsStoreError> for ApiError {
    fn from(e: MetricsStoreError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let status = match code {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ClientCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(json!({
            "error": code.as_str(),
            "message": self.0.client_message(),
        }));

        let mut res = (status, body).into_response();
        if status == StatusCode::METHOD_NOT_ALLOWED {
            res.headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(ALLOW_METHODS));
        }
        res
    }
}

#[derive(Serialize)]
struct Created<'a> {
    id: &'a str,
    message: String,
}

pub async fn metrics_endpoint(
    State(app): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Body,
) -> Result<Response, ApiError> {
    match method {
        Method::GET => list_metrics(&app),
        Method::POST => create_metric(&app, &headers, body).await,
        other => {
            tracing::debug!(method = %other, "unsupported request method");
            Err(MetricsStoreError::MethodNotAllowed.into())
        }
    }
}

fn list_metrics(app: &AppState) -> Result<Response, ApiError> {
    tracing::debug!("handling GET request");

    let body = app.metrics().list().map_err(|e| {
        tracing::error!(error = %e, "GET - could not encode records");
        e
    })?;

    Ok(json_response(StatusCode::OK, body))
}

async fn create_metric(app: &AppState, headers: &HeaderMap, body: Body) -> Result<Response, ApiError> {
    tracing::debug!("handling POST request");

    check_content_type(headers)?;
    let body = read_body(headers, body, app.max_request_body_size()).await?;

    let id = app.metrics().create(&body).map_err(|e| {
        if e.client_code() == ClientCode::BadRequest {
            tracing::warn!(error = %e, "POST - rejected request body");
        }
        e
    })?;

    let created = Created {
        id: &id,
        message: format!("New entry added to the data store with id - {id}"),
    };
    // The entry is committed; a 201 goes out even if the body can't be built.
    let body = serde_json::to_vec_pretty(&created).unwrap_or_else(|e| {
        tracing::error!(error = %e, %id, "POST - could not encode 201 body");
        Vec::new()
    });
    tracing::debug!(%id, "POST - entry created");

    Ok(json_response(StatusCode::CREATED, body))
}

/// An absent (or empty) Content-Type is accepted; any other value must be
/// exactly `application/json`.
fn check_content_type(headers: &HeaderMap) -> Result<(), MetricsStoreError> {
    let Some(ct) = headers.get(header::CONTENT_TYPE) else {
        return Ok(());
    };
    if ct.is_empty() || ct.as_bytes() == JSON_CONTENT_TYPE.as_bytes() {
        return Ok(());
    }

    tracing::debug!(content_type = ?ct, "POST - unsupported content type");
    Err(MetricsStoreError::UnsupportedMediaType(
        "Content-Type header is not application/json".into(),
    ))
}

async fn read_body(headers: &HeaderMap, body: Body, limit: usize) -> Result<Bytes, MetricsStoreError> {
    let declared = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    if declared.is_some_and(|n| n > limit as u64) {
        return Err(MetricsStoreError::BadRequest(
            "error parsing request body: request body too large".into(),
        ));
    }

    to_bytes(body, limit)
        .await
        .map_err(|e| MetricsStoreError::BadRequest(format!("error parsing request body: {e}")))
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response()
}
