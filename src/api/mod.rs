//! REST Service Layer
//!
//! Thin wrappers over the server API, organized by domain. Every JSON call
//! goes through `fetch`, which unwraps the `{status, data}` envelope and turns
//! any failure into a `ServiceError`.

mod account;
mod auth;
mod clients;
mod profile;
mod reporting;
mod time;

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use timesheet_core::models::Envelope;
use timesheet_core::{ErrorCode, ServiceError};
use web_sys::{RequestCache, RequestCredentials};

use crate::config::api_url;

pub use account::*;
pub use auth::*;
pub use clients::*;
pub use profile::*;
pub use reporting::*;
pub use time::*;

const JSON_CONTENT_TYPE: &str = "application/json";
const CSV_CONTENT_TYPE: &str = "text/csv";

// ========================
// Request plumbing
// ========================

fn builder(method: Method, path: &str, content_type: &str) -> RequestBuilder {
    RequestBuilder::new(&api_url(path))
        .method(method)
        .credentials(RequestCredentials::Include)
        .cache(RequestCache::NoStore)
        .header("Content-Type", content_type)
}

async fn send(request: Result<Request, gloo_net::Error>) -> Result<Response, ServiceError> {
    let request = request.map_err(|e| ServiceError::fetch_failed(e.to_string()))?;
    request
        .send()
        .await
        .map_err(|e| ServiceError::fetch_failed(e.to_string()))
}

fn content_type(response: &Response) -> String {
    response.headers().get("content-type").unwrap_or_default()
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ServiceError> {
    let content_type = content_type(&response);
    if !content_type.contains(JSON_CONTENT_TYPE) {
        return Err(ServiceError::invalid_content_type(&content_type));
    }

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ServiceError::invalid_json(e.to_string()))?;
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_str(&text).map_err(|e| ServiceError::invalid_json(e.to_string()))?;

    if status != 200 || envelope.is_error() {
        return Err(ServiceError::from_json(&text, status));
    }

    match envelope.data {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(data) => serde_json::from_value(data)
            .map(Some)
            .map_err(|e| ServiceError::invalid_json(e.to_string())),
    }
}

/// GET returning the envelope's `data`
pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> Result<Option<T>, ServiceError> {
    let response = send(builder(Method::GET, path, JSON_CONTENT_TYPE).build()).await?;
    read_envelope(response).await
}

/// Request with a JSON body returning the envelope's `data`
pub(crate) async fn fetch<B, T>(method: Method, path: &str, body: &B) -> Result<Option<T>, ServiceError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = send(builder(method, path, JSON_CONTENT_TYPE).json(body)).await?;
    read_envelope(response).await
}

/// Request without a body
pub(crate) async fn fetch_empty<T: DeserializeOwned>(method: Method, path: &str) -> Result<Option<T>, ServiceError> {
    let response = send(builder(method, path, JSON_CONTENT_TYPE).build()).await?;
    read_envelope(response).await
}

/// GET a CSV export as raw bytes
pub(crate) async fn fetch_csv(path: &str) -> Result<Vec<u8>, ServiceError> {
    let response = send(builder(Method::GET, path, CSV_CONTENT_TYPE).build()).await?;

    let content_type = content_type(&response);
    if !content_type.contains(CSV_CONTENT_TYPE) {
        return Err(ServiceError::invalid_content_type(&content_type));
    }

    let status = response.status();
    if status != 200 {
        return Err(ServiceError::new(
            ErrorCode::Other(status.to_string()),
            status,
            "Failed to download CSV",
        ));
    }

    response
        .binary()
        .await
        .map_err(|e| ServiceError::fetch_failed(e.to_string()))
}

/// Unwrap a response whose `data` the caller cannot do without
pub(crate) fn required<T>(data: Option<T>) -> Result<T, ServiceError> {
    data.ok_or_else(|| ServiceError::invalid_json("Response is missing data"))
}
