//! REST API helpers shared by every CRUD screen.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Network`] since these
//! endpoints are only called from browser event handlers.
//!
//! CONVENTIONS
//! ===========
//! `GET {base}/{resource}?page=&limit=&search=` returns a page envelope,
//! `GET/PUT {base}/{resource}/{id}` read and update one record,
//! `POST {base}/{resource}` creates, and `POST {base}/{resource}/delete`
//! with `{ids}` deletes in bulk. Error bodies carry `{message}`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use engine::list::ListQuery;
use engine::value::RowId;
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{ApiError, Page, SubmitResponse};
#[cfg(feature = "hydrate")]
use super::types::DeleteRequest;

#[cfg(any(test, feature = "hydrate"))]
fn collection_url(base: &str, resource: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), resource.trim_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn item_url(base: &str, resource: &str, id: &RowId) -> String {
    format!("{}/{id}", collection_url(base, resource))
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_url(base: &str, resource: &str) -> String {
    format!("{}/delete", collection_url(base, resource))
}

/// Decode a success body; an empty body reads as `{}`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "{}" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn read<T: DeserializeOwned>(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
    let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::from_status(resp.status(), &text));
    }
    decode_body(&text)
}

#[cfg(not(feature = "hydrate"))]
fn unavailable<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

/// Fetch one page of `resource`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the envelope does not decode.
pub async fn fetch_list(base: &str, resource: &str, query: &ListQuery) -> Result<Page, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = collection_url(base, resource);
        read(gloo_net::http::Request::get(&url).query(query.params()).send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, resource, query);
        unavailable()
    }
}

/// Fetch selector options: the first `limit` records matching `search`.
///
/// # Errors
///
/// Same as [`fetch_list`].
pub async fn search(base: &str, resource: &str, search: Option<String>, limit: u32) -> Result<Vec<Value>, ApiError> {
    let query = ListQuery { page: 0, limit, search: search.unwrap_or_default(), seq: 0 };
    fetch_list(base, resource, &query).await.map(|page| page.data)
}

/// Fetch one record by id.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not JSON.
pub async fn fetch_one(base: &str, resource: &str, id: &RowId) -> Result<Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        read(gloo_net::http::Request::get(&item_url(base, resource, id)).send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, resource, id);
        unavailable()
    }
}

/// Create a record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn create(base: &str, resource: &str, body: &Value) -> Result<SubmitResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(&collection_url(base, resource))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(request.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, resource, body);
        unavailable()
    }
}

/// Replace a record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn update(base: &str, resource: &str, id: &RowId, body: &Value) -> Result<SubmitResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::put(&item_url(base, resource, id))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(request.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, resource, id, body);
        unavailable()
    }
}

/// Delete several records at once.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the backend rejects it.
pub async fn delete_many(base: &str, resource: &str, ids: &[RowId]) -> Result<SubmitResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = DeleteRequest { ids: ids.to_vec() };
        let request = gloo_net::http::Request::post(&delete_url(base, resource))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read(request.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, resource, ids);
        unavailable()
    }
}
