//! HTTP implementation of [`PathService`].

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{
    PathService,
    payload::{ErrorBody, HealthBody, PathPayload},
};
use crate::{
    error::{Result, WaypointError},
    models::{GenerationRequest, MilestoneId, MilestoneUpdate, PathId},
};

/// Path service client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPathService {
    base_url: String,
    http: Client,
}

impl HttpPathService {
    /// Creates a client for an already normalized base URL.
    ///
    /// Prefer [`ClientBuilder`](super::ClientBuilder), which validates the URL
    /// and applies the request timeout.
    pub(crate) fn new(base_url: String, http: Client) -> Self {
        Self { base_url, http }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl PathService for HttpPathService {
    async fn generate_path(&self, request: &GenerationRequest) -> Result<PathPayload> {
        let url = self.endpoint("/api/generate");
        debug!(
            "POST {url} goal={:?} level={} commitment={}",
            request.goal,
            request.experience_level.as_str(),
            request.time_commitment.as_str()
        );

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        decode(ensure_success(response).await?).await
    }

    async fn set_milestone_completion(&self, id: MilestoneId, completed: bool) -> Result<()> {
        let url = self.endpoint(&format!("/api/milestones/{id}"));
        debug!("PATCH {url} completed={completed}");

        let response = self
            .http
            .patch(&url)
            .json(&MilestoneUpdate { completed })
            .send()
            .await
            .map_err(transport_error)?;

        ensure_success(response).await.map(|_| ())
    }

    async fn list_paths(&self) -> Result<Vec<PathPayload>> {
        let url = self.endpoint("/api/paths");
        debug!("GET {url}");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        decode(ensure_success(response).await?).await
    }

    async fn get_path(&self, id: PathId) -> Result<PathPayload> {
        let url = self.endpoint(&format!("/api/paths/{id}"));
        debug!("GET {url}");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(WaypointError::PathNotFound { id });
        }
        decode(ensure_success(response).await?).await
    }

    async fn delete_path(&self, id: PathId) -> Result<()> {
        let url = self.endpoint(&format!("/api/paths/{id}"));
        debug!("DELETE {url}");

        let response = self.http.delete(&url).send().await.map_err(transport_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(WaypointError::PathNotFound { id });
        }
        ensure_success(response).await.map(|_| ())
    }

    async fn health(&self) -> Result<String> {
        let url = self.endpoint("/health");
        debug!("GET {url}");

        let response = self.http.get(&url).send().await.map_err(transport_error)?;
        let body: HealthBody = decode(ensure_success(response).await?).await?;
        Ok(body.status)
    }
}

fn transport_error(e: reqwest::Error) -> WaypointError {
    let message = if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        "could not connect to the server".to_string()
    } else {
        e.to_string()
    };

    WaypointError::Request {
        message,
        status: None,
        detail: None,
    }
}

/// Pass successful responses through; turn the rest into request errors
/// carrying the body's `detail` when present.
async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message());
    debug!("Server returned {status}: {body}");

    Err(WaypointError::Request {
        message: detail
            .clone()
            .unwrap_or_else(|| format!("server returned {status}")),
        status: Some(status.as_u16()),
        detail,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport_error)?;

    serde_json::from_str(&body).map_err(|e| {
        debug!("Malformed response body: {body}");
        WaypointError::Request {
            message: format!("malformed response: {e}"),
            status: Some(status),
            detail: None,
        }
    })
}
