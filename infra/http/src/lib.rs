//! # HTTP gateway
//!
//! [`HttpGateway`] talks JSON to the car backend over `reqwest`:
//!
//! | call              | request                   |
//! |-------------------|---------------------------|
//! | `fetch_features`  | `GET  {base}/api/features` |
//! | `fetch_cars`      | `GET  {base}/api/cars`     |
//! | `fetch_car`       | `GET  {base}/api/cars/{id}`|
//! | `create_car`      | `POST {base}/api/cars`     |
//! | `update_car`      | `PUT  {base}/api/cars/{id}`|
//!
//! Every failure becomes a [`GatewayError`] whose message is what the user gets to see:
//! the backend's own error text when it sent one, otherwise the status reason.

mod error;

pub use crate::error::{HttpGatewayError, HttpGatewayErrorExt};
use bolt_kernel::domain::config::ApiConfig;
use bolt_kernel::domain::constants::{CARS_ENDPOINT, FEATURES_ENDPOINT};
use bolt_kernel::domain::{CarDraft, CarId, CarRecord, Feature};
use bolt_kernel::gateway::{CarsGateway, GatewayError};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Builds a client with the configured timeout.
    ///
    /// # Errors
    /// [`HttpGatewayError::InvalidBaseUrl`] unless the base URL is `http://` or `https://`,
    /// [`HttpGatewayError::Client`] if the TLS backend cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, HttpGatewayError> {
        let invalid = || HttpGatewayError::InvalidBaseUrl { url: config.base_url.clone(), context: None };
        let base_url = Url::parse(config.base_url.trim().trim_end_matches('/')).map_err(|_| invalid())?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(invalid());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .context("building reqwest client")?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Joins an endpoint onto the base URL. The car id, when given, is pushed as a single
    /// percent-encoded path segment.
    fn url(&self, endpoint: &str, id: Option<&CarId>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(endpoint.split('/').filter(|s| !s.is_empty()));
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        body: Option<&CarDraft>,
    ) -> Result<Response, GatewayError> {
        debug!(%method, %url, "Gateway request");
        let path = url.path().to_owned();

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(draft) = body {
            request = request.json(draft);
        }

        let response = request.send().await.map_err(|err| GatewayError::Transport {
            message: transport_message(&err).into(),
            context: Some(format!("{method} {path}").into()),
        })?;

        let status = response.status();
        debug!(%method, %url, status = status.as_u16(), "Gateway response");
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(status_error(status, &body))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        let path = url.path().to_owned();
        let response = self.send(Method::GET, url, None).await?;
        let body = response.text().await.map_err(|err| GatewayError::Transport {
            message: transport_message(&err).into(),
            context: Some(format!("GET {path}").into()),
        })?;

        serde_json::from_str(&body).map_err(|err| GatewayError::Decode {
            message: format!("Unexpected response from the server: {err}").into(),
            context: Some(format!("GET {path}").into()),
        })
    }
}

impl CarsGateway for HttpGateway {
    async fn fetch_features(&self) -> Result<Vec<Feature>, GatewayError> {
        self.get_json(self.url(FEATURES_ENDPOINT, None)).await
    }

    async fn fetch_cars(&self) -> Result<Vec<CarRecord>, GatewayError> {
        self.get_json(self.url(CARS_ENDPOINT, None)).await
    }

    async fn fetch_car(&self, id: &CarId) -> Result<CarRecord, GatewayError> {
        self.get_json(self.url(CARS_ENDPOINT, Some(id))).await
    }

    async fn create_car(&self, draft: &CarDraft) -> Result<(), GatewayError> {
        self.send(Method::POST, self.url(CARS_ENDPOINT, None), Some(draft)).await.map(drop)
    }

    async fn update_car(&self, id: &CarId, draft: &CarDraft) -> Result<(), GatewayError> {
        self.send(Method::PUT, self.url(CARS_ENDPOINT, Some(id)), Some(draft)).await.map(drop)
    }
}

fn transport_message(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "The server took too long to respond".to_owned()
    } else if err.is_connect() {
        "Could not reach the server".to_owned()
    } else {
        err.to_string()
    }
}

/// Maps a non-success response. The message prefers the backend's `error`/`message`
/// JSON field, then the raw body, then the status reason.
fn status_error(status: StatusCode, body: &str) -> GatewayError {
    let message = backend_message(body)
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    if status == StatusCode::NOT_FOUND {
        GatewayError::NotFound { message: message.into(), context: None }
    } else {
        GatewayError::Status { status: status.as_u16(), message: message.into(), context: None }
    }
}

fn backend_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let field = serde_json::from_str::<serde_json::Value>(body).ok().and_then(|json| {
        ["error", "message"]
            .iter()
            .find_map(|key| json.get(key).and_then(serde_json::Value::as_str).map(str::to_owned))
    });

    Some(field.unwrap_or_else(|| body.to_owned()))
}
