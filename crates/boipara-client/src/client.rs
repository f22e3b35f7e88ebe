//! HTTP client for the marketplace backend's location and shop endpoints.
//!
//! Wraps `reqwest` with typed responses and one error taxonomy. Requests are
//! plain request/response: no retry, no backoff.

use std::time::Duration;

use boipara_core::{AppConfig, LocationCatalog, LocationRecord, NewShop, Shop};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::types::Payload;

const LOCATIONS_PATH: &str = "locations";
const SHOPS_PATH: &str = "shops";

/// Client for the backend REST API.
///
/// Use [`BackendClient::from_config`] in the binary or
/// [`BackendClient::with_base_url`] to point at a mock server in tests.
pub struct BackendClient {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl BackendClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ClientError::InvalidBaseUrl`] if the configured
    /// base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout(),
            &config.user_agent,
            config.api_token.as_deref(),
        )
    }

    /// Creates a client with an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`ClientError::InvalidBaseUrl`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
        api_token: Option<&str>,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `Url::join` appends to the path
        // instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                base_url: base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            api_token: api_token.map(str::to_owned),
        })
    }

    /// Fetches the full location list.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure.
    /// - [`ClientError::NotFound`] / [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Api`] if the backend reports `"success": false`.
    /// - [`ClientError::Deserialize`] if the body is not a location list.
    pub async fn fetch_locations(&self) -> Result<Vec<LocationRecord>, ClientError> {
        let url = self.build_url(LOCATIONS_PATH)?;
        let locations: Vec<LocationRecord> =
            self.send_json(self.request(Method::GET, &url)).await?;
        tracing::debug!(count = locations.len(), "fetched locations");
        Ok(locations)
    }

    /// Fetches the location list into a [`LocationCatalog`].
    ///
    /// A failed fetch becomes [`LocationCatalog::Failed`] and is logged once;
    /// it is not retried.
    pub async fn load_catalog(&self) -> LocationCatalog {
        let result = self.fetch_locations().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "failed to load locations");
        }
        LocationCatalog::from_fetch(result)
    }

    /// Fetches every shop visible to the caller.
    ///
    /// # Errors
    ///
    /// Same as [`BackendClient::fetch_locations`].
    pub async fn fetch_shops(&self) -> Result<Vec<Shop>, ClientError> {
        let url = self.build_url(SHOPS_PATH)?;
        let shops: Vec<Shop> = self.send_json(self.request(Method::GET, &url)).await?;
        tracing::debug!(count = shops.len(), "fetched shops");
        Ok(shops)
    }

    /// Creates a shop and returns the backend's stored copy.
    ///
    /// # Errors
    ///
    /// Same as [`BackendClient::fetch_locations`].
    pub async fn create_shop(&self, shop: &NewShop) -> Result<Shop, ClientError> {
        let url = self.build_url(SHOPS_PATH)?;
        let request = self.request(Method::POST, &url).json(shop);
        let created: Shop = self.send_json(request).await?;
        tracing::info!(
            shop_id = %created.id,
            shop_location_id = %shop.shop_location_id,
            "created shop"
        );
        Ok(created)
    }

    /// Resolves an endpoint path against the base URL.
    fn build_url(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    fn request(&self, method: Method, url: &Url) -> RequestBuilder {
        let request = self
            .client
            .request(method, url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Sends a request, maps non-2xx statuses to typed errors, and decodes
    /// the (possibly enveloped) JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        let url = response.url().to_string();
        tracing::debug!(%url, status = status.as_u16(), "backend response");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound { url });
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
                context: url.clone(),
                source: e,
            })?;
        Self::check_api_error(&value)?;

        let payload: Payload<T> =
            serde_json::from_value(value).map_err(|e| ClientError::Deserialize {
                context: url,
                source: e,
            })?;
        Ok(payload.into_inner())
    }

    /// Checks the top-level `"success"` flag some endpoints wrap responses in.
    fn check_api_error(body: &serde_json::Value) -> Result<(), ClientError> {
        if body.get("success").and_then(serde_json::Value::as_bool) == Some(false) {
            let msg = body
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(ClientError::Api(msg));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
