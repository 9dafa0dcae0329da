//! HTTP client for the upstream `/pokemon` endpoints.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::UpstreamConfig;
use crate::observability::metrics;
use crate::pokemon::model::PokemonList;
use crate::upstream::types::PokemonDetail;
use crate::upstream::UpstreamError;

/// Upstream API client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Build a client for the configured base URL.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/pokemon?limit=&offset=`
    pub async fn list_pokemon(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<PokemonList, UpstreamError> {
        let request = self
            .http
            .get(format!("{}/pokemon", self.base_url))
            .query(&[("limit", limit), ("offset", offset)]);

        self.fetch_json("list", request).await
    }

    /// `GET {base}/pokemon/{id}`
    pub async fn get_pokemon(&self, id: i64) -> Result<PokemonDetail, UpstreamError> {
        let request = self.http.get(format!("{}/pokemon/{}", self.base_url, id));

        self.fetch_json("detail", request).await
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let result = Self::send(request).await;

        let outcome = match &result {
            Ok(_) => "success",
            Err(UpstreamError::NotFound) => "not_found",
            Err(UpstreamError::Decode(_)) => "decode_error",
            Err(_) => "unavailable",
        };
        metrics::record_upstream(endpoint, outcome);

        if let Err(e) = &result {
            tracing::debug!(endpoint, error = %e, "Upstream request failed");
        }
        result
    }

    async fn send<T>(request: reqwest::RequestBuilder) -> Result<T, UpstreamError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(UpstreamError::NotFound);
        }
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
