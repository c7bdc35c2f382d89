//! Upstream catalog access.
//!
//! `CatalogSource` is the seam between the lookup logic and the network:
//! `PokeApiClient` talks HTTP, tests plug in an in-memory source.

use crate::config::LookupConfig;
use crate::errors::{FetchError, FetchResult};
use crate::navigation::CanonicalKey;
use reqwest::{StatusCode, Url};
use schema::{DetailRecord, ResourceList, TypeRecord};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::debug;

pub trait CatalogSource: Send + Sync {
    /// `GET /pokemon?limit={limit}`
    fn fetch_listing(&self, limit: u32) -> impl Future<Output = FetchResult<ResourceList>> + Send;

    /// `GET /pokemon/{key}`
    fn fetch_detail(
        &self,
        key: &CanonicalKey,
    ) -> impl Future<Output = FetchResult<DetailRecord>> + Send;

    /// `GET /type/{name}`
    fn fetch_type(&self, type_name: &str) -> impl Future<Output = FetchResult<TypeRecord>> + Send;
}

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    api_base: Url,
}

impl PokeApiClient {
    pub fn new(config: &LookupConfig) -> FetchResult<Self> {
        let api_base = Url::parse(config.api_base.trim())
            .map_err(|_| FetchError::InvalidUrl(config.api_base.clone()))?;
        if api_base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(config.api_base.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, api_base })
    }

    /// Appends percent-encoded path segments to the API base.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn listing_url(&self, limit: u32) -> Url {
        let mut url = self.endpoint(&["pokemon"]);
        url.query_pairs_mut().append_pair("limit", &limit.to_string());
        url
    }

    pub fn detail_url(&self, key: &CanonicalKey) -> Url {
        self.endpoint(&["pokemon", key.as_str()])
    }

    pub fn type_url(&self, type_name: &str) -> Url {
        let type_name = type_name.trim().to_lowercase();
        self.endpoint(&["type", &type_name])
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, subject: &str) -> FetchResult<T> {
        debug!(%url, "requesting");
        let response = self.http.get(url.clone()).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        debug!(%url, bytes = body.len(), "response received");
        serde_json::from_slice(&body).map_err(|e| FetchError::Malformed(e.to_string()))
    }
}

impl CatalogSource for PokeApiClient {
    async fn fetch_listing(&self, limit: u32) -> FetchResult<ResourceList> {
        self.get_json(self.listing_url(limit), "listing").await
    }

    async fn fetch_detail(&self, key: &CanonicalKey) -> FetchResult<DetailRecord> {
        self.get_json(self.detail_url(key), key.as_str()).await
    }

    async fn fetch_type(&self, type_name: &str) -> FetchResult<TypeRecord> {
        self.get_json(self.type_url(type_name), type_name).await
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            FetchError::Network(err.to_string())
        }
    }
}
