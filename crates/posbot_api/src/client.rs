//! HTTP client for the game-data API.

use crate::models::{ApiResponse, CorporationJson, ServerStatusJson, TypeJson};
use async_trait::async_trait;
use posbot_core::{NameSource, StarbaseDetails, StarbaseList, StarbaseSource};
use posbot_error::{FetchError, FetchErrorKind, PosbotResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

fn default_timeout_secs() -> u64 {
    90
}

/// Configuration for the API client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiClientConfig {
    /// Base URL of the game-data API
    pub base_url: String,
    /// Corporation API key ID
    pub key_id: String,
    /// Corporation API key verification code
    pub key_vcode: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Client for the corporation starbase and universe name endpoints.
///
/// One `reqwest` client with a per-request timeout; the API key is attached
/// to the corporation endpoints as query parameters, matching the upstream
/// auth scheme.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    key_id: String,
    key_vcode: String,
}

impl ApiClient {
    /// User agent sent with every request.
    pub const USER_AGENT: &'static str =
        concat!("POSbot v", env!("CARGO_PKG_VERSION"), " - github.com/morpheusxaut/posbot-rs");

    /// Build a client from configuration.
    pub fn new(config: &ApiClientConfig) -> PosbotResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| FetchError::new(FetchErrorKind::Transport(e.to_string())))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            key_id: config.key_id.clone(),
            key_vcode: config.key_vcode.clone(),
        })
    }

    /// Probe the game server status.
    ///
    /// Used once at startup so a dead upstream is caught before the first
    /// scheduled cycle.
    #[instrument(skip(self))]
    pub async fn server_status(&self) -> PosbotResult<ServerStatusJson> {
        self.get_json("/server/status", &[]).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> PosbotResult<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Requesting upstream");

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::new(FetchErrorKind::Transport(e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::new(FetchErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            return Err(FetchError::new(FetchErrorKind::Status {
                status: status.as_u16(),
                body,
            })
            .into());
        }

        match serde_json::from_str::<ApiResponse<T>>(&body) {
            Ok(ApiResponse::Payload(value)) => Ok(value),
            Ok(ApiResponse::Error { error }) => Err(FetchError::new(FetchErrorKind::Api {
                code: error.code,
                message: error.message,
            })
            .into()),
            Err(e) => Err(FetchError::new(FetchErrorKind::Decode(e.to_string())).into()),
        }
    }

    fn key_query(&self) -> [(&str, &str); 2] {
        [("keyID", self.key_id.as_str()), ("vCode", self.key_vcode.as_str())]
    }
}

#[async_trait]
impl StarbaseSource for ApiClient {
    #[instrument(skip(self))]
    async fn starbase_list(&self) -> PosbotResult<StarbaseList> {
        let list: StarbaseList = self
            .get_json("/corp/starbases", &self.key_query())
            .await?;
        debug!(
            count = list.starbases().len(),
            cached_until = %list.cached_until(),
            "Fetched starbase list from API"
        );
        Ok(list)
    }

    #[instrument(skip(self))]
    async fn starbase_details(&self, starbase_id: i64) -> PosbotResult<StarbaseDetails> {
        let path = format!("/corp/starbases/{}", starbase_id);
        let details: StarbaseDetails = self.get_json(&path, &self.key_query()).await?;
        debug!(
            starbase_id,
            cached_until = %details.cached_until(),
            "Fetched starbase details from API"
        );
        Ok(details)
    }
}

#[async_trait]
impl NameSource for ApiClient {
    #[instrument(skip(self))]
    async fn type_name(&self, type_id: i32) -> PosbotResult<String> {
        let path = format!("/universe/types/{}", type_id);
        let record: TypeJson = self.get_json(&path, &[]).await?;
        Ok(record.into_name())
    }

    #[instrument(skip(self))]
    async fn corporation_name(&self, corporation_id: i64) -> PosbotResult<String> {
        let path = format!("/corporations/{}", corporation_id);
        let record: CorporationJson = self.get_json(&path, &[]).await?;
        Ok(record.into_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let config = ApiClientConfig {
            base_url: "https://api.example.test/".to_string(),
            key_id: "123".to_string(),
            key_vcode: "abc".to_string(),
            timeout_secs: 5,
        };
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://api.example.test");
    }

    #[test]
    fn error_envelope_takes_precedence_over_payload() {
        let body = r#"{"error":{"code":221,"message":"Illegal page request"}}"#;
        let parsed: ApiResponse<ServerStatusJson> = serde_json::from_str(body).unwrap();
        assert!(matches!(parsed, ApiResponse::Error { .. }));
    }
}
