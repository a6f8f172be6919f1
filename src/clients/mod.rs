/// External API clients module
use crate::config::HttpSettings;
use crate::domain::spacex::{CrewMember, Launch, Launchpad, Rocket};
use crate::errors::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

pub mod models;

use models::{BodyListResponse, WireMoon};

/// HTTP client wrapper with common configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(settings: &HttpSettings) -> ApiResult<Self> {
        Self::with_headers(settings, HeaderMap::new())
    }

    /// Client that sends `Authorization: Bearer <key>` unless the key is empty
    pub fn with_bearer(settings: &HttpSettings, api_key: &str) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        if !api_key.is_empty() {
            let value = HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| ApiError::Internal(format!("unusable API key: {}", e)))?;
            headers.insert(AUTHORIZATION, value);
        }
        Self::with_headers(settings, headers)
    }

    fn with_headers(settings: &HttpSettings, mut headers: HeaderMap) -> ApiResult<Self> {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and decode a JSON body.
    ///
    /// Non-2xx statuses, empty bodies and undecodable bodies are all failures;
    /// nothing is partially decoded.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {}", url);
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!("GET {} failed with status {}", url, status);
            return Err(ApiError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = resp.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::EmptyBody);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Solar System OpenData client
pub struct SolarSystemClient {
    http_client: HttpClient,
    base_url: String,
    moon_filter: String,
}

impl SolarSystemClient {
    pub fn new(http_client: HttpClient, base_url: String, moon_filter: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            moon_filter,
        }
    }

    /// Get base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch bodies matching a `key,op,value` filter, passed through verbatim
    pub async fn fetch_bodies(&self, filter: &str) -> ApiResult<Vec<WireMoon>> {
        let url = format!("{}/rest/bodies?filter[]={}", self.base_url, filter);
        let list: BodyListResponse = self.http_client.get_json(&url).await?;
        Ok(list.bodies)
    }

    /// Fetch every moon
    pub async fn fetch_moons(&self) -> ApiResult<Vec<WireMoon>> {
        self.fetch_bodies(&self.moon_filter).await
    }
}

/// SpaceX API client
pub struct SpaceXClient {
    http_client: HttpClient,
    base_url: String,
}

impl SpaceXClient {
    pub fn new(http_client: HttpClient, base_url: String) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn fetch_latest_launch(&self) -> ApiResult<Launch> {
        self.http_client.get_json(&self.url("v5/launches/latest")).await
    }

    pub async fn fetch_upcoming_launches(&self) -> ApiResult<Vec<Launch>> {
        self.http_client
            .get_json(&self.url("v5/launches/upcoming"))
            .await
    }

    pub async fn fetch_past_launches(&self) -> ApiResult<Vec<Launch>> {
        self.http_client.get_json(&self.url("v5/launches/past")).await
    }

    pub async fn fetch_launch(&self, id: &str) -> ApiResult<Launch> {
        self.http_client
            .get_json(&self.url(&format!("v5/launches/{}", id)))
            .await
    }

    pub async fn fetch_rockets(&self) -> ApiResult<Vec<Rocket>> {
        self.http_client.get_json(&self.url("v4/rockets")).await
    }

    pub async fn fetch_rocket(&self, id: &str) -> ApiResult<Rocket> {
        self.http_client
            .get_json(&self.url(&format!("v4/rockets/{}", id)))
            .await
    }

    pub async fn fetch_crew(&self) -> ApiResult<Vec<CrewMember>> {
        self.http_client.get_json(&self.url("v4/crew")).await
    }

    pub async fn fetch_crew_member(&self, id: &str) -> ApiResult<CrewMember> {
        self.http_client
            .get_json(&self.url(&format!("v4/crew/{}", id)))
            .await
    }

    pub async fn fetch_launchpads(&self) -> ApiResult<Vec<Launchpad>> {
        self.http_client.get_json(&self.url("v4/launchpads")).await
    }

    pub async fn fetch_launchpad(&self, id: &str) -> ApiResult<Launchpad> {
        self.http_client
            .get_json(&self.url(&format!("v4/launchpads/{}", id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_key_must_be_a_valid_header() {
        let settings = HttpSettings::default();
        assert!(HttpClient::with_bearer(&settings, "").is_ok());
        assert!(HttpClient::with_bearer(&settings, "abc123").is_ok());

        let err = HttpClient::with_bearer(&settings, "bad\nkey").err();
        assert_eq!(err.map(|e| e.code()), Some("INTERNAL_ERROR"));
    }

    #[test]
    fn test_base_urls_drop_trailing_slash() {
        let http = HttpClient::new(&HttpSettings::default()).unwrap();
        let solar = SolarSystemClient::new(
            http.clone(),
            "https://api.le-systeme-solaire.net/".to_string(),
            "bodyType,eq,Moon".to_string(),
        );
        assert_eq!(solar.base_url(), "https://api.le-systeme-solaire.net");

        let spacex = SpaceXClient::new(http, "https://api.spacexdata.com/".to_string());
        assert_eq!(spacex.url("v4/crew"), "https://api.spacexdata.com/v4/crew");
    }
}
