use crate::arr_api_error::ArrApiError;
use crate::models::{NewQualityProfile, QualityProfile};
use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const API_KEY_HEADER: &str = "X-Api-Key";
const QUALITY_PROFILE_PATH: &str = "api/v3/qualityprofile";

/// The quality profile operations arrclone needs from a Radarr/Sonarr instance.
#[async_trait]
pub trait QualityProfileApi {
    /// Retrieve the quality profile with the given id.
    async fn get_quality_profile(&self, id: i64) -> Result<QualityProfile, ArrApiError>;

    /// Create a new quality profile. Returns the profile as stored by the server, including the
    /// id it assigned.
    async fn create_quality_profile(
        &self,
        profile: &NewQualityProfile,
    ) -> Result<QualityProfile, ArrApiError>;
}

/// Settings to configure an [ArrClient].
pub struct ArrClientSettings {
    /// Base URL of the instance, e.g. `http://localhost:7878`. A trailing `/` is ignored.
    pub base_url: String,
    pub api_key: String,
    /// Per-request timeout. [Option::None] keeps reqwest's default.
    pub timeout: Option<Duration>,
}

/// [QualityProfileApi] backed by the instance's v3 REST API.
#[derive(Clone)]
pub struct ArrClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ArrClient {
    pub fn new(settings: ArrClientSettings) -> Result<Self, ArrApiError> {
        let ArrClientSettings {
            base_url,
            api_key,
            timeout,
        } = settings;
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build().map_err(ArrApiError::ClientBuild)?;

        Ok(ArrClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn quality_profile_url(&self) -> String {
        format!("{}/{}", self.base_url, QUALITY_PROFILE_PATH)
    }
}

#[async_trait]
impl QualityProfileApi for ArrClient {
    async fn get_quality_profile(&self, id: i64) -> Result<QualityProfile, ArrApiError> {
        let url = format!("{}/{}", self.quality_profile_url(), id);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| ArrApiError::network(&url, e))?;

        decode_response(&url, response).await
    }

    async fn create_quality_profile(
        &self,
        profile: &NewQualityProfile,
    ) -> Result<QualityProfile, ArrApiError> {
        let url = self.quality_profile_url();
        debug!("POST {}", url);
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(profile)
            .send()
            .await
            .map_err(|e| ArrApiError::network(&url, e))?;

        decode_response(&url, response).await
    }
}

/// Read the whole body, then check the status before attempting to decode it as JSON.
async fn decode_response<T: DeserializeOwned>(
    url: &str,
    response: Response,
) -> Result<T, ArrApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ArrApiError::network(url, e))?;
    debug!("{} responded with HTTP {}.", url, status.as_u16());
    if !status.is_success() {
        return Err(ArrApiError::http_status(url, status.as_u16(), &body));
    }

    serde_json::from_str::<T>(&body).map_err(|e| ArrApiError::decode(url, e))
}
