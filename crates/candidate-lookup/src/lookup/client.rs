use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::directory::{CandidateDirectory, FetchError};
use super::domain::CandidateId;
use super::paginator::PageRequest;
use super::payload::{ApplicationsDocument, CandidatePage};
use crate::config::TeamtailorConfig;

const JSON_API: &str = "application/vnd.api+json";
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// `CandidateDirectory` backed by the Teamtailor REST API.
#[derive(Debug, Clone)]
pub struct TeamtailorClient {
    http: Client,
    api_url: String,
    max_retries: u32,
}

impl TeamtailorClient {
    pub fn new(config: &TeamtailorConfig) -> Result<Self, ClientBuildError> {
        let mut headers = HeaderMap::new();
        let mut token = HeaderValue::from_str(&format!("Token token={}", config.api_key))
            .map_err(|_| ClientBuildError::InvalidHeader("Authorization"))?;
        token.set_sensitive(true);
        headers.insert(AUTHORIZATION, token);
        headers.insert(
            HeaderName::from_static("x-api-version"),
            HeaderValue::from_str(&config.api_version)
                .map_err(|_| ClientBuildError::InvalidHeader("X-Api-Version"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_API));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
        })
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.api_url, path);
        let mut attempt = 0;

        let response = loop {
            match self.http.get(&url).query(query).send().await {
                Ok(response) => break response,
                Err(err) if attempt < self.max_retries && is_transient(&err) => {
                    attempt += 1;
                    warn!(%url, attempt, error = %err, "retrying Teamtailor request");
                    tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                }
                Err(err) => return Err(FetchError::Transport(err.to_string())),
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!(%url, %status, "Teamtailor returned a non-success status");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_timeout() || err.is_connect()
}

#[async_trait]
impl CandidateDirectory for TeamtailorClient {
    async fn list_candidates(&self, request: &PageRequest) -> Result<CandidatePage, FetchError> {
        self.get_json("/v1/candidates", &request.query()).await
    }

    async fn candidate_applications(
        &self,
        candidate_id: &CandidateId,
    ) -> Result<ApplicationsDocument, FetchError> {
        let path = format!("/v1/candidates/{}/job-applications", candidate_id);
        self.get_json(&path, &[("include", "job".to_string())])
            .await
    }
}

/// Failure constructing the HTTP client from configuration.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("{0} header contains characters that are not allowed")]
    InvalidHeader(&'static str),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
