use std::time::Duration;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response, StatusCode};
use crate::config::constants::{CAUSES_PATH, CAUSE_ENTITY};
use crate::enums::fetch_error::FetchError;
use crate::errors::{ArcaError, ArcaResult};
use crate::structs::cause::Cause;
use crate::structs::cause_record::CauseRecord;
use crate::structs::config::client_config::ClientConfig;
use crate::traits::cause_source::CauseSource;

#[derive(Clone)]
pub struct CauseClient {
    base_url: String,
    causes_url: String,
    client: Client,
}

impl CauseClient {
    pub fn new(config: &ClientConfig) -> ArcaResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let base_url = config.base_url.trim_end_matches('/').to_string();

        Ok(Self {
            causes_url: format!("{}/{}", base_url, CAUSES_PATH),
            base_url,
            client,
        })
    }

    /// Fetch the list from `url` verbatim instead of `{base_url}/api/causes`.
    pub fn with_endpoint(mut self, url: &str) -> Self {
        self.causes_url = url.to_string();
        self
    }

    pub fn causes_url(&self) -> &str {
        &self.causes_url
    }

    fn cause_url(&self, id: u64) -> String {
        format!("{}/{}/{}", self.base_url, CAUSES_PATH, id)
    }

    pub fn decode_records(body: &str) -> Result<Vec<CauseRecord>, FetchError> {
        serde_json::from_str::<Vec<CauseRecord>>(body)
            .map_err(|e| FetchError::Decode(format!("expected a JSON array of objects: {}", e)))
    }

    async fn send_checked(&self, url: &str, request: reqwest::RequestBuilder) -> Result<Response, FetchError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn read_body(url: &str, response: Response) -> Result<String, FetchError> {
        response.text().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    fn entity_error(error: FetchError, id: u64) -> ArcaError {
        match error {
            FetchError::Status { status, .. } if status == StatusCode::NOT_FOUND.as_u16() => {
                ArcaError::not_found(CAUSE_ENTITY, id)
            }
            other => other.into(),
        }
    }

    pub async fn list_causes(&self) -> ArcaResult<Vec<Cause>> {
        let url = self.causes_url.clone();
        let response = self.send_checked(&url, self.client.get(&url)).await?;
        let body = Self::read_body(&url, response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_cause(&self, id: u64) -> ArcaResult<Option<Cause>> {
        let url = self.cause_url(id);
        match self.send_checked(&url, self.client.get(&url)).await {
            Ok(response) => {
                let body = Self::read_body(&url, response).await?;
                Ok(Some(serde_json::from_str(&body)?))
            }
            Err(FetchError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn create_cause(&self, cause: &Cause) -> ArcaResult<Cause> {
        let url = format!("{}/{}", self.base_url, CAUSES_PATH);
        let response = self.send_checked(&url, self.client.post(&url).json(cause)).await?;
        let body = Self::read_body(&url, response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn update_cause(&self, id: u64, cause: &Cause) -> ArcaResult<Cause> {
        let url = self.cause_url(id);
        let response = self
            .send_checked(&url, self.client.put(&url).json(cause))
            .await
            .map_err(|e| Self::entity_error(e, id))?;
        let body = Self::read_body(&url, response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn delete_cause(&self, id: u64) -> ArcaResult<()> {
        let url = self.cause_url(id);
        self.send_checked(&url, self.client.delete(&url))
            .await
            .map_err(|e| Self::entity_error(e, id))?;
        Ok(())
    }

    pub async fn send_cause(&self, id: u64, wait: bool) -> ArcaResult<Cause> {
        let url = format!("{}/send", self.cause_url(id));
        let request = self.client.post(&url).query(&[("wait", wait)]);
        let response = self
            .send_checked(&url, request)
            .await
            .map_err(|e| Self::entity_error(e, id))?;
        let body = Self::read_body(&url, response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CauseSource for CauseClient {
    async fn fetch_causes(&self) -> Result<Vec<CauseRecord>, FetchError> {
        let url = self.causes_url.clone();
        let response = self.send_checked(&url, self.client.get(&url)).await?;
        let body = Self::read_body(&url, response).await?;
        Self::decode_records(&body)
    }

    fn describe(&self) -> String {
        self.causes_url.clone()
    }
}
