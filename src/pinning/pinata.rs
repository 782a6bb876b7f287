use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::Config;
use crate::pinning::{PinningClient, PinningError};

const PIN_FILE_PATH: &str = "/pinning/pinFileToIPFS";
const ATTACHMENT_NAME: &str = "data.txt";

#[derive(Debug, Deserialize)]
struct PinFileResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// Pinata pinning API and gateway client
#[derive(Debug, Clone)]
pub struct PinataClient {
    http: reqwest::Client,
    api_url: String,
    gateway: String,
    api_key: String,
    api_secret: String,
}

impl PinataClient {
    pub fn new(
        api_url: impl Into<String>,
        gateway: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
            gateway: gateway.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.pinata_api_url.clone(),
            config.pinata_gateway.clone(),
            config.pinata_api_key.clone(),
            config.pinata_api_secret.clone(),
        )
    }

    fn pin_url(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), PIN_FILE_PATH)
    }

    fn gateway_url(&self, identifier: &str) -> String {
        if self.gateway.ends_with('/') {
            format!("{}{}", self.gateway, identifier)
        } else {
            format!("{}/{}", self.gateway, identifier)
        }
    }
}

#[async_trait]
impl PinningClient for PinataClient {
    #[tracing::instrument(skip(self, text), fields(bytes = text.len()))]
    async fn pin_text(&self, text: &str) -> Result<String, PinningError> {
        let part = Part::text(text.to_owned())
            .file_name(ATTACHMENT_NAME)
            .mime_str("text/plain")?;
        let form = Form::new().part("file", part);

        let response: PinFileResponse = self
            .http
            .post(self.pin_url())
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.api_secret)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.ipfs_hash.is_empty() {
            return Err(PinningError::InvalidResponse(
                "IpfsHash missing from pin response".to_string(),
            ));
        }

        info!(ipfs_hash = %response.ipfs_hash, "Content pinned");
        Ok(response.ipfs_hash)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_text(&self, identifier: &str) -> Result<String, PinningError> {
        let url = self.gateway_url(identifier);
        debug!(url = %url, "Fetching content from gateway");

        let text = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(text)
    }
}
