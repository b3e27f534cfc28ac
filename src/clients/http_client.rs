use async_trait::async_trait;
use log::{debug, info};
use reqwest::{header, Client, ClientBuilder, StatusCode};
use url::Url;

use super::SchemaClient;
use crate::core::ClientConfig;
use crate::http::{SchemaResponse, ScrapeRequest};
use crate::{SchemaError, SchemaResult};

#[derive(Clone)]
pub struct HttpSchemaClient {
    client: Client,
    endpoint: Url,
}

impl HttpSchemaClient {
    pub fn new(config: &ClientConfig) -> SchemaResult<Self> {
        let client = ClientBuilder::new()
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            endpoint: config.scrape_endpoint()?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn status_error(status: StatusCode, body: String) -> SchemaError {
        let body = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or_default().to_string()
        } else {
            body
        };
        SchemaError::Status {
            status: status.as_u16(),
            body,
        }
    }
}

#[async_trait]
impl SchemaClient for HttpSchemaClient {
    async fn scrape(&self, request: &ScrapeRequest) -> SchemaResult<SchemaResponse> {
        info!("Submitting {} to {}", request.url, self.endpoint);
        let body = serde_json::to_vec(request)?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(
            "Received response: status={}, body_length={}",
            status.as_u16(),
            text.len()
        );

        if !status.is_success() {
            return Err(Self::status_error(status, text));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
