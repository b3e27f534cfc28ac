use crate::http::{SchemaResponse, ScrapeRequest};
use crate::SchemaResult;
use async_trait::async_trait;

/// One round trip to the schema generation backend.
#[async_trait]
pub trait SchemaClient: Send + Sync {
    async fn scrape(&self, request: &ScrapeRequest) -> SchemaResult<SchemaResponse>;
}
