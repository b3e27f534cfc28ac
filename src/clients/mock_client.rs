use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use super::SchemaClient;
use crate::http::{SchemaResponse, ScrapeRequest};
use crate::{SchemaError, SchemaResult};

#[derive(Debug, Clone)]
pub enum MockOutcome {
    Reply(SchemaResponse),
    Status { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub struct MockReply {
    pub outcome: MockOutcome,
    pub delay: Option<Duration>,
}

impl MockReply {
    pub fn reply(response: SchemaResponse) -> Self {
        Self {
            outcome: MockOutcome::Reply(response),
            delay: None,
        }
    }

    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            outcome: MockOutcome::Status {
                status,
                body: body.into(),
            },
            delay: None,
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[derive(Clone)]
pub struct MockSchemaClient {
    replies: Arc<Vec<MockReply>>,
    current_reply: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<ScrapeRequest>>>,
}

impl MockSchemaClient {
    pub fn new(replies: Vec<MockReply>) -> Self {
        assert!(!replies.is_empty(), "MockSchemaClient needs at least one reply");
        Self {
            replies: Arc::new(replies),
            current_reply: Arc::new(AtomicUsize::new(0)),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.current_reply.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<ScrapeRequest> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl SchemaClient for MockSchemaClient {
    async fn scrape(&self, request: &ScrapeRequest) -> SchemaResult<SchemaResponse> {
        let index = self.current_reply.fetch_add(1, Ordering::SeqCst);
        self.received.lock().push(request.clone());
        let reply = &self.replies[index % self.replies.len()];

        if let Some(delay) = reply.delay {
            sleep(delay).await;
        }

        match &reply.outcome {
            MockOutcome::Reply(response) => Ok(response.clone()),
            MockOutcome::Status { status, body } => Err(SchemaError::Status {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}
