use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::clients::SchemaClient;
use crate::http::{SchemaResponse, ScrapeData, ScrapeRequest};
use crate::stats::StatsTracker;
use crate::{SchemaError, SchemaResult};


pub const FALLBACK_FAILURE_MESSAGE: &str = "Failed to scrape URL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Application,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
    pub status: Option<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    InFlight { request: ScrapeRequest },
    Succeeded(ScrapeData),
    Failed(Failure),
}

impl SubmissionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight { .. })
    }

    pub fn data(&self) -> Option<&ScrapeData> {
        match self {
            SubmissionState::Succeeded(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            SubmissionState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    fn settled(outcome: SchemaResult<SchemaResponse>) -> Self {
        match outcome {
            Ok(SchemaResponse {
                success: true,
                data: Some(data),
                ..
            }) => SubmissionState::Succeeded(data),
            Ok(response) => SubmissionState::Failed(Failure {
                kind: FailureKind::Application,
                message: response
                    .error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| FALLBACK_FAILURE_MESSAGE.to_string()),
                status: None,
            }),
            Err(e) => SubmissionState::Failed(Failure {
                kind: FailureKind::Transport,
                status: e.status(),
                message: e.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
}

impl Ticket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug)]
struct Inner {
    state: SubmissionState,
    seq: u64,
    started_at: Option<DateTime<Utc>>,
}

/// Lifecycle of scrape-and-generate operations: the single writer of the
/// current result.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<RwLock<Inner>>,
    stats: StatsTracker,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_stats(StatsTracker::new())
    }

    pub fn with_stats(stats: StatsTracker) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                state: SubmissionState::Idle,
                seq: 0,
                started_at: None,
            })),
            stats,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.inner.read().state.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.read().state.is_in_flight()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    pub fn begin(&self, request: &ScrapeRequest) -> SchemaResult<Ticket> {
        if let Err(e) = request.validate() {
            debug!("Rejected submission for {:?}: {}", request.url, e);
            self.stats.record_rejected();
            return Err(e.into());
        }

        let mut inner = self.inner.write();
        if inner.state.is_in_flight() {
            self.stats.record_rejected();
            return Err(SchemaError::Busy);
        }

        inner.seq += 1;
        inner.state = SubmissionState::InFlight {
            request: request.clone(),
        };
        inner.started_at = Some(Utc::now());
        self.stats.record_submission();

        info!("Submission #{} started for {}", inner.seq, request.url);
        Ok(Ticket { seq: inner.seq })
    }

    /// Applies the outcome of the call started with `ticket`. Returns `false`
    /// when the submission was superseded and the outcome was dropped.
    pub fn settle(&self, ticket: Ticket, outcome: SchemaResult<SchemaResponse>) -> bool {
        let mut inner = self.inner.write();
        if ticket.seq != inner.seq || !inner.state.is_in_flight() {
            debug!(
                "Discarding late completion of submission #{} (current #{})",
                ticket.seq, inner.seq
            );
            self.stats.record_discarded();
            return false;
        }

        let duration = inner
            .started_at
            .take()
            .map(|start| Utc::now().signed_duration_since(start))
            .unwrap_or_else(chrono::Duration::zero);

        let next = SubmissionState::settled(outcome);
        match &next {
            SubmissionState::Failed(failure) => {
                warn!(
                    "Submission #{} failed ({:?}): {}",
                    ticket.seq, failure.kind, failure.message
                );
                self.stats
                    .record_failure(failure.kind == FailureKind::Transport, duration);
            }
            _ => {
                info!(
                    "Submission #{} succeeded in {}ms",
                    ticket.seq,
                    duration.num_milliseconds()
                );
                self.stats.record_success(duration);
            }
        }

        inner.state = next;
        true
    }

    /// Back to `Idle`. Any call still outstanding is ignored when it lands.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.seq += 1;
        inner.state = SubmissionState::Idle;
        inner.started_at = None;
        self.stats.record_reset();
        debug!("Session reset (sequence now #{})", inner.seq);
    }

    pub async fn submit<C>(
        &self,
        client: &C,
        request: &ScrapeRequest,
    ) -> SchemaResult<SubmissionState>
    where
        C: SchemaClient + ?Sized,
    {
        let ticket = self.begin(request)?;
        let outcome = client.scrape(request).await;
        self.settle(ticket, outcome);
        Ok(self.state())
    }
}
