use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub start_time: DateTime<Utc>,
    pub submissions: usize,
    pub succeeded: usize,
    pub transport_failures: usize,
    pub application_failures: usize,
    pub rejected: usize,
    pub discarded: usize,
    pub resets: usize,
    pub average_response_time: f64, // in milliseconds
}

impl SessionStats {
    pub fn settled(&self) -> usize {
        self.succeeded + self.transport_failures + self.application_failures
    }
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<SessionStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(SessionStats {
                start_time: Utc::now(),
                submissions: 0,
                succeeded: 0,
                transport_failures: 0,
                application_failures: 0,
                rejected: 0,
                discarded: 0,
                resets: 0,
                average_response_time: 0.0,
            })),
        }
    }

    pub fn record_submission(&self) {
        self.stats.write().submissions += 1;
    }

    pub fn record_rejected(&self) {
        self.stats.write().rejected += 1;
    }

    pub fn record_success(&self, duration: Duration) {
        let mut stats = self.stats.write();
        stats.succeeded += 1;
        Self::update_average(&mut stats, duration);
    }

    pub fn record_failure(&self, transport: bool, duration: Duration) {
        let mut stats = self.stats.write();
        if transport {
            stats.transport_failures += 1;
        } else {
            stats.application_failures += 1;
        }
        Self::update_average(&mut stats, duration);
    }

    pub fn record_discarded(&self) {
        self.stats.write().discarded += 1;
    }

    pub fn record_reset(&self) {
        self.stats.write().resets += 1;
    }

    fn update_average(stats: &mut SessionStats, duration: Duration) {
        let settled = stats.settled();
        let current_total = stats.average_response_time * (settled - 1) as f64;
        let new_duration = duration.num_milliseconds() as f64;
        stats.average_response_time = (current_total + new_duration) / settled as f64;
    }

    pub fn get_stats(&self) -> SessionStats {
        self.stats.read().clone()
    }

    pub fn summary(&self) -> String {
        let stats = self.stats.read();
        let duration = Utc::now().signed_duration_since(stats.start_time);

        let mut out = String::new();
        let _ = writeln!(out, "\nSession Statistics:");
        let _ = writeln!(out, "===================");
        let _ = writeln!(out, "Duration: {} seconds", duration.num_seconds());
        let _ = writeln!(out, "Submissions: {}", stats.submissions);
        let _ = writeln!(out, "Succeeded: {}", stats.succeeded);
        let _ = writeln!(out, "Transport Failures: {}", stats.transport_failures);
        let _ = writeln!(out, "Application Failures: {}", stats.application_failures);
        let _ = writeln!(out, "Rejected Before Sending: {}", stats.rejected);
        let _ = writeln!(out, "Discarded Late Replies: {}", stats.discarded);
        let _ = writeln!(out, "Resets: {}", stats.resets);
        let _ = writeln!(
            out,
            "Average Response Time: {:.2}ms",
            stats.average_response_time
        );
        out
    }

    pub fn print_summary(&self) {
        print!("{}", self.summary());
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}
