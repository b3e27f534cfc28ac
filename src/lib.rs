pub mod clients;
pub mod core;
pub mod http;
pub mod render;
pub mod stats;

pub use clients::{HttpSchemaClient, SchemaClient};
pub use crate::core::{ClientConfig, Session, SubmissionState};
pub use crate::core::{SchemaError, SchemaResult};
pub use http::{SchemaResponse, ScrapeRequest};
pub use stats::StatsTracker;
