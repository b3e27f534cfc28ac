mod config;
mod errors;
pub mod session;

pub use config::{ClientConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
pub use errors::{SchemaError, SchemaResult, ValidationError};
pub use session::{
    Failure, FailureKind, Session, SubmissionState, Ticket, FALLBACK_FAILURE_MESSAGE,
};
