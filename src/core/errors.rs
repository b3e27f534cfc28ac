use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{status}: {body}")]
    Status { status: u16, body: String },

    #[error("a submission is already in flight")]
    Busy,

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// The call produced no usable reply: connection failure, non-2xx status
    /// or a body that does not decode. A `success: false` reply is not one.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SchemaError::Http(_) | SchemaError::Status { .. } | SchemaError::Json(_)
        )
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SchemaError::Status { status, .. } => Some(*status),
            SchemaError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type SchemaResult<T> = Result<T, SchemaError>;
