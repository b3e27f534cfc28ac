use std::fmt;

use crate::core::SubmissionState;

pub const SCRAPE_SUCCEEDED: &str = "URL scraped successfully and schemas generated!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn for_state(state: &SubmissionState) -> Option<Self> {
        match state {
            SubmissionState::Succeeded(_) => Some(Self::success(SCRAPE_SUCCEEDED)),
            SubmissionState::Failed(failure) => Some(Self::error(failure.message.clone())),
            SubmissionState::Idle | SubmissionState::InFlight { .. } => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.description)
    }
}
