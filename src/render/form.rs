use log::debug;
use std::fmt::Write;

use super::clipboard::Clipboard;
use crate::core::SubmissionState;
use crate::http::ScrapeRequest;

pub const URL_PLACEHOLDER: &str = "https://example.com/article-page";
pub const SUBMIT_LABEL: &str = "Scrape & Generate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlForm {
    pub url: String,
    pub generate_article: bool,
    pub generate_breadcrumb: bool,
    pub generate_faq: bool,
    error: Option<String>,
}

impl Default for UrlForm {
    fn default() -> Self {
        Self {
            url: String::new(),
            generate_article: true,
            generate_breadcrumb: true,
            generate_faq: true,
            error: None,
        }
    }
}

impl UrlForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn paste_from_clipboard(&mut self, clipboard: &mut dyn Clipboard) -> bool {
        match clipboard.read_text() {
            Ok(text) if !text.trim().is_empty() => {
                self.url = text.trim().to_string();
                true
            }
            Ok(_) => false,
            Err(e) => {
                debug!("Failed to read clipboard contents: {}", e);
                false
            }
        }
    }

    pub fn submit(&mut self) -> Option<ScrapeRequest> {
        let request = ScrapeRequest {
            url: self.url.clone(),
            generate_article: self.generate_article,
            generate_breadcrumb: self.generate_breadcrumb,
            generate_faq: self.generate_faq,
        };

        match request.validate() {
            Ok(()) => {
                self.error = None;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.message);
                None
            }
        }
    }

    pub fn render(&self, state: &SubmissionState) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Enter URL to Scrape");
        let url = if self.url.is_empty() {
            URL_PLACEHOLDER
        } else {
            self.url.as_str()
        };
        let _ = writeln!(out, "  Website URL: {url}");
        if let Some(error) = &self.error {
            let _ = writeln!(out, "    ! {error}");
        }
        for (checked, label) in [
            (self.generate_article, "Generate Article Schema"),
            (self.generate_breadcrumb, "Generate Breadcrumb Schema"),
            (self.generate_faq, "Generate FAQ Schema"),
        ] {
            let _ = writeln!(out, "  [{}] {label}", if checked { "x" } else { " " });
        }
        let suffix = if submit_enabled(state) { "" } else { " (disabled)" };
        let _ = writeln!(out, "  <{SUBMIT_LABEL}>{suffix}");
        out
    }
}

pub fn submit_enabled(state: &SubmissionState) -> bool {
    !state.is_in_flight()
}
