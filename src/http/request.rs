use crate::core::{SchemaResult, ValidationError};
use serde::{Deserialize, Serialize};
use url::Url;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    pub url: String,
    #[serde(default = "default_true")]
    pub generate_article: bool,
    #[serde(default = "default_true")]
    pub generate_breadcrumb: bool,
    #[serde(default = "default_true")]
    pub generate_faq: bool,
}

impl ScrapeRequest {
    pub fn new(url: impl Into<String>) -> SchemaResult<Self> {
        let request = Self {
            url: url.into(),
            generate_article: true,
            generate_breadcrumb: true,
            generate_faq: true,
        };
        request.validate()?;
        Ok(request)
    }

    pub fn with_article(mut self, enabled: bool) -> Self {
        self.generate_article = enabled;
        self
    }

    pub fn with_breadcrumb(mut self, enabled: bool) -> Self {
        self.generate_breadcrumb = enabled;
        self
    }

    pub fn with_faq(mut self, enabled: bool) -> Self {
        self.generate_faq = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_url(&self.url)
    }
}

pub fn validate_url(raw: &str) -> Result<(), ValidationError> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|_| ValidationError::new("url", INVALID_URL_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SchemaError;
    use serde_json::json;

    #[test]
    fn new_enables_every_schema_type() {
        let request = ScrapeRequest::new("https://example.com/blog/post").unwrap();
        assert!(request.generate_article);
        assert!(request.generate_breadcrumb);
        assert!(request.generate_faq);
    }

    #[test]
    fn malformed_urls_are_rejected() {
        for raw in ["", "example.com", "/relative/path", "http://", "not a url"] {
            match ScrapeRequest::new(raw) {
                Err(SchemaError::Validation(e)) => {
                    assert_eq!(e.field, "url");
                    assert_eq!(e.message, INVALID_URL_MESSAGE);
                }
                other => panic!("expected validation error for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn all_flags_off_is_allowed() {
        let request = ScrapeRequest::new("https://example.com")
            .unwrap()
            .with_article(false)
            .with_breadcrumb(false)
            .with_faq(false);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn serializes_camel_case() {
        let request = ScrapeRequest::new("https://example.com")
            .unwrap()
            .with_faq(false);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "url": "https://example.com",
                "generateArticle": true,
                "generateBreadcrumb": true,
                "generateFaq": false
            })
        );
    }

    #[test]
    fn omitted_flags_default_to_true_but_false_is_kept() {
        let request: ScrapeRequest = serde_json::from_value(json!({
            "url": "https://example.com",
            "generateBreadcrumb": false
        }))
        .unwrap();
        assert!(request.generate_article);
        assert!(!request.generate_breadcrumb);
        assert!(request.generate_faq);
    }
}
