use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ScrapeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SchemaResponse {
    pub fn ok(data: ScrapeData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeData {
    pub extracted_data: ExtractedData,
    #[serde(default, deserialize_with = "null_as_default")]
    pub schemas: SchemaBundle,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedData {
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_body: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub breadcrumbs: Vec<Breadcrumb>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub faqs: Vec<Faq>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    pub url: String,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SchemaKind {
    Article,
    Breadcrumb,
    Faq,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 3] = [
        SchemaKind::Article,
        SchemaKind::Breadcrumb,
        SchemaKind::Faq,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SchemaKind::Article => "article",
            SchemaKind::Breadcrumb => "breadcrumb",
            SchemaKind::Faq => "faq",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SchemaKind::Article => "Article",
            SchemaKind::Breadcrumb => "Breadcrumb",
            SchemaKind::Faq => "FAQ",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SchemaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaKind::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown schema type `{s}` (expected article, breadcrumb or faq)")
            })
    }
}

// Schema contents are opaque and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq: Option<Map<String, Value>>,
}

impl SchemaBundle {
    pub fn get(&self, kind: SchemaKind) -> Option<&Map<String, Value>> {
        match kind {
            SchemaKind::Article => self.article.as_ref(),
            SchemaKind::Breadcrumb => self.breadcrumb.as_ref(),
            SchemaKind::Faq => self.faq.as_ref(),
        }
    }

    pub fn kinds(&self) -> Vec<SchemaKind> {
        SchemaKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .collect()
    }

    pub fn first_kind(&self) -> Option<SchemaKind> {
        self.kinds().into_iter().next()
    }

    pub fn is_empty(&self) -> bool {
        self.first_kind().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn parses_full_success_reply() {
        let body = json!({
            "success": true,
            "data": {
                "extractedData": {
                    "title": "How to brew coffee",
                    "description": "",
                    "author": "Ana",
                    "datePublished": "2024-03-05T10:00:00Z",
                    "image": { "url": "https://example.com/a.jpg", "width": 1200 },
                    "breadcrumbs": [
                        { "name": "Home", "url": "https://example.com/", "position": 1 },
                        { "name": "Blog", "url": "https://example.com/blog", "position": 2 }
                    ],
                    "faqs": [{ "question": "Hot?", "answer": "Yes" }],
                    "publisherName": "Example"
                },
                "schemas": {
                    "article": { "@context": "https://schema.org", "@type": "Article" }
                }
            }
        });

        let response: SchemaResponse = serde_json::from_value(body).unwrap();
        assert!(response.success);
        let data = response.data.unwrap();
        assert_eq!(data.extracted_data.title, "How to brew coffee");
        assert_eq!(data.extracted_data.author.as_deref(), Some("Ana"));
        assert_eq!(data.extracted_data.image.unwrap().width, Some(1200.0));
        assert_eq!(data.extracted_data.breadcrumbs[1].name, "Blog");
        assert_eq!(data.extracted_data.publisher_name.as_deref(), Some("Example"));
        assert_eq!(data.schemas.kinds(), vec![SchemaKind::Article]);
    }

    #[test]
    fn missing_optional_fields_do_not_fail() {
        let response: SchemaResponse = serde_json::from_value(json!({
            "success": true,
            "data": { "extractedData": { "title": "Bare page" }, "schemas": {} }
        }))
        .unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.extracted_data.description, "");
        assert!(data.extracted_data.breadcrumbs.is_empty());
        assert!(data.extracted_data.faqs.is_empty());
        assert!(data.schemas.is_empty());
    }

    #[test]
    fn fractional_and_negative_positions_decode() {
        let data: ExtractedData = serde_json::from_value(json!({
            "title": "Post",
            "description": "",
            "breadcrumbs": [
                { "name": "Home", "url": "https://example.com/", "position": 1.0 },
                { "name": "Odd", "url": "https://example.com/odd", "position": -2.5 }
            ],
            "faqs": []
        }))
        .unwrap();
        assert_eq!(data.breadcrumbs[0].position, 1.0);
        assert_eq!(data.breadcrumbs[1].position, -2.5);
    }

    #[test]
    fn null_description_and_lists_decode_as_empty() {
        let response: SchemaResponse = serde_json::from_value(json!({
            "success": true,
            "data": {
                "extractedData": {
                    "title": "Post",
                    "description": null,
                    "breadcrumbs": null,
                    "faqs": null
                },
                "schemas": { "article": { "@type": "Article" } }
            }
        }))
        .unwrap();
        let data = response.data.unwrap();
        assert_eq!(data.extracted_data.description, "");
        assert!(data.extracted_data.breadcrumbs.is_empty());
        assert!(data.extracted_data.faqs.is_empty());
        assert_eq!(data.schemas.first_kind(), Some(SchemaKind::Article));
    }

    #[test]
    fn null_schemas_decode_as_empty_bundle() {
        let data: ScrapeData = serde_json::from_value(json!({
            "extractedData": { "title": "Post" },
            "schemas": null
        }))
        .unwrap();
        assert!(data.schemas.is_empty());
    }

    #[test]
    fn failure_reply_has_no_data() {
        let response: SchemaResponse =
            serde_json::from_value(json!({ "success": false, "error": "Unable to reach URL" }))
                .unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
        assert_eq!(response.error.as_deref(), Some("Unable to reach URL"));
    }

    #[test]
    fn non_object_schema_is_rejected() {
        let result: Result<SchemaBundle, _> =
            serde_json::from_value(json!({ "article": ["not", "an", "object"] }));
        assert!(result.is_err());
    }

    #[test]
    fn bundle_survives_json_unchanged() {
        let bundle = SchemaBundle {
            article: Some(object(json!({
                "@context": "https://schema.org",
                "@type": "Article",
                "headline": "Ünïcode & <tags>",
                "image": { "@type": "ImageObject", "width": 1200.5 },
                "keywords": ["a", null, 3]
            }))),
            breadcrumb: None,
            faq: Some(object(json!({ "@type": "FAQPage", "mainEntity": [] }))),
        };

        let text = serde_json::to_string(&bundle).unwrap();
        assert!(!text.contains("breadcrumb"));
        let back: SchemaBundle = serde_json::from_str(&text).unwrap();
        assert_eq!(back, bundle);
    }

    #[test]
    fn kinds_follow_priority_order() {
        let bundle = SchemaBundle {
            article: None,
            breadcrumb: Some(Map::new()),
            faq: Some(Map::new()),
        };
        assert_eq!(bundle.kinds(), vec![SchemaKind::Breadcrumb, SchemaKind::Faq]);
        assert_eq!(bundle.first_kind(), Some(SchemaKind::Breadcrumb));
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("FAQ".parse::<SchemaKind>(), Ok(SchemaKind::Faq));
        assert_eq!(" article ".parse::<SchemaKind>(), Ok(SchemaKind::Article));
        assert!("recipe".parse::<SchemaKind>().is_err());
    }
}
