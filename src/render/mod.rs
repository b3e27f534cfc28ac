pub mod clipboard;
pub mod form;
pub mod loading;
pub mod notify;
pub mod preview;
pub mod results;

pub use clipboard::{Clipboard, MemoryClipboard, StdioClipboard};
pub use form::{submit_enabled, UrlForm};
pub use notify::{Notification, Variant};
pub use results::{SchemaResults, PROCESS_ANOTHER, RICH_RESULTS_TEST_URL};

use crate::core::SubmissionState;
use crate::SchemaResult;

pub const FAILURE_TITLE: &str = "Scraping Failed";

pub fn render_state(state: &SubmissionState) -> SchemaResult<String> {
    Ok(match state {
        SubmissionState::Idle => String::new(),
        SubmissionState::InFlight { .. } => loading::render(),
        SubmissionState::Failed(failure) => format!("{FAILURE_TITLE}\n{}\n", failure.message),
        SubmissionState::Succeeded(data) => {
            let results = SchemaResults::new(data.schemas.clone());
            format!(
                "{}\n{}",
                preview::render(&data.extracted_data),
                results.render()?
            )
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{MockReply, MockSchemaClient};
    use crate::core::{Failure, FailureKind, Session};
    use crate::http::{
        ExtractedData, SchemaBundle, SchemaKind, SchemaResponse, ScrapeData, ScrapeRequest,
    };
    use serde_json::json;

    fn page(title: &str, faq: bool) -> SchemaResponse {
        let kind = if faq { "FAQPage" } else { "Article" };
        let schema = json!({ "@type": kind }).as_object().cloned();
        SchemaResponse::ok(ScrapeData {
            extracted_data: ExtractedData {
                title: title.to_string(),
                ..Default::default()
            },
            schemas: SchemaBundle {
                article: if faq { None } else { schema.clone() },
                faq: if faq { schema } else { None },
                ..Default::default()
            },
        })
    }

    #[test]
    fn in_flight_shows_only_loading() {
        let state = SubmissionState::InFlight {
            request: ScrapeRequest::new("https://example.com").unwrap(),
        };
        let text = render_state(&state).unwrap();
        assert!(text.contains(loading::LOADING_MESSAGE));
        assert!(!text.contains("Generated Schemas"));
    }

    #[test]
    fn failure_panel_shows_message() {
        let state = SubmissionState::Failed(Failure {
            kind: FailureKind::Transport,
            message: "500: boom".to_string(),
            status: Some(500),
        });
        assert_eq!(render_state(&state).unwrap(), "Scraping Failed\n500: boom\n");
    }

    #[test]
    fn success_shows_preview_and_results() {
        let state = SubmissionState::Succeeded(ScrapeData {
            extracted_data: ExtractedData {
                title: "Post".to_string(),
                ..Default::default()
            },
            schemas: SchemaBundle::default(),
        });
        let text = render_state(&state).unwrap();
        assert!(text.contains("Page Title: Post"));
        assert!(text.contains(results::NO_SCHEMAS));
    }

    #[test]
    fn idle_renders_nothing() {
        assert!(render_state(&SubmissionState::Idle).unwrap().is_empty());
    }

    #[tokio::test]
    async fn process_another_returns_to_form_for_next_url() {
        let client = MockSchemaClient::new(vec![
            MockReply::reply(page("First", false)),
            MockReply::reply(page("Second", true)),
        ]);
        let session = Session::new();
        let mut form = UrlForm::new().with_url("https://example.com/first");

        let request = form.submit().unwrap();
        let state = session.submit(&client, &request).await.unwrap();
        let SubmissionState::Succeeded(data) = &state else {
            panic!("expected success, got {state:?}");
        };
        let results = SchemaResults::new(data.schemas.clone());
        assert!(render_state(&state).unwrap().contains(PROCESS_ANOTHER));

        results.process_another(&session);

        assert!(session.state().is_idle());
        assert!(session.can_submit());
        assert!(render_state(&session.state()).unwrap().is_empty());
        assert!(submit_enabled(&session.state()));
        assert_eq!(session.stats().get_stats().resets, 1);

        form.url = "https://example.com/second".to_string();
        let request = form.submit().unwrap();
        let state = session.submit(&client, &request).await.unwrap();

        let data = state.data().unwrap();
        assert_eq!(data.extracted_data.title, "Second");
        assert_eq!(SchemaResults::new(data.schemas.clone()).active(), Some(SchemaKind::Faq));
        assert_eq!(client.calls(), 2);
        assert_eq!(client.received()[1].url, "https://example.com/second");
    }
}
