use indicatif::style::TemplateError;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

pub const LOADING_TITLE: &str = "Analyzing Web Page";
pub const LOADING_MESSAGE: &str =
    "Extracting content, metadata, and structure from the provided URL...";
pub const LOADING_STEPS: [&str; 3] = [
    "Fetching page content",
    "Parsing metadata",
    "Generating schemas",
];

const TICK_INTERVAL: Duration = Duration::from_millis(100);

pub fn render() -> String {
    format!(
        "{LOADING_TITLE}\n{LOADING_MESSAGE}\n{}\n",
        LOADING_STEPS.join(" • ")
    )
}

fn spinner_message() -> String {
    format!("{LOADING_TITLE}: {}", LOADING_STEPS.join(" • "))
}

pub fn spinner(target: ProgressDrawTarget) -> Result<ProgressBar, TemplateError> {
    let pb = ProgressBar::with_draw_target(None, target);
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg} [{elapsed}]")?
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "),
    );
    pb.set_message(spinner_message());
    pb.enable_steady_tick(TICK_INTERVAL);
    Ok(pb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_shows_title_and_steps() {
        let pb = spinner(ProgressDrawTarget::hidden()).unwrap();
        let message = pb.message();
        assert!(message.starts_with(LOADING_TITLE));
        for step in LOADING_STEPS {
            assert!(message.contains(step));
        }
        assert!(!pb.is_finished());

        pb.finish_and_clear();
        assert!(pb.is_finished());
    }

    #[test]
    fn static_view_lists_every_step() {
        let text = render();
        assert!(text.starts_with(LOADING_TITLE));
        assert!(text.contains(LOADING_MESSAGE));
        assert!(text.contains("Fetching page content • Parsing metadata • Generating schemas"));
    }
}
