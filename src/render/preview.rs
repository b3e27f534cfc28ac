use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::fmt::Write;

use crate::http::ExtractedData;

pub const NO_DESCRIPTION: &str = "No description found";
pub const NO_BREADCRUMBS: &str = "No breadcrumbs found";
const BREADCRUMB_SEPARATOR: &str = " › ";

/// Short `M/D/YYYY` form of a backend date. Text that is not a recognisable
/// date is shown unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-m/%-d/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn breadcrumb_path(data: &ExtractedData) -> String {
    if data.breadcrumbs.is_empty() {
        return NO_BREADCRUMBS.to_string();
    }
    data.breadcrumbs
        .iter()
        .map(|crumb| crumb.name.as_str())
        .collect::<Vec<_>>()
        .join(BREADCRUMB_SEPARATOR)
}

pub fn render(data: &ExtractedData) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Extracted Data Preview  [Successfully Scraped]");
    let _ = writeln!(out, "  Page Title: {}", data.title);

    let description = if data.description.trim().is_empty() {
        NO_DESCRIPTION
    } else {
        data.description.as_str()
    };
    let _ = writeln!(out, "  Meta Description: {description}");

    if let Some(author) = data.author.as_deref().filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "  Author: {author}");
    }
    if let Some(published) = data.date_published.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "  Publication Date: {}", format_date(published));
    }
    if let Some(image) = &data.image {
        let _ = writeln!(out, "  Featured Image: {}", image.url);
    }
    if let Some(section) = data.article_section.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "  Article Section: {section}");
    }
    let _ = writeln!(out, "  Breadcrumb Path: {}", breadcrumb_path(data));
    out
}
