use log::{debug, info};
use serde_json::{Map, Value};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use super::clipboard::Clipboard;
use super::notify::Notification;
use crate::core::Session;
use crate::http::{SchemaBundle, SchemaKind};
use crate::SchemaResult;

pub const RICH_RESULTS_TEST_URL: &str = "https://search.google.com/test/rich-results";
pub const DOWNLOAD_FILENAME: &str = "schemas.json";
pub const NO_SCHEMAS: &str = "No schemas were generated for this page.";
pub const COPY_FAILED: &str = "Failed to copy to clipboard";
pub const PROCESS_ANOTHER: &str = "Process Another URL";

pub fn wrap_script(json: &str) -> String {
    format!("<script type=\"application/ld+json\">\n{json}\n</script>")
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaResults {
    schemas: SchemaBundle,
    active: Option<SchemaKind>,
}

impl SchemaResults {
    pub fn new(schemas: SchemaBundle) -> Self {
        let active = schemas.first_kind();
        Self { schemas, active }
    }

    pub fn schemas(&self) -> &SchemaBundle {
        &self.schemas
    }

    pub fn tabs(&self) -> Vec<SchemaKind> {
        self.schemas.kinds()
    }

    pub fn active(&self) -> Option<SchemaKind> {
        self.active
    }

    pub fn select(&mut self, kind: SchemaKind) -> bool {
        if self.schemas.get(kind).is_none() {
            return false;
        }
        self.active = Some(kind);
        true
    }

    fn schema(&self, kind: SchemaKind) -> Option<&Map<String, Value>> {
        self.schemas.get(kind)
    }

    pub fn pretty(&self, kind: SchemaKind) -> SchemaResult<Option<String>> {
        self.schema(kind)
            .map(|schema| serde_json::to_string_pretty(schema).map_err(Into::into))
            .transpose()
    }

    pub fn minified(&self, kind: SchemaKind) -> SchemaResult<Option<String>> {
        self.schema(kind)
            .map(|schema| serde_json::to_string(schema).map_err(Into::into))
            .transpose()
    }

    pub fn snippet(&self, kind: SchemaKind) -> SchemaResult<Option<String>> {
        Ok(self.pretty(kind)?.map(|json| wrap_script(&json)))
    }

    pub fn copy(
        &self,
        kind: SchemaKind,
        minified: bool,
        clipboard: &mut dyn Clipboard,
    ) -> Notification {
        let json = if minified {
            self.minified(kind)
        } else {
            self.pretty(kind)
        };

        let text = match json {
            Ok(Some(json)) => wrap_script(&json),
            Ok(None) => {
                debug!("No {} schema to copy", kind);
                return Notification::error(COPY_FAILED);
            }
            Err(e) => {
                debug!("Could not serialize {} schema: {}", kind, e);
                return Notification::error(COPY_FAILED);
            }
        };

        match clipboard.write_text(&text) {
            Ok(()) => {
                let label = if minified {
                    format!("{} (Minified)", kind.label())
                } else {
                    kind.label().to_string()
                };
                Notification::success(format!("{label} schema copied to clipboard!"))
            }
            Err(e) => {
                debug!("Clipboard write failed: {}", e);
                Notification::error(COPY_FAILED)
            }
        }
    }

    pub fn download_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string_pretty(&self.schemas)?)
    }

    pub fn download_all(&self, dir: &Path) -> SchemaResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(DOWNLOAD_FILENAME);
        fs::write(&path, self.download_json()?)?;
        info!("Saved {} schema(s) to {}", self.tabs().len(), path.display());
        Ok(path)
    }

    pub fn render(&self) -> SchemaResult<String> {
        let mut out = String::new();
        let _ = writeln!(out, "Generated Schemas");
        let _ = writeln!(
            out,
            "Copy and paste these schemas into your website's head section"
        );

        let Some(active) = self.active else {
            let _ = writeln!(out, "\n{NO_SCHEMAS}");
            Self::write_actions(&mut out);
            return Ok(out);
        };

        let tabs = self
            .tabs()
            .into_iter()
            .map(|kind| {
                if kind == active {
                    format!("[{} Schema]", kind.label())
                } else {
                    format!(" {} Schema ", kind.label())
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(out, "{tabs}\n");

        let _ = writeln!(out, "{} Schema JSON-LD  [Valid]", active.label());
        if let Some(snippet) = self.snippet(active)? {
            let _ = writeln!(out, "{snippet}");
        }
        if let Some(minified) = self.minified(active)? {
            let _ = writeln!(out, "\nMinified Version\n{minified}");
        }
        Self::write_actions(&mut out);
        Ok(out)
    }

    fn write_actions(out: &mut String) {
        let _ = writeln!(
            out,
            "\n[Download as JSON]  [Test with Google]  [{PROCESS_ANOTHER}]"
        );
    }

    pub fn process_another(self, session: &Session) {
        debug!("Leaving results for {} schema(s)", self.tabs().len());
        session.reset();
    }
}
