use crate::core::SchemaResult;
use log::debug;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5005";
pub const BACKEND_URL_ENV: &str = "SCHEMAGEN_BACKEND_URL";

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub backend_url: Url,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: Url::parse(DEFAULT_BACKEND_URL).expect("default backend URL is valid"),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> SchemaResult<Self> {
        Self::from_backend_var(std::env::var(BACKEND_URL_ENV).ok())
    }

    fn from_backend_var(value: Option<String>) -> SchemaResult<Self> {
        match value.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                debug!("Using backend from {}: {}", BACKEND_URL_ENV, raw);
                Self::default().with_backend_url(raw)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn with_backend_url(mut self, backend_url: &str) -> SchemaResult<Self> {
        self.backend_url = Url::parse(backend_url)?;
        Ok(self)
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// `<backend_url>/api/scrape`, keeping any path prefix of the base URL.
    pub fn scrape_endpoint(&self) -> SchemaResult<Url> {
        let mut base = self.backend_url.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(base.join("api/scrape")?)
    }
}
