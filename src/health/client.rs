// src/health/client.rs
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// Transport failure reported by a `SiteClient` that isn't reqwest-backed.
    #[error("{0}")]
    Connect(String),
}

/// The HTTP side of a probe: one GET, reduced to the final status code.
#[async_trait]
pub trait SiteClient: Send + Sync {
    async fn fetch_status(&self, url: &Url) -> Result<StatusCode, ProbeError>;

    fn name(&self) -> &'static str;
}

/// `reqwest`-backed client. Redirects are followed (up to reqwest's default
/// limit of 10), so a 3xx only counts if it never lands on a 200.
#[derive(Debug, Clone)]
pub struct HttpSiteClient {
    client: Client,
}

impl HttpSiteClient {
    pub fn new() -> Result<Self, ProbeError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl SiteClient for HttpSiteClient {
    async fn fetch_status(&self, url: &Url) -> Result<StatusCode, ProbeError> {
        let response = self.client.get(url.clone()).send().await?;
        Ok(response.status())
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
