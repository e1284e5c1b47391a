use anyhow::{Context, Result, bail};
use dom_query::Document;
use std::time::Duration;

/// Lookup URL template; the query text is appended as the last path segment.
const LOOKUP_URL: &str = "https://tureng.com/en/turkish-english";

/// tureng rejects requests without a browser-looking user agent.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:51.0) Gecko/20100101 Firefox/51.0";

/// Ceiling on the whole request; the lookup fails fast rather than hangs.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the dictionary's lookup pages.
pub struct LookupClient {
    client: reqwest::Client,
}

impl LookupClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// Fetches the lookup page for `query` and parses it into a document
    /// tree. Performs exactly one GET; no retries.
    pub async fn fetch_document(&self, query: &str) -> Result<Document> {
        let url = format!("{LOOKUP_URL}/{query}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach {url}"))?;

        if !response.status().is_success() {
            bail!("Lookup request failed with status {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read lookup page body")?;

        Ok(Document::from(body.as_str()))
    }
}
