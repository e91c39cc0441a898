//! # Wikipedia summary client
//!
//! [`WikipediaClient`] implements [`KnowledgeLookup`] over the Wikipedia REST API
//! (`GET {base}/page/summary/{Title}`), returning the first few sentences of the page extract.
//! With a search URL set, the subject is first resolved to a canonical page title through the
//! MediaWiki `opensearch` action, so "eiffel tower" reads the `Eiffel_Tower` page.

use async_trait::async_trait;
use jj_core::{KnowledgeLookup, LookupError};
use reqwest::{Client, StatusCode, Url};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

mod sentences;

pub use sentences::first_sentences;

pub const DEFAULT_WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/api/rest_v1";
pub const DEFAULT_WIKIPEDIA_SEARCH_URL: &str = "https://en.wikipedia.org/w/api.php";

const USER_AGENT: &str = concat!("jj-assistant/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    base_url: Url,
    search_url: Option<Url>,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    #[serde(rename = "type", default)]
    page_type: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
}

/// `[query, [titles], [descriptions], [urls]]`
type OpenSearchResponse = (IgnoredAny, Vec<String>, IgnoredAny, IgnoredAny);

fn parse_url(url: &str) -> Result<Url, LookupError> {
    let parsed = Url::parse(url)
        .map_err(|e| LookupError::Request(format!("invalid Wikipedia URL {}: {}", url, e)))?;
    if parsed.cannot_be_a_base() {
        return Err(LookupError::Request(format!("not a base URL: {}", parsed)));
    }
    Ok(parsed)
}

impl WikipediaClient {
    /// Client for `base_url`, e.g. [`DEFAULT_WIKIPEDIA_API_URL`].
    pub fn new(base_url: &str) -> Result<Self, LookupError> {
        let base_url = parse_url(base_url)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| LookupError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            search_url: None,
        })
    }

    /// Resolve subjects through the MediaWiki action API at `search_url`, e.g.
    /// [`DEFAULT_WIKIPEDIA_SEARCH_URL`]. Without it the subject is used as the title directly.
    pub fn with_search_url(mut self, search_url: &str) -> Result<Self, LookupError> {
        self.search_url = Some(parse_url(search_url)?);
        Ok(self)
    }

    fn summary_url(&self, title: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["page", "summary", title]);
        }
        url
    }

    /// Canonical title for `subject`. `None` when the search ran and matched nothing.
    /// Search transport failures fall back to the subject itself.
    async fn resolve_title(&self, subject: &str) -> Option<String> {
        let Some(search_url) = &self.search_url else {
            return Some(page_title(subject));
        };
        info!(subject = %subject, "step: Wikipedia title search");

        let response = self
            .client
            .get(search_url.clone())
            .query(&[
                ("action", "opensearch"),
                ("search", subject),
                ("limit", "1"),
                ("namespace", "0"),
                ("redirects", "resolve"),
                ("format", "json"),
            ])
            .send()
            .await
            .and_then(|r| r.error_for_status());
        let found = match response {
            Ok(response) => response.json::<OpenSearchResponse>().await,
            Err(e) => Err(e),
        };

        match found {
            Ok((_, titles, _, _)) => {
                debug!(titles = ?titles, "Search results received");
                titles.first().map(|t| page_title(t))
            }
            Err(e) => {
                warn!(error = %e, "Wikipedia search failed, using the subject as title");
                Some(page_title(subject))
            }
        }
    }
}

/// "jules  verne" → "Jules_verne". Wikipedia titles are case-sensitive except for the first letter.
pub fn page_title(subject: &str) -> String {
    let joined = subject.split_whitespace().collect::<Vec<_>>().join("_");
    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[async_trait]
impl KnowledgeLookup for WikipediaClient {
    #[instrument(skip(self))]
    async fn summarize(&self, subject: &str, max_sentences: usize) -> Result<String, LookupError> {
        if subject.trim().is_empty() {
            return Err(LookupError::NotFound(subject.to_string()));
        }
        let Some(title) = self.resolve_title(subject).await.filter(|t| !t.is_empty()) else {
            return Err(LookupError::NotFound(subject.to_string()));
        };
        let url = self.summary_url(&title);
        info!(title = %title, "step: Wikipedia summary request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(subject.to_string()));
        }
        if !status.is_success() {
            return Err(LookupError::Request(format!(
                "Wikipedia returned {} for {}",
                status, title
            )));
        }

        let summary: SummaryResponse = response
            .json()
            .await
            .map_err(|e| LookupError::Request(format!("malformed summary: {}", e)))?;
        debug!(page_type = %summary.page_type, page_title = %summary.title, "Summary received");

        if summary.page_type == "disambiguation" {
            return Err(LookupError::Ambiguous(subject.to_string()));
        }
        let text = first_sentences(&summary.extract, max_sentences);
        if text.is_empty() {
            return Err(LookupError::NotFound(subject.to_string()));
        }
        Ok(text)
    }
}
