//! HTTP client for the upstream job-listings API
//!
//! Two read-only operations: list jobs with search/page parameters and fetch
//! a single job by id. Every failure mode (transport error, timeout,
//! non-JSON body) is logged and normalized to an empty result shape; nothing
//! propagates to the handlers.

use crate::config::ApiConfig;
use crate::errors::{error_logging, AppResult};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// One job record as returned by the API.
///
/// No field is guaranteed present. Accessors supply the display defaults so
/// callers never deal with the raw options.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobRecord {
    /// Upstream id; may be a JSON string or number
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// ISO-8601 posting timestamp
    #[serde(default)]
    pub posted_at: Option<String>,
    /// ISO-8601 scrape timestamp, drives the 🆕 badge
    #[serde(default)]
    pub scraped_at: Option<String>,
}

impl JobRecord {
    /// Title, defaulting to "No title"
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("No title")
    }

    /// Company name, defaulting to "Unknown"
    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or("Unknown")
    }

    /// Description, defaulting to "No description"
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("No description")
    }

    /// Application URL, defaulting to the empty string
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// Posting timestamp, defaulting to the empty string
    pub fn posted_at(&self) -> &str {
        self.posted_at.as_deref().unwrap_or("")
    }

    /// Scrape timestamp, defaulting to the empty string
    pub fn scraped_at(&self) -> &str {
        self.scraped_at.as_deref().unwrap_or("")
    }

    /// Upstream ids are heterogeneous (string or number); callback tokens
    /// carry them as strings, so comparisons go through this accessor.
    pub fn id_string(&self) -> Option<String> {
        match &self.id {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// One page of job records plus a has-more-pages indicator
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageResult {
    #[serde(default)]
    pub results: Vec<JobRecord>,
    /// Boolean-ish: the upstream sends a next-page URL, null, or a bare bool
    #[serde(default)]
    pub next: Option<Value>,
}

impl PageResult {
    /// The normalized failure shape: no results, no further pages
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            next: None,
        }
    }

    /// Whether a further page exists, by truthiness of `next`
    pub fn has_next(&self) -> bool {
        match &self.next {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
            Some(_) => true,
        }
    }
}

/// Client for the job-listings API
#[derive(Debug, Clone)]
pub struct JobApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl JobApiClient {
    /// Build a client with the configured base URL and total-request timeout
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List jobs matching `search` on the given 1-based page.
    ///
    /// Any failure degrades to [`PageResult::empty`]; the caller only ever
    /// sees an empty page.
    pub async fn list_jobs(&self, search: &str, page: u32) -> PageResult {
        let url = format!("{}/jobs/", self.base_url);
        match self.fetch_jobs(&url, search, page).await {
            Ok(data) => {
                debug!(
                    search = %search,
                    page,
                    results = data.results.len(),
                    has_next = data.has_next(),
                    "list_jobs response"
                );
                data
            }
            Err(e) => {
                error_logging::log_network_error(&e, "list_jobs", Some(&url));
                PageResult::empty()
            }
        }
    }

    async fn fetch_jobs(&self, url: &str, search: &str, page: u32) -> AppResult<PageResult> {
        let response = self
            .http
            .get(url)
            .query(&[("search", search.to_string()), ("page", page.to_string())])
            .send()
            .await?;
        Ok(response.json::<PageResult>().await?)
    }

    /// Fetch a single job by id; any failure degrades to the empty record
    pub async fn get_job(&self, id: &str) -> JobRecord {
        let url = format!("{}/jobs/{}/", self.base_url, id);
        match self.fetch_job(&url).await {
            Ok(job) => job,
            Err(e) => {
                error_logging::log_network_error(&e, "get_job", Some(&url));
                JobRecord::default()
            }
        }
    }

    async fn fetch_job(&self, url: &str) -> AppResult<JobRecord> {
        let response = self.http.get(url).send().await?;
        Ok(response.json::<JobRecord>().await?)
    }
}
