use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, Url};
use scraper::Html;
use tracing::{debug, info};

use super::extract::rules::select_all;
use super::fetch::{RetryPolicy, upstream_error, with_retry};
use crate::error::ScrapeError;

/// Path fragment every player profile URL on the stats site contains.
pub const PROFILE_URL_PATTERN: &str = r"cricbuzz\.com/profiles/";
pub const DEFAULT_SITE_KEYWORD: &str = "cricbuzz";
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A web search returning result URLs in rank order.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, ScrapeError>;
}

/// Scrapes the plain HTML result page of a Google-style search endpoint.
#[derive(Debug, Clone)]
pub struct GoogleSearch {
    client: Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl GoogleSearch {
    #[must_use]
    pub fn new(client: Client, endpoint: impl Into<String>, retry: RetryPolicy) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            retry,
        }
    }
}

#[async_trait]
impl SearchProvider for GoogleSearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, ScrapeError> {
        // Ask for a couple extra; ads and duplicates get dropped while parsing.
        let num = (max_results + 2).to_string();
        let num = num.as_str();
        let endpoint = self.endpoint.as_str();

        with_retry(self.retry, endpoint, || async move {
            let resp = self
                .client
                .get(endpoint)
                .query(&[("q", query), ("num", num), ("hl", "en")])
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|e| upstream_error(endpoint, e))?;
            let body = resp.text().await.map_err(|e| upstream_error(endpoint, e))?;
            parse_search_results(&body, max_results)
        })
        .await
    }
}

/// Result URLs of a search page, in document order, without duplicates.
///
/// Redirect links of the form `/url?q=<target>&...` are unwrapped; links
/// back into the search engine itself are dropped.
///
/// # Errors
///
/// Will return `Err` only if the anchor selector fails to parse
pub fn parse_search_results(markup: &str, max_results: usize) -> Result<Vec<String>, ScrapeError> {
    let document = Html::parse_document(markup);
    let mut links: Vec<String> = Vec::new();

    for anchor in select_all(document.root_element(), "a[href]")? {
        if links.len() >= max_results {
            break;
        }
        let Some(target) = anchor.value().attr("href").and_then(result_target) else {
            continue;
        };
        if !links.contains(&target) {
            links.push(target);
        }
    }

    Ok(links)
}

fn result_target(href: &str) -> Option<String> {
    let target = match href.strip_prefix("/url?") {
        Some(query) => {
            let wrapped = Url::parse(&format!("https://www.google.com/url?{query}")).ok()?;
            wrapped
                .query_pairs()
                .find(|(k, _)| k == "q" || k == "url")
                .map(|(_, v)| v.into_owned())?
        }
        None => href.to_string(),
    };

    let parsed = Url::parse(&target).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") || is_search_engine_host(parsed.host_str()?) {
        return None;
    }
    Some(target)
}

fn is_search_engine_host(host: &str) -> bool {
    host.split('.').any(|label| label == "google")
        || host.ends_with("googleusercontent.com")
        || host.ends_with("gstatic.com")
}

/// Turns a player name into the URL of their profile page.
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    site_keyword: String,
    max_results: usize,
    pattern: Regex,
}

impl ProfileResolver {
    /// # Errors
    ///
    /// Will return `Err` if the profile pattern does not compile
    pub fn new(site_keyword: impl Into<String>, max_results: usize) -> Result<Self, ScrapeError> {
        let pattern = Regex::new(PROFILE_URL_PATTERN)
            .map_err(|e| ScrapeError::Internal(format!("invalid profile pattern: {e}")))?;
        Ok(Self {
            site_keyword: site_keyword.into(),
            max_results,
            pattern,
        })
    }

    #[must_use]
    pub fn query_for(&self, player_name: &str) -> String {
        format!("{} {}", player_name.trim(), self.site_keyword)
    }

    #[must_use]
    pub fn is_profile_url(&self, url: &str) -> bool {
        self.pattern.is_match(url)
    }

    /// First profile URL among the top results.
    ///
    /// # Errors
    ///
    /// Will return `ScrapeError::NotFound` if no result in the window is a
    /// profile page, or the provider's error if the search itself fails
    pub async fn resolve(
        &self,
        provider: &dyn SearchProvider,
        player_name: &str,
    ) -> Result<String, ScrapeError> {
        let query = self.query_for(player_name);
        let results = provider.search(&query, self.max_results).await?;
        debug!(query = %query, count = results.len(), "search returned");

        let found = results
            .into_iter()
            .take(self.max_results)
            .find(|url| self.is_profile_url(url));

        match found {
            Some(url) => {
                info!(player = player_name, url = %url, "resolved player profile");
                Ok(url)
            }
            None => Err(ScrapeError::NotFound),
        }
    }
}
