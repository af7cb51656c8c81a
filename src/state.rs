use std::sync::Arc;

use crate::args::CleanArgs;
use crate::controller::fetch::{HttpFetcher, PageFetcher, RetryPolicy, build_client};
use crate::controller::search::{GoogleSearch, ProfileResolver, SearchProvider};
use crate::error::ScrapeError;

/// Fixed pages scraped by the listing endpoints.
#[derive(Debug, Clone)]
pub struct UpstreamUrls {
    pub schedule: String,
    pub live: String,
}

/// Everything a request handler needs; immutable and shared across workers.
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<dyn SearchProvider>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub resolver: ProfileResolver,
    pub upstream: UpstreamUrls,
}

impl AppState {
    #[must_use]
    pub fn new(
        search: Arc<dyn SearchProvider>,
        fetcher: Arc<dyn PageFetcher>,
        resolver: ProfileResolver,
        upstream: UpstreamUrls,
    ) -> Self {
        Self {
            search,
            fetcher,
            resolver,
            upstream,
        }
    }

    /// Production wiring: reqwest-backed search and fetch sharing one client.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the http client or the profile pattern cannot be built
    pub fn from_args(args: &CleanArgs) -> Result<Self, ScrapeError> {
        let client = build_client(args.timeout)?;
        let retry = RetryPolicy {
            retries: args.retries,
            backoff: args.retry_backoff,
        };

        Ok(Self::new(
            Arc::new(GoogleSearch::new(client.clone(), &args.search_url, retry)),
            Arc::new(HttpFetcher::new(client, retry)),
            ProfileResolver::new(&args.site_keyword, args.search_results)?,
            UpstreamUrls {
                schedule: args.schedule_url.clone(),
                live: args.live_url.clone(),
            },
        ))
    }
}
