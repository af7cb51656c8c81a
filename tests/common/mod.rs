#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rusty_cricket::controller::fetch::PageFetcher;
use rusty_cricket::controller::search::{ProfileResolver, SearchProvider};
use rusty_cricket::{AppState, ScrapeError, UpstreamUrls};

pub const SCHEDULE_URL: &str = "https://cricket.test/cricket-schedule/upcoming-series/international";
pub const LIVE_URL: &str = "https://cricket.test/cricket-match/live-scores";
pub const PROFILE_URL: &str = "https://www.cricbuzz.com/profiles/1413/virat-kohli";

pub const PLAYER_PROFILE_HTML: &str = include_str!("../fixtures/player_profile.html");
pub const SCHEDULE_HTML: &str = include_str!("../fixtures/schedule.html");
pub const LIVE_HTML: &str = include_str!("../fixtures/live.html");
pub const SEARCH_RESULTS_HTML: &str = include_str!("../fixtures/search_results.html");

/// Search provider answering every query with the same canned result.
pub struct FakeSearch {
    result: Result<Vec<String>, ScrapeError>,
    pub queries: Mutex<Vec<(String, usize)>>,
}

impl FakeSearch {
    pub fn returning(urls: &[&str]) -> Self {
        Self {
            result: Ok(urls.iter().map(|u| (*u).to_string()).collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(e: ScrapeError) -> Self {
        Self {
            result: Err(e),
            queries: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SearchProvider for FakeSearch {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<String>, ScrapeError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));
        self.result.clone()
    }
}

/// Serves fixed pages by URL; unknown URLs fail like an unreachable host.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, Result<String, ScrapeError>>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn with_page(mut self, url: &str, markup: &str) -> Self {
        self.pages.insert(url.to_string(), Ok(markup.to_string()));
        self
    }

    pub fn with_failure(mut self, url: &str, e: ScrapeError) -> Self {
        self.pages.insert(url.to_string(), Err(e));
        self
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages.get(url).cloned().unwrap_or_else(|| {
            Err(ScrapeError::UpstreamUnavailable(
                "connection failed".to_string(),
            ))
        })
    }
}

pub fn test_state(search: Arc<FakeSearch>, fetcher: Arc<FakeFetcher>) -> AppState {
    AppState::new(
        search,
        fetcher,
        ProfileResolver::new("cricbuzz", 5).expect("profile pattern compiles"),
        UpstreamUrls {
            schedule: SCHEDULE_URL.to_string(),
            live: LIVE_URL.to_string(),
        },
    )
}
