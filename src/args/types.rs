use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SCHEDULE_URL: &str =
    "https://www.cricbuzz.com/cricket-schedule/upcoming-series/international";
pub const DEFAULT_LIVE_URL: &str = "https://www.cricbuzz.com/cricket-match/live-scores";
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the http server to.
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "5201")]
    pub port: u16,

    /// Timeout for each outbound request, in seconds.
    #[arg(
        long,
        value_name = "SECONDS",
        default_value = "10",
        value_parser = clap::value_parser!(u64).range(1..=120)
    )]
    pub timeout_secs: u64,
    /// Extra attempts after a failed upstream request.
    #[arg(
        long,
        value_name = "COUNT",
        default_value = "1",
        value_parser = clap::value_parser!(u32).range(0..=3)
    )]
    pub retries: u32,
    #[arg(long, value_name = "MILLISECONDS", default_value = "500")]
    pub retry_backoff_ms: u64,

    /// Search endpoint used to find player profile pages.
    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_SEARCH_URL,
        value_parser = crate::args::validation::check_http_url
    )]
    pub search_url: String,
    /// How many search results are scanned for a profile link.
    #[arg(
        long,
        value_name = "COUNT",
        default_value = "5",
        value_parser = clap::value_parser!(u16).range(1..=20)
    )]
    pub search_results: u16,
    /// Appended to every player query to keep results on the stats site.
    #[arg(long, value_name = "KEYWORD", default_value = "cricbuzz")]
    pub site_keyword: String,

    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_SCHEDULE_URL,
        value_parser = crate::args::validation::check_http_url
    )]
    pub schedule_url: String,
    #[arg(
        long,
        value_name = "URL",
        default_value = DEFAULT_LIVE_URL,
        value_parser = crate::args::validation::check_http_url
    )]
    pub live_url: String,

    /// Directory served under /static.
    #[arg(long, value_name = "DIR", default_value = "./static")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
    pub retries: u32,
    pub retry_backoff: Duration,
    pub search_url: String,
    pub search_results: usize,
    pub site_keyword: String,
    pub schedule_url: String,
    pub live_url: String,
    pub static_dir: PathBuf,
}
