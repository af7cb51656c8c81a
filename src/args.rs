use clap::Parser;
use std::time::Duration;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the arguments are inconsistent
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    validation::check_keyword(&args.site_keyword)?;
    Ok(CleanArgs::new(args))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        if !args.static_dir.is_dir() {
            tracing::warn!(
                static_dir = %args.static_dir.display(),
                "static directory not found, /static will return 404"
            );
        }
        CleanArgs {
            host: args.host,
            port: args.port,
            timeout: Duration::from_secs(args.timeout_secs),
            retries: args.retries,
            retry_backoff: Duration::from_millis(args.retry_backoff_ms),
            search_url: args.search_url,
            search_results: usize::from(args.search_results),
            site_keyword: args.site_keyword.trim().to_string(),
            schedule_url: args.schedule_url,
            live_url: args.live_url,
            static_dir: args.static_dir,
        }
    }
}
