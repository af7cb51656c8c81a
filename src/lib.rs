pub mod args;
pub mod error;
pub mod model;
pub mod state;
pub mod controller {
    pub mod extract;
    pub mod fetch;
    pub mod http_handlers;
    pub mod search;
}
pub mod view {
    pub mod index;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::ScrapeError;
pub use state::{AppState, UpstreamUrls};
