use actix_web::http::StatusCode;
use thiserror::Error;

/// Failure kinds surfaced by the scraping pipeline.
///
/// Payloads are written by this crate; raw transport errors are logged, never
/// forwarded to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrapeError {
    #[error("player profile not found")]
    NotFound,
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    /// A 4xx answer: asking again will not change it.
    #[error("upstream rejected request: {0}")]
    UpstreamRejected(String),
    #[error("upstream markup changed: {0}")]
    UpstreamShapeChanged(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ScrapeError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScrapeError::NotFound => StatusCode::NOT_FOUND,
            ScrapeError::UpstreamUnavailable(_)
            | ScrapeError::UpstreamRejected(_)
            | ScrapeError::UpstreamShapeChanged(_)
            | ScrapeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Transport failures and 5xx answers, the only ones worth a second attempt.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, ScrapeError::UpstreamUnavailable(_))
    }

    pub fn missing(what: &str) -> Self {
        ScrapeError::UpstreamShapeChanged(format!("missing {what}"))
    }
}

impl From<reqwest::Error> for ScrapeError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status().filter(|s| s.is_client_error()) {
            return ScrapeError::UpstreamRejected(format!("status {status}"));
        }
        let detail = if e.is_timeout() {
            "request timed out".to_string()
        } else if e.is_connect() {
            "connection failed".to_string()
        } else if let Some(status) = e.status() {
            format!("status {status}")
        } else if e.is_body() || e.is_decode() {
            "could not read response body".to_string()
        } else {
            "request failed".to_string()
        };
        ScrapeError::UpstreamUnavailable(detail)
    }
}

impl<'a> From<scraper::error::SelectorErrorKind<'a>> for ScrapeError {
    fn from(e: scraper::error::SelectorErrorKind<'a>) -> Self {
        ScrapeError::Internal(format!("invalid selector: {e}"))
    }
}
