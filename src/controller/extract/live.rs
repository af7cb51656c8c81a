use scraper::Html;
use tracing::debug;

use super::rules::{FieldRule, MissingPolicy, Query, text_of};
use crate::error::ScrapeError;
use crate::model::LiveMatchEntry;

pub const LIVE_CONTAINER: FieldRule = FieldRule::new(
    "live scores container",
    Query::class("div", "cb-col cb-col-100 cb-bg-white"),
    0,
    MissingPolicy::Fail,
);
pub const LIVE_SCORE: Query = Query::class("div", "cb-scr-wll-chvrn cb-lv-scrs-col");

/// # Errors
///
/// Will return `Err` if the live scores container is absent
pub fn extract_live(markup: &str) -> Result<Vec<LiveMatchEntry>, ScrapeError> {
    let document = Html::parse_document(markup);
    let container = LIVE_CONTAINER.require(document.root_element())?;

    let matches: Vec<LiveMatchEntry> =
        LIVE_SCORE.all(container)?.into_iter().map(text_of).collect();

    debug!(count = matches.len(), "extracted live matches");
    Ok(matches)
}
