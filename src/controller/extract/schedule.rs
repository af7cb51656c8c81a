use scraper::Html;
use tracing::debug;

use super::rules::{FieldRule, MissingPolicy, Query, text_of};
use crate::error::ScrapeError;
use crate::model::ScheduleEntry;

pub const SCHEDULE_BOX: Query = Query::class("div", "cb-col-100 cb-col");
pub const SCHEDULE_DATE: FieldRule = FieldRule::new(
    "schedule date",
    Query::class("div", "cb-lv-grn-strip text-bold"),
    0,
    MissingPolicy::Null,
);
// Same query as the box itself: the info block is the first nested box.
pub const SCHEDULE_INFO: FieldRule =
    FieldRule::new("schedule info", SCHEDULE_BOX, 0, MissingPolicy::Null);

/// One `"date - info"` line per schedule box that carries both parts.
///
/// # Errors
///
/// Will return `Err` only if a selector fails to parse
pub fn extract_schedule(markup: &str) -> Result<Vec<ScheduleEntry>, ScrapeError> {
    let document = Html::parse_document(markup);
    let mut entries = Vec::new();

    for container in SCHEDULE_BOX.all(document.root_element())? {
        let date = SCHEDULE_DATE.locate(container)?;
        let info = SCHEDULE_INFO.locate(container)?;
        if let (Some(date), Some(info)) = (date, info) {
            entries.push(format!("{} - {}", text_of(date), text_of(info)));
        }
    }

    debug!(count = entries.len(), "extracted schedule");
    Ok(entries)
}
