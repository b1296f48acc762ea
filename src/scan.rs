use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::fetch::{self, MenuSource};
use crate::parse::{self, MenuEntry};

pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";
pub const DATE_LABEL_FORMAT: &str = "%A, %B %d, %Y";

/// A matching menu entry together with the day it was found on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub date_label: String,
    pub date_key: String,
    pub location: String,
    pub station: String,
    pub item: String,
}

impl SearchResult {
    pub fn new(date: NaiveDate, entry: MenuEntry) -> Self {
        let MenuEntry {
            location,
            station,
            item,
        } = entry;
        Self {
            date_label: date_label(date),
            date_key: date_key(date),
            location,
            station,
            item,
        }
    }
}

/// What happened on one day of a scan, handed to the progress callback.
#[derive(Debug)]
pub struct DayOutcome {
    pub date: NaiveDate,
    pub status: DayStatus,
}

#[derive(Debug)]
pub enum DayStatus {
    Scanned { items: usize, matches: usize },
    Failed(fetch::Error),
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}

/// `count` consecutive days starting at `start`. Stops early at the end of the calendar.
pub fn date_iter(start: NaiveDate, count: u32) -> impl Iterator<Item = NaiveDate> {
    (0..count).map_while(move |x| start.checked_add_days(Days::new(x.into())))
}

/// Fetches `day_count` consecutive days starting at `start`, one after another,
/// and collects every entry whose item contains `keyword` (ignoring case).
///
/// A day whose page cannot be fetched is reported through `on_day` and skipped;
/// it never stops the scan or discards the matches of other days.
pub async fn search<S: MenuSource>(
    source: &S,
    keyword: &str,
    day_count: u32,
    start: NaiveDate,
    mut on_day: impl FnMut(&DayOutcome),
) -> Vec<SearchResult> {
    let needle = keyword.to_lowercase();
    let mut results = Vec::new();

    for date in date_iter(start, day_count) {
        let status = match source.fetch(date).await {
            Ok(html) => {
                let entries = parse::extract(&html);
                let items = entries.len();
                let before = results.len();
                results.extend(
                    entries
                        .into_iter()
                        .filter(|entry| entry.item_contains(&needle))
                        .map(|entry| SearchResult::new(date, entry)),
                );
                let matches = results.len() - before;
                log::debug!("{date}: {matches} of {items} items match {keyword:?}");
                DayStatus::Scanned { items, matches }
            }
            Err(e) => {
                log::warn!("Skipping {date}: {e}");
                DayStatus::Failed(e)
            }
        };
        on_day(&DayOutcome { date, status });
    }

    results
}
