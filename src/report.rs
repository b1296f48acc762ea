use chrono::{Days, NaiveDate};

use crate::scan::{date_label, DayOutcome, DayStatus, SearchResult};

const BANNER_WIDTH: usize = 65;
const RULE_WIDTH: usize = 40;

pub fn header(keyword: &str, days: u32, start: NaiveDate) -> String {
    let range = match days.checked_sub(1) {
        None => "  Date range: none".to_owned(),
        Some(last) => {
            let end = start
                .checked_add_days(Days::new(u64::from(last)))
                .unwrap_or(NaiveDate::MAX);
            format!("  Date range: {start} to {end}")
        }
    };
    format!("Searching UW Food Services menus for \"{keyword}\"...\n{range}\n  ({days} days)\n")
}

/// One line per scanned day, e.g. `  Checking Thursday, March 14, 2024... found 2 match(es)!`
pub fn progress_line(outcome: &DayOutcome) -> String {
    let label = date_label(outcome.date);
    match &outcome.status {
        DayStatus::Scanned { matches: 0, items } => {
            format!("  Checking {label}... no matches ({items} items scanned)")
        }
        DayStatus::Scanned { matches, .. } => {
            format!("  Checking {label}... found {matches} match(es)!")
        }
        DayStatus::Failed(e) => format!("  Checking {label}... [error: {e}]"),
    }
}

/// Results grouped under their date label, in the order they were found.
pub fn render(keyword: &str, days: u32, results: &[SearchResult]) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    if results.is_empty() {
        return format!(
            "{banner}\n  No \"{keyword}\" found in the next {days} days.\n{banner}\n\n\
             \x20 Tip: Try a broader search, e.g.:\n\
             \x20   uw_menu --keyword \"beef\"\n\
             \x20   uw_menu --keyword \"burger\"\n\
             \x20   uw_menu --days 30\n"
        );
    }

    let mut lines = vec![
        banner.clone(),
        format!("  RESULTS: Found \"{keyword}\" on {} menu(s)!", results.len()),
        banner,
    ];
    let mut current_date: Option<&str> = None;
    for result in results {
        if current_date != Some(result.date_label.as_str()) {
            current_date = Some(&result.date_label);
            lines.push(String::new());
            lines.push(format!("  {}", result.date_label));
            lines.push(format!("  {}", "-".repeat(RULE_WIDTH)));
        }
        lines.push(format!("    Location : {}", result.location));
        lines.push(format!("    Station  : {}", result.station));
        lines.push(format!("    Item     : {}", result.item));
        lines.push(String::new());
    }
    lines.push(String::new());
    lines.join("\n")
}
