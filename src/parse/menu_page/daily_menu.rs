use std::collections::HashSet;

use scraper::{ElementRef, Html};

use super::container::Container;
use super::menu_entry::MenuEntry;
use crate::static_selector;

/// The deduplicated menu entries found on one day's page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyMenu {
    entries: Vec<MenuEntry>,
}

impl DailyMenu {
    /// Walks every paragraph container in document order. A location label
    /// carries over to the containers after it until another label replaces it;
    /// a blank label clears it.
    pub fn from_html_element(element: ElementRef<'_>) -> Self {
        static_selector!(CONTAINER_SELECTOR <- "div.entity-paragraphs-item");

        let mut current_location: Option<String> = None;
        let mut entries = Vec::new();
        for container in element.select(&CONTAINER_SELECTOR).map(Container::from_html_element) {
            let Container {
                location,
                station,
                items,
            } = container;
            if let Some(location) = location {
                current_location = Some(location).filter(|l| !l.is_empty());
            }
            let Some(location) = current_location.as_deref() else {
                log::trace!("skipping container with no location in effect");
                continue;
            };
            let (Some(station), Some(items)) = (station, items) else {
                continue;
            };
            entries.extend(
                items
                    .into_iter()
                    .map(|item| MenuEntry::new(location, station.as_str(), item)),
            );
        }

        // nested containers repeat the items of their children
        let mut seen = HashSet::with_capacity(entries.len());
        entries.retain(|entry| seen.insert(entry.clone()));

        Self { entries }
    }

    pub fn into_entries(self) -> Vec<MenuEntry> {
        self.entries
    }
}

/// Parses a full daily-menu page. Pages without menu markup (closures, holidays)
/// yield no entries rather than an error.
pub fn extract(html: &str) -> Vec<MenuEntry> {
    let document = Html::parse_document(html);
    DailyMenu::from_html_element(document.root_element()).into_entries()
}
