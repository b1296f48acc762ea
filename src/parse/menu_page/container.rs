use scraper::ElementRef;

use crate::parse::text_from_selection::{get_inner_text, text_from_selection};
use crate::static_selector;

/// What a single `div.entity-paragraphs-item` block declares on its own.
/// Every part is optional; the daily menu decides what to do with the gaps.
#[derive(Debug, Default, PartialEq, Eq)]
pub(super) struct Container {
    /// `Some("")` when the label is present but blank.
    pub location: Option<String>,
    pub station: Option<String>,
    pub items: Option<Vec<String>>,
}

impl Container {
    pub fn from_html_element(element: ElementRef<'_>) -> Self {
        // example markup at ../html_examples/daily_menu.html
        static_selector!(LOCATION_SELECTOR <- "li.dm-location");
        static_selector!(STATION_SELECTOR <- "li.dm-menu-type");
        static_selector!(MENUS_SELECTOR <- "ul.dm-menus");

        let location = element
            .select(&LOCATION_SELECTOR)
            .next()
            .map(|label| get_inner_text(label).unwrap_or_default());
        let station = text_from_selection(&STATION_SELECTOR, element);
        let items = element
            .select(&MENUS_SELECTOR)
            .next()
            .map(Self::items_from_list);

        Self {
            location,
            station,
            items,
        }
    }

    fn items_from_list(list: ElementRef<'_>) -> Vec<String> {
        static_selector!(ITEM_SELECTOR <- "li.dm-menu-item");
        static_selector!(LINK_SELECTOR <- "a");
        list.select(&ITEM_SELECTOR)
            .filter_map(|item| {
                // the linked recipe name is cleaner than the li text, which may
                // carry dietary badges next to it
                match item.select(&LINK_SELECTOR).next() {
                    Some(link) => get_inner_text(link),
                    None => get_inner_text(item),
                }
            })
            .collect()
    }
}
