use std::sync::OnceLock;

use scraper::Selector;

/// A CSS selector for the daily-menu markup (`div.entity-paragraphs-item`,
/// `li.dm-menu-item`, ...) compiled the first time a page is parsed and
/// reused for every later day of a scan.
#[derive(Debug)]
pub(super) struct StaticSelector<'a> {
    cell: OnceLock<Selector>,
    selector: &'a str,
}

impl<'a> StaticSelector<'a> {
    pub(super) const fn new(selector: &'a str) -> Self {
        Self {
            cell: OnceLock::new(),
            selector,
        }
    }
}

impl core::ops::Deref for StaticSelector<'_> {
    type Target = Selector;

    fn deref(&self) -> &Self::Target {
        self.cell
            .get_or_init(|| match Selector::parse(self.selector) {
                Ok(sel) => sel,
                Err(e) => panic!("Error parsing static selector {}: {:?}", self.selector, e),
            })
    }
}

/// `static_selector!(ITEM_SELECTOR <- "li.dm-menu-item");` declares a function-local
/// static usable anywhere a `&Selector` is expected.
#[macro_export]
macro_rules! static_selector {
    ($x: ident <- $sel: literal) => {
        static $x: $crate::parse::static_selector::StaticSelector =
            $crate::parse::static_selector::StaticSelector::new($sel);
    };
}
