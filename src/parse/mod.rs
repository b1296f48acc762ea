mod menu_page;
mod remove_excess_whitespace;
mod static_selector;
mod text_from_selection;

pub use menu_page::{extract, MenuEntry};
pub use remove_excess_whitespace::remove_excess_whitespace;
