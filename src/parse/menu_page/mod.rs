mod container;
mod daily_menu;
mod menu_entry;

pub use daily_menu::extract;
pub use menu_entry::MenuEntry;
