use serde::Serialize;

/// One dish served at one station of one location on the extracted day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MenuEntry {
    pub location: String,
    pub station: String,
    pub item: String,
}

impl MenuEntry {
    pub fn new(
        location: impl Into<String>,
        station: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            station: station.into(),
            item: item.into(),
        }
    }

    /// Case-insensitive substring test against the item name.
    /// `needle` must already be lowercased.
    pub fn item_contains(&self, needle: &str) -> bool {
        self.item.to_lowercase().contains(needle)
    }
}
