use std::fmt::{self, Display, Formatter};

/// Lifecycle status reported by the content source for a project.
///
/// The source sends free-form lowercase strings. Known values map to the
/// named variants; anything else is preserved verbatim in `Other` so a new
/// backend status never fails decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum ItemStatus {
    Ongoing,
    Completed,
    Upcoming,
    #[default]
    Unknown,
    Other(String),
}

impl ItemStatus {
    /// Only ongoing projects are eligible for the carousel.
    pub fn is_ongoing(&self) -> bool {
        matches!(self, ItemStatus::Ongoing)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::Ongoing => "ongoing",
            ItemStatus::Completed => "completed",
            ItemStatus::Upcoming => "upcoming",
            ItemStatus::Unknown => "",
            ItemStatus::Other(raw) => raw,
        }
    }
}

impl From<&str> for ItemStatus {
    fn from(value: &str) -> Self {
        match value {
            "ongoing" => ItemStatus::Ongoing,
            "completed" => ItemStatus::Completed,
            "upcoming" => ItemStatus::Upcoming,
            "" => ItemStatus::Unknown,
            other => ItemStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ItemStatus {
    fn from(value: String) -> Self {
        ItemStatus::from(value.as_str())
    }
}

impl From<ItemStatus> for String {
    fn from(value: ItemStatus) -> Self {
        value.as_str().to_string()
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
