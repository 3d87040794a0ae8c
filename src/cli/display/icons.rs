//! Status icons for CLI output

/// What a merge did to one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Kept,
    Renamed,
    Dropped,
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryStatus::Kept => "Kept",
            EntryStatus::Renamed => "Renamed",
            EntryStatus::Dropped => "Dropped",
        }
    }
}

/// Status icons for different states
pub struct StatusIcon;

impl StatusIcon {
    /// Entry carried through unchanged
    pub const SUCCESS: &'static str = "✓";

    /// Entry renamed to avoid a collision
    pub const WARNING: &'static str = "⚠";

    /// Duplicate entry removed
    pub const DROPPED: &'static str = "✗";

    pub fn for_status(status: EntryStatus) -> &'static str {
        match status {
            EntryStatus::Kept => Self::SUCCESS,
            EntryStatus::Renamed => Self::WARNING,
            EntryStatus::Dropped => Self::DROPPED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_status() {
        assert_eq!(StatusIcon::for_status(EntryStatus::Kept), StatusIcon::SUCCESS);
        assert_eq!(StatusIcon::for_status(EntryStatus::Renamed), StatusIcon::WARNING);
        assert_eq!(StatusIcon::for_status(EntryStatus::Dropped), StatusIcon::DROPPED);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(EntryStatus::Renamed.as_str(), "Renamed");
    }
}
