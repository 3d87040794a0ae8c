//! Color theme for CLI output

use super::EntryStatus;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub warning: TableColor,
    pub muted: TableColor,
    pub info: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            warning: TableColor::Yellow,
            muted: TableColor::DarkGrey,
            info: TableColor::Cyan,
        }
    }
}

impl ColorTheme {
    pub fn get_status_color(&self, status: EntryStatus) -> TableColor {
        match status {
            EntryStatus::Kept => self.success,
            EntryStatus::Renamed => self.warning,
            EntryStatus::Dropped => self.muted,
        }
    }
}
