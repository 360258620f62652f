//! Color theme for CLI output

use crate::domain::manifest::Revision;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub pinned: TableColor,
    pub tracking: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            pinned: TableColor::Green,
            tracking: TableColor::Yellow,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color based on the revision a service deploys
    pub fn get_revision_color(&self, revision: &Revision) -> TableColor {
        if revision.is_pinned() {
            self.pinned
        } else {
            self.tracking
        }
    }
}

/// Convert comfy_table::Color to colored::Color string representation
pub fn table_color_to_colored_str(color: TableColor) -> &'static str {
    match color {
        TableColor::Green => "green",
        TableColor::Yellow => "yellow",
        TableColor::Red => "red",
        TableColor::Cyan => "cyan",
        TableColor::DarkGrey => "bright black",
        _ => "white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.pinned, TableColor::Green);
        assert_eq!(theme.tracking, TableColor::Yellow);
        assert_eq!(theme.info, TableColor::Cyan);
    }

    #[test]
    fn test_get_revision_color() {
        let theme = ColorTheme::default();
        assert_eq!(
            theme.get_revision_color(&Revision::Pinned("v1".to_string())),
            TableColor::Green
        );
        assert_eq!(theme.get_revision_color(&Revision::TrackMain), TableColor::Yellow);
    }

    #[test]
    fn test_colored_str() {
        assert_eq!(table_color_to_colored_str(TableColor::DarkGrey), "bright black");
        assert_eq!(table_color_to_colored_str(TableColor::Magenta), "white");
    }
}
