//! Revision icons for CLI output

use crate::domain::manifest::Revision;

/// Icons for the revision modes of a service
pub struct RevisionIcon;

impl RevisionIcon {
    /// Pinned to an explicit tag
    pub const PINNED: &'static str = "●";

    /// Following main
    pub const TRACKING: &'static str = "↻";

    pub fn get_revision_icon(revision: &Revision) -> &'static str {
        if revision.is_pinned() {
            Self::PINNED
        } else {
            Self::TRACKING
        }
    }

    pub fn get_mode_text(revision: &Revision) -> &'static str {
        if revision.is_pinned() {
            "Pinned"
        } else {
            "Track main"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons() {
        let pinned = Revision::Pinned("abc".to_string());
        assert_eq!(RevisionIcon::get_revision_icon(&pinned), "●");
        assert_eq!(RevisionIcon::get_mode_text(&pinned), "Pinned");
        assert_eq!(RevisionIcon::get_revision_icon(&Revision::TrackMain), "↻");
        assert_eq!(RevisionIcon::get_mode_text(&Revision::TrackMain), "Track main");
    }
}
