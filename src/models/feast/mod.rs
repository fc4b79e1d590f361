//! Feast day model.
//!
//! Feast days are fixed liturgical entries shown on their own pane. They are
//! not events: they carry a literal date label and a rank instead of a
//! parsed date, time, or attendance.

use std::fmt;

/// Liturgical rank shown on the feast badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeastRank {
    Major,
    Great,
}

impl FeastRank {
    pub fn label(&self) -> &'static str {
        match self {
            FeastRank::Major => "Major Feast",
            FeastRank::Great => "Great Feast",
        }
    }
}

impl fmt::Display for FeastRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tint of the icon tile next to a feast entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAccent {
    Red,
    Green,
    Blue,
}

/// A fixed, non-editable liturgical calendar entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeastDay {
    pub name: &'static str,
    /// Display date, never parsed
    pub date_label: &'static str,
    pub rank: FeastRank,
    pub accent: IconAccent,
}

impl FeastDay {
    pub const fn new(
        name: &'static str,
        date_label: &'static str,
        rank: FeastRank,
        accent: IconAccent,
    ) -> Self {
        Self {
            name,
            date_label,
            rank,
            accent,
        }
    }
}
