// UI models module
// Tabs of the calendar dashboard

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the three mutually exclusive dashboard panes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DashboardTab {
    #[default]
    Calendar,
    Events,
    Feasts,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Calendar,
        DashboardTab::Events,
        DashboardTab::Feasts,
    ];

    /// Stable identifier, as used in configuration
    pub fn id(&self) -> &'static str {
        match self {
            DashboardTab::Calendar => "calendar",
            DashboardTab::Events => "events",
            DashboardTab::Feasts => "feasts",
        }
    }

    /// Tab trigger label
    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Calendar => "Calendar View",
            DashboardTab::Events => "All Events",
            DashboardTab::Feasts => "Feast Days",
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tab '{0}' (expected calendar, events, or feasts)")]
pub struct UnknownTab(pub String);

impl FromStr for DashboardTab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DashboardTab::ALL
            .into_iter()
            .find(|tab| tab.id() == s.trim())
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}
