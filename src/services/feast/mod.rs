//! Fixed liturgical feast list shown on the feast-days pane.

use crate::models::feast::{FeastDay, FeastRank, IconAccent};

static FEAST_DAYS: [FeastDay; 3] = [
    FeastDay::new(
        "St. Nicholas Day",
        "December 19, 2024",
        FeastRank::Major,
        IconAccent::Red,
    ),
    FeastDay::new(
        "Nativity of Christ",
        "January 7, 2025",
        FeastRank::Great,
        IconAccent::Green,
    ),
    FeastDay::new(
        "Theophany",
        "January 19, 2025",
        FeastRank::Great,
        IconAccent::Blue,
    ),
];

/// The feast days, in display order. Independent of the event list.
pub fn feast_days() -> &'static [FeastDay] {
    &FEAST_DAYS
}
