// Built-in parish schedule

use crate::models::event::EventRecord;

/// Records for the built-in schedule, in display order
pub fn seed_records() -> Vec<EventRecord> {
    vec![
        EventRecord::new(
            "1",
            "The Nativity Fast Lesson",
            "2024-12-08",
            "10:00 AM",
            "lesson",
            "Main Hall",
            24,
        ),
        EventRecord::new(
            "2",
            "Christmas Pageant Practice",
            "2024-12-10",
            "2:00 PM",
            "service",
            "Church Sanctuary",
            45,
        ),
        EventRecord::new(
            "3",
            "St. Nicholas Feast Day",
            "2024-12-19",
            "10:00 AM",
            "feast",
            "Fellowship Hall",
            120,
        ),
        EventRecord::new(
            "4",
            "Teacher Meeting",
            "2024-12-15",
            "11:30 AM",
            "meeting",
            "Conference Room",
            8,
        ),
    ]
}
