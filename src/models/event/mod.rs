// Event module
// Parish event model and its raw record form

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Date format used by raw event records (ISO calendar date)
pub const RECORD_DATE_FORMAT: &str = "%Y-%m-%d";

/// Category of a parish event.
///
/// The four known categories get dedicated presentation; anything else is
/// kept verbatim so the badge can still show it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EventType {
    Lesson,
    Service,
    Feast,
    Meeting,
    Other(String),
}

impl EventType {
    /// Parse a category name. Never fails: unknown names become `Other`.
    pub fn parse(value: &str) -> Self {
        match value {
            "lesson" => EventType::Lesson,
            "service" => EventType::Service,
            "feast" => EventType::Feast,
            "meeting" => EventType::Meeting,
            other => EventType::Other(other.to_string()),
        }
    }

    /// The category name as written in records and badges
    pub fn as_str(&self) -> &str {
        match self {
            EventType::Lesson => "lesson",
            EventType::Service => "service",
            EventType::Feast => "feast",
            EventType::Meeting => "meeting",
            EventType::Other(name) => name,
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while turning raw records into events
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event '{id}' has an empty title")]
    EmptyTitle { id: String },
    #[error("Event '{id}' has invalid date '{date}' (expected YYYY-MM-DD)")]
    InvalidDate { id: String, date: String },
    #[error("Duplicate event id '{0}'")]
    DuplicateId(String),
}

/// Raw event record, dates kept as ISO strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub location: String,
    pub attendees: u32,
}

impl EventRecord {
    pub fn new(
        id: &str,
        title: &str,
        date: &str,
        time: &str,
        event_type: &str,
        location: &str,
        attendees: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            event_type: event_type.to_string(),
            location: location.to_string(),
            attendees,
        }
    }
}

/// A scheduled parish occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Calendar day of the event, no time-of-day or timezone attached
    pub date: NaiveDate,
    /// Free-form display time such as "10:00 AM"
    pub time: String,
    pub event_type: EventType,
    pub location: String,
    pub attendees: u32,
}

impl Event {
    /// Whether this event falls on the given calendar day
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

impl TryFrom<EventRecord> for Event {
    type Error = EventError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        if record.title.trim().is_empty() {
            return Err(EventError::EmptyTitle { id: record.id });
        }

        let date = NaiveDate::parse_from_str(record.date.trim(), RECORD_DATE_FORMAT).map_err(
            |_| EventError::InvalidDate {
                id: record.id.clone(),
                date: record.date.clone(),
            },
        )?;

        Ok(Self {
            id: record.id,
            title: record.title,
            date,
            time: record.time,
            event_type: EventType::parse(&record.event_type),
            location: record.location,
            attendees: record.attendees,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson_record() -> EventRecord {
        EventRecord::new(
            "1",
            "The Nativity Fast Lesson",
            "2024-12-08",
            "10:00 AM",
            "lesson",
            "Main Hall",
            24,
        )
    }

    #[test]
    fn test_record_converts_to_event() {
        let event = Event::try_from(lesson_record()).unwrap();

        assert_eq!(event.id, "1");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 12, 8).unwrap());
        assert_eq!(event.event_type, EventType::Lesson);
        assert_eq!(event.time, "10:00 AM");
        assert_eq!(event.attendees, 24);
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut record = lesson_record();
        record.title = "   ".to_string();

        assert_eq!(
            Event::try_from(record).unwrap_err(),
            EventError::EmptyTitle { id: "1".to_string() }
        );
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut record = lesson_record();
        record.date = "2024-13-40".to_string();

        let err = Event::try_from(record).unwrap_err();
        assert!(matches!(err, EventError::InvalidDate { .. }));
        assert!(err.to_string().contains("2024-13-40"));
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let mut record = lesson_record();
        record.event_type = "retreat".to_string();

        let event = Event::try_from(record).unwrap();
        assert_eq!(event.event_type, EventType::Other("retreat".to_string()));
        assert_eq!(event.event_type.to_string(), "retreat");
    }

    #[test]
    fn test_occurs_on_compares_calendar_day() {
        let event = Event::try_from(lesson_record()).unwrap();

        assert!(event.occurs_on(NaiveDate::from_ymd_opt(2024, 12, 8).unwrap()));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2024, 12, 7).unwrap()));
        assert!(!event.occurs_on(NaiveDate::from_ymd_opt(2025, 12, 8).unwrap()));
    }

    #[test]
    fn test_type_round_trips_known_names() {
        for name in ["lesson", "service", "feast", "meeting"] {
            assert_eq!(EventType::parse(name).as_str(), name);
        }
    }
}
