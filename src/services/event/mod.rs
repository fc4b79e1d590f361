//! Parish event service entry point.
//! Holds the immutable in-memory event list and the date queries over it,
//! organized across focused submodules.

use std::collections::HashSet;

use crate::models::event::{Event, EventError, EventRecord};

pub mod queries;
pub mod seed;

/// Service over a fixed, ordered list of events.
#[derive(Debug, Clone, Default)]
pub struct EventService {
    events: Vec<Event>,
}

impl EventService {
    /// Build the service from raw records, keeping record order.
    ///
    /// Fails on the first record that does not convert or whose id was
    /// already seen.
    pub fn from_records(records: Vec<EventRecord>) -> Result<Self, EventError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut events = Vec::with_capacity(records.len());

        for record in records {
            if !seen.insert(record.id.clone()) {
                return Err(EventError::DuplicateId(record.id));
            }
            events.push(Event::try_from(record)?);
        }

        log::debug!("Loaded {} events", events.len());
        Ok(Self { events })
    }

    /// The built-in parish schedule
    pub fn seeded() -> Result<Self, EventError> {
        Self::from_records(seed::seed_records())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
