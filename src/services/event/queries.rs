use super::EventService;
use crate::models::event::Event;
use chrono::NaiveDate;

impl EventService {
    /// Every event, in list order.
    pub fn list_all(&self) -> &[Event] {
        &self.events
    }

    /// Events on the given calendar day, in list order.
    ///
    /// Only the day is compared; an empty result is a normal outcome.
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.occurs_on(date))
            .collect()
    }
}
