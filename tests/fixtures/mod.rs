// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use parish_calendar::models::user::{Role, User};
use parish_calendar::services::event::EventService;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Dec 8, 2024: The Nativity Fast Lesson
    pub fn nativity_fast_lesson() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 8).unwrap()
    }

    /// Dec 25, 2024: nothing scheduled
    pub fn christmas_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()
    }

    /// Dec 19, 2024: St. Nicholas Feast Day event
    pub fn st_nicholas_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 19).unwrap()
    }
}

/// Sample users for testing
pub mod users {
    use super::*;

    pub fn teacher() -> User {
        User::new("Fr. John", Role::Teacher)
    }

    pub fn student() -> User {
        User::new("Maria", Role::Student)
    }
}

/// The built-in schedule
pub fn seeded_events() -> EventService {
    EventService::seeded().expect("seed records are valid")
}
