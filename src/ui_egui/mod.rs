mod app;
pub mod theme;
pub mod views;

pub use app::state::{CalendarMessage, CalendarPageState};
pub use app::ParishCalendarApp;
