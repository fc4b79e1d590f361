use chrono::NaiveDate;

use crate::models::ui::DashboardTab;

/// User intents raised while rendering a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarMessage {
    /// Date picker report; `None` means the widget had no selection
    SelectDate(Option<NaiveDate>),
    SetActiveTab(DashboardTab),
}

/// Transient state of the calendar page.
///
/// Immutable: every change goes through `reduce`, which returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarPageState {
    selected_date: NaiveDate,
    active_tab: DashboardTab,
}

impl CalendarPageState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_date: today,
            active_tab: DashboardTab::default(),
        }
    }

    #[must_use]
    pub fn with_tab(self, active_tab: DashboardTab) -> Self {
        Self { active_tab, ..self }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn active_tab(&self) -> DashboardTab {
        self.active_tab
    }

    #[must_use]
    pub fn reduce(self, message: CalendarMessage) -> Self {
        match message {
            CalendarMessage::SelectDate(Some(date)) => {
                log::debug!("Selected date {}", date);
                Self {
                    selected_date: date,
                    ..self
                }
            }
            CalendarMessage::SelectDate(None) => self,
            CalendarMessage::SetActiveTab(tab) => {
                log::debug!("Switched to tab '{}'", tab);
                Self {
                    active_tab: tab,
                    ..self
                }
            }
        }
    }

    /// Fold a frame's worth of messages, in order
    #[must_use]
    pub fn reduce_all<I>(self, messages: I) -> Self
    where
        I: IntoIterator<Item = CalendarMessage>,
    {
        messages.into_iter().fold(self, Self::reduce)
    }
}
