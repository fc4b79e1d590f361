//! Page model for the calendar dashboard.
//!
//! `build_page` turns the session, page state, and data into a plain
//! description of one frame. Painting is done separately by the pane
//! renderers, so everything the page shows can be checked without egui.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::feast::{FeastDay, IconAccent};
use crate::models::settings::DEFAULT_DATE_FORMAT;
use crate::models::ui::DashboardTab;
use crate::models::user::User;
use crate::services::event::EventService;
use crate::services::feast::feast_days;
use crate::ui_egui::views::presentation::{icon_for, variant_for, BadgeVariant, EventIcon};
use crate::ui_egui::CalendarPageState;
use crate::utils::date::format_date;

pub const PAGE_TITLE: &str = "Calendar";
pub const PAGE_DESCRIPTION: &str = "View upcoming lessons, feast days, and community events";
pub const PICKER_TITLE: &str = "Select Date";
pub const EMPTY_DAY_MESSAGE: &str = "No events scheduled for this date";
pub const ALL_EVENTS_TITLE: &str = "All Upcoming Events";
pub const ALL_EVENTS_DESCRIPTION: &str = "Complete schedule of lessons, meetings, and activities";
pub const FEASTS_TITLE: &str = "Orthodox Feast Days & Holy Days";
pub const FEASTS_DESCRIPTION: &str = "Important dates in the Orthodox liturgical calendar";

/// Display knobs taken from settings
#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions<'a> {
    pub date_format: &'a str,
}

impl Default for DisplayOptions<'_> {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT,
        }
    }
}

/// Result of building the page: nothing at all when nobody is signed in
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Empty,
    Page(CalendarPageModel),
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        matches!(self, PageView::Empty)
    }

    pub fn page(&self) -> Option<&CalendarPageModel> {
        match self {
            PageView::Empty => None,
            PageView::Page(page) => Some(page),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarPageModel {
    pub title: &'static str,
    pub description: &'static str,
    /// Signed-in user shown in the shell
    pub user: User,
    pub tabs: Vec<TabModel>,
    /// The one visible pane
    pub pane: PaneModel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabModel {
    pub tab: DashboardTab,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaneModel {
    Calendar(CalendarPaneModel),
    AllEvents(EventListModel),
    Feasts(FeastListModel),
}

impl PaneModel {
    pub fn tab(&self) -> DashboardTab {
        match self {
            PaneModel::Calendar(_) => DashboardTab::Calendar,
            PaneModel::AllEvents(_) => DashboardTab::Events,
            PaneModel::Feasts(_) => DashboardTab::Feasts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarPaneModel {
    pub picker_title: &'static str,
    pub selected_date: NaiveDate,
    /// "Events for 12/8/2024"
    pub heading: String,
    pub rows: Vec<EventRow>,
    /// Set exactly when `rows` is empty
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventListModel {
    pub title: &'static str,
    pub description: &'static str,
    pub rows: Vec<EventRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeastListModel {
    pub title: &'static str,
    pub description: &'static str,
    pub rows: Vec<FeastRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub id: String,
    pub title: String,
    pub date_label: String,
    pub time: String,
    pub location: String,
    pub attendees: u32,
    pub attendees_label: String,
    /// Raw category name
    pub badge_label: String,
    pub variant: BadgeVariant,
    pub icon: EventIcon,
}

impl EventRow {
    pub fn from_event(event: &Event, options: &DisplayOptions<'_>) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            date_label: format_date(event.date, options.date_format),
            time: event.time.clone(),
            location: event.location.clone(),
            attendees: event.attendees,
            attendees_label: format!("{} attendees", event.attendees),
            badge_label: event.event_type.to_string(),
            variant: variant_for(&event.event_type),
            icon: icon_for(&event.event_type),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeastRow {
    pub name: &'static str,
    pub date_label: &'static str,
    pub badge_label: &'static str,
    pub variant: BadgeVariant,
    pub icon: EventIcon,
    pub accent: IconAccent,
}

impl From<&FeastDay> for FeastRow {
    fn from(feast: &FeastDay) -> Self {
        Self {
            name: feast.name,
            date_label: feast.date_label,
            badge_label: feast.rank.label(),
            variant: BadgeVariant::Destructive,
            icon: EventIcon::CalendarDays,
            accent: feast.accent,
        }
    }
}

/// Build the page for one frame.
///
/// Returns `PageView::Empty` when `user` is `None`.
pub fn build_page(
    user: Option<&User>,
    state: &CalendarPageState,
    events: &EventService,
    options: &DisplayOptions<'_>,
) -> PageView {
    let Some(user) = user else {
        return PageView::Empty;
    };

    let active = state.active_tab();
    let tabs = DashboardTab::ALL
        .into_iter()
        .map(|tab| TabModel {
            tab,
            label: tab.label(),
            active: tab == active,
        })
        .collect();

    let pane = match active {
        DashboardTab::Calendar => {
            PaneModel::Calendar(calendar_pane(state.selected_date(), events, options))
        }
        DashboardTab::Events => PaneModel::AllEvents(all_events_pane(events, options)),
        DashboardTab::Feasts => PaneModel::Feasts(feasts_pane()),
    };

    PageView::Page(CalendarPageModel {
        title: PAGE_TITLE,
        description: PAGE_DESCRIPTION,
        user: user.clone(),
        tabs,
        pane,
    })
}

pub fn calendar_pane(
    selected_date: NaiveDate,
    events: &EventService,
    options: &DisplayOptions<'_>,
) -> CalendarPaneModel {
    let rows: Vec<EventRow> = events
        .events_on(selected_date)
        .into_iter()
        .map(|event| EventRow::from_event(event, options))
        .collect();
    let empty_message = rows.is_empty().then_some(EMPTY_DAY_MESSAGE);

    CalendarPaneModel {
        picker_title: PICKER_TITLE,
        selected_date,
        heading: format!(
            "Events for {}",
            format_date(selected_date, options.date_format)
        ),
        rows,
        empty_message,
    }
}

pub fn all_events_pane(events: &EventService, options: &DisplayOptions<'_>) -> EventListModel {
    EventListModel {
        title: ALL_EVENTS_TITLE,
        description: ALL_EVENTS_DESCRIPTION,
        rows: events
            .list_all()
            .iter()
            .map(|event| EventRow::from_event(event, options))
            .collect(),
    }
}

pub fn feasts_pane() -> FeastListModel {
    FeastListModel {
        title: FEASTS_TITLE,
        description: FEASTS_DESCRIPTION,
        rows: feast_days().iter().map(FeastRow::from).collect(),
    }
}
