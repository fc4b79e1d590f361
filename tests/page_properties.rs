// Property-based tests for the calendar page
// Random dates and message sequences against the built-in schedule

mod fixtures;

use chrono::{Duration, NaiveDate};
use fixtures::{seeded_events, users};
use parish_calendar::models::ui::DashboardTab;
use parish_calendar::ui_egui::views::page::{build_page, DisplayOptions, PaneModel};
use parish_calendar::ui_egui::{CalendarMessage, CalendarPageState};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2023-01-01 .. 2026-12-31, around the seeded events
    (0i64..(4 * 366)).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn any_tab() -> impl Strategy<Value = DashboardTab> {
    prop_oneof![
        Just(DashboardTab::Calendar),
        Just(DashboardTab::Events),
        Just(DashboardTab::Feasts),
    ]
}

fn any_message() -> impl Strategy<Value = CalendarMessage> {
    prop_oneof![
        proptest::option::of(any_date()).prop_map(CalendarMessage::SelectDate),
        any_tab().prop_map(CalendarMessage::SetActiveTab),
    ]
}

proptest! {
    /// Property: every event returned for a day falls on that day
    #[test]
    fn prop_events_on_matches_calendar_day(date in any_date()) {
        let events = seeded_events();
        for event in events.events_on(date) {
            prop_assert_eq!(event.date, date);
        }
    }

    /// Property: the empty message shows exactly when no event matches
    #[test]
    fn prop_empty_message_iff_no_rows(date in any_date()) {
        let events = seeded_events();
        let state = CalendarPageState::new(date);
        let view = build_page(Some(&users::teacher()), &state, &events, &DisplayOptions::default());

        match view.page().map(|p| &p.pane) {
            Some(PaneModel::Calendar(pane)) => {
                prop_assert_eq!(pane.rows.is_empty(), pane.empty_message.is_some());
                prop_assert_eq!(pane.rows.len(), events.events_on(date).len());
            }
            _ => prop_assert!(false, "expected calendar pane"),
        }
    }

    /// Property: switching tabs never touches the selected date
    #[test]
    fn prop_tab_switch_keeps_selected_date(date in any_date(), tab in any_tab()) {
        let state = CalendarPageState::new(date);
        let after = state.reduce(CalendarMessage::SetActiveTab(tab));
        prop_assert_eq!(after.selected_date(), date);
        prop_assert_eq!(after.active_tab(), tab);
    }

    /// Property: a "no selection" report is a no-op
    #[test]
    fn prop_none_selection_is_noop(messages in proptest::collection::vec(any_message(), 0..20)) {
        let state = CalendarPageState::new(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
            .reduce_all(messages);
        prop_assert_eq!(state.reduce(CalendarMessage::SelectDate(None)), state);
    }

    /// Property: the all-events pane always lists the four seeded events
    #[test]
    fn prop_all_events_pane_is_unfiltered(messages in proptest::collection::vec(any_message(), 0..20)) {
        let events = seeded_events();
        let state = CalendarPageState::new(NaiveDate::from_ymd_opt(2024, 12, 1).unwrap())
            .reduce_all(messages)
            .reduce(CalendarMessage::SetActiveTab(DashboardTab::Events));
        let view = build_page(Some(&users::student()), &state, &events, &DisplayOptions::default());

        match view.page().map(|p| &p.pane) {
            Some(PaneModel::AllEvents(pane)) => prop_assert_eq!(pane.rows.len(), 4),
            _ => prop_assert!(false, "expected all-events pane"),
        }
    }
}
