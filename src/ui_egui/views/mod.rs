//! Calendar dashboard views: the page model and the egui painters for it.

pub mod calendar_pane;
pub mod date_picker;
pub mod events_pane;
pub mod feasts_pane;
pub mod page;
pub mod presentation;
pub mod widgets;

use chrono::NaiveDate;
use egui::RichText;

use self::date_picker::DatePickerState;
use self::page::{CalendarPageModel, PaneModel};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::CalendarMessage;

/// Paint a built page: header, tab strip, and the visible pane
pub fn render_page(
    ui: &mut egui::Ui,
    page: &CalendarPageModel,
    picker: &mut DatePickerState,
    today: NaiveDate,
    theme: &CalendarTheme,
    messages: &mut Vec<CalendarMessage>,
) {
    ui.label(RichText::new(page.title).size(28.0).strong());
    ui.label(RichText::new(page.description).color(theme.text_secondary));
    ui.add_space(16.0);

    widgets::tab_strip(ui, &page.tabs, messages);
    ui.add_space(12.0);

    match &page.pane {
        PaneModel::Calendar(pane) => {
            calendar_pane::render_calendar_pane(ui, pane, picker, today, theme, messages)
        }
        PaneModel::AllEvents(pane) => events_pane::render_events_pane(ui, pane, theme),
        PaneModel::Feasts(pane) => feasts_pane::render_feasts_pane(ui, pane, theme),
    }
}
