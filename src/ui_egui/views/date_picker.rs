//! Inline single-selection month calendar.
//!
//! The month on display is widget state, separate from the selected day.
//! Rendering reports `Some(day)` only when a day was clicked.

use chrono::{Datelike, Duration, NaiveDate};
use egui::RichText;

use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{month_grid_start, shift_month};

const DAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DatePickerState {
    /// Month being viewed; None follows the selected date
    viewing_month: Option<NaiveDate>,
}

impl DatePickerState {
    pub fn viewing(&self, selected: NaiveDate) -> NaiveDate {
        self.viewing_month.unwrap_or(selected)
    }

    pub fn shift(&mut self, selected: NaiveDate, months: i32) {
        self.viewing_month = Some(shift_month(self.viewing(selected), months));
    }

    /// Jump the view to the month containing `date`
    pub fn follow(&mut self, date: NaiveDate) {
        self.viewing_month = Some(date);
    }
}

/// Draw the picker. Returns the clicked day, if any.
pub fn render_month_picker(
    ui: &mut egui::Ui,
    picker: &mut DatePickerState,
    selected: NaiveDate,
    today: NaiveDate,
    theme: &CalendarTheme,
) -> Option<NaiveDate> {
    let viewing = picker.viewing(selected);
    let mut clicked = None;

    ui.horizontal(|ui| {
        if ui.small_button("◀◀").on_hover_text("Previous year").clicked() {
            picker.shift(selected, -12);
        }
        if ui.small_button("◀").on_hover_text("Previous month").clicked() {
            picker.shift(selected, -1);
        }
        ui.label(RichText::new(viewing.format("%B %Y").to_string()).strong());
        if ui.small_button("▶").on_hover_text("Next month").clicked() {
            picker.shift(selected, 1);
        }
        if ui.small_button("▶▶").on_hover_text("Next year").clicked() {
            picker.shift(selected, 12);
        }
    });

    ui.separator();

    egui::Grid::new("calendar_page_month_grid")
        .num_columns(7)
        .spacing([4.0, 2.0])
        .min_col_width(26.0)
        .show(ui, |ui| {
            for name in DAY_NAMES {
                ui.label(RichText::new(name).small().color(theme.text_secondary));
            }
            ui.end_row();

            let mut current = month_grid_start(viewing);
            for _week in 0..6 {
                for _day in 0..7 {
                    let in_month = current.month() == viewing.month();
                    let label = current.day().to_string();

                    let text = if current == today {
                        RichText::new(label).strong().color(theme.today_text)
                    } else if !in_month {
                        RichText::new(label).weak()
                    } else {
                        RichText::new(label)
                    };

                    if ui.selectable_label(current == selected, text).clicked() {
                        clicked = Some(current);
                    }
                    current += Duration::days(1);
                }
                ui.end_row();

                // Stop once the grid has moved past the viewed month
                if current.month() != viewing.month() && current.day() > 7 {
                    break;
                }
            }
        });

    ui.separator();
    if ui.button("Today").clicked() {
        clicked = Some(today);
    }

    if let Some(day) = clicked {
        picker.follow(day);
    }
    clicked
}
