//! Calendar pane: date picker card beside the selected day's events.

use chrono::NaiveDate;
use egui::RichText;
use egui_extras::DatePickerButton;

use super::date_picker::{render_month_picker, DatePickerState};
use super::page::{CalendarPaneModel, EventRow};
use super::presentation::EventIcon;
use super::widgets::{badge, card, detail, icon_tile, row_frame};
use crate::models::feast::IconAccent;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::CalendarMessage;

const PICKER_CARD_WIDTH: f32 = 280.0;

pub fn render_calendar_pane(
    ui: &mut egui::Ui,
    pane: &CalendarPaneModel,
    picker: &mut DatePickerState,
    today: NaiveDate,
    theme: &CalendarTheme,
    messages: &mut Vec<CalendarMessage>,
) {
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(PICKER_CARD_WIDTH);
            card(ui, theme, pane.picker_title, None, |ui| {
                let picked = render_month_picker(ui, picker, pane.selected_date, today, theme);
                messages.push(CalendarMessage::SelectDate(picked));
            });
        });

        ui.add_space(16.0);

        ui.vertical(|ui| {
            card(ui, theme, &pane.heading, None, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Jump to").small().color(theme.text_secondary));
                    let mut jump = pane.selected_date;
                    ui.add(DatePickerButton::new(&mut jump).id_source("calendar_page_jump"));
                    if jump != pane.selected_date {
                        messages.push(CalendarMessage::SelectDate(Some(jump)));
                    }
                });
                ui.add_space(8.0);

                for row in &pane.rows {
                    render_day_row(ui, row, theme);
                    ui.add_space(8.0);
                }

                if let Some(message) = pane.empty_message {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(message).color(theme.text_secondary));
                    });
                    ui.add_space(24.0);
                }
            });
        });
    });
}

fn render_day_row(ui: &mut egui::Ui, row: &EventRow, theme: &CalendarTheme) {
    let (tile_bg, tile_fg) = theme.accent_colors(IconAccent::Blue);
    row_frame(ui, theme, |ui| {
        ui.horizontal(|ui| {
            icon_tile(ui, row.icon, tile_bg, tile_fg);
            ui.vertical(|ui| {
                ui.label(RichText::new(&row.title).strong());
                ui.horizontal(|ui| {
                    detail(ui, theme, EventIcon::Clock, &row.time);
                    detail(ui, theme, EventIcon::MapPin, &row.location);
                    detail(ui, theme, EventIcon::Users, &row.attendees_label);
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, theme, &row.badge_label, row.variant);
            });
        });
    });
}
