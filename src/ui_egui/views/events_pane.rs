//! All-events pane: every event in list order, unfiltered.

use egui::RichText;

use super::page::{EventListModel, EventRow};
use super::widgets::{badge, card, icon_tile, row_frame};
use crate::models::feast::IconAccent;
use crate::ui_egui::theme::CalendarTheme;

pub fn render_events_pane(ui: &mut egui::Ui, pane: &EventListModel, theme: &CalendarTheme) {
    card(ui, theme, pane.title, Some(pane.description), |ui| {
        for row in &pane.rows {
            render_event_row(ui, row, theme);
            ui.add_space(8.0);
        }
    });
}

fn render_event_row(ui: &mut egui::Ui, row: &EventRow, theme: &CalendarTheme) {
    let (tile_bg, tile_fg) = theme.accent_colors(IconAccent::Blue);
    row_frame(ui, theme, |ui| {
        ui.horizontal(|ui| {
            icon_tile(ui, row.icon, tile_bg, tile_fg);
            ui.vertical(|ui| {
                ui.label(RichText::new(&row.title).strong());
                ui.horizontal(|ui| {
                    for text in [&row.date_label, &row.time, &row.location] {
                        ui.label(RichText::new(text).small().color(theme.text_secondary));
                        ui.add_space(8.0);
                    }
                });
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(row.attendees.to_string())
                        .small()
                        .color(theme.text_secondary),
                );
                badge(ui, theme, &row.badge_label, row.variant);
            });
        });
    });
}
