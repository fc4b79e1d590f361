//! Feast-days pane: the fixed liturgical entries.

use egui::RichText;

use super::page::FeastListModel;
use super::widgets::{badge, card, icon_tile, row_frame};
use crate::ui_egui::theme::CalendarTheme;

pub fn render_feasts_pane(ui: &mut egui::Ui, pane: &FeastListModel, theme: &CalendarTheme) {
    card(ui, theme, pane.title, Some(pane.description), |ui| {
        for row in &pane.rows {
            let (tile_bg, tile_fg) = theme.accent_colors(row.accent);
            row_frame(ui, theme, |ui| {
                ui.horizontal(|ui| {
                    icon_tile(ui, row.icon, tile_bg, tile_fg);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(row.name).strong());
                        ui.label(
                            RichText::new(row.date_label)
                                .small()
                                .color(theme.text_secondary),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        badge(ui, theme, row.badge_label, row.variant);
                    });
                });
            });
            ui.add_space(8.0);
        }
    });
}
