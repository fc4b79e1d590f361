//! Small presentational primitives: cards, badges, icon tiles, tab strip.

use egui::{Color32, Margin, RichText, Stroke};

use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::page::TabModel;
use crate::ui_egui::views::presentation::{BadgeVariant, EventIcon};
use crate::ui_egui::CalendarMessage;

/// Bordered surface with a title and optional description
pub fn card<R>(
    ui: &mut egui::Ui,
    theme: &CalendarTheme,
    title: &str,
    description: Option<&str>,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::none()
        .fill(theme.card_background)
        .stroke(Stroke::new(1.0, theme.card_border))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).size(18.0).strong());
            if let Some(description) = description {
                ui.label(RichText::new(description).color(theme.text_secondary));
            }
            ui.add_space(12.0);
            add_contents(ui)
        })
        .inner
}

pub fn badge(ui: &mut egui::Ui, theme: &CalendarTheme, label: &str, variant: BadgeVariant) {
    let colors = theme.badge_colors(variant);
    egui::Frame::none()
        .fill(colors.fill)
        .stroke(Stroke::new(1.0, colors.stroke))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(label).small().strong().color(colors.text));
        });
}

/// Rounded square holding an icon glyph
pub fn icon_tile(ui: &mut egui::Ui, icon: EventIcon, background: Color32, foreground: Color32) {
    egui::Frame::none()
        .fill(background)
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(Margin::same(8.0))
        .show(ui, |ui| {
            ui.label(RichText::new(icon.glyph()).size(20.0).color(foreground))
                .on_hover_text(icon.name());
        });
}

/// Icon followed by muted text, used for event details
pub fn detail(ui: &mut egui::Ui, theme: &CalendarTheme, icon: EventIcon, text: &str) {
    ui.label(
        RichText::new(format!("{} {}", icon.glyph(), text))
            .small()
            .color(theme.text_secondary),
    );
}

/// Bordered container for one list row
pub fn row_frame<R>(
    ui: &mut egui::Ui,
    theme: &CalendarTheme,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::none()
        .stroke(Stroke::new(1.0, theme.row_border))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

/// Tab triggers; a click queues a tab switch
pub fn tab_strip(ui: &mut egui::Ui, tabs: &[TabModel], messages: &mut Vec<CalendarMessage>) {
    ui.horizontal(|ui| {
        for tab in tabs {
            if ui.selectable_label(tab.active, tab.label).clicked() && !tab.active {
                messages.push(CalendarMessage::SetActiveTab(tab.tab));
            }
        }
    });
}
