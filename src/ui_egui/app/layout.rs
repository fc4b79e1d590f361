//! Dashboard shell: top bar with the session controls and the role
//! navigation side panel.

use egui::RichText;

use super::ParishCalendarApp;
use crate::models::user::{Role, User};

pub(super) const APP_TITLE: &str = "✝ Parish School";

/// Label of the navigation entry this view lives under
pub(super) const CALENDAR_NAV_ENTRY: &str = "Calendar";

/// Shell controls clicked during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ShellAction {
    ToggleTheme,
    SignOut,
}

/// Navigation entries shown for a role
pub(super) fn nav_entries(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => &["Dashboard", "Users", "Classes", "Calendar", "Reports"],
        Role::Teacher => &["Dashboard", "My Classes", "Lessons", "Calendar"],
        Role::Student => &["Dashboard", "Lessons", "Calendar"],
        Role::Parent => &["Dashboard", "Children", "Calendar"],
    }
}

impl ParishCalendarApp {
    pub(super) fn render_shell(&self, ctx: &egui::Context, user: &User) -> Vec<ShellAction> {
        let mut actions = Vec::new();
        let is_dark = self.active_theme.is_dark;

        egui::TopBottomPanel::top("dashboard_top_bar")
            .exact_height(36.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(RichText::new(APP_TITLE).strong().size(16.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Sign out").clicked() {
                            actions.push(ShellAction::SignOut);
                        }
                        let (icon, hint) = if is_dark {
                            ("☀", "Switch to light theme")
                        } else {
                            ("🌙", "Switch to dark theme")
                        };
                        if ui.button(icon).on_hover_text(hint).clicked() {
                            actions.push(ShellAction::ToggleTheme);
                        }
                        ui.label(
                            RichText::new(format!("{} · {}", user.name, user.role.display_name()))
                                .color(self.active_theme.text_secondary),
                        );
                    });
                });
            });

        egui::SidePanel::left("dashboard_nav")
            .resizable(false)
            .exact_width(170.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                for entry in nav_entries(user.role) {
                    ui.selectable_label(*entry == CALENDAR_NAV_ENTRY, *entry);
                }
            });

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_reaches_calendar() {
        for role in [Role::Admin, Role::Teacher, Role::Student, Role::Parent] {
            assert!(nav_entries(role).contains(&CALENDAR_NAV_ENTRY));
        }
    }

    #[test]
    fn test_admin_sees_reports() {
        assert!(nav_entries(Role::Admin).contains(&"Reports"));
        assert!(!nav_entries(Role::Student).contains(&"Reports"));
    }
}
