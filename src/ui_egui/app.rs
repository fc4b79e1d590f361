mod layout;
mod lifecycle;
pub(super) mod state;

use self::state::CalendarPageState;
use crate::models::settings::Settings;
use crate::models::ui::DashboardTab;
use crate::services::auth::AuthProvider;
use crate::services::event::EventService;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::date_picker::DatePickerState;
use chrono::NaiveDate;

pub struct ParishCalendarApp {
    /// Who is signed in; the page renders nothing without a user
    auth: Box<dyn AuthProvider>,
    settings: Settings,
    /// None when no config location could be resolved
    settings_service: Option<SettingsService>,
    events: EventService,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    page_state: CalendarPageState,
    /// Tab a freshly mounted page opens on
    default_tab: DashboardTab,
    picker: DatePickerState,
    today: NaiveDate,
    /// Set by the theme toggle, applied on the next frame
    pending_theme_apply: bool,
}

impl eframe::App for ParishCalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
