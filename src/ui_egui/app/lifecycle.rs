use super::layout::ShellAction;
use super::state::CalendarPageState;
use super::ParishCalendarApp;
use crate::models::settings::Settings;
use crate::models::ui::DashboardTab;
use crate::services::auth::ConfiguredSession;
use crate::services::event::EventService;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::date_picker::DatePickerState;
use crate::ui_egui::views::page::{build_page, DisplayOptions, PageView};
use crate::ui_egui::views::render_page;
use crate::utils::date;
use chrono_tz::Tz;

impl ParishCalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = match SettingsService::from_environment() {
            Ok(service) => Some(service),
            Err(err) => {
                log::error!("Settings location unavailable, using defaults: {:#}", err);
                None
            }
        };
        let settings = load_settings_or_default(settings_service.as_ref());

        let events = EventService::seeded().unwrap_or_else(|err| {
            log::error!("Failed to build event list: {}", err);
            EventService::default()
        });

        let today = date::today(timezone_or_local(&settings));
        let default_tab = settings.default_tab().unwrap_or_else(|err| {
            log::warn!("{}; opening the calendar tab", err);
            DashboardTab::Calendar
        });

        let mut app = Self {
            auth: Box::new(ConfiguredSession::from_settings(&settings)),
            settings,
            settings_service,
            events,
            active_theme: CalendarTheme::light(),
            page_state: CalendarPageState::new(today).with_tab(default_tab),
            default_tab,
            picker: DatePickerState::default(),
            today,
            pending_theme_apply: false,
        };

        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Resolve the theme (system or configured) and push it into egui
    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme_name = if self.settings.use_system_theme {
            match dark_light::detect() {
                dark_light::Mode::Dark => "dark".to_string(),
                dark_light::Mode::Light => "light".to_string(),
                dark_light::Mode::Default => self.settings.theme.clone(),
            }
        } else {
            self.settings.theme.clone()
        };

        let theme = CalendarTheme::named(&theme_name);
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.pending_theme_apply {
            self.apply_theme(ctx);
            self.pending_theme_apply = false;
        }

        self.today = date::today(timezone_or_local(&self.settings));

        let user = self.auth.current_user();
        let options = DisplayOptions {
            date_format: &self.settings.date_format,
        };
        let view = build_page(user.as_ref(), &self.page_state, &self.events, &options);

        let PageView::Page(page) = view else {
            egui::CentralPanel::default().show(ctx, |_ui| {});
            return;
        };

        let actions = self.render_shell(ctx, &page.user);

        let mut messages = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_page(
                    ui,
                    &page,
                    &mut self.picker,
                    self.today,
                    &self.active_theme,
                    &mut messages,
                );
            });
        });

        let previous = self.page_state;
        self.page_state = previous.reduce_all(messages);
        if self.page_state.selected_date() != previous.selected_date() {
            self.picker.follow(self.page_state.selected_date());
        }

        for action in actions {
            self.handle_shell_action(action);
        }
    }

    fn handle_shell_action(&mut self, action: ShellAction) {
        match action {
            ShellAction::ToggleTheme => {
                self.settings.theme = if self.settings.is_dark() {
                    "light".to_string()
                } else {
                    "dark".to_string()
                };
                self.settings.use_system_theme = false;
                self.pending_theme_apply = true;
                self.save_settings();
            }
            ShellAction::SignOut => {
                self.auth.sign_out();
                // A fresh sign-in starts from the same page as a fresh launch
                self.page_state = CalendarPageState::new(self.today).with_tab(self.default_tab);
                self.picker = DatePickerState::default();
            }
        }
    }

    fn save_settings(&self) {
        let Some(service) = &self.settings_service else {
            return;
        };
        if let Err(err) = service.save(&self.settings) {
            log::error!("Failed to save settings: {:#}", err);
        }
    }
}

fn load_settings_or_default(service: Option<&SettingsService>) -> Settings {
    let Some(service) = service else {
        return Settings::default();
    };

    match service.load() {
        Ok(settings) => {
            log::info!("Loaded settings from {}", service.path().display());
            settings
        }
        Err(err) => {
            log::error!("Failed to load settings, using defaults: {:#}", err);
            Settings::default()
        }
    }
}

fn timezone_or_local(settings: &Settings) -> Option<Tz> {
    settings.timezone().unwrap_or_else(|err| {
        log::warn!("{}; falling back to local time", err);
        None
    })
}
