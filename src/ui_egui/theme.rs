//! Theme module for the egui dashboard
//!
//! Defines the CalendarTheme structure: page colors plus the badge and icon
//! tile palettes used by the event lists.

use egui::Color32;

use crate::models::feast::IconAccent;
use crate::ui_egui::views::presentation::BadgeVariant;

/// Fill, text, and border color of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    pub fill: Color32,
    pub text: Color32,
    pub stroke: Color32,
}

/// A dashboard theme defining all colors used in the application
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Card surface and border
    pub card_background: Color32,
    pub card_border: Color32,

    /// Border of a single event row
    pub row_border: Color32,

    /// Selected day in the date picker
    pub selected_day: Color32,

    /// Today's date in the date picker
    pub today_text: Color32,

    /// Primary text color (headings, titles)
    pub text_primary: Color32,

    /// Secondary text color (muted details)
    pub text_secondary: Color32,

    pub badge_primary: BadgeColors,
    pub badge_secondary: BadgeColors,
    pub badge_destructive: BadgeColors,
    pub badge_outline: BadgeColors,

    /// Icon tile background/foreground pairs
    pub accent_blue: (Color32, Color32),
    pub accent_red: (Color32, Color32),
    pub accent_green: (Color32, Color32),
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            card_background: Color32::from_rgb(255, 255, 255),
            card_border: Color32::from_rgb(226, 232, 240),
            row_border: Color32::from_rgb(226, 232, 240),
            selected_day: Color32::from_rgb(15, 23, 42),
            today_text: Color32::from_rgb(50, 150, 50),
            text_primary: Color32::from_rgb(15, 23, 42),
            text_secondary: Color32::from_rgb(100, 116, 139),
            badge_primary: BadgeColors {
                fill: Color32::from_rgb(15, 23, 42),
                text: Color32::from_rgb(248, 250, 252),
                stroke: Color32::TRANSPARENT,
            },
            badge_secondary: BadgeColors {
                fill: Color32::from_rgb(241, 245, 249),
                text: Color32::from_rgb(15, 23, 42),
                stroke: Color32::TRANSPARENT,
            },
            badge_destructive: BadgeColors {
                fill: Color32::from_rgb(239, 68, 68),
                text: Color32::from_rgb(248, 250, 252),
                stroke: Color32::TRANSPARENT,
            },
            badge_outline: BadgeColors {
                fill: Color32::TRANSPARENT,
                text: Color32::from_rgb(15, 23, 42),
                stroke: Color32::from_rgb(226, 232, 240),
            },
            accent_blue: (Color32::from_rgb(219, 234, 254), Color32::from_rgb(37, 99, 235)),
            accent_red: (Color32::from_rgb(254, 226, 226), Color32::from_rgb(220, 38, 38)),
            accent_green: (Color32::from_rgb(220, 252, 231), Color32::from_rgb(22, 163, 74)),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            card_background: Color32::from_rgb(40, 40, 40),
            card_border: Color32::from_rgb(60, 60, 60),
            row_border: Color32::from_rgb(70, 70, 70),
            selected_day: Color32::from_rgb(100, 150, 255),
            today_text: Color32::from_rgb(100, 220, 120),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            badge_primary: BadgeColors {
                fill: Color32::from_rgb(248, 250, 252),
                text: Color32::from_rgb(15, 23, 42),
                stroke: Color32::TRANSPARENT,
            },
            badge_secondary: BadgeColors {
                fill: Color32::from_rgb(51, 65, 85),
                text: Color32::from_rgb(248, 250, 252),
                stroke: Color32::TRANSPARENT,
            },
            badge_destructive: BadgeColors {
                fill: Color32::from_rgb(153, 27, 27),
                text: Color32::from_rgb(248, 250, 252),
                stroke: Color32::TRANSPARENT,
            },
            badge_outline: BadgeColors {
                fill: Color32::TRANSPARENT,
                text: Color32::from_rgb(240, 240, 240),
                stroke: Color32::from_rgb(90, 90, 90),
            },
            accent_blue: (Color32::from_rgb(30, 50, 80), Color32::from_rgb(100, 180, 255)),
            accent_red: (Color32::from_rgb(80, 30, 30), Color32::from_rgb(255, 120, 120)),
            accent_green: (Color32::from_rgb(30, 70, 40), Color32::from_rgb(100, 220, 120)),
        }
    }

    /// Theme for a settings value ("light" / "dark")
    pub fn named(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn badge_colors(&self, variant: BadgeVariant) -> BadgeColors {
        match variant {
            BadgeVariant::Primary => self.badge_primary,
            BadgeVariant::Secondary => self.badge_secondary,
            BadgeVariant::Destructive => self.badge_destructive,
            BadgeVariant::Outline => self.badge_outline,
        }
    }

    pub fn accent_colors(&self, accent: IconAccent) -> (Color32, Color32) {
        match accent {
            IconAccent::Blue => self.accent_blue,
            IconAccent::Red => self.accent_red,
            IconAccent::Green => self.accent_green,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.selection.bg_fill = self.selected_day;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_theme() {
        let theme = CalendarTheme::light();
        assert!(!theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(245, 245, 245));
    }

    #[test]
    fn test_dark_theme() {
        let theme = CalendarTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(30, 30, 30));
    }

    #[test]
    fn test_named_theme_falls_back_to_light() {
        assert!(CalendarTheme::named("Dark").is_dark);
        assert!(!CalendarTheme::named("light").is_dark);
        assert!(!CalendarTheme::named("solarized").is_dark);
    }

    #[test]
    fn test_only_outline_badge_is_unfilled() {
        let theme = CalendarTheme::light();
        assert_eq!(theme.badge_colors(BadgeVariant::Outline).fill, Color32::TRANSPARENT);
        assert_ne!(theme.badge_colors(BadgeVariant::Outline).stroke, Color32::TRANSPARENT);
        for variant in [
            BadgeVariant::Primary,
            BadgeVariant::Secondary,
            BadgeVariant::Destructive,
        ] {
            assert_ne!(theme.badge_colors(variant).fill, Color32::TRANSPARENT);
        }
    }

    #[test]
    fn test_accent_colors() {
        let theme = CalendarTheme::light();
        assert_eq!(theme.accent_colors(IconAccent::Red), theme.accent_red);
        assert_eq!(theme.accent_colors(IconAccent::Blue), theme.accent_blue);
    }
}
