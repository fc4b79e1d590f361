//! Category-to-presentation lookups.
//!
//! Both lookups are total: the known categories have fixed styling and
//! everything else falls through to the default arm.

use crate::models::event::EventType;

/// Badge emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeVariant {
    Primary,
    Secondary,
    Destructive,
    Outline,
}

/// Symbolic icon identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventIcon {
    CalendarDays,
    Users,
    Clock,
    MapPin,
}

impl EventIcon {
    pub fn name(&self) -> &'static str {
        match self {
            EventIcon::CalendarDays => "calendar-days",
            EventIcon::Users => "users",
            EventIcon::Clock => "clock",
            EventIcon::MapPin => "map-pin",
        }
    }

    /// Glyph drawn for this icon
    pub fn glyph(&self) -> &'static str {
        match self {
            EventIcon::CalendarDays => "📅",
            EventIcon::Users => "👥",
            EventIcon::Clock => "🕐",
            EventIcon::MapPin => "📍",
        }
    }
}

pub fn variant_for(event_type: &EventType) -> BadgeVariant {
    match event_type {
        EventType::Lesson => BadgeVariant::Primary,
        EventType::Service => BadgeVariant::Secondary,
        EventType::Feast => BadgeVariant::Destructive,
        EventType::Meeting => BadgeVariant::Outline,
        EventType::Other(_) => BadgeVariant::Primary,
    }
}

pub fn icon_for(event_type: &EventType) -> EventIcon {
    match event_type {
        EventType::Lesson => EventIcon::CalendarDays,
        EventType::Service => EventIcon::Users,
        EventType::Feast => EventIcon::CalendarDays,
        EventType::Meeting => EventIcon::Clock,
        EventType::Other(_) => EventIcon::CalendarDays,
    }
}

/// Badge variant for a raw category name
pub fn type_to_variant(type_name: &str) -> BadgeVariant {
    variant_for(&EventType::parse(type_name))
}

/// Icon for a raw category name
pub fn type_to_icon(type_name: &str) -> EventIcon {
    icon_for(&EventType::parse(type_name))
}
