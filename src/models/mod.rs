// Module exports for models

pub mod event;
pub mod feast;
pub mod settings;
pub mod ui;
pub mod user;
