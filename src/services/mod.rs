// Service module exports

pub mod auth;
pub mod event;
pub mod feast;
pub mod settings;
