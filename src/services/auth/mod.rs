//! Authentication context for the dashboard.
//!
//! The desktop build has no login server: the session is whatever user the
//! settings file names. Views only see the `AuthProvider` trait.

use crate::models::settings::Settings;
use crate::models::user::User;

/// Source of the currently signed-in user
#[cfg_attr(test, mockall::automock)]
pub trait AuthProvider {
    /// The signed-in user, or `None` when nobody is authenticated
    fn current_user(&self) -> Option<User>;

    /// End the current session
    fn sign_out(&mut self);
}

/// Session taken from configuration
#[derive(Debug, Clone, Default)]
pub struct ConfiguredSession {
    user: Option<User>,
}

impl ConfiguredSession {
    pub fn new(user: Option<User>) -> Self {
        Self { user }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let user = settings.session.as_ref().map(User::from);
        match &user {
            Some(user) => log::info!("Signed in as {} ({})", user.name, user.role),
            None => log::info!("No session configured; dashboard will stay empty"),
        }
        Self { user }
    }
}

impl AuthProvider for ConfiguredSession {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }

    fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("{} signed out", user.name);
        }
    }
}
