//! Shared application state injected into every handler.

use std::sync::Arc;

use subtle::ConstantTimeEq;

use crate::application::services::MappingService;

/// Username/password pair protecting the mutating endpoints.
#[derive(Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Compares supplied credentials against the configured ones in constant
    /// time. Both fields are always compared.
    pub fn matches(&self, username: &str, password: Option<&str>) -> bool {
        let user_ok = constant_time_eq(&self.username, username);
        let password_ok = constant_time_eq(&self.password, password.unwrap_or_default());

        user_ok & password_ok & password.is_some()
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Cheaply cloneable state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub credentials: Arc<BasicCredentials>,
}

impl AppState {
    pub fn new(mapping_service: Arc<MappingService>, credentials: BasicCredentials) -> Self {
        Self {
            mapping_service,
            credentials: Arc::new(credentials),
        }
    }
}
