//! Core app instances and the registry that owns them.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use thiserror::Error;

use super::options::FirebaseOptions;
use super::services::{Analytics, Auth, Firestore, Messaging};

/// Name used when an app is initialized without an explicit name.
pub const DEFAULT_APP_NAME: &str = "[DEFAULT]";

/// Errors from app initialization and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("Invalid backend options, missing: {}", .missing.join(", "))]
    InvalidOptions { missing: Vec<&'static str> },

    #[error("App '{0}' already exists with different options")]
    DuplicateApp(String),

    #[error("No app named '{0}' has been initialized")]
    NoApp(String),
}

struct AppInner {
    name: String,
    options: FirebaseOptions,
    analytics: OnceLock<Arc<Analytics>>,
    firestore: OnceLock<Arc<Firestore>>,
    messaging: OnceLock<Arc<Messaging>>,
    auth: OnceLock<Arc<Auth>>,
}

/// An initialized app. Cheap to clone; clones share the same instance.
///
/// Service handles are derived on first access and cached, so every call
/// returns the same `Arc`.
#[derive(Clone)]
pub struct FirebaseApp {
    inner: Arc<AppInner>,
}

impl FirebaseApp {
    fn new(name: &str, options: FirebaseOptions) -> Result<Self, BackendError> {
        let missing = options.missing_fields();
        if !missing.is_empty() {
            return Err(BackendError::InvalidOptions { missing });
        }

        Ok(Self {
            inner: Arc::new(AppInner {
                name: name.to_string(),
                options,
                analytics: OnceLock::new(),
                firestore: OnceLock::new(),
                messaging: OnceLock::new(),
                auth: OnceLock::new(),
            }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn options(&self) -> &FirebaseOptions {
        &self.inner.options
    }

    pub fn analytics(&self) -> Arc<Analytics> {
        Arc::clone(
            self.inner
                .analytics
                .get_or_init(|| Arc::new(Analytics::new(&self.inner.options))),
        )
    }

    pub fn firestore(&self) -> Arc<Firestore> {
        Arc::clone(
            self.inner
                .firestore
                .get_or_init(|| Arc::new(Firestore::new(&self.inner.options))),
        )
    }

    pub fn messaging(&self) -> Arc<Messaging> {
        Arc::clone(
            self.inner
                .messaging
                .get_or_init(|| Arc::new(Messaging::new(&self.inner.options))),
        )
    }

    pub fn auth(&self) -> Arc<Auth> {
        Arc::clone(
            self.inner
                .auth
                .get_or_init(|| Arc::new(Auth::new(&self.inner.options))),
        )
    }

    /// True when both values refer to the same instance.
    pub fn ptr_eq(&self, other: &FirebaseApp) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for FirebaseApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseApp")
            .field("name", &self.inner.name)
            .field("project_id", &self.inner.options.project_id)
            .finish()
    }
}

/// Owns every initialized app, keyed by name.
#[derive(Default)]
pub struct AppRegistry {
    apps: Mutex<HashMap<String, FirebaseApp>>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize an app, or return the existing one.
    ///
    /// Re-initializing a name with identical options returns the instance
    /// created first. Different options for an existing name are rejected.
    pub fn initialize_app(
        &self,
        options: FirebaseOptions,
        name: Option<&str>,
    ) -> Result<FirebaseApp, BackendError> {
        let name = name.unwrap_or(DEFAULT_APP_NAME);
        let mut apps = self.lock();

        if let Some(existing) = apps.get(name) {
            if existing.options() == &options {
                tracing::debug!(app = %name, "App already initialized, reusing instance");
                return Ok(existing.clone());
            }
            return Err(BackendError::DuplicateApp(name.to_string()));
        }

        let app = FirebaseApp::new(name, options)?;
        apps.insert(name.to_string(), app.clone());

        tracing::info!(
            app = %name,
            project_id = %app.options().project_id,
            "Backend app initialized"
        );

        Ok(app)
    }

    /// Look up an initialized app. `None` means the default app.
    pub fn get_app(&self, name: Option<&str>) -> Result<FirebaseApp, BackendError> {
        let name = name.unwrap_or(DEFAULT_APP_NAME);
        self.lock()
            .get(name)
            .cloned()
            .ok_or_else(|| BackendError::NoApp(name.to_string()))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, FirebaseApp>> {
        // The map is never left half-updated, so a poisoned lock is still usable.
        self.apps.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::options::test_options;

    #[test]
    fn test_initialize_default_app() {
        let registry = AppRegistry::new();
        let app = registry.initialize_app(test_options(), None).unwrap();

        assert_eq!(app.name(), DEFAULT_APP_NAME);
        assert_eq!(app.options().project_id, "board-app");
        assert!(registry.get_app(None).unwrap().ptr_eq(&app));
    }

    #[test]
    fn test_missing_api_key_fails() {
        let registry = AppRegistry::new();
        let mut options = test_options();
        options.api_key = String::new();

        let err = registry.initialize_app(options, None).unwrap_err();
        assert_eq!(
            err,
            BackendError::InvalidOptions {
                missing: vec!["apiKey"]
            }
        );
        assert_eq!(err.to_string(), "Invalid backend options, missing: apiKey");

        // Nothing was registered
        assert_eq!(
            registry.get_app(None).unwrap_err(),
            BackendError::NoApp(DEFAULT_APP_NAME.to_string())
        );
    }

    #[test]
    fn test_whitespace_api_key_is_passed_through() {
        let registry = AppRegistry::new();
        let mut options = test_options();
        options.api_key = " ".to_string();

        let app = registry.initialize_app(options, None).unwrap();
        assert_eq!(app.options().api_key, " ");
    }

    #[test]
    fn test_missing_measurement_id_is_allowed() {
        let registry = AppRegistry::new();
        let mut options = test_options();
        options.measurement_id = None;

        let app = registry.initialize_app(options, None).unwrap();
        assert!(!app.analytics().is_enabled());
    }

    #[test]
    fn test_reinitialize_with_same_options_returns_same_app() {
        let registry = AppRegistry::new();
        let first = registry.initialize_app(test_options(), None).unwrap();
        let second = registry.initialize_app(test_options(), None).unwrap();

        assert!(first.ptr_eq(&second));
    }

    #[test]
    fn test_reinitialize_with_different_options_fails() {
        let registry = AppRegistry::new();
        registry.initialize_app(test_options(), None).unwrap();

        let mut other = test_options();
        other.project_id = "other-project".to_string();

        assert_eq!(
            registry.initialize_app(other.clone(), None).unwrap_err(),
            BackendError::DuplicateApp(DEFAULT_APP_NAME.to_string())
        );

        // A different name is a separate app
        let secondary = registry.initialize_app(other, Some("secondary")).unwrap();
        assert_eq!(secondary.name(), "secondary");
        assert!(!secondary.ptr_eq(&registry.get_app(None).unwrap()));
    }

    #[test]
    fn test_service_handles_are_derived_once() {
        let registry = AppRegistry::new();
        let app = registry.initialize_app(test_options(), None).unwrap();

        assert!(Arc::ptr_eq(&app.auth(), &app.auth()));
        assert!(Arc::ptr_eq(&app.firestore(), &app.firestore()));
        assert!(Arc::ptr_eq(&app.messaging(), &app.messaging()));
        assert!(Arc::ptr_eq(&app.analytics(), &app.analytics()));

        // Clones of the app share the cached handles
        let clone = app.clone();
        assert!(Arc::ptr_eq(&app.auth(), &clone.auth()));
    }
}
