//! The set of handles shared with page components.

use std::sync::Arc;

use super::app::{AppRegistry, BackendError, FirebaseApp};
use super::options::FirebaseOptions;
use super::services::{Analytics, Auth, Firestore, Messaging};

/// The five backend handles, created once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct BackendHandles {
    pub app: FirebaseApp,
    pub analytics: Arc<Analytics>,
    pub db: Arc<Firestore>,
    pub messaging: Arc<Messaging>,
    pub auth: Arc<Auth>,
}

impl BackendHandles {
    /// Initialize the default app and derive its handles.
    ///
    /// Calling this again with the same options returns the same handles.
    pub fn initialize(
        registry: &AppRegistry,
        options: FirebaseOptions,
    ) -> Result<Self, BackendError> {
        let app = registry.initialize_app(options, None)?;
        Ok(Self::from_app(app))
    }

    pub fn from_app(app: FirebaseApp) -> Self {
        Self {
            analytics: app.analytics(),
            db: app.firestore(),
            messaging: app.messaging(),
            auth: app.auth(),
            app,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::options::test_options;

    #[test]
    fn test_complete_options_yield_five_handles() {
        let registry = AppRegistry::new();
        let handles = BackendHandles::initialize(&registry, test_options()).unwrap();

        assert_eq!(handles.app.options().project_id, "board-app");
        assert!(handles.analytics.is_enabled());
        assert!(handles.db.documents_url().contains("/projects/board-app/"));
        assert_eq!(handles.messaging.sender_id(), "123456789012");
        assert_eq!(handles.auth.auth_domain(), "board-app.firebaseapp.com");
    }

    #[test]
    fn test_missing_api_key_fails_initialization() {
        let registry = AppRegistry::new();
        let mut options = test_options();
        options.api_key.clear();

        let err = BackendHandles::initialize(&registry, options).unwrap_err();
        assert!(matches!(err, BackendError::InvalidOptions { ref missing } if missing == &vec!["apiKey"]));
    }

    #[test]
    fn test_reinitialize_yields_same_handles() {
        let registry = AppRegistry::new();
        let first = BackendHandles::initialize(&registry, test_options()).unwrap();
        let second = BackendHandles::initialize(&registry, test_options()).unwrap();

        assert!(first.app.ptr_eq(&second.app));
        assert!(Arc::ptr_eq(&first.analytics, &second.analytics));
        assert!(Arc::ptr_eq(&first.db, &second.db));
        assert!(Arc::ptr_eq(&first.messaging, &second.messaging));
        assert!(Arc::ptr_eq(&first.auth, &second.auth));
    }

    #[test]
    fn test_from_app_matches_app_accessors() {
        let registry = AppRegistry::new();
        let app = registry.initialize_app(test_options(), None).unwrap();
        let handles = BackendHandles::from_app(app.clone());

        assert!(Arc::ptr_eq(&handles.auth, &app.auth()));
        assert!(Arc::ptr_eq(&handles.db, &app.firestore()));
    }
}
