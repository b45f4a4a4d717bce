//! Backend configuration record, read from `FIREBASE_*` environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// The web app configuration for the Firebase project.
///
/// Values are taken verbatim from the environment. An unset variable becomes
/// an empty string; whether that is acceptable is decided by
/// [`AppRegistry::initialize_app`](super::AppRegistry::initialize_app).
///
/// Serializes in the camelCase shape the browser SDK expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FirebaseOptions {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub auth_domain: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub storage_bucket: String,
    #[serde(default)]
    pub messaging_sender_id: String,
    #[serde(default)]
    pub app_id: String,
    /// Analytics measurement id (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurement_id: Option<String>,
}

impl FirebaseOptions {
    pub const ENV_PREFIX: &'static str = "FIREBASE";

    /// Read the options from the process environment.
    ///
    /// `FIREBASE_API_KEY` maps to `api_key`, `FIREBASE_APP_ID` to `app_id`, and so on.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(Self::ENV_PREFIX))
    }

    /// Read the options from an explicit environment source.
    pub fn from_environment(source: Environment) -> Result<Self, ConfigError> {
        ConfigLoader::builder()
            .add_source(source)
            .build()?
            .try_deserialize()
    }

    /// Names of required fields that are empty, in SDK (camelCase) spelling.
    ///
    /// Only presence is checked; values are otherwise passed through as-is.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("apiKey", &self.api_key),
            ("authDomain", &self.auth_domain),
            ("projectId", &self.project_id),
            ("storageBucket", &self.storage_bucket),
            ("messagingSenderId", &self.messaging_sender_id),
            ("appId", &self.app_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// The measurement id, treating an empty value as absent.
    pub fn analytics_measurement_id(&self) -> Option<&str> {
        self.measurement_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// A complete set of options for tests.
#[cfg(test)]
pub(crate) fn test_options() -> FirebaseOptions {
    FirebaseOptions {
        api_key: "AIzaSyTestKey".to_string(),
        auth_domain: "board-app.firebaseapp.com".to_string(),
        project_id: "board-app".to_string(),
        storage_bucket: "board-app.appspot.com".to_string(),
        messaging_sender_id: "123456789012".to_string(),
        app_id: "1:123456789012:web:abcdef".to_string(),
        measurement_id: Some("G-TEST1234".to_string()),
    }
}
