//! Service handles derived from an initialized app.
//!
//! Each handle is an opaque descriptor of one backend subsystem: it knows
//! where the subsystem lives and which project credentials address it. The
//! handles never talk to the network; page components do that with the
//! endpoints exposed here.

use super::options::FirebaseOptions;

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";
const MEASUREMENT_PROTOCOL_URL: &str = "https://www.google-analytics.com/mp/collect";
const DEFAULT_DATABASE: &str = "(default)";

/// Authentication subsystem.
#[derive(Debug)]
pub struct Auth {
    api_key: String,
    auth_domain: String,
}

impl Auth {
    pub(super) fn new(options: &FirebaseOptions) -> Self {
        Self {
            api_key: options.api_key.clone(),
            auth_domain: options.auth_domain.clone(),
        }
    }

    pub fn auth_domain(&self) -> &str {
        &self.auth_domain
    }

    /// Email/password account creation endpoint.
    pub fn sign_up_url(&self) -> String {
        self.accounts_url("signUp")
    }

    /// Email/password sign-in endpoint.
    pub fn sign_in_url(&self) -> String {
        self.accounts_url("signInWithPassword")
    }

    /// Redirect handler hosted on the auth domain.
    pub fn handler_url(&self) -> String {
        format!("https://{}/__/auth/handler", self.auth_domain)
    }

    fn accounts_url(&self, method: &str) -> String {
        format!(
            "{IDENTITY_TOOLKIT_URL}/accounts:{method}?key={}",
            urlencoding::encode(&self.api_key)
        )
    }
}

/// Document database subsystem.
#[derive(Debug)]
pub struct Firestore {
    project_id: String,
}

impl Firestore {
    pub(super) fn new(options: &FirebaseOptions) -> Self {
        Self {
            project_id: options.project_id.clone(),
        }
    }

    /// Root of the documents tree for the default database.
    pub fn documents_url(&self) -> String {
        format!(
            "{FIRESTORE_URL}/projects/{}/databases/{DEFAULT_DATABASE}/documents",
            urlencoding::encode(&self.project_id)
        )
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/{}",
            self.documents_url(),
            urlencoding::encode(collection)
        )
    }

    /// Document URL. The id is percent-encoded so any board id is addressable.
    pub fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{}",
            self.collection_url(collection),
            urlencoding::encode(id)
        )
    }
}

/// Push messaging subsystem. Browsers subscribe with the sender id.
#[derive(Debug)]
pub struct Messaging {
    sender_id: String,
}

impl Messaging {
    pub(super) fn new(options: &FirebaseOptions) -> Self {
        Self {
            sender_id: options.messaging_sender_id.clone(),
        }
    }

    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }
}

/// Analytics subsystem. Disabled when no measurement id is configured.
#[derive(Debug)]
pub struct Analytics {
    measurement_id: Option<String>,
}

impl Analytics {
    pub(super) fn new(options: &FirebaseOptions) -> Self {
        let measurement_id = options.analytics_measurement_id().map(str::to_string);
        if measurement_id.is_none() {
            tracing::warn!(
                project_id = %options.project_id,
                "No measurement id configured, analytics disabled"
            );
        }
        Self { measurement_id }
    }

    pub fn is_enabled(&self) -> bool {
        self.measurement_id.is_some()
    }

    pub fn measurement_id(&self) -> Option<&str> {
        self.measurement_id.as_deref()
    }

    pub fn collect_url(&self) -> Option<String> {
        self.measurement_id.as_ref().map(|id| {
            format!(
                "{MEASUREMENT_PROTOCOL_URL}?measurement_id={}",
                urlencoding::encode(id)
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::options::test_options;

    #[test]
    fn test_auth_endpoints() {
        let auth = Auth::new(&test_options());

        assert_eq!(auth.auth_domain(), "board-app.firebaseapp.com");
        assert_eq!(
            auth.sign_up_url(),
            "https://identitytoolkit.googleapis.com/v1/accounts:signUp?key=AIzaSyTestKey"
        );
        assert_eq!(
            auth.sign_in_url(),
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=AIzaSyTestKey"
        );
        assert_eq!(
            auth.handler_url(),
            "https://board-app.firebaseapp.com/__/auth/handler"
        );
    }

    #[test]
    fn test_firestore_document_url_encodes_id() {
        let db = Firestore::new(&test_options());

        assert_eq!(
            db.documents_url(),
            "https://firestore.googleapis.com/v1/projects/board-app/databases/(default)/documents"
        );
        assert_eq!(
            db.document_url("boards", "q3 plan/draft"),
            "https://firestore.googleapis.com/v1/projects/board-app/databases/(default)/documents/boards/q3%20plan%2Fdraft"
        );
    }

    #[test]
    fn test_messaging_sender_id() {
        let messaging = Messaging::new(&test_options());
        assert_eq!(messaging.sender_id(), "123456789012");
    }

    #[test]
    fn test_analytics_enabled_by_measurement_id() {
        let analytics = Analytics::new(&test_options());
        assert!(analytics.is_enabled());
        assert_eq!(analytics.measurement_id(), Some("G-TEST1234"));
        assert_eq!(
            analytics.collect_url().as_deref(),
            Some("https://www.google-analytics.com/mp/collect?measurement_id=G-TEST1234")
        );

        let mut options = test_options();
        options.measurement_id = None;
        let analytics = Analytics::new(&options);
        assert!(!analytics.is_enabled());
        assert_eq!(analytics.collect_url(), None);
    }
}
