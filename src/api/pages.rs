//! HTML mount documents for the shell's pages.
//!
//! Each page is an empty mount point tagged with its page id and the
//! collaborators the page component needs: endpoints from the backend
//! handles, the captured board id, and the public backend configuration.

use crate::backend::BackendHandles;
use crate::router::{PageId, RouteMatch};

const BOARDS_COLLECTION: &str = "boards";

/// Render the document for a dispatched route.
pub fn render(route: &RouteMatch, backend: &BackendHandles) -> Result<String, serde_json::Error> {
    let config_json = serde_json::to_string(backend.app.options())?.replace("</", "<\\/");

    let mut attrs = vec![("data-page", route.page.to_string())];
    match route.page {
        PageId::SignUp => {
            attrs.push(("data-sign-up-url", backend.auth.sign_up_url()));
        }
        PageId::Login => {
            attrs.push(("data-sign-in-url", backend.auth.sign_in_url()));
            attrs.push(("data-auth-handler", backend.auth.handler_url()));
        }
        PageId::Dashboard => {
            attrs.push(("data-boards-url", backend.db.collection_url(BOARDS_COLLECTION)));
        }
        PageId::Board => {
            if let Some(id) = route.board_id() {
                attrs.push(("data-board-id", id.to_string()));
                attrs.push(("data-board-url", backend.db.document_url(BOARDS_COLLECTION, id)));
                attrs.push(("data-push-sender", backend.messaging.sender_id().to_string()));
            }
        }
        PageId::NotFound => {}
    }
    if let Some(url) = backend.analytics.collect_url() {
        attrs.push(("data-analytics-url", url));
    }

    let attrs: String = attrs
        .iter()
        .map(|(name, value)| format!(" {name}=\"{}\"", escape(value)))
        .collect();

    Ok(format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script>window.__FIREBASE_CONFIG__ = {config_json};</script>
</head>
<body>
<main id="app"{attrs}></main>
</body>
</html>
"#,
        title = escape(route.page.title()),
    ))
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{test_options, AppRegistry};
    use crate::router::RouteTable;

    fn backend() -> BackendHandles {
        BackendHandles::initialize(&AppRegistry::new(), test_options()).unwrap()
    }

    #[test]
    fn test_board_page_carries_escaped_id() {
        let table = RouteTable::standard().unwrap();
        let route = table.dispatch("/board/%3Cscript%3E%22x");

        let html = render(&route, &backend()).unwrap();
        assert!(html.contains(r#"data-page="board""#));
        assert!(html.contains(r#"data-board-id="&lt;script&gt;&quot;x""#));
        assert!(html.contains("/documents/boards/%3Cscript%3E%22x"));
        assert!(!html.contains("<script>\""));
    }

    #[test]
    fn test_login_page_carries_auth_endpoints() {
        let table = RouteTable::standard().unwrap();
        let html = render(&table.dispatch("/"), &backend()).unwrap();

        assert!(html.contains(r#"data-page="login""#));
        assert!(html.contains("accounts:signInWithPassword?key=AIzaSyTestKey"));
        assert!(html.contains("<title>Log in</title>"));
    }

    #[test]
    fn test_config_is_embedded_for_the_browser_sdk() {
        let table = RouteTable::standard().unwrap();
        let html = render(&table.dispatch("/dashboard"), &backend()).unwrap();

        assert!(html.contains(r#""projectId":"board-app""#));
        assert!(html.contains("data-boards-url="));
        assert!(html.contains("data-analytics-url="));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"a&b<'c'>"d""#), "a&amp;b&lt;&#39;c&#39;&gt;&quot;d&quot;");
        assert_eq!(escape("plain"), "plain");
    }
}
