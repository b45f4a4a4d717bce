//! The ordered page route table and its dispatch function.

use super::pattern::{Params, PatternError, RoutePattern};

/// Pages the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Account creation form.
    SignUp,
    /// Sign-in form. Also the landing page.
    Login,
    /// The signed-in user's list of boards.
    Dashboard,
    /// A single collaborative board, addressed by id.
    Board,
    /// Shown for any path without a route.
    NotFound,
}

impl PageId {
    pub fn title(&self) -> &'static str {
        match self {
            PageId::SignUp => "Sign up",
            PageId::Login => "Log in",
            PageId::Dashboard => "Dashboard",
            PageId::Board => "Board",
            PageId::NotFound => "Page not found",
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageId::SignUp => write!(f, "signup"),
            PageId::Login => write!(f, "login"),
            PageId::Dashboard => write!(f, "dashboard"),
            PageId::Board => write!(f, "board"),
            PageId::NotFound => write!(f, "not_found"),
        }
    }
}

/// A single (pattern, page) pair.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub page: PageId,
}

/// The outcome of dispatching a path: one page and its captured parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: PageId,
    pub params: Params,
}

impl RouteMatch {
    fn not_found() -> Self {
        Self {
            page: PageId::NotFound,
            params: Params::default(),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    /// The captured board identifier, present only on the board page.
    pub fn board_id(&self) -> Option<&str> {
        match self.page {
            PageId::Board => self.param("id"),
            _ => None,
        }
    }
}

/// Ordered list of routes. The first entry whose pattern matches wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The application's routes.
    pub fn standard() -> Result<Self, PatternError> {
        let mut table = Self::new();
        table
            .add("/signup", PageId::SignUp)?
            .add("/login", PageId::Login)?
            .add("/dashboard", PageId::Dashboard)?
            .add("/board/:id", PageId::Board)?
            .add("/", PageId::Login)?;
        Ok(table)
    }

    /// Append a route. Rejects a pattern with the same shape as one already present.
    pub fn add(&mut self, pattern: &str, page: PageId) -> Result<&mut Self, PatternError> {
        let pattern = RoutePattern::parse(pattern)?;

        if let Some(existing) = self.entries.iter().find(|e| e.pattern.overlaps(&pattern)) {
            return Err(PatternError::DuplicatePattern {
                existing: existing.pattern.as_str().to_string(),
                new: pattern.as_str().to_string(),
            });
        }

        self.entries.push(RouteEntry { pattern, page });
        Ok(self)
    }

    /// Select the page for a path. Query strings and fragments are ignored.
    pub fn dispatch(&self, path: &str) -> RouteMatch {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        let matched = self
            .entries
            .iter()
            .find_map(|entry| {
                entry.pattern.matches(path).map(|params| RouteMatch {
                    page: entry.page,
                    params,
                })
            })
            .unwrap_or_else(RouteMatch::not_found);

        tracing::debug!(path = %path, page = %matched.page, "Route dispatched");
        matched
    }

    /// The page mounted at `/`, if the table has a root route.
    pub fn root_page(&self) -> Option<PageId> {
        self.entries
            .iter()
            .find(|e| e.pattern.is_root())
            .map(|e| e.page)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
