//! Backend handle initialization.
//!
//! Reads the Firebase web configuration, initializes the core app instance
//! and derives the analytics, database, messaging and auth handles from it.

mod app;
mod handles;
mod options;
mod services;

pub use app::*;
pub use handles::*;
pub use options::*;
pub use services::*;
