//! HTTP layer for the board shell.
//!
//! Serves every page path through the route table, plus health and the
//! public backend configuration.

pub mod handlers;
mod pages;
mod routes;
mod types;

pub use routes::build_router;
