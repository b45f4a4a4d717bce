//! Page routing for the shell.
//!
//! An explicit, ordered table of path patterns evaluated by [`RouteTable::dispatch`].
//! Every path resolves to exactly one page; unmatched paths resolve to
//! [`PageId::NotFound`].

mod pattern;
mod table;

pub use pattern::*;
pub use table::*;
