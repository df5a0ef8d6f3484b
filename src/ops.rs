//! Database operations organized by entity type.
//!
//! Every function here takes the connection explicitly and propagates errors;
//! the log-and-fallback behavior lives in [`crate::catalog::Catalog`].

mod cookbooks;
mod loans;
mod tags;

pub use cookbooks::*;
pub use loans::*;
pub use tags::*;
