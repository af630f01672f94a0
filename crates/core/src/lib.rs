//! Domain types and pure helpers for the folio content server.
//!
//! Nothing in this crate touches the filesystem or the network; the
//! store and API crates build on these types.

pub mod action;
pub mod error;
pub mod filter;
pub mod ids;
pub mod mime;
pub mod records;
pub mod site;
pub mod types;
