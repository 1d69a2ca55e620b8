//! Platform integration — mounted-filesystem listing.

pub mod mounts;

pub use mounts::{parse_server_label, resolve_server_label, FALLBACK_LABEL};
