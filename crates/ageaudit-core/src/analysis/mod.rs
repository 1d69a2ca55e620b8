//! Post-scan reductions over the inventory.

pub mod extensions;
pub mod usage;

pub use extensions::{extension_of, extensions_of};
pub use usage::total_disk_usage_gb;
