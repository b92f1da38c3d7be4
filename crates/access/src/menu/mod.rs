//! Menu system: access rules, path resolution, and navigation filtering.
//!
//! The registry holds the static menu-key -> rule table and provides:
//! - Key and path lookups for point queries
//! - Longest-prefix route resolution at segment boundaries
//! - Input for the permission-based navigation filter

mod nav;
mod registry;

pub use nav::{NavItem, filter_nav_items};
pub use registry::{AccessMode, MenuConfig, MenuRegistry};
