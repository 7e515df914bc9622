//! dotgraph-util - Value helpers shared by the dotgraph traversal engine
//!
//! Own-key lookups, container emptiness and truthiness over `serde_json::Value`.

pub mod has_own_property;
pub mod is_empty;
pub mod truthy;

// Re-exports for convenience
pub use has_own_property::{has_own_property_value, own_child, own_child_mut, own_len, parse_index};
pub use is_empty::{is_container, is_empty_container};
pub use truthy::is_truthy;
