//! Catalog overlays and JSON deep merge.

pub mod deep;
pub mod overlay;

pub use deep::deep_merge;
pub use overlay::{discover_overlays, is_overlay};
