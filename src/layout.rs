//! Region tracking for mouse interaction
//!
//! Rendering records where clickable things ended up in `LayoutRegions`;
//! `region_at()` maps a screen position back to one of them.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
