//! The fixed map model.
//!
//! One concrete instance: the 13 Canadian provinces and territories and
//! their real-world borders. Region order, color display names, and the
//! adjacency matrix are process-lifetime constants; nothing here is
//! configurable at runtime.

mod topology;

pub use topology::{
    adjacent, adjacent_pairs, COLOR_NAMES, MAX_COLORS, REGION_COUNT, REGION_NAMES,
};
