//! Shared utilities.
//!
//! Easing curves, color values and mixing, and the frame clock used by
//! real-time drivers.

pub mod color;
pub mod easing;
pub mod frame_timing;
