//! Geometry primitives shared by layout, hit-testing, and draw recording.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
