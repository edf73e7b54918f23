//! Color handling.
//!
//! Style properties store colors as packed `0xRRGGBBAA` integers ([`Rgba`]);
//! the color-picker controls work in HSV space ([`Hsv`]) and convert at the
//! edges. Conversion is intentionally not bit-exact on round trips — callers
//! that drag a value across frames must keep the `Hsv` representation as the
//! source of truth instead of re-deriving it from rounded RGB.

mod hsv;
mod rgba;

pub use hsv::{hsv_to_rgb, rgb_to_hsv, Hsv};
pub use rgba::Rgba;
