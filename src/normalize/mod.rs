//! Normalization leaves: canonical colors and cleaned font families.

mod color;
mod font;

pub use color::{
    brightness, color_distance, color_similarity, is_accepted_neutral, normalize_color,
    saturation, AUTHORIZED_MATCH_THRESHOLD, STRICT_MATCH_THRESHOLD,
};
pub use font::{canonical_weight, clean_family, font_similarity};
