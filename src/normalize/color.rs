//! Color normalization and similarity.
//!
//! Every supported representation (`#RGB`, `#RRGGBB`, `rgb()`, `rgba()`, bare
//! 3/6-digit hex) maps to the same canonical value; anything else, including
//! CSS variables, maps to `None`. Similarity is Euclidean distance in RGB
//! space rescaled to [0, 1].

use crate::types::NormalizedColor;
use palette::Srgb;

/// Similarity above this counts as "the same brand color" (Euclidean
/// distance below ~30).
pub const STRICT_MATCH_THRESHOLD: f32 = 0.93;

/// Looser similarity used to decide whether a color is authorized at all.
pub const AUTHORIZED_MATCH_THRESHOLD: f32 = 0.7;

const MAX_DISTANCE: f32 = 441.672_97; // sqrt(3 * 255^2)

/// Converts any supported color representation to its canonical form.
/// Pure and total: unparseable input yields `None`, never a partial value.
pub fn normalize_color(input: &str) -> Option<NormalizedColor> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.to_ascii_lowercase().starts_with("var(") {
        return None;
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
    {
        return parse_rgb_args(args.strip_suffix(')')?);
    }

    parse_hex(trimmed.strip_prefix('#').unwrap_or(trimmed))
}

fn parse_rgb_args(args: &str) -> Option<NormalizedColor> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    // rgb(r,g,b) or rgba(r,g,b,a); the alpha channel is ignored.
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let r = parts[0].parse::<u16>().ok().filter(|v| *v <= 255)?;
    let g = parts[1].parse::<u16>().ok().filter(|v| *v <= 255)?;
    let b = parts[2].parse::<u16>().ok().filter(|v| *v <= 255)?;
    Some(NormalizedColor::from_rgb(r as u8, g as u8, b as u8))
}

fn parse_hex(hex: &str) -> Option<NormalizedColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let digit = c.to_digit(16)? as u8;
                channels[i] = digit * 16 + digit;
            }
            Some(NormalizedColor::from_rgb(
                channels[0],
                channels[1],
                channels[2],
            ))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(NormalizedColor::from_rgb(r, g, b))
        }
        _ => None,
    }
}

fn srgb(color: &NormalizedColor) -> Srgb<f32> {
    let [r, g, b] = color.channels();
    Srgb::new(r, g, b).into_format()
}

/// Euclidean distance in RGB space, in [0, ~441.67].
pub fn color_distance(a: &NormalizedColor, b: &NormalizedColor) -> f32 {
    let [ar, ag, ab] = a.channels();
    let [br, bg, bb] = b.channels();
    let dr = ar as f32 - br as f32;
    let dg = ag as f32 - bg as f32;
    let db = ab as f32 - bb as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Similarity in [0, 1]; identical colors score 1.0.
pub fn color_similarity(a: &NormalizedColor, b: &NormalizedColor) -> f32 {
    1.0 - color_distance(a, b) / MAX_DISTANCE
}

/// Perceived brightness in [0, 1] (ITU-R BT.601 luma weights).
pub fn brightness(color: &NormalizedColor) -> f32 {
    let c = srgb(color);
    0.299 * c.red + 0.587 * c.green + 0.114 * c.blue
}

/// Saturation in [0, 1] as (max - min) / max over the RGB channels.
pub fn saturation(color: &NormalizedColor) -> f32 {
    let [r, g, b] = color.channels();
    let max = r.max(g).max(b) as f32;
    let min = r.min(g).min(b) as f32;
    if max == 0.0 {
        0.0
    } else {
        (max - min) / max
    }
}

/// Allow-list of neutrals that never count as unauthorized: white, black, and
/// the gray steps between them (achromatic colors).
pub fn is_accepted_neutral(color: &NormalizedColor) -> bool {
    let [r, g, b] = color.channels();
    r == g && g == b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_all_supported_formats_to_same_value() {
        let expected = normalize_color("#FF0000").expect("canonical hex");
        assert_eq!(expected.hex(), "#FF0000");

        for input in ["#f00", "f00", "ff0000", "rgb(255,0,0)", "rgba(255, 0, 0, 0.5)"] {
            let normalized = normalize_color(input)
                .unwrap_or_else(|| panic!("should normalize {input}"));
            assert_eq!(normalized, expected, "input {input}");
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["#1A2B3C", "#abc", "rgb(10, 20, 30)"] {
            let once = normalize_color(input).expect("first pass");
            let twice = normalize_color(&once.hex()).expect("second pass");
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn rejects_unparseable_input() {
        for input in [
            "not-a-color",
            "",
            "var(--brand-primary)",
            "#12345",
            "rgb(300,0,0)",
            "rgb(1,2)",
            "hsl(120, 50%, 50%)",
        ] {
            assert!(normalize_color(input).is_none(), "input {input:?}");
        }
    }

    #[test]
    fn similarity_of_identical_colors_is_one() {
        let red = normalize_color("#FF0000").unwrap();
        assert!((color_similarity(&red, &red) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn similarity_of_opposite_extremes_is_zero() {
        let black = normalize_color("#000000").unwrap();
        let white = normalize_color("#FFFFFF").unwrap();
        assert!(color_similarity(&black, &white).abs() < 1e-5);
    }

    #[test]
    fn strict_threshold_matches_distance_thirty() {
        let a = NormalizedColor::from_rgb(100, 100, 100);
        let b = NormalizedColor::from_rgb(117, 117, 117); // distance ~29.4
        assert!(color_similarity(&a, &b) > STRICT_MATCH_THRESHOLD);

        let c = NormalizedColor::from_rgb(120, 120, 120); // distance ~34.6
        assert!(color_similarity(&a, &c) < STRICT_MATCH_THRESHOLD);
    }

    #[test]
    fn brightness_and_saturation_extremes() {
        let white = normalize_color("#FFFFFF").unwrap();
        let black = normalize_color("#000000").unwrap();
        let red = normalize_color("#FF0000").unwrap();

        assert!((brightness(&white) - 1.0).abs() < 1e-5);
        assert!(brightness(&black) < 1e-5);
        assert!((saturation(&red) - 1.0).abs() < 1e-5);
        assert!(saturation(&white) < 1e-5);
    }

    #[test]
    fn gray_steps_are_accepted_neutrals() {
        for hex in ["#FFFFFF", "#000000", "#CCCCCC", "#333333"] {
            let color = normalize_color(hex).unwrap();
            assert!(is_accepted_neutral(&color), "{hex}");
        }
        let teal = normalize_color("#11AABB").unwrap();
        assert!(!is_accepted_neutral(&teal));
    }
}
