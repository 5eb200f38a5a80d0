//! Scraped-color canonicalization: normalization, deduplication, and
//! heuristic usage-context classification.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::normalize::{brightness, normalize_color, saturation};
use crate::types::{Context, NormalizedColor, ScrapedColorProfile};

/// Saturation below this reads as achromatic for background detection.
const LOW_SATURATION: f32 = 0.25;

/// Infers the usage role of a scraped color from brightness and saturation.
///
/// The rules are ordered: saturated mid-brightness colors read as buttons,
/// extreme brightness reads as text, washed-out extremes read as background,
/// everything else as accent.
pub fn classify_context(color: &NormalizedColor) -> Context {
    let sat = saturation(color);
    let bright = brightness(color);

    if sat > 0.3 && bright > 0.2 && bright < 0.9 {
        return Context::Button;
    }
    if bright < 0.3 || bright > 0.9 {
        return Context::Text;
    }
    if (bright > 0.7 && sat < LOW_SATURATION) || (bright < 0.3 && sat < LOW_SATURATION) {
        return Context::Background;
    }
    Context::Accent
}

/// Normalizes raw color strings into a [`ScrapedColorProfile`]: canonical
/// palette (deduplicated, insertion order), per-context buckets, and
/// raw/parsed counts for confidence scoring.
pub fn extract_scraped_colors(raw: &[String]) -> ScrapedColorProfile {
    let mut palette = Vec::new();
    let mut seen = BTreeSet::new();
    let mut contextual: BTreeMap<Context, Vec<NormalizedColor>> = BTreeMap::new();
    let mut parsed_count = 0usize;

    for input in raw {
        let Some(color) = normalize_color(input) else {
            continue;
        };
        parsed_count += 1;
        if !seen.insert(color.hex()) {
            continue;
        }
        contextual
            .entry(classify_context(&color))
            .or_default()
            .push(color);
        palette.push(color);
    }

    ScrapedColorProfile {
        palette,
        contextual,
        raw_count: raw.len(),
        parsed_count,
    }
}
