//! Adapters from raw guideline JSON to the canonical brand profiles.

use serde_json::Value;
use std::collections::BTreeSet;

use crate::normalize::{canonical_weight, clean_family, normalize_color};
use crate::types::{
    BrandColorProfile, BrandLogoProfile, BrandTypographyProfile, FontFamilyDescriptor,
    NormalizedColor, Size,
};

/// Builds a [`BrandColorProfile`] from any of the supported guideline shapes:
/// an array of `{hex, usage}` records, a flat object with
/// `primary`/`secondary`/`accent`/`palette` keys, or an object with nested
/// `semantic`/`neutral` color groups.
pub fn extract_color_profile(section: &Value) -> BrandColorProfile {
    let mut profile = BrandColorProfile::default();

    match section {
        Value::Array(records) => extract_from_color_records(records, &mut profile),
        Value::Object(map) => {
            if let Some(primary) = map.get("primary").and_then(first_color) {
                profile.primary = Some(primary);
            }
            profile.secondary = map.get("secondary").map(colors_in).unwrap_or_default();
            profile.accent = map.get("accent").map(colors_in).unwrap_or_default();
            profile.neutral = map.get("neutral").map(colors_in).unwrap_or_default();
            profile.forbidden = map.get("forbidden").map(colors_in).unwrap_or_default();

            let mut extra = map.get("palette").map(colors_in).unwrap_or_default();
            // Nested semantic groups ({"semantic": {"success": "#...", ...}})
            // contribute to the authorized palette.
            if let Some(semantic) = map.get("semantic") {
                extra.extend(colors_in(semantic));
            }
            rebuild_palette(&mut profile, extra);
        }
        _ => {}
    }

    profile
}

fn extract_from_color_records(records: &[Value], profile: &mut BrandColorProfile) {
    let mut rest = Vec::new();

    for record in records {
        let Some(color) = first_color(record) else {
            continue;
        };
        let usage = record
            .get("usage")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_ascii_lowercase();

        if usage.contains("forbidden") || usage.contains("avoid") {
            profile.forbidden.push(color);
        } else if usage.contains("primary") {
            if profile.primary.is_none() {
                profile.primary = Some(color);
            } else {
                rest.push(color);
            }
        } else if usage.contains("secondary") {
            profile.secondary.push(color);
        } else if usage.contains("accent") {
            profile.accent.push(color);
        } else if usage.contains("neutral") || usage.contains("gray") || usage.contains("grey") {
            profile.neutral.push(color);
        } else {
            rest.push(color);
        }
    }

    // Only when no usage text names a primary does the first unclassified
    // entry take the slot.
    if profile.primary.is_none() && !rest.is_empty() {
        profile.primary = Some(rest.remove(0));
    }

    rebuild_palette(profile, rest);
}

/// Deduplicated union of every authorized bucket plus `extra`, insertion
/// order preserved.
fn rebuild_palette(profile: &mut BrandColorProfile, extra: Vec<NormalizedColor>) {
    let mut palette = Vec::new();
    let mut seen = BTreeSet::new();
    let candidates = profile
        .primary
        .iter()
        .copied()
        .chain(profile.secondary.iter().copied())
        .chain(profile.accent.iter().copied())
        .chain(profile.neutral.iter().copied())
        .chain(extra);

    for color in candidates {
        if seen.insert(color.hex()) {
            palette.push(color);
        }
    }

    profile.palette = palette;
}

/// Collects every normalizable color string reachable from `value`,
/// recursing through nested objects and arrays.
fn colors_in(value: &Value) -> Vec<NormalizedColor> {
    match value {
        Value::String(s) => normalize_color(s).into_iter().collect(),
        Value::Array(items) => items.iter().flat_map(colors_in).collect(),
        Value::Object(map) => {
            // Records like {hex: "#..", usage: ".."} contribute one color;
            // plain nested groups contribute all their leaves.
            if let Some(color) = color_field(map) {
                vec![color]
            } else {
                map.values().flat_map(colors_in).collect()
            }
        }
        _ => Vec::new(),
    }
}

fn first_color(value: &Value) -> Option<NormalizedColor> {
    colors_in(value).into_iter().next()
}

fn color_field(map: &serde_json::Map<String, Value>) -> Option<NormalizedColor> {
    ["hex", "value", "color"]
        .iter()
        .filter_map(|key| map.get(*key))
        .filter_map(Value::as_str)
        .find_map(normalize_color)
}

/// Builds a [`BrandTypographyProfile`] from an array of font records, a flat
/// object with `primary`/`secondary` keys, or an object carrying a `fonts`
/// array.
pub fn extract_typography_profile(section: &Value) -> BrandTypographyProfile {
    let mut profile = BrandTypographyProfile::default();

    match section {
        Value::Array(records) => {
            for record in records {
                let Some(descriptor) = font_descriptor(record) else {
                    continue;
                };
                let usage = record
                    .get("usage")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_ascii_lowercase();

                if usage.contains("primary") && profile.primary.is_none() {
                    profile.primary = Some(descriptor.clone());
                } else if usage.contains("secondary") && profile.secondary.is_none() {
                    profile.secondary = Some(descriptor.clone());
                }
                profile.all.push(descriptor);
            }
            // Usage text assigns the roles; position only fills the gaps.
            if profile.primary.is_none() {
                let secondary_family = profile.secondary.as_ref().map(|d| d.family.clone());
                profile.primary = profile
                    .all
                    .iter()
                    .find(|d| Some(d.family.as_str()) != secondary_family.as_deref())
                    .cloned();
            }
            if profile.secondary.is_none() && profile.all.len() > 1 {
                profile.secondary = Some(profile.all[1].clone());
            }
        }
        Value::Object(map) => {
            profile.primary = map.get("primary").and_then(font_descriptor);
            profile.secondary = map.get("secondary").and_then(font_descriptor);

            if let Some(fonts) = map.get("fonts").and_then(Value::as_array) {
                profile.all = fonts.iter().filter_map(font_descriptor).collect();
            } else {
                profile.all = profile
                    .primary
                    .iter()
                    .chain(profile.secondary.iter())
                    .cloned()
                    .collect();
            }

            // Top-level weights apply to the primary family.
            if let Some(weights) = map.get("weights") {
                let resolved = weight_set(weights);
                if let Some(primary) = profile.primary.as_mut() {
                    primary.weights.extend(resolved.iter().cloned());
                }
                if let Some(first) = profile.all.first_mut() {
                    first.weights.extend(resolved);
                }
            }

            if profile.primary.is_none() {
                profile.primary = profile.all.first().cloned();
            }
            if profile.secondary.is_none() && profile.all.len() > 1 {
                profile.secondary = Some(profile.all[1].clone());
            }
        }
        _ => {}
    }

    profile
}

fn font_descriptor(value: &Value) -> Option<FontFamilyDescriptor> {
    match value {
        Value::String(s) => {
            let family = clean_family(s);
            (!family.is_empty()).then(|| FontFamilyDescriptor::new(family))
        }
        Value::Object(map) => {
            let raw = ["family", "name", "font"]
                .iter()
                .filter_map(|key| map.get(*key))
                .find_map(Value::as_str)?;
            let family = clean_family(raw);
            if family.is_empty() {
                return None;
            }
            let mut descriptor = FontFamilyDescriptor::new(family);
            if let Some(weights) = map.get("weights") {
                descriptor.weights = weight_set(weights);
            }
            Some(descriptor)
        }
        _ => None,
    }
}

fn weight_set(value: &Value) -> BTreeSet<String> {
    let raw: Vec<String> = match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Value::String(s) => s.split(',').map(|part| part.trim().to_string()).collect(),
        Value::Number(n) => vec![n.to_string()],
        _ => Vec::new(),
    };
    raw.iter().filter_map(|w| canonical_weight(w)).collect()
}

/// Builds a [`BrandLogoProfile`] from a guideline logo section. Size values
/// may be numbers (interpreted as square minimum dimensions) or
/// `{width, height}` objects.
pub fn extract_logo_profile(section: &Value) -> BrandLogoProfile {
    let Value::Object(map) = section else {
        return BrandLogoProfile::default();
    };

    let min_size = lookup(map, &["minSize", "min_size", "minDigitalSize", "min_digital_size"])
        .and_then(size_from);
    let max_size = lookup(map, &["maxSize", "max_size"]).and_then(size_from);
    let aspect_ratio = lookup(map, &["aspectRatio", "aspect_ratio"])
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .filter(|v| *v > 0.0);
    let clear_space = lookup(map, &["clearSpace", "clear_space"]).and_then(size_from);
    let rules = lookup(map, &["rules", "usage"])
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    BrandLogoProfile {
        min_size,
        max_size,
        aspect_ratio,
        clear_space,
        rules,
    }
}

fn lookup<'a>(map: &'a serde_json::Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| map.get(*key))
}

fn size_from(value: &Value) -> Option<Size> {
    match value {
        Value::Number(n) => {
            let side = n.as_f64()? as f32;
            (side > 0.0).then(|| Size::square(side))
        }
        Value::Object(map) => {
            let width = map.get("width").and_then(Value::as_f64)? as f32;
            let height = map.get("height").and_then(Value::as_f64)? as f32;
            (width > 0.0 && height > 0.0).then_some(Size { width, height })
        }
        _ => None,
    }
}
