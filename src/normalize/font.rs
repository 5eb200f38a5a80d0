//! Font family cleaning and fuzzy similarity.

/// Style words stripped from the tail of a family name.
const STYLE_SUFFIXES: [&str; 7] = [
    "bold", "regular", "light", "medium", "black", "italic", "normal",
];

/// Families that read as interchangeable for compliance purposes.
const FAMILY_GROUPS: [&[&str]; 4] = [
    &["helvetica", "helvetica neue", "arial", "sans-serif"],
    &["inter", "system-ui", "-apple-system", "segoe ui"],
    &["times", "times new roman", "georgia", "serif"],
    &["courier", "courier new", "menlo", "monaco", "monospace"],
];

/// Generic stack fallbacks rather than real typeface choices.
const GENERIC_FALLBACKS: [&str; 6] = [
    "sans-serif",
    "serif",
    "monospace",
    "system-ui",
    "-apple-system",
    "cursive",
];

/// Cleans a raw font-family string: strips quotes and trailing style words,
/// lowercases, trims.
pub fn clean_family(raw: &str) -> String {
    let unquoted: String = raw
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .collect();
    let lower = unquoted.trim().to_ascii_lowercase();

    let mut words: Vec<&str> = lower.split_whitespace().collect();
    while let Some(last) = words.last() {
        if STYLE_SUFFIXES.contains(last) && words.len() > 1 {
            words.pop();
        } else {
            break;
        }
    }

    words.join(" ")
}

/// Fuzzy similarity between two cleaned family names.
///
/// 1.0 identical, 0.8 same equivalence group, 0.6 one contains the other,
/// 0.5 both generic fallbacks, 0.2 baseline.
pub fn font_similarity(a: &str, b: &str) -> f32 {
    let a = clean_family(a);
    let b = clean_family(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if same_family_group(&a, &b) {
        return 0.8;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.6;
    }
    if is_generic_fallback(&a) && is_generic_fallback(&b) {
        return 0.5;
    }
    0.2
}

fn same_family_group(a: &str, b: &str) -> bool {
    FAMILY_GROUPS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

fn is_generic_fallback(family: &str) -> bool {
    GENERIC_FALLBACKS.contains(&family)
}

/// Resolves a weight name or CSS number to its canonical numeric string
/// (`"bold"` and `"700"` both map to `"700"`).
pub fn canonical_weight(raw: &str) -> Option<String> {
    let lower = raw.trim().to_ascii_lowercase();
    if let Ok(num) = lower.parse::<u16>() {
        if (100..=900).contains(&num) {
            return Some(num.to_string());
        }
        return None;
    }
    let value = match lower.as_str() {
        "thin" => 100,
        "extralight" | "ultralight" => 200,
        "light" => 300,
        "normal" | "regular" => 400,
        "medium" => 500,
        "semibold" | "demibold" => 600,
        "bold" => 700,
        "extrabold" | "ultrabold" => 800,
        "black" | "heavy" => 900,
        _ => return None,
    };
    Some(value.to_string())
}
