//! Raw input snapshots, exactly as produced by the external collaborators.
//!
//! The guideline snapshot arrives in inconsistent shapes (flat keys, nested
//! semantic groups, or arrays of records), so its per-category sections are
//! kept as raw JSON values and canonicalized by the adapters in
//! `crate::profile`. The scraped snapshot has a fixed schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Brand guideline data from PDF/LLM extraction or manual entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandGuidelineProfile {
    pub name: Option<String>,
    pub colors: Value,
    pub typography: Value,
    pub logo: Value,
}

impl BrandGuidelineProfile {
    pub fn is_empty(&self) -> bool {
        section_is_empty(&self.colors)
            && section_is_empty(&self.typography)
            && section_is_empty(&self.logo)
    }
}

fn section_is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Style attributes captured from a rendered page by the scraping collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrapedDesignData {
    pub url: Option<String>,
    /// Color strings in any supported format (`#RRGGBB`, `#RGB`, `rgb()`, ...).
    pub colors: Vec<String>,
    pub typography: ScrapedTypography,
    pub logo: Option<ScrapedLogo>,
    /// Per-component spacing samples.
    pub components: Vec<ComponentSample>,
    /// Heading tags observed on the page (`"h1"`, `"h2"`, ...).
    pub headings: Vec<String>,
}

impl ScrapedDesignData {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.typography.families.is_empty()
            && self.typography.weights.is_empty()
            && self.logo.is_none()
            && self.components.is_empty()
            && self.headings.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrapedTypography {
    /// Font family names, most prominent first.
    pub families: Vec<String>,
    /// Font weights as names or CSS numbers (`"bold"`, `"700"`).
    pub weights: Vec<String>,
}

/// Logo detection result. Dimensions are CSS pixels when known.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrapedLogo {
    pub found: bool,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl ScrapedLogo {
    pub fn aspect_ratio(&self) -> Option<f32> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if h > 0.0 => Some(w / h),
            _ => None,
        }
    }
}

/// One spacing observation for a component type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentSample {
    pub component: String,
    pub margin: Option<f32>,
    pub padding: Option<f32>,
}
