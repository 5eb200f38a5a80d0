//! Canonical per-category profiles, independent of the source JSON shape.
//!
//! Analyzers only ever see these types; the shape-sniffing lives in
//! `crate::profile`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::core::{Context, NormalizedColor};

/// Canonicalized guideline colors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandColorProfile {
    pub primary: Option<NormalizedColor>,
    pub secondary: Vec<NormalizedColor>,
    pub accent: Vec<NormalizedColor>,
    pub neutral: Vec<NormalizedColor>,
    /// Deduplicated union of all authorized colors, insertion order preserved.
    pub palette: Vec<NormalizedColor>,
    pub forbidden: Vec<NormalizedColor>,
}

impl BrandColorProfile {
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty() && self.forbidden.is_empty()
    }
}

/// Scraped colors, deduplicated and classified by inferred usage context.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrapedColorProfile {
    pub palette: Vec<NormalizedColor>,
    pub contextual: BTreeMap<Context, Vec<NormalizedColor>>,
    /// Count of raw color strings before normalization.
    pub raw_count: usize,
    /// Count of raw strings that normalized successfully.
    pub parsed_count: usize,
}

impl ScrapedColorProfile {
    pub fn context_colors(&self, context: Context) -> &[NormalizedColor] {
        self.contextual
            .get(&context)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One font family with its allowed weights (canonical CSS numbers).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontFamilyDescriptor {
    /// Lowercased family name with style suffixes stripped.
    pub family: String,
    pub weights: BTreeSet<String>,
}

impl FontFamilyDescriptor {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weights: BTreeSet::new(),
        }
    }
}

/// Canonicalized guideline typography.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandTypographyProfile {
    pub primary: Option<FontFamilyDescriptor>,
    pub secondary: Option<FontFamilyDescriptor>,
    pub all: Vec<FontFamilyDescriptor>,
}

impl BrandTypographyProfile {
    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none() && self.all.is_empty()
    }

    /// Union of the weights over every descriptor.
    pub fn weights(&self) -> BTreeSet<String> {
        self.all
            .iter()
            .flat_map(|descriptor| descriptor.weights.iter().cloned())
            .collect()
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn square(side: f32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn max_dimension(&self) -> f32 {
        self.width.max(self.height)
    }
}

/// Canonicalized guideline logo constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandLogoProfile {
    pub min_size: Option<Size>,
    pub max_size: Option<Size>,
    pub aspect_ratio: Option<f32>,
    pub clear_space: Option<Size>,
    pub rules: Vec<String>,
}

impl BrandLogoProfile {
    pub fn is_empty(&self) -> bool {
        self.min_size.is_none()
            && self.max_size.is_none()
            && self.aspect_ratio.is_none()
            && self.clear_space.is_none()
            && self.rules.is_empty()
    }

    /// Constraints the analyzer can actually measure against.
    pub fn measurable_constraints(&self) -> usize {
        usize::from(self.min_size.is_some())
            + usize::from(self.max_size.is_some())
            + usize::from(self.aspect_ratio.is_some())
    }
}
