//! Typography compliance: family similarity, weight coverage, and hierarchy
//! presence.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::normalize::{canonical_weight, clean_family, font_similarity};
use crate::types::{Category, ComplianceIssue, FontFamilyDescriptor, Severity};

use super::{AnalysisInput, CategoryAnalysis, CategoryAnalyzer, DataCoverage};

const PRIMARY_WEIGHT: f32 = 0.4;
const SECONDARY_WEIGHT: f32 = 0.3;
const WEIGHTS_WEIGHT: f32 = 0.2;
const HIERARCHY_WEIGHT: f32 = 0.1;

#[derive(Debug, Clone, Copy, Default)]
pub struct TypographyComplianceAnalyzer;

impl TypographyComplianceAnalyzer {
    /// Similarity of a brand font against a detected family, with the issue
    /// severity scaling with (1 - similarity).
    fn family_check(
        role: &str,
        brand: Option<&FontFamilyDescriptor>,
        detected: Option<&str>,
        issues: &mut Vec<ComplianceIssue>,
    ) -> f32 {
        let Some(brand_font) = brand else {
            // No brand requirement for this role: neutral, not penalized.
            return 0.5;
        };
        let Some(found) = detected else {
            return 0.5;
        };

        let similarity = font_similarity(found, &brand_font.family);
        if similarity < 0.3 {
            issues.push(ComplianceIssue::new(
                Category::Typography,
                Severity::High,
                brand_font.family.clone(),
                clean_family(found),
                format!("{} font does not match the brand guideline", role),
            ));
        } else if similarity < 0.7 {
            issues.push(ComplianceIssue::new(
                Category::Typography,
                Severity::Medium,
                brand_font.family.clone(),
                clean_family(found),
                format!("{} font only loosely matches the brand guideline", role),
            ));
        }
        similarity
    }

    fn weights_check(
        brand_weights: &BTreeSet<String>,
        scraped_weights: &BTreeSet<String>,
        issues: &mut Vec<ComplianceIssue>,
    ) -> f32 {
        if brand_weights.is_empty() {
            return 0.5;
        }
        let missing: Vec<&String> = brand_weights.difference(scraped_weights).collect();
        if !missing.is_empty() {
            issues.push(ComplianceIssue::new(
                Category::Typography,
                Severity::Low,
                brand_weights.iter().cloned().collect::<Vec<_>>().join(", "),
                scraped_weights
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
                format!(
                    "Font weights not observed on the page: {}",
                    missing
                        .iter()
                        .map(|w| w.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ));
        }
        (brand_weights.len() - missing.len()) as f32 / brand_weights.len() as f32
    }

    /// Whether the page shows any typographic hierarchy at all: multiple
    /// families, multiple weights, or more than one heading level.
    fn hierarchy_check(families: &[String], weights: &BTreeSet<String>, headings: &[String]) -> f32 {
        let distinct_families: BTreeSet<&String> = families.iter().collect();
        let heading_levels: BTreeSet<&String> = headings.iter().collect();
        if distinct_families.len() >= 2 || weights.len() >= 2 || heading_levels.len() >= 2 {
            1.0
        } else {
            0.5
        }
    }
}

impl CategoryAnalyzer for TypographyComplianceAnalyzer {
    fn category(&self) -> Category {
        Category::Typography
    }

    fn analyze(&self, input: &AnalysisInput) -> Result<Option<CategoryAnalysis>> {
        let brand = &input.brand_typography;
        if brand.is_empty() {
            return Ok(None);
        }

        let raw_families = &input.scraped.typography.families;
        let families: Vec<String> = raw_families
            .iter()
            .map(|f| clean_family(f))
            .filter(|f| !f.is_empty())
            .collect();

        let scraped_weights: BTreeSet<String> = input
            .scraped
            .typography
            .weights
            .iter()
            .filter_map(|w| canonical_weight(w))
            .collect();

        let mut issues = Vec::new();

        let primary_score = Self::family_check(
            "Primary",
            brand.primary.as_ref(),
            families.first().map(String::as_str),
            &mut issues,
        );
        let secondary_score = Self::family_check(
            "Secondary",
            brand.secondary.as_ref(),
            families.get(1).map(String::as_str),
            &mut issues,
        );
        let weights_score =
            Self::weights_check(&brand.weights(), &scraped_weights, &mut issues);
        let hierarchy_score =
            Self::hierarchy_check(&families, &scraped_weights, &input.scraped.headings);

        let score = (PRIMARY_WEIGHT * primary_score
            + SECONDARY_WEIGHT * secondary_score
            + WEIGHTS_WEIGHT * weights_score
            + HIERARCHY_WEIGHT * hierarchy_score)
            .clamp(0.0, 1.0);

        let raw_points =
            raw_families.len() + input.scraped.typography.weights.len();
        let valid_points = families.len() + scraped_weights.len();
        let coverage = DataCoverage {
            brand_points: brand.all.len().max(1) + brand.weights().len(),
            scraped_points: valid_points,
            valid_points,
            raw_points,
        };

        Ok(Some(CategoryAnalysis {
            score,
            issues,
            coverage,
        }))
    }
}

/// Fallback strategy: primary-family similarity only.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicTypographyAnalyzer;

impl CategoryAnalyzer for BasicTypographyAnalyzer {
    fn category(&self) -> Category {
        Category::Typography
    }

    fn analyze(&self, input: &AnalysisInput) -> Result<Option<CategoryAnalysis>> {
        let brand = &input.brand_typography;
        if brand.is_empty() {
            return Ok(None);
        }

        let detected = input
            .scraped
            .typography
            .families
            .first()
            .map(|f| clean_family(f));

        let score = match (brand.primary.as_ref(), detected.as_deref()) {
            (Some(brand_font), Some(found)) => font_similarity(found, &brand_font.family),
            _ => 0.5,
        };

        let coverage = DataCoverage {
            brand_points: brand.all.len().max(1),
            scraped_points: input.scraped.typography.families.len(),
            valid_points: input.scraped.typography.families.len(),
            raw_points: input.scraped.typography.families.len(),
        };

        Ok(Some(CategoryAnalysis {
            score,
            issues: Vec::new(),
            coverage,
        }))
    }
}
