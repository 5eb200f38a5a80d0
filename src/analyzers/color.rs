//! Color compliance: brand palette usage, context-aware severity, and
//! unauthorized color detection.

use crate::error::Result;
use crate::normalize::{
    color_similarity, is_accepted_neutral, AUTHORIZED_MATCH_THRESHOLD, STRICT_MATCH_THRESHOLD,
};
use crate::profile::classify_context;
use crate::types::{Category, ComplianceIssue, Context, NormalizedColor, Severity};

use super::{AnalysisInput, CategoryAnalysis, CategoryAnalyzer, DataCoverage};

#[derive(Debug, Clone, Copy)]
pub struct ColorComplianceAnalyzer {
    pub strict_threshold: f32,
    pub authorized_threshold: f32,
}

impl Default for ColorComplianceAnalyzer {
    fn default() -> Self {
        Self {
            strict_threshold: STRICT_MATCH_THRESHOLD,
            authorized_threshold: AUTHORIZED_MATCH_THRESHOLD,
        }
    }
}

impl ColorComplianceAnalyzer {
    fn matches_any(&self, color: &NormalizedColor, set: &[NormalizedColor], threshold: f32) -> bool {
        set.iter()
            .any(|candidate| color_similarity(color, candidate) > threshold)
    }

    fn primary_check(
        &self,
        primary: &NormalizedColor,
        input: &AnalysisInput,
        issues: &mut Vec<ComplianceIssue>,
    ) -> f32 {
        let scraped = &input.scraped_colors;
        let buttons = scraped.context_colors(Context::Button);
        let texts = scraped.context_colors(Context::Text);

        let in_buttons = self.matches_any(primary, buttons, self.strict_threshold);
        let in_palette = self.matches_any(primary, &scraped.palette, self.strict_threshold);

        if !in_buttons {
            let actual = if buttons.is_empty() {
                "no button colors detected".to_string()
            } else {
                joined_hex(buttons)
            };
            issues.push(
                ComplianceIssue::new(
                    Category::Colors,
                    Severity::High,
                    primary.hex(),
                    actual,
                    "Primary brand color is not used on buttons",
                )
                .with_context("context", Context::Button.as_str()),
            );
        }

        if self.matches_any(primary, texts, self.strict_threshold) {
            issues.push(
                ComplianceIssue::new(
                    Category::Colors,
                    Severity::Medium,
                    primary.hex(),
                    primary.hex(),
                    "Primary brand color used for text may reduce readability",
                )
                .with_context("context", Context::Text.as_str()),
            );
        }

        if in_buttons {
            1.0
        } else if in_palette {
            0.6
        } else {
            0.0
        }
    }

    fn secondary_check(&self, input: &AnalysisInput) -> Option<f32> {
        let secondary = &input.brand_colors.secondary;
        if secondary.is_empty() {
            return None;
        }
        let found = secondary
            .iter()
            .filter(|color| {
                self.matches_any(color, &input.scraped_colors.palette, self.authorized_threshold)
            })
            .count();
        Some(found as f32 / secondary.len() as f32)
    }

    fn palette_check(
        &self,
        input: &AnalysisInput,
        issues: &mut Vec<ComplianceIssue>,
    ) -> Option<f32> {
        let scraped = &input.scraped_colors.palette;
        if scraped.is_empty() {
            return None;
        }
        let brand = &input.brand_colors;
        let mut authorized = 0usize;

        // One issue per distinct offending color, not one per element.
        for color in scraped {
            if self.matches_any(color, &brand.forbidden, self.strict_threshold) {
                issues.push(
                    ComplianceIssue::new(
                        Category::Colors,
                        Severity::High,
                        "not used anywhere".to_string(),
                        color.hex(),
                        format!("Forbidden color {} is in use", color.hex()),
                    )
                    .with_context("context", classify_context(color).as_str()),
                );
                continue;
            }

            if is_accepted_neutral(color)
                || self.matches_any(color, &brand.palette, self.authorized_threshold)
            {
                authorized += 1;
                continue;
            }

            let context = classify_context(color);
            let severity = match context {
                Context::Button => Severity::High,
                Context::Text => Severity::Medium,
                _ => Severity::Low,
            };
            issues.push(
                ComplianceIssue::new(
                    Category::Colors,
                    severity,
                    "a brand palette color",
                    color.hex(),
                    format!("Color {} does not match the brand palette", color.hex()),
                )
                .with_context("context", context.as_str()),
            );
        }

        Some(authorized as f32 / scraped.len() as f32)
    }
}

impl CategoryAnalyzer for ColorComplianceAnalyzer {
    fn category(&self) -> Category {
        Category::Colors
    }

    fn analyze(&self, input: &AnalysisInput) -> Result<Option<CategoryAnalysis>> {
        let brand = &input.brand_colors;
        if brand.is_empty() {
            return Ok(None);
        }

        let mut issues = Vec::new();
        let mut checks: Vec<f32> = Vec::new();

        if let Some(primary) = brand.primary {
            checks.push(self.primary_check(&primary, input, &mut issues));
        }
        if let Some(score) = self.secondary_check(input) {
            checks.push(score);
        }
        if let Some(score) = self.palette_check(input, &mut issues) {
            checks.push(score);
        }

        // A brand palette with nothing scraped to compare against scores
        // neutral; the confidence estimate carries the uncertainty.
        let score = if checks.is_empty() {
            0.5
        } else {
            (checks.iter().sum::<f32>() / checks.len() as f32).clamp(0.0, 1.0)
        };

        let coverage = DataCoverage {
            brand_points: brand.palette.len() + brand.forbidden.len(),
            scraped_points: input.scraped_colors.palette.len(),
            valid_points: input.scraped_colors.parsed_count,
            raw_points: input.scraped_colors.raw_count,
        };

        Ok(Some(CategoryAnalysis {
            score,
            issues,
            coverage,
        }))
    }
}

fn joined_hex(colors: &[NormalizedColor]) -> String {
    colors
        .iter()
        .map(NormalizedColor::hex)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fallback strategy: plain palette-overlap scoring with the strict distance
/// threshold, no context classification and no issue generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicColorAnalyzer;

impl CategoryAnalyzer for BasicColorAnalyzer {
    fn category(&self) -> Category {
        Category::Colors
    }

    fn analyze(&self, input: &AnalysisInput) -> Result<Option<CategoryAnalysis>> {
        let brand = &input.brand_colors;
        if brand.is_empty() {
            return Ok(None);
        }

        let scraped = &input.scraped_colors.palette;
        let score = if scraped.is_empty() {
            0.5
        } else {
            let matched = scraped
                .iter()
                .filter(|color| {
                    is_accepted_neutral(color)
                        || brand.palette.iter().any(|brand_color| {
                            color_similarity(color, brand_color) > STRICT_MATCH_THRESHOLD
                        })
                })
                .count();
            matched as f32 / scraped.len() as f32
        };

        let coverage = DataCoverage {
            brand_points: brand.palette.len(),
            scraped_points: scraped.len(),
            valid_points: input.scraped_colors.parsed_count,
            raw_points: input.scraped_colors.raw_count,
        };

        Ok(Some(CategoryAnalysis {
            score,
            issues: Vec::new(),
            coverage,
        }))
    }
}
