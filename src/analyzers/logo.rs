//! Logo compliance: presence, size bounds, and aspect-ratio distortion.

use crate::error::Result;
use crate::types::{Category, ComplianceIssue, ScrapedLogo, Severity};

use super::{AnalysisInput, CategoryAnalysis, CategoryAnalyzer, DataCoverage};

const ASPECT_RATIO_TOLERANCE: f32 = 0.10;

#[derive(Debug, Clone, Copy)]
pub struct LogoComplianceAnalyzer {
    /// Partial-credit score when guideline constraints exist but no logo was
    /// detected. Defaults to 0.0; deployments whose scraper is known to be
    /// logo-blind can raise it (typically 0.3-0.4) via the config file.
    pub missing_score: f32,
}

impl Default for LogoComplianceAnalyzer {
    fn default() -> Self {
        Self { missing_score: 0.0 }
    }
}

impl LogoComplianceAnalyzer {
    fn measured_checks(
        &self,
        input: &AnalysisInput,
        logo: &ScrapedLogo,
        issues: &mut Vec<ComplianceIssue>,
    ) -> (usize, usize) {
        let brand = &input.brand_logo;
        let mut performed = 0usize;
        let mut passed = 0usize;

        if let (Some(min), Some(w), Some(h)) = (brand.min_size, logo.width, logo.height) {
            performed += 1;
            if w.min(h) < min.min_dimension() {
                issues.push(ComplianceIssue::new(
                    Category::Logo,
                    Severity::Medium,
                    format!("at least {:.0}px", min.min_dimension()),
                    format!("{:.0}px", w.min(h)),
                    "Logo is rendered below the minimum size",
                ));
            } else {
                passed += 1;
            }
        }

        if let (Some(max), Some(w), Some(h)) = (brand.max_size, logo.width, logo.height) {
            performed += 1;
            if w.max(h) > max.max_dimension() {
                issues.push(ComplianceIssue::new(
                    Category::Logo,
                    Severity::Low,
                    format!("at most {:.0}px", max.max_dimension()),
                    format!("{:.0}px", w.max(h)),
                    "Logo is rendered above the maximum size",
                ));
            } else {
                passed += 1;
            }
        }

        if let (Some(expected), Some(actual)) = (brand.aspect_ratio, logo.aspect_ratio()) {
            performed += 1;
            let deviation = (actual - expected).abs() / expected;
            if deviation > ASPECT_RATIO_TOLERANCE {
                issues.push(ComplianceIssue::new(
                    Category::Logo,
                    Severity::Medium,
                    format!("{:.2}", expected),
                    format!("{:.2}", actual),
                    "Logo appears distorted (aspect ratio outside tolerance)",
                ));
            } else {
                passed += 1;
            }
        }

        // Clear space is a presence check only: the scraped data carries no
        // geometry around the logo, so a detected logo counts as passing.
        if brand.clear_space.is_some() {
            performed += 1;
            passed += 1;
        }

        (performed, passed)
    }
}

impl CategoryAnalyzer for LogoComplianceAnalyzer {
    fn category(&self) -> Category {
        Category::Logo
    }

    fn analyze(&self, input: &AnalysisInput) -> Result<Option<CategoryAnalysis>> {
        let brand = &input.brand_logo;
        if brand.is_empty() {
            return Ok(None);
        }

        let logo = input.scraped.logo.clone().unwrap_or_default();
        let mut issues = Vec::new();

        if !logo.found {
            issues.push(ComplianceIssue::new(
                Category::Logo,
                Severity::High,
                "brand logo present on the page",
                "no logo detected",
                "Logo not found on the page",
            ));
            let coverage = DataCoverage {
                brand_points: brand.measurable_constraints().max(1),
                scraped_points: 0,
                valid_points: 0,
                raw_points: 1,
            };
            return Ok(Some(CategoryAnalysis {
                score: self.missing_score.clamp(0.0, 1.0),
                issues,
                coverage,
            }));
        }

        let (performed, passed) = self.measured_checks(input, &logo, &mut issues);
        let score = if performed > 0 {
            passed as f32 / performed as f32
        } else if brand.measurable_constraints() == 0 {
            // Rules-only profile: nothing to measure, nothing violated.
            1.0
        } else {
            // Measurable constraints exist but the detected logo carries no
            // dimensions, so none could be checked. Neutral score, with the
            // gap reflected in the coverage-based confidence.
            0.5
        };

        let dims_known = usize::from(logo.width.is_some()) + usize::from(logo.height.is_some());
        let coverage = DataCoverage {
            brand_points: brand.measurable_constraints().max(1),
            scraped_points: 1 + dims_known,
            valid_points: 1 + dims_known,
            raw_points: 1 + dims_known,
        };

        Ok(Some(CategoryAnalysis {
            score,
            issues,
            coverage,
        }))
    }
}
