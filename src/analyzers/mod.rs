//! Category analyzers for comparing scraped design data against brand
//! guidelines.
//!
//! Each analyzer is a stateless strategy behind [`CategoryAnalyzer`]: it
//! consumes the shared [`AnalysisInput`] snapshot and returns its result
//! rather than mutating shared state, which makes parallel evaluation safe by
//! construction. `Ok(None)` means the category has no brand data and should
//! be skipped; `Err` hands control to the next strategy in the engine's
//! fallback chain.

mod color;
mod confidence;
mod issues;
mod layout;
mod logo;
mod scoring;
mod typography;

#[cfg(test)]
mod tests;

pub use color::{BasicColorAnalyzer, ColorComplianceAnalyzer};
pub use confidence::{category_confidence, overall_confidence, FALLBACK_CONFIDENCE};
pub use issues::merge_issues;
pub use layout::LayoutComplianceAnalyzer;
pub use logo::LogoComplianceAnalyzer;
pub use scoring::{combine_scores, CategoryWeights};
pub use typography::{BasicTypographyAnalyzer, TypographyComplianceAnalyzer};

use crate::error::Result;
use crate::profile::extract_scraped_colors;
use crate::profile::{extract_color_profile, extract_logo_profile, extract_typography_profile};
use crate::types::{
    BrandColorProfile, BrandGuidelineProfile, BrandLogoProfile, BrandTypographyProfile, Category,
    ComplianceIssue, ScrapedColorProfile, ScrapedDesignData,
};

/// Normalized inputs shared by every analyzer, built once per audit.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub brand_colors: BrandColorProfile,
    pub brand_typography: BrandTypographyProfile,
    pub brand_logo: BrandLogoProfile,
    pub scraped_colors: ScrapedColorProfile,
    pub scraped: ScrapedDesignData,
}

impl AnalysisInput {
    pub fn from_snapshots(
        guideline: &BrandGuidelineProfile,
        scraped: &ScrapedDesignData,
    ) -> Self {
        Self {
            brand_colors: extract_color_profile(&guideline.colors),
            brand_typography: extract_typography_profile(&guideline.typography),
            brand_logo: extract_logo_profile(&guideline.logo),
            scraped_colors: extract_scraped_colors(&scraped.colors),
            scraped: scraped.clone(),
        }
    }
}

/// Data-point counts backing the confidence estimate for one category.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataCoverage {
    /// Data points the guideline defines for this category.
    pub brand_points: usize,
    /// Scraped data points available for comparison.
    pub scraped_points: usize,
    /// Scraped data points that parsed validly.
    pub valid_points: usize,
    /// Scraped data points before validation.
    pub raw_points: usize,
}

/// Raw analyzer output before confidence scoring.
#[derive(Debug, Clone)]
pub struct CategoryAnalysis {
    pub score: f32,
    pub issues: Vec<ComplianceIssue>,
    pub coverage: DataCoverage,
}

/// One interchangeable analysis strategy for a category.
pub trait CategoryAnalyzer: Send + Sync {
    fn category(&self) -> Category;

    /// `Ok(None)` skips the category (no brand data to compare against);
    /// `Err` falls through to the next strategy in the chain.
    fn analyze(&self, input: &AnalysisInput) -> Result<Option<CategoryAnalysis>>;
}
