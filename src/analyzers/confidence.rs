//! Confidence estimation from data coverage and validity, independent of the
//! compliance score itself.

use std::collections::BTreeMap;

use crate::types::Category;

use super::scoring::CategoryWeights;
use super::DataCoverage;

const COVERAGE_WEIGHT: f32 = 0.6;
const QUALITY_WEIGHT: f32 = 0.4;

/// Confidence assigned to a category that fell through to the neutral
/// default after its strategy chain was exhausted.
pub const FALLBACK_CONFIDENCE: f32 = 0.2;

/// Per-category confidence: `0.6 * coverage + 0.4 * quality`.
///
/// Coverage is how much scraped data exists relative to what the guideline
/// defines (neutral 0.5 when the guideline defines nothing); quality is the
/// fraction of scraped data points that parsed validly (neutral 0.5 when
/// there was nothing to parse).
pub fn category_confidence(coverage: &DataCoverage) -> f32 {
    let cov = if coverage.brand_points == 0 {
        0.5
    } else {
        (coverage.scraped_points as f32 / coverage.brand_points as f32).min(1.0)
    };
    let quality = if coverage.raw_points == 0 {
        0.5
    } else {
        coverage.valid_points as f32 / coverage.raw_points as f32
    };
    (COVERAGE_WEIGHT * cov + QUALITY_WEIGHT * quality).clamp(0.0, 1.0)
}

/// Weighted mean of the per-category confidences using the category weights;
/// 0.5 when no category produced a confidence value.
pub fn overall_confidence(
    confidences: &BTreeMap<Category, f32>,
    weights: &CategoryWeights,
) -> f32 {
    let mut weighted_sum = 0.0f32;
    let mut total_weight = 0.0f32;

    for (category, confidence) in confidences {
        let weight = weights.weight(*category);
        weighted_sum += weight * confidence;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        (weighted_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.5
    }
}
