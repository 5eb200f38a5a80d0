//! Weighted aggregation of category scores into the overall score.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Category;

/// Relative importance of each compliance category. Skipped categories drop
/// out of the denominator rather than counting as zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub colors: f32,
    pub typography: f32,
    pub logo: f32,
    pub layout: f32,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            colors: 0.30,
            typography: 0.30,
            logo: 0.25,
            layout: 0.15,
        }
    }
}

impl CategoryWeights {
    pub fn sum(&self) -> f32 {
        self.colors + self.typography + self.logo + self.layout
    }

    pub fn weight(&self, category: Category) -> f32 {
        match category {
            Category::Colors => self.colors,
            Category::Typography => self.typography,
            Category::Logo => self.logo,
            Category::Layout => self.layout,
        }
    }
}

/// Weighted average over the categories that produced a score, renormalized
/// to the included weights and clamped to [0, 1]. Rounding for display
/// happens at the output boundary, never here.
pub fn combine_scores(scores: &BTreeMap<Category, f32>, weights: &CategoryWeights) -> f32 {
    let mut weighted_sum = 0.0f32;
    let mut total_weight = 0.0f32;

    for (category, score) in scores {
        let weight = weights.weight(*category);
        weighted_sum += weight * score;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        (weighted_sum / total_weight).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
