//! Layout compliance: spacing consistency and heading hierarchy. Advisory
//! only; this category never reaches zero.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::Result;
use crate::types::{Category, ComplianceIssue, Severity};

use super::{AnalysisInput, CategoryAnalysis, CategoryAnalyzer, DataCoverage};

const BASE_SCORE: f32 = 0.8;
const SCORE_FLOOR: f32 = 0.1;
const MAX_DISTINCT_SPACING: usize = 3;

#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutComplianceAnalyzer;

impl LayoutComplianceAnalyzer {
    fn spacing_issues(input: &AnalysisInput, issues: &mut Vec<ComplianceIssue>) {
        // Distinct spacing values per component type, margins and paddings
        // pooled. Values are keyed at 0.01px resolution.
        let mut by_component: BTreeMap<&str, BTreeSet<i64>> = BTreeMap::new();
        for sample in &input.scraped.components {
            let entry = by_component.entry(sample.component.as_str()).or_default();
            for value in [sample.margin, sample.padding].into_iter().flatten() {
                entry.insert((value * 100.0).round() as i64);
            }
        }

        for (component, values) in by_component {
            if values.len() > MAX_DISTINCT_SPACING {
                issues.push(
                    ComplianceIssue::new(
                        Category::Layout,
                        Severity::Low,
                        format!("at most {} distinct spacing values", MAX_DISTINCT_SPACING),
                        format!("{} distinct values", values.len()),
                        format!("Inconsistent spacing within '{}' components", component),
                    )
                    .with_context("component", component),
                );
            }
        }
    }

    fn heading_issues(input: &AnalysisInput, issues: &mut Vec<ComplianceIssue>) {
        let levels: BTreeSet<u8> = input
            .scraped
            .headings
            .iter()
            .filter_map(|tag| heading_level(tag))
            .collect();

        let present: Vec<u8> = levels.into_iter().collect();
        for pair in present.windows(2) {
            if pair[1] > pair[0] + 1 {
                issues.push(ComplianceIssue::new(
                    Category::Layout,
                    Severity::Low,
                    format!("h{} before h{}", pair[0] + 1, pair[1]),
                    format!("h{} followed by h{}", pair[0], pair[1]),
                    format!(
                        "Heading hierarchy skips from h{} to h{}",
                        pair[0], pair[1]
                    ),
                ));
            }
        }
    }
}

fn heading_level(tag: &str) -> Option<u8> {
    let lower = tag.trim().to_ascii_lowercase();
    let level = lower.strip_prefix('h')?.parse::<u8>().ok()?;
    (1..=6).contains(&level).then_some(level)
}

impl CategoryAnalyzer for LayoutComplianceAnalyzer {
    fn category(&self) -> Category {
        Category::Layout
    }

    fn analyze(&self, input: &AnalysisInput) -> Result<Option<CategoryAnalysis>> {
        if input.scraped.components.is_empty() && input.scraped.headings.is_empty() {
            return Ok(None);
        }

        let mut issues = Vec::new();
        Self::spacing_issues(input, &mut issues);
        Self::heading_issues(input, &mut issues);

        let deduction: f32 = issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Critical | Severity::High => 0.3,
                Severity::Medium => 0.2,
                Severity::Low => 0.1,
            })
            .sum();
        let score = (BASE_SCORE - deduction).max(SCORE_FLOOR);

        let raw_points = input.scraped.components.len() + input.scraped.headings.len();
        let valid_points = input
            .scraped
            .components
            .iter()
            .filter(|sample| sample.margin.is_some() || sample.padding.is_some())
            .count()
            + input
                .scraped
                .headings
                .iter()
                .filter(|tag| heading_level(tag).is_some())
                .count();

        let coverage = DataCoverage {
            // The guideline defines no layout data points; coverage stays
            // neutral and quality carries the signal.
            brand_points: 0,
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
