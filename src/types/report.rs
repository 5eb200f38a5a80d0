use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::core::{Category, Severity};

/// One detected deviation between scraped and brand data. Immutable once
/// created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    pub category: Category,
    pub severity: Severity,
    pub expected: String,
    pub actual: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
}

impl ComplianceIssue {
    pub fn new(
        category: Category,
        severity: Severity,
        expected: impl Into<String>,
        actual: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category,
            severity,
            expected: expected.into(),
            actual: actual.into(),
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}

/// Output of a single category analyzer after confidence scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResult {
    /// Compliance score in [0, 1].
    pub score: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ComplianceIssue>,
    /// Confidence in [0, 1], independent of the score.
    pub confidence: f32,
}

/// Final output of the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Weighted average over the included categories, clamped to [0, 1].
    pub overall_score: f32,
    pub category_scores: BTreeMap<Category, f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ComplianceIssue>,
    pub confidence: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_categories: Vec<Category>,
}

impl ComplianceReport {
    pub fn issue_count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}
