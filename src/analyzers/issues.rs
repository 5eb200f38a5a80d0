//! Deterministic issue merging across categories.

use crate::types::ComplianceIssue;

/// Sorts issues by severity rank, then category name, then insertion order.
/// The sort is stable, so two runs over identical input produce identical
/// reports even when the category analyzers ran concurrently.
pub fn merge_issues(mut issues: Vec<ComplianceIssue>) -> Vec<ComplianceIssue> {
    issues.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });
    issues
}
