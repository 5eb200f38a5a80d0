use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ErrorPayload;
use crate::types::{
    BrandColorProfile, BrandLogoProfile, BrandTypographyProfile, Category, ComplianceIssue,
    ComplianceReport, NormalizedColor,
};

/// Schema version for output payloads.
pub const BCA_OUTPUT_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case")]
pub enum BcaOutput {
    Audit(AuditOutput),
    Inspect(InspectOutput),
    Error(ErrorOutput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub overall_score: f32,
    pub threshold: f32,
    pub passed: bool,
    pub confidence: f32,
    pub category_scores: BTreeMap<Category, f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped_categories: Vec<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<ComplianceIssue>,
}

impl AuditOutput {
    /// Builds the output payload from an audit report. Scores are rounded to
    /// four decimals here and nowhere earlier; pass/fail uses the rounded
    /// overall score so the verdict always agrees with the printed value.
    pub fn from_report(
        report: ComplianceReport,
        brand: Option<String>,
        url: Option<String>,
        threshold: f32,
    ) -> Self {
        let overall_score = round4(report.overall_score);
        Self {
            version: BCA_OUTPUT_VERSION.to_string(),
            brand,
            url,
            overall_score,
            threshold,
            passed: overall_score >= threshold,
            confidence: round4(report.confidence),
            category_scores: report
                .category_scores
                .into_iter()
                .map(|(category, score)| (category, round4(score)))
                .collect(),
            skipped_categories: report.skipped_categories,
            issues: report.issues,
        }
    }
}

/// Normalized brand profile echo for the `inspect` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub colors: InspectColors,
    pub typography: InspectTypography,
    pub logo: BrandLogoProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    pub secondary: Vec<String>,
    pub accent: Vec<String>,
    pub neutral: Vec<String>,
    pub palette: Vec<String>,
    pub forbidden: Vec<String>,
}

impl From<&BrandColorProfile> for InspectColors {
    fn from(profile: &BrandColorProfile) -> Self {
        Self {
            primary: profile.primary.as_ref().map(NormalizedColor::hex),
            secondary: hex_list(&profile.secondary),
            accent: hex_list(&profile.accent),
            neutral: hex_list(&profile.neutral),
            palette: hex_list(&profile.palette),
            forbidden: hex_list(&profile.forbidden),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectTypography {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    pub families: Vec<String>,
    pub weights: Vec<String>,
}

impl From<&BrandTypographyProfile> for InspectTypography {
    fn from(profile: &BrandTypographyProfile) -> Self {
        Self {
            primary: profile.primary.as_ref().map(|d| d.family.clone()),
            secondary: profile.secondary.as_ref().map(|d| d.family.clone()),
            families: profile.all.iter().map(|d| d.family.clone()).collect(),
            weights: profile.weights().into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub error: ErrorPayload,
}

fn hex_list(colors: &[NormalizedColor]) -> Vec<String> {
    colors.iter().map(NormalizedColor::hex).collect()
}

fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}
