//! The orchestrator: runs one strategy chain per category, joins the
//! results, and assembles the final report.
//!
//! Each category is evaluated on its own blocking task; analyzers share an
//! immutable input snapshot and return their results, so no locking is
//! needed. A strategy error falls through to the next strategy in the chain;
//! an exhausted chain (or a panicked task) lands on the neutral default score
//! with low confidence. The only error surfaced to the caller is the
//! fail-fast case of two empty snapshots.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::analyzers::{
    category_confidence, combine_scores, merge_issues, overall_confidence, AnalysisInput,
    BasicColorAnalyzer, BasicTypographyAnalyzer, CategoryAnalysis, CategoryAnalyzer,
    ColorComplianceAnalyzer, LayoutComplianceAnalyzer, LogoComplianceAnalyzer,
    TypographyComplianceAnalyzer, FALLBACK_CONFIDENCE,
};
use crate::config::Config;
use crate::error::{BcaError, Result};
use crate::types::{BrandGuidelineProfile, Category, ComplianceReport, ScrapedDesignData};

/// Neutral score assigned when a category's strategy chain is exhausted.
const NEUTRAL_SCORE: f32 = 0.5;

#[derive(Debug)]
enum CategoryOutcome {
    /// No brand data for this category; excluded from the weighted average.
    Skipped,
    Scored(CategoryAnalysis),
    /// Every strategy failed; neutral default, low confidence.
    Fallback,
}

pub struct BrandComplianceEngine {
    config: Config,
}

impl BrandComplianceEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the audit with the four category chains evaluated in parallel.
    pub async fn audit(
        &self,
        guideline: &BrandGuidelineProfile,
        scraped: &ScrapedDesignData,
    ) -> Result<ComplianceReport> {
        validate_snapshots(guideline, scraped)?;

        let input = Arc::new(AnalysisInput::from_snapshots(guideline, scraped));
        let mut handles = Vec::with_capacity(Category::all().len());
        for category in Category::all() {
            let input = Arc::clone(&input);
            let config = self.config.clone();
            handles.push((
                category,
                tokio::task::spawn_blocking(move || {
                    run_chain(&strategy_chain(category, &config), &input)
                }),
            ));
        }

        // A panicked analyzer task degrades to the neutral default instead
        // of reaching the caller.
        let outcomes = futures::future::join_all(handles.into_iter().map(
            |(category, handle)| async move {
                (category, handle.await.unwrap_or(CategoryOutcome::Fallback))
            },
        ))
        .await;

        Ok(self.assemble(outcomes))
    }

    /// Sequential variant for synchronous callers; identical semantics.
    pub fn audit_blocking(
        &self,
        guideline: &BrandGuidelineProfile,
        scraped: &ScrapedDesignData,
    ) -> Result<ComplianceReport> {
        validate_snapshots(guideline, scraped)?;

        let input = AnalysisInput::from_snapshots(guideline, scraped);
        let outcomes = Category::all()
            .into_iter()
            .map(|category| {
                (
                    category,
                    run_chain(&strategy_chain(category, &self.config), &input),
                )
            })
            .collect();

        Ok(self.assemble(outcomes))
    }

    fn assemble(&self, outcomes: Vec<(Category, CategoryOutcome)>) -> ComplianceReport {
        let mut category_scores = BTreeMap::new();
        let mut confidences = BTreeMap::new();
        let mut skipped_categories = Vec::new();
        let mut issues = Vec::new();

        for (category, outcome) in outcomes {
            match outcome {
                CategoryOutcome::Skipped => skipped_categories.push(category),
                CategoryOutcome::Scored(analysis) => {
                    category_scores.insert(category, analysis.score.clamp(0.0, 1.0));
                    confidences.insert(category, category_confidence(&analysis.coverage));
                    issues.extend(analysis.issues);
                }
                CategoryOutcome::Fallback => {
                    category_scores.insert(category, NEUTRAL_SCORE);
                    confidences.insert(category, FALLBACK_CONFIDENCE);
                }
            }
        }

        let overall_score = combine_scores(&category_scores, &self.config.weights);
        let confidence = overall_confidence(&confidences, &self.config.weights);

        ComplianceReport {
            overall_score,
            category_scores,
            issues: merge_issues(issues),
            confidence,
            skipped_categories,
        }
    }
}

fn validate_snapshots(
    guideline: &BrandGuidelineProfile,
    scraped: &ScrapedDesignData,
) -> Result<()> {
    if guideline.is_empty() && scraped.is_empty() {
        return Err(BcaError::invalid_input(
            "both snapshots are empty; nothing to score",
        ));
    }
    Ok(())
}

/// Ordered strategies per category: the full analyzer first, then at most
/// one simpler fallback. The neutral default is applied by the engine when
/// the chain is exhausted.
fn strategy_chain(category: Category, config: &Config) -> Vec<Box<dyn CategoryAnalyzer>> {
    match category {
        Category::Colors => vec![
            Box::new(ColorComplianceAnalyzer {
                strict_threshold: config.thresholds.strict,
                authorized_threshold: config.thresholds.authorized,
            }),
            Box::new(BasicColorAnalyzer),
        ],
        Category::Typography => vec![
            Box::new(TypographyComplianceAnalyzer),
            Box::new(BasicTypographyAnalyzer),
        ],
        Category::Logo => vec![Box::new(LogoComplianceAnalyzer {
            missing_score: config.logo_missing_score,
        })],
        Category::Layout => vec![Box::new(LayoutComplianceAnalyzer)],
    }
}

fn run_chain(chain: &[Box<dyn CategoryAnalyzer>], input: &AnalysisInput) -> CategoryOutcome {
    for analyzer in chain {
        match analyzer.analyze(input) {
            Ok(Some(analysis)) => return CategoryOutcome::Scored(analysis),
            Ok(None) => return CategoryOutcome::Skipped,
            Err(_) => continue,
        }
    }
    CategoryOutcome::Fallback
}
