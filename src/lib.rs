//! Brand Compliance Auditor (BCA) Library
//!
//! A library for scoring how faithfully a rendered website implements a
//! brand's visual guidelines. Two snapshots go in (extracted brand guidelines
//! and scraped page styles), a weighted compliance report comes out.
//!
//! # Module Overview
//!
//! - [`types`] - Snapshots, canonical profiles, and the report types
//! - [`normalize`] - Color and font normalization primitives
//! - [`profile`] - Shape-tolerant guideline extraction and scraped-color
//!   classification
//! - [`analyzers`] - Per-category compliance strategies (colors, typography,
//!   logo, layout)
//! - [`engine`] - Orchestration: strategy chains, parallel evaluation, report
//!   assembly
//! - [`config`] - Configuration file support
//! - [`ingest`] - Snapshot file loading (JSON/YAML)
//! - [`output`] - JSON output schemas
//!
//! # Example
//!
//! ```no_run
//! use bca_lib::{BrandComplianceEngine, Config};
//! use bca_lib::ingest::{load_guidelines, load_scraped};
//!
//! # async fn example() -> bca_lib::Result<()> {
//! let guidelines = load_guidelines("brand.json".as_ref())?;
//! let scraped = load_scraped("scraped.json".as_ref())?;
//!
//! let engine = BrandComplianceEngine::new(Config::default());
//! let report = engine.audit(&guidelines, &scraped).await?;
//! println!("overall score: {:.4}", report.overall_score);
//! # Ok(())
//! # }
//! ```

pub mod analyzers;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod output;
pub mod profile;
pub mod types;

pub use analyzers::{
    category_confidence, combine_scores, merge_issues, overall_confidence, AnalysisInput,
    BasicColorAnalyzer, BasicTypographyAnalyzer, CategoryAnalysis, CategoryAnalyzer,
    CategoryWeights, ColorComplianceAnalyzer, DataCoverage, LayoutComplianceAnalyzer,
    LogoComplianceAnalyzer, TypographyComplianceAnalyzer,
};
pub use config::{Config, MatchThresholds};
pub use engine::BrandComplianceEngine;
pub use error::{BcaError, ErrorCategory, ErrorPayload, Result};
pub use ingest::{load_guidelines, load_scraped};
pub use output::{
    AuditOutput, BcaOutput, ErrorOutput, InspectColors, InspectOutput, InspectTypography,
    BCA_OUTPUT_VERSION,
};
pub use types::{
    BrandColorProfile, BrandGuidelineProfile, BrandLogoProfile, BrandTypographyProfile, Category,
    ComplianceIssue, ComplianceReport, Context, NormalizedColor, ScrapedDesignData, Severity,
};
