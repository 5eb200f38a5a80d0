//! Core data types for the compliance engine.
//!
//! - [`core`] - categories, severities, contexts, and the canonical color type
//! - [`snapshot`] - the two raw input snapshots (guidelines, scraped data)
//! - [`profile`] - canonicalized per-category brand/scraped profiles
//! - [`report`] - issues, per-category results, and the final report

mod core;
mod profile;
mod report;
mod snapshot;

pub use core::{Category, Context, NormalizedColor, Severity};
pub use profile::{
    BrandColorProfile, BrandLogoProfile, BrandTypographyProfile, FontFamilyDescriptor,
    ScrapedColorProfile, Size,
};
pub use report::{CategoryResult, ComplianceIssue, ComplianceReport};
pub use snapshot::{
    BrandGuidelineProfile, ComponentSample, ScrapedDesignData, ScrapedLogo, ScrapedTypography,
};
