//! The validation/normalization boundary between raw snapshots and analyzers.
//!
//! Guideline JSON arrives in three shapes (array of records, flat object,
//! nested semantic object); one adapter per category canonicalizes whatever it
//! finds. Scraped colors are normalized and classified into usage contexts
//! here. Analyzers never inspect raw untyped shapes.

mod guideline;
mod scraped;

pub use guideline::{extract_color_profile, extract_logo_profile, extract_typography_profile};
pub use scraped::{classify_context, extract_scraped_colors};
