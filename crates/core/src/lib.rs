//! Core types for the Uniscope catalog engine
//!
//! This crate defines the foundational types used throughout the system:
//! - InstitutionRecord: One row of the catalog snapshot
//! - ControlType, SelectivityBand, BudgetBracket, SizeBucket, TestPolicyBucket:
//!   the classification taxonomy derived from record fields
//! - FilterSelection: per-query filter state (typed and raw/lenient forms)
//! - UserPreferenceProfile: per-session preference input for scoring
//! - Error: error type hierarchy
//! - Text normalization helpers (case folding, accent stripping, tokenizing)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bands;
pub mod error;
pub mod profile;
pub mod record;
pub mod selection;
pub mod text;

// Re-export commonly used types
pub use bands::{
    BudgetBracket, ControlPreference, ControlType, SelectivityBand, SizeBucket, TestPolicyBucket,
    MEDIUM_ENROLLMENT_MAX, SMALL_ENROLLMENT_MAX,
};
pub use error::{Error, Result};
pub use profile::UserPreferenceProfile;
pub use record::InstitutionRecord;
pub use selection::{FilterSelection, RawSelection, MIN_SEARCH_LEN};
pub use text::{acronym, compact, normalize, tokenize};
