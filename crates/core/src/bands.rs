//! Classification taxonomy for institution records
//!
//! This module defines the enumerated bands and brackets derived from raw
//! record fields:
//! - ControlType: institutional control (ownership)
//! - SelectivityBand: admissions band derived from acceptance rate
//! - BudgetBracket: half-open tuition brackets for budget filtering
//! - SizeBucket: enrollment buckets
//! - TestPolicyBucket: substring-matched testing policy buckets
//! - ControlPreference: the coarser control taxonomy used by preference scoring
//!
//! Every `parse_key` constructor is lenient by design: unrecognized keys
//! return `None` and the caller decides whether to drop or report them.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the Small enrollment bucket
pub const SMALL_ENROLLMENT_MAX: u32 = 5_000;

/// Upper bound (exclusive) of the Medium enrollment bucket
pub const MEDIUM_ENROLLMENT_MAX: u32 = 15_000;

// ============================================================================
// ControlType
// ============================================================================

/// Institutional control (ownership) classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlType {
    /// Publicly controlled institution
    Public,
    /// Private not-for-profit institution
    PrivateNonprofit,
    /// Private for-profit institution
    PrivateForProfit,
    /// Any other or unreported control value
    Other,
}

impl ControlType {
    /// Lenient parse from the source's free-text control column
    ///
    /// The upstream data uses strings like "Public", "Private not-for-profit",
    /// and "Private for-profit" with occasional punctuation variants.
    /// Anything unrecognized maps to `Other`.
    pub fn parse(raw: &str) -> Self {
        let lower = raw.to_ascii_lowercase();
        if lower.contains("public") {
            ControlType::Public
        } else if lower.contains("not-for-profit")
            || lower.contains("not for profit")
            || lower.contains("nonprofit")
            || lower.contains("non-profit")
        {
            ControlType::PrivateNonprofit
        } else if lower.contains("for-profit") || lower.contains("for profit") {
            ControlType::PrivateForProfit
        } else if lower.contains("private") {
            ControlType::PrivateNonprofit
        } else {
            ControlType::Other
        }
    }

    /// Whether this is a private control type (either profit status)
    pub fn is_private(&self) -> bool {
        matches!(
            self,
            ControlType::PrivateNonprofit | ControlType::PrivateForProfit
        )
    }
}

// ============================================================================
// SelectivityBand
// ============================================================================

/// Admissions selectivity band derived from acceptance rate
///
/// Boundaries are half-open over the fractional acceptance rate:
/// `<0.10` Selective, `[0.10,0.25)` Reach, `[0.25,0.50)` Target,
/// `[0.50,0.70)` Balanced, `>=0.70` Safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectivityBand {
    /// Acceptance rate below 10%
    Selective,
    /// Acceptance rate in [10%, 25%)
    Reach,
    /// Acceptance rate in [25%, 50%)
    Target,
    /// Acceptance rate in [50%, 70%)
    Balanced,
    /// Acceptance rate at or above 70%
    Safety,
}

impl SelectivityBand {
    /// All bands, in declaration order
    pub const ALL: [SelectivityBand; 5] = [
        SelectivityBand::Selective,
        SelectivityBand::Reach,
        SelectivityBand::Target,
        SelectivityBand::Balanced,
        SelectivityBand::Safety,
    ];

    /// Derive the band from a fractional acceptance rate
    ///
    /// Returns `None` when the rate is unknown. An unknown rate is distinct
    /// from any band: it fails every active selectivity filter and sorts
    /// last in the ranker's tie-break.
    pub fn from_acceptance_rate(rate: Option<f64>) -> Option<Self> {
        let rate = rate?;
        if !rate.is_finite() || rate < 0.0 {
            return None;
        }
        Some(if rate < 0.10 {
            SelectivityBand::Selective
        } else if rate < 0.25 {
            SelectivityBand::Reach
        } else if rate < 0.50 {
            SelectivityBand::Target
        } else if rate < 0.70 {
            SelectivityBand::Balanced
        } else {
            SelectivityBand::Safety
        })
    }

    /// Parse a selection key ("selective", "reach", ...)
    pub fn parse_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "selective" => Some(SelectivityBand::Selective),
            "reach" => Some(SelectivityBand::Reach),
            "target" => Some(SelectivityBand::Target),
            "balanced" => Some(SelectivityBand::Balanced),
            "safety" => Some(SelectivityBand::Safety),
            _ => None,
        }
    }
}

// ============================================================================
// BudgetBracket
// ============================================================================

/// Budget bracket over reference tuition, in USD
///
/// Brackets are half-open: `[0,20000)`, `[20000,40000)`, `[40000,60000)`,
/// `[60000,inf)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetBracket {
    /// Reference tuition below $20,000
    Under20k,
    /// Reference tuition in [$20,000, $40,000)
    From20kTo40k,
    /// Reference tuition in [$40,000, $60,000)
    From40kTo60k,
    /// Reference tuition at or above $60,000
    Over60k,
}

impl BudgetBracket {
    /// All brackets, in ascending order
    pub const ALL: [BudgetBracket; 4] = [
        BudgetBracket::Under20k,
        BudgetBracket::From20kTo40k,
        BudgetBracket::From40kTo60k,
        BudgetBracket::Over60k,
    ];

    /// Whether the given tuition falls inside this bracket
    pub fn contains(&self, tuition: u32) -> bool {
        match self {
            BudgetBracket::Under20k => tuition < 20_000,
            BudgetBracket::From20kTo40k => (20_000..40_000).contains(&tuition),
            BudgetBracket::From40kTo60k => (40_000..60_000).contains(&tuition),
            BudgetBracket::Over60k => tuition >= 60_000,
        }
    }

    /// Parse a selection key ("under20", "20to40", "40to60", "over60")
    ///
    /// Keys follow the upstream filter widget values.
    pub fn parse_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "under20" => Some(BudgetBracket::Under20k),
            "20to40" => Some(BudgetBracket::From20kTo40k),
            "40to60" => Some(BudgetBracket::From40kTo60k),
            "over60" => Some(BudgetBracket::Over60k),
            _ => None,
        }
    }
}

// ============================================================================
// SizeBucket
// ============================================================================

/// Enrollment size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeBucket {
    /// Fewer than 5,000 students
    Small,
    /// 5,000 to 14,999 students
    Medium,
    /// 15,000 or more students
    Large,
}

impl SizeBucket {
    /// Derive the bucket from total enrollment
    ///
    /// Returns `None` when enrollment is unknown; unknown never equals any
    /// preferred bucket.
    pub fn from_enrollment(total_enrollment: Option<u32>) -> Option<Self> {
        let total = total_enrollment?;
        Some(if total < SMALL_ENROLLMENT_MAX {
            SizeBucket::Small
        } else if total < MEDIUM_ENROLLMENT_MAX {
            SizeBucket::Medium
        } else {
            SizeBucket::Large
        })
    }

    /// Parse a preference key ("small", "medium", "large")
    pub fn parse_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "small" => Some(SizeBucket::Small),
            "medium" => Some(SizeBucket::Medium),
            "large" => Some(SizeBucket::Large),
            _ => None,
        }
    }
}

// ============================================================================
// TestPolicyBucket
// ============================================================================

/// Testing-policy bucket matched by substring against the raw policy string
///
/// The upstream policy column is free text ("Test optional", "Test flexible",
/// "Required", ...). A record can match multiple buckets or none; a missing
/// policy matches none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestPolicyBucket {
    /// Policy mentions "optional" or "flexible"
    Optional,
    /// Policy mentions "required"
    Required,
}

impl TestPolicyBucket {
    /// Whether the raw policy string falls in this bucket
    pub fn matches(&self, raw_policy: &str) -> bool {
        let lower = raw_policy.to_ascii_lowercase();
        match self {
            TestPolicyBucket::Optional => {
                lower.contains("optional") || lower.contains("flexible")
            }
            TestPolicyBucket::Required => lower.contains("required"),
        }
    }

    /// Parse a selection key ("optional", "required")
    pub fn parse_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "optional" => Some(TestPolicyBucket::Optional),
            "required" => Some(TestPolicyBucket::Required),
            _ => None,
        }
    }
}

// ============================================================================
// ControlPreference
// ============================================================================

/// Control-type preference used by the affinity scorer
///
/// This is the coarser taxonomy exposed to onboarding ("Public", "Private",
/// "Liberal Arts") rather than the record-level `ControlType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlPreference {
    /// Prefer public institutions
    Public,
    /// Prefer private institutions (either profit status)
    Private,
    /// Prefer liberal-arts colleges (Carnegie heuristic)
    LiberalArts,
}

impl ControlPreference {
    /// Parse a preference key ("public", "private", "liberal arts")
    pub fn parse_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "public" => Some(ControlPreference::Public),
            "private" => Some(ControlPreference::Private),
            "liberal arts" | "liberal-arts" | "liberalarts" => Some(ControlPreference::LiberalArts),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
