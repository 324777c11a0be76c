//! The institution record model
//!
//! One `InstitutionRecord` per institution, deserialized from the upstream
//! JSON snapshot. Every field other than `id` and `name` may be absent, and
//! absence is always distinct from zero: derived quantities are total
//! functions returning `Option` rather than partial functions that panic.

use crate::bands::{ControlType, SelectivityBand, SizeBucket};
use serde::{Deserialize, Serialize};

/// One institution row from the catalog snapshot
///
/// Field names map to the upstream data source's JSON keys (`unitid`,
/// `state`, `tuition_2023_24_out_of_state`, ...). Tuition amounts are
/// nominal USD for the stated academic year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRecord {
    /// Unique identifier (upstream IPEDS unit id)
    #[serde(rename = "unitid")]
    pub id: u32,

    /// Institution name
    pub name: String,

    /// City, when reported
    #[serde(default)]
    pub city: Option<String>,

    /// Two-letter state code, when reported
    #[serde(rename = "state", default)]
    pub state_code: Option<String>,

    /// Free-text control (ownership) column
    #[serde(default)]
    pub control: Option<String>,

    /// Institution level descriptor ("4-year", ...)
    #[serde(default)]
    pub level: Option<String>,

    /// Free-text Carnegie classification
    #[serde(default)]
    pub carnegie: Option<String>,

    /// Fractional acceptance rate in [0,1]
    #[serde(default)]
    pub acceptance_rate: Option<f64>,

    /// Fractional yield rate in [0,1]
    #[serde(rename = "yield", default)]
    pub yield_rate: Option<f64>,

    /// Free-text testing policy ("Test optional", "Required", ...)
    #[serde(default)]
    pub test_policy: Option<String>,

    /// Coarse major family labels
    #[serde(default)]
    pub major_families: Vec<String>,

    /// Fine-grained major names/codes
    #[serde(default)]
    pub majors_detailed: Vec<String>,

    /// In-state tuition, USD
    #[serde(rename = "tuition_2023_24_in_state", default)]
    pub tuition_in_state: Option<u32>,

    /// Out-of-state tuition, USD
    #[serde(rename = "tuition_2023_24_out_of_state", default)]
    pub tuition_out_of_state: Option<u32>,

    /// Single reported tuition when the in/out split is absent, USD
    #[serde(rename = "tuition_2023_24", default)]
    pub tuition_overall: Option<u32>,

    /// Total enrollment headcount
    #[serde(default)]
    pub total_enrollment: Option<u32>,

    /// Applicant volume from the most recent metrics year
    #[serde(default)]
    pub applicants_total: Option<u64>,

    /// Year the applicant volume was reported for
    #[serde(default)]
    pub applicants_year: Option<u16>,
}

impl InstitutionRecord {
    /// Create a minimal record with the given id and name
    ///
    /// All optional fields start absent; use the builder methods to fill
    /// in what a test or caller needs.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        InstitutionRecord {
            id,
            name: name.into(),
            city: None,
            state_code: None,
            control: None,
            level: None,
            carnegie: None,
            acceptance_rate: None,
            yield_rate: None,
            test_policy: None,
            major_families: vec![],
            majors_detailed: vec![],
            tuition_in_state: None,
            tuition_out_of_state: None,
            tuition_overall: None,
            total_enrollment: None,
            applicants_total: None,
            applicants_year: None,
        }
    }

    /// Builder: set city
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Builder: set state code
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state_code = Some(state.into());
        self
    }

    /// Builder: set the free-text control column
    pub fn with_control(mut self, control: impl Into<String>) -> Self {
        self.control = Some(control.into());
        self
    }

    /// Builder: set the Carnegie classification
    pub fn with_carnegie(mut self, carnegie: impl Into<String>) -> Self {
        self.carnegie = Some(carnegie.into());
        self
    }

    /// Builder: set fractional acceptance rate
    pub fn with_acceptance_rate(mut self, rate: f64) -> Self {
        self.acceptance_rate = Some(rate);
        self
    }

    /// Builder: set the free-text testing policy
    pub fn with_test_policy(mut self, policy: impl Into<String>) -> Self {
        self.test_policy = Some(policy.into());
        self
    }

    /// Builder: set coarse major families
    pub fn with_major_families(mut self, families: Vec<String>) -> Self {
        self.major_families = families;
        self
    }

    /// Builder: set fine-grained majors
    pub fn with_majors_detailed(mut self, majors: Vec<String>) -> Self {
        self.majors_detailed = majors;
        self
    }

    /// Builder: set in-state tuition
    pub fn with_tuition_in_state(mut self, tuition: u32) -> Self {
        self.tuition_in_state = Some(tuition);
        self
    }

    /// Builder: set out-of-state tuition
    pub fn with_tuition_out_of_state(mut self, tuition: u32) -> Self {
        self.tuition_out_of_state = Some(tuition);
        self
    }

    /// Builder: set the single reported tuition
    pub fn with_tuition_overall(mut self, tuition: u32) -> Self {
        self.tuition_overall = Some(tuition);
        self
    }

    /// Builder: set total enrollment
    pub fn with_enrollment(mut self, total: u32) -> Self {
        self.total_enrollment = Some(total);
        self
    }

    /// Builder: set applicant volume and year
    pub fn with_applicants(mut self, total: u64, year: u16) -> Self {
        self.applicants_total = Some(total);
        self.applicants_year = Some(year);
        self
    }

    // ========================================================================
    // Derived quantities
    // ========================================================================

    /// Reference tuition for budget filtering and tie-breaking
    ///
    /// Out-of-state is preferred, then in-state, then the single reported
    /// amount. `None` when no tuition is reported at all.
    pub fn reference_tuition(&self) -> Option<u32> {
        self.tuition_out_of_state
            .or(self.tuition_in_state)
            .or(self.tuition_overall)
    }

    /// Selectivity band derived from the acceptance rate
    pub fn selectivity_band(&self) -> Option<SelectivityBand> {
        SelectivityBand::from_acceptance_rate(self.acceptance_rate)
    }

    /// Enrollment size bucket
    pub fn size_bucket(&self) -> Option<SizeBucket> {
        SizeBucket::from_enrollment(self.total_enrollment)
    }

    /// Parsed control type; `Other` when the column is absent
    pub fn control_type(&self) -> ControlType {
        self.control
            .as_deref()
            .map(ControlType::parse)
            .unwrap_or(ControlType::Other)
    }

    /// Lowercased haystack for free-text substring search
    ///
    /// Concatenation of name, city, and state code. Case-insensitive
    /// substring only; no token or acronym expansion happens here.
    pub fn search_haystack(&self) -> String {
        let mut hay = self.name.clone();
        if let Some(city) = &self.city {
            hay.push(' ');
            hay.push_str(city);
        }
        if let Some(state) = &self.state_code {
            hay.push(' ');
            hay.push_str(state);
        }
        hay.to_lowercase()
    }
}
