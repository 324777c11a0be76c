//! User preference profile
//!
//! Ephemeral preference input derived from onboarding or session state.
//! The profile is always passed explicitly into the engine as a value;
//! the engine never reads ambient session state.

use crate::bands::{ControlPreference, SizeBucket};
use crate::text;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Preference profile used by the affinity scorer
///
/// All sets are "empty means no preference": an empty dimension
/// contributes nothing to any record's score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPreferenceProfile {
    /// Preferred majors, normalized (case-folded, accent-stripped)
    pub preferred_majors: HashSet<String>,

    /// Preferred state codes, uppercased
    pub preferred_states: HashSet<String>,

    /// Preferred enrollment size bucket; `None` means no preference
    pub preferred_size: Option<SizeBucket>,

    /// Preferred control types; empty means no preference
    pub preferred_controls: HashSet<ControlPreference>,
}

impl UserPreferenceProfile {
    /// Create an empty profile (no preferences)
    pub fn new() -> Self {
        UserPreferenceProfile::default()
    }

    /// Builder: add a preferred major (normalized on insert)
    pub fn with_major(mut self, major: &str) -> Self {
        let normalized = text::normalize(major);
        if !normalized.is_empty() {
            self.preferred_majors.insert(normalized);
        }
        self
    }

    /// Builder: add a preferred state code (uppercased on insert)
    pub fn with_state(mut self, state: &str) -> Self {
        let code = state.trim().to_ascii_uppercase();
        if !code.is_empty() {
            self.preferred_states.insert(code);
        }
        self
    }

    /// Builder: set the preferred size bucket
    pub fn with_size(mut self, size: SizeBucket) -> Self {
        self.preferred_size = Some(size);
        self
    }

    /// Builder: add a preferred control type
    pub fn with_control(mut self, control: ControlPreference) -> Self {
        self.preferred_controls.insert(control);
        self
    }

    /// Whether a major preference is active
    ///
    /// Drives the ranker's hard-exclusion rule for negative scores.
    pub fn has_major_preference(&self) -> bool {
        !self.preferred_majors.is_empty()
    }

    /// Whether the profile expresses no preference at all
    pub fn is_empty(&self) -> bool {
        self.preferred_majors.is_empty()
            && self.preferred_states.is_empty()
            && self.preferred_size.is_none()
            && self.preferred_controls.is_empty()
    }
}
