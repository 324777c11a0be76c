//! Token relevance scoring for search-ordered listings
//!
//! The substring predicate decides WHETHER a record matches a search; this
//! module decides how matches are ORDERED. Scoring works over normalized
//! tokens with a derived acronym, so a query of "mit" ranks
//! "Massachusetts Institute of Technology" by acronym even though only
//! literal-substring matches reach this stage through their name or city.
//!
//! Score components, additive:
//! - one point per query token that prefix- or substring-matches a record
//!   token (zero hits scores zero overall)
//! - +2 when the record's compact form contains the compact query
//! - +1 when every query token hit
//! - +1 when a query token equals the record's acronym

use uniscope_core::{acronym, compact, tokenize, InstitutionRecord};

/// Bonus when the compact record text contains the compact query
const COMPACT_BONUS: u32 = 2;

/// Bonus when every query token matched
const FULL_HIT_BONUS: u32 = 1;

/// Bonus when a query token equals the record acronym
const ACRONYM_BONUS: u32 = 1;

/// A search query pre-processed for relevance scoring
#[derive(Debug, Clone)]
pub struct SearchQuery {
    tokens: Vec<String>,
    compact: String,
}

impl SearchQuery {
    /// Tokenize and compact the raw search text
    pub fn parse(text: &str) -> Self {
        SearchQuery {
            tokens: tokenize(text),
            compact: compact(text),
        }
    }

    /// Whether the query carries any scorable signal
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Score a record's relevance to a query
///
/// Returns 0 when no query token matches; callers ordering a result list
/// can rely on matched records scoring at least 1.
pub fn relevance_score(record: &InstitutionRecord, query: &SearchQuery) -> u32 {
    if query.is_empty() {
        return 0;
    }

    let name_state = match record.state_code.as_deref() {
        Some(state) => format!("{} {}", record.name, state),
        None => record.name.clone(),
    };
    let record_tokens = tokenize(&name_state);
    let record_compact = compact(&name_state);
    let record_acronym = acronym(&record.name);

    let hits = query
        .tokens
        .iter()
        .filter(|qt| {
            record_tokens
                .iter()
                .any(|rt| rt.starts_with(qt.as_str()) || rt.contains(qt.as_str()))
        })
        .count() as u32;
    if hits == 0 {
        return 0;
    }

    let mut score = hits;
    if !query.compact.is_empty() && record_compact.contains(&query.compact) {
        score += COMPACT_BONUS;
    }
    if hits as usize == query.tokens.len() {
        score += FULL_HIT_BONUS;
    }
    if !record_acronym.is_empty() && query.tokens.iter().any(|t| *t == record_acronym) {
        score += ACRONYM_BONUS;
    }
    score
}
