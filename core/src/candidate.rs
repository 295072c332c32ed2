//! Suggestion types and the bounded top-K ranker.
//!
//! This module provides:
//! - `Suggestion`: a word with its edit distance and frequency weight
//! - `SuggestionRanker`: keeps the best `capacity` suggestions offered to it

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Number of suggestions kept when no capacity is configured.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

/// A ranked suggestion.
///
/// Lower distance is better; among equal distances, higher frequency is
/// better.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub word: String,
    pub distance: usize,
    pub frequency: u64,
}

impl Suggestion {
    pub fn new<T: Into<String>>(word: T, distance: usize, frequency: u64) -> Self {
        Suggestion {
            word: word.into(),
            distance,
            frequency,
        }
    }

    /// Ranking order: ascending distance, then descending frequency.
    ///
    /// `Less` means `self` ranks before `other`. Entries with the same
    /// distance and frequency compare `Equal` regardless of their words.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.frequency.cmp(&self.frequency))
    }

    /// Whether `self` ranks strictly better than `other`.
    pub fn ranks_before(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }
}

/// A fixed-capacity collector of the best suggestions seen so far.
///
/// Until full, every offer is kept. Once full, an offer replaces the single
/// worst held entry, and only when it ranks strictly better than that entry.
/// With many ties this is an approximate top-K: which of several equally
/// ranked entries survives depends on offer order. The order returned by
/// [`SuggestionRanker::sorted`] is always the ranking order.
#[derive(Debug, Clone)]
pub struct SuggestionRanker {
    suggestions: Vec<Suggestion>,
    capacity: usize,
}

impl SuggestionRanker {
    /// Create an empty ranker holding up to [`DEFAULT_MAX_SUGGESTIONS`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_SUGGESTIONS)
    }

    /// Create an empty ranker with the given capacity (at least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            suggestions: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Offer a candidate.
    ///
    /// Returns `true` if the candidate is now held.
    pub fn offer<T: Into<String>>(&mut self, word: T, distance: usize, frequency: u64) -> bool {
        if self.suggestions.len() < self.capacity {
            self.suggestions
                .push(Suggestion::new(word, distance, frequency));
            return true;
        }

        let Some(worst) = self.worst_index() else {
            return false;
        };
        let candidate = Suggestion::new(word, distance, frequency);
        if !candidate.ranks_before(&self.suggestions[worst]) {
            return false;
        }
        self.suggestions[worst] = candidate;
        true
    }

    /// Index of the lowest-ranked entry; the first one found wins ties.
    fn worst_index(&self) -> Option<usize> {
        let mut iter = self.suggestions.iter().enumerate();
        let (mut worst, mut worst_s) = iter.next()?;
        for (i, s) in iter {
            if worst_s.ranks_before(s) {
                worst = i;
                worst_s = s;
            }
        }
        Some(worst)
    }

    /// Held suggestions in ranking order, leaving the ranker untouched.
    pub fn sorted(&self) -> Vec<Suggestion> {
        let mut out = self.suggestions.clone();
        out.sort_by(Suggestion::rank_cmp);
        out
    }

    /// Consume the ranker, returning its suggestions in ranking order.
    pub fn into_sorted(self) -> Vec<Suggestion> {
        let mut out = self.suggestions;
        out.sort_by(Suggestion::rank_cmp);
        out
    }
}

impl Default for SuggestionRanker {
    fn default() -> Self {
        Self::new()
    }
}
