//! Tie-break statistics accumulated per player across game dates.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Counts that break final-score ties.
///
/// Built by folding one participation at a time through the `with_*`
/// transitions; instances are never mutated in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TiebreakerStats {
    /// Dates won outright
    pub first_places: u32,
    /// Runner-up finishes
    pub second_places: u32,
    /// Third-place finishes
    pub third_places: u32,
    /// Dates not played at all
    pub absences: u32,
}

impl TiebreakerStats {
    /// Empty stats (no participations folded yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// A new instance with one more first place.
    pub fn with_first_place(self) -> Self {
        Self { first_places: self.first_places + 1, ..self }
    }

    /// A new instance with one more second place.
    pub fn with_second_place(self) -> Self {
        Self { second_places: self.second_places + 1, ..self }
    }

    /// A new instance with one more third place.
    pub fn with_third_place(self) -> Self {
        Self { third_places: self.third_places + 1, ..self }
    }

    /// A new instance with one more absence.
    pub fn with_absence(self) -> Self {
        Self { absences: self.absences + 1, ..self }
    }

    /// Standings order between two stat sets.
    ///
    /// `Less` means `self` ranks ahead. Criteria, first non-equal decides:
    /// more firsts, more seconds, more thirds, fewer absences.
    pub fn compare(&self, other: &Self) -> Ordering {
        other
            .first_places
            .cmp(&self.first_places)
            .then_with(|| other.second_places.cmp(&self.second_places))
            .then_with(|| other.third_places.cmp(&self.third_places))
            .then_with(|| self.absences.cmp(&other.absences))
    }
}
