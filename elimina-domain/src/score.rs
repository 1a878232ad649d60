//! ELIMINA 2 score: total points with the two worst dates dropped.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Dates a player must have on record before the drop rule applies.
pub const MIN_DATES_FOR_ELIMINA: usize = 6;

/// A player's aggregate score under the ELIMINA 2 rule.
///
/// Derived once from the per-date points map. Below
/// [`MIN_DATES_FOR_ELIMINA`] dates the rule is not yet applicable and the
/// final score equals the raw total; from six dates on, the two
/// worst-scoring dates are dropped (and kept for display).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Elimina2Score {
    total_points: u32,
    final_score: u32,
    elimina1: Option<u32>,
    elimina2: Option<u32>,
    is_applied: bool,
}

impl Elimina2Score {
    /// Compute the score from a player's points per date number.
    pub fn calculate(points_by_date: &BTreeMap<u32, u32>) -> Self {
        let total_points: u32 = points_by_date.values().sum();

        if points_by_date.len() < MIN_DATES_FOR_ELIMINA {
            return Self {
                total_points,
                final_score: total_points,
                elimina1: None,
                elimina2: None,
                is_applied: false,
            };
        }

        let mut scores: Vec<u32> = points_by_date.values().copied().collect();
        scores.sort_unstable();
        let elimina1 = scores[0];
        let elimina2 = scores[1];

        Self {
            total_points,
            final_score: total_points - elimina1 - elimina2,
            elimina1: Some(elimina1),
            elimina2: Some(elimina2),
            is_applied: true,
        }
    }

    /// Raw sum over all dates.
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    /// Score after dropping the two worst dates (or the raw total while
    /// the rule is not yet applicable).
    pub fn final_score(&self) -> u32 {
        self.final_score
    }

    /// Worst dropped date, when the rule applied.
    pub fn elimina1(&self) -> Option<u32> {
        self.elimina1
    }

    /// Second-worst dropped date, when the rule applied.
    pub fn elimina2(&self) -> Option<u32> {
        self.elimina2
    }

    /// Whether the drop rule was applied.
    pub fn is_applied(&self) -> bool {
        self.is_applied
    }

    /// Standings order between two scores.
    ///
    /// `Less` means `self` ranks ahead: higher final score first, then
    /// higher raw total. Deeper ties are deliberately left to
    /// `TiebreakerStats` at the `PlayerRanking` level.
    pub fn compare(&self, other: &Self) -> Ordering {
        other
            .final_score
            .cmp(&self.final_score)
            .then_with(|| other.total_points.cmp(&self.total_points))
    }
}
