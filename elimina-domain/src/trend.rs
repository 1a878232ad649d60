//! Rank movement between two consecutive rankings.

use serde::{Deserialize, Serialize};

/// Direction of a player's rank movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Rank improved (number went down)
    Up,
    /// Rank worsened (number went up)
    Down,
    /// No movement, or no previous ranking to compare against
    #[default]
    Same,
}

/// A player's movement between the previous and current ranking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingTrend {
    /// Which way the player moved
    pub direction: TrendDirection,
    /// Signed magnitude: `previous - current`, so an improvement is
    /// positive (5 → 2 yields +3) and a drop negative (2 → 5 yields -3).
    pub positions_changed: i32,
}

impl RankingTrend {
    /// Compute the trend for a player.
    ///
    /// `previous` is `None` when the player was absent from the previous
    /// ranking, which counts as no movement.
    pub fn calculate(previous: Option<u32>, current: u32) -> Self {
        let Some(previous) = previous else {
            return Self::default();
        };

        let delta = previous as i32 - current as i32;
        let direction = match delta {
            d if d > 0 => TrendDirection::Up,
            d if d < 0 => TrendDirection::Down,
            _ => TrendDirection::Same,
        };
        Self { direction, positions_changed: delta }
    }
}
