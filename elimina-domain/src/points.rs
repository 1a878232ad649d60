//! Points schedule: finishing position → points for a given player count.
//!
//! The table is fully deterministic. It is rebuilt on every lookup; player
//! counts are small (9..=24) so there is nothing worth caching.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest supported player count for a game date.
pub const MIN_PLAYERS: u32 = 9;

/// Largest supported player count for a game date.
pub const MAX_PLAYERS: u32 = 24;

/// Clamp a raw player count into the supported range.
pub fn clamp_player_count(total_players: u32) -> u32 {
    total_players.clamp(MIN_PLAYERS, MAX_PLAYERS)
}

/// Build the points table for a game date.
///
/// Index 0 holds the winner's points, index `n - 1` the first player
/// eliminated. The schedule, from worst place upward:
///
/// 1. Last place scores 1 point.
/// 2. Positions above last place down to position 10 each add 1.
/// 3. Position 9 adds 2 over position 10 (the bonus step). With exactly
///    9 players position 9 *is* the last place, so the bonus never
///    overwrites the 1-point floor.
/// 4. Positions 8 through 4 each add 1.
/// 5. The podium (3, 2, 1) adds 3 per step.
///
/// Every step adds a non-negative increment, so the table is
/// non-increasing as the position number grows.
pub fn build_points_table(total_players: u32) -> Vec<u32> {
    let n = clamp_player_count(total_players) as usize;
    let mut points = vec![0u32; n];

    // Step 1: last place
    points[n - 1] = 1;

    // Step 2: positions n-1 down to 10 (only present above 10 players)
    for pos in (10..n).rev() {
        points[pos - 1] = points[pos] + 1;
    }

    // Step 3: ninth place bonus (position 10 must exist as a distinct slot)
    if n > 9 {
        points[8] = points[9] + 2;
    }

    // Step 4: positions 8 through 4
    for pos in (4..=8).rev() {
        points[pos - 1] = points[pos] + 1;
    }

    // Step 5: podium
    for pos in (1..=3).rev() {
        points[pos - 1] = points[pos] + 3;
    }

    points
}

/// Points awarded for one finishing position.
///
/// Always derived from `(position, total_players)` through the schedule,
/// never set independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Points(u32);

impl Points {
    /// Look up the points for a finishing position.
    ///
    /// The player count is clamped into the supported range first. An
    /// out-of-range position yields zero points instead of an error; display
    /// code relies on this permissive fallback.
    pub fn calculate(position: u32, total_players: u32) -> Self {
        let clamped = clamp_player_count(total_players);
        if position < 1 || position > clamped {
            return Self(0);
        }
        let table = build_points_table(clamped);
        Self(table[(position - 1) as usize])
    }

    /// Wrap a stored points value without recomputation.
    pub fn reconstitute(value: u32) -> Self {
        Self(value)
    }

    /// The underlying points value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
