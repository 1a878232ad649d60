//! Finishing position value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::points::clamp_player_count;

/// A validated finishing slot within one game date.
///
/// Position 1 is the last player standing (the winner); the highest value
/// is the first player eliminated. "Eliminated before" therefore means a
/// *higher* value.
///
/// # Invariants
/// - `1 <= value <= clamp(total_players, 9, 24)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    value: u32,
    total_players: u32,
}

impl Position {
    /// Create a validated Position.
    ///
    /// The player count is clamped into the supported range before the
    /// bounds check and stored clamped.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPosition` if `value` is outside
    /// `1..=clamped_total`.
    pub fn new(value: u32, total_players: u32) -> Result<Self, DomainError> {
        let total_players = clamp_player_count(total_players);
        if value < 1 || value > total_players {
            return Err(DomainError::InvalidPosition { value, total_players });
        }
        Ok(Self { value, total_players })
    }

    /// Restore a Position from storage, trusting the persisted values.
    pub fn reconstitute(value: u32, total_players: u32) -> Self {
        Self {
            value,
            total_players: clamp_player_count(total_players),
        }
    }

    /// The finishing slot (1 = winner).
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Player count of the game date (clamped).
    pub fn total_players(&self) -> u32 {
        self.total_players
    }

    /// Last player standing.
    pub fn is_winner(&self) -> bool {
        self.value == 1
    }

    /// Second place; the record that can trigger auto-completion.
    pub fn is_runner_up(&self) -> bool {
        self.value == 2
    }

    /// Top three finish.
    pub fn is_podium(&self) -> bool {
        self.value <= 3
    }

    /// Whether this player left the table before `other` in real time.
    pub fn was_eliminated_before(&self, other: &Position) -> bool {
        self.value > other.value
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, self.total_players)
    }
}
