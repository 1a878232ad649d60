//! Elimination record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{EliminationId, GameDateId, PlayerId};
use crate::error::DomainError;
use crate::points::Points;
use crate::position::Position;

/// One player's exit from one game date.
///
/// At most one record exists per `(game_date, position)` and per
/// `(game_date, eliminated_player)`; the registration use case enforces
/// both before persisting. Once stored, a record only changes through the
/// narrow player-reassignment path ([`EliminationRecord::with_players`]),
/// which can never touch position or points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationRecord {
    /// Storage-assigned id; `None` until first persisted
    pub id: Option<EliminationId>,
    pub game_date_id: GameDateId,
    position: Position,
    points: Points,
    pub eliminated_player_id: PlayerId,
    /// Who knocked the player out. `None` when unknown (e.g. blinds-out);
    /// the winner's synthesized record points at the winner itself.
    pub eliminator_player_id: Option<PlayerId>,
    pub elimination_time: DateTime<Utc>,
}

impl EliminationRecord {
    /// Build a new record, validating the position and deriving the points.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPosition` when `position` is outside
    /// the game date's slot range.
    pub fn create(
        game_date_id: GameDateId,
        position: u32,
        total_players: u32,
        eliminated_player_id: PlayerId,
        eliminator_player_id: Option<PlayerId>,
        elimination_time: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let position = Position::new(position, total_players)?;
        let points = Points::calculate(position.value(), position.total_players());
        Ok(Self {
            id: None,
            game_date_id,
            position,
            points,
            eliminated_player_id,
            eliminator_player_id,
            elimination_time,
        })
    }

    /// Restore a record from storage without recomputing points.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: EliminationId,
        game_date_id: GameDateId,
        position: u32,
        total_players: u32,
        points: u32,
        eliminated_player_id: PlayerId,
        eliminator_player_id: Option<PlayerId>,
        elimination_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            game_date_id,
            position: Position::reconstitute(position, total_players),
            points: Points::reconstitute(points),
            eliminated_player_id,
            eliminator_player_id,
            elimination_time,
        }
    }

    /// Synthesize the winner's position-1 record.
    ///
    /// Used only by the auto-completion cascade once every other player has
    /// a record. The winner eliminated nobody, so the eliminator reference
    /// points back at the winner.
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPosition` if the player count cannot
    /// host a winner slot (cannot happen after clamping; propagated anyway).
    pub fn create_winner_elimination(
        game_date_id: GameDateId,
        winner_id: PlayerId,
        total_players: u32,
    ) -> Result<Self, DomainError> {
        Self::create(game_date_id, 1, total_players, winner_id, Some(winner_id), Utc::now())
    }

    /// Reassign the players on an existing record.
    ///
    /// Position, points and timestamp are preserved; this is the only
    /// mutation the update use case may apply.
    pub fn with_players(
        &self,
        eliminated_player_id: PlayerId,
        eliminator_player_id: Option<PlayerId>,
    ) -> Self {
        Self {
            eliminated_player_id,
            eliminator_player_id,
            ..self.clone()
        }
    }

    /// The validated finishing slot.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Points awarded for this finish.
    pub fn points(&self) -> Points {
        self.points
    }

    /// Delegates to [`Position::is_winner`].
    pub fn is_winner(&self) -> bool {
        self.position.is_winner()
    }

    /// Delegates to [`Position::is_runner_up`].
    pub fn is_runner_up(&self) -> bool {
        self.position.is_runner_up()
    }

    /// Delegates to [`Position::is_podium`].
    pub fn is_podium(&self) -> bool {
        self.position.is_podium()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_derives_points() {
        let record =
            EliminationRecord::create(1, 10, 10, 42, Some(7), Utc::now()).unwrap();
        assert_eq!(record.position().value(), 10);
        assert_eq!(record.points().value(), 1);
        assert_eq!(record.id, None);
    }

    #[test]
    fn test_create_rejects_bad_position() {
        let err = EliminationRecord::create(1, 11, 10, 42, None, Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPosition { value: 11, .. }));
    }

    #[test]
    fn test_reconstitute_trusts_storage() {
        let when = Utc::now();
        let record = EliminationRecord::reconstitute(5, 1, 3, 10, 11, 42, Some(7), when);
        assert_eq!(record.id, Some(5));
        assert_eq!(record.points().value(), 11);
        assert_eq!(record.elimination_time, when);
        assert!(record.is_podium());
    }

    #[test]
    fn test_winner_elimination_is_self_referential() {
        let record = EliminationRecord::create_winner_elimination(1, 42, 9).unwrap();
        assert!(record.is_winner());
        assert_eq!(record.eliminated_player_id, 42);
        assert_eq!(record.eliminator_player_id, Some(42));
        assert_eq!(record.points().value(), 15); // winner of a 9-player date
    }

    #[test]
    fn test_with_players_preserves_position_and_points() {
        let record =
            EliminationRecord::create(1, 4, 12, 42, Some(7), Utc::now()).unwrap();
        let updated = record.with_players(43, None);
        assert_eq!(updated.position(), record.position());
        assert_eq!(updated.points(), record.points());
        assert_eq!(updated.elimination_time, record.elimination_time);
        assert_eq!(updated.eliminated_player_id, 43);
        assert_eq!(updated.eliminator_player_id, None);
    }
}
