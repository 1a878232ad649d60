//! Engine errors: the elimination rule violations plus layered
//! passthrough of domain and storage failures.

use elimina_domain::{DomainError, EliminationId, GameDateId, GameDateStatus, PlayerId};
use elimina_store::StoreError;
use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised by the elimination use cases.
///
/// Every variant is a caller-recoverable validation failure or a
/// data-integrity bug; none represent transient conditions and none are
/// retried internally.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Registrations are only accepted while the game date runs
    #[error("game date {game_date_id} is {status}, not in progress")]
    GameDateNotInProgress {
        /// Offending game date
        game_date_id: GameDateId,
        /// Its actual status
        status: GameDateStatus,
    },

    /// The player already has a record in this game date
    #[error("player {player_id} is already eliminated in game date {game_date_id}")]
    PlayerAlreadyEliminated {
        /// Offending player
        player_id: PlayerId,
        /// Game date holding the existing record
        game_date_id: GameDateId,
    },

    /// The finishing slot is already taken in this game date
    #[error("position {position} is already taken in game date {game_date_id}")]
    PositionAlreadyTaken {
        /// Offending position value
        position: u32,
        /// Game date holding the existing record
        game_date_id: GameDateId,
    },

    /// The eliminator left the table before the event being recorded
    #[error(
        "player {eliminator_id} was eliminated at position {eliminator_position} and cannot \
         eliminate at position {position} in game date {game_date_id}"
    )]
    InvalidEliminator {
        /// Offending eliminator
        eliminator_id: PlayerId,
        /// The eliminator's own recorded position
        eliminator_position: u32,
        /// Position of the registration being attempted
        position: u32,
        /// Game date in question
        game_date_id: GameDateId,
    },

    /// Only the most recently registered record may be deleted
    #[error(
        "elimination {elimination_id} at position {position} is not the latest in game date \
         {game_date_id}; delete newer records first"
    )]
    NotDeletable {
        /// Record that was asked to be deleted
        elimination_id: EliminationId,
        /// Its position value
        position: u32,
        /// Game date in question
        game_date_id: GameDateId,
    },

    /// Unknown game date id (caller/data-integrity bug)
    #[error("game date {0} not found")]
    GameDateNotFound(GameDateId),

    /// Unknown player id (caller/data-integrity bug)
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    /// Unknown elimination id (caller/data-integrity bug)
    #[error("elimination {0} not found")]
    EliminationNotFound(EliminationId),

    /// Domain validation failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage failure
    #[error(transparent)]
    Store(#[from] StoreError),
}
