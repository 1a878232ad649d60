//! Repository trait definitions (Ports)
//!
//! These traits define the storage interface the elimination engine
//! consumes. Implementations can be SQL-backed adapters or the in-memory
//! store used for testing.
//!
//! The registration use case is check-then-act; concurrent writers against
//! the same game date must be serialized by the implementation (unique
//! constraints on `(game_date, position)` and `(game_date, player)` plus a
//! transaction around the whole use case).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use elimina_domain::{EliminationId, EliminationRecord, GameDate, GameDateId, Player, PlayerId};

use crate::error::StoreError;

/// Repository for elimination records
#[async_trait]
pub trait EliminationRepository: Send + Sync {
    /// Persist a new record, returning it with the assigned id
    async fn save(&self, record: &EliminationRecord) -> Result<EliminationRecord, StoreError>;

    /// Find a record by id
    async fn find_by_id(&self, id: EliminationId)
        -> Result<Option<EliminationRecord>, StoreError>;

    /// All records for a game date, ordered by position descending
    /// (first eliminated first)
    async fn find_by_game_date(
        &self,
        game_date_id: GameDateId,
    ) -> Result<Vec<EliminationRecord>, StoreError>;

    /// Whether the player already has a record in the game date
    async fn exists_by_player_in_game_date(
        &self,
        game_date_id: GameDateId,
        player_id: PlayerId,
    ) -> Result<bool, StoreError>;

    /// Whether the position is already taken in the game date
    async fn exists_by_position_in_game_date(
        &self,
        game_date_id: GameDateId,
        position: u32,
    ) -> Result<bool, StoreError>;

    /// The player's record in the game date, if any
    async fn find_by_player_in_game_date(
        &self,
        game_date_id: GameDateId,
        player_id: PlayerId,
    ) -> Result<Option<EliminationRecord>, StoreError>;

    /// Number of records registered for the game date
    async fn count_by_game_date(&self, game_date_id: GameDateId) -> Result<u32, StoreError>;

    /// Overwrite an existing record (player reassignment)
    async fn update(&self, record: &EliminationRecord) -> Result<(), StoreError>;

    /// Delete a record by id
    async fn delete(&self, id: EliminationId) -> Result<(), StoreError>;

    /// Whether any record in the game date represents a later elimination
    /// than `position` (i.e. has a lower position value)
    async fn exists_later_eliminations(
        &self,
        game_date_id: GameDateId,
        position: u32,
    ) -> Result<bool, StoreError>;
}

/// Repository for game dates
#[async_trait]
pub trait GameDateRepository: Send + Sync {
    /// Find a game date by id
    async fn find_by_id(&self, id: GameDateId) -> Result<Option<GameDate>, StoreError>;

    /// Transition the game date to completed
    async fn mark_as_completed(&self, id: GameDateId) -> Result<(), StoreError>;
}

/// Repository for players
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Find a player by id
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StoreError>;

    /// Record when the player last won a game date
    async fn update_last_victory_date(
        &self,
        player_id: PlayerId,
        date: DateTime<Utc>,
    ) -> Result<(), StoreError>;
}
