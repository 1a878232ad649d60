//! Outbound port definitions.
//!
//! Ports define the interfaces for the side-effect collaborators the
//! engine drives (push notifications, who-eliminated-whom statistics).
//! Adapters implement them for specific backends; tests use the recording
//! stubs in [`crate::stub`]. Both ports are fire-and-forget from the
//! engine's perspective: a failure is logged, never propagated.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use elimina_domain::{GameDateId, PlayerId, TournamentId};
use thiserror::Error;

/// Failure delivering a side effect to an adapter.
#[derive(Debug, Error)]
pub enum PortError {
    /// The adapter could not deliver the call
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Payload for a regular elimination notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEliminatedNotice {
    /// Player who left the table
    pub player_id: PlayerId,
    /// Display name for the message body
    pub player_name: String,
    /// Finishing position
    pub position: u32,
    /// Points earned
    pub points: u32,
    /// Game date the elimination belongs to
    pub game_date_id: GameDateId,
}

/// Payload for a winner announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerDeclaredNotice {
    /// The winner
    pub player_id: PlayerId,
    /// Display name for the message body
    pub player_name: String,
    /// Points earned for first place
    pub points: u32,
    /// Game date that was won
    pub game_date_id: GameDateId,
}

/// Payload for a who-eliminates-whom statistics update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EliminationStatsUpdate {
    /// Tournament scope of the statistic
    pub tournament_id: TournamentId,
    /// Player who performed the elimination
    pub eliminator_id: PlayerId,
    /// Player who was eliminated
    pub eliminated_id: PlayerId,
    /// Calendar date of the game date
    pub game_date_date: DateTime<Utc>,
}

/// Port for push-style player notifications.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Announce a regular elimination.
    async fn notify_player_eliminated(
        &self,
        notice: PlayerEliminatedNotice,
    ) -> Result<(), PortError>;

    /// Announce the winner of a game date.
    async fn notify_winner_declared(&self, notice: WinnerDeclaredNotice) -> Result<(), PortError>;
}

/// Port for the parent/child (eliminator/eliminated) statistics table.
#[async_trait]
pub trait ParentChildStatsService: Send + Sync {
    /// Record one eliminator/eliminated pairing.
    async fn update_stats(&self, update: EliminationStatsUpdate) -> Result<(), PortError>;
}
