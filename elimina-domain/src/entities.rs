//! Port-facing entities read by the elimination engine.
//!
//! These mirror the rows the persistence adapters manage. The engine only
//! reads them; every mutation goes back out through a repository port.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a player
pub type PlayerId = i64;

/// Unique identifier for a game date (one session of the tournament)
pub type GameDateId = i64;

/// Unique identifier for a tournament
pub type TournamentId = i64;

/// Unique identifier for a persisted elimination record
pub type EliminationId = i64;

/// Lifecycle status of a game date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameDateStatus {
    /// Created but not started
    Scheduled,
    /// Players are being eliminated
    InProgress,
    /// A winner exists; no further registrations
    Completed,
    /// Called off before completion
    Cancelled,
}

impl std::fmt::Display for GameDateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameDateStatus::Scheduled => write!(f, "scheduled"),
            GameDateStatus::InProgress => write!(f, "in_progress"),
            GameDateStatus::Completed => write!(f, "completed"),
            GameDateStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// One scheduled session of the tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDate {
    /// Storage id of the game date
    pub id: GameDateId,
    /// Tournament this date belongs to
    pub tournament_id: TournamentId,
    /// Current lifecycle status
    pub status: GameDateStatus,
    /// Players registered for this date; its length is the player count
    /// every points calculation uses.
    pub player_ids: Vec<PlayerId>,
    /// When the session takes place
    pub scheduled_date: DateTime<Utc>,
}

impl GameDate {
    /// Number of players registered for this date.
    pub fn total_players(&self) -> u32 {
        self.player_ids.len() as u32
    }

    /// Whether eliminations may currently be registered.
    pub fn is_in_progress(&self) -> bool {
        self.status == GameDateStatus::InProgress
    }
}

/// Player identity as the engine needs it (notifications, tie-breaks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Storage id of the player
    pub id: PlayerId,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

impl Player {
    /// Display name used in notifications and as the final ranking tie-break.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Tournament metadata carried by a computed ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentInfo {
    /// Storage id of the tournament
    pub id: TournamentId,
    /// Display name
    pub name: String,
    /// Sequential tournament number within the league
    pub number: u32,
    /// Game dates already completed; gates the ELIMINA 2 rule
    pub completed_dates: u32,
}
