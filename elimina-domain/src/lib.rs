//! ELIMINA Domain Layer
//!
//! Pure elimination-and-ranking logic with zero I/O dependencies:
//! validated value objects, the points schedule, the elimination record
//! entity, and the standings aggregates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calculator;
pub mod elimination;
pub mod entities;
pub mod error;
pub mod points;
pub mod position;
pub mod ranking;
pub mod score;
pub mod tiebreaker;
pub mod trend;

// Re-export commonly used types
pub use calculator::{Participation, PlayerInput, RankingCalculator};
pub use elimination::EliminationRecord;
pub use entities::{
    EliminationId, GameDate, GameDateId, GameDateStatus, Player, PlayerId, TournamentId,
    TournamentInfo,
};
pub use error::DomainError;
pub use points::{build_points_table, clamp_player_count, Points, MAX_PLAYERS, MIN_PLAYERS};
pub use position::Position;
pub use ranking::{PlayerRanking, TournamentRanking};
pub use score::{Elimina2Score, MIN_DATES_FOR_ELIMINA};
pub use tiebreaker::TiebreakerStats;
pub use trend::{RankingTrend, TrendDirection};
