//! Domain validation errors.

/// Errors raised by domain value-object validation.
///
/// All variants are plain values carrying the offending inputs; none of
/// them represent transient conditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Finishing position outside the valid range for the game date.
    #[error("invalid position {value} for a game date of {total_players} players")]
    InvalidPosition {
        /// The rejected position value
        value: u32,
        /// Player count of the game date (after clamping to the supported range)
        total_players: u32,
    },
}
