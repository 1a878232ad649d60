//! Ranking calculator: raw per-date participation → standings table.
//!
//! Pure and allocation-fresh on every call, so arbitrarily many readers
//! may recompute concurrently.

use std::collections::BTreeMap;

use crate::entities::{Player, TournamentInfo};
use crate::ranking::{PlayerRanking, TournamentRanking};
use crate::score::Elimina2Score;
use crate::tiebreaker::TiebreakerStats;

/// One player's attendance and result on one game date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participation {
    /// Date number within the tournament (1-based)
    pub date_number: u32,
    /// Whether the player sat at the table
    pub played: bool,
    /// Finishing position when played and known
    pub position: Option<u32>,
    /// Points earned on the date
    pub points: u32,
}

/// Raw ranking input for one player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInput {
    /// Who the participations belong to
    pub player: Player,
    /// One entry per game date of the tournament
    pub participations: Vec<Participation>,
}

/// Builds [`TournamentRanking`]s from per-date participation data.
pub struct RankingCalculator;

impl RankingCalculator {
    /// Compute the standings table, leaving every trend at its default.
    ///
    /// One pass per player: participations fold into a points-per-date map
    /// and tie-break stats, then the aggregate sorts and ranks the lines.
    /// Podium counters move only for played dates with a top-three
    /// position; the absence counter moves for every unplayed date no
    /// matter what points value the input carries.
    pub fn calculate(tournament: TournamentInfo, inputs: &[PlayerInput]) -> TournamentRanking {
        let rankings = inputs
            .iter()
            .map(|input| {
                let mut points_by_date = BTreeMap::new();
                let mut tiebreaker = TiebreakerStats::new();
                let mut dates_played = 0;

                for participation in &input.participations {
                    if participation.played {
                        points_by_date.insert(participation.date_number, participation.points);
                        dates_played += 1;
                        tiebreaker = match participation.position {
                            Some(1) => tiebreaker.with_first_place(),
                            Some(2) => tiebreaker.with_second_place(),
                            Some(3) => tiebreaker.with_third_place(),
                            _ => tiebreaker,
                        };
                    } else {
                        tiebreaker = tiebreaker.with_absence();
                    }
                }

                let score = Elimina2Score::calculate(&points_by_date);
                PlayerRanking::new(
                    input.player.clone(),
                    points_by_date,
                    dates_played,
                    score,
                    tiebreaker,
                )
            })
            .collect();

        TournamentRanking::create(tournament, rankings)
    }

    /// Compute the standings table and run the trend pass.
    ///
    /// `previous = None` explicitly resets every trend to `Same`; callers
    /// that want no trend pass at all use [`RankingCalculator::calculate`].
    pub fn calculate_with_trends(
        tournament: TournamentInfo,
        inputs: &[PlayerInput],
        previous: Option<&TournamentRanking>,
    ) -> TournamentRanking {
        let mut ranking = Self::calculate(tournament, inputs);
        ranking.apply_trends(previous);
        ranking
    }

    /// Recompute the standings restricted to dates up to `max_date_number`.
    ///
    /// Used to derive the previous snapshot that the full ranking's trend
    /// pass compares against.
    pub fn calculate_for_dates(
        tournament: TournamentInfo,
        inputs: &[PlayerInput],
        max_date_number: u32,
    ) -> TournamentRanking {
        let restricted: Vec<PlayerInput> = inputs
            .iter()
            .map(|input| PlayerInput {
                player: input.player.clone(),
                participations: input
                    .participations
                    .iter()
                    .filter(|p| p.date_number <= max_date_number)
                    .cloned()
                    .collect(),
            })
            .collect();

        Self::calculate(tournament, &restricted)
    }
}
