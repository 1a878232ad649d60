//! Tournament standings: one player's line and the aggregate table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::entities::{Player, PlayerId, TournamentInfo};
use crate::score::{Elimina2Score, MIN_DATES_FOR_ELIMINA};
use crate::tiebreaker::TiebreakerStats;
use crate::trend::RankingTrend;

/// One player's line in the standings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRanking {
    /// Assigned rank; set once during [`TournamentRanking::create`]
    position: u32,
    /// Who this line belongs to
    pub player: Player,
    /// Points per date number, only for dates the player actually played
    pub points_by_date: BTreeMap<u32, u32>,
    /// Dates the player actually sat at the table
    pub dates_played: u32,
    /// Aggregate score under the ELIMINA 2 rule
    pub score: Elimina2Score,
    /// Counters that split equal scores
    pub tiebreaker: TiebreakerStats,
    trend: RankingTrend,
}

impl PlayerRanking {
    /// Build an unranked line; the aggregate assigns the rank.
    pub fn new(
        player: Player,
        points_by_date: BTreeMap<u32, u32>,
        dates_played: u32,
        score: Elimina2Score,
        tiebreaker: TiebreakerStats,
    ) -> Self {
        Self {
            position: 0,
            player,
            points_by_date,
            dates_played,
            score,
            tiebreaker,
            trend: RankingTrend::default(),
        }
    }

    /// Assigned competition rank (1 = leader).
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Movement relative to the previous ranking.
    pub fn trend(&self) -> RankingTrend {
        self.trend
    }

    /// Full standings order: score, then tie-break stats, then display
    /// name. The name step guarantees a total order with no unresolved
    /// ties beyond identical names.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.score
            .compare(&other.score)
            .then_with(|| self.tiebreaker.compare(&other.tiebreaker))
            .then_with(|| self.player.full_name().cmp(&other.player.full_name()))
    }

    /// Whether two lines tie for rank-sharing purposes.
    ///
    /// Name order still decides who is listed first, but it never splits a
    /// shared rank number.
    fn ties_with(&self, other: &Self) -> bool {
        self.score.compare(&other.score) == Ordering::Equal
            && self.tiebreaker.compare(&other.tiebreaker) == Ordering::Equal
    }
}

/// The full standings table for a tournament.
///
/// Created fresh on every recalculation; immutable afterwards except for
/// the one-time [`TournamentRanking::apply_trends`] pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentRanking {
    /// Tournament this table belongs to
    pub tournament: TournamentInfo,
    rankings: Vec<PlayerRanking>,
    /// When this table was computed
    pub last_updated: DateTime<Utc>,
}

impl TournamentRanking {
    /// Sort the lines and assign competition ranks.
    ///
    /// Tied lines share a rank number and the next distinct line takes its
    /// zero-based index plus one, so numbers may be skipped after a tie
    /// group: `[100, 100, 90]` ranks as `[1, 1, 3]`.
    pub fn create(tournament: TournamentInfo, mut rankings: Vec<PlayerRanking>) -> Self {
        rankings.sort_by(|a, b| a.compare(b));

        let mut ranks: Vec<u32> = Vec::with_capacity(rankings.len());
        for i in 0..rankings.len() {
            if i > 0 && rankings[i].ties_with(&rankings[i - 1]) {
                ranks.push(ranks[i - 1]);
            } else {
                ranks.push(i as u32 + 1);
            }
        }
        for (line, rank) in rankings.iter_mut().zip(ranks) {
            line.position = rank;
        }

        Self { tournament, rankings, last_updated: Utc::now() }
    }

    /// One-time trend pass against the previous ranking.
    ///
    /// Players absent from the previous ranking get `Same`; passing `None`
    /// explicitly resets every trend to `Same`.
    pub fn apply_trends(&mut self, previous: Option<&TournamentRanking>) {
        for line in &mut self.rankings {
            line.trend = match previous {
                Some(prev) => {
                    let prev_position = prev
                        .get_player_ranking(line.player.id)
                        .map(|p| p.position());
                    RankingTrend::calculate(prev_position, line.position)
                },
                None => RankingTrend::default(),
            };
        }
    }

    /// All lines in standings order.
    pub fn rankings(&self) -> &[PlayerRanking] {
        &self.rankings
    }

    /// Look up one player's line.
    pub fn get_player_ranking(&self, player_id: PlayerId) -> Option<&PlayerRanking> {
        self.rankings.iter().find(|r| r.player.id == player_id)
    }

    /// The first `n` lines.
    pub fn get_top_players(&self, n: usize) -> &[PlayerRanking] {
        &self.rankings[..n.min(self.rankings.len())]
    }

    /// The rank-1 line, if any players are ranked.
    pub fn get_leader(&self) -> Option<&PlayerRanking> {
        self.rankings.iter().find(|r| r.position() == 1)
    }

    /// Every line ranked 3 or better (may exceed three entries on ties).
    pub fn get_podium(&self) -> Vec<&PlayerRanking> {
        self.rankings.iter().filter(|r| r.position() <= 3).collect()
    }

    /// Whether the tournament has completed enough dates for the drop rule.
    pub fn is_elimina2_applied(&self) -> bool {
        self.tournament.completed_dates as usize >= MIN_DATES_FOR_ELIMINA
    }
}
