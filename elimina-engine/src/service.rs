//! Elimination use cases: register, update, delete, query.
//!
//! The service is the bridge between the pure domain rules and the
//! injected ports. Precondition checks run in a fixed order so callers
//! get stable failure modes; the persistence layer behind the
//! repositories is expected to serialize concurrent writers per game
//! date (see `elimina-store::repository`).

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use elimina_domain::{EliminationId, EliminationRecord, GameDate, GameDateId, Player, PlayerId};
use elimina_store::{EliminationRepository, GameDateRepository, PlayerRepository};

use crate::error::{EngineError, EngineResult};
use crate::ports::{
    EliminationStatsUpdate, NotificationService, ParentChildStatsService, PlayerEliminatedNotice,
    WinnerDeclaredNotice,
};

// =============================================================================
// Commands and results
// =============================================================================

/// Input for registering one elimination.
#[derive(Debug, Clone)]
pub struct RegisterEliminationCommand {
    /// Game date receiving the record
    pub game_date_id: GameDateId,
    /// Finishing position being recorded
    pub position: u32,
    /// Player leaving the table
    pub eliminated_player_id: PlayerId,
    /// Player who knocked them out, when known
    pub eliminator_player_id: Option<PlayerId>,
}

/// Result of a successful registration.
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    /// The record that was registered
    pub record: EliminationRecord,
    /// Whether the auto-completion cascade fired
    pub auto_completed: bool,
    /// The synthesized winner record, when the cascade fired
    pub winner_record: Option<EliminationRecord>,
}

/// Input for reassigning the players on an existing record.
///
/// Position and points can never be changed through this path.
#[derive(Debug, Clone)]
pub struct UpdateEliminationCommand {
    /// Record being edited
    pub elimination_id: EliminationId,
    /// New eliminated player
    pub eliminated_player_id: PlayerId,
    /// New eliminator, when known
    pub eliminator_player_id: Option<PlayerId>,
}

// =============================================================================
// Service
// =============================================================================

/// Use-case handler for elimination registration and maintenance.
///
/// All collaborators arrive through the constructor; the service holds no
/// other state and may be shared freely across tasks.
pub struct EliminationService {
    eliminations: Arc<dyn EliminationRepository>,
    game_dates: Arc<dyn GameDateRepository>,
    players: Arc<dyn PlayerRepository>,
    notifications: Arc<dyn NotificationService>,
    parent_child_stats: Arc<dyn ParentChildStatsService>,
}

impl EliminationService {
    /// Create a new service over the injected ports.
    pub fn new(
        eliminations: Arc<dyn EliminationRepository>,
        game_dates: Arc<dyn GameDateRepository>,
        players: Arc<dyn PlayerRepository>,
        notifications: Arc<dyn NotificationService>,
        parent_child_stats: Arc<dyn ParentChildStatsService>,
    ) -> Self {
        Self {
            eliminations,
            game_dates,
            players,
            notifications,
            parent_child_stats,
        }
    }

    /// Register an elimination.
    ///
    /// Preconditions, checked in order: the game date must be in
    /// progress, the player must not already be eliminated, the position
    /// must be free, and a known eliminator must not have left the table
    /// before the event being recorded. On the runner-up registration the
    /// auto-completion cascade may synthesize the winner's record and
    /// close the game date.
    ///
    /// # Errors
    ///
    /// `GameDateNotInProgress`, `PlayerAlreadyEliminated`,
    /// `PositionAlreadyTaken`, `InvalidEliminator`, the not-found
    /// variants for unknown ids, and storage passthrough.
    pub async fn register(
        &self,
        command: RegisterEliminationCommand,
    ) -> EngineResult<RegistrationOutcome> {
        let game_date = self.in_progress_game_date(command.game_date_id).await?;

        if self
            .eliminations
            .exists_by_player_in_game_date(game_date.id, command.eliminated_player_id)
            .await?
        {
            return Err(EngineError::PlayerAlreadyEliminated {
                player_id: command.eliminated_player_id,
                game_date_id: game_date.id,
            });
        }

        if self
            .eliminations
            .exists_by_position_in_game_date(game_date.id, command.position)
            .await?
        {
            return Err(EngineError::PositionAlreadyTaken {
                position: command.position,
                game_date_id: game_date.id,
            });
        }

        if let Some(eliminator_id) = command.eliminator_player_id {
            self.check_eliminator_sequence(game_date.id, eliminator_id, command.position, None)
                .await?;
        }

        // Resolve referenced players before any mutation
        let eliminated = self.known_player(command.eliminated_player_id).await?;
        let eliminator = match command.eliminator_player_id {
            Some(id) => Some(self.known_player(id).await?),
            None => None,
        };

        let record = EliminationRecord::create(
            game_date.id,
            command.position,
            game_date.total_players(),
            command.eliminated_player_id,
            command.eliminator_player_id,
            Utc::now(),
        )?;
        let saved = self.eliminations.save(&record).await?;

        info!(
            game_date_id = game_date.id,
            position = command.position,
            player_id = eliminated.id,
            points = saved.points().value(),
            "Elimination registered"
        );

        if saved.is_winner() {
            self.run_winner_effects(&game_date, &eliminated, &saved).await?;
        } else {
            let notice = PlayerEliminatedNotice {
                player_id: eliminated.id,
                player_name: eliminated.full_name(),
                position: saved.position().value(),
                points: saved.points().value(),
                game_date_id: game_date.id,
            };
            if let Err(e) = self.notifications.notify_player_eliminated(notice).await {
                warn!(player_id = eliminated.id, error = %e, "Elimination notification failed");
            }
        }

        if let Some(ref eliminator) = eliminator {
            let update = EliminationStatsUpdate {
                tournament_id: game_date.tournament_id,
                eliminator_id: eliminator.id,
                eliminated_id: eliminated.id,
                game_date_date: game_date.scheduled_date,
            };
            if let Err(e) = self.parent_child_stats.update_stats(update).await {
                warn!(eliminator_id = eliminator.id, error = %e, "Stats update failed");
            }
        }

        // Auto-completion: once the runner-up falls to a known eliminator
        // and everyone but the presumed winner has a record, the winner's
        // record is synthesized and the date closed.
        if saved.is_runner_up() {
            if let Some(winner) = eliminator {
                let count = self.eliminations.count_by_game_date(game_date.id).await?;
                if count + 1 == game_date.total_players() {
                    let winner_record = self.auto_complete(&game_date, &winner).await?;
                    return Ok(RegistrationOutcome {
                        record: saved,
                        auto_completed: true,
                        winner_record: Some(winner_record),
                    });
                }
            }
        }

        Ok(RegistrationOutcome {
            record: saved,
            auto_completed: false,
            winner_record: None,
        })
    }

    /// Reassign the players on an existing record.
    ///
    /// Allowed only while the game date is in progress. Position and
    /// points are carried over untouched; the duplicate-player and
    /// eliminator-sequencing rules are re-checked against every *other*
    /// record in the game date.
    pub async fn update(
        &self,
        command: UpdateEliminationCommand,
    ) -> EngineResult<EliminationRecord> {
        let record = self.known_elimination(command.elimination_id).await?;
        let game_date = self.in_progress_game_date(record.game_date_id).await?;

        if let Some(existing) = self
            .eliminations
            .find_by_player_in_game_date(game_date.id, command.eliminated_player_id)
            .await?
        {
            if existing.id != record.id {
                return Err(EngineError::PlayerAlreadyEliminated {
                    player_id: command.eliminated_player_id,
                    game_date_id: game_date.id,
                });
            }
        }

        if let Some(eliminator_id) = command.eliminator_player_id {
            self.check_eliminator_sequence(
                game_date.id,
                eliminator_id,
                record.position().value(),
                record.id,
            )
            .await?;
        }

        self.known_player(command.eliminated_player_id).await?;
        if let Some(id) = command.eliminator_player_id {
            self.known_player(id).await?;
        }

        let updated =
            record.with_players(command.eliminated_player_id, command.eliminator_player_id);
        self.eliminations.update(&updated).await?;

        info!(
            elimination_id = command.elimination_id,
            game_date_id = game_date.id,
            player_id = command.eliminated_player_id,
            "Elimination players reassigned"
        );
        Ok(updated)
    }

    /// Delete the most recently registered record of a game date.
    ///
    /// Records must be undone in reverse registration order: a record is
    /// only deletable while no record with a lower position value (a later
    /// elimination in real time) exists in the same game date.
    pub async fn delete(&self, elimination_id: EliminationId) -> EngineResult<()> {
        let record = self.known_elimination(elimination_id).await?;
        let game_date = self.in_progress_game_date(record.game_date_id).await?;

        let position = record.position().value();
        if self
            .eliminations
            .exists_later_eliminations(game_date.id, position)
            .await?
        {
            return Err(EngineError::NotDeletable {
                elimination_id,
                position,
                game_date_id: game_date.id,
            });
        }

        self.eliminations.delete(elimination_id).await?;
        info!(
            elimination_id,
            game_date_id = game_date.id,
            position,
            "Elimination deleted"
        );
        Ok(())
    }

    /// All records of a game date, first eliminated first.
    pub async fn eliminations_for(
        &self,
        game_date_id: GameDateId,
    ) -> EngineResult<Vec<EliminationRecord>> {
        debug!(game_date_id, "Loading eliminations");
        Ok(self.eliminations.find_by_game_date(game_date_id).await?)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    async fn in_progress_game_date(&self, id: GameDateId) -> EngineResult<GameDate> {
        let game_date = self
            .game_dates
            .find_by_id(id)
            .await?
            .ok_or(EngineError::GameDateNotFound(id))?;
        if !game_date.is_in_progress() {
            return Err(EngineError::GameDateNotInProgress {
                game_date_id: id,
                status: game_date.status,
            });
        }
        Ok(game_date)
    }

    async fn known_player(&self, id: PlayerId) -> EngineResult<Player> {
        self.players
            .find_by_id(id)
            .await?
            .ok_or(EngineError::PlayerNotFound(id))
    }

    async fn known_elimination(&self, id: EliminationId) -> EngineResult<EliminationRecord> {
        self.eliminations
            .find_by_id(id)
            .await?
            .ok_or(EngineError::EliminationNotFound(id))
    }

    /// The eliminator must not have been eliminated earlier in real time
    /// than the event being recorded: their own recorded position value
    /// must not exceed the new position's value.
    async fn check_eliminator_sequence(
        &self,
        game_date_id: GameDateId,
        eliminator_id: PlayerId,
        position: u32,
        exclude_record: Option<EliminationId>,
    ) -> EngineResult<()> {
        if let Some(existing) = self
            .eliminations
            .find_by_player_in_game_date(game_date_id, eliminator_id)
            .await?
        {
            if existing.id == exclude_record {
                return Ok(());
            }
            let eliminator_position = existing.position().value();
            if eliminator_position > position {
                return Err(EngineError::InvalidEliminator {
                    eliminator_id,
                    eliminator_position,
                    position,
                    game_date_id,
                });
            }
        }
        Ok(())
    }

    /// Winner persistence effect plus the fire-and-forget announcement.
    async fn run_winner_effects(
        &self,
        game_date: &GameDate,
        winner: &Player,
        record: &EliminationRecord,
    ) -> EngineResult<()> {
        // The victory is dated to the session, not to when it was recorded
        self.players
            .update_last_victory_date(winner.id, game_date.scheduled_date)
            .await?;

        let notice = WinnerDeclaredNotice {
            player_id: winner.id,
            player_name: winner.full_name(),
            points: record.points().value(),
            game_date_id: game_date.id,
        };
        if let Err(e) = self.notifications.notify_winner_declared(notice).await {
            warn!(player_id = winner.id, error = %e, "Winner notification failed");
        }
        Ok(())
    }

    /// Synthesize and persist the winner's record, run its side effects,
    /// and close the game date.
    async fn auto_complete(
        &self,
        game_date: &GameDate,
        winner: &Player,
    ) -> EngineResult<EliminationRecord> {
        let winner_record = EliminationRecord::create_winner_elimination(
            game_date.id,
            winner.id,
            game_date.total_players(),
        )?;
        let saved = self.eliminations.save(&winner_record).await?;

        self.run_winner_effects(game_date, winner, &saved).await?;
        self.game_dates.mark_as_completed(game_date.id).await?;

        info!(
            game_date_id = game_date.id,
            winner_id = winner.id,
            points = saved.points().value(),
            "Game date auto-completed"
        );
        Ok(saved)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::{FailingNotifications, RecordingNotifications, RecordingParentChildStats};
    use chrono::Utc;
    use elimina_domain::{GameDateStatus, Player};
    use elimina_store::MemoryStore;

    struct Harness {
        service: EliminationService,
        store: Arc<MemoryStore>,
        notifications: Arc<RecordingNotifications>,
        stats: Arc<RecordingParentChildStats>,
    }

    fn harness_with_players(total_players: u32) -> Harness {
        let store = Arc::new(MemoryStore::new());
        let notifications = Arc::new(RecordingNotifications::new());
        let stats = Arc::new(RecordingParentChildStats::new());

        store.insert_game_date(GameDate {
            id: 1,
            tournament_id: 5,
            status: GameDateStatus::InProgress,
            player_ids: (1..=total_players as i64).collect(),
            scheduled_date: Utc::now(),
        });
        for id in 1..=total_players as i64 {
            store.insert_player(Player {
                id,
                first_name: format!("Player{id}"),
                last_name: "Test".to_string(),
            });
        }

        let service = EliminationService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            notifications.clone(),
            stats.clone(),
        );
        Harness { service, store, notifications, stats }
    }

    fn register(position: u32, eliminated: PlayerId, eliminator: Option<PlayerId>)
        -> RegisterEliminationCommand {
        RegisterEliminationCommand {
            game_date_id: 1,
            position,
            eliminated_player_id: eliminated,
            eliminator_player_id: eliminator,
        }
    }

    #[tokio::test]
    async fn test_register_persists_and_notifies() {
        let h = harness_with_players(10);

        let outcome = h.service.register(register(10, 3, Some(7))).await.unwrap();
        assert!(!outcome.auto_completed);
        assert_eq!(outcome.record.position().value(), 10);
        assert_eq!(outcome.record.points().value(), 1);
        assert_eq!(h.store.elimination_count(), 1);

        let notices = h.notifications.eliminated();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].player_id, 3);
        assert_eq!(notices[0].player_name, "Player3 Test");
        assert_eq!(notices[0].points, 1);

        let updates = h.stats.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].tournament_id, 5);
        assert_eq!(updates[0].eliminator_id, 7);
        assert_eq!(updates[0].eliminated_id, 3);
    }

    #[tokio::test]
    async fn test_register_without_eliminator_skips_stats() {
        let h = harness_with_players(10);
        h.service.register(register(10, 3, None)).await.unwrap();
        assert!(h.stats.updates().is_empty());
    }

    #[tokio::test]
    async fn test_register_requires_in_progress() {
        let h = harness_with_players(10);
        h.store.insert_game_date(GameDate {
            id: 2,
            tournament_id: 5,
            status: GameDateStatus::Scheduled,
            player_ids: (1..=10).collect(),
            scheduled_date: Utc::now(),
        });

        let err = h
            .service
            .register(RegisterEliminationCommand {
                game_date_id: 2,
                position: 10,
                eliminated_player_id: 3,
                eliminator_player_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            EngineError::GameDateNotInProgress { game_date_id: 2, status: GameDateStatus::Scheduled }
        ));
    }

    #[tokio::test]
    async fn test_register_unknown_game_date() {
        let h = harness_with_players(10);
        let err = h
            .service
            .register(RegisterEliminationCommand {
                game_date_id: 99,
                position: 10,
                eliminated_player_id: 3,
                eliminator_player_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::GameDateNotFound(99)));
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates() {
        let h = harness_with_players(10);
        h.service.register(register(10, 3, None)).await.unwrap();

        let same_player = h.service.register(register(9, 3, None)).await.unwrap_err();
        assert!(matches!(
            same_player,
            EngineError::PlayerAlreadyEliminated { player_id: 3, game_date_id: 1 }
        ));

        let same_position = h.service.register(register(10, 4, None)).await.unwrap_err();
        assert!(matches!(
            same_position,
            EngineError::PositionAlreadyTaken { position: 10, game_date_id: 1 }
        ));

        assert_eq!(h.store.elimination_count(), 1);
    }

    #[tokio::test]
    async fn test_eliminator_sequencing() {
        let h = harness_with_players(10);
        // Player 3 went out at position 10
        h.service.register(register(10, 3, Some(7))).await.unwrap();

        // Player 3 cannot eliminate at position 8: they left at 10, before 8
        let err = h.service.register(register(8, 4, Some(3))).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidEliminator {
                eliminator_id: 3,
                eliminator_position: 10,
                position: 8,
                ..
            }
        ));

        // A player who went out later in real time (lower position value)
        // may be credited for an earlier elimination: player 5 out at 4
        // can have eliminated the player finishing 8th.
        h.service.register(register(4, 5, None)).await.unwrap();
        let credited = h.service.register(register(8, 4, Some(5))).await;
        assert!(credited.is_ok());
    }

    #[tokio::test]
    async fn test_register_unknown_player_aborts_before_mutation() {
        let h = harness_with_players(10);
        let err = h.service.register(register(10, 99, None)).await.unwrap_err();
        assert!(matches!(err, EngineError::PlayerNotFound(99)));
        assert_eq!(h.store.elimination_count(), 0);

        let err = h.service.register(register(10, 3, Some(98))).await.unwrap_err();
        assert!(matches!(err, EngineError::PlayerNotFound(98)));
        assert_eq!(h.store.elimination_count(), 0);
    }

    #[tokio::test]
    async fn test_explicit_winner_registration() {
        let h = harness_with_players(10);
        let outcome = h.service.register(register(1, 6, None)).await.unwrap();

        assert!(outcome.record.is_winner());
        assert!(!outcome.auto_completed);
        assert!(h.store.last_victory_date(6).is_some());

        let winners = h.notifications.winners();
        assert_eq!(winners.len(), 1);
        assert_eq!(winners[0].player_id, 6);
        assert_eq!(winners[0].points, 17);
        assert!(h.notifications.eliminated().is_empty());
    }

    #[tokio::test]
    async fn test_victory_is_dated_to_the_session() {
        use chrono::TimeZone;

        let h = harness_with_players(10);
        let session = chrono::Utc.with_ymd_and_hms(2026, 3, 14, 20, 0, 0).unwrap();
        h.store.insert_game_date(GameDate {
            id: 2,
            tournament_id: 5,
            status: GameDateStatus::InProgress,
            player_ids: (1..=10).collect(),
            scheduled_date: session,
        });

        h.service
            .register(RegisterEliminationCommand {
                game_date_id: 2,
                position: 1,
                eliminated_player_id: 6,
                eliminator_player_id: None,
            })
            .await
            .unwrap();

        assert_eq!(h.store.last_victory_date(6), Some(session));
    }

    #[tokio::test]
    async fn test_runner_up_on_empty_roster_does_not_cascade() {
        let h = harness_with_players(10);
        // A game date row with no registered players; positions still
        // validate against the clamped minimum table size.
        h.store.insert_game_date(GameDate {
            id: 3,
            tournament_id: 5,
            status: GameDateStatus::InProgress,
            player_ids: vec![],
            scheduled_date: Utc::now(),
        });

        let outcome = h
            .service
            .register(RegisterEliminationCommand {
                game_date_id: 3,
                position: 2,
                eliminated_player_id: 3,
                eliminator_player_id: Some(7),
            })
            .await
            .unwrap();

        assert!(!outcome.auto_completed);
        assert!(outcome.winner_record.is_none());
        assert_eq!(h.store.game_date_status(3), Some(GameDateStatus::InProgress));
    }

    #[tokio::test]
    async fn test_notification_failure_is_swallowed() {
        let store = Arc::new(MemoryStore::new());
        store.insert_game_date(GameDate {
            id: 1,
            tournament_id: 5,
            status: GameDateStatus::InProgress,
            player_ids: (1..=10).collect(),
            scheduled_date: Utc::now(),
        });
        for id in 1..=10 {
            store.insert_player(Player {
                id,
                first_name: format!("Player{id}"),
                last_name: "Test".to_string(),
            });
        }
        let service = EliminationService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            Arc::new(FailingNotifications),
            Arc::new(RecordingParentChildStats::new()),
        );

        let outcome = service.register(register(10, 3, None)).await;
        assert!(outcome.is_ok());
        assert_eq!(store.elimination_count(), 1);
    }

    #[tokio::test]
    async fn test_runner_up_without_full_count_does_not_cascade() {
        let h = harness_with_players(10);
        // Only the runner-up is registered; eight other players still
        // have no record, so the winner must be registered explicitly.
        let outcome = h.service.register(register(2, 3, Some(7))).await.unwrap();
        assert!(!outcome.auto_completed);
        assert!(outcome.winner_record.is_none());
        assert_eq!(h.store.game_date_status(1), Some(GameDateStatus::InProgress));
    }

    #[tokio::test]
    async fn test_update_reassigns_players_only() {
        let h = harness_with_players(10);
        let registered = h.service.register(register(10, 3, Some(7))).await.unwrap();
        let id = registered.record.id.unwrap();

        let updated = h
            .service
            .update(UpdateEliminationCommand {
                elimination_id: id,
                eliminated_player_id: 4,
                eliminator_player_id: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.eliminated_player_id, 4);
        assert_eq!(updated.eliminator_player_id, None);
        assert_eq!(updated.position().value(), 10);
        assert_eq!(updated.points().value(), 1);
    }

    #[tokio::test]
    async fn test_update_revalidates_against_other_records() {
        let h = harness_with_players(10);
        let first = h.service.register(register(10, 3, None)).await.unwrap();
        h.service.register(register(9, 4, None)).await.unwrap();

        // Reassigning record 1 to player 4 collides with record 2
        let err = h
            .service
            .update(UpdateEliminationCommand {
                elimination_id: first.record.id.unwrap(),
                eliminated_player_id: 4,
                eliminator_player_id: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::PlayerAlreadyEliminated { player_id: 4, .. }));

        // Reassigning to itself is fine
        let ok = h
            .service
            .update(UpdateEliminationCommand {
                elimination_id: first.record.id.unwrap(),
                eliminated_player_id: 3,
                eliminator_player_id: Some(5),
            })
            .await;
        assert!(ok.is_ok());
    }

    #[tokio::test]
    async fn test_update_checks_eliminator_sequence() {
        let h = harness_with_players(10);
        h.service.register(register(10, 3, None)).await.unwrap();
        let target = h.service.register(register(9, 4, None)).await.unwrap();

        // Player 3 (out at 10) cannot become the eliminator of position 9
        let err = h
            .service
            .update(UpdateEliminationCommand {
                elimination_id: target.record.id.unwrap(),
                eliminated_player_id: 4,
                eliminator_player_id: Some(3),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidEliminator { eliminator_id: 3, .. }));
    }

    #[tokio::test]
    async fn test_delete_enforces_tail_rule() {
        let h = harness_with_players(10);
        let first = h.service.register(register(10, 3, None)).await.unwrap();
        let second = h.service.register(register(9, 4, None)).await.unwrap();

        // Position 10 is not the tail while position 9 exists
        let err = h.service.delete(first.record.id.unwrap()).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::NotDeletable { position: 10, game_date_id: 1, .. }
        ));

        // Deleting the true tail works and exposes the previous record
        h.service.delete(second.record.id.unwrap()).await.unwrap();
        h.service.delete(first.record.id.unwrap()).await.unwrap();
        assert_eq!(h.store.elimination_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_unknown_record() {
        let h = harness_with_players(10);
        let err = h.service.delete(42).await.unwrap_err();
        assert!(matches!(err, EngineError::EliminationNotFound(42)));
    }

    #[tokio::test]
    async fn test_query_orders_first_eliminated_first() {
        let h = harness_with_players(10);
        h.service.register(register(9, 4, None)).await.unwrap();
        h.service.register(register(10, 3, None)).await.unwrap();

        let records = h.service.eliminations_for(1).await.unwrap();
        let positions: Vec<u32> = records.iter().map(|r| r.position().value()).collect();
        assert_eq!(positions, vec![10, 9]);
    }
}
