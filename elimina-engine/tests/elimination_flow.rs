//! End-to-end elimination flows against the in-memory store.

use std::sync::Arc;

use chrono::Utc;
use elimina_domain::{
    GameDate, GameDateStatus, Participation, Player, PlayerId, PlayerInput, RankingCalculator,
    TournamentInfo,
};
use elimina_engine::stub::{RecordingNotifications, RecordingParentChildStats};
use elimina_engine::{EliminationService, EngineError, RegisterEliminationCommand};
use elimina_store::MemoryStore;

struct Fixture {
    service: EliminationService,
    store: Arc<MemoryStore>,
    notifications: Arc<RecordingNotifications>,
}

fn fixture(total_players: u32) -> Fixture {
    let store = Arc::new(MemoryStore::new());
    let notifications = Arc::new(RecordingNotifications::new());

    store.insert_game_date(GameDate {
        id: 1,
        tournament_id: 28,
        status: GameDateStatus::InProgress,
        player_ids: (1..=total_players as i64).collect(),
        scheduled_date: Utc::now(),
    });
    for id in 1..=total_players as i64 {
        store.insert_player(Player {
            id,
            first_name: format!("Jugador{id}"),
            last_name: format!("Apellido{id}"),
        });
    }

    let service = EliminationService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        notifications.clone(),
        Arc::new(RecordingParentChildStats::new()),
    );
    Fixture { service, store, notifications }
}

fn command(
    position: u32,
    eliminated: PlayerId,
    eliminator: Option<PlayerId>,
) -> RegisterEliminationCommand {
    RegisterEliminationCommand {
        game_date_id: 1,
        position,
        eliminated_player_id: eliminated,
        eliminator_player_id: eliminator,
    }
}

/// Registers positions 9 down to 3 of a 9-player date, leaving players 1
/// and 2 alive. Player 1 does all the eliminating.
async fn play_down_to_heads_up(f: &Fixture) {
    for position in (3..=9).rev() {
        f.service
            .register(command(position, position as PlayerId, Some(1)))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_full_game_auto_completes() {
    let f = fixture(9);
    play_down_to_heads_up(&f).await;
    assert_eq!(f.store.game_date_status(1), Some(GameDateStatus::InProgress));

    // Heads-up: player 1 knocks out player 2 and becomes the winner
    let outcome = f.service.register(command(2, 2, Some(1))).await.unwrap();

    assert!(outcome.auto_completed);
    let winner = outcome.winner_record.expect("winner record synthesized");
    assert!(winner.is_winner());
    assert_eq!(winner.eliminated_player_id, 1);
    assert_eq!(winner.eliminator_player_id, Some(1));
    assert_eq!(winner.points().value(), 15);

    // Every slot of the 9-player date now has a record and the date closed
    assert_eq!(f.store.elimination_count(), 9);
    assert_eq!(f.store.game_date_status(1), Some(GameDateStatus::Completed));
    assert!(f.store.last_victory_date(1).is_some());

    let winners = f.notifications.winners();
    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].player_id, 1);
    assert_eq!(winners[0].points, 15);
    assert_eq!(f.notifications.eliminated().len(), 8);
}

#[tokio::test]
async fn test_no_cascade_when_eliminator_unknown() {
    let f = fixture(9);
    play_down_to_heads_up(&f).await;

    // Runner-up went out blinds-out: nobody can be presumed winner
    let outcome = f.service.register(command(2, 2, None)).await.unwrap();

    assert!(!outcome.auto_completed);
    assert!(outcome.winner_record.is_none());
    assert_eq!(f.store.elimination_count(), 8);
    assert_eq!(f.store.game_date_status(1), Some(GameDateStatus::InProgress));

    // The winner is then registered explicitly and scores first place
    let winner = f.service.register(command(1, 1, None)).await.unwrap();
    assert_eq!(winner.record.points().value(), 15);
    assert!(f.store.last_victory_date(1).is_some());
}

#[tokio::test]
async fn test_registration_order_is_undone_in_reverse() {
    let f = fixture(9);
    let ninth = f.service.register(command(9, 9, Some(1))).await.unwrap();
    let eighth = f.service.register(command(8, 8, Some(1))).await.unwrap();
    let seventh = f.service.register(command(7, 7, Some(2))).await.unwrap();

    // Only the most recent elimination (lowest position value) is deletable
    let blocked = f.service.delete(ninth.record.id.unwrap()).await.unwrap_err();
    assert!(matches!(blocked, EngineError::NotDeletable { position: 9, .. }));
    let blocked = f.service.delete(eighth.record.id.unwrap()).await.unwrap_err();
    assert!(matches!(blocked, EngineError::NotDeletable { position: 8, .. }));

    f.service.delete(seventh.record.id.unwrap()).await.unwrap();

    // Deleting the tail exposes the next record
    f.service.delete(eighth.record.id.unwrap()).await.unwrap();
    f.service.delete(ninth.record.id.unwrap()).await.unwrap();
    assert_eq!(f.store.elimination_count(), 0);
}

#[tokio::test]
async fn test_slot_conflicts_across_a_running_date() {
    let f = fixture(9);
    f.service.register(command(9, 9, Some(1))).await.unwrap();

    let repeat_position = f.service.register(command(9, 8, Some(1))).await.unwrap_err();
    assert!(matches!(repeat_position, EngineError::PositionAlreadyTaken { position: 9, .. }));

    let repeat_player = f.service.register(command(8, 9, Some(1))).await.unwrap_err();
    assert!(matches!(repeat_player, EngineError::PlayerAlreadyEliminated { player_id: 9, .. }));

    let ghost_eliminator = f.service.register(command(8, 8, Some(9))).await.unwrap_err();
    assert!(matches!(
        ghost_eliminator,
        EngineError::InvalidEliminator { eliminator_id: 9, eliminator_position: 9, position: 8, .. }
    ));

    assert_eq!(f.store.elimination_count(), 1);
}

#[tokio::test]
async fn test_ranking_built_from_registered_eliminations() {
    let f = fixture(9);
    play_down_to_heads_up(&f).await;
    f.service.register(command(2, 2, Some(1))).await.unwrap();

    // Turn the stored records into ranking input for date 1
    let records = f.service.eliminations_for(1).await.unwrap();
    let inputs: Vec<PlayerInput> = records
        .iter()
        .map(|record| PlayerInput {
            player: Player {
                id: record.eliminated_player_id,
                first_name: format!("Jugador{}", record.eliminated_player_id),
                last_name: format!("Apellido{}", record.eliminated_player_id),
            },
            participations: vec![Participation {
                date_number: 1,
                played: true,
                position: Some(record.position().value()),
                points: record.points().value(),
            }],
        })
        .collect();

    let tournament = TournamentInfo {
        id: 28,
        name: "Torneo 28".to_string(),
        number: 28,
        completed_dates: 1,
    };
    let ranking = RankingCalculator::calculate(tournament, &inputs);

    // Standings follow the finishing order of the single date
    let leader = ranking.get_leader().expect("winner leads");
    assert_eq!(leader.player.id, 1);
    assert_eq!(leader.score.total_points(), 15);

    let podium = ranking.get_podium();
    let podium_ids: Vec<PlayerId> = podium.iter().map(|r| r.player.id).collect();
    assert_eq!(podium_ids, vec![1, 2, 3]);

    let last = ranking.get_player_ranking(9).expect("first eliminated present");
    assert_eq!(last.position(), 9);
    assert_eq!(last.score.total_points(), 1);

    // One completed date is far from the drop threshold
    assert!(!ranking.is_elimina2_applied());
}
