//! In-memory store implementation
//!
//! Used for testing and development without a database. Thread-safe using
//! RwLock; unique constraints are emulated in `save` so tests exercise the
//! same failure modes a SQL backend would produce.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use elimina_domain::{
    EliminationId, EliminationRecord, GameDate, GameDateId, GameDateStatus, Player, PlayerId,
};

use crate::error::StoreError;
use crate::repository::{EliminationRepository, GameDateRepository, PlayerRepository};

/// In-memory store for testing
pub struct MemoryStore {
    eliminations: RwLock<HashMap<EliminationId, EliminationRecord>>,
    game_dates: RwLock<HashMap<GameDateId, GameDate>>,
    players: RwLock<HashMap<PlayerId, Player>>,
    victory_dates: RwLock<HashMap<PlayerId, DateTime<Utc>>>,
    elimination_seq: AtomicI64,
}

impl MemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            eliminations: RwLock::new(HashMap::new()),
            game_dates: RwLock::new(HashMap::new()),
            players: RwLock::new(HashMap::new()),
            victory_dates: RwLock::new(HashMap::new()),
            elimination_seq: AtomicI64::new(0),
        }
    }

    /// Seed a game date (test setup)
    pub fn insert_game_date(&self, game_date: GameDate) {
        self.game_dates.write().unwrap().insert(game_date.id, game_date);
    }

    /// Seed a player (test setup)
    pub fn insert_player(&self, player: Player) {
        self.players.write().unwrap().insert(player.id, player);
    }

    /// Number of stored elimination records
    pub fn elimination_count(&self) -> usize {
        self.eliminations.read().unwrap().len()
    }

    /// Current status of a game date (test inspection)
    pub fn game_date_status(&self, id: GameDateId) -> Option<GameDateStatus> {
        self.game_dates.read().unwrap().get(&id).map(|gd| gd.status)
    }

    /// Last recorded victory date of a player (test inspection)
    pub fn last_victory_date(&self, player_id: PlayerId) -> Option<DateTime<Utc>> {
        self.victory_dates.read().unwrap().get(&player_id).copied()
    }

    /// Clear all data (useful for test setup)
    pub fn clear(&self) {
        self.eliminations.write().unwrap().clear();
        self.game_dates.write().unwrap().clear();
        self.players.write().unwrap().clear();
        self.victory_dates.write().unwrap().clear();
        self.elimination_seq.store(0, Ordering::SeqCst);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EliminationRepository for MemoryStore {
    async fn save(&self, record: &EliminationRecord) -> Result<EliminationRecord, StoreError> {
        let mut eliminations = self.eliminations.write().unwrap();

        // Emulate the unique constraints a SQL backend enforces
        for existing in eliminations.values() {
            if existing.game_date_id != record.game_date_id {
                continue;
            }
            if existing.position() == record.position() {
                return Err(StoreError::duplicate(
                    "elimination position",
                    record.position().value().to_string(),
                ));
            }
            if existing.eliminated_player_id == record.eliminated_player_id {
                return Err(StoreError::duplicate(
                    "eliminated player",
                    record.eliminated_player_id.to_string(),
                ));
            }
        }

        let id = self.elimination_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut stored = record.clone();
        stored.id = Some(id);
        eliminations.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: EliminationId,
    ) -> Result<Option<EliminationRecord>, StoreError> {
        Ok(self.eliminations.read().unwrap().get(&id).cloned())
    }

    async fn find_by_game_date(
        &self,
        game_date_id: GameDateId,
    ) -> Result<Vec<EliminationRecord>, StoreError> {
        let mut records: Vec<EliminationRecord> = self
            .eliminations
            .read()
            .unwrap()
            .values()
            .filter(|r| r.game_date_id == game_date_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.position().value().cmp(&a.position().value()));
        Ok(records)
    }

    async fn exists_by_player_in_game_date(
        &self,
        game_date_id: GameDateId,
        player_id: PlayerId,
    ) -> Result<bool, StoreError> {
        Ok(self
            .eliminations
            .read()
            .unwrap()
            .values()
            .any(|r| r.game_date_id == game_date_id && r.eliminated_player_id == player_id))
    }

    async fn exists_by_position_in_game_date(
        &self,
        game_date_id: GameDateId,
        position: u32,
    ) -> Result<bool, StoreError> {
        Ok(self
            .eliminations
            .read()
            .unwrap()
            .values()
            .any(|r| r.game_date_id == game_date_id && r.position().value() == position))
    }

    async fn find_by_player_in_game_date(
        &self,
        game_date_id: GameDateId,
        player_id: PlayerId,
    ) -> Result<Option<EliminationRecord>, StoreError> {
        Ok(self
            .eliminations
            .read()
            .unwrap()
            .values()
            .find(|r| r.game_date_id == game_date_id && r.eliminated_player_id == player_id)
            .cloned())
    }

    async fn count_by_game_date(&self, game_date_id: GameDateId) -> Result<u32, StoreError> {
        Ok(self
            .eliminations
            .read()
            .unwrap()
            .values()
            .filter(|r| r.game_date_id == game_date_id)
            .count() as u32)
    }

    async fn update(&self, record: &EliminationRecord) -> Result<(), StoreError> {
        let id = record
            .id
            .ok_or_else(|| StoreError::Storage("cannot update an unsaved record".to_string()))?;
        let mut eliminations = self.eliminations.write().unwrap();
        if !eliminations.contains_key(&id) {
            return Err(StoreError::not_found("elimination", id.to_string()));
        }
        eliminations.insert(id, record.clone());
        Ok(())
    }

    async fn delete(&self, id: EliminationId) -> Result<(), StoreError> {
        let mut eliminations = self.eliminations.write().unwrap();
        if eliminations.remove(&id).is_none() {
            return Err(StoreError::not_found("elimination", id.to_string()));
        }
        Ok(())
    }

    async fn exists_later_eliminations(
        &self,
        game_date_id: GameDateId,
        position: u32,
    ) -> Result<bool, StoreError> {
        Ok(self
            .eliminations
            .read()
            .unwrap()
            .values()
            .any(|r| r.game_date_id == game_date_id && r.position().value() < position))
    }
}

#[async_trait]
impl GameDateRepository for MemoryStore {
    async fn find_by_id(&self, id: GameDateId) -> Result<Option<GameDate>, StoreError> {
        Ok(self.game_dates.read().unwrap().get(&id).cloned())
    }

    async fn mark_as_completed(&self, id: GameDateId) -> Result<(), StoreError> {
        let mut game_dates = self.game_dates.write().unwrap();
        let game_date = game_dates
            .get_mut(&id)
            .ok_or_else(|| StoreError::not_found("game date", id.to_string()))?;
        game_date.status = GameDateStatus::Completed;
        Ok(())
    }
}

#[async_trait]
impl PlayerRepository for MemoryStore {
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self.players.read().unwrap().get(&id).cloned())
    }

    async fn update_last_victory_date(
        &self,
        player_id: PlayerId,
        date: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        if !self.players.read().unwrap().contains_key(&player_id) {
            return Err(StoreError::not_found("player", player_id.to_string()));
        }
        self.victory_dates.write().unwrap().insert(player_id, date);
        Ok(())
    }
}
