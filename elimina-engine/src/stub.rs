//! Stub port implementations for tests.
//!
//! Recording stubs capture every call for assertions; the failing stub
//! exercises the fire-and-forget path.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::ports::{
    EliminationStatsUpdate, NotificationService, ParentChildStatsService, PlayerEliminatedNotice,
    PortError, WinnerDeclaredNotice,
};

/// Notification stub that records every notice.
#[derive(Default)]
pub struct RecordingNotifications {
    eliminated: RwLock<Vec<PlayerEliminatedNotice>>,
    winners: RwLock<Vec<WinnerDeclaredNotice>>,
}

impl RecordingNotifications {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Elimination notices received so far.
    pub fn eliminated(&self) -> Vec<PlayerEliminatedNotice> {
        self.eliminated.read().unwrap().clone()
    }

    /// Winner notices received so far.
    pub fn winners(&self) -> Vec<WinnerDeclaredNotice> {
        self.winners.read().unwrap().clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotifications {
    async fn notify_player_eliminated(
        &self,
        notice: PlayerEliminatedNotice,
    ) -> Result<(), PortError> {
        self.eliminated.write().unwrap().push(notice);
        Ok(())
    }

    async fn notify_winner_declared(&self, notice: WinnerDeclaredNotice) -> Result<(), PortError> {
        self.winners.write().unwrap().push(notice);
        Ok(())
    }
}

/// Notification stub whose every call fails.
#[derive(Default)]
pub struct FailingNotifications;

#[async_trait]
impl NotificationService for FailingNotifications {
    async fn notify_player_eliminated(
        &self,
        _notice: PlayerEliminatedNotice,
    ) -> Result<(), PortError> {
        Err(PortError::Delivery("push gateway unreachable".to_string()))
    }

    async fn notify_winner_declared(
        &self,
        _notice: WinnerDeclaredNotice,
    ) -> Result<(), PortError> {
        Err(PortError::Delivery("push gateway unreachable".to_string()))
    }
}

/// Stats stub that records every update.
#[derive(Default)]
pub struct RecordingParentChildStats {
    updates: RwLock<Vec<EliminationStatsUpdate>>,
}

impl RecordingParentChildStats {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates received so far.
    pub fn updates(&self) -> Vec<EliminationStatsUpdate> {
        self.updates.read().unwrap().clone()
    }
}

#[async_trait]
impl ParentChildStatsService for RecordingParentChildStats {
    async fn update_stats(&self, update: EliminationStatsUpdate) -> Result<(), PortError> {
        self.updates.write().unwrap().push(update);
        Ok(())
    }
}
