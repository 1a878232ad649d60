//! Elimination use cases for the tournament engine.
//!
//! This crate wires the pure domain rules in `elimina-domain` to the
//! persistence traits in `elimina-store` and drives the outbound side
//! effects (notifications, eliminator statistics) through ports. The
//! entry point is [`EliminationService`].

#![warn(clippy::all)]

pub mod error;
pub mod ports;
pub mod service;
pub mod stub;

pub use error::{EngineError, EngineResult};
pub use ports::{
    EliminationStatsUpdate, NotificationService, ParentChildStatsService, PlayerEliminatedNotice,
    PortError, WinnerDeclaredNotice,
};
pub use service::{
    EliminationService, RegisterEliminationCommand, RegistrationOutcome, UpdateEliminationCommand,
};
