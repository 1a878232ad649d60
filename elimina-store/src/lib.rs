//! ELIMINA Storage Layer
//!
//! Repository ports for eliminations, game dates, and players, plus an
//! in-memory implementation for tests and development.
//!
//! # Architecture
//!
//! - **Repository traits**: Define the storage interface (ports)
//! - **In-memory store**: Fast implementation for testing; a SQL-backed
//!   adapter implements the same traits in the application that embeds
//!   the engine

#![warn(clippy::all)]

// Modules
mod error;
mod memory;
mod repository;

// Re-exports
pub use error::StoreError;
pub use memory::MemoryStore;
pub use repository::{EliminationRepository, GameDateRepository, PlayerRepository};
