//! Deterministic Snake simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cell per tick, driven by the host's timer
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod board;
pub mod rng;
pub mod session;
pub mod state;
pub mod tick;

pub use board::{Board, Cell};
pub use rng::{RandomSource, seeded_rng};
pub use session::{Session, SessionObserver};
pub use state::{Collision, Direction, Food, GameEvent, GamePhase, GameState};
pub use tick::{TickOutcome, spawn_food, tick};
