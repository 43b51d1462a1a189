//! # real-estate
//!
//! A simplified Monopoly-style board game engine.
//!
//! Players move around a fixed 25-space board (GO plus 24 properties), buy
//! unowned properties, pay rent to owners, and drop out when they can't
//! pay. The last player with money wins.
//!
//! ## Design
//!
//! - **One owner of state**: `RealEstateGame` holds every player and space.
//!   Records never point at each other; a space names its owner by
//!   `PlayerId`, resolved through the roster.
//!
//! - **Errors vs. outcomes**: bad calls (unknown player, illegal step count,
//!   wrong rent list) return `GameError`. Failed purchases and eliminations
//!   are ordinary game outcomes.
//!
//! - **Replayable**: every transition lands in an `im::Vector` history and
//!   autoplay dice come from a seeded ChaCha8 stream.
//!
//! ## Example
//!
//! ```
//! use real_estate::rules::RealEstateGame;
//! use real_estate::core::config::DEFAULT_RENTS;
//!
//! let mut game = RealEstateGame::new();
//! game.create_spaces(50, &DEFAULT_RENTS).unwrap();
//! game.create_player("A", 290);
//!
//! game.move_player("A", 1).unwrap();
//! assert!(game.buy_space("A").unwrap());
//! assert_eq!(game.get_player_balance("A").unwrap(), 40);
//! ```
//!
//! ## Modules
//!
//! - `core`: players, spaces, board, configuration, events, errors, dice
//! - `rules`: the `RealEstateGame` engine
//! - `sim`: seeded autoplay

pub mod core;
pub mod rules;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Board, EventRecord, GameConfig, GameError, GameEvent, GameRng, GameRngState, Ownership,
    Player, PlayerId, PlayerRoster, Space,
};

pub use crate::rules::{GameResult, RealEstateGame};

pub use crate::sim::{BuyPolicy, Simulation, SimulationBuilder, SimulationOutcome};
