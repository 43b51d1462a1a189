//! Core game types: players, spaces, the board, configuration, events,
//! errors and dice.
//!
//! These are passive records. All rules live in `rules::RealEstateGame`.

pub mod error;
pub mod player;
pub mod space;
pub mod board;
pub mod config;
pub mod event;
pub mod rng;

pub use error::{GameError, Result};
pub use player::{Player, PlayerId, PlayerRoster};
pub use space::{Ownership, Space, PRICE_MULTIPLIER};
pub use board::{Board, BOARD_SIZE, GO_INDEX, PROPERTY_COUNT, PROPERTY_NAMES};
pub use config::GameConfig;
pub use event::{EventRecord, GameEvent};
pub use rng::{GameRng, GameRngState};
