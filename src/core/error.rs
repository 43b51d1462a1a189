//! Precondition violations raised by the engine.
//!
//! Business-rule failures (a purchase the player can't afford, a space that
//! is already owned) are not errors; they come back as `Ok(false)`.
//! Everything here is a caller mistake: the call is rejected and no state
//! is touched.

use derive_more::{Display, Error};

/// Engine error for rejected calls.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// No player is registered under this name.
    #[display("Unknown player: {name}")]
    UnknownPlayer {
        /// The name that was looked up.
        name: String,
    },

    /// A move must be a single die roll.
    #[display("Invalid step count {steps}: must be between 1 and 6")]
    InvalidSteps {
        /// The rejected step count.
        steps: u32,
    },

    /// The rent list must cover every property on the board.
    #[display("Expected {expected} rent amounts, got {actual}")]
    WrongRentCount {
        /// Number of properties on the board.
        expected: usize,
        /// Number of rents supplied.
        actual: usize,
    },

    /// A rent whose purchase price doesn't fit in an `i64`.
    #[display("Rent {rent} for property {property} is out of range")]
    RentOutOfRange {
        /// 1-based property number in board order.
        property: usize,
        /// The rejected rent.
        rent: i64,
    },

    /// Movement and purchases need a board.
    #[display("Board has not been created")]
    BoardNotCreated,

    /// The board is laid out once per game.
    #[display("Board has already been created")]
    BoardAlreadyCreated,
}

impl GameError {
    /// Shorthand for an unknown player lookup.
    pub fn unknown_player(name: impl Into<String>) -> Self {
        Self::UnknownPlayer { name: name.into() }
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
