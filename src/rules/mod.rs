//! Game rules.
//!
//! `RealEstateGame` composes the roster and the board and is the only
//! component that mutates them. Drivers (the autoplay simulation, tests,
//! an interactive front end) call its operations in sequence.

pub mod engine;

pub use engine::{GameResult, RealEstateGame, GO_WRAP_MODULUS, MAX_STEPS, MIN_STEPS};
