//! Seeded autoplay.
//!
//! Plays full games without a human at the table:
//! - Players take turns in seating order, skipping anyone who is out
//! - Each turn rolls a die, moves, and offers the landed-on space to a
//!   `BuyPolicy`
//! - The game ends when one player is left solvent or a round cap is hit
//!
//! Same seed and config, same game.

mod simulation;

pub use simulation::{BuyPolicy, Simulation, SimulationBuilder, SimulationOutcome};
