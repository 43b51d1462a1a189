//! Game configuration.
//!
//! A `GameConfig` carries everything needed to set up a table: the pass-GO
//! bonus, one rent per property, the starting balance and the seating
//! order. Defaults reproduce the reference three-player game.

use serde::{Deserialize, Serialize};

/// Money credited for passing or landing on GO.
pub const DEFAULT_PASS_GO_BONUS: i64 = 50;

/// Balance each player starts with.
pub const DEFAULT_STARTING_BALANCE: i64 = 290;

/// Rents in board order, Amsterdam through Zagreb.
#[rustfmt::skip]
pub const DEFAULT_RENTS: [i64; 24] = [
    50, 50, 50, 75, 75, 75, 100, 100, 100, 150, 150, 150,
    200, 200, 200, 250, 250, 250, 300, 300, 300, 350, 350, 350,
];

/// Seating used when no players are named.
pub const DEFAULT_PLAYERS: [&str; 3] = ["PowerGirl", "AstroBoy", "BlueLagoon"];

/// Complete table setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Bonus for passing or landing on GO.
    pub pass_go_bonus: i64,

    /// One rent per property. Must hold exactly 24 entries to build a board.
    pub rent_amounts: Vec<i64>,

    /// Balance every player starts with.
    pub starting_balance: i64,

    /// Player names in seating order.
    pub players: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pass_go_bonus: DEFAULT_PASS_GO_BONUS,
            rent_amounts: DEFAULT_RENTS.to_vec(),
            starting_balance: DEFAULT_STARTING_BALANCE,
            players: DEFAULT_PLAYERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl GameConfig {
    /// Reference configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pass-GO bonus.
    #[must_use]
    pub fn with_pass_go_bonus(mut self, bonus: i64) -> Self {
        self.pass_go_bonus = bonus;
        self
    }

    /// Replace the rent list.
    #[must_use]
    pub fn with_rents(mut self, rents: impl Into<Vec<i64>>) -> Self {
        self.rent_amounts = rents.into();
        self
    }

    /// Set the starting balance.
    #[must_use]
    pub fn with_starting_balance(mut self, balance: i64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Replace the seating order.
    #[must_use]
    pub fn with_players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players = players.into_iter().map(Into::into).collect();
        self
    }

    /// Add one more seat.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }
}
