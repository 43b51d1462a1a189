//! Autoplay driver.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::core::board::GO_INDEX;
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::rng::{GameRng, GameRngState};
use crate::rules::RealEstateGame;

/// When an autoplayed player buys the space they land on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuyPolicy {
    /// Try every purchase; the engine still enforces the price rule.
    Always,
    /// Never buy.
    Never,
    /// Buy only if at least this much is left afterwards.
    Reserve(i64),
}

impl BuyPolicy {
    /// Should a player with `balance` try to buy at `price`?
    #[must_use]
    pub fn wants(&self, balance: i64, price: i64) -> bool {
        match *self {
            BuyPolicy::Always => true,
            BuyPolicy::Never => false,
            BuyPolicy::Reserve(reserve) => balance.saturating_sub(price) >= reserve,
        }
    }
}

/// How an autoplayed game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Last solvent player, or `None` if the round cap was hit first.
    pub winner: Option<String>,
    /// Rounds started.
    pub rounds: u32,
    /// Turns taken by active players.
    pub turns: u32,
}

/// Builder for a `Simulation`.
pub struct SimulationBuilder {
    config: GameConfig,
    policy: BuyPolicy,
    max_rounds: u32,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            policy: BuyPolicy::Always,
            max_rounds: 1_000,
        }
    }
}

impl SimulationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn policy(mut self, policy: BuyPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set up the table. Fails if the config can't produce a board.
    pub fn build(self, seed: u64) -> Result<Simulation> {
        let game = RealEstateGame::from_config(&self.config)?;
        Ok(Simulation {
            game,
            rng: GameRng::new(seed),
            policy: self.policy,
            max_rounds: self.max_rounds,
            rounds: 0,
            turns: 0,
        })
    }
}

/// A game played by dice and a buy policy.
#[derive(Clone, Debug)]
pub struct Simulation {
    game: RealEstateGame,
    rng: GameRng,
    policy: BuyPolicy,
    max_rounds: u32,
    rounds: u32,
    turns: u32,
}

impl Simulation {
    /// The game being played.
    pub fn game(&self) -> &RealEstateGame {
        &self.game
    }

    /// Dice state, for checkpointing.
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Play one round in seating order. Returns the winner as soon as
    /// there is one.
    #[instrument(skip(self), fields(round = self.rounds + 1))]
    pub fn play_round(&mut self) -> Result<Option<String>> {
        self.rounds += 1;

        let names: Vec<String> = self.game.players().names().map(String::from).collect();
        for name in &names {
            if self.game.player(name).is_some_and(|p| p.is_broke()) {
                continue;
            }
            self.take_turn(name)?;

            if let Some(winner) = self.game.check_game_over() {
                return Ok(Some(winner));
            }
        }

        Ok(None)
    }

    /// Play until someone wins or the round cap is reached.
    pub fn run(&mut self) -> Result<SimulationOutcome> {
        let mut winner = self.game.check_game_over();

        while winner.is_none() && self.rounds < self.max_rounds {
            winner = self.play_round()?;
        }

        info!(?winner, rounds = self.rounds, turns = self.turns, "simulation finished");
        Ok(SimulationOutcome {
            winner,
            rounds: self.rounds,
            turns: self.turns,
        })
    }

    fn take_turn(&mut self, name: &str) -> Result<()> {
        self.turns += 1;

        let roll = self.rng.roll_die();
        self.game.move_player(name, roll)?;

        let position = self.game.get_player_position(name)?;
        debug!(name, roll, position, "turn");
        if position == GO_INDEX {
            return Ok(());
        }

        let balance = self.game.get_player_balance(name)?;
        let wants = self
            .game
            .space_at(position)
            .is_some_and(|s| s.is_purchasable() && self.policy.wants(balance, s.purchase_price()));

        if wants {
            self.game.buy_space(name)?;
        }
        Ok(())
    }
}
