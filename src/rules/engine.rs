//! The game engine.
//!
//! `RealEstateGame` owns the roster and the board and applies every rule:
//! movement with the pass-GO bonus, rent, purchases, elimination and the
//! game-over check. All operations are synchronous in-memory mutations.
//! A rejected call returns `Err` before touching any state.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, info, instrument, warn};

use crate::core::board::{Board, BOARD_SIZE};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::core::event::{EventRecord, GameEvent};
use crate::core::player::{Player, PlayerId, PlayerRoster};
use crate::core::space::Space;

/// Smallest legal move.
pub const MIN_STEPS: u32 = 1;

/// Largest legal move.
pub const MAX_STEPS: u32 = 6;

/// Modulus used to decide whether a move wrapped past GO.
///
/// This is fixed at the standard board size and does not follow
/// `Board::len()`. The two only differ on a board that can't be built.
pub const GO_WRAP_MODULUS: usize = BOARD_SIZE;

/// Outcome of the game-over check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Exactly one player still has money.
    Winner(PlayerId),
    /// More than one player is solvent, or none is.
    InProgress,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameResult::Winner(_))
    }
}

/// A table of players around one board.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RealEstateGame {
    players: PlayerRoster,
    board: Option<Board>,
    pass_go_bonus: i64,
    history: Vector<EventRecord>,
    next_sequence: u32,
}

impl RealEstateGame {
    /// An empty table: no board, no players.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the board and seat every configured player.
    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let mut game = Self::new();
        game.create_spaces(config.pass_go_bonus, &config.rent_amounts)?;
        for name in &config.players {
            game.create_player(name.as_str(), config.starting_balance);
        }
        Ok(game)
    }

    // === Setup ===

    /// Lay out GO and the 24 properties and set the pass-GO bonus.
    ///
    /// Fails if `rent_amounts` doesn't have exactly one entry per property,
    /// or if the board already exists.
    #[instrument(skip(self, rent_amounts), fields(rents = rent_amounts.len()))]
    pub fn create_spaces(&mut self, pass_go_bonus: i64, rent_amounts: &[i64]) -> Result<()> {
        if self.board.is_some() {
            warn!("board already created");
            return Err(GameError::BoardAlreadyCreated);
        }

        let board = Board::new(rent_amounts).inspect_err(|err| warn!(%err, "rejected board"))?;
        debug!(spaces = board.len(), "board created");

        self.board = Some(board);
        self.pass_go_bonus = pass_go_bonus;
        Ok(())
    }

    /// Seat a player on GO. Reusing a name replaces that player's record.
    #[instrument(skip(self))]
    pub fn create_player(&mut self, name: &str, initial_balance: i64) -> PlayerId {
        let id = self.players.insert(Player::new(name, initial_balance));
        debug!(%id, "player joined");
        self.record(GameEvent::PlayerJoined { player: id, balance: initial_balance });
        id
    }

    // === Queries ===

    pub fn get_player_balance(&self, name: &str) -> Result<i64> {
        Ok(self.require_player(name)?.balance())
    }

    pub fn get_player_position(&self, name: &str) -> Result<usize> {
        Ok(self.require_player(name)?.position())
    }

    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.by_name(name)
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRoster {
        &self.players
    }

    /// `None` until `create_spaces` has run.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub fn space_at(&self, index: usize) -> Option<&Space> {
        self.board.as_ref().and_then(|b| b.get(index))
    }

    #[must_use]
    pub fn pass_go_bonus(&self) -> i64 {
        self.pass_go_bonus
    }

    /// Every transition applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    // === Turn actions ===

    /// Move a player `steps` spaces and settle whatever they land on.
    ///
    /// A player with no money left doesn't move. Wrapping past the end of
    /// the board, or landing on GO, pays the bonus before the position
    /// changes. Landing on someone else's property charges rent:
    /// - more than the rent: pay it
    /// - less than the rent: hand over everything and drop out
    /// - exactly the rent: nothing happens
    #[instrument(skip(self))]
    pub fn move_player(&mut self, name: &str, steps: u32) -> Result<()> {
        if !(MIN_STEPS..=MAX_STEPS).contains(&steps) {
            warn!("rejected move");
            return Err(GameError::InvalidSteps { steps });
        }
        let id = self.require_id(name)?;

        if self.players[id].is_broke() {
            debug!("player is out, not moving");
            return Ok(());
        }

        let board_len = self.board.as_ref().ok_or(GameError::BoardNotCreated)?.len();

        let from = self.players[id].position();
        let target = from + steps as usize;

        if from > target % GO_WRAP_MODULUS {
            let bonus = self.pass_go_bonus;
            self.players[id].credit(bonus);
            debug!(bonus, "passed GO");
            self.record(GameEvent::PassedGo { player: id, bonus });
        }

        let to = target % board_len;
        self.players[id].move_to(to);
        self.record(GameEvent::Moved { player: id, from, to });

        self.settle_landing(id, to);
        Ok(())
    }

    /// Try to buy the space the player is standing on.
    ///
    /// Succeeds only when the space is for sale and the balance is strictly
    /// greater than the price. Returns `Ok(false)` otherwise, with no change.
    #[instrument(skip(self))]
    pub fn buy_space(&mut self, name: &str) -> Result<bool> {
        let id = self.require_id(name)?;
        let board = self.board.as_mut().ok_or(GameError::BoardNotCreated)?;

        let position = self.players[id].position();
        let Some(space) = board.get_mut(position) else {
            return Ok(false);
        };

        let price = space.purchase_price();
        if self.players[id].balance() <= price || !space.sell_to(id) {
            debug!(position, price, "purchase declined");
            return Ok(false);
        }

        self.players[id].debit(price);
        debug!(space = space.name(), price, "purchased");
        self.record(GameEvent::Purchased { player: id, position, price });
        Ok(true)
    }

    // === End of game ===

    /// Name of the only player with money left, if there is exactly one.
    ///
    /// A lone registered player with a positive balance wins immediately.
    #[instrument(skip(self))]
    pub fn check_game_over(&self) -> Option<String> {
        match self.result() {
            GameResult::Winner(id) => {
                let name = self.players[id].name().to_string();
                info!(winner = %name, "game over");
                Some(name)
            }
            GameResult::InProgress => None,
        }
    }

    /// Typed form of `check_game_over`.
    #[must_use]
    pub fn result(&self) -> GameResult {
        let mut broke = 0;
        let mut solvent = None;

        for (id, player) in self.players.iter() {
            if player.is_broke() {
                broke += 1;
            } else {
                solvent = Some(id);
            }
        }

        match solvent {
            Some(id) if self.players.len() == broke + 1 => GameResult::Winner(id),
            _ => GameResult::InProgress,
        }
    }

    // === Internals ===

    fn settle_landing(&mut self, payer: PlayerId, position: usize) {
        let Some(space) = self.space_at(position) else {
            return;
        };
        // GO and unsold properties have no owner.
        let Some(owner) = space.owner() else {
            return;
        };
        if owner == payer {
            return;
        }

        let rent = space.rent();
        let balance = self.players[payer].balance();

        match balance.cmp(&rent) {
            Ordering::Greater => {
                self.players[owner].credit(rent);
                self.players[payer].debit(rent);
                debug!(%payer, %owner, rent, "rent paid");
                self.record(GameEvent::RentPaid { payer, owner, amount: rent });
            }
            Ordering::Less => {
                self.players[owner].credit(balance);
                debug!(%payer, %owner, amount = balance, rent, "rent shortfall");
                self.record(GameEvent::RentPaid { payer, owner, amount: balance });
                self.eliminate(payer);
            }
            Ordering::Equal => {
                debug!(%payer, %owner, rent, "balance equals rent, nothing paid");
                self.record(GameEvent::RentWaived { payer, owner, rent });
            }
        }
    }

    fn eliminate(&mut self, id: PlayerId) {
        let released = self.board.as_mut().map_or(0, |b| b.release_all(id));
        self.players[id].eliminate();
        info!(player = self.players[id].name(), released, "player eliminated");
        self.record(GameEvent::Eliminated { player: id, released });
    }

    fn require_id(&self, name: &str) -> Result<PlayerId> {
        self.players.id_of(name).ok_or_else(|| {
            warn!(name, "unknown player");
            GameError::unknown_player(name)
        })
    }

    fn require_player(&self, name: &str) -> Result<&Player> {
        self.require_id(name).map(|id| &self.players[id])
    }

    fn record(&mut self, event: GameEvent) {
        self.history.push_back(EventRecord::new(self.next_sequence, event));
        self.next_sequence += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DEFAULT_RENTS;

    fn game_with(players: &[(&str, i64)]) -> RealEstateGame {
        let mut game = RealEstateGame::new();
        game.create_spaces(50, &DEFAULT_RENTS).unwrap();
        for (name, balance) in players {
            game.create_player(name, *balance);
        }
        game
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(result.is_over());

        assert!(!GameResult::InProgress.is_winner(PlayerId::new(0)));
        assert!(!GameResult::InProgress.is_over());
    }

    #[test]
    fn test_move_validates_steps_first() {
        let mut game = game_with(&[("A", 100)]);

        assert_eq!(game.move_player("A", 0), Err(GameError::InvalidSteps { steps: 0 }));
        assert_eq!(game.move_player("A", 7), Err(GameError::InvalidSteps { steps: 7 }));
        assert_eq!(
            game.move_player("nobody", 9),
            Err(GameError::InvalidSteps { steps: 9 })
        );
        assert_eq!(game.move_player("nobody", 3), Err(GameError::unknown_player("nobody")));
        assert_eq!(game.get_player_position("A"), Ok(0));
    }

    #[test]
    fn test_move_without_board() {
        let mut game = RealEstateGame::new();
        game.create_player("A", 100);
        game.create_player("Broke", 0);

        assert_eq!(game.move_player("A", 2), Err(GameError::BoardNotCreated));
        assert_eq!(game.buy_space("A"), Err(GameError::BoardNotCreated));
        // A broke player never reaches the board.
        assert_eq!(game.move_player("Broke", 2), Ok(()));
    }

    #[test]
    fn test_create_spaces_twice_rejected() {
        let mut game = game_with(&[]);
        assert_eq!(
            game.create_spaces(100, &DEFAULT_RENTS),
            Err(GameError::BoardAlreadyCreated)
        );
        assert_eq!(game.pass_go_bonus(), 50);
        assert_eq!(game.board().map(Board::len), Some(25));
    }

    #[test]
    fn test_wrap_pays_bonus_once() {
        let mut game = game_with(&[("A", 100)]);
        for _ in 0..4 {
            game.move_player("A", 6).unwrap();
        }
        assert_eq!(game.get_player_position("A"), Ok(24));
        assert_eq!(game.get_player_balance("A"), Ok(100));

        game.move_player("A", 3).unwrap();
        assert_eq!(game.get_player_position("A"), Ok(2));
        assert_eq!(game.get_player_balance("A"), Ok(150));
    }

    #[test]
    fn test_landing_on_go_pays_bonus() {
        let mut game = game_with(&[("A", 100)]);
        for steps in [6, 6, 6, 5] {
            game.move_player("A", steps).unwrap();
        }
        assert_eq!(game.get_player_position("A"), Ok(23));

        game.move_player("A", 2).unwrap();
        assert_eq!(game.get_player_position("A"), Ok(0));
        assert_eq!(game.get_player_balance("A"), Ok(150));
    }

    #[test]
    fn test_rent_branches() {
        // Amsterdam rent 50, price 250.
        let mut game = game_with(&[("Owner", 300), ("Rich", 80), ("Even", 50), ("Poor", 20)]);
        game.move_player("Owner", 1).unwrap();
        assert_eq!(game.buy_space("Owner"), Ok(true));
        assert_eq!(game.get_player_balance("Owner"), Ok(50));

        game.move_player("Rich", 1).unwrap();
        assert_eq!(game.get_player_balance("Rich"), Ok(30));
        assert_eq!(game.get_player_balance("Owner"), Ok(100));

        game.move_player("Even", 1).unwrap();
        assert_eq!(game.get_player_balance("Even"), Ok(50));
        assert_eq!(game.get_player_balance("Owner"), Ok(100));
        assert!(game.player("Even").unwrap().is_active());

        game.move_player("Poor", 1).unwrap();
        assert_eq!(game.get_player_balance("Poor"), Ok(0));
        assert_eq!(game.get_player_balance("Owner"), Ok(120));
        assert!(!game.player("Poor").unwrap().is_active());
    }

    #[test]
    fn test_owner_pays_no_rent_on_own_space() {
        let mut game = game_with(&[("A", 1000)]);
        game.move_player("A", 1).unwrap();
        game.buy_space("A").unwrap();
        let before = game.get_player_balance("A").unwrap();

        for _ in 0..5 {
            game.move_player("A", 5).unwrap();
        }
        // 25 steps: once around, back on Amsterdam.
        assert_eq!(game.get_player_position("A"), Ok(1));
        assert_eq!(game.get_player_balance("A"), Ok(before + 50));
    }

    #[test]
    fn test_buy_requires_strictly_more_than_price() {
        let mut game = game_with(&[("Exact", 250), ("More", 251)]);
        game.move_player("Exact", 1).unwrap();
        game.move_player("More", 1).unwrap();

        assert_eq!(game.buy_space("Exact"), Ok(false));
        assert_eq!(game.get_player_balance("Exact"), Ok(250));
        assert!(game.space_at(1).unwrap().is_purchasable());

        assert_eq!(game.buy_space("More"), Ok(true));
        assert_eq!(game.get_player_balance("More"), Ok(1));
    }

    #[test]
    fn test_buy_go_fails() {
        let mut game = game_with(&[("A", 10_000)]);
        assert_eq!(game.buy_space("A"), Ok(false));
        assert_eq!(game.get_player_balance("A"), Ok(10_000));
    }

    #[test]
    fn test_buy_owned_space_fails() {
        let mut game = game_with(&[("A", 1000), ("B", 1000)]);
        game.move_player("A", 2).unwrap();
        assert_eq!(game.buy_space("A"), Ok(true));

        game.move_player("B", 2).unwrap();
        assert_eq!(game.buy_space("B"), Ok(false));
        assert_eq!(game.space_at(2).unwrap().owner(), game.players().id_of("A"));
    }

    #[test]
    fn test_buy_unknown_player() {
        let mut game = game_with(&[]);
        assert_eq!(game.buy_space("ghost"), Err(GameError::unknown_player("ghost")));
    }

    #[test]
    fn test_check_game_over() {
        let mut game = RealEstateGame::new();
        assert_eq!(game.check_game_over(), None);

        game.create_player("Solo", 10);
        assert_eq!(game.check_game_over(), Some("Solo".to_string()));

        game.create_player("Other", 10);
        assert_eq!(game.check_game_over(), None);

        game.create_player("Other", 0);
        assert_eq!(game.check_game_over(), Some("Solo".to_string()));
        assert_eq!(game.result(), GameResult::Winner(PlayerId::new(0)));

        game.create_player("Solo", 0);
        assert_eq!(game.check_game_over(), None);
    }

    #[test]
    fn test_history_sequence() {
        let mut game = game_with(&[("A", 300)]);
        game.move_player("A", 1).unwrap();
        game.buy_space("A").unwrap();

        let events: Vec<_> = game.history().iter().map(|r| r.event.clone()).collect();
        let a = PlayerId::new(0);
        assert_eq!(
            events,
            vec![
                GameEvent::PlayerJoined { player: a, balance: 300 },
                GameEvent::Moved { player: a, from: 0, to: 1 },
                GameEvent::Purchased { player: a, position: 1, price: 250 },
            ]
        );
        let sequences: Vec<_> = game.history().iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, vec![0, 1, 2]);
    }
}
