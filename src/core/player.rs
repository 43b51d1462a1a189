//! Player records and the name-keyed roster that owns them.
//!
//! ## PlayerId
//!
//! Stable index into the roster, assigned in join order. Spaces refer to
//! their owner by `PlayerId` and resolve it through the roster, so there
//! are no references between records.
//!
//! ## PlayerRoster
//!
//! `Vec`-backed storage with an `FxHashMap` from name to id. Iteration
//! follows join order. Registering a name a second time replaces the record
//! in its original slot.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier, 0-based in join order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw roster index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A single player: funds, liveness and where they stand on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    balance: i64,
    active: bool,
    position: usize,
}

impl Player {
    /// Create an active player standing on GO.
    pub fn new(name: impl Into<String>, balance: i64) -> Self {
        Self {
            name: name.into(),
            balance,
            active: true,
            position: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// False once the player has been eliminated.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Board index, 0 is GO.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// A player with no money left can't move.
    #[must_use]
    pub fn is_broke(&self) -> bool {
        self.balance <= 0
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_add(amount);
    }

    pub(crate) fn debit(&mut self, amount: i64) {
        self.balance = self.balance.saturating_sub(amount);
    }

    pub(crate) fn move_to(&mut self, position: usize) {
        self.position = position;
    }

    /// Zero the balance and retire the player for good.
    pub(crate) fn eliminate(&mut self) {
        self.balance = 0;
        self.active = false;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (${}) @ {}", self.name, self.balance, self.position)?;
        if !self.active {
            write!(f, " [out]")?;
        }
        Ok(())
    }
}

/// Players in join order, addressable by id or by name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlayerRoster {
    players: Vec<Player>,
    index: FxHashMap<String, PlayerId>,
}

impl PlayerRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player, replacing any record already held under the name.
    ///
    /// A replaced player keeps its id and join-order slot.
    pub fn insert(&mut self, player: Player) -> PlayerId {
        if let Some(&id) = self.index.get(player.name()) {
            self.players[id.index()] = player;
            return id;
        }

        let id = PlayerId::new(self.players.len() as u32);
        self.index.insert(player.name().to_string(), id);
        self.players.push(player);
        id
    }

    /// Look up a player's id by name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<PlayerId> {
        self.index.get(name).copied()
    }

    /// Get a player by id. Ids handed out by this roster are always valid.
    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// Get a player by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Player> {
        self.id_of(name).and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over (PlayerId, &Player) pairs in join order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players
            .iter()
            .enumerate()
            .map(|(i, p)| (PlayerId(i as u32), p))
    }

    /// Names in join order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(Player::name)
    }
}

impl Index<PlayerId> for PlayerRoster {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        &self.players[id.index()]
    }
}

impl IndexMut<PlayerId> for PlayerRoster {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        &mut self.players[id.index()]
    }
}
