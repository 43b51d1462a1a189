//! Board spaces.
//!
//! A property is either for sale or owned, never both. GO is neither: it
//! can't be bought and never has an owner. The state is held as a single
//! `Ownership` value so the two flags can't drift apart.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Purchase price is this many times the rent.
pub const PRICE_MULTIPLIER: i64 = 5;

/// Who holds a space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ownership {
    /// Permanently off the market (GO).
    Unsellable,
    /// On the market.
    ForSale,
    /// Bought by a player.
    Owned(PlayerId),
}

/// A single board space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    name: String,
    rent: i64,
    ownership: Ownership,
}

impl Space {
    /// The GO space: no rent, never for sale.
    pub fn go() -> Self {
        Self {
            name: "GO".to_string(),
            rent: 0,
            ownership: Ownership::Unsellable,
        }
    }

    /// A property that starts on the market.
    pub fn property(name: impl Into<String>, rent: i64) -> Self {
        Self {
            name: name.into(),
            rent,
            ownership: Ownership::ForSale,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rent(&self) -> i64 {
        self.rent
    }

    /// Derived, never stored. Saturates rather than wrapping.
    #[must_use]
    pub fn purchase_price(&self) -> i64 {
        self.rent.saturating_mul(PRICE_MULTIPLIER)
    }

    #[must_use]
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.ownership == Ownership::ForSale
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match self.ownership {
            Ownership::Owned(id) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_go(&self) -> bool {
        self.ownership == Ownership::Unsellable
    }

    /// Hand the space to a buyer. Only spaces on the market change hands.
    pub(crate) fn sell_to(&mut self, buyer: PlayerId) -> bool {
        if !self.is_purchasable() {
            return false;
        }
        self.ownership = Ownership::Owned(buyer);
        true
    }

    /// Put an owned space back on the market.
    pub(crate) fn release(&mut self) {
        if let Ownership::Owned(_) = self.ownership {
            self.ownership = Ownership::ForSale;
        }
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ownership {
            Ownership::Unsellable => write!(f, "{}", self.name),
            Ownership::ForSale => write!(f, "{} (rent {}, for sale)", self.name, self.rent),
            Ownership::Owned(id) => write!(f, "{} (rent {}, owned by {})", self.name, self.rent, id),
        }
    }
}
