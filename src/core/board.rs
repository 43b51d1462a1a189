//! The fixed 25-space board: GO followed by 24 properties.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::error::{GameError, Result};
use super::player::PlayerId;
use super::space::{Space, PRICE_MULTIPLIER};

/// Property names in board order, starting right after GO.
#[rustfmt::skip]
pub const PROPERTY_NAMES: [&str; 24] = [
    "Amsterdam", "Athens", "Barcelona", "Berlin",
    "Budapest", "Copenhagen", "Dublin", "Edinburgh",
    "Florence", "Helsinki", "Lisbon", "London",
    "Majorca", "Munich", "Paris", "Porto",
    "Prague", "Reykjavik", "Rome", "Salamanca",
    "Stockholm", "Tallinn", "Venice", "Zagreb",
];

/// Number of purchasable properties.
pub const PROPERTY_COUNT: usize = PROPERTY_NAMES.len();

/// Properties plus GO.
pub const BOARD_SIZE: usize = PROPERTY_COUNT + 1;

/// Index of the GO space.
pub const GO_INDEX: usize = 0;

/// Ordered spaces. The length is fixed once built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
}

impl Board {
    /// Lay out GO and the properties with one rent per property.
    ///
    /// Every rent must leave room for its purchase price in an `i64`.
    pub fn new(rents: &[i64]) -> Result<Self> {
        if rents.len() != PROPERTY_COUNT {
            return Err(GameError::WrongRentCount {
                expected: PROPERTY_COUNT,
                actual: rents.len(),
            });
        }

        if let Some((i, &rent)) = rents
            .iter()
            .enumerate()
            .find(|(_, rent)| rent.checked_mul(PRICE_MULTIPLIER).is_none())
        {
            return Err(GameError::RentOutOfRange { property: i + 1, rent });
        }

        let spaces = std::iter::once(Space::go())
            .chain(
                PROPERTY_NAMES
                    .iter()
                    .zip(rents)
                    .map(|(name, &rent)| Space::property(*name, rent)),
            )
            .collect();

        Ok(Self { spaces })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Space> {
        self.spaces.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Space> {
        self.spaces.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Space> {
        self.spaces.iter()
    }

    /// Board indices of every space a player owns.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = usize> + '_ {
        self.spaces
            .iter()
            .enumerate()
            .filter(move |(_, s)| s.owner() == Some(player))
            .map(|(i, _)| i)
    }

    /// Return every space a player owns to the market. Returns how many.
    pub(crate) fn release_all(&mut self, player: PlayerId) -> usize {
        let mut released = 0;
        for space in self.spaces.iter_mut().filter(|s| s.owner() == Some(player)) {
            space.release();
            released += 1;
        }
        released
    }
}

impl Index<usize> for Board {
    type Output = Space;

    fn index(&self, index: usize) -> &Self::Output {
        &self.spaces[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_rents(rent: i64) -> Vec<i64> {
        vec![rent; PROPERTY_COUNT]
    }

    #[test]
    fn test_board_layout() {
        let rents: Vec<i64> = (1..=24).map(|i| i * 10).collect();
        let board = Board::new(&rents).unwrap();

        assert_eq!(board.len(), BOARD_SIZE);
        assert!(board[GO_INDEX].is_go());
        assert_eq!(board[1].name(), "Amsterdam");
        assert_eq!(board[1].rent(), 10);
        assert_eq!(board[24].name(), "Zagreb");
        assert_eq!(board[24].rent(), 240);
        assert!(board.iter().skip(1).all(Space::is_purchasable));
    }

    #[test]
    fn test_wrong_rent_count() {
        let err = Board::new(&[50; 23]).unwrap_err();
        assert_eq!(err, GameError::WrongRentCount { expected: 24, actual: 23 });

        assert!(Board::new(&[50; 25]).is_err());
        assert!(Board::new(&[]).is_err());
    }

    #[test]
    fn test_rent_with_unrepresentable_price() {
        let mut rents = flat_rents(50);
        rents[6] = i64::MAX / PRICE_MULTIPLIER + 1;

        let err = Board::new(&rents).unwrap_err();
        assert_eq!(err, GameError::RentOutOfRange { property: 7, rent: rents[6] });

        rents[6] = i64::MAX / PRICE_MULTIPLIER;
        let board = Board::new(&rents).unwrap();
        assert_eq!(board[7].purchase_price(), i64::MAX / PRICE_MULTIPLIER * PRICE_MULTIPLIER);
    }

    #[test]
    fn test_owned_by_and_release_all() {
        let mut board = Board::new(&flat_rents(50)).unwrap();
        let a = PlayerId::new(0);
        let b = PlayerId::new(1);

        board.get_mut(3).unwrap().sell_to(a);
        board.get_mut(9).unwrap().sell_to(a);
        board.get_mut(10).unwrap().sell_to(b);

        assert_eq!(board.owned_by(a).collect::<Vec<_>>(), vec![3, 9]);
        assert_eq!(board.release_all(a), 2);
        assert_eq!(board.owned_by(a).count(), 0);
        assert!(board[3].is_purchasable());
        assert_eq!(board[10].owner(), Some(b));
    }
}
