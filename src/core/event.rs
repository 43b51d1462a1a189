//! Event history.
//!
//! The engine appends one `EventRecord` per state transition. Records carry
//! a monotonically increasing sequence number. Rules never read the
//! history back; it exists for replay, debugging and tests.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A state transition applied by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A player was registered (or re-registered) with a balance.
    PlayerJoined { player: PlayerId, balance: i64 },

    /// The pass-GO bonus was credited.
    PassedGo { player: PlayerId, bonus: i64 },

    /// A player moved.
    Moved { player: PlayerId, from: usize, to: usize },

    /// A player bought the space at `position`.
    Purchased { player: PlayerId, position: usize, price: i64 },

    /// Rent changed hands. When the payer came up short, `amount` is
    /// whatever they had left.
    RentPaid { payer: PlayerId, owner: PlayerId, amount: i64 },

    /// Balance matched the rent exactly, so nothing was paid.
    RentWaived { payer: PlayerId, owner: PlayerId, rent: i64 },

    /// A player went bankrupt and their spaces returned to the market.
    Eliminated { player: PlayerId, released: usize },
}

/// A recorded event with its position in the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Sequence number, starting at 0.
    pub sequence: u32,

    /// What happened.
    pub event: GameEvent,
}

impl EventRecord {
    #[must_use]
    pub fn new(sequence: u32, event: GameEvent) -> Self {
        Self { sequence, event }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_record() {
        let event = GameEvent::Moved { player: PlayerId::new(0), from: 24, to: 2 };
        let record = EventRecord::new(7, event.clone());

        assert_eq!(record.sequence, 7);
        assert_eq!(record.event, event);
    }

    #[test]
    fn test_event_record_serialization() {
        let record = EventRecord::new(
            3,
            GameEvent::RentPaid { payer: PlayerId::new(1), owner: PlayerId::new(0), amount: 30 },
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: EventRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
