use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::round::RoundOutcome;

/// Discrete notifications emitted at the engine boundary.
///
/// The engine only produces these values; rendering, audio, and delivery are
/// collaborator concerns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    ShoeShuffled {
        cards: usize,
    },
    CardDealt {
        card: Card,
        to_dealer: bool,
        face_up: bool,
    },
    HoleCardRevealed {
        card: Card,
    },
    HandBusted {
        hand_index: usize,
        value: u32,
    },
    Blackjack {
        hand_index: usize,
    },
    HandSplit {
        hand_index: usize,
    },
    RoundSettled {
        total_payout: u32,
        ending_balance: u32,
    },
}

/// Point-in-time snapshot of a hand for analytics records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandSnapshot {
    pub cards: Vec<Card>,
    pub best_value: u32,
    pub is_soft: bool,
}

/// One decision, recorded for the analytics collaborator to ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub hand: HandSnapshot,
    pub dealer_upcard: Option<Card>,
    pub action: String,
    /// Present when strategy assist is enabled
    #[serde(default)]
    pub recommended: Option<String>,
    pub running_count: f32,
    pub true_count: f32,
    /// Fraction of the shoe already dealt when the decision was taken
    pub penetration: f64,
}

/// Per-round summary handed to the persistence collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub hands_played: usize,
    pub outcomes: Vec<RoundOutcome>,
    pub total_payout: u32,
    pub ending_balance: u32,
}
