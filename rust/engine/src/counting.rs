use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// A card-counting system: a complete 13-entry rank-to-weight table.
///
/// Weights are signed and, for Halves, half-integer, so counts run in `f32`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum CountingSystem {
    /// Hi-Lo: 2-6 are +1, 10s and Aces are -1
    HiLo,
    /// Knock-Out: unbalanced Hi-Lo counting 7 as +1
    Ko,
    /// Omega II: two-level balanced count, Ace neutral
    OmegaII,
    /// Zen: two-level count with Ace at -1
    Zen,
    /// Wong Halves: three-level count in half steps
    Halves,
}

impl CountingSystem {
    pub fn label(&self) -> &'static str {
        match self {
            CountingSystem::HiLo => "hi-lo",
            CountingSystem::Ko => "ko",
            CountingSystem::OmegaII => "omega2",
            CountingSystem::Zen => "zen",
            CountingSystem::Halves => "halves",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "hi-lo" | "hilo" => Some(CountingSystem::HiLo),
            "ko" => Some(CountingSystem::Ko),
            "omega2" | "omega-ii" => Some(CountingSystem::OmegaII),
            "zen" => Some(CountingSystem::Zen),
            "halves" => Some(CountingSystem::Halves),
            _ => None,
        }
    }

    /// The counting weight this system assigns to a rank.
    pub fn weight(&self, rank: Rank) -> f32 {
        use Rank as R;
        match self {
            CountingSystem::HiLo => match rank {
                R::Two | R::Three | R::Four | R::Five | R::Six => 1.0,
                R::Seven | R::Eight | R::Nine => 0.0,
                R::Ten | R::Jack | R::Queen | R::King | R::Ace => -1.0,
            },
            CountingSystem::Ko => match rank {
                R::Two | R::Three | R::Four | R::Five | R::Six | R::Seven => 1.0,
                R::Eight | R::Nine => 0.0,
                R::Ten | R::Jack | R::Queen | R::King | R::Ace => -1.0,
            },
            CountingSystem::OmegaII => match rank {
                R::Two | R::Three | R::Seven => 1.0,
                R::Four | R::Five | R::Six => 2.0,
                R::Eight | R::Ace => 0.0,
                R::Nine => -1.0,
                R::Ten | R::Jack | R::Queen | R::King => -2.0,
            },
            CountingSystem::Zen => match rank {
                R::Two | R::Three | R::Seven => 1.0,
                R::Four | R::Five | R::Six => 2.0,
                R::Eight | R::Nine => 0.0,
                R::Ten | R::Jack | R::Queen | R::King => -2.0,
                R::Ace => -1.0,
            },
            CountingSystem::Halves => match rank {
                R::Two | R::Seven => 0.5,
                R::Three | R::Four | R::Six => 1.0,
                R::Five => 1.5,
                R::Eight => 0.0,
                R::Nine => -0.5,
                R::Ten | R::Jack | R::Queen | R::King | R::Ace => -1.0,
            },
        }
    }
}

/// Tracks the running count over every face-up card seen since the last
/// reshuffle and normalizes it into a true count.
#[derive(Debug, Clone)]
pub struct CardCounter {
    system: CountingSystem,
    running: f32,
    cards_seen: u32,
    total_decks: u8,
}

impl CardCounter {
    pub fn new(system: CountingSystem, total_decks: u8) -> Self {
        Self {
            system,
            running: 0.0,
            cards_seen: 0,
            total_decks,
        }
    }

    pub fn system(&self) -> CountingSystem {
        self.system
    }

    /// Feeds one face-up card into the count. Hole cards are observed only
    /// at reveal time.
    pub fn observe(&mut self, card: Card) {
        self.running += self.system.weight(card.rank);
        self.cards_seen += 1;
    }

    /// A reshuffle resets the count to zero.
    pub fn reset(&mut self) {
        self.running = 0.0;
        self.cards_seen = 0;
    }

    pub fn cards_seen(&self) -> u32 {
        self.cards_seen
    }

    pub fn running_count(&self) -> f32 {
        self.running
    }

    /// Running count divided by estimated remaining decks.
    ///
    /// Degenerate shoes (no decks left to estimate) yield 0.0 rather than a
    /// division fault.
    pub fn true_count(&self) -> f32 {
        let remaining = self.total_decks as f32 - self.cards_seen as f32 / 52.0;
        if remaining <= f32::EPSILON {
            0.0
        } else {
            self.running / remaining
        }
    }
}
