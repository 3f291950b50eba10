use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{standard_deck, Card};

/// A depleting, shuffled supply of cards built from one or more decks.
///
/// Draws advance a cursor from one end; the shoe is replaced wholesale on
/// reshuffle. Shuffling is the only source of randomness in the engine.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
    deck_count: u8,
    rng: ChaCha20Rng,
}

impl Shoe {
    pub fn new_with_seed(deck_count: u8, seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: build(deck_count),
            position: 0,
            deck_count,
            rng,
        }
    }

    /// Rebuilds the full shoe and shuffles it; resets the draw cursor.
    pub fn shuffle(&mut self) {
        self.cards = build(self.deck_count);
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn draw(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn deck_count(&self) -> u8 {
        self.deck_count
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn cards_drawn(&self) -> usize {
        self.position
    }

    pub fn remaining_fraction(&self) -> f64 {
        if self.cards.is_empty() {
            return 0.0;
        }
        self.remaining() as f64 / self.cards.len() as f64
    }

    /// Estimated decks left in the shoe, used for true-count normalization.
    pub fn remaining_decks(&self) -> f64 {
        self.deck_count as f64 - self.cards_drawn() as f64 / 52.0
    }

    /// True once the dealt fraction exceeds the configured penetration,
    /// i.e. `remaining / total < 1 - penetration`. Never fires earlier.
    pub fn needs_shuffle(&self, penetration: f64) -> bool {
        self.remaining_fraction() < 1.0 - penetration
    }
}

fn build(deck_count: u8) -> Vec<Card> {
    let mut v = Vec::with_capacity(deck_count as usize * 52);
    for _ in 0..deck_count.max(1) {
        v.extend(standard_deck());
    }
    v
}
