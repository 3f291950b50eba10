use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Lifecycle status of a single hand within a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandStatus {
    /// Still taking decisions
    Active,
    /// Player stood; waiting for the dealer
    Standing,
    /// Every possible total exceeds 21
    Busted,
    /// Two-card natural 21
    Blackjack,
    /// Player surrendered at the first decision point
    Surrendered,
    /// Outcome and payout have been settled
    Resolved,
}

/// Computes every total the cards can form.
///
/// Starts from `{0}`; each non-Ace card adds its fixed value to every
/// accumulated total, each Ace branches every total into +1 and +11. The
/// result is deduplicated and sorted ascending. An empty slice yields `[0]`.
///
/// # Examples
///
/// ```
/// use pitboss_engine::cards::{Card, Rank, Suit};
/// use pitboss_engine::hand::calculate_values;
///
/// let cards = [
///     Card { suit: Suit::Hearts, rank: Rank::Ace },
///     Card { suit: Suit::Clubs, rank: Rank::Six },
/// ];
/// assert_eq!(calculate_values(&cards), vec![7, 17]);
/// ```
pub fn calculate_values(cards: &[Card]) -> Vec<u32> {
    let mut totals = vec![0u32];
    for card in cards {
        let mut next = Vec::with_capacity(totals.len() * 2);
        for &t in &totals {
            for &v in card.rank.values() {
                next.push(t + v);
            }
        }
        next.sort_unstable();
        next.dedup();
        totals = next;
    }
    totals
}

/// The best total from a value set: the highest total not exceeding 21, or
/// the minimum total when every option busts (displayed only; a fully-busted
/// hand always settles as a loss regardless of the minimum shown).
pub fn best_value(values: &[u32]) -> u32 {
    values
        .iter()
        .copied()
        .filter(|&v| v <= 21)
        .max()
        .unwrap_or_else(|| values.iter().copied().min().unwrap_or(0))
}

/// True when every possible total exceeds 21.
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_values(cards).iter().all(|&v| v > 21)
}

/// True for a two-card 21. Split-derived 21s are excluded at the [`Hand`]
/// level, not here; this predicate only sees the cards.
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && best_value(&calculate_values(cards)) == 21
}

/// True iff at least one Ace is currently counted as 11, i.e. the hard total
/// (all Aces as 1) is strictly below the best total.
pub fn is_soft(cards: &[Card]) -> bool {
    let hard: u32 = cards.iter().map(|c| c.rank.hard_value()).sum();
    hard < best_value(&calculate_values(cards))
}

/// True for exactly two cards of equal rank.
pub fn is_pair(cards: &[Card]) -> bool {
    cards.len() == 2 && cards[0].rank == cards[1].rank
}

/// An ordered list of cards with its wager and split/double lineage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
    wager: u32,
    status: HandStatus,
    doubled: bool,
    /// Index of the hand this one was split from, if any.
    split_from: Option<usize>,
}

impl Hand {
    pub fn new(wager: u32) -> Self {
        Self {
            cards: Vec::with_capacity(4),
            wager,
            status: HandStatus::Active,
            doubled: false,
            split_from: None,
        }
    }

    pub fn split_off(parent_index: usize, card: Card, wager: u32) -> Self {
        Self {
            cards: vec![card],
            wager,
            status: HandStatus::Active,
            doubled: false,
            split_from: Some(parent_index),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn wager(&self) -> u32 {
        self.wager
    }

    pub fn status(&self) -> HandStatus {
        self.status
    }

    pub fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    pub fn is_doubled(&self) -> bool {
        self.doubled
    }

    pub fn is_split(&self) -> bool {
        self.split_from.is_some()
    }

    pub fn split_from(&self) -> Option<usize> {
        self.split_from
    }

    /// Marks the hand as doubled and doubles its wager.
    pub fn double(&mut self) {
        self.doubled = true;
        self.wager *= 2;
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        if is_busted(&self.cards) {
            self.status = HandStatus::Busted;
        }
    }

    /// Removes and returns the second card, used when splitting a pair.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if self.cards.len() == 2 {
            self.cards.pop()
        } else {
            None
        }
    }

    pub fn values(&self) -> Vec<u32> {
        calculate_values(&self.cards)
    }

    pub fn best_value(&self) -> u32 {
        best_value(&self.values())
    }

    pub fn is_soft(&self) -> bool {
        is_soft(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_pair(&self) -> bool {
        is_pair(&self.cards)
    }

    /// A natural: two-card 21 on an unsplit hand. A 2-card 21 reached after a
    /// split counts as a plain 21.
    pub fn is_natural(&self) -> bool {
        self.split_from.is_none() && is_blackjack(&self.cards)
    }
}

/// The dealer's hand: structurally a [`Hand`] with a hole-card flag.
///
/// The second card stays hidden until [`DealerHand::reveal_hole`]; card
/// counters must only observe it at reveal time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DealerHand {
    hand: Hand,
    hole_hidden: bool,
}

impl DealerHand {
    pub fn new() -> Self {
        Self {
            hand: Hand::new(0),
            hole_hidden: true,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// The dealer's exposed first card, if dealt.
    pub fn upcard(&self) -> Option<Card> {
        self.hand.cards().first().copied()
    }

    pub fn hole_hidden(&self) -> bool {
        self.hole_hidden
    }

    /// Exposes the hole card. Returns it so observers (counters, events) can
    /// see exactly one reveal.
    pub fn reveal_hole(&mut self) -> Option<Card> {
        if !self.hole_hidden {
            return None;
        }
        self.hole_hidden = false;
        self.hand.cards().get(1).copied()
    }

    pub fn has_blackjack(&self) -> bool {
        is_blackjack(self.hand.cards())
    }

    pub fn best_value(&self) -> u32 {
        self.hand.best_value()
    }

    pub fn is_soft(&self) -> bool {
        self.hand.is_soft()
    }

    pub fn is_busted(&self) -> bool {
        self.hand.is_busted()
    }

    /// Best value over the exposed cards only (hole card excluded while
    /// hidden).
    pub fn visible_value(&self) -> u32 {
        if self.hole_hidden {
            let visible: Vec<Card> = self.hand.cards().iter().take(1).copied().collect();
            best_value(&calculate_values(&visible))
        } else {
            self.best_value()
        }
    }

    pub fn reset(&mut self) {
        self.hand = Hand::new(0);
        self.hole_hidden = true;
    }
}

impl Default for DealerHand {
    fn default() -> Self {
        Self::new()
    }
}
