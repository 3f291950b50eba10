use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::{DealerHand, Hand, HandStatus};

/// Classification of a finished player hand against the dealer's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Loss,
    Push,
    Blackjack,
    Bust,
    Surrender,
    Insurance,
    Pending,
}

impl RoundOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            RoundOutcome::Win => "win",
            RoundOutcome::Loss => "loss",
            RoundOutcome::Push => "push",
            RoundOutcome::Blackjack => "blackjack",
            RoundOutcome::Bust => "bust",
            RoundOutcome::Surrender => "surrender",
            RoundOutcome::Insurance => "insurance",
            RoundOutcome::Pending => "pending",
        }
    }

    /// Bust reports as a loss for payout purposes.
    pub fn is_loss(&self) -> bool {
        matches!(self, RoundOutcome::Loss | RoundOutcome::Bust)
    }

    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Win | RoundOutcome::Blackjack)
    }
}

/// Compares a finished player hand against the resolved dealer hand.
///
/// Ordering matters: a busted player loses even against a busted dealer, and
/// naturals are checked before value comparison.
pub fn determine_outcome(player: &Hand, dealer: &DealerHand) -> RoundOutcome {
    if player.status() == HandStatus::Surrendered {
        return RoundOutcome::Surrender;
    }
    if player.is_busted() {
        return RoundOutcome::Bust;
    }
    let player_natural = player.is_natural();
    let dealer_natural = dealer.has_blackjack();
    if player_natural && dealer_natural {
        return RoundOutcome::Push;
    }
    if player_natural {
        return RoundOutcome::Blackjack;
    }
    if dealer_natural {
        return RoundOutcome::Loss;
    }
    if dealer.is_busted() {
        return RoundOutcome::Win;
    }
    let p = player.best_value();
    let d = dealer.best_value();
    if p > d {
        RoundOutcome::Win
    } else if p < d {
        RoundOutcome::Loss
    } else {
        RoundOutcome::Push
    }
}

/// Total amount returned to the player for a main bet, stake included.
///
/// # Examples
///
/// ```
/// use pitboss_engine::round::{calculate_payout, RoundOutcome};
///
/// assert_eq!(calculate_payout(100, RoundOutcome::Blackjack, 1.5), 250);
/// assert_eq!(calculate_payout(100, RoundOutcome::Win, 1.5), 200);
/// assert_eq!(calculate_payout(100, RoundOutcome::Push, 1.5), 100);
/// assert_eq!(calculate_payout(100, RoundOutcome::Surrender, 1.5), 50);
/// assert_eq!(calculate_payout(100, RoundOutcome::Loss, 1.5), 0);
/// ```
pub fn calculate_payout(bet: u32, outcome: RoundOutcome, blackjack_multiplier: f64) -> u32 {
    match outcome {
        RoundOutcome::Blackjack => (bet as f64 * (1.0 + blackjack_multiplier)).round() as u32,
        RoundOutcome::Win => bet * 2,
        RoundOutcome::Push => bet,
        RoundOutcome::Surrender => bet / 2,
        RoundOutcome::Loss | RoundOutcome::Bust | RoundOutcome::Insurance
        | RoundOutcome::Pending => 0,
    }
}

/// Insurance pays 2:1 plus the stake back when the dealer has blackjack.
pub fn insurance_payout(insurance_bet: u32, dealer_blackjack: bool) -> u32 {
    if dealer_blackjack {
        insurance_bet * 3
    } else {
        0
    }
}

/// Kinds of side bet the payout table can price.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SideBetKind {
    /// Pays when the player's first two cards form a pair
    PerfectPairs,
}

/// Bet-type-specific outcome labels for side bets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SideBetOutcome {
    /// Same rank, same suit
    Perfect,
    /// Same rank, same color, different suit
    Colored,
    /// Same rank, different color
    Mixed,
}

/// Mapping from (side-bet kind, outcome label) to a payout multiplier.
/// Absent combinations pay 0 rather than failing.
#[derive(Debug, Clone, Default)]
pub struct SideBetTable {
    entries: HashMap<(SideBetKind, SideBetOutcome), f64>,
}

impl SideBetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, kind: SideBetKind, outcome: SideBetOutcome, mult: f64) -> Self {
        self.entries.insert((kind, outcome), mult);
        self
    }

    pub fn multiplier(&self, kind: SideBetKind, outcome: SideBetOutcome) -> f64 {
        self.entries.get(&(kind, outcome)).copied().unwrap_or(0.0)
    }

    pub fn payout(&self, kind: SideBetKind, outcome: Option<SideBetOutcome>, amount: u32) -> u32 {
        match outcome {
            Some(o) => (amount as f64 * self.multiplier(kind, o)).round() as u32,
            None => 0,
        }
    }

    /// Common perfect-pairs pricing: 25:1 perfect, 12:1 colored, 6:1 mixed.
    pub fn standard_pairs() -> Self {
        Self::new()
            .with_entry(SideBetKind::PerfectPairs, SideBetOutcome::Perfect, 25.0)
            .with_entry(SideBetKind::PerfectPairs, SideBetOutcome::Colored, 12.0)
            .with_entry(SideBetKind::PerfectPairs, SideBetOutcome::Mixed, 6.0)
    }
}

/// Classifies the player's first two cards for the pairs side bet.
pub fn evaluate_pairs(cards: &[Card]) -> Option<SideBetOutcome> {
    if cards.len() < 2 || cards[0].rank != cards[1].rank {
        return None;
    }
    if cards[0].suit == cards[1].suit {
        Some(SideBetOutcome::Perfect)
    } else if cards[0].suit.is_red() == cards[1].suit.is_red() {
        Some(SideBetOutcome::Colored)
    } else {
        Some(SideBetOutcome::Mixed)
    }
}
