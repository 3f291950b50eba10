//! Total-based basic strategy.
//!
//! Encodes the standard multi-deck basic-strategy charts: pair splits first,
//! then soft totals, then hard totals. Recommendations are constrained to the
//! legal action set, degrading double to hit and surrender to hit when the
//! preferred play is unavailable.

use pitboss_engine::cards::{Card, Rank};
use pitboss_engine::hand::{best_value, calculate_values, is_soft};
use pitboss_engine::player::PlayerAction;

use crate::{Advisor, AdvisorView};

#[derive(Debug, Clone, Default)]
pub struct BasicStrategy;

impl BasicStrategy {
    pub fn new() -> Self {
        Self
    }
}

/// Chart index for the dealer upcard: 2-10, with Ace as 11. A missing upcard
/// (pre-deal queries) is treated as a ten, the most conservative column.
fn upcard_value(upcard: Option<Card>) -> u32 {
    match upcard.map(|c| c.rank) {
        Some(Rank::Ace) => 11,
        Some(rank) => rank.values()[0],
        None => 10,
    }
}

fn pair_split(rank: Rank, dealer: u32) -> bool {
    match rank {
        Rank::Ace | Rank::Eight => true,
        Rank::Two | Rank::Three | Rank::Seven => (2..=7).contains(&dealer),
        Rank::Four => (5..=6).contains(&dealer),
        Rank::Six => (2..=6).contains(&dealer),
        Rank::Nine => (2..=6).contains(&dealer) || dealer == 8 || dealer == 9,
        // Never split tens or fives
        _ => false,
    }
}

fn soft_play(total: u32, dealer: u32) -> PlayerAction {
    match total {
        13 | 14 if (5..=6).contains(&dealer) => PlayerAction::DoubleDown,
        15 | 16 if (4..=6).contains(&dealer) => PlayerAction::DoubleDown,
        17 if (3..=6).contains(&dealer) => PlayerAction::DoubleDown,
        18 if (3..=6).contains(&dealer) => PlayerAction::DoubleDown,
        18 if dealer == 2 || dealer == 7 || dealer == 8 => PlayerAction::Stand,
        t if t >= 19 => PlayerAction::Stand,
        _ => PlayerAction::Hit,
    }
}

fn hard_play(total: u32, dealer: u32) -> PlayerAction {
    match total {
        t if t <= 8 => PlayerAction::Hit,
        9 if (3..=6).contains(&dealer) => PlayerAction::DoubleDown,
        10 if (2..=9).contains(&dealer) => PlayerAction::DoubleDown,
        11 => PlayerAction::DoubleDown,
        12 if (4..=6).contains(&dealer) => PlayerAction::Stand,
        15 if dealer == 10 => PlayerAction::Surrender,
        16 if dealer >= 9 => PlayerAction::Surrender,
        t if (13..=16).contains(&t) && (2..=6).contains(&dealer) => PlayerAction::Stand,
        t if t >= 17 => PlayerAction::Stand,
        _ => PlayerAction::Hit,
    }
}

impl Advisor for BasicStrategy {
    fn recommend(&self, view: &AdvisorView) -> PlayerAction {
        // Basic strategy declines insurance regardless of the upcard
        if view.legal.contains(&PlayerAction::TakeInsurance) {
            return PlayerAction::DeclineInsurance;
        }
        let dealer = upcard_value(view.dealer_upcard);

        if view.legal.contains(&PlayerAction::Split)
            && view.cards.len() == 2
            && view.cards[0].rank == view.cards[1].rank
            && pair_split(view.cards[0].rank, dealer)
        {
            return PlayerAction::Split;
        }

        let total = best_value(&calculate_values(&view.cards));
        let preferred = if is_soft(&view.cards) {
            soft_play(total, dealer)
        } else {
            hard_play(total, dealer)
        };

        if view.legal.contains(&preferred) {
            return preferred;
        }
        // Degrade unavailable plays: double and surrender both fall back to
        // the hit/stand line for the same total
        match preferred {
            PlayerAction::DoubleDown if total >= 10 && total <= 11 => PlayerAction::Hit,
            PlayerAction::DoubleDown if is_soft(&view.cards) => {
                if total >= 18 {
                    PlayerAction::Stand
                } else {
                    PlayerAction::Hit
                }
            }
            PlayerAction::DoubleDown | PlayerAction::Surrender => PlayerAction::Hit,
            _ if view.legal.contains(&PlayerAction::Stand) => PlayerAction::Stand,
            _ => PlayerAction::Hit,
        }
    }

    fn name(&self) -> &str {
        "basic"
    }
}
