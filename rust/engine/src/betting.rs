use serde::{Deserialize, Serialize};

use crate::round::RoundOutcome;

/// Bet-sizing progressions driven by the sequence of prior round outcomes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BettingStrategy {
    /// Always the base unit
    Flat,
    /// Double after a loss, reset after a win or push
    Martingale,
    /// Double after a win, reset after 3 consecutive wins or any loss
    Paroli,
    /// Step through 1-3-2-6 unit multipliers on consecutive wins
    OneThreeTwoSix,
    /// One unit up after a loss, one unit down after a win
    DAlembert,
    /// Walk a Fibonacci ladder: forward on loss, back two on win
    Fibonacci,
    /// Scale the base unit by the positive true count
    CountProportional,
}

impl BettingStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            BettingStrategy::Flat => "flat",
            BettingStrategy::Martingale => "martingale",
            BettingStrategy::Paroli => "paroli",
            BettingStrategy::OneThreeTwoSix => "1-3-2-6",
            BettingStrategy::DAlembert => "dalembert",
            BettingStrategy::Fibonacci => "fibonacci",
            BettingStrategy::CountProportional => "count",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "flat" => Some(BettingStrategy::Flat),
            "martingale" => Some(BettingStrategy::Martingale),
            "paroli" => Some(BettingStrategy::Paroli),
            "1-3-2-6" | "1326" => Some(BettingStrategy::OneThreeTwoSix),
            "dalembert" | "d'alembert" => Some(BettingStrategy::DAlembert),
            "fibonacci" => Some(BettingStrategy::Fibonacci),
            "count" | "count-proportional" => Some(BettingStrategy::CountProportional),
            _ => None,
        }
    }
}

/// Inputs a progression needs to size the next wager.
#[derive(Debug, Copy, Clone)]
pub struct BetInputs {
    pub current_bet: u32,
    pub base_unit: u32,
    pub max_bet: u32,
    pub available_balance: u32,
    /// Only read by the count-proportional strategy
    pub true_count: f32,
}

/// Sizes the next bet from the outcome history.
///
/// Pure over its inputs: the full history is replayed where the progression
/// is positional (Fibonacci), otherwise only the tail matters. The result is
/// always clamped to `[base_unit, min(max_bet, available_balance)]`.
///
/// # Examples
///
/// ```
/// use pitboss_engine::betting::{next_bet, BetInputs, BettingStrategy};
/// use pitboss_engine::round::RoundOutcome;
///
/// let inputs = BetInputs {
///     current_bet: 10,
///     base_unit: 10,
///     max_bet: 100,
///     available_balance: 500,
///     true_count: 0.0,
/// };
/// let after_loss = next_bet(BettingStrategy::Martingale, &[RoundOutcome::Loss], &inputs);
/// assert_eq!(after_loss, 20);
/// ```
pub fn next_bet(strategy: BettingStrategy, history: &[RoundOutcome], inputs: &BetInputs) -> u32 {
    let base = inputs.base_unit;
    let current = inputs.current_bet.max(base);
    let last = history.last().copied();

    let raw = match strategy {
        BettingStrategy::Flat => base,
        BettingStrategy::Martingale => match last {
            Some(o) if o.is_loss() => current.saturating_mul(2),
            _ => base,
        },
        BettingStrategy::Paroli => match last {
            Some(o) if o.is_win() => {
                if trailing_wins(history) >= 3 {
                    base
                } else {
                    current.saturating_mul(2)
                }
            }
            Some(RoundOutcome::Push) => current,
            _ => base,
        },
        BettingStrategy::OneThreeTwoSix => {
            const STEPS: [u32; 4] = [1, 3, 2, 6];
            base.saturating_mul(STEPS[trailing_wins(history) % 4])
        }
        BettingStrategy::DAlembert => match last {
            Some(o) if o.is_loss() => current.saturating_add(base),
            Some(o) if o.is_win() => current.saturating_sub(base).max(base),
            _ => current,
        },
        BettingStrategy::Fibonacci => {
            let mut step = 0usize;
            for o in history {
                if o.is_loss() {
                    step += 1;
                } else if o.is_win() {
                    step = step.saturating_sub(2);
                }
            }
            base.saturating_mul(fibonacci(step))
        }
        BettingStrategy::CountProportional => {
            let units = inputs.true_count.floor().max(1.0) as u32;
            base.saturating_mul(units)
        }
    };

    let upper = inputs.max_bet.min(inputs.available_balance);
    raw.clamp(base.min(upper), upper)
}

fn trailing_wins(history: &[RoundOutcome]) -> usize {
    history.iter().rev().take_while(|o| o.is_win()).count()
}

fn fibonacci(step: usize) -> u32 {
    let (mut a, mut b) = (1u32, 1u32);
    for _ in 0..step {
        let next = a.saturating_add(b);
        a = b;
        b = next;
    }
    a
}
