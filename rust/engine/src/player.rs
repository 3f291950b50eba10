use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::round::SideBetKind;

/// A player decision command during their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Take one more card
    Hit,
    /// Stop taking cards
    Stand,
    /// Double the wager, take exactly one card, then stand
    DoubleDown,
    /// Split a pair into two hands
    Split,
    /// Forfeit half the wager and end the hand
    Surrender,
    /// Place an insurance side wager against a dealer Ace
    TakeInsurance,
    /// Decline the insurance offer
    DeclineInsurance,
}

impl PlayerAction {
    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Hit => "hit",
            PlayerAction::Stand => "stand",
            PlayerAction::DoubleDown => "double",
            PlayerAction::Split => "split",
            PlayerAction::Surrender => "surrender",
            PlayerAction::TakeInsurance => "insurance",
            PlayerAction::DeclineInsurance => "decline_insurance",
        }
    }
}

/// A side wager riding alongside the main bet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SideBet {
    pub kind: SideBetKind,
    pub amount: u32,
}

/// The main wager for a round plus any side-bet entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bet {
    pub amount: u32,
    pub side_bets: Vec<SideBet>,
}

/// The session bankroll. Balance persistence lives outside the engine; this
/// tracks the funds the table was opened with.
#[derive(Debug, Clone)]
pub struct Player {
    bankroll: u32,
}

impl Player {
    pub fn new(bankroll: u32) -> Self {
        Self { bankroll }
    }

    pub fn bankroll(&self) -> u32 {
        self.bankroll
    }

    pub fn covers(&self, amount: u32) -> bool {
        amount <= self.bankroll
    }

    /// Removes funds, rejecting overdraw with no partial mutation.
    pub fn debit(&mut self, amount: u32) -> Result<(), EngineError> {
        if amount > self.bankroll {
            return Err(EngineError::InsufficientFunds {
                required: amount,
                available: self.bankroll,
            });
        }
        self.bankroll -= amount;
        Ok(())
    }

    pub fn credit(&mut self, amount: u32) {
        self.bankroll = self.bankroll.saturating_add(amount);
    }
}
