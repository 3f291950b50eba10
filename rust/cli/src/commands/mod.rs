//! Command handler modules for the pitboss CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers specific to that command
//! - Dependency injection: output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: all errors propagated via the `CliError` enum

mod cfg;
mod deal;
mod play;
mod sim;
mod variants;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use sim::handle_sim_command;
pub use variants::handle_variants_command;

use pitboss_advisor::{Advisor, AdvisorView};
use pitboss_engine::cards::{Card, Rank, Suit};
use pitboss_engine::events::RoundSummary;
use pitboss_engine::phase::GamePhase;
use pitboss_engine::player::PlayerAction;
use pitboss_engine::table::Table;

use crate::error::CliError;

/// What one advisor-driven round produced, captured before the table state
/// is cleared for the next round.
pub(crate) struct RoundReport {
    pub summary: RoundSummary,
    pub actions: Vec<String>,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
}

/// Drives a dealt round to settlement with the advisor picking every action.
///
/// The caller has already placed the bet; this deals, plays the player turn,
/// runs the dealer when needed, and settles. The table is left in the
/// cleanup phase.
pub(crate) fn play_round(table: &mut Table, advisor: &dyn Advisor) -> Result<RoundReport, CliError> {
    table.deal()?;
    let mut actions = Vec::new();
    while table.phase() == GamePhase::PlayerTurn {
        let legal = table.available_actions();
        let hand = table
            .active_hand()
            .ok_or_else(|| CliError::InvalidInput("no active hand".into()))?;
        let view = AdvisorView {
            cards: hand.cards().to_vec(),
            dealer_upcard: table.dealer_hand().upcard(),
            legal,
            true_count: table.counter().true_count(),
        };
        let recommended = advisor.recommend(&view);
        let mut choice = recommended;
        // Doubling needs the bankroll to match the wager again; the advisor
        // does not see funds, so degrade here
        if choice == PlayerAction::DoubleDown && table.bankroll() < hand.wager() {
            choice = PlayerAction::Hit;
        }
        let mut record = table.apply_action(choice)?;
        record.recommended = Some(recommended.label().to_string());
        actions.push(record.action);
    }
    if table.phase() == GamePhase::DealerTurn {
        table.run_dealer()?;
    }
    let summary = table.settle()?;
    let player_cards = table
        .hands()
        .iter()
        .flat_map(|h| h.cards().iter().copied())
        .collect();
    let dealer_cards = table.dealer_hand().hand().cards().to_vec();
    Ok(RoundReport {
        summary,
        actions,
        player_cards,
        dealer_cards,
    })
}

pub(crate) fn fmt_card(card: Card) -> String {
    let rank = match card.rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    };
    let suit = match card.suit {
        Suit::Clubs => "c",
        Suit::Diamonds => "d",
        Suit::Hearts => "h",
        Suit::Spades => "s",
    };
    format!("{}{}", rank, suit)
}

pub(crate) fn fmt_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|&c| fmt_card(c))
        .collect::<Vec<_>>()
        .join(" ")
}
