//! # pitboss-advisor: Strategy Assist for Blackjack Play
//!
//! Provides play recommendations for blackjack decisions behind a common
//! interface, so hosts can surface a suggested action next to the player's
//! options or drive automated play in simulations.
//!
//! ## Core Components
//!
//! - [`Advisor`] - Trait defining the interface for recommendation sources
//! - [`basic`] - Total-based basic strategy (pairs, soft, hard charts)
//! - [`create_advisor`] - Factory function for creating advisors
//!
//! ## Quick Start
//!
//! ```rust
//! use pitboss_advisor::{create_advisor, AdvisorView};
//! use pitboss_engine::cards::{Card, Rank, Suit};
//! use pitboss_engine::player::PlayerAction;
//!
//! let advisor = create_advisor("basic");
//! let view = AdvisorView {
//!     cards: vec![
//!         Card { suit: Suit::Hearts, rank: Rank::Ten },
//!         Card { suit: Suit::Clubs, rank: Rank::Six },
//!     ],
//!     dealer_upcard: Some(Card { suit: Suit::Spades, rank: Rank::Nine }),
//!     legal: vec![PlayerAction::Hit, PlayerAction::Stand],
//!     true_count: 0.0,
//! };
//! assert_eq!(advisor.recommend(&view), PlayerAction::Hit);
//! ```

use pitboss_engine::cards::Card;
use pitboss_engine::player::PlayerAction;

pub mod basic;

/// Snapshot of a decision point, detached from the table so advisors can be
/// queried without holding the session.
#[derive(Debug, Clone)]
pub struct AdvisorView {
    /// The cards of the hand currently acting
    pub cards: Vec<Card>,
    /// Dealer's exposed card, if dealt
    pub dealer_upcard: Option<Card>,
    /// The actions the rules permit right now, in resolver order
    pub legal: Vec<PlayerAction>,
    /// Normalized count, for count-aware advisors
    pub true_count: f32,
}

/// Interface for recommendation sources.
///
/// Implementations must only return actions drawn from `view.legal`; hosts
/// feed the result straight into the table.
pub trait Advisor {
    fn recommend(&self, view: &AdvisorView) -> PlayerAction;
    fn name(&self) -> &str;
}

/// Creates an advisor by name. Unknown names fall back to basic strategy.
pub fn create_advisor(name: &str) -> Box<dyn Advisor> {
    match name {
        "basic" => Box::new(basic::BasicStrategy::new()),
        _ => Box::new(basic::BasicStrategy::new()),
    }
}
