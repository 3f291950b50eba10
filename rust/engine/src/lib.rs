//! # pitboss-engine: Blackjack Rules & Resolution Core
//!
//! A deterministic blackjack engine: hand valuation with ace duality, a
//! rule-variant matrix, a strict phase state machine, dealer policy, payout
//! resolution, and card-counting / bet-sizing analysis, all with reproducible
//! RNG for simulation and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`shoe`] - Multi-deck shoe with deterministic ChaCha20 shuffling and penetration tracking
//! - [`hand`] - Hand valuation (ace branching), softness, blackjack/bust/pair detection
//! - [`rules`] - Rule variants, legality resolution, and the preset table
//! - [`dealer`] - Dealer drawing policy (stand/hit on soft 17)
//! - [`round`] - Outcome classification and payout calculation, side bets included
//! - [`phase`] - Game phase state machine with recorded transition history
//! - [`counting`] - Hi-Lo / KO / Omega II / Zen / Halves running and true counts
//! - [`betting`] - Bet-sizing progressions (martingale, paroli, 1-3-2-6, ...)
//! - [`table`] - Session orchestration: one owned table object per session
//! - [`player`] - Player actions, bets, and bankroll
//! - [`events`] - Boundary values for the UI/analytics/persistence collaborators
//! - [`logger`] - Round record serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use pitboss_engine::cards::{Card, Rank, Suit};
//! use pitboss_engine::hand::{best_value, calculate_values};
//!
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Clubs, rank: Rank::Six },
//! ];
//! let values = calculate_values(&cards);
//! assert_eq!(values, vec![7, 17]);
//! assert_eq!(best_value(&values), 17);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All round outcomes are reproducible using seeded RNG:
//!
//! ```rust
//! use pitboss_engine::shoe::Shoe;
//!
//! // Same seed produces same shuffle
//! let shoe1 = Shoe::new_with_seed(6, 42);
//! let shoe2 = Shoe::new_with_seed(6, 42);
//! // shoe1 and shoe2 will have identical card order after shuffle()
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use pitboss_engine::player::PlayerAction;
//! use pitboss_engine::phase::GamePhase;
//! use pitboss_engine::rules::create_variant;
//! use pitboss_engine::table::Table;
//!
//! let mut table = Table::new(create_variant("classic").unwrap(), 1_000, 7);
//! table.place_bet(50).unwrap();
//! table.deal().unwrap();
//! while table.phase() == GamePhase::PlayerTurn {
//!     let actions = table.available_actions();
//!     // stand on everything for brevity
//!     let choice = if actions.contains(&PlayerAction::Stand) {
//!         PlayerAction::Stand
//!     } else {
//!         PlayerAction::DeclineInsurance
//!     };
//!     table.apply_action(choice).unwrap();
//! }
//! if table.phase() == GamePhase::DealerTurn {
//!     table.run_dealer().unwrap();
//! }
//! let summary = table.settle().unwrap();
//! assert_eq!(summary.hands_played, 1);
//! ```

pub mod betting;
pub mod cards;
pub mod counting;
pub mod dealer;
pub mod errors;
pub mod events;
pub mod hand;
pub mod logger;
pub mod phase;
pub mod player;
pub mod round;
pub mod rules;
pub mod shoe;
pub mod table;
