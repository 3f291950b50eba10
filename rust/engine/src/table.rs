use crate::cards::{Card, Rank};
use crate::counting::{CardCounter, CountingSystem};
use crate::dealer::play_dealer;
use crate::errors::EngineError;
use crate::events::{DecisionRecord, GameEvent, HandSnapshot, RoundSummary};
use crate::hand::{DealerHand, Hand, HandStatus};
use crate::phase::{Command, GamePhase, PhaseMachine, PhaseTransition};
use crate::player::{Bet, Player, PlayerAction, SideBet};
use crate::round::{determine_outcome, evaluate_pairs, insurance_payout, RoundOutcome, SideBetKind};
use crate::rules::{ActionContext, RuleSet};
use crate::shoe::Shoe;

/// One table session: the explicitly owned game-state object every engine
/// call goes through.
///
/// Owns the shoe, the active rule variant, the phase machine, the player
/// hands and bankroll, the dealer hand, and the card counter. Synchronous
/// and single-threaded; embedders that share a table across threads must
/// guard it with one exclusive-access boundary. No persistence or network
/// calls happen in here.
///
/// # Examples
///
/// ```
/// use pitboss_engine::rules::create_variant;
/// use pitboss_engine::table::Table;
///
/// let variant = create_variant("classic").unwrap();
/// let mut table = Table::new(variant, 1_000, 42);
/// table.place_bet(50).unwrap();
/// table.deal().unwrap();
/// ```
pub struct Table {
    shoe: Shoe,
    variant: Box<dyn RuleSet>,
    phase: PhaseMachine,
    player: Player,
    bet: Bet,
    hands: Vec<Hand>,
    active: usize,
    dealer: DealerHand,
    counter: CardCounter,
    /// Player's first two cards, kept for side-bet classification after
    /// splits rearrange the hand
    initial_cards: Vec<Card>,
    insurance: u32,
    insurance_pending: bool,
    actions_taken: u32,
    events: Vec<GameEvent>,
    seed: u64,
}

impl Table {
    pub fn new(variant: Box<dyn RuleSet>, bankroll: u32, seed: u64) -> Self {
        let deck_count = variant.rules().deck_count;
        let mut shoe = Shoe::new_with_seed(deck_count, seed);
        shoe.shuffle();
        Self {
            shoe,
            counter: CardCounter::new(CountingSystem::HiLo, deck_count),
            variant,
            phase: PhaseMachine::new(),
            player: Player::new(bankroll),
            bet: Bet::default(),
            hands: Vec::new(),
            active: 0,
            dealer: DealerHand::new(),
            initial_cards: Vec::new(),
            insurance: 0,
            insurance_pending: false,
            actions_taken: 0,
            events: Vec::new(),
            seed,
        }
    }

    pub fn set_counting_system(&mut self, system: CountingSystem) {
        self.counter = CardCounter::new(system, self.variant.rules().deck_count);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase.current()
    }

    pub fn phase_history(&self) -> &[PhaseTransition] {
        self.phase.history()
    }

    pub fn variant(&self) -> &dyn RuleSet {
        self.variant.as_ref()
    }

    pub fn bankroll(&self) -> u32 {
        self.player.bankroll()
    }

    pub fn bet(&self) -> &Bet {
        &self.bet
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn active_hand(&self) -> Option<&Hand> {
        self.hands.get(self.active)
    }

    pub fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    pub fn counter(&self) -> &CardCounter {
        &self.counter
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    /// Fraction of the shoe dealt out so far.
    pub fn penetration_used(&self) -> f64 {
        1.0 - self.shoe.remaining_fraction()
    }

    /// Takes all pending boundary events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn gate(&self, command: Command, action: &str) -> Result<(), EngineError> {
        if self.phase.allows(command) {
            Ok(())
        } else {
            Err(EngineError::IllegalAction {
                action: action.to_string(),
                reason: format!("not permitted in {:?} phase", self.phase.current()),
            })
        }
    }

    // ---- betting phase ----------------------------------------------------

    pub fn place_bet(&mut self, amount: u32) -> Result<(), EngineError> {
        self.gate(Command::PlaceBet, "place_bet")?;
        let rules = self.variant.rules();
        if amount < rules.min_bet || amount > rules.max_bet {
            return Err(EngineError::InvalidBet {
                amount,
                min: rules.min_bet,
                max: rules.max_bet,
            });
        }
        // Replace any existing wager; no partial mutation on failure
        let refund = self.bet.amount;
        self.player.credit(refund);
        if let Err(e) = self.player.debit(amount) {
            self.player.debit(refund).ok();
            return Err(e);
        }
        self.bet.amount = amount;
        Ok(())
    }

    pub fn increase_bet(&mut self, amount: u32) -> Result<(), EngineError> {
        self.gate(Command::IncreaseBet, "increase_bet")?;
        let total = self.bet.amount.saturating_add(amount);
        let rules = self.variant.rules();
        if total > rules.max_bet {
            return Err(EngineError::InvalidBet {
                amount: total,
                min: rules.min_bet,
                max: rules.max_bet,
            });
        }
        self.player.debit(amount)?;
        self.bet.amount = total;
        Ok(())
    }

    pub fn clear_bet(&mut self) -> Result<(), EngineError> {
        self.gate(Command::ClearBet, "clear_bet")?;
        self.player.credit(self.bet.amount);
        self.bet.amount = 0;
        Ok(())
    }

    pub fn place_side_bet(&mut self, kind: SideBetKind, amount: u32) -> Result<(), EngineError> {
        self.gate(Command::PlaceSideBet, "place_side_bet")?;
        self.player.debit(amount)?;
        self.bet.side_bets.push(SideBet { kind, amount });
        Ok(())
    }

    pub fn clear_side_bets(&mut self) -> Result<(), EngineError> {
        self.gate(Command::ClearSideBet, "clear_side_bet")?;
        for sb in self.bet.side_bets.drain(..) {
            self.player.credit(sb.amount);
        }
        Ok(())
    }

    // ---- dealing ----------------------------------------------------------

    /// Deals the opening round: two face-up player cards, dealer upcard, and
    /// the face-down hole card. Reshuffles first when the penetration
    /// threshold has been crossed. Naturals short-circuit straight to
    /// settlement.
    pub fn deal(&mut self) -> Result<(), EngineError> {
        self.gate(Command::DealCards, "deal")?;
        if self.bet.amount == 0 {
            return Err(EngineError::IllegalAction {
                action: "deal".to_string(),
                reason: "no bet placed".to_string(),
            });
        }
        // A wager assembled by increases is still bound by the table minimum
        let rules = self.variant.rules();
        if self.bet.amount < rules.min_bet {
            return Err(EngineError::InvalidBet {
                amount: self.bet.amount,
                min: rules.min_bet,
                max: rules.max_bet,
            });
        }
        if self.variant.should_reshuffle(&self.shoe) {
            self.shoe.shuffle();
            self.counter.reset();
            self.events.push(GameEvent::ShoeShuffled {
                cards: self.shoe.total(),
            });
        }
        self.phase.transition(GamePhase::Dealing, "bet_placed")?;

        let mut hand = Hand::new(self.bet.amount);
        for _ in 0..2 {
            let card = self.draw_observed(false)?;
            hand.add_card(card);
        }
        self.initial_cards = hand.cards().to_vec();

        let upcard = self.draw_observed(true)?;
        self.dealer.add_card(upcard);
        // Hole card stays face-down: dealt but not observed until reveal
        let hole = self.shoe.draw().ok_or(EngineError::ShoeExhausted)?;
        self.dealer.add_card(hole);
        self.events.push(GameEvent::CardDealt {
            card: hole,
            to_dealer: true,
            face_up: false,
        });

        let player_natural = hand.is_natural();
        if player_natural {
            hand.set_status(HandStatus::Blackjack);
            self.events.push(GameEvent::Blackjack { hand_index: 0 });
        }
        self.hands.push(hand);
        self.active = 0;

        let ace_up = upcard.rank == Rank::Ace;
        if player_natural || (self.dealer.has_blackjack() && !ace_up) {
            self.phase.transition(GamePhase::Settlement, "naturals")?;
        } else {
            self.insurance_pending = ace_up && self.variant.rules().insurance_available;
            self.phase.transition(GamePhase::PlayerTurn, "deal_complete")?;
        }
        Ok(())
    }

    // ---- player turn ------------------------------------------------------

    /// Legal actions for the hand currently acting.
    ///
    /// While an insurance offer is open the decision is forced: only take or
    /// decline are legal, matching the dealer peek order.
    pub fn available_actions(&self) -> Vec<PlayerAction> {
        if self.phase.current() != GamePhase::PlayerTurn {
            return Vec::new();
        }
        if self.insurance_pending {
            return vec![PlayerAction::TakeInsurance, PlayerAction::DeclineInsurance];
        }
        let hand = match self.hands.get(self.active) {
            Some(h) => h,
            None => return Vec::new(),
        };
        let ctx = ActionContext {
            first_decision: self.actions_taken == 0 && self.hands.len() == 1,
            split_hands: self.hands.len() as u8,
            bankroll_covers: self.player.covers(hand.wager()),
        };
        let mut actions = self.variant.available_actions(hand, self.dealer.upcard(), &ctx);
        // The offer was already resolved during the forced insurance step
        actions.retain(|a| {
            !matches!(
                a,
                PlayerAction::TakeInsurance | PlayerAction::DeclineInsurance
            )
        });
        actions
    }

    /// Validates and applies one player decision, returning the decision
    /// record for the analytics boundary. Rejected actions mutate nothing.
    pub fn apply_action(&mut self, action: PlayerAction) -> Result<DecisionRecord, EngineError> {
        self.gate(action_command(action), action.label())?;
        let legal = self.available_actions();
        if !legal.contains(&action) {
            return Err(EngineError::IllegalAction {
                action: action.label().to_string(),
                reason: "not legal for the current hand".to_string(),
            });
        }
        let record = self.decision_record(action);

        match action {
            PlayerAction::TakeInsurance => {
                let premium = self.bet.amount / 2;
                self.player.debit(premium)?;
                self.insurance = premium;
                self.resolve_insurance()?;
            }
            PlayerAction::DeclineInsurance => {
                self.resolve_insurance()?;
            }
            PlayerAction::Hit => {
                let card = self.draw_observed(false)?;
                let hand = &mut self.hands[self.active];
                hand.add_card(card);
                self.actions_taken += 1;
                if self.hands[self.active].is_busted() {
                    self.events.push(GameEvent::HandBusted {
                        hand_index: self.active,
                        value: self.hands[self.active].best_value(),
                    });
                    self.advance_hand()?;
                }
            }
            PlayerAction::Stand => {
                self.hands[self.active].set_status(HandStatus::Standing);
                self.actions_taken += 1;
                self.advance_hand()?;
            }
            PlayerAction::DoubleDown => {
                let wager = self.hands[self.active].wager();
                if !self.player.covers(wager) {
                    return Err(EngineError::InsufficientFunds {
                        required: wager,
                        available: self.player.bankroll(),
                    });
                }
                let card = self.draw_observed(false)?;
                self.player.debit(wager)?;
                let hand = &mut self.hands[self.active];
                hand.double();
                hand.add_card(card);
                self.actions_taken += 1;
                if self.hands[self.active].is_busted() {
                    self.events.push(GameEvent::HandBusted {
                        hand_index: self.active,
                        value: self.hands[self.active].best_value(),
                    });
                } else {
                    self.hands[self.active].set_status(HandStatus::Standing);
                }
                self.advance_hand()?;
            }
            PlayerAction::Split => {
                let wager = self.hands[self.active].wager();
                self.player.debit(wager)?;
                // The legality resolver already vetted affordability, so the
                // debit above only fails if the predicate went stale
                let moved = self.hands[self.active]
                    .take_split_card()
                    .ok_or(EngineError::NoActiveHand)?;
                let new_hand = Hand::split_off(self.active, moved, wager);
                self.hands.insert(self.active + 1, new_hand);
                self.events.push(GameEvent::HandSplit {
                    hand_index: self.active,
                });
                // The acting hand draws its replacement card now; the split
                // hand completes when it comes up to act
                let card = self.draw_observed(false)?;
                self.hands[self.active].add_card(card);
                self.actions_taken += 1;
            }
            PlayerAction::Surrender => {
                self.hands[self.active].set_status(HandStatus::Surrendered);
                self.actions_taken += 1;
                self.advance_hand()?;
            }
        }
        Ok(record)
    }

    fn resolve_insurance(&mut self) -> Result<(), EngineError> {
        self.insurance_pending = false;
        // Peek: a dealer natural ends the round before any card is drawn
        if self.dealer.has_blackjack() {
            self.phase
                .transition(GamePhase::Settlement, "dealer_blackjack")?;
        }
        Ok(())
    }

    fn advance_hand(&mut self) -> Result<(), EngineError> {
        while self.active + 1 < self.hands.len() {
            self.active += 1;
            // A fresh split hand is one card short; complete it on arrival
            if self.hands[self.active].cards().len() == 1 {
                let card = self.draw_observed(false)?;
                self.hands[self.active].add_card(card);
            }
            if self.hands[self.active].status() == HandStatus::Active {
                return Ok(());
            }
        }
        let any_live = self.hands.iter().any(|h| {
            matches!(h.status(), HandStatus::Standing | HandStatus::Active)
                && !h.is_busted()
        });
        if any_live {
            self.phase.transition(GamePhase::DealerTurn, "player_done")?;
        } else {
            self.phase
                .transition(GamePhase::Settlement, "all_hands_done")?;
        }
        Ok(())
    }

    // ---- dealer turn ------------------------------------------------------

    pub fn run_dealer(&mut self) -> Result<(), EngineError> {
        self.gate(Command::PlayDealer, "play_dealer")?;
        if let Some(hole) = self.dealer.reveal_hole() {
            self.counter.observe(hole);
            self.events.push(GameEvent::HoleCardRevealed { card: hole });
        }
        let drawn = play_dealer(&mut self.dealer, &mut self.shoe, self.variant.as_ref());
        for card in drawn {
            self.counter.observe(card);
            self.events.push(GameEvent::CardDealt {
                card,
                to_dealer: true,
                face_up: true,
            });
        }
        self.phase.transition(GamePhase::Settlement, "dealer_done")?;
        Ok(())
    }

    // ---- settlement -------------------------------------------------------

    /// Scores every hand, pays out, and hands back the round summary for the
    /// persistence boundary.
    pub fn settle(&mut self) -> Result<RoundSummary, EngineError> {
        self.gate(Command::EndRound, "end_round")?;
        // Settlement reached without a dealer turn still needs the hole card
        // visible for scoring and counting
        if let Some(hole) = self.dealer.reveal_hole() {
            self.counter.observe(hole);
            self.events.push(GameEvent::HoleCardRevealed { card: hole });
        }

        let mut total_payout = 0u32;
        let mut outcomes = Vec::with_capacity(self.hands.len());
        for hand in &mut self.hands {
            let outcome = determine_outcome(hand, &self.dealer);
            total_payout += self.variant.payout(hand.wager(), outcome);
            hand.set_status(HandStatus::Resolved);
            outcomes.push(outcome);
        }

        total_payout += insurance_payout(self.insurance, self.dealer.has_blackjack());

        let side_table = &self.variant.rules().side_bets;
        for sb in &self.bet.side_bets {
            let outcome = match sb.kind {
                SideBetKind::PerfectPairs => evaluate_pairs(&self.initial_cards),
            };
            total_payout += side_table.payout(sb.kind, outcome, sb.amount);
        }

        self.player.credit(total_payout);
        // These stakes are now resolved; a later refund pass must not see them
        self.insurance = 0;
        self.bet.side_bets.clear();
        self.events.push(GameEvent::RoundSettled {
            total_payout,
            ending_balance: self.player.bankroll(),
        });
        let summary = RoundSummary {
            hands_played: self.hands.len(),
            outcomes,
            total_payout,
            ending_balance: self.player.bankroll(),
        };
        self.phase.transition(GamePhase::Cleanup, "round_settled")?;
        Ok(summary)
    }

    // ---- cleanup / recovery ----------------------------------------------

    pub fn reset_round(&mut self) -> Result<(), EngineError> {
        self.gate(Command::ResetRound, "reset_round")?;
        self.clear_round_state();
        self.phase.transition(GamePhase::Betting, "round_reset")
    }

    /// Full reset: round state plus a fresh shuffle and count. Allowed from
    /// cleanup and from the error phase.
    pub fn reset_game(&mut self) -> Result<(), EngineError> {
        self.gate(Command::ResetGame, "reset_game")?;
        self.refund_outstanding();
        self.clear_round_state();
        self.shoe.shuffle();
        self.counter.reset();
        self.events.push(GameEvent::ShoeShuffled {
            cards: self.shoe.total(),
        });
        self.phase.transition(GamePhase::Betting, "game_reset")
    }

    /// Moves the machine into the error sink; legal from any phase.
    pub fn fail(&mut self, reason: &str) -> Result<(), EngineError> {
        self.phase.transition(GamePhase::Error, reason)
    }

    /// Recovers from the error phase, refunding wagers the aborted round
    /// never settled.
    pub fn clear_error(&mut self) -> Result<(), EngineError> {
        self.gate(Command::ClearError, "clear_error")?;
        self.refund_outstanding();
        self.clear_round_state();
        self.phase.transition(GamePhase::Betting, "error_cleared")
    }

    fn refund_outstanding(&mut self) {
        for hand in &self.hands {
            if hand.status() != HandStatus::Resolved {
                self.player.credit(hand.wager());
            }
        }
        if self.hands.is_empty() {
            self.player.credit(self.bet.amount);
        }
        self.player.credit(self.insurance);
        for sb in &self.bet.side_bets {
            self.player.credit(sb.amount);
        }
    }

    fn clear_round_state(&mut self) {
        self.hands.clear();
        self.active = 0;
        self.dealer.reset();
        self.bet = Bet::default();
        self.initial_cards.clear();
        self.insurance = 0;
        self.insurance_pending = false;
        self.actions_taken = 0;
    }

    // ---- helpers ----------------------------------------------------------

    fn draw_observed(&mut self, to_dealer: bool) -> Result<Card, EngineError> {
        let card = self.shoe.draw().ok_or(EngineError::ShoeExhausted)?;
        self.counter.observe(card);
        self.events.push(GameEvent::CardDealt {
            card,
            to_dealer,
            face_up: true,
        });
        Ok(card)
    }

    fn decision_record(&self, action: PlayerAction) -> DecisionRecord {
        let hand = &self.hands[self.active];
        DecisionRecord {
            hand: HandSnapshot {
                cards: hand.cards().to_vec(),
                best_value: hand.best_value(),
                is_soft: hand.is_soft(),
            },
            dealer_upcard: self.dealer.upcard(),
            action: action.label().to_string(),
            recommended: None,
            running_count: self.counter.running_count(),
            true_count: self.counter.true_count(),
            penetration: self.penetration_used(),
        }
    }
}

fn action_command(action: PlayerAction) -> Command {
    match action {
        PlayerAction::Hit => Command::Hit,
        PlayerAction::Stand => Command::Stand,
        PlayerAction::DoubleDown => Command::DoubleDown,
        PlayerAction::Split => Command::Split,
        PlayerAction::Surrender => Command::Surrender,
        PlayerAction::TakeInsurance => Command::TakeInsurance,
        PlayerAction::DeclineInsurance => Command::DeclineInsurance,
    }
}
