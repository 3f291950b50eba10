use crate::cards::{Card, Rank};
use crate::errors::EngineError;
use crate::hand::{Hand, HandStatus};
use crate::player::PlayerAction;
use crate::round::{calculate_payout, RoundOutcome, SideBetTable};
use crate::shoe::Shoe;

/// When (if ever) the variant offers surrender.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurrenderMode {
    /// Surrender is not offered
    None,
    /// Offered after the dealer checks the hole card for blackjack
    Late,
    /// Offered before the dealer peek
    Early,
}

/// Immutable table configuration, fixed at table-creation time.
#[derive(Debug, Clone)]
pub struct GameRules {
    pub deck_count: u8,
    pub dealer_hits_soft_17: bool,
    /// Profit multiplier for a natural (1.5 for 3:2, 1.2 for 6:5)
    pub blackjack_payout: f64,
    pub double_after_split: bool,
    pub resplit_aces: bool,
    pub max_split_hands: u8,
    pub surrender: SurrenderMode,
    /// Inclusive best-value range doubling is restricted to, when a variant
    /// layers that restriction on top of the base rule
    pub double_totals: Option<(u32, u32)>,
    pub insurance_available: bool,
    pub min_bet: u32,
    pub max_bet: u32,
    /// Fraction of the shoe dealt out before a mandatory reshuffle
    pub penetration: f64,
    pub side_bets: SideBetTable,
}

/// External facts the legality resolver needs but does not own.
///
/// Balance ownership lives outside the engine, so affordability arrives as a
/// predicate result rather than a balance the resolver would read.
#[derive(Debug, Copy, Clone)]
pub struct ActionContext {
    /// True at the hand's first decision point (no card taken yet)
    pub first_decision: bool,
    /// Number of hands the player currently holds (1 when never split)
    pub split_hands: u8,
    /// Whether the bankroll covers matching the hand's wager again
    pub bankroll_covers: bool,
}

/// Computes the base set of legal actions for a hand.
///
/// Always starts from `[Hit, Stand]` for an active hand and is empty for any
/// other status. Variant implementations wrap this and add or remove actions
/// per their own restrictions.
pub fn base_available_actions(
    hand: &Hand,
    upcard: Option<Card>,
    rules: &GameRules,
    ctx: &ActionContext,
) -> Vec<PlayerAction> {
    if hand.status() != HandStatus::Active {
        return Vec::new();
    }
    let mut actions = vec![PlayerAction::Hit, PlayerAction::Stand];

    let two_cards = hand.cards().len() == 2;

    let double_ok = two_cards
        && !hand.is_doubled()
        && (!hand.is_split() || rules.double_after_split)
        && match rules.double_totals {
            Some((lo, hi)) => {
                let best = hand.best_value();
                best >= lo && best <= hi
            }
            None => true,
        };
    if double_ok {
        actions.push(PlayerAction::DoubleDown);
    }

    let split_ok = hand.is_pair()
        && ctx.bankroll_covers
        && ctx.split_hands < rules.max_split_hands
        && !(hand.cards()[0].rank == Rank::Ace && hand.is_split() && !rules.resplit_aces);
    if split_ok {
        actions.push(PlayerAction::Split);
    }

    if two_cards && ctx.first_decision && rules.surrender != SurrenderMode::None {
        actions.push(PlayerAction::Surrender);
    }

    if rules.insurance_available
        && two_cards
        && upcard.map(|c| c.rank) == Some(Rank::Ace)
    {
        actions.push(PlayerAction::TakeInsurance);
        actions.push(PlayerAction::DeclineInsurance);
    }

    actions
}

/// Interface every named rule variant implements.
///
/// One concrete implementation exists per preset; the variant is selected at
/// table-creation time and treated as immutable thereafter.
pub trait RuleSet {
    fn name(&self) -> &'static str;

    fn rules(&self) -> &GameRules;

    fn available_actions(
        &self,
        hand: &Hand,
        upcard: Option<Card>,
        ctx: &ActionContext,
    ) -> Vec<PlayerAction> {
        base_available_actions(hand, upcard, self.rules(), ctx)
    }

    fn is_blackjack(&self, hand: &Hand) -> bool {
        hand.is_natural()
    }

    /// Total amount returned to the player for a main bet, stake included.
    fn payout(&self, bet: u32, outcome: RoundOutcome) -> u32 {
        calculate_payout(bet, outcome, self.rules().blackjack_payout)
    }

    /// Dealer stopping condition: hit below 17, and on soft 17 when the
    /// variant says so.
    fn dealer_must_hit(&self, best_value: u32, is_soft: bool) -> bool {
        best_value < 17 || (best_value == 17 && is_soft && self.rules().dealer_hits_soft_17)
    }

    fn should_reshuffle(&self, shoe: &Shoe) -> bool {
        shoe.needs_shuffle(self.rules().penetration)
    }
}

fn base_rules() -> GameRules {
    GameRules {
        deck_count: 6,
        dealer_hits_soft_17: true,
        blackjack_payout: 1.5,
        double_after_split: true,
        resplit_aces: false,
        max_split_hands: 4,
        surrender: SurrenderMode::Late,
        double_totals: None,
        insurance_available: true,
        min_bet: 10,
        max_bet: 1000,
        penetration: 0.75,
        side_bets: SideBetTable::standard_pairs(),
    }
}

/// Six decks, dealer hits soft 17, 3:2 naturals, late surrender.
pub struct Classic {
    rules: GameRules,
}

impl Classic {
    pub fn new() -> Self {
        Self { rules: base_rules() }
    }
}

impl Default for Classic {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for Classic {
    fn name(&self) -> &'static str {
        "classic"
    }
    fn rules(&self) -> &GameRules {
        &self.rules
    }
}

/// Two decks, stand on soft 17, no double after split. Doubling is
/// structurally restricted to totals 9-11, and insurance and surrender are
/// removed outright rather than flagged off.
pub struct European {
    rules: GameRules,
}

impl European {
    pub fn new() -> Self {
        Self {
            rules: GameRules {
                deck_count: 2,
                dealer_hits_soft_17: false,
                double_after_split: false,
                surrender: SurrenderMode::None,
                insurance_available: false,
                double_totals: Some((9, 11)),
                ..base_rules()
            },
        }
    }
}

impl Default for European {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for European {
    fn name(&self) -> &'static str {
        "european"
    }
    fn rules(&self) -> &GameRules {
        &self.rules
    }

    fn available_actions(
        &self,
        hand: &Hand,
        upcard: Option<Card>,
        ctx: &ActionContext,
    ) -> Vec<PlayerAction> {
        let mut actions = base_available_actions(hand, upcard, self.rules(), ctx);
        // Structural override: no insurance or surrender in this variant,
        // whatever the base flags would permit.
        actions.retain(|a| {
            !matches!(
                a,
                PlayerAction::Surrender
                    | PlayerAction::TakeInsurance
                    | PlayerAction::DeclineInsurance
            )
        });
        actions
    }
}

/// Six decks, stand on soft 17, double after split, late surrender.
pub struct VegasStrip {
    rules: GameRules,
}

impl VegasStrip {
    pub fn new() -> Self {
        Self {
            rules: GameRules {
                dealer_hits_soft_17: false,
                ..base_rules()
            },
        }
    }
}

impl Default for VegasStrip {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for VegasStrip {
    fn name(&self) -> &'static str {
        "vegas-strip"
    }
    fn rules(&self) -> &GameRules {
        &self.rules
    }
}

/// One deck, stand on soft 17, no surrender. Deeper reshuffles are not
/// practical with 52 cards, so penetration is lower here.
pub struct SingleDeck {
    rules: GameRules,
}

impl SingleDeck {
    pub fn new() -> Self {
        Self {
            rules: GameRules {
                deck_count: 1,
                dealer_hits_soft_17: false,
                surrender: SurrenderMode::None,
                penetration: 0.5,
                ..base_rules()
            },
        }
    }
}

impl Default for SingleDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for SingleDeck {
    fn name(&self) -> &'static str {
        "single-deck"
    }
    fn rules(&self) -> &GameRules {
        &self.rules
    }
}

/// Classic rules with naturals paying 6:5 instead of 3:2 and no surrender.
pub struct SixToFive {
    rules: GameRules,
}

impl SixToFive {
    pub fn new() -> Self {
        Self {
            rules: GameRules {
                blackjack_payout: 1.2,
                surrender: SurrenderMode::None,
                ..base_rules()
            },
        }
    }
}

impl Default for SixToFive {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSet for SixToFive {
    fn name(&self) -> &'static str {
        "6:5"
    }
    fn rules(&self) -> &GameRules {
        &self.rules
    }
}

/// Names of every built-in preset, in listing order.
pub fn variant_names() -> [&'static str; 5] {
    ["classic", "european", "vegas-strip", "single-deck", "6:5"]
}

/// Creates a rule variant by preset name.
///
/// # Errors
///
/// Returns [`EngineError::UnknownVariant`] for names outside
/// [`variant_names`].
///
/// # Examples
///
/// ```
/// use pitboss_engine::rules::create_variant;
///
/// let variant = create_variant("classic").unwrap();
/// assert_eq!(variant.rules().deck_count, 6);
/// assert!(create_variant("no-such-table").is_err());
/// ```
pub fn create_variant(name: &str) -> Result<Box<dyn RuleSet>, EngineError> {
    match name {
        "classic" => Ok(Box::new(Classic::new())),
        "european" => Ok(Box::new(European::new())),
        "vegas-strip" => Ok(Box::new(VegasStrip::new())),
        "single-deck" => Ok(Box::new(SingleDeck::new())),
        "6:5" | "six-to-five" => Ok(Box::new(SixToFive::new())),
        other => Err(EngineError::UnknownVariant(other.to_string())),
    }
}
