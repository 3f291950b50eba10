use pitboss_engine::cards::{Card, Rank as R, Suit as S};
use pitboss_engine::errors::EngineError;
use pitboss_engine::hand::Hand;
use pitboss_engine::player::PlayerAction;
use pitboss_engine::round::RoundOutcome;
use pitboss_engine::rules::{create_variant, ActionContext, SurrenderMode};

fn c(r: R) -> Card {
    Card {
        suit: S::Clubs,
        rank: r,
    }
}

fn hand(ranks: &[R]) -> Hand {
    let mut h = Hand::new(100);
    for &r in ranks {
        h.add_card(c(r));
    }
    h
}

fn first_decision() -> ActionContext {
    ActionContext {
        first_decision: true,
        split_hands: 1,
        bankroll_covers: true,
    }
}

#[test]
fn preset_matrix() {
    let classic = create_variant("classic").unwrap();
    assert_eq!(classic.rules().deck_count, 6);
    assert!(classic.rules().dealer_hits_soft_17);
    assert!((classic.rules().blackjack_payout - 1.5).abs() < f64::EPSILON);
    assert!(classic.rules().double_after_split);
    assert_eq!(classic.rules().surrender, SurrenderMode::Late);

    let european = create_variant("european").unwrap();
    assert_eq!(european.rules().deck_count, 2);
    assert!(!european.rules().dealer_hits_soft_17);
    assert!(!european.rules().double_after_split);
    assert!(!european.rules().insurance_available);
    assert_eq!(european.rules().double_totals, Some((9, 11)));

    let strip = create_variant("vegas-strip").unwrap();
    assert_eq!(strip.rules().deck_count, 6);
    assert!(!strip.rules().dealer_hits_soft_17);
    assert!(strip.rules().double_after_split);

    let single = create_variant("single-deck").unwrap();
    assert_eq!(single.rules().deck_count, 1);
    assert_eq!(single.rules().surrender, SurrenderMode::None);
    assert!((single.rules().penetration - 0.5).abs() < f64::EPSILON);

    let six_five = create_variant("6:5").unwrap();
    assert!((six_five.rules().blackjack_payout - 1.2).abs() < f64::EPSILON);
    assert_eq!(six_five.rules().surrender, SurrenderMode::None);
}

#[test]
fn unknown_variant_is_an_error() {
    match create_variant("atlantic-city") {
        Err(EngineError::UnknownVariant(name)) => assert_eq!(name, "atlantic-city"),
        other => panic!("expected UnknownVariant, got {:?}", other.map(|v| v.name())),
    }
}

#[test]
fn six_to_five_accepts_spelled_out_alias() {
    assert_eq!(create_variant("six-to-five").unwrap().name(), "6:5");
}

#[test]
fn two_card_hand_gets_the_full_menu() {
    let classic = create_variant("classic").unwrap();
    let h = hand(&[R::Eight, R::Eight]);
    let actions = classic.available_actions(&h, Some(c(R::Six)), &first_decision());
    assert!(actions.contains(&PlayerAction::Hit));
    assert!(actions.contains(&PlayerAction::Stand));
    assert!(actions.contains(&PlayerAction::DoubleDown));
    assert!(actions.contains(&PlayerAction::Split));
    assert!(actions.contains(&PlayerAction::Surrender));
}

#[test]
fn double_requires_exactly_two_cards() {
    let classic = create_variant("classic").unwrap();
    let h = hand(&[R::Three, R::Four, R::Four]);
    let ctx = ActionContext {
        first_decision: false,
        ..first_decision()
    };
    let actions = classic.available_actions(&h, Some(c(R::Six)), &ctx);
    assert!(!actions.contains(&PlayerAction::DoubleDown));
    assert!(actions.contains(&PlayerAction::Hit));
}

#[test]
fn european_double_restricted_to_nine_through_eleven() {
    let european = create_variant("european").unwrap();
    let ten = hand(&[R::Six, R::Four]);
    assert!(european
        .available_actions(&ten, Some(c(R::Six)), &first_decision())
        .contains(&PlayerAction::DoubleDown));
    let eight = hand(&[R::Five, R::Three]);
    assert!(!european
        .available_actions(&eight, Some(c(R::Six)), &first_decision())
        .contains(&PlayerAction::DoubleDown));
    let twelve = hand(&[R::Seven, R::Five]);
    assert!(!european
        .available_actions(&twelve, Some(c(R::Six)), &first_decision())
        .contains(&PlayerAction::DoubleDown));
}

#[test]
fn european_never_offers_insurance_or_surrender() {
    let european = create_variant("european").unwrap();
    let h = hand(&[R::Ten, R::Six]);
    let actions = european.available_actions(&h, Some(c(R::Ace)), &first_decision());
    assert!(!actions.contains(&PlayerAction::Surrender));
    assert!(!actions.contains(&PlayerAction::TakeInsurance));
    assert!(!actions.contains(&PlayerAction::DeclineInsurance));
}

#[test]
fn split_requires_a_rank_pair_and_funds() {
    let classic = create_variant("classic").unwrap();
    // Ten and King both count 10 but are not splittable
    let not_a_pair = hand(&[R::Ten, R::King]);
    assert!(!classic
        .available_actions(&not_a_pair, Some(c(R::Six)), &first_decision())
        .contains(&PlayerAction::Split));
    let pair = hand(&[R::Nine, R::Nine]);
    let broke = ActionContext {
        bankroll_covers: false,
        ..first_decision()
    };
    assert!(!classic
        .available_actions(&pair, Some(c(R::Six)), &broke)
        .contains(&PlayerAction::Split));
}

#[test]
fn split_capped_at_max_hands() {
    let classic = create_variant("classic").unwrap();
    let pair = hand(&[R::Nine, R::Nine]);
    let at_cap = ActionContext {
        split_hands: classic.rules().max_split_hands,
        ..first_decision()
    };
    assert!(!classic
        .available_actions(&pair, Some(c(R::Six)), &at_cap)
        .contains(&PlayerAction::Split));
}

#[test]
fn resplitting_aces_disallowed_by_default() {
    let classic = create_variant("classic").unwrap();
    let mut split_aces = Hand::split_off(0, c(R::Ace), 100);
    split_aces.add_card(c(R::Ace));
    let ctx = ActionContext {
        split_hands: 2,
        ..first_decision()
    };
    assert!(!classic
        .available_actions(&split_aces, Some(c(R::Six)), &ctx)
        .contains(&PlayerAction::Split));
}

#[test]
fn surrender_only_at_first_decision() {
    let classic = create_variant("classic").unwrap();
    let h = hand(&[R::Ten, R::Six]);
    let later = ActionContext {
        first_decision: false,
        ..first_decision()
    };
    assert!(!classic
        .available_actions(&h, Some(c(R::Ten)), &later)
        .contains(&PlayerAction::Surrender));
}

#[test]
fn insurance_only_against_an_ace() {
    let classic = create_variant("classic").unwrap();
    let h = hand(&[R::Ten, R::Six]);
    let vs_ace = classic.available_actions(&h, Some(c(R::Ace)), &first_decision());
    assert!(vs_ace.contains(&PlayerAction::TakeInsurance));
    assert!(vs_ace.contains(&PlayerAction::DeclineInsurance));
    let vs_ten = classic.available_actions(&h, Some(c(R::Ten)), &first_decision());
    assert!(!vs_ten.contains(&PlayerAction::TakeInsurance));
}

#[test]
fn no_actions_for_a_finished_hand() {
    let classic = create_variant("classic").unwrap();
    let busted = hand(&[R::Ten, R::Nine, R::Five]);
    assert!(classic
        .available_actions(&busted, Some(c(R::Six)), &first_decision())
        .is_empty());
}

#[test]
fn payout_follows_the_variant_multiplier() {
    let classic = create_variant("classic").unwrap();
    assert_eq!(classic.payout(100, RoundOutcome::Blackjack), 250);
    let six_five = create_variant("6:5").unwrap();
    assert_eq!(six_five.payout(100, RoundOutcome::Blackjack), 220);
}

#[test]
fn dealer_policy_split_on_soft_17() {
    let classic = create_variant("classic").unwrap();
    assert!(classic.dealer_must_hit(16, false));
    assert!(classic.dealer_must_hit(17, true));
    assert!(!classic.dealer_must_hit(17, false));
    let strip = create_variant("vegas-strip").unwrap();
    assert!(!strip.dealer_must_hit(17, true));
}
