use pitboss_engine::cards::{Card, Rank as R, Suit as S};
use pitboss_engine::dealer::play_dealer;
use pitboss_engine::hand::DealerHand;
use pitboss_engine::rules::{create_variant, RuleSet};
use pitboss_engine::shoe::Shoe;

fn c(r: R) -> Card {
    Card {
        suit: S::Diamonds,
        rank: r,
    }
}

fn dealer_with(up: R, hole: R) -> DealerHand {
    let mut d = DealerHand::new();
    d.add_card(c(up));
    d.add_card(c(hole));
    d
}

// An unshuffled shoe draws in canonical order: 2c 3c 4c 5c ...
fn fresh_shoe() -> Shoe {
    Shoe::new_with_seed(1, 0)
}

#[test]
fn stands_on_soft_17_when_rules_say_stand() {
    let variant = create_variant("vegas-strip").unwrap();
    let mut dealer = dealer_with(R::Ace, R::Six);
    let mut shoe = fresh_shoe();
    let drawn = play_dealer(&mut dealer, &mut shoe, variant.as_ref());
    assert!(drawn.is_empty());
    assert_eq!(dealer.best_value(), 17);
    assert!(!dealer.hole_hidden());
}

#[test]
fn hits_soft_17_when_rules_say_hit() {
    let variant = create_variant("classic").unwrap();
    let mut dealer = dealer_with(R::Ace, R::Six);
    let mut shoe = fresh_shoe();
    let drawn = play_dealer(&mut dealer, &mut shoe, variant.as_ref());
    // canonical first draw is the 2 of clubs: soft 19, then stand
    assert_eq!(drawn, vec![Card { suit: S::Clubs, rank: R::Two }]);
    assert_eq!(dealer.best_value(), 19);
}

#[test]
fn hard_17_always_stands() {
    let variant = create_variant("classic").unwrap();
    let mut dealer = dealer_with(R::Ten, R::Seven);
    let mut shoe = fresh_shoe();
    let drawn = play_dealer(&mut dealer, &mut shoe, variant.as_ref());
    assert!(drawn.is_empty());
}

#[test]
fn draws_until_seventeen_or_more() {
    let variant = create_variant("classic").unwrap();
    let mut dealer = dealer_with(R::Two, R::Three);
    let mut shoe = fresh_shoe();
    play_dealer(&mut dealer, &mut shoe, variant.as_ref());
    assert!(dealer.best_value() >= 17 || dealer.is_busted());
}

#[test]
fn empty_shoe_stops_the_loop_below_17() {
    let variant = create_variant("classic").unwrap();
    let mut dealer = dealer_with(R::Two, R::Three);
    let mut shoe = fresh_shoe();
    while shoe.draw().is_some() {}
    let drawn = play_dealer(&mut dealer, &mut shoe, variant.as_ref());
    assert!(drawn.is_empty());
    // sub-17 hand is final rather than a crash
    assert_eq!(dealer.best_value(), 5);
}

#[test]
fn deterministic_given_shoe_order() {
    let variant = create_variant("classic").unwrap();
    let mut totals = Vec::new();
    for _ in 0..2 {
        let mut dealer = dealer_with(R::Four, R::Five);
        let mut shoe = Shoe::new_with_seed(1, 77);
        shoe.shuffle();
        play_dealer(&mut dealer, &mut shoe, variant.as_ref());
        totals.push(dealer.best_value());
    }
    assert_eq!(totals[0], totals[1]);
}
