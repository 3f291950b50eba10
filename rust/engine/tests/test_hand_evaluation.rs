use pitboss_engine::cards::{Card, Rank as R, Suit as S};
use pitboss_engine::hand::{
    best_value, calculate_values, is_blackjack, is_busted, is_pair, is_soft, Hand,
};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn number_cards_sum_directly() {
    let cards = [c(S::Clubs, R::Two), c(S::Hearts, R::Nine)];
    assert_eq!(calculate_values(&cards), vec![11]);
    assert_eq!(best_value(&calculate_values(&cards)), 11);
}

#[test]
fn face_cards_count_ten() {
    let cards = [c(S::Clubs, R::Jack), c(S::Hearts, R::Queen), c(S::Spades, R::King)];
    assert_eq!(calculate_values(&cards), vec![30]);
}

#[test]
fn twenty_five_has_single_value_and_busts() {
    let cards = [c(S::Clubs, R::Ten), c(S::Hearts, R::Ten), c(S::Spades, R::Five)];
    assert_eq!(calculate_values(&cards), vec![25]);
    assert_eq!(best_value(&calculate_values(&cards)), 25);
    assert!(is_busted(&cards));
}

#[test]
fn soft_seventeen() {
    let cards = [c(S::Clubs, R::Ace), c(S::Hearts, R::Six)];
    assert_eq!(calculate_values(&cards), vec![7, 17]);
    assert_eq!(best_value(&calculate_values(&cards)), 17);
    assert!(is_soft(&cards));
    assert!(!is_busted(&cards));
}

#[test]
fn hitting_soft_seventeen_hardens_it() {
    let cards = [c(S::Clubs, R::Ace), c(S::Hearts, R::Six), c(S::Spades, R::Nine)];
    assert_eq!(calculate_values(&cards), vec![16, 26]);
    assert_eq!(best_value(&calculate_values(&cards)), 16);
    assert!(!is_soft(&cards));
    assert!(!is_busted(&cards));
}

#[test]
fn best_value_never_exceeds_21_when_possible() {
    // property over a handful of ace-heavy hands
    let hands: Vec<Vec<Card>> = vec![
        vec![c(S::Clubs, R::Ace), c(S::Hearts, R::Ace), c(S::Spades, R::Ace)],
        vec![c(S::Clubs, R::Ace), c(S::Hearts, R::Nine), c(S::Spades, R::Ace)],
        vec![c(S::Clubs, R::Ace), c(S::Hearts, R::King)],
        vec![c(S::Clubs, R::Five), c(S::Hearts, R::Five), c(S::Spades, R::Ace)],
    ];
    for cards in hands {
        let values = calculate_values(&cards);
        let best = best_value(&values);
        if values.iter().any(|&v| v <= 21) {
            assert!(best <= 21, "best {} for {:?}", best, cards);
        } else {
            assert_eq!(best, *values.iter().min().unwrap());
        }
    }
}

#[test]
fn blackjack_requires_exactly_two_cards() {
    let natural = [c(S::Clubs, R::Ace), c(S::Hearts, R::King)];
    assert!(is_blackjack(&natural));
    let three_card_21 = [c(S::Clubs, R::Seven), c(S::Hearts, R::Seven), c(S::Spades, R::Seven)];
    assert_eq!(best_value(&calculate_values(&three_card_21)), 21);
    assert!(!is_blackjack(&three_card_21));
}

#[test]
fn any_two_card_21_is_blackjack() {
    let cards = [c(S::Clubs, R::Ten), c(S::Hearts, R::Ace)];
    assert!(is_blackjack(&cards));
}

#[test]
fn pair_detection_is_rank_based() {
    assert!(is_pair(&[c(S::Clubs, R::Eight), c(S::Hearts, R::Eight)]));
    // Ten and King both count 10 but are not a pair
    assert!(!is_pair(&[c(S::Clubs, R::Ten), c(S::Hearts, R::King)]));
    assert!(!is_pair(&[c(S::Clubs, R::Eight), c(S::Hearts, R::Eight), c(S::Spades, R::Eight)]));
}

#[test]
fn hand_tracks_bust_status_on_draw() {
    let mut hand = Hand::new(25);
    hand.add_card(c(S::Clubs, R::Ten));
    hand.add_card(c(S::Hearts, R::Nine));
    assert_eq!(hand.best_value(), 19);
    hand.add_card(c(S::Spades, R::Five));
    assert!(hand.is_busted());
    assert_eq!(hand.best_value(), 24);
}

#[test]
fn doubling_doubles_the_wager() {
    let mut hand = Hand::new(50);
    hand.add_card(c(S::Clubs, R::Five));
    hand.add_card(c(S::Hearts, R::Six));
    hand.double();
    assert!(hand.is_doubled());
    assert_eq!(hand.wager(), 100);
}
