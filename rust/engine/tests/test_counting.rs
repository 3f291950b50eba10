use pitboss_engine::cards::{Card, Rank as R, Suit as S};
use pitboss_engine::counting::{CardCounter, CountingSystem};

fn c(r: R) -> Card {
    Card {
        suit: S::Spades,
        rank: r,
    }
}

fn run(system: CountingSystem, decks: u8, ranks: &[R]) -> CardCounter {
    let mut counter = CardCounter::new(system, decks);
    for &r in ranks {
        counter.observe(c(r));
    }
    counter
}

#[test]
fn hi_lo_running_count() {
    // +1 +0 -1 -1
    let counter = run(CountingSystem::HiLo, 6, &[R::Two, R::Seven, R::King, R::Ace]);
    assert!((counter.running_count() - (-1.0)).abs() < f32::EPSILON);
    assert_eq!(counter.cards_seen(), 4);
}

#[test]
fn true_count_normalizes_by_remaining_decks() {
    let mut counter = CardCounter::new(CountingSystem::HiLo, 6);
    // thirteen low cards and thirty-nine neutrals: running count +13
    for _ in 0..13 {
        counter.observe(c(R::Two));
    }
    for _ in 0..39 {
        counter.observe(c(R::Eight));
    }
    let running = counter.running_count();
    assert!((running - 13.0).abs() < f32::EPSILON);
    // 52 cards seen from 6 decks leaves 5 decks
    assert!((counter.true_count() - running / 5.0).abs() < 1e-6);
}

#[test]
fn depleted_shoe_yields_zero_true_count() {
    let mut counter = CardCounter::new(CountingSystem::HiLo, 1);
    for _ in 0..52 {
        counter.observe(c(R::Two));
    }
    assert!(counter.true_count().abs() < f32::EPSILON);
}

#[test]
fn reset_clears_the_count() {
    let mut counter = run(CountingSystem::HiLo, 6, &[R::Two, R::Three, R::Four]);
    counter.reset();
    assert!(counter.running_count().abs() < f32::EPSILON);
    assert_eq!(counter.cards_seen(), 0);
    assert!(counter.true_count().abs() < f32::EPSILON);
}

#[test]
fn ko_counts_seven_high() {
    assert!((CountingSystem::Ko.weight(R::Seven) - 1.0).abs() < f32::EPSILON);
    assert!(CountingSystem::HiLo.weight(R::Seven).abs() < f32::EPSILON);
}

#[test]
fn two_level_systems_weight_middles_double() {
    for system in [CountingSystem::OmegaII, CountingSystem::Zen] {
        assert!((system.weight(R::Five) - 2.0).abs() < f32::EPSILON);
        assert!((system.weight(R::Ten) - (-2.0)).abs() < f32::EPSILON);
    }
    // the systems differ only on the Ace
    assert!(CountingSystem::OmegaII.weight(R::Ace).abs() < f32::EPSILON);
    assert!((CountingSystem::Zen.weight(R::Ace) - (-1.0)).abs() < f32::EPSILON);
}

#[test]
fn halves_uses_half_steps() {
    assert!((CountingSystem::Halves.weight(R::Two) - 0.5).abs() < f32::EPSILON);
    assert!((CountingSystem::Halves.weight(R::Five) - 1.5).abs() < f32::EPSILON);
    assert!((CountingSystem::Halves.weight(R::Nine) - (-0.5)).abs() < f32::EPSILON);
    let counter = run(CountingSystem::Halves, 1, &[R::Two, R::Five, R::Nine]);
    assert!((counter.running_count() - 1.5).abs() < f32::EPSILON);
}

#[test]
fn labels_round_trip() {
    for system in [
        CountingSystem::HiLo,
        CountingSystem::Ko,
        CountingSystem::OmegaII,
        CountingSystem::Zen,
        CountingSystem::Halves,
    ] {
        assert_eq!(CountingSystem::from_label(system.label()), Some(system));
    }
    assert_eq!(CountingSystem::from_label("hilo"), Some(CountingSystem::HiLo));
    assert_eq!(CountingSystem::from_label("red7"), None);
}
