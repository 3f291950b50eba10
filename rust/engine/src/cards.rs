use serde::{Deserialize, Serialize};

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Returns true when the suit prints red (hearts, diamonds).
    /// Used by side-bet classification to tell colored pairs from mixed ones.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

/// Represents the rank of a playing card from Two through Ace.
///
/// Blackjack values are derived, not stored: number ranks count as their
/// numeral, face cards count as 10, and the Ace counts as either 1 or 11
/// (see [`Rank::values`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (counts 10)
    Jack,
    /// Queen (counts 10)
    Queen,
    /// King (counts 10)
    King,
    /// Ace (counts 1 or 11)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Rank {
        match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// All values this rank can contribute to a hand total.
    ///
    /// # Examples
    ///
    /// ```
    /// use pitboss_engine::cards::Rank;
    ///
    /// assert_eq!(Rank::Seven.values(), &[7]);
    /// assert_eq!(Rank::Queen.values(), &[10]);
    /// assert_eq!(Rank::Ace.values(), &[1, 11]);
    /// ```
    pub fn values(&self) -> &'static [u32] {
        match self {
            Rank::Two => &[2],
            Rank::Three => &[3],
            Rank::Four => &[4],
            Rank::Five => &[5],
            Rank::Six => &[6],
            Rank::Seven => &[7],
            Rank::Eight => &[8],
            Rank::Nine => &[9],
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => &[10],
            Rank::Ace => &[1, 11],
        }
    }

    /// The hard value of this rank: every Ace counted as 1.
    pub fn hard_value(&self) -> u32 {
        match self {
            Rank::Ace => 1,
            other => other.values()[0],
        }
    }
}

/// Represents a single playing card with a suit and rank.
///
/// Cards are immutable once drawn. Whether a card is face-up or face-down is
/// tracked by its placement in a hand (the dealer's hole card), never on the
/// card itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// One standard 52-card deck in canonical order.
pub fn standard_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}
