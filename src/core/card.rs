use std::fmt;

use crate::core::errors::HoldemError;

/// Card suits.
///
/// The discriminant is used to index per-suit tables in the evaluator.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Diamonds
    Diamond = 2,
    /// Clubs
    Club = 3,
}

/// All four suits, in discriminant order.
pub const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

impl Suit {
    /// Parse a suit from its single-letter form.
    pub fn from_char(c: char) -> Result<Self, HoldemError> {
        match c {
            'S' => Ok(Suit::Spade),
            'H' => Ok(Suit::Heart),
            'D' => Ok(Suit::Diamond),
            'C' => Ok(Suit::Club),
            _ => Err(HoldemError::UnknownSuitChar(c)),
        }
    }

    /// The single-letter form used in card tokens.
    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }
}

/// Card values, Two lowest and Ace highest.
///
/// The derived ordering is the poker ordering; the discriminant is the
/// bit position the evaluator uses in its value sets.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// All thirteen values, lowest first, so `VALUES[v as usize] == v`.
pub const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Parse a value from its single-character form.
    pub fn from_char(c: char) -> Result<Self, HoldemError> {
        match c {
            '2' => Ok(Value::Two),
            '3' => Ok(Value::Three),
            '4' => Ok(Value::Four),
            '5' => Ok(Value::Five),
            '6' => Ok(Value::Six),
            '7' => Ok(Value::Seven),
            '8' => Ok(Value::Eight),
            '9' => Ok(Value::Nine),
            'T' => Ok(Value::Ten),
            'J' => Ok(Value::Jack),
            'Q' => Ok(Value::Queen),
            'K' => Ok(Value::King),
            'A' => Ok(Value::Ace),
            _ => Err(HoldemError::UnknownValueChar(c)),
        }
    }

    /// The single-character form used in card tokens.
    pub fn to_char(self) -> char {
        match self {
            Value::Two => '2',
            Value::Three => '3',
            Value::Four => '4',
            Value::Five => '5',
            Value::Six => '6',
            Value::Seven => '7',
            Value::Eight => '8',
            Value::Nine => '9',
            Value::Ten => 'T',
            Value::Jack => 'J',
            Value::Queen => 'Q',
            Value::King => 'K',
            Value::Ace => 'A',
        }
    }

    /// The numeric rank, 2 through 14 with Ace as 14.
    pub fn to_int(self) -> u8 {
        self as u8 + 2
    }
}

/// A single playing card. There is no identity beyond (value, suit);
/// copies compare equal.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The value of the card, ordered with Ace high.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a card from a value and suit.
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Parse a card from a suit-first two character token, e.g. `"HA"` for the
/// ace of hearts.
impl TryFrom<&str> for Card {
    type Error = HoldemError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(s), Some(v), None) => Ok(Card {
                value: Value::from_char(v)?,
                suit: Suit::from_char(s)?,
            }),
            _ => Err(HoldemError::InvalidCardToken(token.to_string())),
        }
    }
}

/// Cards display in the same suit-first token form they parse from.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.to_char(), self.value.to_char())
    }
}
