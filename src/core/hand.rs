use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::core::card::Card;
use crate::core::errors::HoldemError;

/// An unordered collection of cards.
///
/// `Hand` does not deduplicate: a physically impossible hand holding the
/// same (value, suit) twice is the caller's mistake and will still rank.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Create an empty hand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand from already-parsed cards.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Parse a hand from whitespace-separated suit-first tokens.
    ///
    /// The placeholder token `-` means "no card supplied" and is skipped;
    /// the first malformed token aborts the parse with its error.
    ///
    /// # Examples
    /// ```
    /// use holdem_rank::core::Hand;
    ///
    /// let board = Hand::new_from_str("SA DQ CK - -").unwrap();
    /// assert_eq!(3, board.len());
    /// ```
    pub fn new_from_str(input: &str) -> Result<Self, HoldemError> {
        input
            .split_whitespace()
            .filter(|token| *token != "-")
            .map(Card::try_from)
            .collect()
    }

    /// Add a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Iterate over the cards.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Allow indexing and slice methods directly on the hand.
impl Deref for Hand {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}

impl DerefMut for Hand {
    fn deref_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }
}

/// Hands display as the space-separated tokens they parse from.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Suit, Value};

    #[test]
    fn test_parse_hand() {
        let hand = Hand::new_from_str("CT CJ CQ CK CA").unwrap();
        assert_eq!(5, hand.len());
        assert_eq!(Card::new(Value::Ten, Suit::Club), hand[0]);
        assert_eq!(Card::new(Value::Ace, Suit::Club), hand[4]);
    }

    #[test]
    fn test_parse_skips_placeholder() {
        let hand = Hand::new_from_str("HA C3 - - -").unwrap();
        assert_eq!(2, hand.len());
        assert!(Hand::new_from_str("- - -").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reports_offending_token() {
        assert_eq!(
            Err(HoldemError::UnknownSuitChar('X')),
            Hand::new_from_str("HA XQ CK")
        );
        assert_eq!(
            Err(HoldemError::InvalidCardToken("HAC".to_string())),
            Hand::new_from_str("HAC DK")
        );
    }

    #[test]
    fn test_display_round_trip() {
        let input = "SA DQ CK D6 H6";
        let hand = Hand::new_from_str(input).unwrap();
        assert_eq!(input, hand.to_string());
    }

    #[test]
    fn test_from_iterator() {
        let hand: Hand = Hand::new_from_str("H2 H3 H4")
            .unwrap()
            .iter()
            .copied()
            .collect();
        assert_eq!(3, hand.len());
    }
}
