use std::cmp::Ordering;
use std::fmt;

use crate::core::card::{Card, Value, VALUES};
use crate::core::errors::HoldemError;
use crate::core::hand::Hand;

/// The ten hand categories, weakest first.
///
/// The derived ordering is the poker ordering, so category comparison alone
/// decides any match-up between different categories.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum HandCategory {
    /// No matches at all.
    HighCard = 0,
    /// One card value matches another.
    OnePair = 1,
    /// Two different pairs of matching values.
    TwoPair = 2,
    /// Three of the same value.
    ThreeOfAKind = 3,
    /// Five values in a sequence.
    Straight = 4,
    /// Five cards of the same suit.
    Flush = 5,
    /// Three of one value and two of another.
    FullHouse = 6,
    /// Four of the same value.
    FourOfAKind = 7,
    /// Five values in a sequence, all of the same suit.
    StraightFlush = 8,
    /// An ace-high straight flush.
    RoyalFlush = 9,
}

impl HandCategory {
    /// The fixed English label for this category.
    pub fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "One Pair",
            HandCategory::TwoPair => "Two Pairs",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// The numeric score of the category, 0 through 9.
    pub fn score(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The result of ranking a hand: the category plus the tie-break key.
///
/// `tiebreak` holds card values most significant first (e.g. for a full
/// house the triple value then the pair value) and is only consulted when
/// two hands share a category.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct HandRank {
    /// Which of the ten categories the hand makes.
    pub category: HandCategory,
    /// Values breaking ties within the category, most significant first.
    pub tiebreak: Vec<Value>,
}

impl HandRank {
    /// Order two ranked hands, `Greater` meaning `self` wins.
    ///
    /// Categories decide first; equal categories fall through to an
    /// element-wise comparison of the tie-break keys. If one key runs out
    /// while every shared element matched, the hands are equal. That can
    /// only happen when the hands were ranked from different card counts.
    ///
    /// `HandRank` intentionally does not implement `Ord`: two equal-playing
    /// hands with different key lengths compare `Equal` here while `==` on
    /// the struct says otherwise. Pass this to `sort_by` instead.
    pub fn compare(&self, other: &HandRank) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            self.tiebreak
                .iter()
                .zip(other.tiebreak.iter())
                .map(|(a, b)| a.cmp(b))
                .find(|ord| *ord != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
    }
}

/// Bit mask for the wheel (Ace, two, three, four, five).
const WHEEL: u32 = 0b1_0000_0000_1111;

/// Find the high card of the best straight in a set of value bits, if any.
///
/// A bit survives the shifted AND iff it tops a run of five consecutive
/// values, so the highest surviving bit is the best straight's high card.
/// The wheel needs its own check: the Ace plays low there, making Five the
/// high card, so it ranks below the six-high straight.
fn straight_high(value_set: u32) -> Option<Value> {
    let run_tops =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    if run_tops != 0 {
        Some(VALUES[(31 - run_tops.leading_zeros()) as usize])
    } else if value_set & WHEEL == WHEEL {
        Some(Value::Five)
    } else {
        None
    }
}

/// The best `n` values of a value set, descending. Returns fewer when the
/// set is smaller than `n`.
fn best_values(value_set: u32, n: usize) -> Vec<Value> {
    (0..VALUES.len())
        .rev()
        .filter(|idx| value_set & (1 << idx) != 0)
        .take(n)
        .map(|idx| VALUES[idx])
        .collect()
}

/// All values appearing at least `n` times, descending.
fn values_with_count(value_to_count: &[u8; 13], n: u8) -> Vec<Value> {
    (0..VALUES.len())
        .rev()
        .filter(|idx| value_to_count[*idx] >= n)
        .map(|idx| VALUES[idx])
        .collect()
}

/// Anything that can be ranked as a poker hand. There are implementations
/// for `Hand`, `Vec<Card>` and card slices.
pub trait Rankable {
    /// The cards to rank.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the cards, finding the best five-card hand they contain.
    ///
    /// Works on five cards or more; with six or seven (Hold'em pocket plus
    /// board) the category and kickers are drawn from the best five-card
    /// sub-hand. Fewer than five cards is an error.
    ///
    /// # Examples
    /// ```
    /// use holdem_rank::core::{Hand, HandCategory, Rankable};
    ///
    /// let hand = Hand::new_from_str("H2 H3 D8 S8 DK C6 HT").unwrap();
    /// assert_eq!(HandCategory::OnePair, hand.rank().unwrap().category);
    /// ```
    fn rank(&self) -> Result<HandRank, HoldemError> {
        let mut value_to_count: [u8; 13] = [0; 13];
        let mut suit_value_sets: [u32; 4] = [0; 4];
        let mut value_set: u32 = 0;
        let mut card_count: usize = 0;

        for c in self.cards() {
            let v = c.value as usize;
            value_set |= 1 << v;
            value_to_count[v] += 1;
            suit_value_sets[c.suit as usize] |= 1 << v;
            card_count += 1;
        }

        if card_count < 5 {
            return Err(HoldemError::InvalidHandSize { given: card_count });
        }

        // Most specific category first; the first match wins. Flush and
        // straight presence are monotonic in card count, so the full
        // multiset can be inspected directly instead of enumerating
        // five-card subsets.

        // A straight flush needs the five straight-forming values inside
        // one suit's value set. A straight and a flush existing over
        // different cards is not enough.
        for suit_values in suit_value_sets {
            if suit_values.count_ones() >= 5 {
                if let Some(high) = straight_high(suit_values) {
                    let category = if high == Value::Ace {
                        HandCategory::RoyalFlush
                    } else {
                        HandCategory::StraightFlush
                    };
                    return Ok(HandRank {
                        category,
                        tiebreak: vec![high],
                    });
                }
            }
        }

        let triples = values_with_count(&value_to_count, 3);
        let pairs = values_with_count(&value_to_count, 2);

        if let Some(&quad) = values_with_count(&value_to_count, 4).first() {
            let mut tiebreak = vec![quad];
            tiebreak.extend(best_values(value_set & !(1 << quad as u32), 1));
            return Ok(HandRank {
                category: HandCategory::FourOfAKind,
                tiebreak,
            });
        }

        if let Some(&triple) = triples.first() {
            // Two triples make a full house with a pair carved from the
            // lower triple.
            let pair = triples
                .get(1)
                .copied()
                .or_else(|| pairs.iter().copied().find(|&p| p != triple));
            if let Some(pair) = pair {
                return Ok(HandRank {
                    category: HandCategory::FullHouse,
                    tiebreak: vec![triple, pair],
                });
            }
        }

        if let Some(suit_values) = suit_value_sets
            .iter()
            .find(|suit_values| suit_values.count_ones() >= 5)
        {
            return Ok(HandRank {
                category: HandCategory::Flush,
                tiebreak: best_values(*suit_values, 5),
            });
        }

        if let Some(high) = straight_high(value_set) {
            return Ok(HandRank {
                category: HandCategory::Straight,
                tiebreak: vec![high],
            });
        }

        if let Some(&triple) = triples.first() {
            let mut tiebreak = vec![triple];
            tiebreak.extend(best_values(value_set & !(1 << triple as u32), 2));
            return Ok(HandRank {
                category: HandCategory::ThreeOfAKind,
                tiebreak,
            });
        }

        if pairs.len() >= 2 {
            // With three pairs available only the two highest play.
            let (high_pair, low_pair) = (pairs[0], pairs[1]);
            let used = (1 << high_pair as u32) | (1 << low_pair as u32);
            let mut tiebreak = vec![high_pair, low_pair];
            tiebreak.extend(best_values(value_set & !used, 1));
            return Ok(HandRank {
                category: HandCategory::TwoPair,
                tiebreak,
            });
        }

        if let Some(&pair) = pairs.first() {
            let mut tiebreak = vec![pair];
            tiebreak.extend(best_values(value_set & !(1 << pair as u32), 3));
            return Ok(HandRank {
                category: HandCategory::OnePair,
                tiebreak,
            });
        }

        Ok(HandRank {
            category: HandCategory::HighCard,
            tiebreak: best_values(value_set, 5),
        })
    }
}

impl Rankable for Hand {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for &[Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
