use std::cmp::Ordering;

use crate::core::{Card, HandRank, HoldemError, Rankable};

/// Rank a player's pocket cards together with the community cards.
///
/// The pocket and board are pooled and the best five-card hand of the
/// combined pool decides the result, kickers included. The pool needs at
/// least five cards in total; a full board with two pocket cards gives the
/// usual best five of seven.
///
/// # Examples
/// ```
/// use holdem_rank::core::{Hand, HandCategory};
/// use holdem_rank::holdem::rank_with_board;
///
/// let board = Hand::new_from_str("SA DQ CK D6 H6").unwrap();
/// let pocket = Hand::new_from_str("HA C3").unwrap();
/// let rank = rank_with_board(&pocket, &board).unwrap();
/// assert_eq!(HandCategory::TwoPair, rank.category);
/// ```
pub fn rank_with_board(pocket: &[Card], board: &[Card]) -> Result<HandRank, HoldemError> {
    let pool: Vec<Card> = pocket.iter().chain(board.iter()).copied().collect();
    pool.rank()
}

/// One row of a showdown leaderboard.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowdownEntry<I> {
    /// The caller's identifier for the hand.
    pub id: I,
    /// The hand's evaluation.
    pub hand_rank: HandRank,
    /// One-based leaderboard place; exact ties share a place.
    pub place: usize,
}

/// Order a field of ranked hands into a leaderboard, best first.
///
/// Places follow competition ranking: hands that compare equal share a
/// place and the next distinct hand takes its one-based sorted position,
/// so a three-hand field with the top two tied places 1, 1, 3.
///
/// Order among exact ties is unobservable, so sort stability is not
/// relied on.
///
/// # Examples
/// ```
/// use holdem_rank::core::{Hand, Rankable};
/// use holdem_rank::holdem::showdown;
///
/// let alice = Hand::new_from_str("HT SQ ST DT CT").unwrap().rank().unwrap();
/// let bob = Hand::new_from_str("H3 S8 H5 D8 CA").unwrap().rank().unwrap();
/// let places = showdown(vec![("alice", alice), ("bob", bob)]);
/// assert_eq!(("alice", 1), (places[0].id, places[0].place));
/// assert_eq!(("bob", 2), (places[1].id, places[1].place));
/// ```
pub fn showdown<I>(mut entries: Vec<(I, HandRank)>) -> Vec<ShowdownEntry<I>> {
    entries.sort_by(|a, b| b.1.compare(&a.1));

    let mut leaderboard: Vec<ShowdownEntry<I>> = Vec::with_capacity(entries.len());
    for (position, (id, hand_rank)) in entries.into_iter().enumerate() {
        let place = match leaderboard.last() {
            Some(prev) if prev.hand_rank.compare(&hand_rank) == Ordering::Equal => prev.place,
            _ => position + 1,
        };
        leaderboard.push(ShowdownEntry {
            id,
            hand_rank,
            place,
        });
    }
    leaderboard
}
