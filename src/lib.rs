//! `holdem_rank` classifies Texas Hold'em poker hands into the ten standard
//! categories, compares them with kicker-level tie breaking, and orders a
//! showdown field into a leaderboard.
//!
//! The whole crate is a pure-function core: no I/O, no shared state, every
//! call gets its own values back. Ranking a hand is bounded work over at
//! most seven cards, so it is safe to call from as many threads as you
//! like.
//!
//! Cards parse from suit-first two character tokens (`"HA"` is the ace of
//! hearts), and hands from whitespace-separated token lists where `-`
//! stands for a card that was not supplied:
//!
//! ```
//! use holdem_rank::core::{Hand, HandCategory, Rankable};
//!
//! let hand = Hand::new_from_str("CT CJ CQ CK CA").unwrap();
//! let rank = hand.rank().unwrap();
//! assert_eq!(HandCategory::RoyalFlush, rank.category);
//! assert_eq!("Royal Flush", rank.category.label());
//! ```
//!
//! Ranking a field of players sharing a board:
//!
//! ```
//! use holdem_rank::core::Hand;
//! use holdem_rank::holdem::{rank_with_board, showdown};
//!
//! let board = Hand::new_from_str("SA DQ CK D6 H6").unwrap();
//! let alice = Hand::new_from_str("HA C3").unwrap();
//! let bob = Hand::new_from_str("CQ H4").unwrap();
//!
//! let places = showdown(vec![
//!     ("alice", rank_with_board(&alice, &board).unwrap()),
//!     ("bob", rank_with_board(&bob, &board).unwrap()),
//! ]);
//! assert_eq!(("alice", 1), (places[0].id, places[0].place));
//! assert_eq!(("bob", 2), (places[1].id, places[1].place));
//! ```

/// The core module: cards, hands, parse errors and the hand evaluator.
pub mod core;

/// Hold'em-specific helpers: pocket-plus-board ranking and showdowns.
pub mod holdem;
