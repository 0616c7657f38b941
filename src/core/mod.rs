/// The card value type and suit, plus the single-card token parser.
mod card;
/// Export `Card`, `Suit`, `Value` and the lookup tables.
pub use self::card::{Card, Suit, Value, SUITS, VALUES};

/// The hand container and hand-string parsing.
mod hand;
/// Export `Hand`.
pub use self::hand::Hand;

/// The typed failures of the crate.
mod errors;
/// Export `HoldemError`.
pub use self::errors::HoldemError;

/// Hand categories, tie-break keys and the evaluator.
mod rank;
/// Export `HandCategory`, `HandRank` and the `Rankable` trait.
pub use self::rank::{HandCategory, HandRank, Rankable};
