use thiserror::Error;

/// Errors from parsing card tokens and from ranking under-sized hands.
///
/// There are no other failure modes: ranking is total over any well-formed
/// hand of five or more cards.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum HoldemError {
    #[error("Card token must be exactly two characters, got {0:?}")]
    InvalidCardToken(String),

    #[error("Unknown card value character {0:?}, expected one of 2-9, T, J, Q, K, A")]
    UnknownValueChar(char),

    #[error("Unknown suit character {0:?}, expected one of S, H, D, C")]
    UnknownSuitChar(char),

    #[error("Ranking needs at least five cards, got {given}")]
    InvalidHandSize { given: usize },
}
