/// Module with the showdown comparison and leaderboard code.
mod showdown;
/// Export `rank_with_board`, `showdown` and `ShowdownEntry`.
pub use self::showdown::{rank_with_board, showdown, ShowdownEntry};
