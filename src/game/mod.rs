//! The matching game, plus reading hands from text and printing them.

/// The `Hand` trait the game is written against.
mod hand;
pub use self::hand::Hand;

/// Turn loop and its results.
mod matching;
pub use self::matching::{GameState, GameSummary, MatchEvent, MatchingGame, Player, play_game};

/// Lenient line parsing.
mod parse;
pub use self::parse::parse_card;

/// Reading hands from readers and files.
mod loader;
pub use self::loader::{load_hand, load_hand_into, read_hand, read_hand_into};

mod report;
pub use self::report::{card_listing, final_hand_line};
