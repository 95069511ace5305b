//! This is the core module. It exports the card types and the
//! ordered container. Nothing in here knows about the game.

/// card.rs has rank and suit.
mod card;
/// Re-export Card, Rank, and Suit
pub use self::card::{Card, Rank, Suit};

/// The error type shared by the whole crate.
mod error;
pub use self::error::CardMatchError;

/// Unbalanced binary search tree of cards.
mod card_set;
pub use self::card_set::CardSet;

/// Walking a `CardSet` in both directions without parent links.
mod cursor;
/// Export the cursor and the std iterator built on it.
pub use self::cursor::{Cursor, Iter};
