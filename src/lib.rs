//! card_match plays a two player card matching game.
//!
//! Each player's hand is a [`CardSet`](crate::core::CardSet), an unbalanced binary search
//! tree of unique cards. Players take turns looking for a card that is
//! also in the other hand. Alice scans her hand from the smallest card
//! up, Bob scans his from the largest card down. A match is removed from
//! both hands and the turn passes. The game ends as soon as a turn finds
//! nothing.
//!
//! ```
//! use card_match::core::{Card, CardSet, Rank, Suit};
//! use card_match::game::play_game;
//!
//! let shared = Card::new(Suit::Club, Rank::Ace);
//! let mut alice: CardSet = [shared, Card::new(Suit::Diamond, Rank::Two)].into_iter().collect();
//! let mut bob: CardSet = [shared, Card::new(Suit::Spade, Rank::Three)].into_iter().collect();
//!
//! let summary = play_game(&mut alice, &mut bob);
//!
//! assert_eq!(1, summary.matches.len());
//! assert!(!alice.contains(&shared));
//! assert!(!bob.contains(&shared));
//! ```

/// Card types and the ordered container. Everything in core should
/// be agnostic to the game being played.
pub mod core;
/// The matching game and the plumbing to load and print hands.
pub mod game;
