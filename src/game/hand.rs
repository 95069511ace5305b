use std::collections::BTreeSet;

use crate::core::{Card, CardSet};

/// A player's hand as the matching game sees it.
///
/// The game only ever looks for membership, removes matched cards and
/// scans the hand in order, so that is all a hand has to offer. Scans
/// yield cards by value; the game finishes a scan before it removes
/// anything.
pub trait Hand {
    /// Is this card in the hand?
    fn contains(&self, card: &Card) -> bool;

    /// Remove a card, returning `true` if it was there.
    fn remove(&mut self, card: &Card) -> bool;

    /// How many cards are left.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cards from smallest to largest.
    fn ascending(&self) -> impl Iterator<Item = Card> + '_;

    /// Cards from largest to smallest.
    fn descending(&self) -> impl Iterator<Item = Card> + '_;
}

/// The tree hand walks its cursors directly: `begin` forward for the
/// ascending scan, `rbegin` backward for the descending one.
impl Hand for CardSet {
    fn contains(&self, card: &Card) -> bool {
        CardSet::contains(self, card)
    }

    fn remove(&mut self, card: &Card) -> bool {
        CardSet::remove(self, card)
    }

    fn len(&self) -> usize {
        CardSet::len(self)
    }

    fn ascending(&self) -> impl Iterator<Item = Card> + '_ {
        let mut cursor = self.begin();
        std::iter::from_fn(move || {
            let card = *cursor.get()?;
            cursor.move_next();
            Some(card)
        })
    }

    fn descending(&self) -> impl Iterator<Item = Card> + '_ {
        let mut cursor = self.rbegin();
        std::iter::from_fn(move || {
            let card = *cursor.get()?;
            cursor.move_prev();
            Some(card)
        })
    }
}

/// The std ordered set plays the same game. Useful for checking the tree
/// against a known good container.
impl Hand for BTreeSet<Card> {
    fn contains(&self, card: &Card) -> bool {
        BTreeSet::contains(self, card)
    }

    fn remove(&mut self, card: &Card) -> bool {
        BTreeSet::remove(self, card)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn ascending(&self) -> impl Iterator<Item = Card> + '_ {
        self.iter().copied()
    }

    fn descending(&self) -> impl Iterator<Item = Card> + '_ {
        self.iter().rev().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    fn sample() -> Vec<Card> {
        vec![
            Card::new(Suit::Spade, Rank::Four),
            Card::new(Suit::Club, Rank::Queen),
            Card::new(Suit::Heart, Rank::Ace),
            Card::new(Suit::Diamond, Rank::Ten),
        ]
    }

    fn check_hand<H: Hand + FromIterator<Card>>() {
        let mut hand: H = sample().into_iter().collect();
        let mut sorted = sample();
        sorted.sort();

        assert_eq!(4, hand.len());
        assert_eq!(sorted, hand.ascending().collect::<Vec<_>>());
        sorted.reverse();
        assert_eq!(sorted, hand.descending().collect::<Vec<_>>());

        let queen = Card::new(Suit::Club, Rank::Queen);
        assert!(hand.contains(&queen));
        assert!(hand.remove(&queen));
        assert!(!hand.remove(&queen));
        assert!(!hand.contains(&queen));
        assert_eq!(3, hand.len());
        assert!(!hand.is_empty());
    }

    #[test]
    fn test_card_set_hand() {
        check_hand::<CardSet>();
    }

    #[test]
    fn test_btree_hand() {
        check_hand::<BTreeSet<Card>>();
    }

    #[test]
    fn test_empty_scans() {
        let hand = CardSet::new();
        assert!(Hand::is_empty(&hand));
        assert_eq!(0, hand.ascending().count());
        assert_eq!(0, hand.descending().count());
    }

    #[test]
    fn test_scan_matches_iter() {
        let hand: CardSet = Card::deck().step_by(5).collect();
        assert!(hand.ascending().eq(hand.iter().copied()));
        assert!(hand.descending().eq(hand.iter().rev().copied()));
    }
}
