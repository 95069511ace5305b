use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use super::card_set::Node;
use super::{Card, CardMatchError, CardSet};

/// A position in a `CardSet`: either at a node or past the end.
///
/// Nodes don't know their parent, so stepping to the successor or
/// predecessor without a child to descend into searches down from the
/// root of the set. That costs O(height) per step.
///
/// The cursor borrows the set, so the set can't be changed while a
/// cursor into it is alive.
///
/// ```
/// use card_match::core::{Card, CardSet, Rank, Suit};
///
/// let king = Card::new(Suit::Heart, Rank::King);
/// let hand: CardSet = [king].into_iter().collect();
///
/// let mut cursor = hand.begin();
/// assert_eq!(Some(&king), cursor.get());
/// cursor.move_next();
/// assert!(cursor == hand.end());
/// cursor.move_prev();
/// assert_eq!(Some(&king), cursor.get());
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    set: &'a CardSet,
    node: Option<&'a Node>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(set: &'a CardSet, node: Option<&'a Node>) -> Self {
        Self { set, node }
    }

    /// The card under the cursor.
    ///
    /// Asking the end cursor for a card is an error rather than a
    /// sentinel value.
    ///
    /// ```
    /// use card_match::core::{CardMatchError, CardSet};
    ///
    /// let hand = CardSet::new();
    /// assert!(matches!(hand.end().card(), Err(CardMatchError::PastTheEnd)));
    /// ```
    pub fn card(&self) -> Result<&'a Card, CardMatchError> {
        self.get().ok_or(CardMatchError::PastTheEnd)
    }

    /// The card under the cursor, `None` at the end.
    pub fn get(&self) -> Option<&'a Card> {
        self.node.map(|n| &n.card)
    }

    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Step to the next larger card. Stepping from the largest card
    /// reaches the end. The end cursor stays where it is.
    pub fn move_next(&mut self) {
        self.node = self.node.and_then(|n| self.successor(n));
    }

    /// Step to the next smaller card. Stepping from the smallest card
    /// reaches the end, and stepping back from the end lands on the
    /// largest card.
    pub fn move_prev(&mut self) {
        self.node = match self.node {
            Some(n) => self.predecessor(n),
            None => self.set.root().map(Node::rightmost),
        };
    }

    fn successor(&self, node: &'a Node) -> Option<&'a Node> {
        if let Some(right) = node.right.as_deref() {
            return Some(right.leftmost());
        }

        // Lowest ancestor that is larger than us.
        let mut successor = None;
        let mut current = self.set.root();
        while let Some(candidate) = current {
            current = match node.card.cmp(&candidate.card) {
                Ordering::Less => {
                    successor = Some(candidate);
                    candidate.left.as_deref()
                }
                Ordering::Greater => candidate.right.as_deref(),
                Ordering::Equal => break,
            };
        }
        successor
    }

    fn predecessor(&self, node: &'a Node) -> Option<&'a Node> {
        if let Some(left) = node.left.as_deref() {
            return Some(left.rightmost());
        }

        // Lowest ancestor that is smaller than us.
        let mut predecessor = None;
        let mut current = self.set.root();
        while let Some(candidate) = current {
            current = match node.card.cmp(&candidate.card) {
                Ordering::Greater => {
                    predecessor = Some(candidate);
                    candidate.right.as_deref()
                }
                Ordering::Less => candidate.left.as_deref(),
                Ordering::Equal => break,
            };
        }
        predecessor
    }
}

/// Cursors are equal when they sit on the same node of the same set, or
/// are both the end of the same set.
impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        let same_node = match (self.node, other.node) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_node && ptr::eq(self.set, other.set)
    }
}

impl Eq for Cursor<'_> {}

impl fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(card) => f.debug_tuple("Cursor").field(card).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

/// Iterator over a `CardSet` in ascending order, built from a pair of
/// cursors walking toward each other.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    front: Cursor<'a>,
    back: Cursor<'a>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(set: &'a CardSet) -> Self {
        Self {
            front: set.begin(),
            back: set.rbegin(),
            remaining: set.len(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Card;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let card = self.front.get()?;
        self.front.move_next();
        self.remaining -= 1;
        Some(card)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let card = self.back.get()?;
        self.back.move_prev();
        self.remaining -= 1;
        Some(card)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
