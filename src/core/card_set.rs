use std::cmp::Ordering;
use std::fmt;

use super::{Card, Cursor, Iter};

type Link = Option<Box<Node>>;

/// One node of the tree. Children are owned, there is no parent link.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) card: Card,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    fn new(card: Card) -> Self {
        Self {
            card,
            left: None,
            right: None,
        }
    }

    /// Smallest node in the subtree rooted here.
    pub(crate) fn leftmost(&self) -> &Node {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        node
    }

    /// Largest node in the subtree rooted here.
    pub(crate) fn rightmost(&self) -> &Node {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        node
    }

    fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        deepest
    }
}

/// Copy a tree node for node, keeping its shape.
fn copy_tree(root: Option<&Node>) -> Link {
    enum Step<'a> {
        Visit(&'a Node),
        Build(&'a Node),
    }

    // Children are built before their parent and wait on `built`, left
    // below right.
    let mut work: Vec<Step<'_>> = root.map(Step::Visit).into_iter().collect();
    let mut built: Vec<Box<Node>> = Vec::new();
    while let Some(step) = work.pop() {
        match step {
            Step::Visit(node) => {
                work.push(Step::Build(node));
                work.extend(node.right.as_deref().map(Step::Visit));
                work.extend(node.left.as_deref().map(Step::Visit));
            }
            Step::Build(node) => {
                let right = if node.right.is_some() { built.pop() } else { None };
                let left = if node.left.is_some() { built.pop() } else { None };
                built.push(Box::new(Node {
                    card: node.card,
                    left,
                    right,
                }));
            }
        }
    }
    built.pop()
}

/// An ordered set of unique cards stored in an unbalanced binary
/// search tree.
///
/// Every card in a node's left subtree is less than the node's card and
/// every card in its right subtree is greater. The shape depends only on
/// insertion order; nothing rebalances the tree.
///
/// ```
/// use card_match::core::{Card, CardSet, Rank, Suit};
///
/// let mut hand = CardSet::new();
/// hand.insert(Card::new(Suit::Heart, Rank::King));
/// hand.insert(Card::new(Suit::Club, Rank::Ace));
///
/// assert_eq!(2, hand.len());
/// assert_eq!(" c a h k", hand.to_string());
/// ```
#[derive(Default)]
pub struct CardSet {
    root: Link,
    len: usize,
}

impl CardSet {
    /// Create a new empty set
    ///
    /// ```
    /// use card_match::core::CardSet;
    ///
    /// let hand = CardSet::new();
    /// assert!(hand.is_empty());
    /// assert!(hand.begin() == hand.end());
    /// ```
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a card. Returns `false` and leaves the tree untouched if an
    /// equal card is already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match card.cmp(&node.card) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *link = Some(Box::new(Node::new(card)));
        self.len += 1;
        true
    }

    /// Remove a card from the set. Removing a card that isn't there is a
    /// no-op and returns `false`.
    ///
    /// ```
    /// use card_match::core::{Card, CardSet, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Spade, Rank::Two);
    /// let mut hand: CardSet = [card].into_iter().collect();
    ///
    /// assert!(hand.remove(&card));
    /// assert!(!hand.contains(&card));
    /// assert!(!hand.remove(&card));
    /// ```
    pub fn remove(&mut self, card: &Card) -> bool {
        let mut link = &mut self.root;
        loop {
            let ord = match link.as_ref() {
                Some(node) => card.cmp(&node.card),
                None => return false,
            };
            if ord == Ordering::Equal {
                break;
            }
            let Some(node) = link else {
                return false;
            };
            link = match ord {
                Ordering::Less => &mut node.left,
                _ => &mut node.right,
            };
        }
        Self::unlink(link);
        self.len -= 1;
        true
    }

    /// Take the node at `link` out of the tree.
    fn unlink(link: &mut Link) {
        let Some(node) = link else {
            return;
        };

        if node.left.is_some() && node.right.is_some() {
            // Two children: the in-order successor is the leftmost node of
            // the right subtree. It has no left child, so its right child
            // takes its place and its card moves up here.
            let mut next = &mut node.right;
            while next.as_ref().is_some_and(|n| n.left.is_some()) {
                let Some(n) = next else {
                    break;
                };
                next = &mut n.left;
            }
            if let Some(mut successor) = next.take() {
                *next = successor.right.take();
                node.card = successor.card;
            }
        } else {
            let child = node.left.take().or_else(|| node.right.take());
            *link = child;
        }
    }

    /// Is this card in the set? Runs in O(height).
    pub fn contains(&self, card: &Card) -> bool {
        self.find_node(card).is_some()
    }

    /// Cursor at the given card, or the end cursor if it isn't present.
    pub fn find(&self, card: &Card) -> Cursor<'_> {
        Cursor::new(self, self.find_node(card))
    }

    fn find_node(&self, card: &Card) -> Option<&Node> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match card.cmp(&node.card) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root to leaf path.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// The smallest card.
    pub fn first(&self) -> Option<&Card> {
        self.root.as_deref().map(|n| &n.leftmost().card)
    }

    /// The largest card.
    pub fn last(&self) -> Option<&Card> {
        self.root.as_deref().map(|n| &n.rightmost().card)
    }

    /// Release every node.
    pub fn clear(&mut self) {
        // Explicit stack. A list shaped tree is as deep as it is long.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Cursor at the smallest card, or the end cursor when empty.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::new(self, self.root.as_deref().map(Node::leftmost))
    }

    /// The past-the-end cursor.
    pub fn end(&self) -> Cursor<'_> {
        Cursor::new(self, None)
    }

    /// Cursor at the largest card, or the end cursor when empty.
    pub fn rbegin(&self) -> Cursor<'_> {
        Cursor::new(self, self.root.as_deref().map(Node::rightmost))
    }

    /// Same sentinel as `end`. Both mean "no node".
    pub fn rend(&self) -> Cursor<'_> {
        self.end()
    }

    /// Iterate over the cards in ascending order. The iterator is double
    /// ended so `.rev()` gives descending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub(crate) fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

impl Drop for CardSet {
    fn drop(&mut self) {
        self.clear();
    }
}

impl Clone for CardSet {
    /// Deep copy. The clone has the same shape and owns its own nodes.
    fn clone(&self) -> Self {
        Self {
            root: copy_tree(self.root.as_deref()),
            len: self.len,
        }
    }

    /// Releases the current nodes before copying the source's.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = copy_tree(source.root.as_deref());
        self.len = source.len;
    }
}

/// Two sets are equal when they hold the same cards. Shape is ignored.
impl PartialEq for CardSet {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for CardSet {}

impl fmt::Debug for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// In-order listing with every card preceded by a single space.
impl fmt::Display for CardSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in self {
            write!(f, " {}", card)?;
        }
        Ok(())
    }
}

impl Extend<Card> for CardSet {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        for card in iter {
            self.insert(card);
        }
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        let mut set = CardSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a Card;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CardSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct CardSetVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for CardSetVisitor {
    type Value = CardSet;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of cards")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut set = CardSet::new();
        while let Some(card) = seq.next_element()? {
            set.insert(card);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CardSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CardSetVisitor)
    }
}
