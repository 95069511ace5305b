use std::fmt;
use std::str::FromStr;

use super::CardMatchError;

/// Card rank.
///
/// Ranks are ordered ace low: `a < 2 < ... < 10 < j < q < k`.
/// Any symbol that isn't a recognized rank is kept as `Other` and
/// sorts before every recognized rank.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Rank {
    /// Blank or unrecognized symbol. Never a recognized one when built
    /// through `from_symbol` or `Card::new`.
    Other(char),
    /// a
    Ace,
    /// 2
    Two,
    /// 3
    Three,
    /// 4
    Four,
    /// 5
    Five,
    /// 6
    Six,
    /// 7
    Seven,
    /// 8
    Eight,
    /// 9
    Nine,
    /// t, printed as 10
    Ten,
    /// j
    Jack,
    /// q
    Queen,
    /// k
    King,
}

/// Constant of all the recognized ranks, lowest first.
/// This is what `Rank::ranks()` returns
const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Rank {
    /// Get all of the recognized `Rank`'s in ascending order.
    pub fn ranks() -> [Rank; 13] {
        RANKS
    }

    /// Map a lower case rank symbol to a rank.
    ///
    /// Ten uses the single symbol `t`.
    ///
    /// ```
    /// use card_match::core::Rank;
    ///
    /// assert_eq!(Some(Rank::Ten), Rank::from_char('t'));
    /// assert_eq!(Some(Rank::Ace), Rank::from_char('a'));
    /// assert_eq!(None, Rank::from_char('x'));
    /// ```
    pub const fn from_char(c: char) -> Option<Rank> {
        match c {
            'a' => Some(Rank::Ace),
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            't' => Some(Rank::Ten),
            'j' => Some(Rank::Jack),
            'q' => Some(Rank::Queen),
            'k' => Some(Rank::King),
            _ => None,
        }
    }

    /// Like `from_char` but keeps unrecognized symbols as `Rank::Other`.
    pub const fn from_symbol(c: char) -> Rank {
        match Rank::from_char(c) {
            Some(rank) => rank,
            None => Rank::Other(c),
        }
    }

    /// Turn `Other` holding a recognized symbol into that rank.
    ///
    /// ```
    /// use card_match::core::Rank;
    ///
    /// assert_eq!(Rank::King, Rank::Other('k').normalize());
    /// assert_eq!(Rank::Other('x'), Rank::Other('x').normalize());
    /// ```
    pub const fn normalize(self) -> Rank {
        match self {
            Rank::Other(c) => Rank::from_symbol(c),
            rank => rank,
        }
    }

    /// The single character symbol for this rank.
    pub fn to_char(self) -> char {
        match self {
            Rank::Other(c) => c,
            Rank::Ace => 'a',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 't',
            Rank::Jack => 'j',
            Rank::Queen => 'q',
            Rank::King => 'k',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ten => f.write_str("10"),
            r => write!(f, "{}", r.to_char()),
        }
    }
}

/// Enum for the four different suits.
///
/// Suits are ranked `c < d < s < h`, which is not alphabetical.
/// Unrecognized symbols sort before all of them.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Blank or unrecognized symbol. Never a recognized one when built
    /// through `from_symbol` or `Card::new`.
    Other(char),
    /// Clubs
    Club,
    /// Diamonds
    Diamond,
    /// Spades
    Spade,
    /// Hearts
    Heart,
}

/// All of the recognized `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Spade, Suit::Heart];

impl Suit {
    /// Provide all the recognized suits, lowest first.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub const fn from_char(s: char) -> Option<Suit> {
        match s {
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            _ => None,
        }
    }

    /// Like `from_char` but keeps unrecognized symbols as `Suit::Other`.
    pub const fn from_symbol(s: char) -> Suit {
        match Suit::from_char(s) {
            Some(suit) => suit,
            None => Suit::Other(s),
        }
    }

    /// Turn `Other` holding a recognized symbol into that suit.
    pub const fn normalize(self) -> Suit {
        match self {
            Suit::Other(s) => Suit::from_symbol(s),
            suit => suit,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Other(c) => c,
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Spade => 's',
            Suit::Heart => 'h',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card.
///
/// Cards are ordered by suit first and then by rank. The field order
/// matters here since `Ord` is derived.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The suit of this card.
    pub suit: Suit,
    /// The rank of this card.
    pub rank: Rank,
}

impl Card {
    /// Create a new card. An `Other` holding a recognized symbol becomes
    /// that suit or rank, so equal looking cards are equal.
    ///
    /// ```
    /// use card_match::core::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Suit::Heart, Rank::King);
    /// assert_eq!("h k", card.to_string());
    /// assert_eq!(card, Card::new(Suit::Other('h'), Rank::Other('k')));
    /// ```
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit: suit.normalize(),
            rank: rank.normalize(),
        }
    }

    /// Is this the blank card produced for input that can't be parsed?
    pub fn is_blank(&self) -> bool {
        *self == Card::default()
    }

    /// Every recognized card, in ascending order.
    pub fn deck() -> impl Iterator<Item = Card> {
        Suit::suits()
            .into_iter()
            .flat_map(|suit| Rank::ranks().into_iter().map(move |rank| Card::new(suit, rank)))
    }
}

impl Default for Card {
    /// The blank card. Both symbols are a space.
    fn default() -> Self {
        Self {
            suit: Suit::Other(' '),
            rank: Rank::Other(' '),
        }
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Card {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Card::new(u.arbitrary()?, u.arbitrary()?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

impl FromStr for Card {
    type Err = CardMatchError;

    /// Strict parsing. Accepts `"h k"`, `"hk"`, `"c 10"` and `"ct"` in
    /// any case. Unlike the lenient line parser this rejects anything
    /// that isn't a recognized card.
    ///
    /// ```
    /// use card_match::core::{Card, Rank, Suit};
    ///
    /// let card: Card = "C 10".parse().unwrap();
    /// assert_eq!(Card::new(Suit::Club, Rank::Ten), card);
    /// assert!("x 4".parse::<Card>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars().map(|c| c.to_ascii_lowercase());

        let suit_char = chars.next().ok_or(CardMatchError::TooFewChars)?;
        let suit = Suit::from_char(suit_char).ok_or(CardMatchError::UnexpectedSuitChar(suit_char))?;

        let rest: String = chars.collect();
        let token = rest.trim_start();
        let rank = match token {
            "" => return Err(CardMatchError::TooFewChars),
            "10" => Rank::Ten,
            _ => {
                let mut token_chars = token.chars();
                let rank_char = token_chars.next().ok_or(CardMatchError::TooFewChars)?;
                let rank =
                    Rank::from_char(rank_char).ok_or(CardMatchError::UnexpectedRankChar(rank_char))?;
                if token_chars.next().is_some() {
                    return Err(CardMatchError::UnparsedCharsRemaining);
                }
                rank
            }
        };

        Ok(Card { suit, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card::new(Suit::Spade, Rank::Three);
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Rank::Three, c.rank);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Suit::Club, Rank::King);
        let c2 = Card::new(Suit::Diamond, Rank::Ace);
        let c3 = Card::new(Suit::Diamond, Rank::Two);

        assert!(c1 == c1);
        // Suit wins over rank
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Same suit falls back to rank
        assert!(c2 < c3);
    }

    #[test]
    fn test_suit_order_is_not_alphabetical() {
        assert!(Suit::Club < Suit::Diamond);
        assert!(Suit::Diamond < Suit::Spade);
        assert!(Suit::Spade < Suit::Heart);
    }

    #[test]
    fn test_rank_cmp() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Nine < Rank::Ten);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert_eq!(Rank::Two, Rank::Two);
    }

    #[test]
    fn test_unrecognized_sorts_first() {
        let blank = Card::default();
        for card in Card::deck() {
            assert!(blank < card);
        }
        assert!(Suit::Other('z') < Suit::Club);
        assert!(Rank::Other('z') < Rank::Ace);
        assert!(Suit::Other('a') < Suit::Other('b'));
    }

    #[test]
    fn test_trichotomy_and_transitivity() {
        let mut cards: Vec<Card> = Card::deck().collect();
        cards.push(Card::default());
        cards.push(Card::new(Suit::Other('x'), Rank::Five));
        cards.push(Card::new(Suit::Heart, Rank::Other('?')));

        for a in &cards {
            for b in &cards {
                let holds = [a < b, a == b, b < a].iter().filter(|x| **x).count();
                assert_eq!(1, holds, "{:?} vs {:?}", a, b);
                for c in &cards {
                    if a < b && b < c {
                        assert!(a < c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_deck_is_sorted() {
        let deck: Vec<Card> = Card::deck().collect();
        assert_eq!(52, deck.len());
        assert!(deck.windows(2).all(|w| w[0].cmp(&w[1]) == Ordering::Less));
        assert_eq!(Card::new(Suit::Club, Rank::Ace), deck[0]);
        assert_eq!(Card::new(Suit::Heart, Rank::King), deck[51]);
    }

    #[test]
    fn test_display() {
        assert_eq!("h k", Card::new(Suit::Heart, Rank::King).to_string());
        assert_eq!("c 10", Card::new(Suit::Club, Rank::Ten).to_string());
        assert_eq!("d a", Card::new(Suit::Diamond, Rank::Ace).to_string());
        assert_eq!("   ", Card::default().to_string());
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(
            Card::new(Suit::Heart, Rank::King),
            "h k".parse::<Card>().unwrap()
        );
        assert_eq!(
            Card::new(Suit::Spade, Rank::Ten),
            "S10".parse::<Card>().unwrap()
        );
        assert_eq!(
            Card::new(Suit::Spade, Rank::Ten),
            "st".parse::<Card>().unwrap()
        );
    }

    #[test]
    fn test_parse_strict_errors() {
        assert!(matches!(
            "".parse::<Card>(),
            Err(CardMatchError::TooFewChars)
        ));
        assert!(matches!(
            "h".parse::<Card>(),
            Err(CardMatchError::TooFewChars)
        ));
        assert!(matches!(
            "x 4".parse::<Card>(),
            Err(CardMatchError::UnexpectedSuitChar('x'))
        ));
        assert!(matches!(
            "h 1".parse::<Card>(),
            Err(CardMatchError::UnexpectedRankChar('1'))
        ));
        assert!(matches!(
            "h kk".parse::<Card>(),
            Err(CardMatchError::UnparsedCharsRemaining)
        ));
    }

    #[test]
    fn test_recognized_other_is_normalized() {
        assert_eq!(
            Card::new(Suit::Heart, Rank::King),
            Card::new(Suit::Heart, Rank::Other('k'))
        );
        assert_eq!(Rank::Ten, Card::new(Suit::Club, Rank::Other('t')).rank);
        assert_eq!(Suit::Spade, Card::new(Suit::Other('s'), Rank::Two).suit);

        // Every recognized symbol, wrapped in Other, prints and parses back
        // to the card it looks like.
        for card in Card::deck() {
            let wrapped = Card::new(
                Suit::Other(card.suit.to_char()),
                Rank::Other(card.rank.to_char()),
            );
            assert_eq!(card, wrapped);
            assert_eq!(card, wrapped.to_string().parse::<Card>().unwrap());
        }

        // Unknown symbols are left alone.
        let odd = Card::new(Suit::Other('x'), Rank::Other('z'));
        assert_eq!(Suit::Other('x'), odd.suit);
        assert_eq!(Rank::Other('z'), odd.rank);
        assert_eq!(Card::default(), Card::new(Suit::Other(' '), Rank::Other(' ')));
    }

    #[test]
    fn test_blank() {
        assert!(Card::default().is_blank());
        assert!(!Card::new(Suit::Club, Rank::Ace).is_blank());
    }

    #[test]
    fn test_size() {
        // Two enums each carrying at most a char.
        assert!(mem::size_of::<Card>() <= 16);
    }
}
