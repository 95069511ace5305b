use crate::core::{Card, Rank, Suit};

/// Turn one line of a hand file into a card.
///
/// This never fails. The suit is the first character, lower cased, and it
/// must be a letter. The rank is the rest of the line with leading blanks
/// skipped: `10` is ten, anything else is its lower cased first character.
/// Symbols that aren't real suits or ranks are kept as they are. A line
/// that is empty, shorter than two characters, or that doesn't start with
/// a letter gives the blank card.
///
/// ```
/// use card_match::core::{Card, Rank, Suit};
/// use card_match::game::parse_card;
///
/// assert_eq!(Card::new(Suit::Heart, Rank::Ten), parse_card("H 10"));
/// assert_eq!(Card::new(Suit::Club, Rank::Ace), parse_card("  c a  "));
/// assert_eq!(Card::default(), parse_card("7 h"));
/// ```
pub fn parse_card(line: &str) -> Card {
    let line = line.trim();
    let mut chars = line.chars();

    let Some(first) = chars.next() else {
        return Card::default();
    };
    if line.chars().count() < 2 || !first.is_ascii_alphabetic() {
        return Card::default();
    }

    let suit = Suit::from_symbol(first.to_ascii_lowercase());
    let token = chars.as_str().trim_start_matches([' ', '\t']);
    let rank = match token {
        "10" => Rank::Ten,
        _ => token
            .chars()
            .next()
            .map(|c| Rank::from_symbol(c.to_ascii_lowercase()))
            .unwrap_or(Rank::Other(' ')),
    };

    Card::new(suit, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_card_round_trips_through_display() {
        for card in Card::deck() {
            assert_eq!(card, parse_card(&card.to_string()));
        }
    }

    #[test]
    fn test_other_with_a_real_symbol_round_trips() {
        let king = Card::new(Suit::Heart, Rank::Other('k'));
        assert_eq!("h k", king.to_string());
        assert_eq!(king, parse_card(&king.to_string()));

        let ten = Card::new(Suit::Other('d'), Rank::Other('t'));
        assert_eq!("d 10", ten.to_string());
        assert_eq!(ten, parse_card(&ten.to_string()));
    }

    #[test]
    fn test_case_and_spacing() {
        let queen = Card::new(Suit::Spade, Rank::Queen);
        assert_eq!(queen, parse_card("s q"));
        assert_eq!(queen, parse_card("SQ"));
        assert_eq!(queen, parse_card("s\t\tQ"));
        assert_eq!(queen, parse_card("   s    q   "));
    }

    #[test]
    fn test_ten() {
        let ten = Card::new(Suit::Diamond, Rank::Ten);
        assert_eq!(ten, parse_card("d 10"));
        assert_eq!(ten, parse_card("d10"));
        assert_eq!(ten, parse_card("d t"));
        // Only the exact token is ten. Anything longer keeps its first char.
        assert_eq!(
            Card::new(Suit::Diamond, Rank::Other('1')),
            parse_card("d 10 extra")
        );
    }

    #[test]
    fn test_only_first_rank_char_is_used() {
        assert_eq!(Card::new(Suit::Heart, Rank::King), parse_card("h king"));
    }

    #[test]
    fn test_unparsable_is_blank() {
        assert!(parse_card("").is_blank());
        assert!(parse_card("   ").is_blank());
        assert!(parse_card("h").is_blank());
        assert!(parse_card("5 h").is_blank());
        assert!(parse_card("?k").is_blank());
    }

    #[test]
    fn test_unknown_symbols_are_kept() {
        assert_eq!(
            Card::new(Suit::Other('x'), Rank::Other('z')),
            parse_card("X Z")
        );
    }
}
