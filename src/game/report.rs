//! Text renderings of a hand.

use super::{Hand, Player};

/// `"Alice's final hand: c a d 5"`. Every card is preceded by one space
/// and there is no trailing separator.
///
/// ```
/// use card_match::core::CardSet;
/// use card_match::game::{Player, final_hand_line, read_hand};
///
/// let hand = read_hand("d 5\nc a\n".as_bytes()).unwrap();
/// assert_eq!("Alice's final hand: c a d 5", final_hand_line(Player::Alice, &hand));
/// assert_eq!("Bob's final hand:", final_hand_line(Player::Bob, &CardSet::new()));
/// ```
pub fn final_hand_line<H: Hand>(player: Player, hand: &H) -> String {
    let cards: String = hand.ascending().map(|card| format!(" {}", card)).collect();
    format!("{}'s final hand:{}", player, cards)
}

/// A heading followed by one card per line, smallest first.
///
/// ```text
/// Bob's cards:
/// c a
/// h 10
/// ```
pub fn card_listing<H: Hand>(player: Player, hand: &H) -> String {
    let cards: String = hand.ascending().map(|card| format!("{}\n", card)).collect();
    format!("{}'s cards:\n{}", player, cards)
}
