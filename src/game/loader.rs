use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{Level, event};

use super::parse_card;
use crate::core::{Card, CardMatchError, CardSet};

/// Read one card per line into `hand`, skipping blank lines.
///
/// Returns how many lines were parsed. Duplicate cards count as lines
/// but only land in the hand once.
pub fn read_hand_into<H, R>(reader: R, hand: &mut H) -> Result<usize, CardMatchError>
where
    H: Extend<Card>,
    R: BufRead,
{
    let mut parsed = 0;
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let card = parse_card(&line);
        if card.is_blank() {
            event!(Level::WARN, line = %line, "Unparsable line, using blank card");
        }
        hand.extend(std::iter::once(card));
        parsed += 1;
    }
    Ok(parsed)
}

/// Read a whole hand from any buffered reader.
///
/// ```
/// use card_match::game::read_hand;
///
/// let hand = read_hand("h k\n\nc a\nh k\n".as_bytes()).unwrap();
/// assert_eq!(" c a h k", hand.to_string());
/// ```
pub fn read_hand<R: BufRead>(reader: R) -> Result<CardSet, CardMatchError> {
    let mut hand = CardSet::new();
    read_hand_into(reader, &mut hand)?;
    Ok(hand)
}

/// Open a file and read it into `hand`.
pub fn load_hand_into<H, P>(path: P, hand: &mut H) -> Result<usize, CardMatchError>
where
    H: Extend<Card>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CardMatchError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = read_hand_into(BufReader::new(file), hand)?;
    event!(Level::DEBUG, path = %path.display(), parsed, "Loaded hand");
    Ok(parsed)
}

/// Open a file and read it into a new `CardSet`.
pub fn load_hand<P: AsRef<Path>>(path: P) -> Result<CardSet, CardMatchError> {
    let mut hand = CardSet::new();
    load_hand_into(path, &mut hand)?;
    Ok(hand)
}
