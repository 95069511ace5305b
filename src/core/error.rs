use std::path::PathBuf;

use thiserror::Error;

/// This is the core error type for the card_match library. It uses
/// `thiserror` to provide readable error messages.
///
/// Removing a card that isn't there and inserting a duplicate are not
/// errors, so they don't show up here.
#[derive(Error, Debug)]
pub enum CardMatchError {
    #[error("Unable to parse suit {0:?}")]
    UnexpectedSuitChar(char),
    #[error("Unable to parse rank {0:?}")]
    UnexpectedRankChar(char),
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Cursor is past the end and has no card")]
    PastTheEnd,
    #[error("Could not open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Error reading cards")]
    Io(#[from] std::io::Error),
}
