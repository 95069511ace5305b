use std::fmt;

use tracing::{Level, event, trace_span};

use super::Hand;
use crate::core::Card;

/// The two players. Alice always goes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    Alice,
    Bob,
}

impl Player {
    /// Whose turn comes next.
    pub fn other(self) -> Player {
        match self {
            Player::Alice => Player::Bob,
            Player::Bob => Player::Alice,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Alice => "Alice",
            Player::Bob => "Bob",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the game is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// It's this player's turn to look for a match.
    Turn(Player),
    /// The named player's turn found no match, so the game is over.
    Ended(Player),
}

/// A card one player found in both hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchEvent {
    pub player: Player,
    pub card: Card,
}

impl fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} picked matching card {}", self.player, self.card)
    }
}

/// What happened over a whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSummary {
    /// Every match in the order it was found.
    pub matches: Vec<MatchEvent>,
    /// Turns played, including the last one that found nothing.
    pub turns: usize,
    /// The player whose turn ended the game.
    pub ended_by: Player,
}

/// The turn loop.
///
/// On her turn Alice scans her hand smallest first and takes the first
/// card Bob also holds. On his turn Bob scans his hand largest first and
/// takes the first card Alice holds. The matched card leaves both hands
/// and the turn passes. The first turn that finds nothing ends the game,
/// no matter whose it is.
///
/// ```
/// use card_match::core::{Card, CardSet, Rank, Suit};
/// use card_match::game::{GameState, MatchingGame, Player};
///
/// let mut alice: CardSet = Card::deck().take(3).collect();
/// let mut bob: CardSet = Card::deck().skip(1).take(3).collect();
///
/// let mut game = MatchingGame::new(&mut alice, &mut bob);
/// let first = game.step().unwrap();
/// assert_eq!(Player::Alice, first.player);
/// assert_eq!(Card::new(Suit::Club, Rank::Two), first.card);
/// assert_eq!(GameState::Turn(Player::Bob), game.state());
/// ```
#[derive(Debug)]
pub struct MatchingGame<'a, H: Hand> {
    alice: &'a mut H,
    bob: &'a mut H,
    state: GameState,
    matches: Vec<MatchEvent>,
    turns: usize,
}

impl<'a, H: Hand> MatchingGame<'a, H> {
    pub fn new(alice: &'a mut H, bob: &'a mut H) -> Self {
        Self {
            alice,
            bob,
            state: GameState::Turn(Player::Alice),
            matches: Vec::new(),
            turns: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, GameState::Ended(_))
    }

    /// Matches found so far.
    pub fn matches(&self) -> &[MatchEvent] {
        &self.matches
    }

    /// Play a single turn.
    ///
    /// Returns the match if the turn found one. Returns `None` when the
    /// turn found nothing, which ends the game, and on every call after
    /// that.
    pub fn step(&mut self) -> Option<MatchEvent> {
        let GameState::Turn(player) = self.state else {
            return None;
        };
        self.turns += 1;
        let _span = trace_span!("turn", %player, turn = self.turns).entered();

        // The scan is finished before anything is removed.
        let found = match player {
            Player::Alice => first_shared(self.alice.ascending(), &*self.bob),
            Player::Bob => first_shared(self.bob.descending(), &*self.alice),
        };

        let Some(card) = found else {
            event!(Level::DEBUG, %player, turns = self.turns, "No match found, game over");
            self.state = GameState::Ended(player);
            return None;
        };

        self.alice.remove(&card);
        self.bob.remove(&card);

        let matched = MatchEvent { player, card };
        event!(
            Level::INFO,
            %player,
            %card,
            alice_left = self.alice.len(),
            bob_left = self.bob.len(),
            "Matching card removed"
        );
        self.matches.push(matched);
        self.state = GameState::Turn(player.other());
        Some(matched)
    }

    /// Play turns until one finds no match.
    pub fn run(mut self) -> GameSummary {
        let _span = trace_span!("matching_game").entered();
        event!(
            Level::DEBUG,
            alice = self.alice.len(),
            bob = self.bob.len(),
            "Starting game"
        );

        let ended_by = loop {
            if let GameState::Ended(player) = self.state {
                break player;
            }
            self.step();
        };
        GameSummary {
            matches: self.matches,
            turns: self.turns,
            ended_by,
        }
    }
}

fn first_shared<H: Hand>(mut scan: impl Iterator<Item = Card>, other: &H) -> Option<Card> {
    scan.find(|card| {
        event!(Level::TRACE, %card, "Checking card");
        other.contains(card)
    })
}

/// Play a full game between two hands, removing every matched card.
pub fn play_game<H: Hand>(alice: &mut H, bob: &mut H) -> GameSummary {
    MatchingGame::new(alice, bob).run()
}
