use std::collections::BTreeSet;
use std::path::PathBuf;

use card_match::core::{Card, CardMatchError, CardSet};
use card_match::game::{Hand, Player, card_listing, final_hand_line, load_hand_into, play_game};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "card-match")]
#[command(about = "Play the card matching game between two hands")]
struct Cli {
    /// Alice's hand, one card per line
    alice: PathBuf,

    /// Bob's hand, one card per line
    bob: PathBuf,

    /// Container used to hold each hand
    #[arg(long, value_enum, default_value_t = Backend::Tree)]
    backend: Backend,

    /// How to print the final hands
    #[arg(long, value_enum, default_value_t = Format::Line)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Backend {
    /// The binary search tree
    Tree,
    /// std's BTreeSet
    Btree,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// One line per hand
    Line,
    /// One line per card
    List,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.backend {
        Backend::Tree => run::<CardSet>(&cli),
        Backend::Btree => run::<BTreeSet<Card>>(&cli),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run<H>(cli: &Cli) -> Result<(), CardMatchError>
where
    H: Hand + Default + Extend<Card>,
{
    let mut alice = H::default();
    let mut bob = H::default();
    load_hand_into(&cli.alice, &mut alice)?;
    load_hand_into(&cli.bob, &mut bob)?;

    let summary = play_game(&mut alice, &mut bob);
    for event in &summary.matches {
        println!("{}", event);
    }

    match cli.format {
        Format::Line => {
            println!("{}", final_hand_line(Player::Alice, &alice));
            println!("{}", final_hand_line(Player::Bob, &bob));
        }
        Format::List => {
            println!();
            print!("{}", card_listing(Player::Alice, &alice));
            println!();
            print!("{}", card_listing(Player::Bob, &bob));
        }
    }

    Ok(())
}
