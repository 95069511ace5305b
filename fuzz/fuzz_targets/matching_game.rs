#![no_main]

extern crate arbitrary;
extern crate card_match;
extern crate libfuzzer_sys;

use std::collections::BTreeSet;

use card_match::core::{Card, CardSet};
use card_match::game::play_game;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub alice: Vec<Card>,
    pub bob: Vec<Card>,
}

fuzz_target!(|input: Input| {
    let mut alice: CardSet = input.alice.iter().copied().collect();
    let mut bob: CardSet = input.bob.iter().copied().collect();
    let mut std_alice: BTreeSet<Card> = input.alice.iter().copied().collect();
    let mut std_bob: BTreeSet<Card> = input.bob.iter().copied().collect();

    let summary = play_game(&mut alice, &mut bob);
    assert_eq!(play_game(&mut std_alice, &mut std_bob), summary);

    for event in &summary.matches {
        assert!(!alice.contains(&event.card));
        assert!(!bob.contains(&event.card));
    }
});
