#![no_main]

extern crate arbitrary;
extern crate card_match;
extern crate libfuzzer_sys;

use std::collections::BTreeSet;

use card_match::core::{Card, CardSet};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
enum Op {
    Insert(Card),
    Remove(Card),
    Contains(Card),
    Clone,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut set = CardSet::new();
    let mut expected = BTreeSet::new();

    for op in ops {
        match op {
            Op::Insert(card) => assert_eq!(expected.insert(card), set.insert(card)),
            Op::Remove(card) => assert_eq!(expected.remove(&card), set.remove(&card)),
            Op::Contains(card) => assert_eq!(expected.contains(&card), set.contains(&card)),
            Op::Clone => {
                let copy = set.clone();
                set.clear();
                set.clone_from(&copy);
            }
        }
        assert_eq!(expected.len(), set.len());
    }

    assert!(set.iter().eq(expected.iter()));
    assert!(set.iter().rev().eq(expected.iter().rev()));

    // Walk backward from the end cursor by hand.
    let mut cursor = set.end();
    let mut backward = Vec::new();
    cursor.move_prev();
    while let Some(card) = cursor.get() {
        backward.push(*card);
        cursor.move_prev();
    }
    assert!(backward.iter().eq(expected.iter().rev()));
});
