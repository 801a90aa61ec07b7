// Tests for the glitch-text scrambler shown during the decrypting stage.

use landing_core::{Scrambler, GLITCH_CHARS, TARGET_PHRASE};

#[test]
fn frames_match_the_phrase_length() {
    let expected = TARGET_PHRASE.chars().count();
    let mut scrambler = Scrambler::new(42);
    for _ in 0..100 {
        let frame = scrambler.next_frame();
        assert_eq!(frame.chars().count(), expected);
    }
}

#[test]
fn frames_only_use_glitch_characters() {
    let mut scrambler = Scrambler::new(7);
    for _ in 0..100 {
        for ch in scrambler.next_frame().chars() {
            assert!(
                GLITCH_CHARS.contains(ch),
                "unexpected character {ch:?} in scramble frame"
            );
        }
    }
}

#[test]
fn frames_never_spell_the_phrase() {
    // The glitch charset has no space, so the phrase cannot appear by chance.
    assert!(!GLITCH_CHARS.contains(' '));
    let mut scrambler = Scrambler::new(1234);
    for _ in 0..1000 {
        assert_ne!(scrambler.next_frame(), TARGET_PHRASE);
    }
}

#[test]
fn same_seed_gives_same_frames() {
    let mut a = Scrambler::new(99);
    let mut b = Scrambler::new(99);
    for _ in 0..20 {
        assert_eq!(a.next_frame(), b.next_frame());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = Scrambler::new(1);
    let mut b = Scrambler::new(2);
    let diverged = (0..20).any(|_| a.next_frame() != b.next_frame());
    assert!(diverged, "distinct seeds should produce distinct streams");
}
