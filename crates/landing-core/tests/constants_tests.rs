// Tests for timing and visual constants and their relationships.

use landing_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timing_constants_are_within_reasonable_bounds() {
    // Durations should be positive
    assert!(DECRYPT_HOLD_MS > 0);
    assert!(OVERLAY_EXIT_MS > 0);
    assert!(AUDIO_FADE_MS > 0);
    assert!(SCRAMBLE_INTERVAL_MS > 0);

    // Overlay handoff must finish before the reveal timer fires
    assert!(OVERLAY_EXIT_MS < DECRYPT_HOLD_MS);

    // The scramble must tick many times inside the decrypting hold
    assert!(SCRAMBLE_INTERVAL_MS * 10 < DECRYPT_HOLD_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn audio_fade_is_consistent() {
    assert!(AUDIO_TARGET_VOLUME > 0.0 && AUDIO_TARGET_VOLUME <= 1.0);
    assert!(AUDIO_FADE_STEPS > 0);
    assert_eq!(AUDIO_FADE_STEP_MS, AUDIO_FADE_MS / AUDIO_FADE_STEPS as i32);
    assert!(AUDIO_FADE_STEP_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_constants_are_positive() {
    assert!(STAR_COUNT > 0);
    assert!(STAR_RADIUS > 0.0);
    assert!(STAR_POINT_SIZE > 0.0);
    assert!(BURST_COUNT > 0);
    assert!(BURST_RADIUS > 0.0);
    assert!(BURST_GROWTH_PER_SEC > 0.0);
    assert!(BURST_POINT_SIZE > STAR_POINT_SIZE);
    assert!(!BURST_PALETTE.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_factors_are_fractions() {
    assert!(STAR_SCALE_EASE > 0.0 && STAR_SCALE_EASE < 1.0);
    assert!(BURST_OPACITY_EASE > 0.0 && BURST_OPACITY_EASE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reveal_scale_exceeds_base_scale() {
    assert!(STAR_REVEAL_SCALE > STAR_BASE_SCALE);
    assert!(STAR_BASE_SCALE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn bloom_constants_are_sane() {
    assert!(BLOOM_THRESHOLD >= 0.0 && BLOOM_THRESHOLD < 1.0);
    assert!(BLOOM_STRENGTH > 0.0);
    assert!(BG_REVEAL_FADE_SEC > 0.0);
}

#[test]
fn target_phrase_and_charset_are_well_formed() {
    assert!(!TARGET_PHRASE.is_empty());
    assert!(!GLITCH_CHARS.is_empty());
    // Scramble frames can never accidentally spell the phrase
    assert!(!GLITCH_CHARS.contains(' '));
    assert!(TARGET_PHRASE.contains(' '));
}

#[test]
fn reveal_stagger_covers_the_phrase_quickly() {
    let letters = TARGET_PHRASE.chars().count() as f32;
    // The whole title should finish cascading within a couple of seconds
    assert!(REVEAL_STAGGER_SEC * letters < 2.5);
}
