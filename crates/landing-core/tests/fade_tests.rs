// Tests for the stepped volume ramp used by the audio fade-in.

use landing_core::{FadeRamp, AUDIO_FADE_STEPS, AUDIO_TARGET_VOLUME};

#[test]
fn ramp_is_monotonic_and_never_overshoots() {
    let mut ramp = FadeRamp::new(AUDIO_TARGET_VOLUME, AUDIO_FADE_STEPS);
    let mut prev = 0.0f32;

    while let Some(v) = ramp.advance() {
        assert!(v > prev, "volume must strictly increase: {prev} -> {v}");
        assert!(
            v <= AUDIO_TARGET_VOLUME + 1e-6,
            "volume {v} exceeded target {AUDIO_TARGET_VOLUME}"
        );
        prev = v;
    }

    assert!(ramp.is_done());
}

#[test]
fn ramp_ends_exactly_on_target() {
    let mut ramp = FadeRamp::new(AUDIO_TARGET_VOLUME, AUDIO_FADE_STEPS);
    let mut last = 0.0f32;
    while let Some(v) = ramp.advance() {
        last = v;
    }
    // The final step clamps to the target rather than accumulating float error.
    assert_eq!(last, AUDIO_TARGET_VOLUME);
    assert_eq!(ramp.value(), AUDIO_TARGET_VOLUME);
}

#[test]
fn ramp_takes_the_configured_number_of_steps() {
    let mut ramp = FadeRamp::new(AUDIO_TARGET_VOLUME, AUDIO_FADE_STEPS);
    let mut steps = 0;
    while ramp.advance().is_some() {
        steps += 1;
    }
    assert_eq!(steps, AUDIO_FADE_STEPS);
}

#[test]
fn finished_ramp_yields_nothing() {
    let mut ramp = FadeRamp::new(AUDIO_TARGET_VOLUME, AUDIO_FADE_STEPS);
    while ramp.advance().is_some() {}
    assert!(ramp.advance().is_none());
    assert!(ramp.advance().is_none());
}

#[test]
fn zero_steps_is_tolerated() {
    // Degenerate configuration should still terminate at the target.
    let mut ramp = FadeRamp::new(0.5, 0);
    assert_eq!(ramp.advance(), Some(0.5));
    assert!(ramp.advance().is_none());
}
