// Tests for the stage machine that drives the landing sequence.

use landing_core::{Stage, StageMachine};

#[test]
fn starts_on_landing() {
    let machine = StageMachine::new();
    assert_eq!(machine.current(), Stage::Landing);
    assert!(!machine.current().is_revealing());
}

#[test]
fn trigger_key_advances_landing_to_decrypting() {
    let mut machine = StageMachine::new();
    assert!(machine.trigger_key());
    assert_eq!(machine.current(), Stage::Decrypting);
}

#[test]
fn reveal_timer_advances_decrypting_to_revealing() {
    let mut machine = StageMachine::new();
    assert!(machine.trigger_key());
    assert!(machine.reveal_timer_fired());
    assert_eq!(machine.current(), Stage::Revealing);
    assert!(machine.current().is_revealing());
}

#[test]
fn trigger_key_is_a_no_op_after_landing() {
    let mut machine = StageMachine::new();
    assert!(machine.trigger_key());

    // Repeated key presses during decrypting must not re-fire the transition.
    assert!(!machine.trigger_key());
    assert_eq!(machine.current(), Stage::Decrypting);

    assert!(machine.reveal_timer_fired());
    assert!(!machine.trigger_key());
    assert_eq!(machine.current(), Stage::Revealing);
}

#[test]
fn reveal_timer_is_a_no_op_outside_decrypting() {
    let mut machine = StageMachine::new();

    // Timer can never skip the decrypting stage.
    assert!(!machine.reveal_timer_fired());
    assert_eq!(machine.current(), Stage::Landing);

    assert!(machine.trigger_key());
    assert!(machine.reveal_timer_fired());

    // Revealing is terminal.
    assert!(!machine.reveal_timer_fired());
    assert_eq!(machine.current(), Stage::Revealing);
}
