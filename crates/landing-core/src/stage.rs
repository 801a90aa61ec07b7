//! Three-stage sequencing: landing -> decrypting -> revealing.
//!
//! The machine only ever moves forward, one step at a time. The frontend maps
//! the space key to [`StageMachine::trigger_key`] and the 10 s reveal timeout
//! to [`StageMachine::reveal_timer_fired`]; both are no-ops outside the one
//! stage they apply to, so stray key presses and late timers cannot skip or
//! repeat a transition.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Landing,
    Decrypting,
    Revealing,
}

impl Stage {
    #[inline]
    pub fn is_revealing(self) -> bool {
        matches!(self, Stage::Revealing)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StageMachine {
    current: Stage,
}

impl Default for StageMachine {
    fn default() -> Self {
        Self {
            current: Stage::Landing,
        }
    }
}

impl StageMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> Stage {
        self.current
    }

    /// The trigger key was pressed. Advances only from `Landing`; returns
    /// whether a transition happened.
    pub fn trigger_key(&mut self) -> bool {
        if self.current == Stage::Landing {
            self.current = Stage::Decrypting;
            log::debug!("stage: landing -> decrypting");
            true
        } else {
            false
        }
    }

    /// The reveal timer fired. Advances only from `Decrypting`; a timer that
    /// outlives its stage is ignored.
    pub fn reveal_timer_fired(&mut self) -> bool {
        if self.current == Stage::Decrypting {
            self.current = Stage::Revealing;
            log::debug!("stage: decrypting -> revealing");
            true
        } else {
            false
        }
    }
}
