//! Stepped linear fade-in ramp for the background audio volume.

/// Volume ramp from 0 to `target` in `steps` equal increments.
///
/// The ramp is monotonic and never overshoots: the last step lands exactly on
/// the target and marks the ramp finished. One call to [`FadeRamp::advance`]
/// corresponds to one interval tick in the frontend.
#[derive(Clone, Copy, Debug)]
pub struct FadeRamp {
    target: f32,
    steps: u32,
    step: u32,
}

impl FadeRamp {
    pub fn new(target: f32, steps: u32) -> Self {
        Self {
            target,
            steps: steps.max(1),
            step: 0,
        }
    }

    /// Advance one step and return the volume to apply, or `None` once the
    /// ramp has already reached the target.
    pub fn advance(&mut self) -> Option<f32> {
        if self.step >= self.steps {
            return None;
        }
        self.step += 1;
        if self.step == self.steps {
            Some(self.target)
        } else {
            Some(self.target * self.step as f32 / self.steps as f32)
        }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.step >= self.steps
    }

    #[inline]
    pub fn value(&self) -> f32 {
        if self.step >= self.steps {
            self.target
        } else {
            self.target * self.step as f32 / self.steps as f32
        }
    }
}
