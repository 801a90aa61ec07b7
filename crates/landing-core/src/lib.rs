//! Platform-independent logic for the encrypted-truth landing experience.
//!
//! Everything here is pure Rust with no web APIs: the three-stage sequencing
//! machine, the stepped audio fade ramp, the cosmetic text scrambler and the
//! particle-cloud generation/easing math. The web frontend consumes these and
//! wires them to timers, the audio element and the renderer.

pub mod constants;
pub mod fade;
pub mod particles;
pub mod scramble;
pub mod stage;
pub mod state;

pub use constants::*;
pub use fade::*;
pub use particles::*;
pub use scramble::*;
pub use stage::*;
pub use state::*;
