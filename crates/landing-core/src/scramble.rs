//! Cosmetic "decrypting" text scrambler.
//!
//! Produces a random string the exact length of the target phrase on every
//! tick, drawn from a fixed glitch character set. The charset contains no
//! space while the target phrase does, so the scrambled value can never equal
//! the phrase; the mystery never fully decrypts on screen.

use rand::prelude::*;

use crate::constants::{GLITCH_CHARS, TARGET_PHRASE};

pub struct Scrambler {
    chars: Vec<char>,
    len: usize,
    rng: StdRng,
}

impl Scrambler {
    pub fn new(seed: u64) -> Self {
        Self {
            chars: GLITCH_CHARS.chars().collect(),
            len: TARGET_PHRASE.chars().count(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// One redraw of the scrambled line.
    pub fn next_frame(&mut self) -> String {
        (0..self.len)
            .map(|_| self.chars[self.rng.gen_range(0..self.chars.len())])
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
