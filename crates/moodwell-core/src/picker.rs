//! Uniform selection from a finite reply set

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of reply indices. Injected so tests can walk a whole template set.
pub trait ReplyPicker {
    /// Index in `0..len`; `len` is never zero
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Pick one option; an empty set yields an empty string
pub fn pick<'a>(picker: &mut dyn ReplyPicker, options: &[&'a str]) -> &'a str {
    if options.is_empty() {
        return "";
    }
    let index = picker.pick_index(options.len()) % options.len();
    options[index]
}

#[derive(Debug)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyPicker for RandomPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Deterministic round-robin picker
#[derive(Debug, Default)]
pub struct CyclingPicker {
    next: usize,
}

impl CyclingPicker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplyPicker for CyclingPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        let index = self.next % len;
        self.next = self.next.wrapping_add(1);
        index
    }
}
