//! Uniform index sources for candidate and winner selection.

use std::collections::VecDeque;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed roster indices.
///
/// Implementations must return a value in `0..len`. Callers never pass
/// `len == 0`.
pub trait Picker {
    fn pick(&mut self, len: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for &mut P {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

impl<P: Picker + ?Sized> Picker for Box<P> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// `StdRng`-backed picker used by the application.
pub struct RandPicker {
    rng: StdRng,
    seed: Option<u64>,
}

impl RandPicker {
    /// Seeded from the operating system; draws differ between runs.
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            seed: None,
        }
    }

    /// Reproducible sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for RandPicker {
    fn default() -> Self {
        Self::from_os()
    }
}

impl fmt::Debug for RandPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandPicker")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Picker for RandPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices, then keeps returning the last one.
///
/// Values are reduced modulo `len` so a script stays valid for any roster
/// size.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPicker {
    script: VecDeque<usize>,
    last: usize,
}

impl ScriptedPicker {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: 0,
        }
    }

    /// Always returns `index`.
    #[must_use]
    pub fn constant(index: usize) -> Self {
        Self {
            script: VecDeque::new(),
            last: index,
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, len: usize) -> usize {
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last % len
    }
}
