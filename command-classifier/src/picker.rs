//! Subject selection among candidate noun phrases or nouns.

use rand::Rng;

/// Chooses one candidate index. Called only with `len > 0`; must return a value in `0..len`.
pub trait SubjectPicker: Send + Sync {
    fn pick(&self, len: usize) -> usize;
}

/// Uniformly random choice.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl SubjectPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always the first candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstPicker;

impl SubjectPicker for FirstPicker {
    fn pick(&self, _len: usize) -> usize {
        0
    }
}
