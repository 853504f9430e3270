use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::errors::SplitError;

/// Disjoint train/test/valid partition produced by [`split`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitOutcome<T> {
    /// Records assigned to train.
    pub train: Vec<T>,
    /// Records assigned to test.
    pub test: Vec<T>,
    /// Records assigned to validation.
    pub valid: Vec<T>,
}

impl<T> SplitOutcome<T> {
    /// Total number of records across all three subsets.
    pub fn len(&self) -> usize {
        self.train.len() + self.test.len() + self.valid.len()
    }

    /// True when all three subsets are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `records` into train/test/valid with a seeded two-stage shuffle.
///
/// Stage 1 shuffles the full input with `StdRng::seed_from_u64(seed)` and
/// assigns the first `floor(train_fraction * n)` records to train. Stage 2
/// reshuffles the remainder with a fresh rng from the same seed and assigns
/// the first `ceil(remainder / 2)` records to test, the rest to valid.
///
/// The partition is deterministic for identical input order, fraction, and
/// seed. Order within each subset follows the shuffle, not the input. Small
/// inputs degenerate gracefully: a single record lands in test, and a
/// remainder shorter than two leaves valid empty.
pub fn split<T>(
    records: Vec<T>,
    train_fraction: f64,
    seed: u64,
) -> Result<SplitOutcome<T>, SplitError> {
    if !(train_fraction > 0.0 && train_fraction < 1.0) {
        return Err(SplitError::Configuration(format!(
            "train_size must be between 0 and 1 exclusive, got {train_fraction}"
        )));
    }
    let total = records.len();
    let train_len = (train_fraction * total as f64).floor() as usize;

    let mut train = records;
    let mut rng = StdRng::seed_from_u64(seed);
    train.shuffle(&mut rng);
    let mut remainder = train.split_off(train_len);

    let mut rng = StdRng::seed_from_u64(seed);
    remainder.shuffle(&mut rng);
    let test_len = remainder.len() - remainder.len() / 2;
    let valid = remainder.split_off(test_len);
    let test = remainder;

    Ok(SplitOutcome { train, test, valid })
}
