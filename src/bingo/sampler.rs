//! # Term Sampling
//!
//! Draws a sequence of terms from a pool. Items are drawn without replacement
//! while the pool still has unused items; if the pool is smaller than the
//! requested count, the whole call draws with replacement instead.
//!
//! The repeat decision is made once, up front, from `pool.len() < count`.
//! It is not re-evaluated as the working copy shrinks.

use crate::error::{BingoError, Result};
use rand::Rng;

/// Returns `count` items drawn uniformly at random from `pool`.
///
/// The caller's pool is never mutated; draws come from an internal copy.
pub fn sample<T: Clone, R: Rng + ?Sized>(pool: &[T], count: usize, rng: &mut R) -> Result<Vec<T>> {
    if count == 0 {
        return Ok(Vec::new());
    }
    if pool.is_empty() {
        return Err(BingoError::EmptyPool);
    }

    let allow_repeat = pool.len() < count;
    let mut working = pool.to_vec();
    let mut output = Vec::with_capacity(count);

    for _ in 0..count {
        let index = rng.gen_range(0..working.len());
        if allow_repeat {
            output.push(working[index].clone());
        } else {
            output.push(working.remove(index));
        }
    }

    Ok(output)
}
