//! Parent selection: destructive sampling followed by a tournament.
//!
//! A parent is chosen in two steps. [`select_individuals`] draws `k`
//! participants uniformly at random without replacement from an owned copy
//! of the population, then [`tournament`] keeps the one with the fewest
//! conflicts. Larger `k` means stronger selection pressure.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::fitness::evaluate;
use super::types::Board;
use crate::error::{GaError, Result};
use rand::Rng;

/// Returns the participant with the strictly lowest conflict count.
///
/// Participants are scanned left to right and the current best is replaced
/// only on strict improvement, so the earliest of several equally fit
/// boards wins.
///
/// # Errors
/// [`GaError::EmptyPopulation`] if `participants` is empty.
pub fn tournament<const N: usize>(participants: &[Board<N>]) -> Result<Board<N>> {
    let (first, rest) = participants
        .split_first()
        .ok_or(GaError::EmptyPopulation)?;

    let mut best = *first;
    let mut best_conflicts = evaluate(first);
    for candidate in rest {
        let conflicts = evaluate(candidate);
        if conflicts < best_conflicts {
            best = *candidate;
            best_conflicts = conflicts;
        }
    }
    Ok(best)
}

/// Draws `selection_size` boards from `pool` without replacement.
///
/// The pool is consumed: callers hand over a copy of the population so the
/// live generation is untouched. Boards are returned in the order they were
/// drawn.
///
/// Once a single board is left it is no longer removed; every further draw
/// reads that same board again. This lets a request exceed the pool length
/// by one, which the breeding loop relies on after it has taken the first
/// parent out of the population.
///
/// # Errors
/// [`GaError::PopulationExhaustion`] if the pool is empty, or shorter than
/// `selection_size - 1`.
pub fn select_individuals<const N: usize, R: Rng>(
    mut pool: Vec<Board<N>>,
    selection_size: usize,
    rng: &mut R,
) -> Result<Vec<Board<N>>> {
    if selection_size == 0 {
        return Ok(Vec::new());
    }
    let available = pool.len();
    if available == 0 || selection_size > available + 1 {
        return Err(GaError::PopulationExhaustion {
            requested: selection_size,
            available,
        });
    }

    let mut selected = Vec::with_capacity(selection_size);
    for _ in 0..selection_size {
        let drawn = if pool.len() > 1 {
            let idx = rng.random_range(0..pool.len());
            pool.remove(idx)
        } else {
            pool[0]
        };
        selected.push(drawn);
    }
    Ok(selected)
}
