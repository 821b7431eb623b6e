//! Variation operators for row-assignment boards.
//!
//! - [`crossover`]: single-point crossover at a fixed cut point
//! - [`mutate`]: replace one random gene with a random row
//!
//! Both operators take their inputs by value or shared reference and return
//! fresh boards; parents are never modified.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::types::Board;
use rand::Rng;

/// Single-point crossover.
///
/// `child1` takes `parent1`'s genes before `index` and `parent2`'s from
/// `index` on; `child2` is the complement. An `index` of `0` or `N` yields
/// copies of the parents.
///
/// # Panics
/// Panics if `index > N`.
pub fn crossover<const N: usize>(
    parent1: &Board<N>,
    parent2: &Board<N>,
    index: usize,
) -> (Board<N>, Board<N>) {
    assert!(index <= N, "cut point {index} is past the board size {N}");

    let mut child1 = *parent1.rows();
    let mut child2 = *parent2.rows();
    child1[index..].copy_from_slice(&parent2.rows()[index..]);
    child2[index..].copy_from_slice(&parent1.rows()[index..]);

    (
        Board::from_rows_unchecked(child1),
        Board::from_rows_unchecked(child2),
    )
}

/// Point mutation.
///
/// With probability `m`, one column chosen uniformly in `0..N` gets a new
/// row drawn uniformly from `1..=N` (which may equal the old one). The
/// returned board is the result either way.
pub fn mutate<const N: usize, R: Rng>(mut board: Board<N>, m: f64, rng: &mut R) -> Board<N> {
    if N > 0 && rng.random::<f64>() < m {
        let column = rng.random_range(0..N);
        let row = rng.random_range(1..=N);
        board.set_row(column, row);
    }
    board
}
