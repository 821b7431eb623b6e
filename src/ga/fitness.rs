//! Fitness evaluation.

use super::types::{Board, Conflicts};

/// Counts attacking queen pairs.
///
/// Every column pair `(i, j)` with `i < j` contributes at most one conflict:
/// a shared row is checked first, and only when the rows differ are the two
/// diagonals (`i - row_i == j - row_j` and `i + row_i == j + row_j`)
/// considered.
///
/// Attacks are counted pairwise, regardless of any queen standing in
/// between.
///
/// # Complexity
/// O(N²)
pub fn evaluate<const N: usize>(board: &Board<N>) -> Conflicts {
    let rows = board.rows();
    let mut conflicts = 0;
    for i in 0..N {
        for j in (i + 1)..N {
            if rows[i] == rows[j] {
                conflicts += 1;
            } else if same_diagonal(i, rows[i], j, rows[j]) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

// Written without subtraction so unsigned columns and rows never underflow:
// i - ri == j - rj  <=>  i + rj == j + ri.
fn same_diagonal(i: usize, ri: usize, j: usize, rj: usize) -> bool {
    i + rj == j + ri || i + ri == j + rj
}
