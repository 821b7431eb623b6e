//! Genetic algorithm engine for the N-Queens problem.
//!
//! Searches for placements of N queens on an N×N board (8 by default) with
//! no two queens sharing a row or diagonal:
//!
//! - **Representation**: one queen per column, [`ga::Board`] stores the rows.
//! - **Fitness**: number of attacking pairs, `0` is a solution.
//! - **Selection**: tournament over a random sample drawn without
//!   replacement.
//! - **Variation**: single-point crossover, single-gene mutation.
//! - **Elitism**: optional carry-over of the best board.
//!
//! Every stochastic operation takes an explicit random number generator, so
//! seeded runs are reproducible. Per-generation min/max/mean conflict series
//! are available for plotting through [`ga::ConflictHistory`].
//!
//! ```
//! use u_queens::ga::run_ga;
//! use u_queens::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let best = run_ga(50, 40, 4, 0.2, true, &mut rng).unwrap();
//! println!("{best}\n{} conflicts", best.conflicts());
//! ```
//!
//! # Logging
//!
//! Progress is reported through the [`log`] facade; install any logger to
//! see it.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
