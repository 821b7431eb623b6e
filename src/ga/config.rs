//! GA configuration.
//!
//! [`GaConfig`] holds the parameters of one run. It is read-only once the
//! run starts.

use super::types::QUEENS;
use crate::error::{GaError, Result};

/// Configuration for the N-Queens genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_queens::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.tournament_size, 5);
/// assert!(config.elitism);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_queens::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_generations(500)
///     .with_population_size(100)
///     .with_tournament_size(3)
///     .with_mutation_probability(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of generations to breed. `0` returns the best random board.
    pub generations: usize,

    /// Number of boards per generation. Even sizes pair up cleanly; odd
    /// sizes drop the last surplus child.
    pub population_size: usize,

    /// Boards drawn for each tournament (`1..=population_size`).
    ///
    /// - k=1: no selection pressure
    /// - k=3-5: moderate pressure
    /// - k close to the population size: near-greedy
    pub tournament_size: usize,

    /// Probability that a child gets one gene redrawn (0.0–1.0).
    pub mutation_probability: f64,

    /// Whether the best board is carried unchanged into the next generation.
    pub elitism: bool,

    /// Crossover cut point. `None` splits the board in half.
    pub cut_point: Option<usize>,

    /// Whether to record min/max/mean conflicts for each generation.
    pub record_stats: bool,

    /// Stop as soon as the current population holds a zero-conflict board,
    /// instead of running every generation.
    pub stop_on_solution: bool,

    /// Evaluate statistics on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 200,
            population_size: 50,
            tournament_size: 5,
            mutation_probability: 0.1,
            elitism: true,
            cut_point: None,
            record_stats: false,
            stop_on_solution: false,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Configuration mirroring the five classic run parameters.
    pub fn new(
        generations: usize,
        population_size: usize,
        tournament_size: usize,
        mutation_probability: f64,
        elitism: bool,
    ) -> Self {
        Self {
            generations,
            population_size,
            tournament_size,
            mutation_probability,
            elitism,
            ..Self::default()
        }
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the mutation probability.
    ///
    /// Not clamped: out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_mutation_probability(mut self, m: f64) -> Self {
        self.mutation_probability = m;
        self
    }

    /// Enables or disables elitism.
    pub fn with_elitism(mut self, elitism: bool) -> Self {
        self.elitism = elitism;
        self
    }

    /// Sets the crossover cut point.
    pub fn with_cut_point(mut self, index: usize) -> Self {
        self.cut_point = Some(index);
        self
    }

    /// Enables or disables per-generation statistics.
    pub fn with_stats(mut self, record: bool) -> Self {
        self.record_stats = record;
        self
    }

    /// Enables or disables stopping at the first solution.
    pub fn with_stop_on_solution(mut self, stop: bool) -> Self {
        self.stop_on_solution = stop;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs: 100 generations of 30 boards, tournaments of 3.
    pub fn fast() -> Self {
        Self {
            generations: 100,
            population_size: 30,
            tournament_size: 3,
            ..Self::default()
        }
    }

    /// Preset for a high solve rate: 500 generations of 100 boards, a
    /// higher mutation probability and early stopping.
    pub fn thorough() -> Self {
        Self {
            generations: 500,
            population_size: 100,
            tournament_size: 5,
            mutation_probability: 0.2,
            stop_on_solution: true,
            ..Self::default()
        }
    }

    /// Cut point used on a board of `board_size` columns.
    pub fn cut_point_for(&self, board_size: usize) -> usize {
        self.cut_point.unwrap_or(board_size / 2)
    }

    /// Validates the configuration for the classic 8×8 board.
    pub fn validate(&self) -> Result<()> {
        self.validate_for(QUEENS)
    }

    /// Validates the configuration for a board of `board_size` columns.
    pub fn validate_for(&self, board_size: usize) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.tournament_size == 0 {
            return Err(invalid("tournament_size must be at least 1"));
        }
        if self.tournament_size > self.population_size {
            return Err(invalid(format!(
                "tournament_size ({}) exceeds population_size ({})",
                self.tournament_size, self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(invalid(format!(
                "mutation_probability must be in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        let cut_point = self.cut_point_for(board_size);
        if cut_point > board_size {
            return Err(invalid(format!(
                "cut_point ({cut_point}) exceeds board size ({board_size})"
            )));
        }
        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> GaError {
    GaError::InvalidConfiguration(message.into())
}
