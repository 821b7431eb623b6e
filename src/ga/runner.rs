//! GA generational loop.
//!
//! [`GaRunner`] drives a run: random initial population → (statistics) →
//! breeding → replacement, repeated for the configured number of
//! generations, then a final tournament over the last population.

use super::config::GaConfig;
use super::fitness::evaluate;
use super::population::Population;
use super::stats::ConflictHistory;
use super::types::{Board, Conflicts, QUEENS};
use crate::error::Result;
use crate::random::rng_from_seed;
use log::{debug, info, log_enabled, Level};
use rand::Rng;

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult<const N: usize = 8> {
    /// Tournament winner of the final population.
    ///
    /// Not necessarily the best board seen during the run: without elitism
    /// a good board can be lost between generations.
    pub best: Board<N>,

    /// Conflicts of `best`.
    pub best_conflicts: Conflicts,

    /// Number of generations bred.
    pub generations: usize,

    /// Whether the run ended early on a zero-conflict board.
    pub stopped_early: bool,

    /// Per-generation statistics, when requested.
    pub history: Option<ConflictHistory>,
}

impl<const N: usize> GaResult<N> {
    /// Returns `true` if the best board has no conflicts.
    pub fn solved(&self) -> bool {
        self.best_conflicts == 0
    }
}

/// Executes the GA loop.
///
/// # Usage
///
/// ```
/// use u_queens::ga::{GaConfig, GaResult, GaRunner};
///
/// let config = GaConfig::default().with_generations(20).with_seed(42);
/// let result: GaResult = GaRunner::run(&config).unwrap();
/// assert_eq!(result.generations, 20);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator seeded from `config.seed`.
    ///
    /// # Errors
    /// [`GaError::InvalidConfiguration`](crate::GaError::InvalidConfiguration)
    /// for a bad configuration, or
    /// [`GaError::PopulationExhaustion`](crate::GaError::PopulationExhaustion)
    /// if breeding runs out of parents.
    pub fn run<const N: usize>(config: &GaConfig) -> Result<GaResult<N>> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the GA with a caller-supplied generator. `config.seed` is
    /// ignored.
    pub fn run_with_rng<const N: usize, R: Rng>(
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<N>> {
        config.validate_for(N)?;
        info!(
            "starting GA on {}x{} board: {} generations, population {}, tournament {}, mutation {}, elitism {}",
            N,
            N,
            config.generations,
            config.population_size,
            config.tournament_size,
            config.mutation_probability,
            config.elitism
        );

        let mut population: Population<N> = Population::random(config.population_size, rng);
        let mut history = config
            .record_stats
            .then(|| ConflictHistory::with_capacity(config.generations));
        let mut generations = 0;
        let mut stopped_early = false;

        for generation in 0..config.generations {
            if config.stop_on_solution && population.contains_solution() {
                stopped_early = true;
                break;
            }

            if let Some(history) = history.as_mut() {
                history.push(population.stats(config.parallel)?);
            }

            population = population.breed(config, rng)?;
            generations = generation + 1;

            if log_enabled!(Level::Debug) {
                let best = population.best()?;
                debug!(
                    "generation {generations}: best {:?} with {} conflicts",
                    best.rows(),
                    evaluate(&best)
                );
            }
        }

        let best = population.best()?;
        let best_conflicts = evaluate(&best);
        info!(
            "GA finished after {generations} generations: best {:?} with {best_conflicts} conflicts",
            best.rows()
        );

        Ok(GaResult {
            best,
            best_conflicts,
            generations,
            stopped_early,
            history,
        })
    }
}

/// Runs the GA on the 8×8 board and returns the best board of the last
/// generation.
///
/// - `g`: generations
/// - `n`: population size
/// - `k`: tournament size
/// - `m`: mutation probability
/// - `e`: elitism
pub fn run_ga<R: Rng>(g: usize, n: usize, k: usize, m: f64, e: bool, rng: &mut R) -> Result<Board> {
    let config = GaConfig::new(g, n, k, m, e);
    let result: GaResult<QUEENS> = GaRunner::run_with_rng(&config, rng)?;
    Ok(result.best)
}

/// Like [`run_ga`], also returning the min, max and mean conflict series,
/// one entry per generation.
pub fn run_ga_with_data_generation<R: Rng>(
    g: usize,
    n: usize,
    k: usize,
    m: f64,
    e: bool,
    rng: &mut R,
) -> Result<(Board, Vec<Conflicts>, Vec<Conflicts>, Vec<f64>)> {
    let config = GaConfig::new(g, n, k, m, e).with_stats(true);
    let result: GaResult<QUEENS> = GaRunner::run_with_rng(&config, rng)?;
    let (min, max, mean) = result.history.unwrap_or_default().into_series();
    Ok((result.best, min, max, mean))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaError;
    use crate::ga::population::generate_population;
    use crate::ga::selection::tournament;
    use crate::random::create_rng;

    #[test]
    fn test_zero_generations_returns_best_initial_board() {
        let mut rng = create_rng(42);
        let best = run_ga(0, 30, 3, 0.1, true, &mut rng).unwrap();

        // Same seed, same initial population.
        let mut replay = create_rng(42);
        let initial: Vec<Board> = generate_population(30, &mut replay);
        assert_eq!(best, tournament(&initial).unwrap());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let config = GaConfig::default()
            .with_generations(30)
            .with_stats(true)
            .with_seed(7);
        let a: GaResult = GaRunner::run(&config).unwrap();
        let b: GaResult = GaRunner::run(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_history_has_one_entry_per_generation() {
        let mut rng = create_rng(3);
        let (best, min, max, mean) =
            run_ga_with_data_generation(25, 20, 3, 0.2, false, &mut rng).unwrap();
        assert_eq!(min.len(), 25);
        assert_eq!(max.len(), 25);
        assert_eq!(mean.len(), 25);
        for g in 0..25 {
            assert!(min[g] as f64 <= mean[g] && mean[g] <= max[g] as f64);
        }
        assert!(best.rows().iter().all(|r| (1..=8).contains(r)));
    }

    #[test]
    fn test_no_history_unless_requested() {
        let config = GaConfig::default().with_generations(5).with_seed(1);
        let result: GaResult = GaRunner::run(&config).unwrap();
        assert!(result.history.is_none());
        assert_eq!(result.generations, 5);
    }

    #[test]
    fn test_elitism_min_is_non_increasing() {
        let config = GaConfig::default()
            .with_generations(60)
            .with_population_size(20)
            .with_tournament_size(3)
            .with_mutation_probability(0.3)
            .with_stats(true)
            .with_seed(11);
        let result: GaResult = GaRunner::run(&config).unwrap();
        let history = result.history.unwrap();
        for w in history.min.windows(2) {
            assert!(w[1] <= w[0], "elite lost: {:?}", history.min);
        }
        assert!(result.best_conflicts <= *history.min.last().unwrap());
    }

    #[test]
    fn test_stop_on_solution() {
        let config = GaConfig::thorough().with_seed(5).with_stats(true);
        let result: GaResult = GaRunner::run(&config).unwrap();
        if result.stopped_early {
            assert!(result.solved());
            assert!(result.generations < config.generations);
        }
        assert_eq!(result.history.unwrap().len(), result.generations);
    }

    #[test]
    fn test_invalid_configuration_is_reported() {
        let mut rng = create_rng(1);
        let err = run_ga(10, 4, 5, 0.1, true, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::InvalidConfiguration(_)));

        let err = run_ga(10, 0, 0, 0.1, true, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::InvalidConfiguration(_)));

        let err = run_ga(10, 10, 2, 1.5, true, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_single_board_without_elitism_exhausts() {
        let mut rng = create_rng(1);
        let err = run_ga(1, 1, 1, 0.1, false, &mut rng).unwrap_err();
        assert!(matches!(err, GaError::PopulationExhaustion { .. }));

        // Nothing to breed, nothing to exhaust.
        assert!(run_ga(0, 1, 1, 0.1, false, &mut rng).is_ok());
    }

    #[test]
    fn test_tournament_size_equal_to_population() {
        let mut rng = create_rng(4);
        let result = run_ga(20, 6, 6, 0.2, false, &mut rng);
        assert!(result.is_ok());
    }

    #[test]
    fn test_other_board_sizes() {
        let config = GaConfig::default().with_generations(50).with_seed(9);
        let result: GaResult<6> = GaRunner::run(&config).unwrap();
        assert_eq!(result.best.size(), 6);
        assert_eq!(result.best_conflicts, result.best.conflicts());
    }
}
