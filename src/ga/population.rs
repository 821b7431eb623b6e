//! Population initialization and generational breeding.

use super::config::GaConfig;
use super::fitness::evaluate;
use super::operators::{crossover, mutate};
use super::selection::{select_individuals, tournament};
use super::stats::GenerationStats;
use super::types::Board;
use crate::error::{GaError, Result};
use log::trace;
use rand::Rng;

/// Creates a board with `N` independent uniform rows in `1..=N`.
pub fn generate_random_individual<const N: usize, R: Rng>(rng: &mut R) -> Board<N> {
    Board::from_rows_unchecked(std::array::from_fn(|_| rng.random_range(1..=N)))
}

/// Creates `size` random boards. Duplicates are allowed.
pub fn generate_population<const N: usize, R: Rng>(size: usize, rng: &mut R) -> Vec<Board<N>> {
    (0..size).map(|_| generate_random_individual(rng)).collect()
}

/// One generation of boards.
///
/// A population is consumed by [`breed`](Population::breed): parents are
/// taken out of it while the next generation is assembled, and the old
/// generation is dropped once the new one is full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population<const N: usize = 8> {
    members: Vec<Board<N>>,
}

impl<const N: usize> Population<N> {
    /// Wraps an existing set of boards.
    pub fn new(members: Vec<Board<N>>) -> Self {
        Self { members }
    }

    /// Creates `size` random boards.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        Self::new(generate_population(size, rng))
    }

    pub fn members(&self) -> &[Board<N>] {
        &self.members
    }

    pub fn into_members(self) -> Vec<Board<N>> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Tournament over the whole population: the first board with the fewest
    /// conflicts.
    pub fn best(&self) -> Result<Board<N>> {
        tournament(&self.members)
    }

    /// Returns `true` if any member is a zero-conflict board.
    pub fn contains_solution(&self) -> bool {
        self.members.iter().any(|b| evaluate(b) == 0)
    }

    /// Min/max/mean conflicts over the current members.
    pub fn stats(&self, parallel: bool) -> Result<GenerationStats> {
        GenerationStats::from_population(&self.members, parallel)
    }

    /// Builds the next generation.
    ///
    /// With elitism the best current board is carried over unchanged. Then,
    /// until the next generation holds `population_size` boards:
    ///
    /// 1. a tournament over `k` boards sampled from a copy of this
    ///    population picks the first parent, which is then removed from this
    ///    population;
    /// 2. a second tournament over the reduced population picks the second
    ///    parent;
    /// 3. the two children of their crossover are mutated independently and
    ///    appended.
    ///
    /// First parents are not put back, so this population shrinks by one
    /// board per pair of children. When only one slot remains the second
    /// child is discarded, keeping the next generation at exactly
    /// `population_size`.
    ///
    /// # Errors
    /// [`GaError::PopulationExhaustion`] if the population runs out of
    /// boards before the next generation is full.
    pub fn breed<R: Rng>(mut self, config: &GaConfig, rng: &mut R) -> Result<Self> {
        let target = config.population_size;
        let cut_point = config.cut_point_for(N);
        let mut next = Vec::with_capacity(target);

        if config.elitism && !self.members.is_empty() {
            next.push(self.best()?);
        }

        while next.len() < target {
            let parent_1 = select_parent(&self.members, config.tournament_size, rng)?;
            if let Some(pos) = self.members.iter().position(|b| *b == parent_1) {
                self.members.remove(pos);
            }
            let parent_2 = select_parent(&self.members, config.tournament_size, rng)?;
            trace!(
                "parents {:?} x {:?}, {} boards left in pool",
                parent_1.rows(),
                parent_2.rows(),
                self.members.len()
            );

            let (child_1, child_2) = crossover(&parent_1, &parent_2, cut_point);
            for child in [child_1, child_2] {
                if next.len() >= target {
                    trace!("next generation full, dropping second child");
                    break;
                }
                next.push(mutate(child, config.mutation_probability, rng));
            }
        }

        Ok(Self::new(next))
    }
}

/// Tournament over `k` boards drawn from a copy of `pool`.
///
/// A pool shorter than `k` is sampled whole; reading its last board again,
/// as an oversized request to [`select_individuals`] would, cannot change
/// the tournament winner.
fn select_parent<const N: usize, R: Rng>(
    pool: &[Board<N>],
    k: usize,
    rng: &mut R,
) -> Result<Board<N>> {
    if pool.is_empty() {
        return Err(GaError::PopulationExhaustion {
            requested: k,
            available: 0,
        });
    }
    let participants = select_individuals(pool.to_vec(), k.min(pool.len()), rng)?;
    tournament(&participants)
}

impl<const N: usize> From<Vec<Board<N>>> for Population<N> {
    fn from(members: Vec<Board<N>>) -> Self {
        Self::new(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn config(n: usize, k: usize, m: f64, elitism: bool) -> GaConfig {
        GaConfig::default()
            .with_population_size(n)
            .with_tournament_size(k)
            .with_mutation_probability(m)
            .with_elitism(elitism)
    }

    #[test]
    fn test_random_individual_in_range() {
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let b: Board = generate_random_individual(&mut rng);
            assert!(b.rows().iter().all(|r| (1..=8).contains(r)));
        }
    }

    #[test]
    fn test_random_individual_covers_all_rows() {
        let mut rng = create_rng(1);
        let mut seen = [false; 8];
        for _ in 0..100 {
            let b: Board = generate_random_individual(&mut rng);
            for &r in b.rows() {
                seen[r - 1] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_generate_population_size() {
        let mut rng = create_rng(42);
        let pop: Vec<Board> = generate_population(37, &mut rng);
        assert_eq!(pop.len(), 37);
        let empty: Vec<Board> = generate_population(0, &mut rng);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_breed_keeps_size_even_and_odd() {
        let mut rng = create_rng(42);
        for (n, elitism) in [(10, false), (10, true), (11, false), (11, true)] {
            let pop: Population = Population::random(n, &mut rng);
            let next = pop.breed(&config(n, 3, 0.1, elitism), &mut rng).unwrap();
            assert_eq!(next.len(), n, "n={n} elitism={elitism}");
        }
    }

    #[test]
    fn test_breed_elitism_carries_best() {
        let mut rng = create_rng(5);
        let pop: Population = Population::random(20, &mut rng);
        let best = pop.best().unwrap();
        let next = pop.breed(&config(20, 3, 1.0, true), &mut rng).unwrap();
        assert_eq!(next.members()[0], best);
    }

    #[test]
    fn test_breed_without_mutation_only_recombines() {
        // Without mutation every child gene comes from the same column of
        // some parent.
        let mut rng = create_rng(8);
        let pop: Population = Population::random(12, &mut rng);
        let columns: Vec<Vec<usize>> = (0..8)
            .map(|c| pop.members().iter().map(|b| b[c]).collect())
            .collect();
        let next = pop.clone().breed(&config(12, 2, 0.0, false), &mut rng).unwrap();
        for child in next.members() {
            for c in 0..8 {
                assert!(columns[c].contains(&child[c]));
            }
        }
    }

    #[test]
    fn test_breed_tournament_of_whole_pool() {
        // k = n: the first parent is always the population's best, the
        // second is the best of the rest.
        let mut rng = create_rng(13);
        let boards = vec![
            Board::new([3; 8]).unwrap(),
            Board::new([2, 4, 6, 8, 3, 1, 7, 5]).unwrap(),
            Board::new([1, 2, 3, 4, 5, 6, 7, 8]).unwrap(),
            Board::new([2, 7, 4, 8, 1, 6, 3, 4]).unwrap(),
        ];
        let pop = Population::new(boards);
        let next = pop.breed(&config(2, 4, 0.0, false), &mut rng).unwrap();
        let expected = crossover(
            &Board::new([2, 4, 6, 8, 3, 1, 7, 5]).unwrap(),
            &Board::new([2, 7, 4, 8, 1, 6, 3, 4]).unwrap(),
            4,
        );
        assert_eq!(next.members(), &[expected.0, expected.1]);
    }

    #[test]
    fn test_breed_single_board_without_elitism_exhausts() {
        let mut rng = create_rng(2);
        let pop: Population = Population::random(1, &mut rng);
        let err = pop.breed(&config(1, 1, 0.1, false), &mut rng).unwrap_err();
        assert!(matches!(err, GaError::PopulationExhaustion { available: 0, .. }));
    }

    #[test]
    fn test_breed_single_board_with_elitism() {
        let mut rng = create_rng(2);
        let pop: Population = Population::random(1, &mut rng);
        let only = pop.members()[0];
        let next = pop.breed(&config(1, 1, 1.0, true), &mut rng).unwrap();
        assert_eq!(next.members(), &[only]);
    }

    #[test]
    fn test_contains_solution() {
        let pop = Population::new(vec![
            Board::new([3; 8]).unwrap(),
            Board::new([5, 3, 1, 7, 2, 8, 6, 4]).unwrap(),
        ]);
        assert!(pop.contains_solution());
        let pop = Population::new(vec![Board::new([3; 8]).unwrap()]);
        assert!(!pop.contains_solution());
    }
}
