//! Per-generation conflict statistics.
//!
//! [`ConflictHistory`] holds three parallel series (min, max, mean), one
//! entry per generation with the generation number as index. It is what a
//! plotting or reporting front end consumes.

use super::fitness::evaluate;
use super::types::{Board, Conflicts};
use crate::error::{GaError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Conflict summary of one population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub min: Conflicts,
    pub max: Conflicts,
    pub mean: f64,
}

impl GenerationStats {
    /// Evaluates every board and summarizes the results.
    ///
    /// With `parallel` set and the `parallel` feature enabled, boards are
    /// evaluated on the rayon thread pool; the result does not depend on it.
    ///
    /// # Errors
    /// [`GaError::EmptyPopulation`] if `population` is empty.
    pub fn from_population<const N: usize>(
        population: &[Board<N>],
        parallel: bool,
    ) -> Result<Self> {
        let conflicts = evaluate_all(population, parallel);
        Self::from_conflicts(&conflicts)
    }

    /// Summarizes already computed conflict counts.
    pub fn from_conflicts(conflicts: &[Conflicts]) -> Result<Self> {
        let (&first, rest) = conflicts.split_first().ok_or(GaError::EmptyPopulation)?;
        let (mut min, mut max, mut sum) = (first, first, u64::from(first));
        for &c in rest {
            min = min.min(c);
            max = max.max(c);
            sum += u64::from(c);
        }
        Ok(Self {
            min,
            max,
            mean: sum as f64 / conflicts.len() as f64,
        })
    }
}

fn evaluate_all<const N: usize>(population: &[Board<N>], parallel: bool) -> Vec<Conflicts> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return population.par_iter().map(evaluate).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(evaluate).collect()
}

/// Min, max and mean conflicts for each generation of a run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConflictHistory {
    pub min: Vec<Conflicts>,
    pub max: Vec<Conflicts>,
    pub mean: Vec<f64>,
}

impl ConflictHistory {
    pub fn with_capacity(generations: usize) -> Self {
        Self {
            min: Vec::with_capacity(generations),
            max: Vec::with_capacity(generations),
            mean: Vec::with_capacity(generations),
        }
    }

    /// Appends the next generation's statistics.
    pub fn push(&mut self, stats: GenerationStats) {
        self.min.push(stats.min);
        self.max.push(stats.max);
        self.mean.push(stats.mean);
    }

    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.min.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty()
    }

    /// Statistics of one generation.
    pub fn get(&self, generation: usize) -> Option<GenerationStats> {
        Some(GenerationStats {
            min: *self.min.get(generation)?,
            max: *self.max.get(generation)?,
            mean: *self.mean.get(generation)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = GenerationStats> + '_ {
        (0..self.len()).filter_map(move |g| self.get(g))
    }

    /// Splits the history into its `(min, max, mean)` series.
    pub fn into_series(self) -> (Vec<Conflicts>, Vec<Conflicts>, Vec<f64>) {
        (self.min, self.max, self.mean)
    }
}
