//! Genetic Algorithm for N-Queens.
//!
//! Boards are fixed-length row assignments scored by the number of
//! attacking queen pairs (lower is better). Each generation picks parents by
//! tournament over a random sample, recombines them with single-point
//! crossover, mutates one gene with some probability and optionally keeps
//! the best board unchanged (elitism).
//!
//! # Key Types
//!
//! - [`Board`]: one candidate placement
//! - [`GaConfig`]: run parameters
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: best board, its conflicts, optional [`ConflictHistory`]
//!
//! # Operations
//!
//! - [`evaluate`]: pairwise conflict count
//! - [`tournament`], [`select_individuals`]: parent selection
//! - [`crossover`], [`mutate`]: variation operators
//! - [`generate_random_individual`], [`generate_population`]: initialization
//! - [`run_ga`], [`run_ga_with_data_generation`]: parameter-list entry points
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod fitness;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod stats;
mod types;

pub use config::GaConfig;
pub use fitness::evaluate;
pub use operators::{crossover, mutate};
pub use population::{generate_population, generate_random_individual, Population};
pub use runner::{run_ga, run_ga_with_data_generation, GaResult, GaRunner};
pub use selection::{select_individuals, tournament};
pub use stats::{ConflictHistory, GenerationStats};
pub use types::{Board, Conflicts, QUEENS};
