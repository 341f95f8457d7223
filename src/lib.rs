//! # tsp_meta
//!
//! A metaheuristic search engine for the Travelling Salesman Problem.
//!
//! Four interchangeable search strategies operate over a shared,
//! precomputed pairwise-distance matrix: steepest/simple hill climbing,
//! simulated annealing, tabu search and a permutation genetic algorithm.
//! Each algorithm is constructed from a [`DistanceMatrix`] and a
//! configuration record, then driven through the [`Metaheuristic`] trait
//! until its stop criterion fires, yielding a [`SearchReport`] with the
//! iteration count, the accepted cost history and the best tour found.

pub mod annealing;
pub mod chromosome;
pub mod config;
pub mod error;
pub mod genetic;
pub mod hill_climbing;
pub mod operator;
pub mod population;
pub mod problem;
pub mod search;
pub mod tabu;

pub use crate::annealing::SimulatedAnnealing;
pub use crate::error::{Error, Result};
pub use crate::genetic::GeneticAlgorithm;
pub use crate::hill_climbing::HillClimbing;
pub use crate::operator::Operator;
pub use crate::problem::{Coordinate, DistanceMatrix};
pub use crate::search::{Metaheuristic, SearchReport};
pub use crate::tabu::TabuSearch;
