//! State and surface shared by the four search algorithms.

use crate::error::Result;
use crate::operator::Operator;
use crate::problem::DistanceMatrix;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Outcome of a completed search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Total iterations (or generations) performed.
    pub iterations: u32,
    /// The accepted costs, in acceptance order.
    pub cost_history: Vec<f64>,
    /// The best tour found.
    pub best_tour: Vec<usize>,
}

impl SearchReport {
    /// The last cost recorded, if any.
    pub fn final_cost(&self) -> Option<f64> {
        self.cost_history.last().copied()
    }
}

/// A search algorithm that can be driven to completion.
pub trait Metaheuristic {
    /// Run the algorithm until its stop criterion fires.
    fn run(&mut self) -> Result<SearchReport>;
}

/// State common to every algorithm variant: the distance matrix, the
/// perturbation operator, the stagnation threshold and the random source.
#[derive(Debug, Clone)]
pub struct SearchState {
    /// The read-only search space.
    pub matrix: DistanceMatrix,
    /// Number of cities.
    pub nodes: usize,
    /// The neighbourhood operator driving perturbations.
    pub operator: Operator,
    /// Stagnation threshold: iterations without improvement before stopping.
    pub stop: u32,
    /// Iterations performed so far.
    pub cycles: u32,
    /// The instance-owned random source.
    pub rng: ChaCha8Rng,
}

impl SearchState {
    /// Create the shared state for one algorithm instance.
    ///
    /// `seed` makes the run reproducible; `None` draws from entropy.
    pub fn new(matrix: DistanceMatrix, stop: u32, operator: &str, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let nodes = matrix.nodes();

        SearchState {
            matrix,
            nodes,
            operator: Operator::from_name(operator),
            stop,
            cycles: 0,
            rng,
        }
    }

    /// Total cost of a closed tour, including the edge back to the start.
    pub fn tour_cost(&self, tour: &[usize]) -> f64 {
        tour_cost(&self.matrix, tour)
    }

    /// Generate a random initial tour visiting every node exactly once.
    pub fn random_tour(&mut self) -> Vec<usize> {
        let mut tour: Vec<usize> = (0..self.nodes).collect();
        tour.shuffle(&mut self.rng);
        tour
    }
}

/// Cost of a closed tour over `matrix`, closing edge included.
pub fn tour_cost(matrix: &DistanceMatrix, tour: &[usize]) -> f64 {
    if tour.len() < 2 {
        return 0.0;
    }

    let mut cost = 0.0;
    for i in 0..tour.len() - 1 {
        cost += matrix.get(tour[i], tour[i + 1]);
    }

    // The tour is a cycle: add the edge from the last city back to the start.
    cost + matrix.get(tour[tour.len() - 1], tour[0])
}
