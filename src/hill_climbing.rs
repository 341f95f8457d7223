//! Hill climbing over the tour space.

use crate::config::HillClimbingConfig;
use crate::error::{Error, Result};
use crate::problem::DistanceMatrix;
use crate::search::{Metaheuristic, SearchReport, SearchState};
use log::{debug, info};

/// Acceptance mode for hill climbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbType {
    /// Scan the full adjacent-swap neighbourhood of each perturbed
    /// candidate and keep the best tour found.
    Steepest,
    /// Accept the perturbed candidate at its raw cost.
    Ascent,
}

impl ClimbType {
    /// Parse a configuration name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "steepest" => Ok(ClimbType::Steepest),
            "ascent" => Ok(ClimbType::Ascent),
            other => Err(Error::InvalidInput(format!(
                "unknown climb type `{}`, expected `steepest` or `ascent`",
                other
            ))),
        }
    }
}

/// Single-solution iterative improvement with a stagnation stop.
pub struct HillClimbing {
    pub state: SearchState,
    pub climb_type: ClimbType,
}

impl HillClimbing {
    /// Create a hill climbing instance for the given search space.
    pub fn new(matrix: DistanceMatrix, config: &HillClimbingConfig) -> Result<Self> {
        Ok(HillClimbing {
            state: SearchState::new(
                matrix,
                config.search.stop,
                &config.search.operator,
                config.search.seed,
            ),
            climb_type: ClimbType::from_name(&config.climb_type)?,
        })
    }

    /// Evaluate every adjacent-swap neighbour of `tour` and keep the best
    /// one found, replacing `tour` in place. Returns the best cost.
    fn evaluate_neighbourhood_space(&self, tour: &mut Vec<usize>) -> f64 {
        let mut cost = self.state.tour_cost(tour);
        let mut best_candidate = tour.clone();

        for i in 0..tour.len().saturating_sub(1) {
            let mut candidate = tour.clone();
            candidate.swap(i, i + 1);

            let candidate_cost = self.state.tour_cost(&candidate);
            if candidate_cost < cost {
                cost = candidate_cost;
                best_candidate = candidate;
            }
        }

        *tour = best_candidate;
        cost
    }
}

impl Metaheuristic for HillClimbing {
    fn run(&mut self) -> Result<SearchReport> {
        info!(
            "running {:?} hill climbing with {} operator, stopping after {} stagnant iterations",
            self.climb_type,
            self.state.operator.name(),
            self.state.stop
        );

        let mut best_tour = self.state.random_tour();
        let mut best_cost = self.state.tour_cost(&best_tour);
        let mut cost_history = vec![best_cost];

        self.state.cycles = 0;
        let mut count = 0;
        while count < self.state.stop {
            let mut candidate = self
                .state
                .operator
                .generate(best_tour.clone(), &mut self.state.rng)?;

            let candidate_cost = match self.climb_type {
                ClimbType::Steepest => self.evaluate_neighbourhood_space(&mut candidate),
                ClimbType::Ascent => self.state.tour_cost(&candidate),
            };

            if candidate_cost < best_cost {
                debug!(
                    "iteration {}: cost improved to {:.2}",
                    self.state.cycles, candidate_cost
                );
                best_tour = candidate;
                best_cost = candidate_cost;
                cost_history.push(candidate_cost);
                count = 0;
            } else {
                count += 1;
            }

            self.state.cycles += 1;
        }

        Ok(SearchReport {
            iterations: self.state.cycles,
            cost_history,
            best_tour,
        })
    }
}
