//! Tabu search over adjacent-swap moves.

use crate::config::TabuConfig;
use crate::error::Result;
use crate::problem::DistanceMatrix;
use crate::search::{Metaheuristic, SearchReport, SearchState};
use log::{debug, info};
use std::collections::VecDeque;

/// A forbidden move: the value-normalized pair of swapped node values.
type Move = (usize, usize);

/// Single-solution search that forbids recently applied moves for a
/// bounded number of iterations.
pub struct TabuSearch {
    pub state: SearchState,
    /// Maximum number of moves kept forbidden.
    pub tenure: usize,
    tabu_list: VecDeque<Move>,
}

impl TabuSearch {
    /// Create a tabu search instance for the given search space.
    pub fn new(matrix: DistanceMatrix, config: &TabuConfig) -> Self {
        TabuSearch {
            state: SearchState::new(
                matrix,
                config.search.stop,
                &config.search.operator,
                config.search.seed,
            ),
            tenure: config.tabu_size,
            tabu_list: VecDeque::with_capacity(config.tabu_size),
        }
    }

    /// Number of currently forbidden moves.
    pub fn tabu_len(&self) -> usize {
        self.tabu_list.len()
    }

    fn normalize(a: usize, b: usize) -> Move {
        (a.min(b), a.max(b))
    }
}

impl Metaheuristic for TabuSearch {
    fn run(&mut self) -> Result<SearchReport> {
        info!(
            "running tabu search with {} operator, tenure {}, stopping after {} stagnant iterations",
            self.state.operator.name(),
            self.tenure,
            self.state.stop
        );

        let mut best_tour = self.state.random_tour();
        let mut best_cost = self.state.tour_cost(&best_tour);
        let mut cost_history = vec![best_cost];

        self.state.cycles = 0;
        let mut count = 0;
        while count < self.state.stop {
            let candidate = self
                .state
                .operator
                .generate(best_tour.clone(), &mut self.state.rng)?;

            // Scan the full adjacent-swap neighbourhood of the perturbed
            // tour for the best move that is not currently forbidden.
            let mut local_best = candidate.clone();
            let mut local_best_cost = self.state.tour_cost(&candidate);
            let mut local_move: Option<Move> = None;

            for i in 0..candidate.len().saturating_sub(1) {
                let mut neighbour = candidate.clone();
                neighbour.swap(i, i + 1);

                let candidate_move = Self::normalize(neighbour[i], neighbour[i + 1]);
                if self.tabu_list.contains(&candidate_move) {
                    continue;
                }

                let neighbour_cost = self.state.tour_cost(&neighbour);
                if neighbour_cost < local_best_cost {
                    local_best = neighbour;
                    local_best_cost = neighbour_cost;
                    local_move = Some(candidate_move);
                }
            }

            if local_best_cost < best_cost {
                debug!(
                    "iteration {}: cost improved to {:.2}",
                    self.state.cycles, local_best_cost
                );
                best_tour = local_best;
                best_cost = local_best_cost;
                cost_history.push(local_best_cost);

                if let Some(accepted_move) = local_move {
                    self.tabu_list.push_back(accepted_move);
                }

                count = 0;
            } else {
                count += 1;
            }

            // Age out the oldest forbidden moves so they can be applied again.
            while self.tabu_list.len() > self.tenure {
                self.tabu_list.pop_front();
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
