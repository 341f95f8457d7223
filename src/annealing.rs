//! Simulated annealing with pluggable cooling schedules.

use crate::config::AnnealingConfig;
use crate::error::{Error, Result};
use crate::problem::DistanceMatrix;
use crate::search::{Metaheuristic, SearchReport, SearchState};
use log::{debug, info};
use rand::Rng;

/// Temperature decay functions.
///
/// The per-step family (`linear`, `geometric`, `slow`) updates from the
/// current temperature alone; the multiplicative family scales with the
/// number of elapsed cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolingSchedule {
    /// `T - α`
    Linear,
    /// `T · α`
    Geometric,
    /// `T / (1 + αT)`
    Slow,
    /// `T · α^cycles`
    ExpMult,
    /// `T / (1 + α·cycles)`
    LinearMult,
    /// `T / (1 + α·cycles²)`
    QuadMult,
    /// `T / (1 + α·ln(1 + cycles))`
    LogMult,
}

impl CoolingSchedule {
    /// Parse a configuration name.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "linear" => Ok(CoolingSchedule::Linear),
            "geometric" => Ok(CoolingSchedule::Geometric),
            "slow" => Ok(CoolingSchedule::Slow),
            "exp_mult" => Ok(CoolingSchedule::ExpMult),
            "linear_mult" => Ok(CoolingSchedule::LinearMult),
            "quad_mult" => Ok(CoolingSchedule::QuadMult),
            "log_mult" => Ok(CoolingSchedule::LogMult),
            other => Err(Error::InvalidInput(format!(
                "unknown cooling schedule `{}`",
                other
            ))),
        }
    }

    /// Apply one cooling step.
    pub fn next(&self, temperature: f64, alpha: f64, cycles: u32) -> f64 {
        let cycles = f64::from(cycles);

        match self {
            CoolingSchedule::Linear => temperature - alpha,
            CoolingSchedule::Geometric => temperature * alpha,
            CoolingSchedule::Slow => temperature / (1.0 + alpha * temperature),
            CoolingSchedule::ExpMult => temperature * alpha.powf(cycles),
            CoolingSchedule::LinearMult => temperature / (1.0 + alpha * cycles),
            CoolingSchedule::QuadMult => temperature / (1.0 + alpha * cycles * cycles),
            CoolingSchedule::LogMult => temperature / (1.0 + alpha * (1.0 + cycles).ln()),
        }
    }
}

/// Single-solution search that accepts worsening moves with a probability
/// that decays as the temperature drops.
pub struct SimulatedAnnealing {
    pub state: SearchState,
    pub t_max: f64,
    pub t_min: f64,
    pub temperature: f64,
    pub alpha: f64,
    pub schedule: CoolingSchedule,
}

impl SimulatedAnnealing {
    /// Create a simulated annealing instance for the given search space.
    pub fn new(matrix: DistanceMatrix, config: &AnnealingConfig) -> Result<Self> {
        Ok(SimulatedAnnealing {
            state: SearchState::new(
                matrix,
                config.search.stop,
                &config.search.operator,
                config.search.seed,
            ),
            t_max: config.t_max,
            t_min: config.t_min,
            temperature: config.t_max,
            alpha: config.alpha,
            schedule: CoolingSchedule::from_name(&config.cooling_schedule)?,
        })
    }

    /// Probability of accepting `candidate_cost` against `current_cost`.
    ///
    /// A strict improvement is always accepted; otherwise the probability
    /// is `exp((current − candidate) / T)`, which lies in `(0, 1]`.
    pub fn acceptance_probability(current_cost: f64, candidate_cost: f64, temperature: f64) -> f64 {
        if current_cost > candidate_cost {
            return 1.0;
        }

        ((current_cost - candidate_cost) / temperature).exp()
    }
}

impl Metaheuristic for SimulatedAnnealing {
    fn run(&mut self) -> Result<SearchReport> {
        info!(
            "running simulated annealing with {} operator ({:?} schedule), t_max {}, t_min {}",
            self.state.operator.name(),
            self.schedule,
            self.t_max,
            self.t_min
        );

        let mut best_tour = self.state.random_tour();
        let mut best_cost = self.state.tour_cost(&best_tour);
        let mut cost_history = vec![best_cost];

        self.temperature = self.t_max;
        self.state.cycles = 0;
        let mut count = 0;
        while self.temperature > self.t_min && count < self.state.stop {
            let candidate = self
                .state
                .operator
                .generate(best_tour.clone(), &mut self.state.rng)?;
            let candidate_cost = self.state.tour_cost(&candidate);

            let probability =
                Self::acceptance_probability(best_cost, candidate_cost, self.temperature);

            if probability > self.state.rng.gen::<f64>() {
                debug!(
                    "iteration {}: accepted cost {:.2} at temperature {:.4}",
                    self.state.cycles, candidate_cost, self.temperature
                );
                best_tour = candidate;
                best_cost = candidate_cost;
                cost_history.push(candidate_cost);
                count = 0;
            } else {
                count += 1;
            }

            self.state.cycles += 1;
            self.temperature = self
                .schedule
                .next(self.temperature, self.alpha, self.state.cycles);
        }

        Ok(SearchReport {
            iterations: self.state.cycles,
            cost_history,
            best_tour,
        })
    }
}
