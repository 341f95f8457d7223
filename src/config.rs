//! Configuration records for the search algorithms.

use serde::{Deserialize, Serialize};

/// Options recognized by every algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Stagnation threshold: iterations without improvement before stopping
    pub stop: u32,
    /// Neighbourhood operator name; unknown names fall back to `rand_swap`
    pub operator: String,
    /// Seed for the random source; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            stop: 100,
            operator: "rand_swap".to_string(),
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        SearchConfig::default()
    }

    /// Set the stagnation threshold.
    pub fn with_stop(mut self, stop: u32) -> Self {
        self.stop = stop;
        self
    }

    /// Set the neighbourhood operator by name.
    pub fn with_operator<S: Into<String>>(mut self, operator: S) -> Self {
        self.operator = operator.into();
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Hill climbing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HillClimbingConfig {
    pub search: SearchConfig,
    /// Acceptance mode: `steepest` or `ascent`
    pub climb_type: String,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        HillClimbingConfig {
            search: SearchConfig::new().with_stop(20).with_operator("inversion"),
            climb_type: "steepest".to_string(),
        }
    }
}

impl HillClimbingConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        HillClimbingConfig::default()
    }

    /// Set the shared search options.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Set the acceptance mode.
    pub fn with_climb_type<S: Into<String>>(mut self, climb_type: S) -> Self {
        self.climb_type = climb_type.into();
        self
    }
}

/// Simulated annealing options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealingConfig {
    pub search: SearchConfig,
    /// Initial temperature
    pub t_max: f64,
    /// Temperature floor; reaching it terminates the run
    pub t_min: f64,
    /// Cooling coefficient
    pub alpha: f64,
    /// Cooling schedule name
    pub cooling_schedule: String,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        AnnealingConfig {
            search: SearchConfig::new().with_operator("inversion"),
            t_max: 10.0,
            t_min: 0.0005,
            alpha: 0.995,
            cooling_schedule: "slow".to_string(),
        }
    }
}

impl AnnealingConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        AnnealingConfig::default()
    }

    /// Set the shared search options.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Set the initial temperature.
    pub fn with_t_max(mut self, t_max: f64) -> Self {
        self.t_max = t_max;
        self
    }

    /// Set the temperature floor.
    pub fn with_t_min(mut self, t_min: f64) -> Self {
        self.t_min = t_min;
        self
    }

    /// Set the cooling coefficient.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the cooling schedule by name.
    pub fn with_cooling_schedule<S: Into<String>>(mut self, schedule: S) -> Self {
        self.cooling_schedule = schedule.into();
        self
    }
}

/// Tabu search options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabuConfig {
    pub search: SearchConfig,
    /// Tenure: maximum number of moves kept forbidden
    pub tabu_size: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        TabuConfig {
            search: SearchConfig::new().with_operator("rand_swap_adj"),
            tabu_size: 20,
        }
    }
}

impl TabuConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        TabuConfig::default()
    }

    /// Set the shared search options.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Set the tabu tenure.
    pub fn with_tabu_size(mut self, tabu_size: usize) -> Self {
        self.tabu_size = tabu_size;
        self
    }
}

/// Genetic algorithm options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneticConfig {
    pub search: SearchConfig,
    /// Fraction of top-fitness chromosomes preserved unconditionally
    pub elitism: f64,
    /// Fraction of the population mutated each generation
    pub mutation_rate: f64,
    /// Fraction of the population selected as parents each generation
    pub crossover_rate: f64,
    /// Population size as a multiplier on the node count
    pub population_rate: f64,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        GeneticConfig {
            search: SearchConfig::new().with_stop(50).with_operator("rand_swap_adj"),
            elitism: 0.8,
            mutation_rate: 1.0,
            crossover_rate: 1.0,
            population_rate: 20.0,
        }
    }
}

impl GeneticConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        GeneticConfig::default()
    }

    /// Set the shared search options.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Set the elitism rate.
    pub fn with_elitism(mut self, elitism: f64) -> Self {
        self.elitism = elitism;
        self
    }

    /// Set the mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Set the crossover rate.
    pub fn with_crossover_rate(mut self, crossover_rate: f64) -> Self {
        self.crossover_rate = crossover_rate;
        self
    }

    /// Set the population rate.
    pub fn with_population_rate(mut self, population_rate: f64) -> Self {
        self.population_rate = population_rate;
        self
    }
}
