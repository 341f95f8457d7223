//! Population bookkeeping for the genetic algorithm.

use crate::chromosome::Chromosome;
use crate::problem::DistanceMatrix;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// An ordered collection of chromosomes kept at a fixed target size.
///
/// The population is sorted by descending fitness after every fitness
/// recomputation, so index 0 always holds the current best chromosome and
/// the elite prefix sits at the front.
pub struct Population {
    pub chromosomes: Vec<Chromosome>,
    /// The configured population size `P`.
    pub target_size: usize,
}

impl Population {
    /// Create a generation-0 population of `target_size` random chromosomes.
    pub fn random<R: Rng>(matrix: &DistanceMatrix, target_size: usize, rng: &mut R) -> Self {
        let mut population = Population {
            chromosomes: Vec::with_capacity(target_size),
            target_size,
        };
        population.grow(matrix, target_size, rng);
        population
    }

    /// Append `count` freshly sampled random chromosomes, then rescale.
    pub fn grow<R: Rng>(&mut self, matrix: &DistanceMatrix, count: usize, rng: &mut R) {
        let nodes = matrix.nodes();

        for _ in 0..count {
            let mut tour: Vec<usize> = (0..nodes).collect();
            tour.shuffle(rng);
            self.chromosomes.push(Chromosome::from_tour(matrix, tour));
        }

        self.rescale_fitness();
    }

    /// Convert costs to fitness scores and sort by descending fitness.
    ///
    /// `fitness = max_cost − cost`: the shortest tour scores highest and
    /// no score is negative.
    pub fn rescale_fitness(&mut self) {
        let max_cost = self
            .chromosomes
            .iter()
            .map(|c| c.cost)
            .fold(f64::MIN, f64::max);

        for chromosome in &mut self.chromosomes {
            chromosome.fitness = max_cost - chromosome.cost;
        }

        self.chromosomes
            .sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap());
    }

    /// Sum of all fitness scores.
    pub fn total_fitness(&self) -> f64 {
        self.chromosomes.iter().map(|c| c.fitness).sum()
    }

    /// Number of chromosomes currently held.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Whether the population holds no chromosomes.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// The current best (highest-fitness) chromosome.
    pub fn best(&self) -> &Chromosome {
        &self.chromosomes[0]
    }

    /// Pick one chromosome by roulette wheel over the fitness prefix sums.
    ///
    /// The threshold is drawn in `[0, total_fitness)` and the walk stops at
    /// the first chromosome whose accumulated fitness exceeds it. A
    /// population whose fitness mass is all zero selects uniformly.
    pub fn roulette_pick<R: Rng>(&self, rng: &mut R) -> &Chromosome {
        let total = self.total_fitness();
        if total <= 0.0 {
            return self.chromosomes.choose(rng).unwrap();
        }

        let threshold = rng.gen_range(0.0..total);
        let mut accumulated = 0.0;

        for chromosome in &self.chromosomes {
            accumulated += chromosome.fitness;
            if accumulated > threshold {
                return chromosome;
            }
        }

        // Floating-point shortfall at the tail of the walk.
        self.chromosomes.last().unwrap()
    }

    /// Collapse chromosomes with identical tours to their first occurrence.
    pub fn remove_duplicates(&mut self) {
        let mut seen = HashSet::new();
        self.chromosomes.retain(|c| seen.insert(c.tour.clone()));
    }

    /// Top up with random chromosomes until the target size is met again.
    pub fn refill<R: Rng>(&mut self, matrix: &DistanceMatrix, rng: &mut R) {
        let missing = self.target_size.saturating_sub(self.chromosomes.len());
        if missing > 0 {
            self.grow(matrix, missing, rng);
        }
    }
}
