//! Genetic algorithm over the ordinal tour encoding.

use crate::chromosome::Chromosome;
use crate::config::GeneticConfig;
use crate::error::{Error, Result};
use crate::population::Population;
use crate::problem::DistanceMatrix;
use crate::search::{Metaheuristic, SearchReport, SearchState};
use itertools::Itertools;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

/// Population-based search with elitist roulette selection, one-point
/// ordinal crossover and operator-driven mutation.
pub struct GeneticAlgorithm {
    pub state: SearchState,
    pub population: Population,
    pub elitism_rate: f64,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
}

impl GeneticAlgorithm {
    /// Create the algorithm with a generation-0 population of
    /// `nodes × population_rate` random chromosomes.
    pub fn new(matrix: DistanceMatrix, config: &GeneticConfig) -> Result<Self> {
        for (name, rate) in [
            ("elitism", config.elitism),
            ("mutation_rate", config.mutation_rate),
            ("crossover_rate", config.crossover_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(Error::InvalidInput(format!(
                    "{} must lie in [0, 1], got {}",
                    name, rate
                )));
            }
        }

        let mut state = SearchState::new(
            matrix,
            config.search.stop,
            &config.search.operator,
            config.search.seed,
        );

        let target_size = (state.nodes as f64 * config.population_rate) as usize;
        if target_size == 0 {
            return Err(Error::InvalidInput(format!(
                "population_rate {} yields an empty population for {} nodes",
                config.population_rate, state.nodes
            )));
        }

        let population = Population::random(&state.matrix, target_size, &mut state.rng);

        Ok(GeneticAlgorithm {
            state,
            population,
            elitism_rate: config.elitism,
            mutation_rate: config.mutation_rate,
            crossover_rate: config.crossover_rate,
        })
    }

    /// Number of chromosomes preserved unconditionally each generation.
    fn elite_count(&self) -> usize {
        (self.population.target_size as f64 * self.elitism_rate) as usize
    }

    /// Rebuild the population from the elite prefix plus roulette picks.
    pub fn selection(&mut self) {
        let elite = self.elite_count();
        let mut selected: Vec<Chromosome> = self.population.chromosomes[..elite].to_vec();

        while selected.len() < self.population.target_size {
            selected.push(self.population.roulette_pick(&mut self.state.rng).clone());
        }

        self.population.chromosomes = selected;
        self.population.rescale_fitness();
    }

    /// One-point crossover over the ordinal encoding.
    ///
    /// `crossover_rate × P` chromosomes leave the population as parents
    /// and their offspring take the vacated slots, so the population size
    /// is unchanged; any drift aborts the run.
    pub fn crossover(&mut self) -> Result<()> {
        let parent_count =
            (self.population.target_size as f64 * self.crossover_rate) as usize;
        let elite = self.elite_count();
        let initial_size = self.population.len();

        // The population is sorted by fitness, so a position below the
        // elite cutoff identifies an elite parent.
        let mut positions =
            rand::seq::index::sample(&mut self.state.rng, initial_size, parent_count).into_vec();
        positions.sort_unstable_by(|a, b| b.cmp(a));

        let mut parents: Vec<(Chromosome, bool)> = Vec::with_capacity(parent_count);
        for position in positions {
            let chromosome = self.population.chromosomes.remove(position);
            parents.push((chromosome, position < elite));
        }

        // Pair parents randomly; an odd straggler goes back unchanged.
        parents.shuffle(&mut self.state.rng);
        if parents.len() % 2 == 1 {
            let (chromosome, _) = parents.pop().unwrap();
            self.population.chromosomes.push(chromosome);
        }

        let nodes = self.state.nodes;
        for (pair_1, pair_2) in parents.into_iter().tuples::<(_, _)>() {
            let (parent_1, elite_1) = pair_1;
            let (parent_2, elite_2) = pair_2;

            let cut = self.state.rng.gen_range(0..=nodes);
            let crossed = [&parent_1.ordinal[..cut], &parent_2.ordinal[cut..]].concat();

            let mut child_1 = Chromosome::from_ordinal(&self.state.matrix, crossed.clone());
            let mut child_2 = Chromosome::from_ordinal(&self.state.matrix, crossed);

            if elite_1 || elite_2 {
                child_1.elite_parents = true;
                child_2.elite_parents = true;
            }

            self.population.chromosomes.push(child_1);
            self.population.chromosomes.push(child_2);
        }

        let new_size = self.population.len();
        if new_size != initial_size {
            return Err(Error::InvariantViolation(format!(
                "population size drifted from {} to {} during crossover",
                initial_size, new_size
            )));
        }

        Ok(())
    }

    /// Perturb `mutation_rate × P` randomly chosen chromosomes with the
    /// neighbourhood operator, skipping offspring of elite parents.
    pub fn mutation(&mut self) -> Result<()> {
        let picks = (self.population.target_size as f64 * self.mutation_rate) as usize;
        let positions =
            rand::seq::index::sample(&mut self.state.rng, self.population.len(), picks);

        for position in positions {
            if self.population.chromosomes[position].elite_parents {
                continue;
            }

            let tour = self.population.chromosomes[position].tour.clone();
            let mutated = self.state.operator.generate(tour, &mut self.state.rng)?;
            self.population.chromosomes[position] =
                Chromosome::from_tour(&self.state.matrix, mutated);
        }

        self.population.rescale_fitness();
        Ok(())
    }
}

impl Metaheuristic for GeneticAlgorithm {
    fn run(&mut self) -> Result<SearchReport> {
        info!(
            "running genetic algorithm with {} operator, population {}, stopping after {} stagnant generations",
            self.state.operator.name(),
            self.population.target_size,
            self.state.stop
        );

        let mut best = self.population.best().clone();
        let mut cost_history = vec![best.cost];

        self.state.cycles = 0;
        let mut count = 0;
        while count < self.state.stop {
            self.selection();
            self.crossover()?;
            self.mutation()?;

            if self.population.best().cost < best.cost {
                best = self.population.best().clone();
                debug!(
                    "generation {}: better chromosome found, cost {:.2}",
                    self.state.cycles, best.cost
                );
                cost_history.push(best.cost);
                count = 0;
            } else {
                count += 1;
            }

            self.state.cycles += 1;

            // Restructure the population for the next reproduction stage.
            self.population.remove_duplicates();
            self.population
                .refill(&self.state.matrix, &mut self.state.rng);
        }

        Ok(SearchReport {
            iterations: self.state.cycles,
            cost_history,
            best_tour: best.tour,
        })
    }
}
