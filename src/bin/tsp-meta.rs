//! Command-line driver for the tsp_meta search engine.

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tsp_meta::config::{
    AnnealingConfig, GeneticConfig, HillClimbingConfig, SearchConfig, TabuConfig,
};
use tsp_meta::{
    DistanceMatrix, GeneticAlgorithm, HillClimbing, Metaheuristic, SimulatedAnnealing, TabuSearch,
};

#[derive(Parser)]
#[command(name = "tsp-meta", version, about = "Metaheuristic TSP solver")]
struct Cli {
    /// CSV file of `x,y` city coordinates; a random space is generated if absent
    #[arg(long)]
    file: Option<PathBuf>,

    /// Number of cities when generating a random search space
    #[arg(long, default_value_t = 25)]
    nodes: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Neighbourhood operator (rand_swap, rand_swap_adj, inversion, two_opt, three_opt)
    #[arg(long, default_value = "rand_swap")]
    operator: String,

    /// Stagnation threshold: iterations without improvement before stopping
    #[arg(long, default_value_t = 100)]
    stop: u32,

    /// Emit the report as JSON on stdout
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    algorithm: Algorithm,
}

#[derive(Subcommand)]
enum Algorithm {
    /// Hill climbing
    HillClimbing {
        /// Acceptance mode: steepest or ascent
        #[arg(long, default_value = "steepest")]
        climb_type: String,
    },
    /// Simulated annealing
    Annealing {
        /// Initial temperature
        #[arg(long, default_value_t = 10.0)]
        t_max: f64,
        /// Temperature floor
        #[arg(long, default_value_t = 0.0005)]
        t_min: f64,
        /// Cooling coefficient
        #[arg(long, default_value_t = 0.995)]
        alpha: f64,
        /// Cooling schedule (linear, geometric, slow, exp_mult, linear_mult, quad_mult, log_mult)
        #[arg(long, default_value = "slow")]
        cooling_schedule: String,
    },
    /// Tabu search
    Tabu {
        /// Tenure: maximum number of forbidden moves
        #[arg(long, default_value_t = 20)]
        tabu_size: usize,
    },
    /// Genetic algorithm
    Genetic {
        /// Fraction of top chromosomes preserved unconditionally
        #[arg(long, default_value_t = 0.8)]
        elitism: f64,
        /// Fraction of the population mutated per generation
        #[arg(long, default_value_t = 1.0)]
        mutation_rate: f64,
        /// Fraction of the population selected as parents per generation
        #[arg(long, default_value_t = 1.0)]
        crossover_rate: f64,
        /// Population size as a multiplier on the node count
        #[arg(long, default_value_t = 20.0)]
        population_rate: f64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let matrix = match &cli.file {
        Some(path) => DistanceMatrix::from_csv(path)?,
        None => {
            let mut rng = match cli.seed {
                Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                None => ChaCha8Rng::from_entropy(),
            };
            DistanceMatrix::random(cli.nodes, &mut rng)?
        }
    };

    let mut search = SearchConfig::new()
        .with_stop(cli.stop)
        .with_operator(cli.operator.clone());
    search.seed = cli.seed;

    let report = match cli.algorithm {
        Algorithm::HillClimbing { climb_type } => {
            let config = HillClimbingConfig::new()
                .with_search(search)
                .with_climb_type(climb_type);
            HillClimbing::new(matrix, &config)?.run()?
        }
        Algorithm::Annealing {
            t_max,
            t_min,
            alpha,
            cooling_schedule,
        } => {
            let config = AnnealingConfig::new()
                .with_search(search)
                .with_t_max(t_max)
                .with_t_min(t_min)
                .with_alpha(alpha)
                .with_cooling_schedule(cooling_schedule);
            SimulatedAnnealing::new(matrix, &config)?.run()?
        }
        Algorithm::Tabu { tabu_size } => {
            let config = TabuConfig::new()
                .with_search(search)
                .with_tabu_size(tabu_size);
            TabuSearch::new(matrix, &config).run()?
        }
        Algorithm::Genetic {
            elitism,
            mutation_rate,
            crossover_rate,
            population_rate,
        } => {
            let config = GeneticConfig::new()
                .with_search(search)
                .with_elitism(elitism)
                .with_mutation_rate(mutation_rate)
                .with_crossover_rate(crossover_rate)
                .with_population_rate(population_rate);
            GeneticAlgorithm::new(matrix, &config)?.run()?
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("iterations: {}", report.iterations);
        if let Some(cost) = report.final_cost() {
            println!("best cost: {:.2}", cost);
        }
        println!("best tour: {:?}", report.best_tour);
    }

    Ok(())
}
