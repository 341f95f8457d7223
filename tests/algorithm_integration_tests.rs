//! Integration tests driving each algorithm to convergence.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tsp_meta::config::{
    AnnealingConfig, GeneticConfig, HillClimbingConfig, SearchConfig, TabuConfig,
};
use tsp_meta::error::Error;
use tsp_meta::search::tour_cost;
use tsp_meta::{
    Coordinate, DistanceMatrix, GeneticAlgorithm, HillClimbing, Metaheuristic, SearchReport,
    SimulatedAnnealing, TabuSearch,
};

/// A unit square: the optimal tour walks the perimeter at cost 4.0.
fn create_square_matrix() -> DistanceMatrix {
    let coordinates = vec![
        Coordinate::new(0.0, 0.0),
        Coordinate::new(0.0, 1.0),
        Coordinate::new(1.0, 1.0),
        Coordinate::new(1.0, 0.0),
    ];
    DistanceMatrix::new(coordinates).unwrap()
}

/// Assert that a report ends at the square's optimal cost.
fn assert_optimal(report: &SearchReport, matrix: &DistanceMatrix) {
    let final_cost = report.final_cost().unwrap();
    assert!(
        (final_cost - 4.0).abs() < 1e-9,
        "converged to {} instead of 4.0",
        final_cost
    );
    assert!((tour_cost(matrix, &report.best_tour) - 4.0).abs() < 1e-9);
}

#[test]
fn test_hill_climbing_steepest_finds_square_perimeter() {
    let matrix = create_square_matrix();
    let config = HillClimbingConfig::new()
        .with_search(SearchConfig::new().with_stop(200).with_seed(42))
        .with_climb_type("steepest");

    let mut algorithm = HillClimbing::new(matrix.clone(), &config).unwrap();
    let report = algorithm.run().unwrap();

    assert_optimal(&report, &matrix);
    assert!(report.iterations >= 200);

    // Hill climbing only ever accepts improvements, so the history is a
    // strictly decreasing sequence after the initial cost.
    for window in report.cost_history.windows(2) {
        assert!(window[1] < window[0]);
    }
}

#[test]
fn test_hill_climbing_ascent_finds_square_perimeter() {
    let matrix = create_square_matrix();
    let config = HillClimbingConfig::new()
        .with_search(
            SearchConfig::new()
                .with_stop(300)
                .with_operator("rand_swap")
                .with_seed(11),
        )
        .with_climb_type("ascent");

    let mut algorithm = HillClimbing::new(matrix.clone(), &config).unwrap();
    let report = algorithm.run().unwrap();

    assert_optimal(&report, &matrix);
}

#[test]
fn test_hill_climbing_rejects_unknown_climb_type() {
    let result = HillClimbing::new(
        create_square_matrix(),
        &HillClimbingConfig::new().with_climb_type("sideways"),
    );
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_annealing_finds_square_perimeter() {
    let matrix = create_square_matrix();
    let config = AnnealingConfig::new()
        .with_search(
            SearchConfig::new()
                .with_stop(500)
                .with_operator("rand_swap")
                .with_seed(7),
        )
        .with_t_max(10.0)
        .with_t_min(0.001)
        .with_alpha(0.995)
        .with_cooling_schedule("geometric");

    let mut algorithm = SimulatedAnnealing::new(matrix.clone(), &config).unwrap();
    let report = algorithm.run().unwrap();

    assert_optimal(&report, &matrix);
    assert!(algorithm.temperature <= 0.001 || report.iterations >= 500);
}

#[test]
fn test_tabu_search_finds_square_perimeter() {
    let matrix = create_square_matrix();
    let config = TabuConfig::new()
        .with_search(
            SearchConfig::new()
                .with_stop(300)
                .with_operator("rand_swap")
                .with_seed(3),
        )
        .with_tabu_size(5);

    let mut algorithm = TabuSearch::new(matrix.clone(), &config);
    let report = algorithm.run().unwrap();

    assert_optimal(&report, &matrix);
}

#[test]
fn test_tabu_list_stays_bounded() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let matrix = DistanceMatrix::random(12, &mut rng).unwrap();

    let config = TabuConfig::new()
        .with_search(SearchConfig::new().with_stop(150).with_seed(13))
        .with_tabu_size(3);

    let mut algorithm = TabuSearch::new(matrix, &config);
    algorithm.run().unwrap();

    assert!(algorithm.tabu_len() <= 3);
}

#[test]
fn test_genetic_algorithm_finds_square_perimeter() {
    let matrix = create_square_matrix();
    let config = GeneticConfig::new()
        .with_search(SearchConfig::new().with_stop(50).with_seed(5))
        .with_population_rate(10.0);

    let mut algorithm = GeneticAlgorithm::new(matrix.clone(), &config).unwrap();
    let report = algorithm.run().unwrap();

    assert_optimal(&report, &matrix);
    assert_eq!(algorithm.population.len(), algorithm.population.target_size);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = HillClimbingConfig::new()
        .with_search(SearchConfig::new().with_stop(100).with_seed(21));

    let mut first = HillClimbing::new(create_square_matrix(), &config).unwrap();
    let mut second = HillClimbing::new(create_square_matrix(), &config).unwrap();

    assert_eq!(first.run().unwrap(), second.run().unwrap());
}

#[test]
fn test_three_opt_surfaces_unimplemented() {
    let config = HillClimbingConfig::new()
        .with_search(SearchConfig::new().with_operator("three_opt").with_seed(1));

    let mut algorithm = HillClimbing::new(create_square_matrix(), &config).unwrap();
    let result = algorithm.run();

    assert!(matches!(result, Err(Error::Unimplemented(_))));
}
