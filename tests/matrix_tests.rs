//! Unit tests for the distance matrix construction.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::io::Write;
use tsp_meta::error::Error;
use tsp_meta::problem::{Coordinate, DistanceMatrix};

/// Coordinates of a 3-4-5 right triangle.
fn triangle_coordinates() -> Vec<Coordinate> {
    vec![
        Coordinate::new(0.0, 0.0),
        Coordinate::new(3.0, 0.0),
        Coordinate::new(3.0, 4.0),
    ]
}

#[test]
fn test_known_distances() {
    let matrix = DistanceMatrix::new(triangle_coordinates()).unwrap();

    assert_eq!(matrix.get(0, 1), 3.0);
    assert_eq!(matrix.get(1, 2), 4.0);
    assert_eq!(matrix.get(0, 2), 5.0);
}

#[test]
fn test_symmetry_and_zero_diagonal() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let matrix = DistanceMatrix::random(20, &mut rng).unwrap();

    assert_eq!(matrix.nodes(), 20);

    for i in 0..matrix.nodes() {
        assert_eq!(matrix.get(i, i), 0.0);

        for j in 0..matrix.nodes() {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
            assert!(matrix.get(i, j) >= 0.0);
        }
    }
}

#[test]
fn test_empty_input_rejected() {
    let result = DistanceMatrix::new(Vec::new());
    assert!(matches!(result, Err(Error::InvalidInput(_))));
}

#[test]
fn test_random_space_bounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let matrix = DistanceMatrix::random(50, &mut rng).unwrap();

    assert_eq!(matrix.coordinates().len(), 50);

    for coordinate in matrix.coordinates() {
        assert!((0.0..100.0).contains(&coordinate.x));
        assert!((0.0..100.0).contains(&coordinate.y));
    }
}

#[test]
fn test_csv_round_trip() {
    let path = std::env::temp_dir().join(format!("tsp_meta_cities_{}.csv", std::process::id()));

    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "0.0, 0.0").unwrap();
    writeln!(file, "3.0, 0.0").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "3.0, 4.0").unwrap();
    drop(file);

    let loaded = DistanceMatrix::from_csv(&path).unwrap();
    let built = DistanceMatrix::new(triangle_coordinates()).unwrap();

    assert_eq!(loaded.nodes(), built.nodes());
    for i in 0..built.nodes() {
        for j in 0..built.nodes() {
            assert_eq!(loaded.get(i, j), built.get(i, j));
        }
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_csv_malformed_row_rejected() {
    let path = std::env::temp_dir().join(format!("tsp_meta_bad_{}.csv", std::process::id()));

    let mut file = fs::File::create(&path).unwrap();
    writeln!(file, "1.0, 2.0").unwrap();
    writeln!(file, "not-a-number, 3.0").unwrap();
    drop(file);

    let result = DistanceMatrix::from_csv(&path);
    assert!(matches!(result, Err(Error::InvalidInput(_))));

    fs::remove_file(&path).unwrap();
}
