//! Search-space definition: city coordinates and the pairwise-distance matrix.

use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }

    /// Calculate the Euclidean distance to another coordinate.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Precomputed pairwise distances over a list of city coordinates.
///
/// The matrix is symmetric with a zero diagonal. It is built once per run
/// and never mutated afterward, so it can be shared read-only by every
/// algorithm and chromosome that evaluates tours against it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceMatrix {
    coordinates: Vec<Coordinate>,
    matrix: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    /// Build the matrix from a list of coordinates.
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(Error::InvalidInput("coordinate list is empty".into()));
        }

        let matrix = Self::compute_matrix(&coordinates);

        Ok(DistanceMatrix {
            coordinates,
            matrix,
        })
    }

    /// Load coordinates from a headerless CSV file of `x,y` rows.
    ///
    /// Blank lines are skipped; anything else that does not parse as two
    /// floats is rejected.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut coordinates = Vec::new();

        for (line_idx, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                continue;
            }

            let mut fields = trimmed.split(',');
            let (x_field, y_field) = match (fields.next(), fields.next()) {
                (Some(x), Some(y)) => (x, y),
                _ => {
                    return Err(Error::InvalidInput(format!(
                        "line {}: expected `x,y`",
                        line_idx + 1
                    )))
                }
            };

            let x = x_field
                .trim()
                .parse::<f64>()
                .map_err(|e| Error::InvalidInput(format!("line {}: {}", line_idx + 1, e)))?;
            let y = y_field
                .trim()
                .parse::<f64>()
                .map_err(|e| Error::InvalidInput(format!("line {}: {}", line_idx + 1, e)))?;

            coordinates.push(Coordinate::new(x, y));
        }

        Self::new(coordinates)
    }

    /// Generate a random search space of `nodes` cities in `[0, 100)`.
    pub fn random<R: Rng>(nodes: usize, rng: &mut R) -> Result<Self> {
        let coordinates = (0..nodes)
            .map(|_| Coordinate::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
            .collect();

        Self::new(coordinates)
    }

    /// Distance between two node indices.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.matrix[from][to]
    }

    /// Number of nodes in the search space.
    pub fn nodes(&self) -> usize {
        self.coordinates.len()
    }

    /// The coordinate list backing the matrix.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Generate the full distance matrix for all coordinates.
    fn compute_matrix(coordinates: &[Coordinate]) -> Vec<Vec<f64>> {
        let n = coordinates.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = coordinates[i].distance(&coordinates[j]);
                }
            }
        }

        matrix
    }
}
