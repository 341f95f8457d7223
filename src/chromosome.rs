//! Chromosome representation for the genetic algorithm.
//!
//! A chromosome carries a tour and its ordinal encoding side by side. The
//! ordinal form records, for each city in tour order, its index within a
//! shrinking canonical list `[0..n-1]`. One-point crossover is performed
//! on this form: concatenated ordinal prefixes always decode back to a
//! valid permutation, which concatenated raw tours do not.

use crate::problem::DistanceMatrix;
use crate::search::tour_cost;

/// A candidate solution holding both tour representations and its cost.
#[derive(Debug, Clone)]
pub struct Chromosome {
    /// The decoded city sequence.
    pub tour: Vec<usize>,
    /// The ordinal encoding of `tour`.
    pub ordinal: Vec<usize>,
    /// Tour cost, derived once at construction.
    pub cost: f64,
    /// Assigned during population-wide fitness scaling; 0 otherwise.
    pub fitness: f64,
    /// Offspring of at least one elite parent are exempt from mutation.
    pub elite_parents: bool,
}

impl Chromosome {
    /// Build a chromosome from a tour.
    pub fn from_tour(matrix: &DistanceMatrix, tour: Vec<usize>) -> Self {
        let ordinal = encode(&tour);
        let cost = tour_cost(matrix, &tour);

        Chromosome {
            tour,
            ordinal,
            cost,
            fitness: 0.0,
            elite_parents: false,
        }
    }

    /// Build a chromosome from an ordinal sequence.
    pub fn from_ordinal(matrix: &DistanceMatrix, ordinal: Vec<usize>) -> Self {
        let tour = decode(&ordinal);
        let cost = tour_cost(matrix, &tour);

        Chromosome {
            tour,
            ordinal,
            cost,
            fitness: 0.0,
            elite_parents: false,
        }
    }
}

/// Encode a tour as ordinal indices into a shrinking canonical list.
pub fn encode(tour: &[usize]) -> Vec<usize> {
    let mut canonical: Vec<usize> = (0..tour.len()).collect();
    let mut ordinal = Vec::with_capacity(tour.len());

    for &city in tour {
        let idx = canonical.iter().position(|&v| v == city).unwrap();
        ordinal.push(idx);
        canonical.remove(idx);
    }

    ordinal
}

/// Decode an ordinal sequence back into the tour it encodes.
pub fn decode(ordinal: &[usize]) -> Vec<usize> {
    let mut canonical: Vec<usize> = (0..ordinal.len()).collect();
    let mut tour = Vec::with_capacity(ordinal.len());

    for &idx in ordinal {
        tour.push(canonical.remove(idx));
    }

    tour
}
