//! Neighbourhood perturbation operators.
//!
//! Every operator maps a tour to a syntactically valid neighbour tour:
//! the result is always a permutation of the same node indices.

use crate::error::{Error, Result};
use log::warn;
use rand::Rng;

/// The closed set of perturbation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Exchange two random, not necessarily adjacent, positions.
    RandomSwap,
    /// Exchange two random adjacent positions.
    RandomSwapAdjacent,
    /// Reverse the segment between two random positions.
    Inversion,
    /// Exchange one element of a random adjacent pair with a third
    /// position, a single representative of the 2-opt neighbourhood.
    TwoOpt,
    /// Declared but not implemented.
    ThreeOpt,
}

impl Operator {
    /// Resolve an operator from its configuration name.
    ///
    /// Unknown names fall back to `rand_swap`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "rand_swap" => Operator::RandomSwap,
            "rand_swap_adj" => Operator::RandomSwapAdjacent,
            "inversion" => Operator::Inversion,
            "two_opt" => Operator::TwoOpt,
            "three_opt" => Operator::ThreeOpt,
            other => {
                warn!("unknown operator name `{}`, falling back to rand_swap", other);
                Operator::RandomSwap
            }
        }
    }

    /// The configuration name of this operator.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::RandomSwap => "rand_swap",
            Operator::RandomSwapAdjacent => "rand_swap_adj",
            Operator::Inversion => "inversion",
            Operator::TwoOpt => "two_opt",
            Operator::ThreeOpt => "three_opt",
        }
    }

    /// Produce a neighbour of `tour`.
    ///
    /// Takes ownership of the buffer and returns it perturbed.
    pub fn generate<R: Rng>(&self, mut tour: Vec<usize>, rng: &mut R) -> Result<Vec<usize>> {
        match self {
            Operator::RandomSwap => {
                let picks = random_indices(rng, tour.len(), 2)?;
                tour.swap(picks[0], picks[1]);
            }
            Operator::RandomSwapAdjacent => {
                let a = random_index(rng, tour.len().saturating_sub(1))?;
                tour.swap(a, a + 1);
            }
            Operator::Inversion => {
                let picks = random_indices(rng, tour.len(), 2)?;
                let a = picks[0].min(picks[1]);
                let b = picks[0].max(picks[1]);
                reverse_segment(&mut tour, a, b);
            }
            Operator::TwoOpt => {
                let picks = random_indices(rng, tour.len().saturating_sub(1), 2)?;
                let a = picks[0];
                let b = a + 1;
                let c = picks[1];

                tour.swap(b, c);
            }
            Operator::ThreeOpt => return Err(Error::Unimplemented("three_opt")),
        }

        Ok(tour)
    }
}

/// Reverse `tour[a..=b]` in place.
pub fn reverse_segment(tour: &mut [usize], a: usize, b: usize) {
    let span = b - a + 1;
    for i in 0..span / 2 {
        tour.swap(a + i, b - i);
    }
}

/// Draw `count` pairwise-distinct indices from `0..len` by rejection
/// sampling.
pub fn random_indices<R: Rng>(rng: &mut R, len: usize, count: usize) -> Result<Vec<usize>> {
    if count == 0 {
        return Err(Error::InvalidRequest(
            "the number of indices must be 1 or greater".into(),
        ));
    }
    if count > len {
        return Err(Error::InvalidRequest(format!(
            "cannot draw {} distinct indices from a range of {}",
            count, len
        )));
    }

    let mut picked = Vec::with_capacity(count);
    picked.push(rng.gen_range(0..len));

    while picked.len() < count {
        let next = rng.gen_range(0..len);
        if !picked.contains(&next) {
            picked.push(next);
        }
    }

    Ok(picked)
}

/// Draw a single index uniformly from `0..len`.
fn random_index<R: Rng>(rng: &mut R, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(Error::InvalidRequest(
            "cannot sample an index from an empty range".into(),
        ));
    }

    Ok(rng.gen_range(0..len))
}
