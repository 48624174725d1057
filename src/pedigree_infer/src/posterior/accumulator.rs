use crate::{
    hypothesis::Hypothesis,
    pedigree::Network,
    InferenceError,
};

use super::{Posterior, PersonPosterior, Posteriors};

/// Running, unnormalized marginal distributions of every individual of a network.
/// # Fields:
/// - `posteriors` : one unnormalized `Posterior` per network node (same indexing).
/// - `hypotheses` : number of hypotheses folded in so far.
/// - `total_mass` : sum of the joint probabilities folded in so far.
///
/// Accumulation is a commutative and associative reduction: accumulators filled over disjoint sets of
/// hypotheses can be merged in any order.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    posteriors: Vec<Posterior>,
    hypotheses: u64,
    total_mass: f64,
}

impl Accumulator {
    pub fn new(n_individuals: usize) -> Self {
        Self { posteriors: vec![Posterior::default(); n_individuals], hypotheses: 0, total_mass: 0.0 }
    }

    /// Add the joint probability `p` of `hypothesis` to the gene count bucket and the trait bucket each individual is
    /// assigned to within `hypothesis`.
    #[inline]
    pub fn update(&mut self, hypothesis: &Hypothesis, p: f64) {
        for (i, posterior) in self.posteriors.iter_mut().enumerate() {
            posterior.add(hypothesis.genes(i), hypothesis.has_trait(i), p);
        }
        self.hypotheses += 1;
        self.total_mass += p;
    }

    /// Merge two accumulators filled over disjoint sets of hypotheses.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.posteriors.len(), other.posteriors.len());
        for (posterior, other) in self.posteriors.iter_mut().zip(other.posteriors.iter()) {
            posterior.merge(other);
        }
        self.hypotheses += other.hypotheses;
        self.total_mass += other.total_mass;
        self
    }

    pub fn hypotheses(&self) -> u64 {
        self.hypotheses
    }

    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    /// Rescale every distribution so that it sums to one, and label each of them with the name of its individual.
    ///
    /// # Errors
    /// - `NoConsistentHypothesis` if the accumulated probability mass is zero (i.e. the evidence is unsatisfiable
    ///   under the current probability tables)
    pub fn normalize(self, network: &Network) -> Result<Posteriors, InferenceError> {
        if self.total_mass <= 0.0 {
            return Err(InferenceError::NoConsistentHypothesis)
        }

        let persons = network.nodes().iter()
            .zip(self.posteriors)
            .map(|(node, posterior)| {
                posterior.normalized()
                    .map(|posterior| PersonPosterior::new(&node.label, posterior))
                    .ok_or(InferenceError::NoConsistentHypothesis)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Posteriors::new(persons))
    }
}
