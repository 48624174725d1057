use crate::pedigree::Network;

use super::{Hypothesis, Mask, SubMasks};

/// Observed trait statuses of a network, compiled into bitmasks.
/// # Fields:
/// - `all`    : every individual of the network.
/// - `known`  : individuals with an observed trait status.
/// - `present`: individuals observed with the trait. Always a subset of `known`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evidence {
    all    : Mask,
    known  : Mask,
    present: Mask,
}

impl Evidence {
    pub fn from_network(network: &Network) -> Self {
        let mut evidence = Self { all: 0, known: 0, present: 0 };
        for (i, node) in network.nodes().iter().enumerate() {
            let bit: Mask = 1 << i;
            evidence.all |= bit;
            if let Some(has_trait) = node.evidence {
                evidence.known |= bit;
                if has_trait {
                    evidence.present |= bit;
                }
            }
        }
        evidence
    }

    pub fn all(&self) -> Mask {
        self.all
    }

    /// Individuals whose trait status was not observed.
    pub fn unknown(&self) -> Mask {
        self.all & !self.known
    }

    /// Check whether a candidate set of individuals exhibiting the trait agrees with every observation.
    #[inline]
    pub fn is_consistent(&self, trait_set: Mask) -> bool {
        trait_set & self.known == self.present
    }

    /// Iterate over every trait set consistent with the evidence.
    ///
    /// Consistent sets are exactly `present | s`, for every subset `s` of the unknown individuals. Generating
    /// them directly visits the same sets as filtering the whole power set with `is_consistent()`, each once.
    pub fn trait_sets(&self) -> impl Iterator<Item = Mask> + Send {
        let present = self.present;
        SubMasks::of(self.unknown()).map(move |unknown| present | unknown)
    }

    /// Number of trait sets yielded by `trait_sets()`
    pub fn n_trait_sets(&self) -> u64 {
        SubMasks::count_of(self.unknown())
    }
}

/// Generate every hypothesis consistent with the trait evidence of a network.
///
/// For each consistent trait set, every subset of individuals is taken as the set of one-copy carriers, and every
/// subset of the remaining individuals as the set of two-copy carriers. This yields each of the 3^n gene assignments
/// exactly once. Gene counts are never observed, hence never filtered.
#[derive(Debug, Clone, Copy)]
pub struct HypothesisEnumerator {
    evidence: Evidence,
}

impl HypothesisEnumerator {
    pub fn new(network: &Network) -> Self {
        Self { evidence: Evidence::from_network(network) }
    }

    pub fn evidence(&self) -> &Evidence {
        &self.evidence
    }

    /// Iterate over every `(one_copy, two_copies)` gene assignment of the network.
    pub fn gene_assignments(&self) -> impl Iterator<Item = (Mask, Mask)> {
        let all = self.evidence.all;
        SubMasks::of(all).flat_map(move |one_copy| {
            SubMasks::of(all & !one_copy).map(move |two_copies| (one_copy, two_copies))
        })
    }

    /// Iterate over every hypothesis sharing a given trait set.
    pub fn hypotheses_for(&self, trait_set: Mask) -> impl Iterator<Item = Hypothesis> {
        self.gene_assignments()
            .map(move |(one_copy, two_copies)| Hypothesis::new(one_copy, two_copies, trait_set))
    }

    /// Iterate over every hypothesis consistent with the evidence.
    pub fn hypotheses(&self) -> impl Iterator<Item = Hypothesis> + '_ {
        self.evidence.trait_sets().flat_map(move |trait_set| self.hypotheses_for(trait_set))
    }

    /// Total number of hypotheses yielded by `hypotheses()`: 2^unknown * 3^n (saturates at `u128::MAX`)
    pub fn n_hypotheses(&self) -> u128 {
        u128::from(self.evidence.n_trait_sets()).saturating_mul(3u128.pow(self.evidence.all.count_ones()))
    }
}
