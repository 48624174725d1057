use std::{fs::File, ops::Index, path::Path};

use located_error::prelude::*;
use serde::{Deserialize, Serialize};

mod gene_count;
pub use gene_count::GeneCount;

mod error;
pub use error::ProbsError;

/// Tolerance used when checking that a distribution sums to one.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// A value for each possible `GeneCount`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneTable<T> {
    pub zero: T,
    pub one : T,
    pub two : T,
}

impl<T> GeneTable<T> {
    pub fn iter(&self) -> impl Iterator<Item = (GeneCount, &T)> {
        GeneCount::ALL.into_iter().map(move |genes| (genes, &self[genes]))
    }
}

impl<T> Index<GeneCount> for GeneTable<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, genes: GeneCount) -> &Self::Output {
        match genes {
            GeneCount::Zero => &self.zero,
            GeneCount::One  => &self.one,
            GeneCount::Two  => &self.two,
        }
    }
}

/// Probability of exhibiting (`present`) or not exhibiting (`absent`) the trait.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitProbs {
    pub present: f64,
    pub absent : f64,
}

impl TraitProbs {
    #[inline(always)]
    pub fn get(&self, has_trait: bool) -> f64 {
        match has_trait {
            true  => self.present,
            false => self.absent,
        }
    }
}

/// Conditional probability tables of the inheritance network.
/// # Fields:
/// - `gene_prior`       : unconditional gene count distribution. Only applies to founders.
/// - `trait_given_genes`: probability of exhibiting the trait, given the individual's gene count.
/// - `mutation_rate`    : probability that an allele flips during its transmission from parent to offspring.
///
/// Tables are read-only during inference, and injected into the `Evaluator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTables {
    pub gene_prior       : GeneTable<f64>,
    pub trait_given_genes: GeneTable<TraitProbs>,
    pub mutation_rate    : f64,
}

impl Default for ProbabilityTables {
    fn default() -> Self {
        Self {
            gene_prior: GeneTable { zero: 0.96, one: 0.03, two: 0.01 },
            trait_given_genes: GeneTable {
                zero: TraitProbs { present: 0.01, absent: 0.99 },
                one : TraitProbs { present: 0.56, absent: 0.44 },
                two : TraitProbs { present: 0.65, absent: 0.35 },
            },
            mutation_rate: 0.01,
        }
    }
}

impl ProbabilityTables {
    /// Replace the mutation rate of these tables.
    #[must_use]
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Probability that a parent carrying `genes` copies of the variant transmits it to its offspring.
    /// - 2 copies: the variant is passed on, unless it mutates away.
    /// - 1 copy  : a fair coin toss. Mutations in both directions cancel out, hence no mutation term.
    /// - 0 copies: the variant may only be passed on through a mutation.
    #[inline(always)]
    pub fn transmission_prob(&self, genes: GeneCount) -> f64 {
        match genes {
            GeneCount::Two  => 1.0 - self.mutation_rate,
            GeneCount::One  => 0.5,
            GeneCount::Zero => self.mutation_rate,
        }
    }

    /// Check that every value is a probability, and that every distribution sums to one.
    ///
    /// # Errors
    /// - `OutOfRange` if any value lies outside of `[0, 1]`
    /// - `Unnormalized` if the gene prior, or any row of the trait table does not sum to 1.
    pub fn validate(&self) -> Result<(), ProbsError> {
        fn check_range(field: String, value: f64) -> Result<(), ProbsError> {
            match (0.0..=1.0).contains(&value) {
                true  => Ok(()),
                false => Err(ProbsError::OutOfRange{field, value}),
            }
        }

        fn check_sum(field: String, values: &[f64]) -> Result<(), ProbsError> {
            let sum: f64 = values.iter().sum();
            match (sum - 1.0).abs() <= NORMALIZATION_TOLERANCE {
                true  => Ok(()),
                false => Err(ProbsError::Unnormalized{field, sum}),
            }
        }

        check_range("mutation_rate".to_string(), self.mutation_rate)?;

        for (genes, prob) in self.gene_prior.iter() {
            check_range(format!("gene_prior[{genes}]"), *prob)?;
        }
        check_sum("gene_prior".to_string(), &[self.gene_prior.zero, self.gene_prior.one, self.gene_prior.two])?;

        for (genes, probs) in self.trait_given_genes.iter() {
            check_range(format!("trait_given_genes[{genes}].present"), probs.present)?;
            check_range(format!("trait_given_genes[{genes}].absent"), probs.absent)?;
            check_sum(format!("trait_given_genes[{genes}]"), &[probs.present, probs.absent])?;
        }
        Ok(())
    }

    /// Load and validate probability tables from a `.yaml` file.
    ///
    /// # Errors
    /// - if `path` cannot be opened, or does not deserialize into `ProbabilityTables`
    /// - if the tables are invalid (see `validate()`)
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let loc_msg = || format!("While loading probability tables from {}", path.display());
        let file = File::open(path).map_err(ProbsError::OpenFile).with_loc(loc_msg)?;
        let tables: Self = serde_yaml::from_reader(file).map_err(ProbsError::Yaml).with_loc(loc_msg)?;
        tables.validate().with_loc(loc_msg)?;
        Ok(tables)
    }

    /// Serialize these tables into a `.yaml` string.
    ///
    /// # Errors
    /// - if `serde_yaml` fails to serialize `self`
    pub fn to_yaml(&self) -> Result<String, ProbsError> {
        serde_yaml::to_string(self).map_err(ProbsError::Yaml)
    }
}
