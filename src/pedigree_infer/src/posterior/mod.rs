use std::fmt::{self, Display, Formatter};

use crate::probs::GeneCount;

mod accumulator;
pub use accumulator::Accumulator;

/// Space padding of individual labels, when displayed.
const LABEL_DISPLAY_LEN: usize = 10;

/// Marginal distributions of a single individual.
/// # Fields:
/// - `gene`  : weight of each gene count, indexed by `GeneCount::index()`: `[p0, p1, p2]`
/// - `traits`: weight of each trait status: `[p_absent, p_present]`
///
/// Weights are left unnormalized while accumulating, and sum to one once `normalized()`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Posterior {
    pub gene  : [f64; 3],
    pub traits: [f64; 2],
}

impl Posterior {
    #[inline(always)]
    fn add(&mut self, genes: GeneCount, has_trait: bool, p: f64) {
        self.gene[genes.index()]        += p;
        self.traits[usize::from(has_trait)] += p;
    }

    fn merge(&mut self, other: &Self) {
        self.gene.iter_mut().zip(other.gene).for_each(|(w, o)| *w += o);
        self.traits.iter_mut().zip(other.traits).for_each(|(w, o)| *w += o);
    }

    /// Return a copy of this posterior, where each distribution is rescaled to sum to one.
    /// Returns `None` if either of the distributions carries no weight at all.
    pub fn normalized(&self) -> Option<Self> {
        let gene_total: f64  = self.gene.iter().sum();
        let trait_total: f64 = self.traits.iter().sum();
        if gene_total <= 0.0 || trait_total <= 0.0 {
            return None
        }
        Some(Self {
            gene  : self.gene.map(|w| w / gene_total),
            traits: self.traits.map(|w| w / trait_total),
        })
    }

    #[inline]
    pub fn gene(&self, genes: GeneCount) -> f64 {
        self.gene[genes.index()]
    }

    #[inline]
    pub fn trait_prob(&self, has_trait: bool) -> f64 {
        self.traits[usize::from(has_trait)]
    }
}

/// Normalized posterior distributions of a named individual.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonPosterior {
    pub label: String,
    posterior: Posterior,
}

impl PersonPosterior {
    pub fn new(label: &str, posterior: Posterior) -> Self {
        Self { label: label.to_string(), posterior }
    }

    /// P(genes | evidence)
    pub fn gene(&self, genes: GeneCount) -> f64 {
        self.posterior.gene(genes)
    }

    /// P(trait == has_trait | evidence)
    pub fn trait_prob(&self, has_trait: bool) -> f64 {
        self.posterior.trait_prob(has_trait)
    }
}

/// Pretty print: `label - p0 - p1 - p2 - p_absent - p_present`. Precision defaults to 4 decimals and can be
/// overridden with the formatter (e.g. `format!("{person:.6}")`)
impl Display for PersonPosterior {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        write!(f, "{: <LABEL_DISPLAY_LEN$}", self.label)?;
        for p in self.posterior.gene.iter().chain(self.posterior.traits.iter()) {
            write!(f, " - {p:.precision$}")?;
        }
        Ok(())
    }
}

/// Normalized posterior distributions of every individual of a pedigree, sorted by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Posteriors {
    persons: Vec<PersonPosterior>,
}

impl Posteriors {
    pub fn new(persons: Vec<PersonPosterior>) -> Self {
        Self { persons }
    }

    pub fn get(&self, label: &str) -> Option<&PersonPosterior> {
        self.persons.iter().find(|person| person.label == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonPosterior> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}

impl<'a> IntoIterator for &'a Posteriors {
    type Item = &'a PersonPosterior;
    type IntoIter = std::slice::Iter<'a, PersonPosterior>;

    fn into_iter(self) -> Self::IntoIter {
        self.persons.iter()
    }
}
