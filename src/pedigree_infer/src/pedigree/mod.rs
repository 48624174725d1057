use std::collections::BTreeMap;

use log::trace;

mod individual;
pub use individual::{Individual, Parents};

mod network;
pub use network::{Network, Node};

mod error;
pub use error::PedigreeError;

/// Maximum number of individuals an exact inference run can handle. Hypotheses are encoded as `u64` bitmasks,
/// one bit per individual. (the search space grows as 2^n * 3^n long before this limit is reached anyway.)
pub const MAX_INDIVIDUALS: usize = 63;

/// A family tree, along with the observed trait evidence of its members.
///
/// Individuals are kept sorted by label. This order is the one used to index individuals within a
/// validated `Network`, and the order in which results are reported.
///
/// Individuals may reference parents that are not yet defined: parent existence, along with the absence of
/// cycles, is only checked when the pedigree is turned into a `Network` (see `Pedigree::network()`)
#[derive(Debug, Clone, Default)]
pub struct Pedigree {
    individuals: BTreeMap<String, Individual>,
}

impl Pedigree {
    /// Instantiate a blank pedigree.
    pub fn new() -> Pedigree {
        Pedigree { individuals: BTreeMap::new() }
    }

    /// Instantiate and include a new individual within this pedigree.
    /// # Arguments:
    /// - `label`         : unique name of the individual (e.g. "Harry")
    /// - `mother`        : Optional label of the mother.
    /// - `father`        : Optional label of the father.
    /// - `trait_evidence`: Observed trait status, `None` if unknown.
    ///
    /// # Errors:
    /// - `DuplicateIndividual` if `label` is already defined.
    /// - `MissingParent` if only one of `mother` and `father` is provided.
    /// - `SelfParent` if the individual is listed as its own parent.
    /// - `SameParents` if `mother` and `father` are the same individual.
    pub fn add_individual(
        &mut self,
        label         : &str,
        mother        : Option<&str>,
        father        : Option<&str>,
        trait_evidence: Option<bool>
    ) -> Result<(), PedigreeError> {
        use PedigreeError::{DuplicateIndividual, MissingParent, SelfParent, SameParents};
        if self.individuals.contains_key(label) {
            return Err(DuplicateIndividual(label.to_string()))
        }

        let parents = match (mother, father) {
            (None, None)                 => None,
            (Some(mother), Some(father)) => {
                if mother == label || father == label {
                    return Err(SelfParent(label.to_string()))
                }
                if mother == father {
                    return Err(SameParents(label.to_string()))
                }
                Some(Parents::new(mother, father))
            },
            _ => return Err(MissingParent(label.to_string()))
        };

        let individual = Individual::new(label, parents, trait_evidence);
        trace!("Adding {individual}");
        self.individuals.insert(label.to_string(), individual);
        Ok(())
    }

    pub fn get(&self, label: &str) -> Option<&Individual> {
        self.individuals.get(label)
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Iterate over all individuals, sorted by label.
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    pub fn founders(&self) -> impl Iterator<Item = &Individual> {
        self.iter().filter(|ind| ind.is_founder())
    }

    /// Validate this pedigree and convert it into an indexed Bayesian `Network`.
    ///
    /// # Errors
    /// - `TooManyIndividuals` if the pedigree holds more than `MAX_INDIVIDUALS` members.
    /// - `UnknownParent` if a parent label cannot be found within the pedigree.
    /// - `CyclicPedigree` if an individual is one of its own ancestors.
    pub fn network(&self) -> Result<Network, PedigreeError> {
        Network::try_from(self)
    }
}
