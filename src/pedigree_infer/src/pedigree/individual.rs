use std::fmt::{self, Display, Formatter};

/// Space padding lengths used for `std::fmt::Display` of Individual
const LABEL_DISPLAY_LEN  : usize = 10; // Space padding of `self.label`
const PARENTS_DISPLAY_LEN: usize = 25; // Space padding of `self.parents`

/// Labels of the two parents of a non-founder individual.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parents {
    mother: String,
    father: String,
}

impl Parents {
    pub fn new(mother: &str, father: &str) -> Parents {
        Parents { mother: mother.to_string(), father: father.to_string() }
    }

    pub fn mother(&self) -> &str {
        &self.mother
    }

    pub fn father(&self) -> &str {
        &self.father
    }
}

impl Display for Parents {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} <-> {}", self.mother, self.father)
    }
}

/// Pedigree Individual.
/// # Fields:
/// - `label`         : User-defined, unique name of the individual (e.g. 'Harry', 'Lily')
/// - `parents`       : Optional labels of the individual's parents.
///                       - `None`          if the individual is a founder.
///                       - `Some(parents)` otherwise. Both parents are always known.
/// - `trait_evidence`: Observed trait status. `None` when the individual was not tested.
#[derive(Debug, Clone)]
pub struct Individual {
    pub label         : String,
    parents           : Option<Parents>,
    pub trait_evidence: Option<bool>,
}

impl Individual {
    pub(super) fn new(label: &str, parents: Option<Parents>, trait_evidence: Option<bool>) -> Individual {
        Individual { label: label.to_string(), parents, trait_evidence }
    }

    /// Check whether or not this individual is a founder individual. Returns `true` if `self.parents == None`
    #[inline(always)]
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }

    pub fn parents(&self) -> Option<&Parents> {
        self.parents.as_ref()
    }
}

impl Display for Individual {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let parents = match &self.parents {
            None => "None".to_string(),
            Some(parents) => format!("{parents}")
        };
        let evidence = match self.trait_evidence {
            Some(true)  => "present",
            Some(false) => "absent",
            None        => "unknown",
        };
        write!(f, "label: {: <LABEL_DISPLAY_LEN$} - parents: {: <PARENTS_DISPLAY_LEN$} - trait: {evidence}", self.label, parents)
    }
}
