use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PedigreeError {
    #[error("Individual '{0}' is defined more than once")]
    DuplicateIndividual(String),

    #[error("Individual '{0}' has a single parent. Individuals must either have both a mother and a father, or none")]
    MissingParent(String),

    #[error("Parent '{parent}' of individual '{label}' is not defined within the pedigree")]
    UnknownParent{label: String, parent: String},

    #[error("Individual '{0}' is listed as one of its own parents")]
    SelfParent(String),

    #[error("Individual '{0}' has the same individual listed as both mother and father")]
    SameParents(String),

    #[error("Pedigree contains a cycle: '{0}' is one of its own ancestors")]
    CyclicPedigree(String),

    #[error("Pedigree contains {found} individuals. Exact inference is limited to {max} individuals")]
    TooManyIndividuals{found: usize, max: usize},
}
