//! Exact inference of gene count and trait posteriors over a small family pedigree.
//!
//! Every individual carries 0, 1 or 2 copies of a gene variant, and may exhibit a trait. Given partial trait
//! observations, every joint assignment (`Hypothesis`) consistent with the evidence is enumerated, weighted by its
//! joint probability under the inheritance network, and folded into per-individual marginals.

use located_error::prelude::*;
use log::info;

pub mod pedigree;
pub mod probs;
pub mod hypothesis;
pub mod evaluator;
pub mod posterior;
pub mod engine;

mod error;
pub use error::InferenceError;

pub use engine::Inference;
pub use pedigree::{Pedigree, PedigreeError, Network};
pub use posterior::{PersonPosterior, Posteriors};
pub use probs::{GeneCount, ProbabilityTables, ProbsError};

/// Validate `tables` and `pedigree`, then compute the posterior distributions of every individual.
///
/// # Errors
/// - `ProbsError` if the tables are invalid.
/// - `PedigreeError` if the pedigree is malformed.
/// - `InferenceError` if the inference itself fails (see `Inference::run()`)
pub fn infer(pedigree: &Pedigree, tables: &ProbabilityTables, threads: usize) -> Result<Posteriors> {
    tables.validate().loc("Invalid probability tables")?;
    let network = pedigree.network().loc("Invalid pedigree")?;
    info!("Pedigree contains {} individual(s) ({} founder(s))", network.len(), pedigree.founders().count());
    Inference::new(&network, tables).with_threads(threads).run()
}
