use indicatif::{ProgressBar, ProgressStyle};
use located_error::prelude::*;
use log::{debug, info};
use rayon::prelude::*;

use crate::{
    evaluator::Evaluator,
    hypothesis::HypothesisEnumerator,
    pedigree::Network,
    posterior::{Accumulator, Posteriors},
    probs::ProbabilityTables,
    InferenceError,
};

const PROGRESS_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} trait sets ({eta})";

/// Exact inference over every hypothesis consistent with the evidence of a `Network`.
/// # Fields:
/// - `network`: validated inheritance network.
/// - `tables` : probability tables, injected into each `Evaluator`.
/// - `threads`: number of worker threads. `1` runs on the calling thread; anything above builds a dedicated
///   `rayon` threadpool.
#[derive(Debug, Clone, Copy)]
pub struct Inference<'a> {
    network: &'a Network,
    tables : &'a ProbabilityTables,
    threads: usize,
}

impl<'a> Inference<'a> {
    pub fn new(network: &'a Network, tables: &'a ProbabilityTables) -> Self {
        Self { network, tables, threads: 1 }
    }

    #[must_use]
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Enumerate, evaluate and accumulate every consistent hypothesis, then normalize the marginals of each
    /// individual.
    ///
    /// # Errors
    /// - `InvalidThreads` if `threads` is zero.
    /// - `BuildThreadPool` if the `rayon` threadpool cannot be built.
    /// - `NoConsistentHypothesis` if every consistent hypothesis has a joint probability of zero.
    pub fn run(&self) -> Result<Posteriors> {
        let loc_msg = "While running exact inference";
        if self.threads == 0 {
            return Err(InferenceError::InvalidThreads(self.threads)).loc(loc_msg)
        }

        let enumerator = HypothesisEnumerator::new(self.network);
        let n_sets     = enumerator.evidence().n_trait_sets();
        info!("Running exact inference on {} individuals: {} consistent trait sets, {} hypotheses ({} thread(s))",
            self.network.len(), n_sets, enumerator.n_hypotheses(), self.threads
        );

        let progress = Self::progress_bar(n_sets);
        let accumulator = match self.threads {
            1 => self.accumulate(&enumerator, &progress),
            _ => self.par_accumulate(&enumerator, &progress).loc(loc_msg)?,
        };
        progress.finish_and_clear();

        debug!("Evaluated {} hypotheses. Total probability mass: {:e}", accumulator.hypotheses(), accumulator.total_mass());
        accumulator.normalize(self.network).loc(loc_msg)
    }

    fn accumulate(&self, enumerator: &HypothesisEnumerator, progress: &ProgressBar) -> Accumulator {
        let evaluator = Evaluator::new(self.network, self.tables);
        let mut accumulator = Accumulator::new(self.network.len());
        for trait_set in enumerator.evidence().trait_sets() {
            for hypothesis in enumerator.hypotheses_for(trait_set) {
                accumulator.update(&hypothesis, evaluator.joint_probability(&hypothesis));
            }
            progress.inc(1);
        }
        accumulator
    }

    /// Distribute trait sets across a dedicated threadpool. Each worker folds into its own `Accumulator`, and
    /// partial accumulators are then merged.
    fn par_accumulate(&self, enumerator: &HypothesisEnumerator, progress: &ProgressBar) -> Result<Accumulator, InferenceError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(InferenceError::BuildThreadPool)?;

        let evaluator = Evaluator::new(self.network, self.tables);
        let n = self.network.len();
        let accumulator = pool.install(|| {
            enumerator.evidence().trait_sets()
                .par_bridge()
                .fold(|| Accumulator::new(n), |mut accumulator, trait_set| {
                    for hypothesis in enumerator.hypotheses_for(trait_set) {
                        accumulator.update(&hypothesis, evaluator.joint_probability(&hypothesis));
                    }
                    progress.inc(1);
                    accumulator
                })
                .reduce(|| Accumulator::new(n), Accumulator::merge)
        });
        Ok(accumulator)
    }

    /// Progress bar over trait sets, attached to the logger's `MultiProgress`. Hidden if no logger was initialized.
    fn progress_bar(len: u64) -> ProgressBar {
        match logger::Logger::multi() {
            Some(multi) => {
                let style = ProgressStyle::with_template(PROGRESS_TEMPLATE)
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-");
                multi.add(ProgressBar::new(len).with_style(style))
            },
            None => ProgressBar::hidden(),
        }
    }
}
