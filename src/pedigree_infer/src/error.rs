use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("No hypothesis is consistent with the observed evidence: the total probability mass is zero")]
    NoConsistentHypothesis,

    #[error("Invalid number of threads: {0}. At least one thread is required")]
    InvalidThreads(usize),

    #[error("Failed to instantiate threadpool")]
    BuildThreadPool(#[source] rayon::ThreadPoolBuildError),
}
