use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbsError {
    #[error("{field} must lie between 0 and 1. Got {value}")]
    OutOfRange{field: String, value: f64},

    #[error("Probabilities of {field} must sum to 1. Got {sum}")]
    Unnormalized{field: String, sum: f64},

    #[error("Failed to open probability tables file")]
    OpenFile(#[source] std::io::Error),

    #[error("Failed to (de)serialize probability tables")]
    Yaml(#[source] serde_yaml::Error),
}
