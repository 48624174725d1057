use thiserror::Error;
use crate::FileEntity;

#[derive(Error, Debug)]
pub enum ParserError{
    #[error("{0} {1} does not exist")]
    MissingFileEntity(FileEntity, String),

    #[error("{1} is not a {0}")]
    InvalidFileEntity(FileEntity, String),

    #[error("Failed to create output directory")]
    CreateDir(#[source] std::io::Error),

    #[error("The provided probability must lie between 0 and 1. Got {0}")]
    ParseProbability(f64),

    #[error("At least one thread is required")]
    InvalidThreads,

    #[error("Failed to generate an output file name. Note that output files are named after the input pedigree filestem")]
    ParseOutputPrefix,

    #[error("{0} already exists. Use --overwrite to force.")]
    CannotOverwrite(String),

    #[error("Failed to (de)serialize command line arguments")]
    SerializeCli(#[source] serde_yaml::Error),

    #[error("Failed to open command line arguments file")]
    OpenYaml(#[source] std::io::Error),

    #[error("Failed to write command line arguments file")]
    WriteYaml(#[source] std::io::Error),
}
