use thiserror::Error;

const COMMON_MSG: &str = "Pedigree definition files are comma-separated, with the header 'name,mother,father,trait'";

#[derive(Error, Debug)]
pub enum PedigreeReaderError {
    #[error("Failed to open pedigree definition file")]
    OpenFile(#[source] std::io::Error),

    #[error("Failed to parse pedigree definition file")]
    ParseCsv(#[source] csv::Error),

    #[error("Missing '{0}' column. {}", COMMON_MSG)]
    MissingColumn(&'static str),

    #[error("Line {0}: individuals must carry a non-empty name")]
    EmptyLabel(u64),

    #[error("Line {line}: invalid name '{label}'. Names may not contain tabs, line breaks or ' - ' separators")]
    InvalidLabel{line: u64, label: String},

    #[error("Line {line}: invalid trait value '{value}' for individual '{label}'. Expected either '1', '0' or an empty field")]
    InvalidTrait{line: u64, label: String, value: String},
}
