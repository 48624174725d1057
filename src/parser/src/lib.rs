use std::{
    fs::File,
    path::{Path, PathBuf},
    fmt::{self, Display, Formatter}, ffi::OsStr
};

use located_error::prelude::*;

use clap::{Parser, Subcommand, ArgEnum};
use serde::{Serialize, Deserialize};
use log::debug;

mod error;
pub use error::ParserError;

/// File extension of inference results.
pub const OUTPUT_EXT: &str = "posteriors";

#[derive(Parser, Debug, Serialize, Deserialize)]
#[clap(name="heredity-rs", author, version, about, long_about = None)]
#[clap(propagate_version = true)]
/// heredity-rs: exact inference of gene and trait probabilities within a family pedigree
pub struct Cli {
    ///Set the verbosity level (-v -vv -vvv)
    ///
    /// Set the verbosity level of this program. Multiple levels allowed {n}
    ///
    /// -v: Info  |  -vv: Debug  | -vvv: Trace {n}
    ///
    /// Note that the program will still output warnings by default, even when this flag is off.
    /// Use The --quiet/-q to disable them
    #[clap(short='v', long, parse(from_occurrences), global=true)]
    pub verbose: u8,

    /// Disable warnings.
    ///
    /// By default, warnings are emmited and redirected to the console, even when verbose mode is off.
    /// Use this argument to disable this. Only errors will be displayed.
    #[clap(short='q', long, global=true)]
    pub quiet: bool,

    #[clap(subcommand)]
    pub commands: Commands,
}

impl Cli {
    /// Serialize command line arguments within a `.yaml` file.
    ///
    /// # Behavior
    /// - File naming follows the convention '{current time}-{module name}.yaml'. current time follows the format
    ///   `YYYY`-`MM`-`DD`T`hhmmss`
    /// - File is written at the root of the user-provided `--output-dir` folder. Nothing is written if results
    ///   are sent to stdout.
    ///
    /// # Errors
    /// - if `serde_yaml` fails to parse `Self` to a string.
    /// - if the `.yaml` file cannot be written.
    pub fn serialize(&self) -> Result<Option<PathBuf>> {
        let output_dir = match &self.commands {
            Commands::Infer{infer} => match &infer.output_dir {
                Some(dir) => dir,
                None      => return Ok(None),
            },
            Commands::FromYaml{..} | Commands::Params{..} => return Ok(None),
        };

        let serialized = serde_yaml::to_string(&self)
            .map_err(ParserError::SerializeCli)
            .loc("While serializing command line arguments")?;
        debug!("\n---- Command line args ----\n{}\n---", serialized);

        let current_time = chrono::offset::Local::now().format("%Y-%m-%dT%H%M%S").to_string();
        let output_file  = output_dir.join(format!("{current_time}-infer.yaml"));

        std::fs::write(&output_file, serialized)
            .map_err(ParserError::WriteYaml)
            .with_loc(|| format!("Unable to serialize arguments into {}", output_file.display()))?;
        Ok(Some(output_file))
    }

    /// Deserialize a `.yaml` file into Command line arguments.
    ///
    /// # Errors
    /// - if the provided `.yaml` does not exist, or does not carry read permissions
    /// - if `serde_yaml` fails to parse the provided file to `Self`.
    pub fn deserialize(yaml: &Path) -> Result<Self> {
        let loc_msg = || format!("Unable to deserialize arguments from {}", yaml.display());
        let file = File::open(yaml).map_err(ParserError::OpenYaml).with_loc(loc_msg)?;
        serde_yaml::from_reader(file).map_err(ParserError::SerializeCli).with_loc(loc_msg)
    }
}

#[derive(Subcommand, Debug, Serialize, Deserialize)]
pub enum Commands {
    /// Compute the gene and trait posterior probabilities of every individual of a pedigree.
    ///
    /// Every combination of gene counts and trait statuses consistent with the observed evidence is enumerated,
    /// weighted by its joint probability, and summed into per-individual distributions.
    Infer {
        #[clap(flatten)]
        infer: Infer,
    },

    /// Run heredity-rs using a previously generated .yaml configuration file.
    ///
    /// This allows users to easily re-apply a heredity-rs command using the exact same parameters
    /// and arguments.
    FromYaml {
        yaml: PathBuf,
    },

    /// Print the default probability tables in .yaml format.
    ///
    /// The output can be edited, and provided back to `infer` through the '--params' argument.
    Params {
        #[clap(flatten)]
        params: Params,
    },
}

#[derive(Parser, Debug, Serialize, Deserialize)]
pub struct Infer {
    /// Input pedigree definition file.
    ///
    /// Comma-separated file, with the header 'name,mother,father,trait'. Leave both parents empty for founders.
    /// The 'trait' column is either '1' (trait present), '0' (absent) or empty (unknown).
    #[clap(short='p', long, parse(try_from_os_str=valid_input_file))]
    pub pedigree: PathBuf,

    /// Probability tables (.yaml)
    ///
    /// Override the default gene prior, trait and mutation probabilities. Use the 'params' subcommand to
    /// generate a template.
    #[clap(short='P', long, required(false), parse(try_from_os_str=valid_input_file))]
    pub params: Option<PathBuf>,

    /// Probability that a gene copy mutates during its transmission from a parent to its offspring.
    ///
    /// Overrides the value of the default or user-provided ('--params') probability tables.
    #[clap(short='m', long, required(false), parse(try_from_str=parse_probability))]
    pub mutation_rate: Option<f64>,

    /// Output directory where results will be written.
    ///
    /// Results are printed to the standard output if this argument is not provided. Note that heredity-rs
    /// will create the specified leaf directory if it is not present, but does not allow itself from creating
    /// parent directories.
    #[clap(short, long, required(false), parse(try_from_os_str=valid_output_dir))]
    pub output_dir: Option<PathBuf>,

    /// Overwrite existing output files.
    ///
    /// By default, heredity-rs does not allow itself from overwriting existing results files. Use this flag
    /// to force this behaviour.
    #[clap(short='w', long)]
    pub overwrite: bool,

    /// Number of worker threads.
    ///
    /// Consistent trait assignments are distributed across threads.
    #[clap(short='@', long, default_value("1"), parse(try_from_str=parse_threads))]
    pub threads: usize,

    /// Output format.
    #[clap(short='f', long, arg_enum, default_value("table"))]
    pub format: OutputFormat,

    /// Number of decimals of printed probabilities.
    #[clap(long, default_value("4"))]
    pub precision: usize,
}

impl Infer {
    /// Get the path of the results file: `<output-dir>/<pedigree file stem>.posteriors`. Returns `None` if results
    /// should be printed to stdout.
    ///
    /// # Errors
    /// - if a file stem cannot be extracted from the input pedigree.
    pub fn output_file(&self) -> Result<Option<PathBuf>> {
        let Some(output_dir) = &self.output_dir else {
            return Ok(None)
        };
        let file_stem = self.pedigree.file_stem()
            .ok_or(ParserError::ParseOutputPrefix)
            .loc("While parsing command line arguments")?;
        Ok(Some(output_dir.join(file_stem).with_extension(OUTPUT_EXT)))
    }

    /// Check if a given file already exists ; raise an error if such is the case, and the user did not explicitly
    /// allow file overwriting.
    ///
    /// # Errors
    /// - If the provided `path` already exists and the user did not specifically allow for file
    ///   overwrite using the `--overwrite` argument
    pub fn can_write_file(&self, path: &Path) -> Result<bool> {
        can_write_file(self.overwrite, path)
    }
}

#[derive(Parser, Debug, Default, Serialize, Deserialize)]
pub struct Params {
    /// Output .yaml file. Tables are printed to the standard output if this argument is not provided.
    #[clap(short, long, required(false))]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file.
    #[clap(short='w', long)]
    pub overwrite: bool,
}

impl Params {
    /// # Errors
    /// - If the provided `path` already exists and the user did not specifically allow for file
    ///   overwrite using the `--overwrite` argument
    pub fn can_write_file(&self, path: &Path) -> Result<bool> {
        can_write_file(self.overwrite, path)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ArgEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One tab-separated line per individual.
    Table,
    /// One indented block per individual.
    Report,
}

impl Default for OutputFormat {
    fn default() -> Self {Self::Table}
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table  => write!(f, "table"),
            Self::Report => write!(f, "report"),
        }
    }
}

fn can_write_file(overwrite: bool, path: &Path) -> Result<bool> {
    if ! overwrite && path.exists() {   // Check if this file already exists and/or if overwrite is allowed.
        return Err(ParserError::CannotOverwrite(path.display().to_string()))
            .loc( "While parsing command line arguments" )
    }
    Ok(true)
}

#[derive(Debug, Clone, Copy)]
pub enum FileEntity {File, Directory}

impl Display for FileEntity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::File      => write!(f, "File"),
            Self::Directory => write!(f, "Directory"),
        }
    }
}

impl FileEntity {
    fn validate(&self, path: &Path) -> Result<(), ParserError> {
        use ParserError::InvalidFileEntity;
        let valid = match self {
            Self::File      => path.is_file(),
            Self::Directory => path.is_dir()
        };

        if valid {
            Ok(())
        } else {
            Err(InvalidFileEntity(*self, path.display().to_string()))
        }
    }
}

fn assert_filesystem_entity_is_valid(s: &OsStr, entity: &FileEntity) -> Result<()> {
    use ParserError::MissingFileEntity;
    let path = Path::new(s);
    if ! path.exists() {
        return Err(MissingFileEntity(*entity, path.display().to_string()))
            .loc("While parsing arguments.")
    }

    entity.validate(path).loc("While parsing arguments.")
}

fn valid_input_file(s: &OsStr) -> Result<PathBuf> {
    assert_filesystem_entity_is_valid(s, &FileEntity::File)
        .loc("While checking for file validity")?;
    Ok(PathBuf::from(s))
}

fn valid_output_dir(s: &OsStr) -> Result<PathBuf> {
    if ! Path::new(s).exists() {
        std::fs::create_dir(s)
            .map_err(ParserError::CreateDir)
            .with_loc(|| format!("While creating {}", Path::new(s).display()))?;
    }
    assert_filesystem_entity_is_valid(s, &FileEntity::Directory)
        .loc("While checking for directory validity")?;
    Ok(PathBuf::from(s))
}

fn parse_probability(s: &str) -> Result<f64> {
    let loc_msg = || format!("While parsing the provided probability: {s}");
    let p = s.parse::<f64>().with_loc(loc_msg)?;
    match (0.0..=1.0).contains(&p) {
        true  => Ok(p),
        false => Err(ParserError::ParseProbability(p)).with_loc(loc_msg),
    }
}

fn parse_threads(s: &str) -> Result<usize> {
    let threads = s.parse::<usize>().with_loc(|| format!("While parsing the provided number of threads: {s}"))?;
    match threads {
        0 => Err(ParserError::InvalidThreads).loc("While parsing --threads"),
        _ => Ok(threads),
    }
}
