use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use anyhow::Result;
use located_error::LocatedError;
use log::{debug, trace};
use pedigree_infer::Pedigree;

use crate::write::splits_into_columns;
use serde::Deserialize;

mod error;
pub use error::PedigreeReaderError;

/// Columns every pedigree definition file must define.
const REQUIRED_COLUMNS: [&str; 4] = ["name", "mother", "father", "trait"];

/// A single row of a pedigree definition file. Empty fields are deserialized as `None`
#[derive(Debug, Deserialize)]
struct PedigreeRecord {
    name  : String,
    mother: Option<String>,
    father: Option<String>,
    #[serde(rename = "trait")]
    trait_status: Option<String>,
}

impl PedigreeRecord {
    /// Decode the trait column: `1` = present, `0` = absent, empty = unknown.
    fn trait_evidence(&self, line: u64) -> Result<Option<bool>, PedigreeReaderError> {
        match self.trait_status.as_deref() {
            None      => Ok(None),
            Some("1") => Ok(Some(true)),
            Some("0") => Ok(Some(false)),
            Some(other) => Err(PedigreeReaderError::InvalidTrait{
                line,
                label: self.name.clone(),
                value: other.to_string()
            }),
        }
    }
}

/// Pedigree definition file reader (`.csv` extension)
/// ### File characteristics:
/// - Comma-separated fields, with a header line.
/// - Columns: `name`, `mother`, `father`, `trait`
/// - `mother` and `father` are either both empty (founder), or both defined. Parents may be defined later in the file.
/// - `trait`: `1` if the individual exhibits the trait, `0` if not, empty if unknown.
/// ### Fields:
/// - `source_file`: path to the source `.csv` file
/// - `pedigree`   : parsed pedigree. Parent existence and acyclicity are left to `Pedigree::network()`
#[derive(Debug, Clone)]
pub struct PedigreeReader {
    pub source_file: PathBuf,
    pub pedigree   : Pedigree,
}

impl PedigreeReader {
    /// Read a pedigree definition file.
    ///
    /// # Errors
    /// - if `path` cannot be opened.
    /// - if any record is malformed (see `PedigreeReader::parse()`)
    pub fn new(path: &Path) -> Result<Self> {
        let loc_msg = || format!("While reading pedigree definition file {}", path.display());
        let source   = BufReader::new(File::open(path).map_err(PedigreeReaderError::OpenFile).with_loc(loc_msg)?);
        let pedigree = Self::parse(source).with_loc(loc_msg)?;
        debug!("Found {} individuals within {}", pedigree.len(), path.display());
        Ok(Self { source_file: path.to_path_buf(), pedigree })
    }

    /// Parse a pedigree definition from any reader.
    ///
    /// # Errors
    /// - `MissingColumn` if the header lacks any of the `name`, `mother`, `father`, `trait` columns.
    /// - `ParseCsv` if a record cannot be deserialized (e.g. wrong number of fields)
    /// - `EmptyLabel` if a record carries an empty `name`
    /// - `InvalidLabel` if a `name` would be split across several output columns (see `splits_into_columns()`)
    /// - `InvalidTrait` if the trait column holds anything else than `1`, `0` or nothing.
    /// - `PedigreeError` if the individual cannot be added (duplicate, single parent, etc.)
    pub fn parse<R: Read>(source: R) -> Result<Pedigree> {
        use PedigreeReaderError::{EmptyLabel, InvalidLabel, MissingColumn, ParseCsv};
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let headers = reader.headers().map_err(ParseCsv).loc("While reading header")?.clone();
        if let Some(column) = REQUIRED_COLUMNS.into_iter().find(|column| !headers.iter().any(|h| h == *column)) {
            return Err(MissingColumn(column)).loc("While reading header")
        }

        let mut pedigree = Pedigree::new();
        for record in reader.records() {
            let record = record.map_err(ParseCsv).loc("While parsing pedigree definition file")?;
            let line = record.position().map_or(0, csv::Position::line);
            let loc_msg = || format!("While parsing line {line}");
            let record: PedigreeRecord = record.deserialize(Some(&headers)).map_err(ParseCsv).with_loc(loc_msg)?;
            if record.name.is_empty() {
                return Err(EmptyLabel(line)).loc("While parsing pedigree definition file")
            }
            if splits_into_columns(&record.name) {
                return Err(InvalidLabel{line, label: record.name}).loc("While parsing pedigree definition file")
            }

            let trait_evidence = record.trait_evidence(line).with_loc(loc_msg)?;
            trace!("line {line}: {record:?}");
            pedigree.add_individual(&record.name, record.mother.as_deref(), record.father.as_deref(), trait_evidence)
                .with_loc(loc_msg)?;
        }
        Ok(pedigree)
    }

    #[must_use]
    pub fn into_pedigree(self) -> Pedigree {
        self.pedigree
    }
}
