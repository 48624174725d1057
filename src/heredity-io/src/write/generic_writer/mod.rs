use std::{fs::File, io::{Write, BufWriter}, path::Path};
use anyhow::Result;
use regex::Regex;
use lazy_static::lazy_static;

use located_error::LocatedError;

pub mod error;
pub use error::WriterError;

/// Field separator of every file written by `GenericWriter`.
pub const WRITER_SEPARATOR: &str = "\t";

lazy_static! {
    /// Pretty-print column separator of `Display` implementations. Replaced by `WRITER_SEPARATOR` on write.
    static ref PRETTY_PRINT_SEPARATOR: Regex = Regex::new(r"[ ]+-[ ]+").expect("Failed to parse regex.");
}

/// Check whether `field` would end up spanning several columns or lines once written by `GenericWriter`.
pub fn splits_into_columns(field: &str) -> bool {
    field.contains(WRITER_SEPARATOR) || field.contains(['\n', '\r']) || PRETTY_PRINT_SEPARATOR.is_match(field)
}

/// A generic writer, targeting either a file or stdout.
/// - source: Boxed `BufWriter`
pub struct GenericWriter<'a> {
    source: BufWriter<Box<dyn Write + 'a>>
}

impl<'a> GenericWriter<'a> {
    /// Instantiate a new `GenericWriter`. Writes to `path` if provided, to stdout otherwise.
    ///
    /// # Errors
    /// if `path` is either an invalid file, or the user does not have the proper
    /// UNIX permissions to write at this location.
    pub fn new(path: Option<impl AsRef<Path>>) -> Result<GenericWriter<'a>> {
        use WriterError::IOError;
        Ok(GenericWriter{ source: match path {
            Some(path) => {
                let file = File::create(path.as_ref())
                    .map_err(IOError)
                    .with_loc(|| format!("While creating {}", path.as_ref().display()))?;
                BufWriter::new(Box::new(file))
            },
            None => {
                BufWriter::new(Box::new(std::io::stdout()))
            }
        }})
    }

    /// Write the contents of a generic iterator. One item = one line.
    ///
    /// # Behavior
    /// Every match of the regular expression `[ ]+-[ ]+` is replaced with `WRITER_SEPARATOR`. This strips the
    /// pretty-print padding of `Display` implementations from the output.
    ///
    /// # Errors
    /// - If any of the items within `iter` fails to get written.
    ///
    /// # Panics
    /// - if parsing the regex required to delete pretty-print characters fails.
    pub fn write_iter<T, I>(&mut self, iter: T) -> Result<()>
    where   T: IntoIterator<Item = I>,
            I: std::fmt::Display,
    {
        iter.into_iter()
            .try_for_each(|obj| self.source.write_all(PRETTY_PRINT_SEPARATOR.replace_all(&format!("{obj}\n"), WRITER_SEPARATOR).as_bytes()))
            .map_err(WriterError::IOError)
            .loc("While writing contents")?;

        self.source.flush().map_err(WriterError::IOError).loc("While flushing buffer contents of Writer")
    }
}
