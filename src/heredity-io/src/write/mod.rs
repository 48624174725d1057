mod generic_writer;
pub use generic_writer::{GenericWriter, WriterError, WRITER_SEPARATOR, splits_into_columns};

mod posteriors_writer;
pub use posteriors_writer::{table_lines, report_lines, TABLE_HEADER};
