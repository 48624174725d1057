extern crate parser;
extern crate logger;

use std::path::Path;

use parser::{Cli, Commands::*, OutputFormat};
use heredity_io::{
    read::PedigreeReader,
    write::{GenericWriter, report_lines, table_lines},
};
use pedigree_infer::ProbabilityTables;
use located_error::prelude::*;

#[macro_use]
extern crate log;

/// Load the probability tables requested by the user: `--params` if provided, the defaults otherwise.
/// `--mutation-rate` takes precedence over the tables' own mutation rate.
///
/// # Errors
/// - if the `--params` file cannot be read, or holds invalid tables.
fn load_tables(infer: &parser::Infer) -> Result<ProbabilityTables> {
    let tables = match &infer.params {
        Some(path) => {
            info!("Loading probability tables from {}", path.display());
            ProbabilityTables::from_yaml(path)?
        },
        None => ProbabilityTables::default(),
    };

    Ok(match infer.mutation_rate {
        Some(rate) => tables.with_mutation_rate(rate),
        None       => tables,
    })
}

/// Read a pedigree, infer the posterior distributions of its members and write them.
///
/// # Errors
/// - if the output file already exists and `--overwrite` was not requested.
/// - if the pedigree or the probability tables are invalid.
/// - if inference fails, or results cannot be written.
pub fn infer(infer: &parser::Infer) -> Result<()> {
    // ----------------------------- Check output before doing any work.
    let output_file = infer.output_file()?;
    if let Some(path) = &output_file {
        infer.can_write_file(path)?;
    }

    // ----------------------------- Parse inputs.
    info!("Reading pedigree definition file {}", infer.pedigree.display());
    let pedigree = PedigreeReader::new(&infer.pedigree)?.into_pedigree();
    let tables   = load_tables(infer)?;
    debug!("Probability tables: {tables:?}");

    // ----------------------------- Run inference.
    let posteriors = pedigree_infer::infer(&pedigree, &tables, infer.threads)
        .with_loc(|| format!("While running inference on {}", infer.pedigree.display()))?;

    // ----------------------------- Write results.
    let lines = match infer.format {
        OutputFormat::Table  => table_lines(&posteriors, infer.precision),
        OutputFormat::Report => report_lines(&posteriors, infer.precision),
    };
    GenericWriter::new(output_file.as_deref())?.write_iter(lines)?;
    if let Some(path) = output_file {
        info!("Results written to {}", path.display());
    }
    Ok(())
}

/// Write the default probability tables as `.yaml`, either to `--output` or to stdout.
///
/// # Errors
/// - if the output file already exists and `--overwrite` was not requested, or cannot be written.
pub fn write_params(params: &parser::Params) -> Result<()> {
    let yaml = ProbabilityTables::default().to_yaml()?;
    match params.output.as_deref() {
        Some(path) => {
            params.can_write_file(path)?;
            write_file(path, &yaml)?;
            info!("Default probability tables written to {}", path.display());
        },
        None => print!("{yaml}"),
    }
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_loc(|| format!("While writing {}", path.display()))
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.commands {
        Infer{infer} => {
            self::infer(&infer)?;
        },

        FromYaml{yaml} => {
            let cli = Cli::deserialize(&yaml)?;
            if ! cli.quiet {
                logger::Logger::set_level(cli.verbose + 1);
            }
            self::run(cli)?;
        },

        Params{params} => {
            write_params(&params)?;
        },
    };
    Ok(())
}
