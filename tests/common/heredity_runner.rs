use std::path::PathBuf;

use clap::Parser;

use super::Fixture;

/// Builder of an `infer` command line, running on fixture files.
pub struct HeredityRunnerBuilder {
    pedigree     : Option<Fixture>,
    output_dir   : Option<Fixture>,
    params       : Option<String>,
    mutation_rate: Option<f64>,
    threads      : usize,
    precision    : usize,
    format       : &'static str,
    overwrite    : bool,
}

impl HeredityRunnerBuilder {
    pub fn new() -> Self {
        Self {
            pedigree     : None,
            output_dir   : None,
            params       : None,
            mutation_rate: None,
            threads      : 1,
            precision    : 4,
            format       : "table",
            overwrite    : false,
        }
    }

    /// Copy `tests/test-data/<pedigree>` into a temporary directory.
    pub fn set_pedigree(mut self, pedigree: &str) -> Self {
        self.pedigree = Some(Fixture::copy(pedigree));
        self
    }

    pub fn set_output_dir(mut self, output_dir: &str) -> Self {
        self.output_dir = Some(Fixture::blank(output_dir));
        self
    }

    pub fn set_params(mut self, params: &str) -> Self {
        self.params = Some(params.to_string());
        self
    }

    pub fn set_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = Some(mutation_rate);
        self
    }

    pub fn set_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn set_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn report(mut self) -> Self {
        self.format = "report";
        self
    }

    pub fn overwrite(mut self) -> Self {
        self.overwrite = true;
        self
    }

    pub fn build(self) -> Result<HeredityRunner, String> {
        let pedigree = self.pedigree.ok_or("Missing pedigree")?;

        let mut args = format!("heredity-rs infer
            --pedigree {pedigree}
            --threads {}
            --precision {}
            --format {}
        ", self.threads, self.precision, self.format);

        if let Some(output_dir) = &self.output_dir {
            args.push_str(&format!(" --output-dir {output_dir}"));
        }
        if let Some(params) = &self.params {
            args.push_str(&format!(" --params {params}"));
        }
        if let Some(mutation_rate) = self.mutation_rate {
            args.push_str(&format!(" --mutation-rate {mutation_rate}"));
        }
        if self.overwrite {
            args.push_str(" --overwrite");
        }

        Ok(HeredityRunner { pedigree, output_dir: self.output_dir, args })
    }
}

pub struct HeredityRunner {
    pedigree  : Fixture,
    output_dir: Option<Fixture>,
    args      : String,
}

impl HeredityRunner {
    pub fn cli(&self) -> parser::Cli {
        parser::Cli::parse_from(self.args.split_whitespace())
    }

    pub fn run(&self) -> anyhow::Result<()> {
        heredity_rs::run(self.cli())
    }

    /// `<output-dir>/<pedigree stem>.posteriors`
    pub fn output_file(&self) -> Option<PathBuf> {
        let output_dir = self.output_dir.as_ref()?;
        let stem = self.pedigree.file_stem()?;
        Some(output_dir.join(stem).with_extension("posteriors"))
    }

    /// Parse the tab-separated `table` output into `(name, [gene_0, gene_1, gene_2, trait_false, trait_true])`
    pub fn parse_table(&self) -> Vec<(String, [f64; 5])> {
        let output_file = self.output_file().expect("No output directory was provided");
        let contents = std::fs::read_to_string(&output_file)
            .unwrap_or_else(|_| panic!("Failed to open {}", output_file.display()));

        contents.lines()
            .skip(1)
            .map(|line| {
                let fields: Vec<&str> = line.split('\t').collect();
                assert_eq!(fields.len(), 6, "Invalid line: {line}");
                let mut probs = [0.0; 5];
                for (p, field) in probs.iter_mut().zip(&fields[1..]) {
                    *p = field.parse().unwrap_or_else(|_| panic!("Invalid probability: {field}"));
                }
                (fields[0].to_string(), probs)
            })
            .collect()
    }
}
