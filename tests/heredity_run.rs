mod common;
use common::{Fixture, HeredityRunnerBuilder};
#[cfg(test)] use pretty_assertions::assert_eq;

use clap::Parser;
use float_cmp::approx_eq;
use pedigree_infer::PedigreeError;
use heredity_io::read::PedigreeReaderError;

type Expected = [(&'static str, [f64; 5])];

// name, [gene_0, gene_1, gene_2, trait_false, trait_true]
const FAMILY1: [(&str, [f64; 5]); 5] = [
    ("Arthur",   [0.950_892_106_8, 0.034_378_619_4, 0.014_729_273_8, 1.0, 0.0]),
    ("Hermione", [0.818_940_989_0, 0.120_286_563_2, 0.060_772_447_8, 1.0, 0.0]),
    ("Molly",    [0.885_170_560_2, 0.074_429_979_9, 0.040_399_459_9, 0.923_207_856_7, 0.076_792_143_3]),
    ("Ron",      [0.780_801_686_3, 0.214_926_836_7, 0.004_271_477_1, 1.0, 0.0]),
    ("Rose",     [0.289_018_463_0, 0.702_162_339_3, 0.008_819_197_7, 0.0, 1.0]),
];

const FAMILY2: [(&str, [f64; 5]); 6] = [
    ("Arthur",  [0.863_601_975_7, 0.103_499_242_2, 0.032_898_782_1, 1.0, 0.0]),
    ("Charlie", [0.865_130_573_2, 0.133_086_589_6, 0.001_782_837_1, 1.0, 0.0]),
    ("Fred",    [0.344_897_013_2, 0.648_609_595_9, 0.006_493_390_9, 0.0, 1.0]),
    ("Ginny",   [0.816_779_697_1, 0.180_529_735_7, 0.002_690_567_3, 0.888_986_682_3, 0.111_013_317_7]),
    ("Molly",   [0.863_601_975_7, 0.103_499_242_2, 0.032_898_782_1, 1.0, 0.0]),
    ("Ron",     [0.816_779_697_1, 0.180_529_735_7, 0.002_690_567_3, 0.888_986_682_3, 0.111_013_317_7]),
];

fn assert_posteriors(got: &[(String, [f64; 5])], expected: &Expected) {
    let labels: Vec<&str> = got.iter().map(|(label, _)| label.as_str()).collect();
    let want: Vec<&str>   = expected.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, want);

    for ((label, got), (_, want)) in got.iter().zip(expected) {
        for (g, w) in got.iter().zip(want) {
            assert!(approx_eq!(f64, *g, *w, epsilon = 1e-8), "{label}: got {got:?}, want {want:?}");
        }
    }
}

#[test]
fn table_output() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("family0.csv")
        .set_output_dir("heredity-test-output")
        .build()
        .unwrap();

    runner.run().unwrap();
    validate_file!("family0.posteriors", runner.output_file().unwrap());
}

#[test]
fn report_output() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("family0.csv")
        .set_output_dir("heredity-test-output")
        .report()
        .build()
        .unwrap();

    runner.run().unwrap();
    validate_file!("family0.report", runner.output_file().unwrap());
}

#[test]
fn reference_families() {
    for (pedigree, expected) in [("family1.csv", &FAMILY1[..]), ("family2.csv", &FAMILY2[..])] {
        let runner = HeredityRunnerBuilder::new()
            .set_pedigree(pedigree)
            .set_output_dir("heredity-test-output")
            .set_precision(10)
            .build()
            .unwrap();

        runner.run().unwrap();
        assert_posteriors(&runner.parse_table(), expected);
    }
}

#[test]
fn multithreaded_run() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("family2.csv")
        .set_output_dir("heredity-test-output")
        .set_precision(10)
        .set_threads(4)
        .build()
        .unwrap();

    runner.run().unwrap();
    assert_posteriors(&runner.parse_table(), &FAMILY2);
}

#[test]
fn stdout_output() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("family0.csv")
        .build()
        .unwrap();

    runner.run().unwrap();
    assert!(runner.output_file().is_none());
}

#[test]
fn refuse_overwrite() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("family0.csv")
        .set_output_dir("heredity-test-output")
        .build()
        .unwrap();

    runner.run().unwrap();
    assert!(runner.run().is_err());
}

#[test]
fn allow_overwrite() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("family0.csv")
        .set_output_dir("heredity-test-output")
        .overwrite()
        .build()
        .unwrap();

    runner.run().unwrap();
    runner.run().unwrap();
    validate_file!("family0.posteriors", runner.output_file().unwrap());
}

#[test]
fn default_params_file() {
    let params = Fixture::blank("params.yaml");
    let cli = parser::Cli::parse_from(["heredity-rs", "params", "--output", params.to_str().unwrap()]);
    heredity_rs::run(cli).unwrap();
    assert!(params.is_file());

    // Writing the default tables again requires --overwrite
    let cli = parser::Cli::parse_from(["heredity-rs", "params", "--output", params.to_str().unwrap()]);
    assert!(heredity_rs::run(cli).is_err());

    // Default tables must yield the default results.
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("family0.csv")
        .set_output_dir("heredity-test-output")
        .set_params(params.to_str().unwrap())
        .build()
        .unwrap();

    runner.run().unwrap();
    validate_file!("family0.posteriors", runner.output_file().unwrap());
}

#[test]
fn mutation_rate_override() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("family0.csv")
        .set_output_dir("heredity-test-output")
        .set_precision(10)
        .set_mutation_rate(0.0)
        .build()
        .unwrap();

    runner.run().unwrap();
    let results = runner.parse_table();
    let (label, harry) = &results[0];
    assert_eq!(label, "Harry");
    // Different from the reference run, yet still normalized.
    assert!(!approx_eq!(f64, harry[0], 0.535_118_610_1, epsilon = 1e-6));
    assert!(approx_eq!(f64, harry[0] + harry[1] + harry[2], 1.0, epsilon = 1e-8));
}

#[test]
fn invalid_trait() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("invalid-trait.csv")
        .set_output_dir("heredity-test-output")
        .build()
        .unwrap();

    assert!(runner.run().is_err());
    assert!(!runner.output_file().unwrap().exists());
}

#[test]
fn cyclic_pedigree() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("cyclic.csv")
        .build()
        .unwrap();

    let err = runner.run().unwrap_err();
    assert!(matches!(err.root_cause().downcast_ref::<PedigreeError>(), Some(PedigreeError::CyclicPedigree(_))));
}

#[test]
fn from_yaml() {
    let runner = HeredityRunnerBuilder::new()
        .set_pedigree("family0.csv")
        .set_output_dir("heredity-test-output")
        .overwrite()
        .build()
        .unwrap();

    let yaml = runner.cli().serialize().unwrap().unwrap();
    assert!(!runner.output_file().unwrap().exists());

    let cli = parser::Cli::parse_from(["heredity-rs", "from-yaml", yaml.to_str().unwrap()]);
    heredity_rs::run(cli).unwrap();
    validate_file!("family0.posteriors", runner.output_file().unwrap());
}

#[test]
fn custom_pedigree() {
    let pedigree = Fixture::with_contents("founder.csv", "name,mother,father,trait\nJames,,,\n");
    let output   = Fixture::blank("heredity-test-output");
    let cli = parser::Cli::parse_from([
        "heredity-rs", "infer", "--pedigree", pedigree.to_str().unwrap(), "--output-dir", output.to_str().unwrap(), "--precision", "2"
    ]);
    heredity_rs::run(cli).unwrap();

    let got = std::fs::read_to_string(output.join("founder.posteriors")).unwrap();
    assert_eq!(got, "name\tgene_0\tgene_1\tgene_2\ttrait_false\ttrait_true\nJames\t0.96\t0.03\t0.01\t0.97\t0.03\n");
    assert!(pedigree.dir().is_dir());
}

#[test]
fn label_with_column_separator() {
    let pedigree = Fixture::with_contents("dash.csv", "name,mother,father,trait\nMary - Jane,,,\n");
    let output   = Fixture::blank("heredity-test-output");
    let cli = parser::Cli::parse_from([
        "heredity-rs", "infer", "--pedigree", pedigree.to_str().unwrap(), "--output-dir", output.to_str().unwrap(), "--precision", "2"
    ]);

    let err = heredity_rs::run(cli).unwrap_err();
    assert!(matches!(
        err.root_cause().downcast_ref::<PedigreeReaderError>(),
        Some(PedigreeReaderError::InvalidLabel{line: 2, ..})
    ));
    assert!(!output.join("dash.posteriors").exists());
}
