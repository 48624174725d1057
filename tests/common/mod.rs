#[cfg(test)]
mod fixture;
pub use fixture::Fixture;

#[cfg(test)]
mod heredity_runner;
pub use heredity_runner::HeredityRunnerBuilder;

/// Compare a produced file against its expected counterpart in `tests/test-data/expect`
#[macro_export]
macro_rules! validate_file {
    ($ref_file:expr, $obtained_file:expr) => {
        let ref_file = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/test-data/expect").join($ref_file);
        let want = std::fs::read_to_string(&ref_file)
            .unwrap_or_else(|_| panic!("Failed to open {:?}", ref_file));
        let got  = std::fs::read_to_string($obtained_file)
            .unwrap_or_else(|_| panic!("Failed to open {:?}", $obtained_file));
        assert_eq!(want, got)
    };
}
