use std::{env, fs, path::{Path, PathBuf}, ops::Deref, fmt::{self, Formatter, Display}};
use tempfile::{self, TempDir};

pub const TEST_DATA_DIR: &str = "tests/test-data";

/// A test file or directory, living within its own temporary directory.
pub struct Fixture {
    path: PathBuf,
    source: PathBuf,
    tempdir: TempDir,
}

impl Fixture {
    /// Reserve a path within a fresh temporary directory. Nothing is created.
    pub fn blank(fixture_filename: &str) -> Self {
        let root_dir = env::var("CARGO_MANIFEST_DIR").expect("$CARGO_MANIFEST_DIR");
        let source   = Path::new(&root_dir).join(TEST_DATA_DIR).join(fixture_filename);

        let tempdir = tempfile::tempdir().expect("Failed to generate temp directory");
        let path    = tempdir.path().join(fixture_filename);
        Fixture { tempdir, source, path }
    }

    /// Copy a file from `tests/test-data` into a temporary directory.
    pub fn copy(fixture_filename: &str) -> Self {
        let fixture = Fixture::blank(fixture_filename);
        fs::create_dir_all(fixture.path.parent().expect("No parent directory")).expect("Failed to create directory");
        fs::copy(&fixture.source, &fixture.path).expect("Failed to copy Fixture files.");
        fixture
    }

    /// Write `contents` into a new temporary file.
    pub fn with_contents(fixture_filename: &str, contents: &str) -> Self {
        let fixture = Fixture::blank(fixture_filename);
        fs::write(&fixture.path, contents).expect("Failed to write Fixture file.");
        fixture
    }

    /// Directory holding this fixture.
    pub fn dir(&self) -> &Path {
        self.tempdir.path()
    }
}

impl Deref for Fixture {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.path.deref()
    }
}

impl Display for Fixture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.to_str().expect("Invalid path (non UTF8 characters ?)"))
    }
}
