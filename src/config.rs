//! Where the source tables live.

use std::path::{Path, PathBuf};

/// Directory used when none is given.
pub const DEFAULT_DATA_DIR: &str = "large";

/// Location of the three CSV tables that make up a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadConfig {
    pub directory: PathBuf,
    pub people_file: String,
    pub movies_file: String,
    pub stars_file: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl LoadConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            people_file: "people.csv".into(),
            movies_file: "movies.csv".into(),
            stars_file: "stars.csv".into(),
        }
    }

    pub fn people_path(&self) -> PathBuf {
        self.directory.join(&self.people_file)
    }

    pub fn movies_path(&self) -> PathBuf {
        self.directory.join(&self.movies_file)
    }

    pub fn stars_path(&self) -> PathBuf {
        self.directory.join(&self.stars_file)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}
