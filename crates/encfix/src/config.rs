//! Generator configuration
//!
//! Only the output directory is configurable, and only from code.

use std::path::{Path, PathBuf};

/// Where a generator run writes its fixtures.
///
/// Never read from the environment or a file: the binary always uses
/// [`GeneratorConfig::default`], the current working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory that receives the fixture files
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// Config writing into the current directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }

    /// Set output directory
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Borrow the output directory
    #[inline]
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
