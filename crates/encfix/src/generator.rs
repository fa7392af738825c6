//! Fixture generator
//!
//! Runs a [`FixturePlan`] in order:
//! 1. Encode the fixture text into its charset
//! 2. Write the bytes through the scoped sink
//! 3. Advance the [`Stage`]
//!
//! Encoding happens before any file is touched, so an unrepresentable
//! character never creates a file. The first error ends the run and leaves
//! already written fixtures in place.

use crate::codec::TextEncoding;
use crate::config::GeneratorConfig;
use crate::digest::FixtureDigest;
use crate::error::{FixtureError, StageError};
use crate::sink::write_fixture;
use crate::stage::Stage;
use crate::text::FixtureText;
use std::path::{Path, PathBuf};

/// File name of the GBK fixture
pub const GBK_FILE_NAME: &str = "test_gbk.txt";

/// File name of the UTF-8 fixture
pub const UTF8_FILE_NAME: &str = "test_utf8.txt";

/// One output file: name, charset and text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Name relative to the output directory
    pub file_name: String,
    /// Charset the text is written in
    pub encoding: TextEncoding,
    /// Text to write
    pub text: FixtureText,
}

impl Fixture {
    /// Create a fixture description
    #[must_use]
    pub fn new(file_name: impl Into<String>, encoding: TextEncoding, text: FixtureText) -> Self {
        Self {
            file_name: file_name.into(),
            encoding,
            text,
        }
    }
}

/// Ordered fixtures produced by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePlan {
    fixtures: Vec<Fixture>,
}

impl FixturePlan {
    /// Plan from an explicit fixture list
    #[must_use]
    pub fn new(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }

    /// The fixed pair: template as GBK, then the variant as UTF-8
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Fixture::new(GBK_FILE_NAME, TextEncoding::Gbk, FixtureText::template()),
            Fixture::new(UTF8_FILE_NAME, TextEncoding::Utf8, FixtureText::variant()),
        ])
    }

    /// Fixtures in write order
    #[inline]
    #[must_use]
    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }
}

impl Default for FixturePlan {
    fn default() -> Self {
        Self::standard()
    }
}

/// A fixture as it landed on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFixture {
    /// Final path
    pub path: PathBuf,
    /// Charset of the content
    pub encoding: TextEncoding,
    /// Number of bytes written
    pub len: usize,
    /// Digest of the bytes written
    pub digest: FixtureDigest,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Fixtures in write order
    pub written: Vec<WrittenFixture>,
    /// Stage reached
    pub stage: Stage,
}

impl GenerationReport {
    /// Look up a written fixture by file name
    #[must_use]
    pub fn find(&self, file_name: &str) -> Option<&WrittenFixture> {
        self.written
            .iter()
            .find(|w| w.path.file_name().is_some_and(|n| n == file_name))
    }
}

/// Writes fixture plans into the configured directory
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create generator
    #[inline]
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Write every fixture of `plan`, in order
    ///
    /// # Errors
    /// - `FixtureError::Encode` if a text has a character its charset lacks
    /// - `FixtureError::Io` if a file cannot be written
    /// - `FixtureError::Stage` if the plan holds more than two fixtures
    pub fn run(&self, plan: &FixturePlan) -> Result<GenerationReport, FixtureError> {
        let dir = self.config.output_dir();
        let mut stage = Stage::Start;
        let mut written = Vec::with_capacity(plan.fixtures().len());

        for fixture in plan.fixtures() {
            // Done is only reachable once every fixture is on disk
            let next = stage.next()?;
            if next.is_done() {
                return Err(StageError::Exhausted(stage).into());
            }

            let bytes = fixture
                .encoding
                .encode(fixture.text.as_str())
                .map_err(|e| FixtureError::encode_error(&fixture.file_name, e))?;

            let path = write_fixture(dir, &fixture.file_name, &bytes)?;
            let digest = FixtureDigest::compute(&bytes);
            tracing::info!(
                "Wrote {} ({}, {} bytes, {})",
                path.display(),
                fixture.encoding,
                bytes.len(),
                digest.short()
            );

            stage = next;
            tracing::debug!("Stage -> {:?}", stage);

            written.push(WrittenFixture {
                path,
                encoding: fixture.encoding,
                len: bytes.len(),
                digest,
            });
        }

        if stage == Stage::WroteFileB {
            stage = stage.next()?;
            tracing::debug!("Stage -> {:?}", stage);
        }
        Ok(GenerationReport { written, stage })
    }
}

/// Write the standard fixture pair into `dir`
///
/// # Errors
/// See [`Generator::run`]
pub fn generate(dir: impl AsRef<Path>) -> Result<GenerationReport, FixtureError> {
    let config = GeneratorConfig::new().with_output_dir(dir.as_ref());
    Generator::new(config).run(&FixturePlan::standard())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_plan_order() {
        let plan = FixturePlan::standard();
        let names: Vec<&str> = plan.fixtures().iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, [GBK_FILE_NAME, UTF8_FILE_NAME]);
        assert_eq!(plan.fixtures()[0].encoding, TextEncoding::Gbk);
        assert_eq!(plan.fixtures()[1].encoding, TextEncoding::Utf8);
        assert_eq!(plan.fixtures()[1].text, FixtureText::variant());
    }

    #[test]
    fn run_reaches_done() {
        let dir = tempfile::tempdir().unwrap();
        let report = generate(dir.path()).unwrap();
        assert!(report.stage.is_done());
        assert_eq!(report.written.len(), 2);

        let gbk = report.find(GBK_FILE_NAME).unwrap();
        let bytes = std::fs::read(&gbk.path).unwrap();
        assert_eq!(gbk.len, bytes.len());
        assert_eq!(gbk.digest, FixtureDigest::compute(&bytes));
    }

    #[test]
    fn encode_failure_names_fixture() {
        let dir = tempfile::tempdir().unwrap();
        let plan = FixturePlan::new(vec![Fixture::new(
            "emoji.txt",
            TextEncoding::Gbk,
            FixtureText::new("🙂"),
        )]);
        let err = Generator::new(GeneratorConfig::new().with_output_dir(dir.path()))
            .run(&plan)
            .unwrap_err();
        assert!(matches!(err, FixtureError::Encode { ref file_name, .. } if file_name == "emoji.txt"));
        assert!(!dir.path().join("emoji.txt").exists());
    }

    #[test]
    fn single_fixture_plan_stops_after_file_a() {
        let dir = tempfile::tempdir().unwrap();
        let plan = FixturePlan::new(FixturePlan::standard().fixtures()[..1].to_vec());
        let report = Generator::new(GeneratorConfig::new().with_output_dir(dir.path()))
            .run(&plan)
            .unwrap();
        assert_eq!(report.stage, Stage::WroteFileA);
        assert!(report.find(UTF8_FILE_NAME).is_none());
    }

    #[test]
    fn oversized_plan_stops_at_stage_limit() {
        let dir = tempfile::tempdir().unwrap();
        let extra = Fixture::new("c.txt", TextEncoding::Utf8, FixtureText::new("c"));
        let mut fixtures = FixturePlan::standard().fixtures().to_vec();
        fixtures.push(extra);
        let err = Generator::new(GeneratorConfig::new().with_output_dir(dir.path()))
            .run(&FixturePlan::new(fixtures))
            .unwrap_err();
        assert!(matches!(err, FixtureError::Stage(StageError::Exhausted(Stage::WroteFileB))));
        assert!(!dir.path().join("c.txt").exists());
    }
}
