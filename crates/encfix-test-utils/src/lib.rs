//! Testing utilities for encfix workspace
//!
//! Shared test helpers, fixtures, and assertions.

#![allow(missing_docs)]

use encfix::prelude::*;
use encfix::sink::{STAGING_PREFIX, STAGING_SUFFIX};
use std::path::Path;
use tempfile::TempDir;

/// Text expected in `test_gbk.txt`
pub const EXPECTED_GBK_TEXT: &str = "\n你好，世界！\n这是一个测试文件。\nEncoding: GBK\n";

/// Text expected in `test_utf8.txt`
pub const EXPECTED_UTF8_TEXT: &str = "\n你好，世界！\n这是一个测试文件。\nEncoding: UTF-8\n";

pub fn output_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

pub fn generator_for(dir: &Path) -> Generator {
    Generator::new(GeneratorConfig::new().with_output_dir(dir))
}

/// Read a file and decode it strictly with `encoding`
pub fn read_decoded(path: &Path, encoding: TextEncoding) -> String {
    let bytes = std::fs::read(path).unwrap();
    encoding.decode(&bytes).unwrap()
}

/// Sorted file names in `dir`
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// True for leftovers of an interrupted write
pub fn is_staging_file(name: &str) -> bool {
    name.starts_with(STAGING_PREFIX) && name.ends_with(STAGING_SUFFIX)
}

pub fn gbk_fixture_with(text: &'static str) -> Fixture {
    Fixture::new(GBK_FILE_NAME, TextEncoding::Gbk, FixtureText::new(text))
}

pub fn utf8_fixture_with(text: &'static str) -> Fixture {
    Fixture::new(UTF8_FILE_NAME, TextEncoding::Utf8, FixtureText::new(text))
}
