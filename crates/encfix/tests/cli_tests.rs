use encfix::prelude::*;
use encfix_test_utils::*;
use std::process::Command;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generate-fixtures"))
}

#[test]
fn test_binary_writes_into_working_directory() {
    let dir = output_dir();
    let status = bin().current_dir(dir.path()).status().unwrap();
    assert!(status.success());
    assert_eq!(dir_entries(dir.path()), [GBK_FILE_NAME, UTF8_FILE_NAME]);
    assert_eq!(
        read_decoded(&dir.path().join(GBK_FILE_NAME), TextEncoding::Gbk),
        EXPECTED_GBK_TEXT
    );
    assert_eq!(
        read_decoded(&dir.path().join(UTF8_FILE_NAME), TextEncoding::Utf8),
        EXPECTED_UTF8_TEXT
    );
}

#[test]
fn test_binary_matches_library_output() {
    let by_bin = output_dir();
    let by_lib = output_dir();
    assert!(bin().current_dir(by_bin.path()).status().unwrap().success());
    generate(by_lib.path()).unwrap();
    for name in [GBK_FILE_NAME, UTF8_FILE_NAME] {
        assert_eq!(
            std::fs::read(by_bin.path().join(name)).unwrap(),
            std::fs::read(by_lib.path().join(name)).unwrap()
        );
    }
}

#[test]
fn test_binary_prints_nothing_on_stdout() {
    let dir = output_dir();
    let output = bin().current_dir(dir.path()).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_binary_rejects_arguments() {
    let dir = output_dir();
    let output = bin().arg("extra").current_dir(dir.path()).output().unwrap();
    assert!(!output.status.success());
    assert!(dir_entries(dir.path()).is_empty());
}

#[test]
fn test_binary_fails_when_target_blocked() {
    let dir = output_dir();
    std::fs::create_dir(dir.path().join(GBK_FILE_NAME)).unwrap();
    std::fs::write(dir.path().join(GBK_FILE_NAME).join("keep"), b"").unwrap();
    let output = bin().current_dir(dir.path()).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to generate fixtures"), "stderr: {stderr}");
    assert_eq!(dir_entries(dir.path()), [GBK_FILE_NAME]);
}
