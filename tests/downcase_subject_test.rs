use assert_cmd::Command;
use std::fs;
use std::path::Path;

fn downcase(path: &Path) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("downcase-subject").unwrap();
    cmd.arg(path).assert()
}

#[test]
fn test_downcases_first_line_only() {
    let temp_dir = tempfile::tempdir().unwrap();
    let msg = temp_dir.path().join("COMMIT_EDITMSG");
    fs::write(&msg, "Fix: Something Broke\n\nFix: Details Below stay put.\n").unwrap();

    downcase(&msg).success();

    assert_eq!(
        fs::read_to_string(&msg).unwrap(),
        "Fix: something Broke\n\nFix: Details Below stay put.\n"
    );
}

#[test]
fn test_no_separator_is_byte_identical() {
    let temp_dir = tempfile::tempdir().unwrap();
    let msg = temp_dir.path().join("COMMIT_EDITMSG");
    let input = "NoSeparatorHere\n\nBody text.\n";
    fs::write(&msg, input).unwrap();

    downcase(&msg).success();

    assert_eq!(fs::read_to_string(&msg).unwrap(), input);
}

#[test]
fn test_empty_remainder_is_byte_identical() {
    let temp_dir = tempfile::tempdir().unwrap();
    let msg = temp_dir.path().join("COMMIT_EDITMSG");
    fs::write(&msg, "Fix: \n").unwrap();

    downcase(&msg).success();

    assert_eq!(fs::read_to_string(&msg).unwrap(), "Fix: \n");
}

#[test]
fn test_idempotent_across_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();
    let msg = temp_dir.path().join("COMMIT_EDITMSG");
    fs::write(&msg, "Feat: Add Tape View\n").unwrap();

    downcase(&msg).success();
    let after_first = fs::read_to_string(&msg).unwrap();
    assert_eq!(after_first, "Feat: add Tape View\n");

    downcase(&msg).success();
    assert_eq!(fs::read_to_string(&msg).unwrap(), after_first);
}

#[test]
fn test_missing_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    downcase(&missing)
        .failure()
        .stderr(predicates::str::contains("Error:"));
}

#[test]
fn test_empty_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let msg = temp_dir.path().join("COMMIT_EDITMSG");
    fs::write(&msg, "").unwrap();

    downcase(&msg)
        .failure()
        .stderr(predicates::str::contains("Empty file"));
}
