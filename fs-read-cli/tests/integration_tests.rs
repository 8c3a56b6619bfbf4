use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::predicate;
use tempfile::TempDir;

fn sample_file(dir: &TempDir, len: usize) -> std::path::PathBuf {
    let path = dir.path().join("sample.txt");
    let data: String = "0123456789".chars().cycle().take(len).collect();
    std::fs::write(&path, data).expect("Failed to write sample file");
    path
}

#[test]
fn test_cli_help() {
    let mut cmd = cargo_bin_cmd!("fs-read-cli");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-size"))
        .stdout(predicate::str::contains("--partial"));
}

#[test]
fn test_prints_file_within_limit() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = sample_file(&dir, 25);

    let mut cmd = cargo_bin_cmd!("fs-read-cli");
    cmd.arg(&path)
        .args(["--max-size", "25", "--chunk-size", "4"])
        .assert()
        .success()
        .stdout("0123456789012345678901234");
}

#[test]
fn test_fails_over_limit() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = sample_file(&dir, 25);

    let mut cmd = cargo_bin_cmd!("fs-read-cli");
    cmd.arg(&path)
        .args(["--max-size", "24"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("exceeds the limit of 24 bytes"));
}

#[test]
fn test_partial_prints_prefix() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    let path = sample_file(&dir, 25);

    let mut cmd = cargo_bin_cmd!("fs-read-cli");
    cmd.arg(&path)
        .args(["--max-size", "12", "--partial"])
        .assert()
        .failure()
        .stdout("012345678901");
}

#[test]
fn test_rejects_parent_traversal() {
    let dir = TempDir::new().expect("Failed to create temporary directory");
    sample_file(&dir, 5);
    std::fs::create_dir(dir.path().join("sub")).unwrap();

    let mut cmd = cargo_bin_cmd!("fs-read-cli");
    cmd.arg(dir.path().join("sub/../sample.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("parent directory"));
}

#[test]
fn test_rejects_bad_size() {
    let mut cmd = cargo_bin_cmd!("fs-read-cli");
    cmd.args(["--max-size", "lots", "whatever.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid size"));
}
