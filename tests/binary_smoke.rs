use assert_cmd::cargo;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn bin() -> Command {
    Command::new(cargo::cargo_bin!("file_organizer"))
}

#[test]
fn zero_workers_rejected() {
    let out = bin().args(["--workers", "0"]).output().expect("spawn binary");
    assert!(!out.status.success());
}

#[test]
fn help_succeeds() {
    let out = bin().arg("--help").output().expect("spawn binary");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--dry-run"), "help: {stdout}");
}

#[test]
fn organizes_directory_and_prints_summary() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("report.pdf"), b"pdf").unwrap();
    fs::write(td.path().join("photo.jpg"), b"jpg").unwrap();
    fs::write(td.path().join("notes.txt"), b"txt").unwrap();
    fs::write(td.path().join(".env"), b"X=1").unwrap();

    let out = bin().arg(td.path()).output().unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Execution Summary"), "stdout: {stdout}");
    assert!(stdout.contains("Files moved:   3"), "stdout: {stdout}");
    assert!(stdout.contains("Failed:        0"), "stdout: {stdout}");

    assert!(td.path().join("Documents").join("report.pdf").is_file());
    assert!(td.path().join("Documents").join("notes.txt").is_file());
    assert!(td.path().join("Images").join("photo.jpg").is_file());
    assert!(td.path().join(".env").is_file());
}

#[test]
fn dir_flag_and_dry_run() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("song.mp3"), b"mp3").unwrap();

    let out = bin()
        .args(["--dry-run", "--dir"])
        .arg(td.path())
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("DRY RUN MODE"), "stdout: {stdout}");
    assert!(stdout.contains("would move"), "stdout: {stdout}");
    assert!(stdout.contains("Would move:    1"), "stdout: {stdout}");
    assert!(td.path().join("song.mp3").is_file());
    assert!(!td.path().join("Audio").exists());
}

#[test]
fn missing_directory_exits_non_zero() {
    let td = tempdir().unwrap();
    let out = bin().arg(td.path().join("does-not-exist")).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not found"), "stderr: {stderr}");
}

#[test]
fn file_instead_of_directory_exits_non_zero() {
    let td = tempdir().unwrap();
    let f = td.path().join("plain.txt");
    fs::write(&f, b"x").unwrap();
    let out = bin().arg(&f).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not a directory"), "stderr: {stderr}");
    assert!(f.is_file());
}

#[test]
fn json_logs_and_log_file() {
    let td = tempdir().unwrap();
    let inbox = td.path().join("inbox");
    fs::create_dir(&inbox).unwrap();
    fs::write(inbox.join("a.zip"), b"zip").unwrap();
    let canon = fs::canonicalize(td.path()).unwrap();
    let log = canon.join("logs").join("run.log");

    let out = bin()
        .arg("--json")
        .arg("--verbose")
        .arg("--log-file")
        .arg(&log)
        .arg(&inbox)
        .output()
        .unwrap();
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.lines().any(|l| l.starts_with('{') && l.contains("\"level\"")),
        "expected JSON log lines, got: {stdout}"
    );
    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("Moved file"), "log file: {logged}");
    assert!(inbox.join("Archives").join("a.zip").is_file());
}
