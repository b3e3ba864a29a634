use assert_fs::prelude::*;
use file_organizer::{Category, Classifier, Config, ExtensionTable, organize, organize_with};
use std::fs;

#[test]
fn mixed_directory_is_sorted_and_hidden_file_untouched() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("report.pdf").write_str("pdf").unwrap();
    temp.child("photo.jpg").write_str("jpg").unwrap();
    temp.child("notes.txt").write_str("txt").unwrap();
    temp.child(".env").write_str("SECRET=1").unwrap();

    let summary = organize(&Config::new(temp.path())).unwrap();

    assert_eq!(summary.moved, 3);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.total_bytes, 9);
    temp.child("Documents/report.pdf").assert("pdf");
    temp.child("Documents/notes.txt").assert("txt");
    temp.child("Images/photo.jpg").assert("jpg");
    assert_eq!(fs::read_to_string(temp.path().join(".env")).unwrap(), "SECRET=1");
}

#[test]
fn many_files_all_moved_exactly_once() {
    let temp = assert_fs::TempDir::new().unwrap();
    let exts = ["png", "pdf", "mp3", "mp4", "zip", "py", "exe", "ttf", "zzz"];
    let n = 450;
    for i in 0..n {
        let ext = exts[i % exts.len()];
        temp.child(format!("file_{i:04}.{ext}")).write_str(&i.to_string()).unwrap();
    }

    let mut cfg = Config::new(temp.path());
    cfg.workers = 8;
    cfg.queue_capacity = 4;
    let summary = organize(&cfg).unwrap();

    assert_eq!(summary.moved, n as u64);
    assert_eq!(summary.failed, 0);

    let mut moved = 0;
    for entry in fs::read_dir(temp.path()).unwrap() {
        let entry = entry.unwrap();
        assert!(
            entry.file_type().unwrap().is_dir(),
            "file left at top level: {:?}",
            entry.file_name()
        );
        moved += fs::read_dir(entry.path()).unwrap().count();
    }
    assert_eq!(moved, n);
    assert!(temp.path().join("Others").join("file_0008.zzz").is_file());
    assert!(temp.path().join("Fonts").join("file_0007.ttf").is_file());
}

#[test]
fn dry_run_creates_nothing_and_moves_nothing() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("report.pdf").write_str("pdf").unwrap();
    temp.child("song.flac").write_str("flac").unwrap();

    let cfg = Config::new(temp.path()).with_dry_run(true);
    let summary = organize(&cfg).unwrap();

    assert_eq!(summary.moved, 2);
    assert_eq!(summary.total_bytes, 7);
    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 2, "unexpected entries: {names:?}");
    assert!(temp.path().join("report.pdf").is_file());
    assert!(temp.path().join("song.flac").is_file());
    assert!(!temp.path().join("Documents").exists());
    assert!(!temp.path().join("Audio").exists());
}

#[test]
fn second_run_is_a_no_op() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("a").unwrap();

    let first = organize(&Config::new(temp.path())).unwrap();
    assert_eq!(first.moved, 1);

    let second = organize(&Config::new(temp.path())).unwrap();
    assert_eq!(second.moved, 0);
    assert_eq!(second.skipped, 1); // the Documents folder
    assert!(temp.path().join("Documents").join("a.txt").is_file());
}

#[test]
fn source_that_is_a_file_fails_fast() {
    let temp = assert_fs::TempDir::new().unwrap();
    let f = temp.child("plain.txt");
    f.write_str("x").unwrap();
    let err = organize(&Config::new(f.path())).unwrap_err();
    assert!(err.is_fatal());
    assert!(f.path().is_file());
}

#[cfg(unix)]
#[test]
fn unwritable_source_counts_failures_but_succeeds() {
    use std::os::unix::fs::PermissionsExt;

    // Root ignores directory permissions; nothing to observe there.
    if unsafe { libc::geteuid() } == 0 {
        return;
    }

    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("a.txt").write_str("a").unwrap();
    temp.child("b.png").write_str("b").unwrap();
    fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o555)).unwrap();

    let result = organize(&Config::new(temp.path()));

    fs::set_permissions(temp.path(), fs::Permissions::from_mode(0o755)).unwrap();
    let summary = result.unwrap();
    assert_eq!(summary.moved, 0);
    assert_eq!(summary.failed, 2);
    assert!(temp.path().join("a.txt").is_file());
}

#[test]
fn blocked_category_fails_only_its_files() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("report.pdf").write_str("pdf").unwrap();
    temp.child("photo.jpg").write_str("jpg").unwrap();
    temp.child("main.rs").write_str("fn main() {}").unwrap();
    // A regular file sits where the Others folder would be created. It has no
    // extension, so it is an Others task itself and fails the same way.
    temp.child("Others").write_str("not a folder").unwrap();

    let classifier = Classifier::new(ExtensionTable::from_mappings(&[
        (Category::Documents, &["pdf"]),
        (Category::Images, &["jpg"]),
    ]));
    let summary = organize_with(&Config::new(temp.path()), &classifier).unwrap();

    assert_eq!(summary.moved, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.skipped, 0);
    temp.child("Documents/report.pdf").assert("pdf");
    temp.child("Images/photo.jpg").assert("jpg");
    temp.child("main.rs").assert("fn main() {}");
    temp.child("Others").assert("not a folder");
}
