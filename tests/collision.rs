use file_organizer::{Config, move_file, organize};
use std::fs;
use tempfile::tempdir;

#[test]
fn same_name_moved_twice_keeps_both() {
    let td = tempdir().unwrap();
    let base = td.path();
    let docs = base.join("Documents");
    let cfg = Config::new(base);

    fs::write(base.join("data.csv"), b"first,run").unwrap();
    let first = move_file(&cfg, &base.join("data.csv"), &docs).unwrap();
    assert_eq!(first, docs.join("data.csv"));

    fs::write(base.join("data.csv"), b"second,run").unwrap();
    let second = move_file(&cfg, &base.join("data.csv"), &docs).unwrap();
    assert_ne!(second, first);
    assert_eq!(second.parent(), Some(docs.as_path()));

    let name = second.file_name().unwrap().to_str().unwrap();
    let stamp = name
        .strip_prefix("data_")
        .and_then(|r| r.strip_suffix(".csv"))
        .expect("timestamp-suffixed name");
    assert!(stamp.parse::<u128>().is_ok(), "suffix should be numeric: {name}");

    assert_eq!(fs::read_to_string(&first).unwrap(), "first,run");
    assert_eq!(fs::read_to_string(&second).unwrap(), "second,run");
    assert!(!base.join("data.csv").exists());
}

#[test]
fn organize_does_not_overwrite_existing_category_file() {
    let td = tempdir().unwrap();
    let base = td.path();
    fs::create_dir(base.join("Images")).unwrap();
    fs::write(base.join("Images").join("cat.png"), b"old").unwrap();
    fs::write(base.join("cat.png"), b"new").unwrap();

    let summary = organize(&Config::new(base)).unwrap();
    assert_eq!(summary.moved, 1);

    let mut contents: Vec<String> = fs::read_dir(base.join("Images"))
        .unwrap()
        .map(|e| fs::read_to_string(e.unwrap().path()).unwrap())
        .collect();
    contents.sort();
    assert_eq!(contents, vec!["new".to_string(), "old".to_string()]);
    assert_eq!(fs::read_to_string(base.join("Images").join("cat.png")).unwrap(), "old");
}

#[test]
fn dry_run_reports_suffixed_name_without_moving() {
    let td = tempdir().unwrap();
    let base = td.path();
    let docs = base.join("Documents");
    fs::create_dir(&docs).unwrap();
    fs::write(docs.join("data.csv"), b"kept").unwrap();
    fs::write(base.join("data.csv"), b"pending").unwrap();

    let cfg = Config::new(base).with_dry_run(true);
    let would = move_file(&cfg, &base.join("data.csv"), &docs).unwrap();

    assert_ne!(would, docs.join("data.csv"));
    assert!(!would.exists());
    assert_eq!(fs::read_to_string(base.join("data.csv")).unwrap(), "pending");
    assert_eq!(fs::read_dir(&docs).unwrap().count(), 1);
}
