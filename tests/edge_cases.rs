//! Edge case and error handling tests for dirinfo


use harness::{TestDir, field, parse_records, record_paths, run_dirinfo};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::net::UnixListener;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_file() {
    let dir = TestDir::new();
    dir.add_file("target.txt", "target");
    dir.add_symlink(dir.path().join("target.txt"), "link.txt");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);
    assert!(success, "dirinfo should succeed with symlink");
    assert!(stdout.contains("target.txt"), "should show target file");
    assert!(!stdout.contains("link.txt"), "symlink must not be reported: {}", stdout);
    assert_eq!(field(&parse_records(&stdout)[0], "Files"), Some("1"));
}

#[test]
fn test_symlink_to_directory() {
    let dir = TestDir::new();
    dir.add_file("realdir/file.txt", "file");
    dir.add_symlink(dir.path().join("realdir"), "linkdir");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);
    assert!(success, "dirinfo should succeed with directory symlink");
    assert!(stdout.contains("realdir/"), "should show real directory");
    assert!(!stdout.contains("linkdir"), "should skip linked directory: {}", stdout);
    assert_eq!(field(&parse_records(&stdout)[0], "Directories"), Some("1"));
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.txt", "file");
    dir.add_symlink("..", "subdir/parent");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &["-s"]);
    assert!(success, "dirinfo should not hang on parent symlink");
    assert_eq!(
        record_paths(&parse_records(&stdout)),
        vec!["./", "subdir/", "subdir/file.txt"]
    );
}

#[test]
fn test_broken_symlink() {
    let dir = TestDir::new();
    dir.add_file("real.txt", "real");
    dir.add_symlink("nonexistent.txt", "broken_link.txt");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);
    assert!(success, "dirinfo should handle broken symlinks");
    assert!(stdout.contains("real.txt"));
    assert!(!stdout.contains("broken_link"));
}

#[test]
fn test_root_given_as_symlink_is_reported() {
    let dir = TestDir::new();
    dir.add_file("real/inside.txt", "inside");
    dir.add_symlink(dir.path().join("real"), "alias");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &["alias"]);
    assert!(success);
    assert_eq!(
        record_paths(&parse_records(&stdout)),
        vec!["alias/", "inside.txt"]
    );
}

// ============================================================================
// Special Files
// ============================================================================

#[test]
fn test_socket_is_skipped() {
    let dir = TestDir::new();
    dir.add_file("plain.txt", "plain");
    let _listener = UnixListener::bind(dir.path().join("app.sock")).expect("Failed to bind socket");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);
    assert!(success);
    assert!(!stdout.contains("app.sock"), "socket must not be reported: {}", stdout);
    let records = parse_records(&stdout);
    assert_eq!(records.len(), 2);
    assert_eq!(field(&records[0], "Files"), Some("1"));
}

// ============================================================================
// Permission Errors
// ============================================================================

#[test]
fn test_unreadable_directory_aborts() {
    let dir = TestDir::new();
    dir.add_file("readable/file.txt", "readable");
    let unreadable = dir.add_dir("unreadable");
    fs::write(unreadable.join("hidden.txt"), "hidden").expect("Failed to write file");

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    // Privileged users can read the directory anyway.
    let effective = fs::read_dir(&unreadable).is_err();

    let (stdout, stderr, success) = run_dirinfo(dir.path(), &["--sort"]);

    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    if !effective {
        return;
    }
    assert!(!success, "unreadable directory should abort the report");
    assert!(stderr.contains("permission denied"), "stderr: {}", stderr);
    assert!(!stdout.contains("hidden.txt"));
    // Records written before the failure reach stdout.
    assert_eq!(
        record_paths(&parse_records(&stdout)),
        vec!["./", "readable/", "readable/file.txt"]
    );
}

#[test]
fn test_unreadable_directory_keeps_json_lines() {
    let dir = TestDir::new();
    dir.add_file("first.txt", "1");
    let locked = dir.add_dir("locked");

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&locked, perms).expect("Failed to set permissions");
    let effective = fs::read_dir(&locked).is_err();

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &["--json", "--sort"]);

    let mut perms = fs::metadata(&locked).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&locked, perms).expect("Failed to restore permissions");

    if !effective {
        return;
    }
    assert!(!success);
    let paths: Vec<String> = stdout
        .lines()
        .map(|l| {
            let value: serde_json::Value = serde_json::from_str(l).expect("each line should be JSON");
            value["path"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(paths, vec!["./", "first.txt"]);
}

#[test]
fn test_unreadable_file_still_reported() {
    let dir = TestDir::new();
    let file_path = dir.add_file("secret.txt", "secret contents");

    let mut perms = fs::metadata(&file_path).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&file_path, perms).expect("Failed to set permissions");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);

    let mut perms = fs::metadata(&file_path).unwrap().permissions();
    perms.set_mode(0o644);
    fs::set_permissions(&file_path, perms).expect("Failed to restore permissions");

    assert!(success, "file contents are never read");
    let records = parse_records(&stdout);
    let secret = records
        .iter()
        .find(|r| field(r, "Path") == Some("secret.txt"))
        .expect("secret.txt should be listed");
    assert_eq!(field(secret, "Bytes"), Some("15"));
}

// ============================================================================
// File Name Edge Cases
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("my file.txt", "x");
    dir.add_file("my dir/inner file.txt", "y");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &["-s"]);
    assert!(success);
    assert_eq!(
        record_paths(&parse_records(&stdout)),
        vec!["./", "my dir/", "my dir/inner file.txt", "my file.txt"]
    );
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.txt", "ユニコード");
    dir.add_file("émoji_🎉/naïve.txt", "x");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("Path: 日本語.txt\n"));
    assert!(stdout.contains("Path: émoji_🎉/naïve.txt\n"));
    assert!(stdout.contains("Bytes: 15\n"), "UTF-8 byte length expected: {}", stdout);
}

#[test]
fn test_empty_file() {
    let dir = TestDir::new();
    dir.add_file("empty.txt", "");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);
    assert!(success);
    let records = parse_records(&stdout);
    assert_eq!(field(&records[1], "Bytes"), Some("0"));
    assert_eq!(field(&records[0], "Files"), Some("1"));
}

// ============================================================================
// Directory Structure Edge Cases
// ============================================================================

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);
    assert!(success);
    let records = parse_records(&stdout);
    assert_eq!(records.len(), 1);
    assert_eq!(field(&records[0], "Files"), Some("0"));
    assert_eq!(field(&records[0], "Directories"), Some("0"));
    assert_eq!(field(&records[0], "Bytes"), Some("0"));
}

#[test]
fn test_very_deep_nesting() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d/e/f/g/h/i/j/deep.txt", "deep");

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);
    assert!(success);
    let records = parse_records(&stdout);
    assert_eq!(record_paths(&records), vec!["./", "a/"]);
    assert_eq!(field(&records[1], "Directories"), Some("1"));
}

#[test]
fn test_directory_size_is_shallow() {
    let dir = TestDir::new();
    dir.add_file("sub/small.txt", "12345");
    dir.add_file("sub/nested/big.txt", &"x".repeat(10_000));

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &[]);
    assert!(success);
    let records = parse_records(&stdout);
    assert_eq!(field(&records[0], "Bytes"), Some("0"));
    let sub = records
        .iter()
        .find(|r| field(r, "Path") == Some("sub/"))
        .unwrap();
    assert_eq!(field(sub, "Bytes"), Some("5"));
}

#[test]
fn test_many_files_in_directory() {
    let dir = TestDir::new();
    for i in 0..200 {
        dir.add_file(&format!("file_{:03}.txt", i), "content");
    }

    let (stdout, _stderr, success) = run_dirinfo(dir.path(), &["--sort"]);
    assert!(success);
    let records = parse_records(&stdout);
    assert_eq!(records.len(), 201);
    assert_eq!(field(&records[0], "Files"), Some("200"));
    assert_eq!(field(&records[0], "Bytes"), Some("1400"));
    assert_eq!(field(&records[1], "Path"), Some("file_000.txt"));
    assert_eq!(field(&records[200], "Path"), Some("file_199.txt"));
}
