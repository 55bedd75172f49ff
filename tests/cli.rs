mod common;

use assert_cmd::Command;
use common::{bulletin_cover, listing, write_file, CANONICAL_AUGUST, GUID_CANONICAL, GUID_NAME};
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("banxico-renamer").unwrap();
    cmd.env_remove("BANXICO_LIBRARY_DIR").env("RUST_LOG", "info");
    cmd
}

#[test]
fn renames_and_prints_summary() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), GUID_NAME, &bulletin_cover("NOVIEMBRE 2024"));
    write_file(dir.path(), CANONICAL_AUGUST, &bulletin_cover("AGOSTO 2024"));

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("2 files, Renamed: 1, Skipped: 1, Errors: 0"))
        .stdout(contains(GUID_CANONICAL));

    assert_eq!(listing(dir.path()), vec![CANONICAL_AUGUST, GUID_CANONICAL]);
}

#[test]
fn dry_run_leaves_directory_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), GUID_NAME, &bulletin_cover("NOVIEMBRE 2024"));

    cmd()
        .arg(dir.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(contains("Would rename: 1"))
        .stdout(contains("DRY RUN"));

    assert_eq!(listing(dir.path()), vec![GUID_NAME]);
}

#[test]
fn per_file_errors_still_exit_zero() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "202401_0001.pdf", b"not a pdf");

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(contains("Errors: 1"))
        .stderr(contains("unreadable PDF"));
}

#[test]
fn missing_directory_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg(dir.path().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stderr(contains("directory not found"));
}

#[test]
fn directory_can_come_from_env() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), GUID_NAME, &bulletin_cover("NOVIEMBRE 2024"));

    cmd()
        .env("BANXICO_LIBRARY_DIR", dir.path())
        .assert()
        .success()
        .stdout(contains("Renamed: 1"));

    assert_eq!(listing(dir.path()), vec![GUID_CANONICAL]);
}

#[test]
fn inspect_shows_cover_text_and_date() {
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), GUID_NAME, &bulletin_cover("NOVIEMBRE 2024"));

    cmd()
        .arg(dir.path())
        .arg("--inspect")
        .assert()
        .success()
        .stdout(contains("needs rename"))
        .stdout(contains("Boletin de la Biblioteca"))
        .stdout(contains("2024-11 (Noviembre)"));

    assert_eq!(listing(dir.path()), vec![GUID_NAME]);
}
