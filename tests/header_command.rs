use crate::common::command::{repository_dir, run_gitdex_command, write_index, write_index_bytes};
use crate::common::index::IndexBuilder;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
#[case(2, 1)]
#[case(3, 4)]
fn print_header(repository_dir: TempDir, #[case] version: u32, #[case] count: usize) {
    let builder = (0..count).fold(IndexBuilder::new().version(version), |builder, i| {
        builder.file(&format!("file-{i}"))
    });
    write_index(&repository_dir, &builder);

    run_gitdex_command(repository_dir.path(), &["header"])
        .assert()
        .success()
        .stdout(String::from(format!(
            "signature: DIRC\nversion:   {version}\nentries:   {count}\n"
        )));
}

#[rstest]
fn print_header_of_index_with_broken_entries(repository_dir: TempDir) {
    // header declares 9 entries but nothing follows
    write_index_bytes(&repository_dir, b"DIRC\x00\x00\x00\x02\x00\x00\x00\x09garbage");

    run_gitdex_command(repository_dir.path(), &["header"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entries:   9"));
}

#[rstest]
fn strict_header_rejects_foreign_signature(repository_dir: TempDir) {
    write_index(&repository_dir, &IndexBuilder::new().signature(b"RIFF"));

    run_gitdex_command(repository_dir.path(), &["--strict", "header"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index file signature"));

    run_gitdex_command(repository_dir.path(), &["header"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("signature: RIFF\n"));
}

#[rstest]
fn strict_header_rejects_unsupported_version(repository_dir: TempDir) {
    write_index(&repository_dir, &IndexBuilder::new().version(7).file("a.txt"));

    run_gitdex_command(repository_dir.path(), &["--strict", "header"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unsupported index file version: 7"));
}

#[rstest]
fn header_warns_like_show(repository_dir: TempDir) {
    write_index(
        &repository_dir,
        &IndexBuilder::new().signature(b"RIFF").version(7),
    );

    run_gitdex_command(repository_dir.path(), &["header"])
        .assert()
        .success()
        .stdout(String::from(
            "signature: RIFF\nversion:   7\nentries:   0\n\
             warning: unexpected index signature 'RIFF'\n\
             warning: unsupported index version 7\n",
        ));
}
