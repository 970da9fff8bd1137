use crate::common::index::IndexBuilder;
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::{FileWriteBin, PathChild, PathCreateDir};
use rstest::fixture;
use std::path::{Path, PathBuf};

#[fixture]
pub fn repository_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

/// Write `builder`'s bytes to `<dir>/.git/index` and return that path
pub fn write_index(dir: &TempDir, builder: &IndexBuilder) -> PathBuf {
    write_index_bytes(dir, &builder.build())
}

pub fn write_index_bytes(dir: &TempDir, bytes: &[u8]) -> PathBuf {
    let git_dir = dir.child(".git");
    git_dir
        .create_dir_all()
        .expect("Failed to create .git directory");

    let index = git_dir.child("index");
    index
        .write_binary(bytes)
        .expect("Failed to write index file");
    index.path().to_path_buf()
}

pub fn run_gitdex_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitdex").expect("Failed to find gitdex binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("GITDEX_STRICT");
    cmd.env_remove("GITDEX_MAX_SIZE");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
