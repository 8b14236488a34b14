// tests/exec_resolve.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use srtlactl::exec::{ExecResolveSpec, resolve_exec};
use srtlactl::fs::RealFileSystem;
use srtlactl::fs::mock::MockFileSystem;
use srtlactl_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn spec<'a>(
    exec_path: Option<&'a Path>,
    system_path: Option<&'a Path>,
) -> ExecResolveSpec<'a> {
    ExecResolveSpec {
        exec_path,
        binary_name: "srtla_send",
        system_path,
    }
}

/// An `exec_path` that is an existing regular file wins over everything.
#[test]
fn explicit_file_is_used_directly() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file("/opt/custom/my_sender", b"".to_vec());
    fs.add_file("/usr/bin/srtla_send", b"".to_vec());

    let resolved = resolve_exec(
        &fs,
        &spec(
            Some(Path::new("/opt/custom/my_sender")),
            Some(Path::new("/usr/bin/srtla_send")),
        ),
    );
    assert_eq!(resolved, PathBuf::from("/opt/custom/my_sender"));
}

/// An `exec_path` directory gets the binary name appended when the joined
/// path exists.
#[test]
fn directory_is_joined_with_binary_name() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_dir("/opt/srtla");
    fs.add_file("/opt/srtla/srtla_send", b"".to_vec());

    let resolved = resolve_exec(&fs, &spec(Some(Path::new("/opt/srtla")), None));
    assert_eq!(resolved, PathBuf::from("/opt/srtla/srtla_send"));
}

/// When nothing under `exec_path` exists, the joined path is still returned
/// as a best guess; the eventual spawn surfaces the not-found error.
#[test]
fn missing_join_still_returns_best_guess() {
    init_tracing();

    let fs = MockFileSystem::new();
    let resolved = resolve_exec(&fs, &spec(Some(Path::new("/nonexistent/dir")), None));
    assert_eq!(resolved, PathBuf::from("/nonexistent/dir/srtla_send"));
}

/// No double-append: an `exec_path` already ending with the binary name is
/// returned unchanged even when it doesn't exist.
#[test]
fn no_double_append_when_path_ends_with_binary_name() {
    init_tracing();

    let fs = MockFileSystem::new();
    let resolved = resolve_exec(
        &fs,
        &spec(Some(Path::new("/nonexistent/srtla_send")), None),
    );
    assert_eq!(resolved, PathBuf::from("/nonexistent/srtla_send"));
}

/// Without an override, an existing system path is used.
#[test]
fn system_path_is_used_when_it_exists() {
    init_tracing();

    let fs = MockFileSystem::new();
    fs.add_file("/usr/bin/srtla_send", b"".to_vec());

    let resolved = resolve_exec(&fs, &spec(None, Some(Path::new("/usr/bin/srtla_send"))));
    assert_eq!(resolved, PathBuf::from("/usr/bin/srtla_send"));
}

/// With no override and no existing system path, resolution degrades to the
/// bare binary name so the spawn mechanism's PATH search decides.
#[test]
fn falls_back_to_bare_binary_name() {
    init_tracing();

    let fs = MockFileSystem::new();
    let resolved = resolve_exec(&fs, &spec(None, Some(Path::new("/usr/bin/srtla_send"))));
    assert_eq!(resolved, PathBuf::from("srtla_send"));
}

/// Same policy against the real filesystem, using a temp dir.
#[test]
fn resolves_against_real_filesystem() -> TestResult {
    init_tracing();

    let dir = tempfile::tempdir()?;
    let binary = dir.path().join("srtla_send");
    std::fs::write(&binary, b"#!/bin/sh\n")?;

    let fs = RealFileSystem;

    // Directory join finds the file.
    let resolved = resolve_exec(&fs, &spec(Some(dir.path()), None));
    assert_eq!(resolved, binary);

    // Direct file reference is returned unchanged.
    let resolved = resolve_exec(&fs, &spec(Some(&binary), None));
    assert_eq!(resolved, binary);

    Ok(())
}
