//! Integration tests for the init workflow.
//!
//! Tests the bootstrap of an empty working copy into the canonical layout,
//! and that a second run changes nothing.

use std::path::{Path, PathBuf};
use svnflow_core::tools::fs::FsAdapter;
use svnflow_core::tools::fs_mock::MockFsAdapter;
use svnflow_core::tools::svn::SvnAdapter;
use svnflow_core::tools::svn_mock::{MockSvnAdapter, SvnCall};
use svnflow_core::{FlowConfig, FlowError, FlowRuntime, ToolRegistry};

fn mock_runtime() -> (FlowRuntime, MockFsAdapter, MockSvnAdapter) {
    let fs = MockFsAdapter::new();
    let svn = MockSvnAdapter::new("/wc", fs.clone());
    let tools = ToolRegistry::new(Box::new(fs.clone()), Box::new(svn.clone()));
    let runtime = FlowRuntime::with_tools(FlowConfig::new(PathBuf::from("/wc")), tools);
    (runtime, fs, svn)
}

#[test]
fn test_bootstrap_scenario() {
    let (runtime, fs, svn) = mock_runtime();

    let summary = runtime.init().unwrap();
    assert!(summary.skipped.is_empty());

    // Each directory is created and committed on its own, develop as a copy
    let mutations = svn.mutations();
    assert_eq!(mutations.len(), 15);
    assert_eq!(
        mutations[6],
        SvnCall::Copy {
            source: PathBuf::from("trunk"),
            target: PathBuf::from("branches/develop"),
        }
    );
    assert_eq!(mutations.last(), Some(&SvnCall::Update));
    assert_eq!(svn.command_count("commit"), 7);
    assert_eq!(svn.command_count("update"), 1);

    // Seven tracked directories
    for dir in [
        "trunk",
        "tags",
        "branches",
        "branches/develop",
        "branches/feature",
        "branches/release",
        "branches/hotfix",
    ] {
        assert!(svn.is_tracked(Path::new(dir)), "{dir} should be tracked");
        assert!(fs.is_dir(&Path::new("/wc").join(dir)), "{dir} should exist");
    }
}

#[test]
fn test_init_idempotent() {
    let (runtime, _fs, svn) = mock_runtime();

    runtime.init().unwrap();
    svn.clear_history();

    // Second init only skips and updates
    let summary = runtime.init().unwrap();

    assert!(summary.created.is_empty());
    assert_eq!(summary.skipped.len(), 7);
    assert_eq!(svn.mutations(), vec![SvnCall::Update]);
}

#[test]
fn test_init_completes_partial_layout() {
    let (runtime, fs, svn) = mock_runtime();
    fs.create_dir_all(Path::new("/wc/trunk"));
    svn.track("trunk");
    fs.create_dir_all(Path::new("/wc/branches"));
    svn.track("branches");

    let summary = runtime.init().unwrap();

    assert_eq!(
        summary.skipped,
        vec![PathBuf::from("trunk"), PathBuf::from("branches")]
    );
    assert_eq!(
        summary.created,
        vec![
            PathBuf::from("tags"),
            PathBuf::from("branches/develop"),
            PathBuf::from("branches/feature"),
            PathBuf::from("branches/release"),
            PathBuf::from("branches/hotfix"),
        ]
    );
}

#[test]
fn test_init_rejects_file_in_place_of_directory() {
    let (runtime, fs, svn) = mock_runtime();
    fs.create_file(Path::new("/wc/trunk"));
    svn.track("trunk");

    let result = runtime.init();

    assert!(matches!(result, Err(FlowError::InvalidPath { .. })));
    assert!(svn.mutations().is_empty());
}

#[test]
fn test_init_propagates_svn_failure() {
    let (runtime, _fs, svn) = mock_runtime();
    svn.fail_on("mkdir");

    let result = runtime.init();

    assert!(matches!(result, Err(FlowError::SvnCommandFailed(_))));
    assert_eq!(svn.command_count("commit"), 0);
}
