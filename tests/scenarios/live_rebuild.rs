//! Scenario: Editing a crate while the dev server runs
//!
//! Journey: After startup, the developer edits crate sources.
//!
//! Steps:
//! 1. A saved source file triggers an async build of its crate only
//! 2. A successful build clears the dev-server error overlay
//! 3. A failed build shows the compiler error, attributed to the saved file
//! 4. Watching continues after a failure
//!
//! Success Criteria:
//! - Dev-server events match the wire schema exactly

use std::time::Duration;

use rsw::application::RouteOutcome;
use serde_json::json;

use crate::common::*;

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn scenario_successful_rebuild_closes_overlay() {
    let project = TestProject::new();
    project.add_crate("foo").add_crate("bar");
    let mut router = project.router(&project.config(&["foo", "bar"]));

    let outcome = router.handle_change(&project.path("bar/src/lib.rs")).unwrap();
    assert!(matches!(outcome, RouteOutcome::Built { ref started, .. } if started.len() == 1));

    router.recv_completion(WAIT).unwrap();

    assert_eq!(project.transport.json(), [json!({"type": "custom", "event": "rsw-error-close"})]);
    let runs = project.runner.runs();
    assert_eq!(runs.len(), 1);
    assert!(!runs[0].inherited);
    assert_eq!(runs[0].command.cwd, project.path("bar"));
}

#[test]
fn scenario_failed_rebuild_reports_error_and_keeps_watching() {
    let project = TestProject::new();
    project.add_crate("bar");
    project.runner.fail_in("bar", 1, RUSTC_E0425);
    let mut router = project.router(&project.config(&["bar"]));
    let saved = project.path("bar/src/lib.rs");

    router.handle_change(&saved).unwrap();
    router.recv_completion(WAIT).unwrap();

    assert_eq!(
        project.transport.json(),
        [json!({
            "type": "custom",
            "event": "rsw-error",
            "data": {
                "plugin": "[rsw]",
                "message": "error[E0425]: cannot find value `x` in this scope",
                "id": saved.display().to_string(),
                "console": RUSTC_E0425,
            }
        })]
    );

    // The next save still builds.
    router.handle_change(&saved).unwrap();
    assert!(router.recv_completion(WAIT).is_some());
    assert_eq!(project.transport.events().len(), 2);
}

#[test]
fn scenario_manifest_edit_rebuilds_crate() {
    let project = TestProject::new();
    project.add_crate("foo");
    let mut router = project.router(&project.config(&["foo"]));

    let outcome = router.handle_change(&project.path("foo/Cargo.toml")).unwrap();
    assert!(matches!(outcome, RouteOutcome::Built { .. }));
    let completion = router.recv_completion(WAIT).unwrap();

    assert_eq!(completion.trigger, project.path("foo/Cargo.toml"));
}

#[test]
fn scenario_output_and_unrelated_files_are_ignored() {
    let project = TestProject::new();
    project.add_crate("foo");
    let mut router = project.router(&project.config(&["foo"]));

    for rel in ["foo/pkg/foo_bg.wasm", "foo/target/debug/build.log", "index.html"] {
        assert_eq!(
            router.handle_change(&project.path(rel)).unwrap(),
            RouteOutcome::Ignored
        );
    }
    assert!(project.runner.runs().is_empty());
}
