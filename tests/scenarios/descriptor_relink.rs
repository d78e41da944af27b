//! Scenario: Changing the host project's dependencies
//!
//! Journey: While the dev server runs, the developer edits `package.json`.
//!
//! Steps:
//! 1. Saving without touching dependencies does nothing
//! 2. Adding a dependency relinks every crate once, without building
//! 3. A broken `package.json` is reported as an error
//!
//! Success Criteria:
//! - Unchanged dependency sets never relink

use rsw::application::RouteOutcome;
use rsw::RswError;

use crate::common::*;

#[test]
fn scenario_dependency_change_relinks_exactly_once() {
    let project = TestProject::new();
    project.add_crate("foo").publish("foo");
    let descriptor = project.write("package.json", PACKAGE_JSON);
    let mut router = project.router(&project.config(&["foo"]));
    router.startup().unwrap();
    let baseline = project.runner.runs().len();

    project.write("package.json", PACKAGE_JSON_NEW_SCRIPTS);
    assert_eq!(
        router.handle_change(&descriptor).unwrap(),
        RouteOutcome::DependenciesUnchanged
    );
    assert_eq!(project.runner.runs().len(), baseline);

    project.write("package.json", PACKAGE_JSON_ADDED_DEP);
    assert_eq!(router.handle_change(&descriptor).unwrap(), RouteOutcome::Relinked);
    assert_eq!(
        router.handle_change(&descriptor).unwrap(),
        RouteOutcome::DependenciesUnchanged
    );

    let relink = &project.runner.heads()[baseline..];
    assert_eq!(relink.len(), 2);
    assert!(relink[0].ends_with("unlink"));
    assert!(relink[1].ends_with("link"));
}

#[test]
fn scenario_removed_dependency_relinks() {
    let project = TestProject::new();
    project.add_crate("foo").publish("foo");
    let descriptor = project.write("package.json", PACKAGE_JSON_ADDED_DEP);
    let mut router = project.router(&project.config(&["foo"]));
    router.startup().unwrap();

    project.write("package.json", PACKAGE_JSON);

    assert_eq!(router.handle_change(&descriptor).unwrap(), RouteOutcome::Relinked);
}

#[test]
fn scenario_malformed_descriptor_is_an_error() {
    let project = TestProject::new();
    project.add_crate("foo").publish("foo");
    let descriptor = project.write("package.json", PACKAGE_JSON);
    let mut router = project.router(&project.config(&["foo"]));
    router.startup().unwrap();

    project.write("package.json", "{ \"dependencies\": ");

    let err = router.handle_change(&descriptor).unwrap_err();
    assert!(matches!(err, RswError::PackageJson { .. }));
}
