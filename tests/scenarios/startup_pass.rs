//! Scenario: Starting the dev server
//!
//! Journey: A developer runs `rsw watch` in a project with several crates.
//!
//! Steps:
//! 1. Crates dropped from the configuration are unlinked
//! 2. Stale crates are built, blocking, with inherited output
//! 3. Fresh crates are skipped
//! 4. Every crate is unlinked then linked in one batch
//!
//! Success Criteria:
//! - Exactly one unlink batch before exactly one link batch
//! - A broken crate stops the pass before anything is linked

use rsw::domain::entities::CrateSpec;
use rsw::domain::value_objects::{CliFlavor, Profile};
use rsw::RswError;

use crate::common::*;

#[test]
fn scenario_startup_orders_unlink_build_link() {
    let project = TestProject::new();
    project.add_crate("foo").add_crate("bar").add_crate("baz");
    project.publish("bar");

    let mut config = project.config(&["foo", "bar", "baz"]);
    config.unlinks = vec!["legacy".to_string(), "@org/old".to_string()];
    let mut router = project.router(&config);

    let table = router.startup().unwrap().clone();

    let npm = CliFlavor::Npm.program();
    assert_eq!(
        project.runner.heads(),
        [
            format!("{npm} unlink"),
            "wasm-pack build".to_string(),
            "wasm-pack build".to_string(),
            format!("{npm} unlink"),
            format!("{npm} link"),
        ]
    );

    let runs = project.runner.runs();
    assert_eq!(runs[0].command.args, ["unlink", "legacy", "@org/old"]);
    assert_eq!(runs[1].command.cwd, project.path("foo"));
    assert_eq!(runs[2].command.cwd, project.path("baz"));
    assert!(runs[1].inherited && runs[2].inherited);
    assert_eq!(runs[3].command.args, ["unlink", "-g", "foo", "bar", "baz"]);
    assert_eq!(runs[4].command.cwd, project.root());

    assert_eq!(table.len(), 3);
    assert_eq!(
        table.dirs().collect::<Vec<_>>(),
        [
            project.path("foo/pkg"),
            project.path("bar/pkg"),
            project.path("baz/pkg"),
        ]
    );
}

#[test]
fn scenario_scoped_crate_with_global_release_profile() {
    let project = TestProject::new();
    project.add_crate("@org/foo");

    let mut config = project.config(&[]);
    config.profile = Some(Profile::Release);
    config.crates = vec![CrateSpec::named("@org/foo")];
    let mut router = project.router(&config);

    let table = router.startup().unwrap().clone();

    let build = &project.runner.runs()[0];
    assert_eq!(build.command.cwd, project.path("@org/foo"));
    assert_eq!(
        build.command.command_line(),
        "wasm-pack build --out-name org~foo --scope org --release --target web"
    );
    assert_eq!(table.get("@org/foo"), Some(project.path("@org/foo/pkg").as_path()));
}

#[test]
fn scenario_failed_startup_build_stops_before_linking() {
    let project = TestProject::new();
    project.add_crate("foo").add_crate("baz").add_crate("qux");
    project.runner.fail_in("baz", 1, "");
    let mut router = project.router(&project.config(&["foo", "baz", "qux"]));

    let err = router.startup().unwrap_err();

    assert!(matches!(err, RswError::BuildFailed { ref crate_name, code: Some(1) } if crate_name == "baz"));
    assert_eq!(project.runner.heads(), ["wasm-pack build", "wasm-pack build"]);
    assert!(router.link_table().is_empty());
    assert!(project.transport.events().is_empty());
}

#[test]
fn scenario_fresh_project_only_relinks() {
    let project = TestProject::new();
    project.add_crate("foo").publish("foo");
    let mut router = project.router(&project.config(&["foo"]));

    router.startup().unwrap();

    assert!(project
        .runner
        .heads()
        .iter()
        .all(|head| !head.starts_with("wasm-pack")));
    assert_eq!(project.runner.runs().len(), 2);
}
