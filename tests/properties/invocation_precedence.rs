//! Property tests for build argument precedence.

use proptest::prelude::*;

use rsw::domain::entities::CrateSpec;
use rsw::domain::services::{BuildDefaults, BuildInvocation, DEFAULT_TARGET};
use rsw::domain::value_objects::Profile;

fn profile() -> impl Strategy<Value = Option<Profile>> {
    prop::option::of(prop::sample::select(Profile::ALL.to_vec()))
}

fn target() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z][a-z0-9-]{0,9}")
}

fn extra_args() -> impl Strategy<Value = Vec<String>> {
    // Prefixed so they never collide with flags the invocation derives.
    proptest::collection::vec("--x-[a-z]{1,8}", 0..4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: crate values beat global defaults, which beat built-ins.
    #[test]
    fn property_most_specific_value_wins(
        global_profile in profile(),
        global_target in target(),
        crate_profile in profile(),
        crate_target in target(),
        mode in prop::option::of("[a-z][a-z-]{0,11}"),
        extra in extra_args(),
    ) {
        let defaults = BuildDefaults {
            profile: global_profile,
            target: global_target.clone(),
        };
        let mut spec = CrateSpec::named("foo").with_extra_args(extra.clone());
        spec.profile = crate_profile;
        spec.target = crate_target.clone();
        spec.mode = mode.clone();

        let invocation = BuildInvocation::derive(&defaults, &spec);

        let expected_profile = crate_profile.or(global_profile).unwrap_or(Profile::Dev);
        prop_assert_eq!(invocation.profile(), expected_profile);
        prop_assert!(invocation.has_flag(expected_profile.flag()));
        for other in Profile::ALL.iter().filter(|p| **p != expected_profile) {
            prop_assert!(!invocation.has_flag(other.flag()));
        }

        let expected_target = crate_target
            .or(global_target)
            .unwrap_or_else(|| DEFAULT_TARGET.to_string());
        prop_assert_eq!(invocation.value_of("--target"), Some(expected_target.as_str()));

        prop_assert_eq!(invocation.value_of("--mode"), mode.as_deref());
        prop_assert_eq!(&invocation.args()[0], "build");
        prop_assert!(invocation.args().ends_with(&extra));
    }

    /// PROPERTY: derivation is a pure function of its inputs.
    #[test]
    fn property_derivation_is_deterministic(
        global_profile in profile(),
        crate_target in target(),
        extra in extra_args(),
    ) {
        let defaults = BuildDefaults { profile: global_profile, target: None };
        let mut spec = CrateSpec::named("@org/foo").with_extra_args(extra);
        spec.target = crate_target;

        prop_assert_eq!(
            BuildInvocation::derive(&defaults, &spec),
            BuildInvocation::derive(&defaults, &spec)
        );
    }
}
