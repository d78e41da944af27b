//! Property tests for scoped output names.

use proptest::prelude::*;

use rsw::domain::value_objects::{CrateName, SCOPE_SEPARATOR};

fn scope() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,8}"
}

fn local() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the out-name of a scoped crate reconstructs the crate name.
    #[test]
    fn property_scoped_out_name_is_reversible(scope in scope(), local in local()) {
        let name = CrateName::new(format!("@{scope}/{local}"));
        let out_name = name.out_name();

        prop_assert_eq!(&out_name, &format!("{scope}{SCOPE_SEPARATOR}{local}"));
        prop_assert_eq!(CrateName::from_out_name(&out_name), name);
    }

    /// PROPERTY: unscoped names pass through untouched.
    #[test]
    fn property_unscoped_out_name_is_identity(local in local()) {
        let name = CrateName::new(local.clone());

        prop_assert!(!name.is_scoped());
        prop_assert_eq!(name.out_name(), local);
        prop_assert_eq!(CrateName::from_out_name(&name.out_name()), name);
    }

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_parse_never_panics(raw in "(?s).{0,64}") {
        let name = CrateName::new(raw);
        let _ = name.out_name();
        let _ = name.local_name();
    }
}
