//! Build invocation derivation
//!
//! Turns the global build defaults and one crate's overrides into the ordered
//! wasm-pack argument list. Precedence, most specific wins:
//!
//! - profile: crate > global > `dev`
//! - target: crate > global > `web`
//! - mode, extra args: crate only

use crate::domain::entities::CrateSpec;
use crate::domain::value_objects::Profile;

use super::command_line::{quote, quote_if_needed};

/// External build tool.
pub const BUILD_TOOL: &str = "wasm-pack";

/// Target used when neither the crate nor the global config sets one.
pub const DEFAULT_TARGET: &str = "web";

/// Global defaults that apply to every crate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildDefaults {
    pub profile: Option<Profile>,
    pub target: Option<String>,
}

/// Arguments for one wasm-pack run. Derived fresh for every build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInvocation {
    args: Vec<String>,
    rendered: Vec<String>,
    profile: Profile,
    target: String,
}

impl BuildInvocation {
    /// Derive the invocation for `spec` under `defaults`.
    pub fn derive(defaults: &BuildDefaults, spec: &CrateSpec) -> Self {
        let mut builder = Builder::default();
        builder.flag("build");

        builder.value("--out-name", &spec.name.out_name(), true);
        if let Some(scope) = spec.name.scope() {
            builder.value("--scope", scope, true);
        }
        if let Some(out_dir) = &spec.out_dir {
            builder.value("--out-dir", &out_dir.to_string_lossy(), true);
        }

        let profile = spec.profile.or(defaults.profile).unwrap_or_default();
        builder.flag(profile.flag());

        let (target, crate_target) = match (&spec.target, &defaults.target) {
            (Some(target), _) => (target.clone(), true),
            (None, Some(target)) => (target.clone(), false),
            (None, None) => (DEFAULT_TARGET.to_string(), false),
        };
        builder.value("--target", &target, crate_target);

        if let Some(mode) = &spec.mode {
            builder.value("--mode", mode, true);
        }
        for arg in &spec.extra_args {
            builder.flag(arg);
        }

        Self {
            args: builder.args,
            rendered: builder.rendered,
            profile,
            target,
        }
    }

    /// Arguments as handed to the build tool.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Full command line for logs, e.g. `wasm-pack build --out-name "foo" --dev --target web`.
    pub fn command_line(&self) -> String {
        let mut line = BUILD_TOOL.to_string();
        for part in &self.rendered {
            line.push(' ');
            line.push_str(part);
        }
        line
    }

    /// Value following `flag`, if present.
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.args.iter().any(|a| a == flag)
    }
}

#[derive(Default)]
struct Builder {
    args: Vec<String>,
    rendered: Vec<String>,
}

impl Builder {
    fn flag(&mut self, flag: &str) {
        self.args.push(flag.to_string());
        self.rendered.push(quote_if_needed(flag));
    }

    fn value(&mut self, flag: &str, value: &str, quoted: bool) {
        self.args.push(flag.to_string());
        self.args.push(value.to_string());
        self.rendered.push(flag.to_string());
        self.rendered.push(if quoted {
            quote(value)
        } else {
            quote_if_needed(value)
        });
    }
}
