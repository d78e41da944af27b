//! Test fixtures - reusable content constants for tests.

/// Minimal crate manifest; `{name}` is replaced with the crate name
pub const MANIFEST_TEMPLATE: &str = r#"[package]
name = "{name}"
version = "0.1.0"
edition = "2021"

[lib]
crate-type = ["cdylib"]
"#;

/// Host descriptor linking two crates
pub const PACKAGE_JSON: &str = r#"{
  "name": "app",
  "dependencies": { "foo": "link:foo/pkg" },
  "devDependencies": { "vite": "^5.0.0" }
}"#;

/// Same dependency set as [`PACKAGE_JSON`], different scripts
pub const PACKAGE_JSON_NEW_SCRIPTS: &str = r#"{
  "name": "app",
  "scripts": { "dev": "vite" },
  "dependencies": { "foo": "link:foo/pkg" },
  "devDependencies": { "vite": "^5.0.0" }
}"#;

/// [`PACKAGE_JSON`] plus one dependency
pub const PACKAGE_JSON_ADDED_DEP: &str = r#"{
  "name": "app",
  "dependencies": { "foo": "link:foo/pkg", "bar": "link:bar/pkg" },
  "devDependencies": { "vite": "^5.0.0" }
}"#;

/// wasm-pack stderr of a failed compile
pub const RUSTC_E0425: &str = "\
[INFO]: Compiling to Wasm...
error[E0425]: cannot find value `x` in this scope
 --> src/lib.rs:3:5
  |
3 |     x
  |     ^ not found in this scope

error: could not compile `bar` (lib) due to 1 previous error
Error: Compiling your crate to WebAssembly failed
";
