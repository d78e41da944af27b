//! Test project builder for isolated rsw testing.
//!
//! `TestProject` is a host project in a temp directory. Crates are created
//! as skeletons (`src/lib.rs` + `Cargo.toml`) directly below it, which is the
//! default crates root.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use rsw::application::{ChangeRouter, DevServerNotifier};
use rsw::config::GlobalConfig;
use rsw::domain::entities::CrateSpec;
use rsw::infrastructure::RustcErrorParser;

use super::fakes::{RecordingTransport, ScriptedRunner};
use super::fixtures::MANIFEST_TEMPLATE;

pub struct TestProject {
    dir: TempDir,
    root: PathBuf,
    pub runner: Arc<ScriptedRunner>,
    pub transport: Arc<RecordingTransport>,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        Self {
            dir,
            root,
            runner: Arc::new(ScriptedRunner::new()),
            transport: Arc::new(RecordingTransport::default()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Create a crate skeleton; its build output is stale.
    pub fn add_crate(&self, name: &str) -> &Self {
        let crate_root = self.path(name);
        fs::create_dir_all(crate_root.join("src")).unwrap();
        fs::write(crate_root.join("src/lib.rs"), "pub fn answer() -> u32 { 42 }\n").unwrap();
        fs::write(
            crate_root.join("Cargo.toml"),
            MANIFEST_TEMPLATE.replace("{name}", name),
        )
        .unwrap();
        self
    }

    /// Publish `name`'s package so its output is newer than every source.
    pub fn publish(&self, name: &str) -> &Self {
        let hour_ago = SystemTime::now() - Duration::from_secs(3600);
        for rel in ["src/lib.rs", "Cargo.toml"] {
            File::options()
                .write(true)
                .open(self.path(&format!("{name}/{rel}")))
                .unwrap()
                .set_modified(hour_ago)
                .unwrap();
        }
        let pkg = self.path(&format!("{name}/pkg"));
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("package.json"), "{}").unwrap();
        self
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Configuration naming `crates`, with no settling delay.
    pub fn config(&self, crates: &[&str]) -> GlobalConfig {
        let mut config = GlobalConfig::default();
        config.crates = crates.iter().map(|name| CrateSpec::named(*name)).collect();
        config.watch.settle_delay_ms = 0;
        config
    }

    /// Router over the fakes, with the recording transport attached.
    pub fn router(&self, config: &GlobalConfig) -> ChangeRouter {
        ChangeRouter::new(
            &self.root,
            config,
            self.runner.clone(),
            Arc::new(RustcErrorParser::new()),
            DevServerNotifier::attached(self.transport.clone()),
        )
        .unwrap()
    }

    /// Run the `rsw` binary against this project with an isolated user
    /// config directory.
    pub fn run_cli(&self, args: &[&str]) -> Output {
        self.cli_command(args).output().unwrap()
    }

    /// `rsw` command for this project. Tools installed with
    /// [`TestProject::fake_tool`] shadow the real ones on `PATH`.
    pub fn cli_command(&self, args: &[&str]) -> Command {
        let home = self.dir.path().join(".home");
        fs::create_dir_all(&home).unwrap();
        let bin = self.dir.path().join(".bin");
        fs::create_dir_all(&bin).unwrap();
        let path = std::env::var_os("PATH").unwrap_or_default();
        let path = std::env::join_paths(
            std::iter::once(bin).chain(std::env::split_paths(&path)),
        )
        .unwrap();

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rsw"));
        cmd.arg("--project")
            .arg(&self.root)
            .args(args)
            .env("PATH", path)
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("APPDATA", &home)
            .env_remove("RUST_LOG")
            .env_remove("RSW_CLI")
            .env_remove("RSW_PROFILE")
            .env_remove("RSW_TARGET")
            .env_remove("RSW_LOG");
        cmd
    }

    /// Install an executable shell script named `name` ahead of `PATH`.
    ///
    /// Every invocation appends its arguments to `<name>.log` next to the
    /// script before running `body`.
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let bin = self.dir.path().join(".bin");
        fs::create_dir_all(&bin).unwrap();
        let log = bin.join(format!("{name}.log"));
        let script = bin.join(name);
        fs::write(
            &script,
            format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n{body}\n", log.display()),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        log
    }
}
