//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
#[cfg(unix)]
use tempfile::TempDir;

/// Inventory with 2 plain files and 1 symlink pair
#[cfg(unix)]
pub const INVENTORY: &str = "# generated by make inventory
Makefile
libsrc/CRTM_Module.f90
CRTM_Version.inc -> ../Utility/CRTM_Version.inc
";

/// A scratch directory holding a fake tag working copy `tag/` and a fake svn
///
/// The fake svn appends every invocation to `svn.log`, dumps the environment of
/// its latest invocation to `svn.env`, creates directories for `mkdir`, and
/// treats a path as versioned when it has a `.svn` directory.
#[cfg(unix)]
pub struct TestWorkspace {
  _root: TempDir,
  pub path: PathBuf,
  pub svn: PathBuf,
  pub svn_log: PathBuf,
  pub svn_env: PathBuf,
}

#[cfg(unix)]
impl TestWorkspace {
  /// Create a workspace whose svn copies succeed
  pub fn new() -> Result<Self> {
    Self::with_copy_status(0)
  }

  /// Create a workspace whose svn `copy` exits with `status`
  pub fn with_copy_status(status: i32) -> Result<Self> {
    use std::os::unix::fs::PermissionsExt;

    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    // Tag working copy
    let tag = path.join("tag");
    std::fs::create_dir_all(tag.join(".svn"))?;
    std::fs::create_dir_all(tag.join("src/Build"))?;
    std::fs::create_dir_all(tag.join("fix"))?;
    std::fs::write(tag.join("Set_CRTM_Environment.sh"), "export CRTM_ROOT=$PWD\n")?;
    std::fs::write(tag.join("src/Build/inventory.txt"), INVENTORY)?;

    // Fake svn
    let svn = path.join("bin").join("svn");
    let svn_log = path.join("svn.log");
    let svn_env = path.join("svn.env");
    std::fs::create_dir_all(path.join("bin"))?;
    std::fs::write(
      &svn,
      format!(
        r#"#!/bin/sh
printf '%s\n' "$*" >> '{log}'
env > '{env}'
for arg in "$@"; do last="$arg"; done
case "$2" in
  info) [ -d "$last/.svn" ] ;;
  mkdir) mkdir -p "$last" ;;
  copy) exit {status} ;;
  *) exit 0 ;;
esac
"#,
        log = svn_log.display(),
        env = svn_env.display(),
        status = status
      ),
    )?;
    std::fs::set_permissions(&svn, std::fs::Permissions::from_mode(0o755))?;

    // Picked up from the current directory
    std::fs::write(
      path.join("create_release_tag.toml"),
      format!("[tools]\nsvn = '{}'\nbuild_command = [\"true\"]\n", svn.display()),
    )?;

    Ok(Self {
      _root: root,
      path,
      svn,
      svn_log,
      svn_env,
    })
  }

  /// Replace the tag's inventory manifest
  pub fn write_inventory(&self, content: &str) -> Result<()> {
    std::fs::write(self.path.join("tag/src/Build/inventory.txt"), content)?;
    Ok(())
  }

  /// Replace the build command in the workspace config
  pub fn write_build_command(&self, command: &[&str]) -> Result<()> {
    let quoted: Vec<String> = command.iter().map(|part| format!("{:?}", part)).collect();
    std::fs::write(
      self.path.join("create_release_tag.toml"),
      format!(
        "[tools]\nsvn = '{}'\nbuild_command = [{}]\n",
        self.svn.display(),
        quoted.join(", ")
      ),
    )?;
    Ok(())
  }

  /// Environment the most recent svn invocation ran with
  pub fn svn_env(&self) -> Result<String> {
    std::fs::read_to_string(&self.svn_env).context("Failed to read svn environment")
  }

  /// Every svn invocation so far, without the `--non-interactive` flag
  pub fn svn_calls(&self) -> Result<Vec<String>> {
    if !self.svn_log.exists() {
      return Ok(vec![]);
    }
    let log = std::fs::read_to_string(&self.svn_log).context("Failed to read svn log")?;
    Ok(
      log
        .lines()
        .map(|l| l.strip_prefix("--non-interactive ").unwrap_or(l).to_string())
        .collect(),
    )
  }

  /// svn invocations that change something (everything but `info`)
  pub fn mutating_calls(&self) -> Result<Vec<String>> {
    Ok(
      self
        .svn_calls()?
        .into_iter()
        .filter(|c| !c.starts_with("info "))
        .collect(),
    )
  }

  /// Count mutating calls of one subcommand
  pub fn count_calls(&self, subcommand: &str) -> Result<usize> {
    let prefix = format!("{} ", subcommand);
    Ok(self.mutating_calls()?.iter().filter(|c| c.starts_with(&prefix)).count())
  }
}

/// Run the create_release_tag binary, returning its output whatever the exit status
pub fn create_release_tag(cwd: &Path, args: &[&str]) -> Result<Output> {
  create_release_tag_with_env(cwd, args, &[])
}

/// Run the create_release_tag binary with extra environment variables set
pub fn create_release_tag_with_env(cwd: &Path, args: &[&str], envs: &[(&str, &str)]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_create_release_tag");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .envs(envs.iter().copied())
    .output()
    .context("Failed to run create_release_tag")
}

/// Run the create_release_tag binary and require success
#[cfg(unix)]
pub fn create_release_tag_ok(cwd: &Path, args: &[&str]) -> Result<Output> {
  let output = create_release_tag(cwd, args)?;

  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    anyhow::bail!(
      "create_release_tag failed: create_release_tag {}\nstdout: {}\nstderr: {}",
      args.join(" "),
      stdout,
      stderr
    );
  }

  Ok(output)
}
