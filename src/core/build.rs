//! External build step that materializes source-tree links before the copy

use crate::core::environment::CrtmEnvironment;
use std::fmt;
use std::io;
use std::process::Command;

/// How the build step ended
///
/// None of these abort the run: a broken build shows up as a missing or stale
/// inventory, which is checked right after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
  Succeeded,
  /// Exited non-zero (or was killed, `None`)
  Failed(Option<i32>),
  /// Could not be started
  NotRun(String),
}

impl BuildStatus {
  pub fn is_success(&self) -> bool {
    matches!(self, BuildStatus::Succeeded)
  }
}

impl fmt::Display for BuildStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BuildStatus::Succeeded => write!(f, "succeeded"),
      BuildStatus::Failed(Some(code)) => write!(f, "exited with status {}", code),
      BuildStatus::Failed(None) => write!(f, "was terminated by a signal"),
      BuildStatus::NotRun(reason) => write!(f, "could not be started: {}", reason),
    }
  }
}

/// Run the build command in the source root with the CRTM roots exported
///
/// The child's stdout goes to our stderr so it never mixes with a dry-run
/// command listing.
pub fn run_build_step(command: &[String], env: &CrtmEnvironment) -> BuildStatus {
  let Some((program, args)) = command.split_first() else {
    return BuildStatus::NotRun("empty build command".to_string());
  };

  log::debug!("Running build step in {}: {}", env.source_root.display(), command.join(" "));

  let status = Command::new(program)
    .args(args)
    .current_dir(&env.source_root)
    .envs(env.vars())
    .stdout(io::stderr())
    .status();

  match status {
    Ok(status) if status.success() => BuildStatus::Succeeded,
    Ok(status) => BuildStatus::Failed(status.code()),
    Err(e) => BuildStatus::NotRun(e.to_string()),
  }
}
