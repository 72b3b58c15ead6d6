//! System svn backend - zero dependencies
//!
//! Shells out to the svn client for every operation in non-interactive mode,
//! so a missing credential fails instead of blocking on a prompt. svn inherits
//! the caller's environment: ssh agents, `SVN_SSH`, proxies and library paths
//! are all needed to reach the repository on commit.

use super::{SvnCommand, Vcs};
use crate::core::error::{ReleaseResult, SvnError};
use std::path::Path;
use std::process::Command;

/// Subversion backend using the system svn client
#[derive(Debug, Clone)]
pub struct SvnClient {
  /// Program to run (usually just "svn")
  pub(crate) program: String,
}

impl SvnClient {
  pub fn new(program: impl Into<String>) -> Self {
    Self { program: program.into() }
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  /// Create an svn command that never prompts
  ///
  /// The CRTM roots are never set on this process (they only go to the build
  /// step), so the inherited environment carries nothing of ours.
  pub(crate) fn svn_cmd(&self) -> Command {
    let mut cmd = Command::new(&self.program);
    cmd.arg("--non-interactive");
    cmd
  }

  /// Run a command, returning stdout on success
  fn run(&self, command: &SvnCommand) -> ReleaseResult<Vec<u8>> {
    let rendered = command.render(&self.program);
    log::debug!("Running: {}", rendered);

    let output = self
      .svn_cmd()
      .args(command.args())
      .output()
      .map_err(|e| SvnError::Spawn {
        program: self.program.clone(),
        reason: e.to_string(),
      })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(
        SvnError::CommandFailed {
          command: rendered,
          stderr: stderr.to_string(),
        }
        .into(),
      );
    }

    Ok(output.stdout)
  }
}

impl Vcs for SvnClient {
  fn is_versioned(&self, path: &Path) -> bool {
    let info = SvnCommand::Info {
      path: path.to_path_buf(),
    };
    match self.run(&info) {
      Ok(_) => true,
      Err(e) => {
        log::debug!("{} is not versioned: {}", path.display(), e);
        false
      }
    }
  }

  fn execute(&self, command: &SvnCommand) -> ReleaseResult<()> {
    self.run(command).map(|_| ())
  }
}
