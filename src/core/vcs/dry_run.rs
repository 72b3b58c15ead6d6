//! No-op backend: prints each mutating command instead of running it

use super::{SvnClient, SvnCommand, Vcs};
use crate::core::error::ReleaseResult;
use std::path::Path;

/// Dry-run Subversion backend
///
/// Queries still go to the real client so preconditions are checked the same
/// way as in a live run; mutations are only printed to stdout.
#[derive(Debug, Clone)]
pub struct DryRunSvn {
  inner: SvnClient,
}

impl DryRunSvn {
  pub fn new(inner: SvnClient) -> Self {
    Self { inner }
  }
}

impl Vcs for DryRunSvn {
  fn is_versioned(&self, path: &Path) -> bool {
    self.inner.is_versioned(path)
  }

  fn execute(&self, command: &SvnCommand) -> ReleaseResult<()> {
    if !command.is_mutating() {
      return self.inner.execute(command);
    }
    println!("{}", command.render(self.inner.program()));
    Ok(())
  }
}
