use crate::core::error::{ReleaseError, ReleaseResult};
use crate::core::fixfile::FixfileLayout;
use std::path::PathBuf;

/// Settings for one run, fixed once the command line is parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
  /// Commit the release working copy at the end
  pub commit: bool,
  /// Fixfile directory structure to create and copy
  pub layout: FixfileLayout,
  /// Print svn commands instead of running them
  pub dry_run: bool,
  /// Existing tag working copy
  pub tag_wcpath: PathBuf,
  /// Release working copy to create
  pub release_wcpath: PathBuf,
}

impl RunConfig {
  /// Build from parsed flags and the remaining positional arguments
  ///
  /// The first two positionals are TAG_WCPATH and RELEASE_WCPATH; anything
  /// after them is ignored.
  pub fn from_args(no_commit: bool, old_version: bool, noop: bool, paths: Vec<PathBuf>) -> ReleaseResult<Self> {
    if paths.len() < 2 {
      return Err(ReleaseError::usage(
        "Must specify existing TAG working copy directory, and RELEASE directory to create.",
      ));
    }
    if paths.len() > 2 {
      log::warn!("Ignoring {} extra argument(s) after RELEASE_WCPATH", paths.len() - 2);
    }

    let mut paths = paths.into_iter();
    let (Some(tag_wcpath), Some(release_wcpath)) = (paths.next(), paths.next()) else {
      return Err(ReleaseError::usage("TAG_WCPATH and RELEASE_WCPATH are required"));
    };

    Ok(Self {
      commit: !no_commit,
      layout: if old_version {
        FixfileLayout::Legacy
      } else {
        FixfileLayout::Current
      },
      dry_run: noop,
      tag_wcpath,
      release_wcpath,
    })
  }

  /// Commit message for the release
  pub fn commit_message(&self) -> String {
    format!("{} release", self.release_wcpath.display())
  }
}
