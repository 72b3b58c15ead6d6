//! Release creation command
//!
//! Runs strictly in order, aborting on the first failure:
//! 1. RELEASE_WCPATH must not exist
//! 2. Create the release root and its fixfile directories
//! 3. Check the tag working copy and derive the CRTM roots
//! 4. Copy the source tree listed in the inventory
//! 5. Copy the fixfile tree for the active layout
//! 6. Commit (unless disabled)
//!
//! Nothing is rolled back: whatever was created before a failure stays in
//! the working copy.

use crate::core::build::run_build_step;
use crate::core::config::ReleaseConfig;
use crate::core::environment::CrtmEnvironment;
use crate::core::error::{PreconditionError, ReleaseResult, ResultExt};
use crate::core::fixfile::FIXFILE_FORMATS;
use crate::core::inventory::Inventory;
use crate::core::run_config::RunConfig;
use crate::core::vcs::{DryRunSvn, SvnClient, Vcs};
use std::path::Path;

/// What a completed run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseSummary {
  /// Release root plus fixfile directories
  pub directories_created: usize,
  pub source_copies: usize,
  pub fixfile_copies: usize,
  pub committed: bool,
}

/// Run the create-release command with the backend the run asks for
pub fn run_create_release(run: &RunConfig, config: &ReleaseConfig, cwd: &Path) -> ReleaseResult<()> {
  let svn = SvnClient::new(config.tools.svn.clone());

  let summary = if run.dry_run {
    create_release(run, config, &DryRunSvn::new(svn), cwd)?
  } else {
    create_release(run, config, &svn, cwd)?
  };

  let verb = if run.dry_run { "Would create" } else { "Created" };
  log::info!(
    "{} {}: {} directories, {} source copies, {} fixfile copies{}",
    verb,
    run.release_wcpath.display(),
    summary.directories_created,
    summary.source_copies,
    summary.fixfile_copies,
    if summary.committed { ", committed" } else { "" }
  );

  Ok(())
}

/// Build the release working copy from the tag working copy
///
/// Relative paths in `run` are resolved against `cwd`; the process working
/// directory is never changed.
pub fn create_release<V: Vcs>(
  run: &RunConfig,
  config: &ReleaseConfig,
  vcs: &V,
  cwd: &Path,
) -> ReleaseResult<ReleaseSummary> {
  let mut summary = ReleaseSummary::default();
  let dest = cwd.join(&run.release_wcpath);
  let fixfile_dirs = run.layout.dirs();

  if log::log_enabled!(log::Level::Debug) {
    log::debug!(
      "{} versioned: {}",
      run.release_wcpath.display(),
      vcs.is_versioned(&dest)
    );
  }

  // Create the release working copy
  if dest.exists() {
    return Err(
      PreconditionError::ReleaseExists {
        path: run.release_wcpath.clone(),
      }
      .into(),
    );
  }
  vcs
    .mkdir(&dest, false)
    .with_context(|| format!("Error creating {}", run.release_wcpath.display()))?;
  summary.directories_created += 1;

  for fdir in fixfile_dirs {
    vcs
      .mkdir(&dest.join("fix").join(fdir), true)
      .with_context(|| format!("Error creating {} fixfile directory", fdir))?;
    summary.directories_created += 1;
  }

  // Enter the tag working copy
  let tag = cwd.join(&run.tag_wcpath);
  if !tag.is_dir() || !vcs.is_versioned(&tag) {
    return Err(
      PreconditionError::NotWorkingCopy {
        path: run.tag_wcpath.clone(),
      }
      .into(),
    );
  }
  if !tag.join(&config.tag.marker_file).is_file() {
    return Err(
      PreconditionError::NotProjectRoot {
        path: run.tag_wcpath.clone(),
        marker: config.tag.marker_file.clone(),
      }
      .into(),
    );
  }
  let env = CrtmEnvironment::from_root(&tag);

  log::info!("Moving source tree from tag->release...");
  summary.source_copies = copy_source_tree(config, &env, vcs, &dest)?;

  log::info!("Moving fixfile tree from tag->release...");
  log::debug!("{} fixfile copies for the {:?} layout", run.layout.copy_count(), run.layout);
  for fdir in fixfile_dirs {
    for ffmt in FIXFILE_FORMATS {
      vcs
        .copy(&env.fixfile_root.join(fdir).join(ffmt), &dest.join("fix").join(fdir), true)
        .with_context(|| format!("Error copying {}/{} fixfiles", fdir, ffmt))?;
      summary.fixfile_copies += 1;
    }
  }

  if run.commit {
    vcs
      .commit(&dest, &run.commit_message())
      .with_context(|| format!("Error committing {}", run.release_wcpath.display()))?;
    summary.committed = true;
  } else {
    log::info!("Skipping commit of {}", run.release_wcpath.display());
  }

  Ok(summary)
}

/// Run the build step, then copy every inventory entry into the release
fn copy_source_tree<V: Vcs>(config: &ReleaseConfig, env: &CrtmEnvironment, vcs: &V, dest: &Path) -> ReleaseResult<usize> {
  let status = run_build_step(&config.tools.build_command, env);
  if !status.is_success() {
    log::warn!(
      "Build step `{}` {}; continuing with the existing inventory",
      config.tools.build_command.join(" "),
      status
    );
  }

  let build_dir = env.build_dir();
  let inventory = Inventory::load(&build_dir.join(&config.tag.inventory_file))?;
  log::debug!(
    "Inventory lists {} files and {} links",
    inventory.files.len(),
    inventory.links.len()
  );
  if inventory.is_empty() {
    log::warn!("Inventory {} lists nothing to copy", config.tag.inventory_file);
  }

  for file in &inventory.files {
    vcs
      .copy(&build_dir.join(file), &dest.join(file), true)
      .with_context(|| format!("Error copying {}", file.display()))?;
  }
  for link in &inventory.links {
    vcs
      .copy(&build_dir.join(&link.target), &dest.join(&link.name), true)
      .with_context(|| format!("Error copying {} -> {}", link.name.display(), link.target.display()))?;
  }

  Ok(inventory.len())
}
