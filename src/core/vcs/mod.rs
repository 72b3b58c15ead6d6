//! Subversion adapter
//!
//! Every mutating operation is first built as an [`SvnCommand`] value. The live
//! backend runs it; the dry-run backend prints it. Both render the exact same
//! text, so a dry run lists precisely what a real run would execute.

pub mod dry_run;
pub mod svn;

pub use dry_run::DryRunSvn;
pub use svn::SvnClient;

use crate::core::error::ReleaseResult;
use crate::utils::{path_to_svn_format, quote_arg};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// One svn invocation, independent of how (or whether) it runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvnCommand {
  /// `svn info PATH` (query only)
  Info { path: PathBuf },
  /// `svn mkdir [--parents] PATH`
  Mkdir { path: PathBuf, parents: bool },
  /// `svn copy [--parents] SRC DEST`
  Copy {
    source: PathBuf,
    dest: PathBuf,
    parents: bool,
  },
  /// `svn commit -m MSG PATH`
  Commit { path: PathBuf, message: String },
}

impl SvnCommand {
  /// Subcommand and arguments, without the program name
  pub fn args(&self) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    match self {
      SvnCommand::Info { path } => {
        args.push("info".into());
        args.push(path.into());
      }
      SvnCommand::Mkdir { path, parents } => {
        args.push("mkdir".into());
        if *parents {
          args.push("--parents".into());
        }
        args.push(path.into());
      }
      SvnCommand::Copy { source, dest, parents } => {
        args.push("copy".into());
        if *parents {
          args.push("--parents".into());
        }
        args.push(source.into());
        args.push(dest.into());
      }
      SvnCommand::Commit { path, message } => {
        args.push("commit".into());
        args.push("-m".into());
        args.push(message.into());
        args.push(path.into());
      }
    }
    args
  }

  /// Whether running this changes the working copy or repository
  pub fn is_mutating(&self) -> bool {
    !matches!(self, SvnCommand::Info { .. })
  }

  /// Render as a shell-like command line for the given program
  pub fn render(&self, program: &str) -> String {
    let mut line = program.to_string();
    for arg in self.args() {
      line.push(' ');
      line.push_str(&quote_arg(&path_to_svn_format(Path::new(&arg))));
    }
    line
  }
}

impl fmt::Display for SvnCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.render("svn"))
  }
}

/// Version-control operations the release orchestrator consumes
///
/// Implementors only provide [`Vcs::is_versioned`] and [`Vcs::execute`]; the
/// operation helpers all go through `execute`, which is what keeps live and
/// dry-run output identical.
pub trait Vcs {
  /// Whether `path` is a tracked working copy. Never mutates.
  fn is_versioned(&self, path: &Path) -> bool;

  /// Run (or report) a mutating command
  fn execute(&self, command: &SvnCommand) -> ReleaseResult<()>;

  /// Create a directory under version control
  fn mkdir(&self, path: &Path, parents: bool) -> ReleaseResult<()> {
    self.execute(&SvnCommand::Mkdir {
      path: path.to_path_buf(),
      parents,
    })
  }

  /// Versioned copy from `source` to `dest`
  fn copy(&self, source: &Path, dest: &Path, parents: bool) -> ReleaseResult<()> {
    self.execute(&SvnCommand::Copy {
      source: source.to_path_buf(),
      dest: dest.to_path_buf(),
      parents,
    })
  }

  /// Commit everything pending under `path`
  fn commit(&self, path: &Path, message: &str) -> ReleaseResult<()> {
    self.execute(&SvnCommand::Commit {
      path: path.to_path_buf(),
      message: message.to_string(),
    })
  }
}
