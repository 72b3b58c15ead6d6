//! Utility functions for cross-platform path handling and command rendering

use std::path::Path;

/// Convert a path to Subversion format (always forward slashes)
///
/// svn accepts forward slashes on every platform, and rendered commands should
/// read the same on all of them.
pub fn path_to_svn_format(path: &Path) -> String {
  #[cfg(target_os = "windows")]
  {
    path.to_string_lossy().replace('\\', "/")
  }
  #[cfg(not(target_os = "windows"))]
  {
    path.to_string_lossy().to_string()
  }
}

/// Quote an argument for display if a shell would split or mangle it
pub fn quote_arg(arg: &str) -> String {
  let needs_quotes = arg.is_empty()
    || arg
      .chars()
      .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '$' | '`' | '\\' | '*' | '?' | ';' | '&' | '|'));

  if needs_quotes {
    format!("\"{}\"", arg.replace('\\', "\\\\").replace('"', "\\\"").replace('$', "\\$").replace('`', "\\`"))
  } else {
    arg.to_string()
  }
}
