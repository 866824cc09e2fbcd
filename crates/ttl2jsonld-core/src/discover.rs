//! Recursive discovery of source files.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::config::ConvertOptions;

/// A directory entry that could not be visited.
#[derive(Debug, Clone, Serialize)]
pub struct WalkIssue {
    /// Entry that failed, when the walker knows it.
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Files found under the root, plus whatever could not be visited.
#[derive(Debug, Default)]
pub struct Discovery {
    pub sources: Vec<PathBuf>,
    pub issues: Vec<WalkIssue>,
}

/// Walk `options.root` and collect every regular file carrying the source
/// extension, including symbolic links that resolve to one.
///
/// Unreadable entries, symlink loops and a missing root are recorded as
/// [`WalkIssue`]s instead of failing the walk. Entries are visited in file
/// name order within each directory.
pub fn discover(options: &ConvertOptions) -> Discovery {
    let mut discovery = Discovery::default();

    let walker = WalkDir::new(&options.root)
        .follow_links(options.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| options.include_hidden || entry.depth() == 0 || !is_hidden(entry));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let issue = WalkIssue {
                    path: err.path().map(Path::to_path_buf),
                    message: err.to_string(),
                };
                tracing::warn!(
                    root = %options.root.display(),
                    error = %issue.message,
                    "skipping unreadable entry"
                );
                discovery.issues.push(issue);
                continue;
            }
        };

        // A symlinked leaf file counts even when links are not followed.
        if has_extension(entry.path(), &options.source_extension) && entry.path().is_file() {
            tracing::debug!(path = %entry.path().display(), "discovered source file");
            discovery.sources.push(entry.into_path());
        }
    }

    discovery
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(extension)
}
