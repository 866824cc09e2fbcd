//! Configuration for batch conversion.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Directory searched when no root is given.
pub const DEFAULT_ROOT: &str = "ontologies";

/// Extension of the files that get converted.
pub const DEFAULT_SOURCE_EXTENSION: &str = "ttl";

/// Extension of the files that get written.
pub const DEFAULT_TARGET_EXTENSION: &str = "jsonld";

/// Layout of the written JSON-LD documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Two-space indented JSON.
    #[default]
    Pretty,
    /// Single-line JSON.
    Compact,
}

/// Options for a conversion run.
///
/// ## Serialization Format
///
/// Fields are serialized in `kebab-case` (e.g., `source-extension`, `base-iri`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConvertOptions {
    /// Directory searched recursively for source files. Default: `ontologies`.
    pub root: PathBuf,
    /// Extension (no leading dot, case-sensitive) of source files. Default: `ttl`.
    pub source_extension: String,
    /// Extension given to the written files. Default: `jsonld`.
    pub target_extension: String,
    /// Output layout. Default: pretty.
    pub format: OutputFormat,
    /// Base IRI for resolving relative IRIs. When `None`, the `file://` URL
    /// of each source file is used.
    pub base_iri: Option<String>,
    /// Follow symbolic links while walking the tree.
    pub follow_links: bool,
    /// Pick up files and directories whose name starts with a dot.
    pub include_hidden: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            target_extension: DEFAULT_TARGET_EXTENSION.to_string(),
            format: OutputFormat::Pretty,
            base_iri: None,
            follow_links: false,
            include_hidden: false,
        }
    }
}

impl ConvertOptions {
    /// Default options rooted at `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }
}
