//! Batch conversion of Turtle ontology files into JSON-LD.
//!
//! [`run`] walks a directory tree (default `ontologies/`), converts every
//! `.ttl` file it finds into a `.jsonld` sibling, and returns a
//! [`RunSummary`] with one `Result` per file. A file that fails to convert is
//! logged and recorded; the rest of the batch still runs.
//!
//! ```no_run
//! use ttl2jsonld_core::{run, ConvertOptions};
//!
//! let summary = run(&ConvertOptions::default());
//! println!("{} converted, {} failed", summary.converted(), summary.failed());
//! ```

pub mod config;
pub mod convert;
pub mod discover;
pub mod driver;
pub mod error;
pub mod report;

pub use config::{ConvertOptions, OutputFormat};
pub use convert::{convert_one, convert_str, parse_turtle, serialize_jsonld, target_path};
pub use discover::{discover, Discovery, WalkIssue};
pub use driver::{run, run_with};
pub use error::{ConvertError, ErrorCode};
pub use report::{Conversion, FileOutcome, RunSummary};
