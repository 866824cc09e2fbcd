//! Per-file outcomes and the run summary.

use std::path::PathBuf;

use serde_json::json;

use crate::discover::WalkIssue;
use crate::error::ConvertError;

/// A successfully written target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub source: PathBuf,
    pub target: PathBuf,
    /// Number of triples written.
    pub triples: usize,
}

/// Result of one conversion attempt.
#[derive(Debug)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub result: Result<Conversion, ConvertError>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    fn to_json(&self) -> serde_json::Value {
        match &self.result {
            Ok(conversion) => json!({
                "status": "converted",
                "source": conversion.source.display().to_string(),
                "target": conversion.target.display().to_string(),
                "triples": conversion.triples,
            }),
            Err(err) => json!({
                "status": "failed",
                "source": self.source.display().to_string(),
                "error": err.to_json(),
            }),
        }
    }
}

/// Everything a run did, in processing order.
#[derive(Debug)]
pub struct RunSummary {
    pub root: PathBuf,
    pub outcomes: Vec<FileOutcome>,
    /// Entries skipped during discovery.
    pub issues: Vec<WalkIssue>,
}

impl RunSummary {
    /// `true` when no source file was discovered.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.converted()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Machine-readable summary of the run.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "root": self.root.display().to_string(),
            "converted": self.converted(),
            "failed": self.failed(),
            "files": self.outcomes.iter().map(FileOutcome::to_json).collect::<Vec<_>>(),
            "skipped": self.issues,
        })
    }
}
