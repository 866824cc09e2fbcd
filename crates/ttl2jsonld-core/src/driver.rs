//! Batch driver: discover, then convert each source in turn.
//!
//! A failing file is recorded and logged; it never stops the batch.

use crate::config::ConvertOptions;
use crate::convert::convert_one;
use crate::discover::discover;
use crate::report::{FileOutcome, RunSummary};

/// Convert every source under `options.root`.
pub fn run(options: &ConvertOptions) -> RunSummary {
    run_with(options, |_| {})
}

/// Like [`run`], calling `on_outcome` right after each conversion attempt.
pub fn run_with<F>(options: &ConvertOptions, mut on_outcome: F) -> RunSummary
where
    F: FnMut(&FileOutcome),
{
    let discovery = discover(options);

    if discovery.sources.is_empty() {
        tracing::info!(
            root = %options.root.display(),
            extension = %options.source_extension,
            "no source files found"
        );
    }

    let mut outcomes = Vec::with_capacity(discovery.sources.len());
    for source in discovery.sources {
        let result = convert_one(&source, options);
        match &result {
            Ok(conversion) => tracing::info!(
                source = %conversion.source.display(),
                target = %conversion.target.display(),
                triples = conversion.triples,
                "converted"
            ),
            Err(err) => tracing::warn!(
                source = %source.display(),
                code = ?err.error_code(),
                error = %err,
                "conversion failed"
            ),
        }

        let outcome = FileOutcome { source, result };
        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    RunSummary {
        root: options.root.clone(),
        outcomes,
        issues: discovery.issues,
    }
}
