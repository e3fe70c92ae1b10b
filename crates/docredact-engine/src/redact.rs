//! Pattern matcher / redactor step

use docredact_core::{DocumentHost, EditBatch, HostError, SearchOptions};
use docredact_security::PatternSet;
use serde::Serialize;
use tracing::debug;

use crate::error::RunFailure;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCount {
    pub label: String,
    pub count: usize,
}

/// Replacements made by one run, per pattern in processing order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RedactionSummary {
    pub total: usize,
    pub per_pattern: Vec<PatternCount>,
}

impl RedactionSummary {
    fn record(&mut self, label: &str, count: usize) {
        self.total += count;
        self.per_pattern.push(PatternCount {
            label: label.to_string(),
            count,
        });
    }

    pub fn count_for(&self, label: &str) -> Option<usize> {
        self.per_pattern
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.count)
    }
}

/// Replace every match of every pattern with `marker`.
///
/// Patterns run in set order, each one searching the text left by the
/// previous commit. One batch per pattern; a failing search or commit aborts
/// the run with the patterns already committed left in place.
pub async fn redact_document(
    host: &mut dyn DocumentHost,
    patterns: &PatternSet,
    marker: &str,
    options: SearchOptions,
) -> Result<RedactionSummary, RunFailure> {
    let mut summary = RedactionSummary::default();

    match apply_patterns(host, patterns, marker, options, &mut summary).await {
        Ok(()) => Ok(summary),
        Err(e) => Err(RunFailure::new(summary, e)),
    }
}

async fn apply_patterns(
    host: &mut dyn DocumentHost,
    patterns: &PatternSet,
    marker: &str,
    options: SearchOptions,
    summary: &mut RedactionSummary,
) -> Result<(), HostError> {
    for pattern in patterns {
        let spans = host.search(pattern.source(), options).await?;

        if spans.is_empty() {
            debug!(pattern = pattern.label(), "No matches");
            summary.record(pattern.label(), 0);
            continue;
        }

        let mut batch = EditBatch::new();
        for span in &spans {
            batch.replace_text(*span, marker);
        }
        let receipt = host.sync(batch).await?;

        debug!(
            pattern = pattern.label(),
            replaced = receipt.applied,
            "Pattern redacted"
        );
        summary.record(pattern.label(), spans.len());
    }

    Ok(())
}
