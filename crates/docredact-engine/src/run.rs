//! One redaction run: redact, stamp header, enable tracking, report

use docredact_core::{DocumentHost, SearchOptions, TrackingMode};
use docredact_security::{PatternSet, REDACTION_MARKER};
use serde::Serialize;
use tracing::error;

use crate::error::RunFailure;
use crate::header::{HeaderStamp, stamp_header};
use crate::outcome::StepOutcome;
use crate::redact::{RedactionSummary, redact_document};
use crate::status::StatusReporter;
use crate::tracking::enable_tracking;

pub const HEADER_WARNING: &str = "Warning: Could not add header";

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub patterns: PatternSet,
    pub marker: String,
    pub search: SearchOptions,
    /// `None` skips the header step
    pub header: Option<HeaderStamp>,
    /// `None` skips the tracking step
    pub tracking: Option<TrackingMode>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            patterns: PatternSet::builtin(),
            marker: REDACTION_MARKER.to_string(),
            search: SearchOptions::default(),
            header: Some(HeaderStamp::default()),
            tracking: Some(TrackingMode::TrackAll),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub redactions: RedactionSummary,
    pub header: StepOutcome,
    pub tracking: StepOutcome<TrackingMode>,
    /// blake3 of the body text before and after the run
    pub body_hash_before: String,
    pub body_hash_after: String,
}

impl RunReport {
    pub fn redacted(&self) -> usize {
        self.redactions.total
    }

    pub fn content_changed(&self) -> bool {
        self.body_hash_before != self.body_hash_after
    }

    pub fn has_warnings(&self) -> bool {
        self.header.is_degraded()
    }

    /// Final status line shown to the user
    pub fn status_message(&self) -> String {
        let mut message = format!("Redaction complete! {} items redacted.", self.redacted());
        if self.header.is_degraded() {
            message.push(' ');
            message.push_str(HEADER_WARNING);
        }
        message
    }
}

async fn body_hash(host: &dyn DocumentHost) -> Result<String, docredact_core::HostError> {
    let text = host.body_text().await?;
    Ok(blake3::hash(text.as_bytes()).to_hex().to_string())
}

/// Run the fixed sequence against `host`.
///
/// Only the redaction step (and reading the body) is fatal. Header and
/// tracking problems end up in the report, not in the error.
pub async fn run(
    host: &mut dyn DocumentHost,
    settings: &RunSettings,
    reporter: &StatusReporter,
) -> Result<RunReport, RunFailure> {
    reporter.info("Starting redaction process...");

    let result = run_steps(host, settings, reporter).await;

    match &result {
        Ok(report) if report.has_warnings() => reporter.warn(&report.status_message()),
        Ok(report) => reporter.info(&report.status_message()),
        Err(failure) => {
            error!(
                error = ?failure.error,
                applied = failure.applied.total,
                "Error during redaction"
            );
            reporter.error(&failure.status_message());
        }
    }

    result
}

async fn run_steps(
    host: &mut dyn DocumentHost,
    settings: &RunSettings,
    reporter: &StatusReporter,
) -> Result<RunReport, RunFailure> {
    let body_hash_before = body_hash(host)
        .await
        .map_err(|e| RunFailure::new(RedactionSummary::default(), e))?;

    let redactions =
        redact_document(host, &settings.patterns, &settings.marker, settings.search).await?;

    let header = match &settings.header {
        Some(stamp) => {
            reporter.info("Adding confidential header...");
            let outcome = stamp_header(host, stamp).await;
            if outcome.is_degraded() {
                reporter.warn(HEADER_WARNING);
            }
            outcome
        }
        None => StepOutcome::Skipped,
    };

    let tracking = match settings.tracking {
        Some(mode) => {
            let outcome = enable_tracking(host, mode).await;
            if outcome.is_completed() {
                reporter.info("Track changes enabled");
            }
            outcome
        }
        None => StepOutcome::Skipped,
    };

    let body_hash_after = body_hash(host)
        .await
        .map_err(|e| RunFailure::new(redactions.clone(), e))?;

    Ok(RunReport {
        redactions,
        header,
        tracking,
        body_hash_before,
        body_hash_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::MemorySink;
    use docredact_core::MemoryDocument;
    use std::sync::Arc;

    fn reporter() -> (Arc<MemorySink>, StatusReporter) {
        let sink = Arc::new(MemorySink::new());
        (sink.clone(), StatusReporter::new(sink))
    }

    #[tokio::test]
    async fn test_status_sequence() {
        let (sink, reporter) = reporter();
        let mut doc = MemoryDocument::new("ssn 123-45-6789");

        let report = run(&mut doc, &RunSettings::default(), &reporter)
            .await
            .unwrap();

        assert_eq!(report.redacted(), 1);
        assert!(report.content_changed());
        assert_eq!(
            sink.messages(),
            vec![
                "Starting redaction process...",
                "Adding confidential header...",
                "Track changes enabled",
                "Redaction complete! 1 items redacted.",
            ]
        );
    }

    #[tokio::test]
    async fn test_skipped_steps() {
        let (sink, reporter) = reporter();
        let settings = RunSettings {
            header: None,
            tracking: None,
            ..Default::default()
        };
        let mut doc = MemoryDocument::new("plain");

        let report = run(&mut doc, &settings, &reporter).await.unwrap();

        assert_eq!(report.header, StepOutcome::Skipped);
        assert_eq!(report.tracking, StepOutcome::Skipped);
        assert!(!report.content_changed());
        assert_eq!(doc.tracking(), Some(TrackingMode::Off));
        assert!(doc.sections()[0].primary.paragraphs.is_empty());
        assert_eq!(
            sink.messages(),
            vec![
                "Starting redaction process...",
                "Redaction complete! 0 items redacted.",
            ]
        );
    }

    #[tokio::test]
    async fn test_report_serializes() {
        let (_, reporter) = reporter();
        let mut doc = MemoryDocument::new("x").without_tracking();

        let report = run(&mut doc, &RunSettings::default(), &reporter)
            .await
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["redactions"]["total"], 0);
        assert_eq!(json["header"]["outcome"], "completed");
        assert_eq!(json["tracking"]["outcome"], "unavailable");
    }
}
