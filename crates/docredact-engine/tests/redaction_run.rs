use std::sync::Arc;

use async_trait::async_trait;
use docredact_core::{
    DocumentHost, EditBatch, HeaderKind, HostError, HostInfo, MemoryDocument, Paragraph,
    SearchOptions, Span, SyncReceipt, TrackingMode,
};
use docredact_engine::{
    HEADER_WARNING, MemorySink, RunSettings, StatusReporter, StepOutcome, run,
};
use docredact_security::{PatternSet, Redactor};

/// Wraps a `MemoryDocument` and fails the nth sync
struct FlakyHost {
    inner: MemoryDocument,
    syncs: usize,
    fail_on_sync: usize,
}

impl FlakyHost {
    fn new(inner: MemoryDocument, fail_on_sync: usize) -> Self {
        Self {
            inner,
            syncs: 0,
            fail_on_sync,
        }
    }
}

#[async_trait]
impl DocumentHost for FlakyHost {
    fn host_info(&self) -> HostInfo {
        self.inner.host_info()
    }

    async fn body_text(&self) -> docredact_core::Result<String> {
        self.inner.body_text().await
    }

    async fn search(
        &self,
        pattern: &str,
        options: SearchOptions,
    ) -> docredact_core::Result<Vec<Span>> {
        self.inner.search(pattern, options).await
    }

    async fn section_count(&self) -> docredact_core::Result<usize> {
        self.inner.section_count().await
    }

    async fn header_paragraphs(
        &self,
        section: usize,
        kind: HeaderKind,
    ) -> docredact_core::Result<Vec<Paragraph>> {
        self.inner.header_paragraphs(section, kind).await
    }

    async fn tracking_mode(&self) -> docredact_core::Result<Option<TrackingMode>> {
        self.inner.tracking_mode().await
    }

    async fn sync(&mut self, batch: EditBatch) -> docredact_core::Result<SyncReceipt> {
        self.syncs += 1;
        if self.syncs == self.fail_on_sync {
            return Err(HostError::Other(anyhow::anyhow!("connection to host lost")));
        }
        self.inner.sync(batch).await
    }
}

fn reporter() -> (Arc<MemorySink>, StatusReporter) {
    let sink = Arc::new(MemorySink::new());
    (sink.clone(), StatusReporter::new(sink))
}

#[tokio::test]
async fn test_no_matches_leaves_content_unchanged() {
    let (sink, reporter) = reporter();
    let text = "Quarterly numbers look fine. Nothing personal in here.";
    let mut doc = MemoryDocument::new(text);

    let report = run(&mut doc, &RunSettings::default(), &reporter)
        .await
        .unwrap();

    assert_eq!(report.redacted(), 0);
    assert!(!report.content_changed());
    assert_eq!(doc.body(), text);
    assert_eq!(
        sink.last().as_deref(),
        Some("Redaction complete! 0 items redacted.")
    );
}

#[tokio::test]
async fn test_one_match_of_each_pattern() {
    let (sink, reporter) = reporter();
    let mut doc = MemoryDocument::new("Contact a@b.com or 123-45-6789 or 555-123-4567");

    let report = run(&mut doc, &RunSettings::default(), &reporter)
        .await
        .unwrap();

    assert_eq!(report.redacted(), 3);
    assert_eq!(
        doc.body(),
        "Contact [REDACTED] or [REDACTED] or [REDACTED]"
    );
    assert!(!doc.body().contains("a@b.com"));
    assert!(!doc.body().contains("123-45-6789"));
    assert!(!doc.body().contains("555-123-4567"));
    assert_eq!(
        sink.last().as_deref(),
        Some("Redaction complete! 3 items redacted.")
    );
}

#[tokio::test]
async fn test_rerun_without_matches_is_a_no_op() {
    let (_, reporter) = reporter();
    let settings = RunSettings {
        header: None,
        ..Default::default()
    };
    let mut doc = MemoryDocument::new("Meeting moved to Thursday.");

    run(&mut doc, &settings, &reporter).await.unwrap();
    let first = doc.body().to_string();
    let report = run(&mut doc, &settings, &reporter).await.unwrap();

    assert_eq!(doc.body(), first);
    assert!(!report.content_changed());
}

#[tokio::test]
async fn test_rerun_on_redacted_text_reports_zero() {
    let (sink, reporter) = reporter();
    let mut doc = MemoryDocument::new("ssn 123-45-6789, mail x@y.org");

    let first = run(&mut doc, &RunSettings::default(), &reporter)
        .await
        .unwrap();
    let redacted = doc.body().to_string();
    let second = run(&mut doc, &RunSettings::default(), &reporter)
        .await
        .unwrap();

    assert_eq!(first.redacted(), 2);
    assert_eq!(second.redacted(), 0);
    assert_eq!(doc.body(), redacted);
    assert_eq!(doc.body(), "ssn [REDACTED], mail [REDACTED]");
    assert_eq!(
        sink.last().as_deref(),
        Some("Redaction complete! 0 items redacted.")
    );
}

#[tokio::test]
async fn test_header_failure_keeps_redactions_and_warns() {
    let (sink, reporter) = reporter();
    let mut doc = MemoryDocument::new("call 555-123-4567").without_sections();

    let report = run(&mut doc, &RunSettings::default(), &reporter)
        .await
        .unwrap();

    assert_eq!(doc.body(), "call [REDACTED]");
    assert_eq!(report.redacted(), 1);
    assert!(report.header.is_degraded());
    assert!(report.has_warnings());

    let messages = sink.messages();
    assert!(messages.contains(&HEADER_WARNING.to_string()));
    assert!(messages.iter().all(|m| !m.starts_with("Error:")));
    assert_eq!(
        sink.last().as_deref(),
        Some("Redaction complete! 1 items redacted. Warning: Could not add header")
    );
}

#[tokio::test]
async fn test_earlier_pattern_claims_overlapping_span() {
    let (_, reporter) = reporter();
    let mut doc = MemoryDocument::new("login 123-45-6789@example.com today");

    let report = run(&mut doc, &RunSettings::default(), &reporter)
        .await
        .unwrap();

    assert_eq!(doc.body(), "login [REDACTED] today");
    assert_eq!(report.redactions.count_for("Email"), Some(1));
    assert_eq!(report.redactions.count_for("SSN"), Some(0));
    assert_eq!(report.redacted(), 1);
}

#[tokio::test]
async fn test_failure_mid_run_keeps_earlier_patterns() {
    let (sink, reporter) = reporter();
    // First sync (Email) succeeds, second (SSN) fails
    let mut host = FlakyHost::new(
        MemoryDocument::new("a@b.com then 123-45-6789 then 555-123-4567"),
        2,
    );

    let failure = run(&mut host, &RunSettings::default(), &reporter)
        .await
        .unwrap_err();

    assert_eq!(failure.applied.total, 1);
    assert_eq!(
        host.inner.body(),
        "[REDACTED] then 123-45-6789 then 555-123-4567"
    );
    let last = sink.last().unwrap();
    assert!(last.starts_with("Error: "));
    assert!(last.contains("connection to host lost"));
}

#[tokio::test]
async fn test_tracking_commit_failure_is_not_an_error() {
    let (sink, reporter) = reporter();
    // No matches, so the syncs are: header insert, header format, tracking
    let mut host = FlakyHost::new(MemoryDocument::new("nothing here"), 3);

    let report = run(&mut host, &RunSettings::default(), &reporter)
        .await
        .unwrap();

    assert!(report.header.is_completed());
    assert!(report.tracking.is_degraded());
    assert!(!sink.messages().contains(&"Track changes enabled".to_string()));
    assert_eq!(
        sink.last().as_deref(),
        Some("Redaction complete! 0 items redacted.")
    );
}

#[tokio::test]
async fn test_missing_tracking_is_silent() {
    let (sink, reporter) = reporter();
    let mut doc = MemoryDocument::new("mail a@b.com").without_tracking();

    let report = run(&mut doc, &RunSettings::default(), &reporter)
        .await
        .unwrap();

    assert_eq!(report.tracking, StepOutcome::Unavailable);
    assert_eq!(
        sink.messages(),
        vec![
            "Starting redaction process...",
            "Adding confidential header...",
            "Redaction complete! 1 items redacted.",
        ]
    );
}

#[tokio::test]
async fn test_second_run_is_tracked_as_revisions() {
    let (_, reporter) = reporter();
    let mut doc = MemoryDocument::new("first a@b.com");

    run(&mut doc, &RunSettings::default(), &reporter)
        .await
        .unwrap();
    assert!(doc.revisions().is_empty());
    assert_eq!(doc.tracking(), Some(TrackingMode::TrackAll));

    let mut batch = EditBatch::new();
    let end = doc.body().len();
    batch.replace_text(Span::new(end, end), " and c@d.com");
    doc.sync(batch).await.unwrap();
    run(&mut doc, &RunSettings::default(), &reporter)
        .await
        .unwrap();

    let originals: Vec<_> = doc.revisions().iter().map(|r| r.original.as_str()).collect();
    assert_eq!(originals, vec!["", "c@d.com"]);
}

#[tokio::test]
async fn test_host_run_agrees_with_dry_run() {
    let text = "Reach jo@ex.com, 987-65-4321, (555) 123-4567 or +1-555-987-6543. \
                Badges emp-123456, EMP-654321 and EMP-111111x.";
    let patterns = PatternSet::with_custom([("Employee", r"EMP-\d{6}")]).unwrap();
    let cases = [
        (SearchOptions::default(), 3),
        (
            SearchOptions {
                match_case: true,
                ..Default::default()
            },
            2,
        ),
        (
            SearchOptions {
                match_whole_word: true,
                ..Default::default()
            },
            2,
        ),
    ];

    for (search, employees) in cases {
        let (_, reporter) = reporter();
        let settings = RunSettings {
            patterns: patterns.clone(),
            search,
            ..Default::default()
        };
        let dry = Redactor::new(&settings.patterns, &settings.marker, search).unwrap();
        let (expected, infos) = dry.redact(text);
        let mut doc = MemoryDocument::new(text);

        let report = run(&mut doc, &settings, &reporter).await.unwrap();

        assert_eq!(doc.body(), expected, "{search:?}");
        assert_eq!(
            report.redacted(),
            infos.iter().map(|i| i.count).sum::<usize>()
        );
        assert_eq!(report.redactions.count_for("Employee"), Some(employees));
    }
}
