use anyhow::Result;
use docredact_config::Config;
use docredact_core::DocumentHost;
use docredact_engine::{RunReport, Session, StatusReporter, StepOutcome};
use docredact_sources::DocumentHandlerRegistry;
use std::path::Path;

use crate::cli::RunOverrides;

pub async fn handle(
    input: &Path,
    output: Option<&Path>,
    overrides: &RunOverrides,
    json: bool,
    config: &Config,
) -> Result<()> {
    let registry = DocumentHandlerRegistry::new();
    let settings = super::run_settings(config, overrides)?;

    let mut document = registry.open(input).await?;
    let session = Session::on_ready(document.host_info(), settings, StatusReporter::console())?;

    let result = session.redact(&mut document).await;

    // Whatever the run committed is part of the document now, even on failure
    let destination = output.unwrap_or(input);
    registry.save(&document, destination).await?;

    let report = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    let dropped = registry.discarded(&document, destination)?;
    if dropped.is_empty() {
        println!("Saved: {}", destination.display());
    } else {
        println!(
            "Saved: {} ({} not written to this format)",
            destination.display(),
            dropped.join(" and ")
        );
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    println!("\nRedactions:");
    for pattern in &report.redactions.per_pattern {
        println!("  - {}: {}", pattern.label, pattern.count);
    }

    match &report.header {
        StepOutcome::Completed(()) => println!("Header: stamped"),
        StepOutcome::Skipped => println!("Header: skipped"),
        StepOutcome::Degraded { reason } => println!("Header: not added ({})", reason),
        StepOutcome::Unavailable => println!("Header: unavailable"),
    }

    match &report.tracking {
        StepOutcome::Completed(mode) => println!("Tracking: {:?}", mode),
        StepOutcome::Skipped => println!("Tracking: skipped"),
        StepOutcome::Degraded { .. } | StepOutcome::Unavailable => {
            println!("Tracking: unchanged")
        }
    }
}
