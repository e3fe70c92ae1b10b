use anyhow::Result;
use docredact_config::Config;
use docredact_security::Redactor;
use docredact_sources::DocumentHandlerRegistry;
use std::path::Path;

use crate::cli::{MatchOverrides, RunOverrides};

pub async fn handle(
    input: &Path,
    show: bool,
    matching: MatchOverrides,
    config: &Config,
) -> Result<()> {
    let registry = DocumentHandlerRegistry::new();
    let document = registry.open(input).await?;

    // Same patterns, marker and search options `redact` would use
    let overrides = RunOverrides {
        matching,
        ..Default::default()
    };
    let settings = super::run_settings(config, &overrides)?;
    let redactor = Redactor::new(&settings.patterns, settings.marker, settings.search)?;

    let (redacted, infos) = redactor.redact(document.body());
    let total: usize = infos.iter().map(|info| info.count).sum();

    println!("Scanned: {}", input.display());
    if infos.is_empty() {
        println!("No matches.");
    } else {
        for info in &infos {
            println!("  - {}: {}", info.redaction_type, info.count);
        }
    }
    println!("Would redact {} items.", total);

    if show {
        println!("\n--- REDACTED START ---");
        println!("{}", redacted);
        println!("--- REDACTED END ---");
    }

    Ok(())
}
