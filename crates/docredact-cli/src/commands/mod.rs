pub mod completions;
pub mod init;
pub mod notify;
pub mod patterns;
pub mod redact;
pub mod scan;

use anyhow::Result;
use docredact_config::Config;
use docredact_engine::{HeaderStamp, RunSettings};

use crate::cli::RunOverrides;

/// Merge config file values with command line flags
pub fn run_settings(config: &Config, overrides: &RunOverrides) -> Result<RunSettings> {
    let mut search = config.redaction.search_options();
    search.match_case |= overrides.matching.match_case;
    search.match_whole_word |= overrides.matching.whole_word;

    let header = (config.header.enabled && !overrides.no_header).then(|| HeaderStamp {
        text: config.header.text.clone(),
        format: config.header.format(),
    });

    let tracking =
        (config.tracking.enabled && !overrides.no_tracking).then_some(config.tracking.mode);

    Ok(RunSettings {
        patterns: config.redaction.pattern_set()?,
        marker: overrides
            .matching
            .marker
            .clone()
            .unwrap_or_else(|| config.redaction.marker.clone()),
        search,
        header,
        tracking,
    })
}
