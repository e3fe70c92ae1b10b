//! Regex compilation for pattern searches

use regex::{Regex, RegexBuilder};

use crate::document::SearchOptions;
use crate::{HostError, Result};

/// Build the regex a search runs with. Hosts and dry runs both go through
/// here so they agree on what a pattern matches.
pub fn compile_search(pattern: &str, options: SearchOptions) -> Result<Regex> {
    if options.ignore_punct {
        return Err(HostError::Unsupported(
            "ignore_punct for pattern searches".to_string(),
        ));
    }

    let source = if options.match_whole_word {
        format!(r"\b(?:{})\b", pattern)
    } else {
        pattern.to_string()
    };

    Ok(RegexBuilder::new(&source)
        .case_insensitive(!options.match_case)
        .build()?)
}
