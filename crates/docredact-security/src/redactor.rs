use docredact_core::{Result, SearchOptions, compile_search};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::pattern::PatternSet;

/// Literal text inserted in place of every match
pub const REDACTION_MARKER: &str = "[REDACTED]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub redaction_type: String,
    pub count: usize,
}

/// Redacts a string in memory, pattern by pattern. Patterns are compiled with
/// the same search options a host search would use.
pub struct Redactor {
    rules: Vec<(String, Regex)>,
    marker: String,
    options: SearchOptions,
}

impl Redactor {
    pub fn new(
        patterns: &PatternSet,
        marker: impl Into<String>,
        options: SearchOptions,
    ) -> Result<Self> {
        let rules = patterns
            .iter()
            .map(|pattern| {
                let regex = compile_search(pattern.source(), options)?;
                Ok((pattern.label().to_string(), regex))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            marker: marker.into(),
            options,
        })
    }

    /// Built-in patterns, default marker, default search options
    pub fn builtin() -> Result<Self> {
        Self::new(
            &PatternSet::builtin(),
            REDACTION_MARKER,
            SearchOptions::default(),
        )
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rules.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Redact content. Each pattern runs over the output of the previous one,
    /// so the earlier pattern claims any overlapping text.
    pub fn redact(&self, content: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = content.to_string();
        let mut redactions = Vec::new();

        for (label, regex) in &self.rules {
            let count = regex.find_iter(&result).filter(|m| !m.is_empty()).count();

            if count > 0 {
                result = regex
                    .replace_all(&result, NoExpand(&self.marker))
                    .into_owned();

                redactions.push(RedactionInfo {
                    redaction_type: label.clone(),
                    count,
                });
            }
        }

        (result, redactions)
    }

    /// Number of spans a run would replace
    pub fn count(&self, content: &str) -> usize {
        self.redact(content).1.iter().map(|info| info.count).sum()
    }
}
