use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern '{label}': {source}")]
    Invalid {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("Pattern set must contain at least one pattern")]
    Empty,
}

/// A matching rule paired with a human-readable label
#[derive(Debug, Clone)]
pub struct RedactionPattern {
    label: String,
    regex: Regex,
}

impl RedactionPattern {
    pub fn new(label: impl Into<String>, source: &str) -> Result<Self, PatternError> {
        let label = label.into();
        let regex = Regex::new(source).map_err(|source| PatternError::Invalid {
            label: label.clone(),
            source,
        })?;
        Ok(Self { label, regex })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Regex source, as handed to a host search
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

lazy_static! {
    // Order matters: a later pattern only sees text left over by earlier ones.
    // `(?-u)` keeps `\d` and `\b` to ASCII digits and ASCII word characters.
    static ref BUILTIN_PATTERNS: Vec<RedactionPattern> = vec![
        builtin("Email", r"(?-u)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b"),
        builtin("SSN", r"(?-u)\b\d{3}[-.]?\d{2}[-.]?\d{4}\b"),
        builtin("Phone", r"(?-u)\b(?:\+?1[-.]?)?\(?\d{3}\)?[-.]?\d{3}[-.]?\d{4}\b"),
    ];
}

fn builtin(label: &str, source: &str) -> RedactionPattern {
    RedactionPattern {
        label: label.to_string(),
        regex: Regex::new(source).expect("built-in pattern must compile"),
    }
}

/// Ordered, non-empty list of patterns applied by one redaction run
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<RedactionPattern>,
}

impl PatternSet {
    /// Email, SSN, Phone, in that order
    pub fn builtin() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS.clone(),
        }
    }

    /// Built-ins followed by custom `(label, regex)` definitions
    pub fn with_custom<I, L, S>(custom: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (L, S)>,
        L: Into<String>,
        S: AsRef<str>,
    {
        let mut set = Self::builtin();
        for (label, source) in custom {
            set.patterns
                .push(RedactionPattern::new(label, source.as_ref())?);
        }
        Ok(set)
    }

    pub fn from_patterns(patterns: Vec<RedactionPattern>) -> Result<Self, PatternError> {
        if patterns.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RedactionPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.patterns.iter().map(RedactionPattern::label).collect()
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a RedactionPattern;
    type IntoIter = std::slice::Iter<'a, RedactionPattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
