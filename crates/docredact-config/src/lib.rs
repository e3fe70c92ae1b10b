use docredact_core::{Alignment, ParagraphFormat, SearchOptions, TrackingMode};
use docredact_security::{PatternSet, REDACTION_MARKER};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for docredact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub redaction: RedactionSettings,

    #[serde(default)]
    pub header: HeaderSettings,

    #[serde(default)]
    pub tracking: TrackingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionSettings {
    #[serde(default = "default_marker")]
    pub marker: String,

    #[serde(default)]
    pub match_case: bool,

    #[serde(default)]
    pub match_whole_word: bool,

    #[serde(default)]
    pub ignore_punct: bool,

    /// Extra patterns, applied after the built-in ones
    #[serde(default)]
    pub custom_patterns: Vec<CustomPattern>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomPattern {
    pub label: String,
    pub regex: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeaderSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_header_text")]
    pub text: String,

    #[serde(default = "default_true")]
    pub bold: bool,

    #[serde(default = "default_header_size")]
    pub size: f32,

    #[serde(default = "default_header_color")]
    pub color: String,

    #[serde(default = "default_header_alignment")]
    pub alignment: Alignment,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_tracking_mode")]
    pub mode: TrackingMode,
}

impl Default for RedactionSettings {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            match_case: false,
            match_whole_word: false,
            ignore_punct: false,
            custom_patterns: Vec::new(),
        }
    }
}

impl Default for HeaderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            text: default_header_text(),
            bold: true,
            size: default_header_size(),
            color: default_header_color(),
            alignment: default_header_alignment(),
        }
    }
}

impl Default for TrackingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: default_tracking_mode(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_marker() -> String {
    REDACTION_MARKER.to_string()
}

fn default_header_text() -> String {
    "CONFIDENTIAL DOCUMENT".to_string()
}

fn default_header_size() -> f32 {
    14.0
}

fn default_header_color() -> String {
    "red".to_string()
}

fn default_header_alignment() -> Alignment {
    Alignment::Centered
}

fn default_tracking_mode() -> TrackingMode {
    TrackingMode::TrackAll
}

impl RedactionSettings {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            match_case: self.match_case,
            match_whole_word: self.match_whole_word,
            ignore_punct: self.ignore_punct,
        }
    }

    /// Built-in patterns plus the configured custom ones
    pub fn pattern_set(&self) -> anyhow::Result<PatternSet> {
        let custom = self
            .custom_patterns
            .iter()
            .map(|p| (p.label.clone(), p.regex.as_str()));
        Ok(PatternSet::with_custom(custom)?)
    }
}

impl HeaderSettings {
    pub fn format(&self) -> ParagraphFormat {
        ParagraphFormat {
            bold: self.bold,
            size: self.size,
            color: self.color.clone(),
            alignment: self.alignment,
        }
    }
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&Self::config_path())
    }

    /// Load config from `path`, writing the defaults there first if missing
    pub fn load_or_create(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Config::default();
            config.save(path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        // Surface bad custom patterns at load time, not mid-run
        config.redaction.pattern_set()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "docredact", "docredact") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.docredact/config.toml")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.redaction.marker, "[REDACTED]");
        assert_eq!(config.header.text, "CONFIDENTIAL DOCUMENT");
        assert_eq!(config.header.size, 14.0);
        assert_eq!(config.header.alignment, Alignment::Centered);
        assert_eq!(config.tracking.mode, TrackingMode::TrackAll);
        assert_eq!(config.redaction.search_options(), SearchOptions::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.redaction.marker, config.redaction.marker);
        assert_eq!(parsed.header.color, "red");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml_str = r#"
[redaction]
marker = "XXX"

[[redaction.custom_patterns]]
label = "Employee"
regex = 'EMP-\d{6}'

[header]
enabled = false
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.redaction.marker, "XXX");
        assert!(!config.header.enabled);
        assert_eq!(config.header.text, "CONFIDENTIAL DOCUMENT");
        assert!(config.tracking.enabled);

        let set = config.redaction.pattern_set().unwrap();
        assert_eq!(set.labels(), vec!["Email", "SSN", "Phone", "Employee"]);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_or_create(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.redaction.marker, "[REDACTED]");

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.header.text, config.header.text);
    }

    #[test]
    fn test_invalid_custom_pattern_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[[redaction.custom_patterns]]\nlabel = \"Bad\"\nregex = \"(open\"\n",
        )
        .unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
