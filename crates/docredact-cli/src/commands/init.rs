use anyhow::Result;
use docredact_config::Config;
use std::path::Path;

pub fn handle(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    Config::default().save(config_path)?;

    println!("✓ Created {}", config_path.display());
    println!("  Add [[redaction.custom_patterns]] entries to redact more than the built-ins");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        handle(&path, false).unwrap();
        assert!(Config::load_from(&path).is_ok());

        assert!(handle(&path, false).is_err());
        assert!(handle(&path, true).is_ok());
    }
}
