use anyhow::Result;
use docredact_config::Config;

pub fn handle(config: &Config) -> Result<()> {
    let patterns = config.redaction.pattern_set()?;

    println!("Patterns ({}), applied in this order:", patterns.len());
    for (i, pattern) in patterns.iter().enumerate() {
        println!("  {}. {}", i + 1, pattern.label());
        println!("     {}", pattern.source());
    }
    println!("Marker: {}", config.redaction.marker);

    Ok(())
}
