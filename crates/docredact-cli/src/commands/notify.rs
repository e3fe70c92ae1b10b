use anyhow::Result;
use docredact_engine::{StatusReporter, ribbon_action};

pub fn handle() -> Result<()> {
    let notification = ribbon_action(&StatusReporter::console());
    tracing::debug!(
        icon = %notification.icon,
        persistent = notification.persistent,
        "Banner shown"
    );
    Ok(())
}
