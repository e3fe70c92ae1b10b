//! Change tracking enabler

use docredact_core::{DocumentHost, EditBatch, TrackingMode};
use tracing::{debug, warn};

use crate::outcome::StepOutcome;

/// Switch the host to `mode` if it can track changes at all.
///
/// A host without tracking is `Unavailable` and only logged. A failing
/// commit is `Degraded`, also only logged.
pub async fn enable_tracking(
    host: &mut dyn DocumentHost,
    mode: TrackingMode,
) -> StepOutcome<TrackingMode> {
    let current = match host.tracking_mode().await {
        Ok(Some(current)) => current,
        Ok(None) => {
            debug!("Track changes not available on this host");
            return StepOutcome::Unavailable;
        }
        Err(e) => {
            warn!(error = %e, "Could not read tracking mode");
            return StepOutcome::Degraded {
                reason: e.to_string(),
            };
        }
    };

    let mut batch = EditBatch::new();
    batch.set_tracking_mode(mode);

    match host.sync(batch).await {
        Ok(_) => {
            debug!(from = ?current, to = ?mode, "Tracking mode set");
            StepOutcome::Completed(mode)
        }
        Err(e) => {
            warn!(error = %e, "Could not enable track changes");
            StepOutcome::Degraded {
                reason: e.to_string(),
            }
        }
    }
}
