//! Add-in session lifecycle
//!
//! A session starts when the host reports it is ready. Only word processors
//! get the redact action; the ribbon command is available everywhere and
//! never touches the document.

use docredact_core::{DocumentHost, HostInfo, HostKind};
use serde::Serialize;
use tracing::info;

use crate::error::{EngineError, RunFailure};
use crate::run::{RunReport, RunSettings, run};
use crate::status::StatusReporter;

pub const READY_STATUS: &str = "Ready to redact";
pub const READY_BANNER: &str = "Document Redactor is ready to use.";

pub struct Session {
    host: HostInfo,
    settings: RunSettings,
    reporter: StatusReporter,
}

impl Session {
    /// Readiness callback, fired once per session
    pub fn on_ready(
        host: HostInfo,
        settings: RunSettings,
        reporter: StatusReporter,
    ) -> Result<Self, EngineError> {
        if host.kind != HostKind::WordProcessor {
            return Err(EngineError::UnsupportedHost(host.name));
        }

        info!(host = %host.name, "Session ready");
        reporter.info(READY_STATUS);

        Ok(Self {
            host,
            settings,
            reporter,
        })
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// The "redact" button
    pub async fn redact(&self, document: &mut dyn DocumentHost) -> Result<RunReport, RunFailure> {
        run(document, &self.settings, &self.reporter).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Informational,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub icon: String,
    pub persistent: bool,
}

/// Toolbar command: shows a banner and nothing else
pub fn ribbon_action(reporter: &StatusReporter) -> Notification {
    reporter.info(READY_BANNER);
    Notification {
        kind: NotificationKind::Informational,
        message: READY_BANNER.to_string(),
        icon: "Icon.80x80".to_string(),
        persistent: true,
    }
}
