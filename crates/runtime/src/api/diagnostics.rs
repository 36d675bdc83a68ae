//! Script diagnostics channel.
//!
//! Contract violations are reported to the calling script's stack trace rather
//! than raised into script state. This is separate from process logging:
//! [`TracingDiagnostics`] forwards to `tracing`, [`RecordingDiagnostics`]
//! keeps entries in memory for inspection.

use std::sync::{Mutex, PoisonError};

use satchel_core::{ErrorSeverity, GameError};

/// Severity of a stack trace entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl From<ErrorSeverity> for Severity {
    fn from(severity: ErrorSeverity) -> Self {
        match severity {
            ErrorSeverity::Recoverable => Self::Info,
            ErrorSeverity::Validation => Self::Warning,
            ErrorSeverity::Internal | ErrorSeverity::Fatal => Self::Error,
        }
    }
}

/// One stack trace entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Script function that raised the entry.
    pub function: &'static str,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn new(function: &'static str, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            function,
            message: message.into(),
            severity,
        }
    }

    pub fn warning(function: &'static str, message: impl Into<String>) -> Self {
        Self::new(function, message, Severity::Warning)
    }

    /// Builds an entry from an error, deriving severity from its classification.
    /// The container and item named by the error's context are appended.
    pub fn from_error<E>(function: &'static str, error: &E) -> Self
    where
        E: GameError + ?Sized,
    {
        let mut message = error.to_string();
        if let Some(context) = error.context() {
            let parts = context.to_string();
            if !parts.is_empty() {
                message = format!("{} ({})", message, parts);
            }
        }
        Self::new(function, message, error.severity().into())
    }
}

/// Receives diagnostics raised at the script boundary.
pub trait Diagnostics: Send + Sync {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        let Diagnostic {
            function,
            message,
            severity,
        } = diagnostic;
        match severity {
            Severity::Info => tracing::info!(function, "{}", message),
            Severity::Warning => tracing::warn!(function, "{}", message),
            Severity::Error => tracing::error!(function, "{}", message),
        }
    }
}

/// Stores diagnostics in memory.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry recorded so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns every recorded entry.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::debug!(function = diagnostic.function, severity = %diagnostic.severity, "{}", diagnostic.message);
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satchel_core::{ErrorContext, FormId, InventoryError};

    #[test]
    fn severity_follows_error_classification() {
        let missing = InventoryError::missing_argument("IsFormStolen");
        let entry = Diagnostic::from_error("IsFormStolen", &missing);
        assert_eq!(entry.severity, Severity::Warning);
        assert_eq!(entry.message, "IsFormStolen passed with at least 1 NONE argument");
    }

    #[test]
    fn entries_name_the_container_and_item() {
        let context = ErrorContext::new("SetFormFactionOwner")
            .with_container(FormId(0x14))
            .with_item(FormId(0x12EB7));
        let err = InventoryError::invalid_owner(FormId(0x1A67B), context);

        let entry = Diagnostic::from_error("SetFormFactionOwner", &err);
        assert_eq!(entry.severity, Severity::Warning);
        assert_eq!(
            entry.message,
            "form 0x0001A67B cannot own items (container 0x00000014, item 0x00012EB7)"
        );
    }

    #[test]
    fn recording_drains() {
        let diagnostics = RecordingDiagnostics::new();
        diagnostics.report(Diagnostic::warning("GetVersion", "first"));
        diagnostics.report(Diagnostic::warning("GetVersion", "second"));

        assert_eq!(diagnostics.entries().len(), 2);
        assert_eq!(diagnostics.drain().len(), 2);
        assert!(diagnostics.is_empty());
    }
}
