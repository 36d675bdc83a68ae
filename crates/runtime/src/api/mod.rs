//! Types exchanged between the runtime and its callers.
mod diagnostics;
mod errors;
mod values;

pub use diagnostics::{Diagnostic, Diagnostics, RecordingDiagnostics, Severity, TracingDiagnostics};
pub use errors::{Result, RuntimeError};
pub use values::{ScriptType, ScriptValue};
