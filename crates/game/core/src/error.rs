//! Common error infrastructure for satchel-core.
//!
//! This module provides shared types and traits used across all error types in
//! the crate. Domain-specific errors (`OracleError`, `InventoryError`) are
//! defined next to the code that raises them.
//!
//! # Design Principles
//!
//! - **Local failures**: nothing in the core is fatal to the host; every error
//!   is reported and converted into a neutral script result by the caller
//! - **Rich Context**: errors name the operation, container and item involved
//! - **Severity Classification**: errors are categorized for diagnostics

use crate::state::FormId;

/// Severity level of an error, used for categorization and diagnostics.
///
/// - **Recoverable**: the call yields a neutral result; retrying with other
///   arguments may succeed
/// - **Validation**: invalid caller input (absent argument, bad range)
/// - **Internal**: unexpected inconsistency between catalog and container data
/// - **Fatal**: missing collaborator; no query can be answered
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Contextual information attached to errors for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorContext {
    /// Script-facing operation that raised the error.
    pub operation: Option<&'static str>,

    /// Container reference the operation was evaluated against.
    pub container: Option<FormId>,

    /// Item the operation was evaluated for.
    pub item: Option<FormId>,

    /// Optional static message providing additional context.
    pub message: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new error context for the given operation.
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self {
            operation: Some(operation),
            container: None,
            item: None,
            message: None,
        }
    }

    /// Attaches a container to this context (builder pattern).
    #[must_use]
    pub const fn with_container(mut self, container: FormId) -> Self {
        self.container = Some(container);
        self
    }

    /// Attaches an item to this context (builder pattern).
    #[must_use]
    pub const fn with_item(mut self, item: FormId) -> Self {
        self.item = Some(item);
        self
    }

    /// Attaches a static message to this context (builder pattern).
    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }
}

/// Renders the container, item and message parts; the operation is left to
/// the error message itself.
impl core::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut separator = "";
        if let Some(container) = self.container {
            write!(f, "container {}", container)?;
            separator = ", ";
        }
        if let Some(item) = self.item {
            write!(f, "{}item {}", separator, item)?;
            separator = ", ";
        }
        if let Some(message) = self.message {
            write!(f, "{}{}", separator, message)?;
        }
        Ok(())
    }
}

/// Common trait for all satchel-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns the context information for this error, if available.
    fn context(&self) -> Option<&ErrorContext> {
        None
    }

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
