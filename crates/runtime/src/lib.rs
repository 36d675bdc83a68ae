//! Script-facing runtime for the satchel inventory rules.
//!
//! This crate wires the pure rules in `satchel-core` to a host: oracle
//! implementations, a live container store, the diagnostics channel, and the
//! typed script functions that validate arguments and convert every failure
//! into a neutral return value.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes errors, diagnostics and script values
//! - [`functions`] implements the script functions
//! - [`registry`] binds them by name for dynamic dispatch
//! - [`plugin`] hosts the load / data-loaded lifecycle
//! - [`oracle`] and [`repository`] provide data adapters
pub mod api;
pub mod config;
pub mod functions;
pub mod oracle;
pub mod plugin;
pub mod registry;
pub mod repository;

pub use api::{
    Diagnostic, Diagnostics, RecordingDiagnostics, Result, RuntimeError, ScriptType, ScriptValue,
    Severity, TracingDiagnostics,
};
pub use config::RuntimeConfig;
pub use functions::ScriptFunctions;
pub use oracle::{IdentityOracleImpl, OracleManager, ValuationOracleImpl};
pub use plugin::{Message, PLUGIN_NAME, Plugin, Session, Version};
pub use registry::{FunctionRegistry, FunctionSignature, Handler};
pub use repository::{ContainerStore, ContainerStoreExt, InMemoryContainerStore, RepositoryError};
