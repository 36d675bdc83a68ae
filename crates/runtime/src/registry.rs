//! Function registry for script dispatch.
//!
//! The [`FunctionRegistry`] binds script functions by name under a single
//! script name and dispatches dynamic calls to them.
//!
//! # Design
//!
//! - **Signatures**: each binding declares its parameter and return types
//! - **Validation**: arity and argument types are checked before dispatch;
//!   mismatches are reported as diagnostics and returned as errors
//! - **Names**: lookups ignore ASCII case, as the VM does

use std::collections::BTreeMap;

use crate::api::{Diagnostic, Result, RuntimeError, ScriptType, ScriptValue};
use crate::functions::ScriptFunctions;

/// Handler invoked with validated arguments.
pub type Handler = fn(&ScriptFunctions, &[ScriptValue]) -> ScriptValue;

/// Declared shape of a script function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FunctionSignature {
    pub name: &'static str,
    pub params: &'static [ScriptType],
    pub returns: ScriptType,
}

impl FunctionSignature {
    pub const fn new(
        name: &'static str,
        params: &'static [ScriptType],
        returns: ScriptType,
    ) -> Self {
        Self {
            name,
            params,
            returns,
        }
    }
}

struct Binding {
    signature: FunctionSignature,
    handler: Handler,
}

/// Registry of bound script functions.
///
/// # Architecture
///
/// ```text
/// FunctionRegistry
/// ├── script: String                            (owning script name)
/// └── bindings: BTreeMap<lowercase name, Binding>
/// ```
pub struct FunctionRegistry {
    script: String,
    bindings: BTreeMap<String, Binding>,
}

impl FunctionRegistry {
    /// Create an empty registry for `script`.
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            bindings: BTreeMap::new(),
        }
    }

    /// Create a registry with every script function bound.
    pub fn with_functions(script: impl Into<String>) -> Self {
        let mut registry = Self::new(script);
        crate::functions::register_functions(&mut registry);
        registry
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    /// Bind a function, replacing any binding with the same name.
    pub fn bind(&mut self, signature: FunctionSignature, handler: Handler) {
        tracing::info!("  >Binding {}...", signature.name);
        self.bindings.insert(
            signature.name.to_ascii_lowercase(),
            Binding { signature, handler },
        );
    }

    pub fn signature(&self, name: &str) -> Option<&FunctionSignature> {
        self.bindings
            .get(&name.to_ascii_lowercase())
            .map(|binding| &binding.signature)
    }

    /// Signatures of every bound function, sorted by name.
    pub fn signatures(&self) -> impl Iterator<Item = &FunctionSignature> + '_ {
        self.bindings.values().map(|binding| &binding.signature)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Dispatch a call by name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown functions, wrong argument counts and
    /// mistyped arguments. Arity and type errors are also reported through the
    /// functions' diagnostics channel.
    pub fn call(
        &self,
        functions: &ScriptFunctions,
        name: &str,
        args: &[ScriptValue],
    ) -> Result<ScriptValue> {
        let binding = self
            .bindings
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| RuntimeError::UnknownFunction {
                script: self.script.clone(),
                function: name.to_string(),
            })?;

        if let Err(err) = Self::check_args(&binding.signature, args) {
            functions
                .diagnostics()
                .report(Diagnostic::from_error(binding.signature.name, &err));
            return Err(err);
        }

        tracing::debug!(function = binding.signature.name, args = args.len(), "dispatch");
        Ok((binding.handler)(functions, args))
    }

    fn check_args(signature: &FunctionSignature, args: &[ScriptValue]) -> Result<()> {
        if args.len() != signature.params.len() {
            return Err(RuntimeError::Arity {
                function: signature.name,
                expected: signature.params.len(),
                provided: args.len(),
            });
        }
        for (index, (arg, &expected)) in args.iter().zip(signature.params).enumerate() {
            if !arg.matches(expected) {
                return Err(RuntimeError::ArgumentType {
                    function: signature.name,
                    index,
                    expected,
                    provided: arg.kind().to_string(),
                });
            }
        }
        Ok(())
    }
}
