//! Dynamic values exchanged with the scripting VM.

use std::fmt;

use satchel_core::FormId;

/// Parameter and return types a script function can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ScriptType {
    Bool,
    Int,
    /// Nullable form reference.
    Form,
    IntArray,
}

/// A single argument or return value.
///
/// `None` is the VM's null sentinel; it is only accepted where a form is
/// expected.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ScriptValue {
    #[default]
    None,
    Bool(bool),
    Int(i32),
    Form(FormId),
    IntArray(Vec<i32>),
}

impl ScriptValue {
    /// Returns true if this value can be passed where `ty` is expected.
    pub fn matches(&self, ty: ScriptType) -> bool {
        matches!(
            (self, ty),
            (Self::None, ScriptType::Form)
                | (Self::Bool(_), ScriptType::Bool)
                | (Self::Int(_), ScriptType::Int)
                | (Self::Form(_), ScriptType::Form)
                | (Self::IntArray(_), ScriptType::IntArray)
        )
    }

    pub fn as_form(&self) -> Option<FormId> {
        match self {
            Self::Form(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Short name of the value's kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Form(_) => "form",
            Self::IntArray(_) => "int_array",
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ScriptValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<Option<FormId>> for ScriptValue {
    fn from(value: Option<FormId>) -> Self {
        value.map_or(Self::None, Self::Form)
    }
}

impl From<Vec<i32>> for ScriptValue {
    fn from(value: Vec<i32>) -> Self {
        Self::IntArray(value)
    }
}

impl fmt::Display for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Int(value) => write!(f, "{}", value),
            Self::Form(id) => write!(f, "{}", id),
            Self::IntArray(values) => {
                let joined: Vec<String> = values.iter().map(i32::to_string).collect();
                write!(f, "[{}]", joined.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_only_matches_forms() {
        assert!(ScriptValue::None.matches(ScriptType::Form));
        assert!(!ScriptValue::None.matches(ScriptType::Int));
        assert!(!ScriptValue::Int(3).matches(ScriptType::Form));
        assert!(ScriptValue::Form(FormId(0x14)).matches(ScriptType::Form));
    }

    #[test]
    fn display_formats() {
        assert_eq!(ScriptValue::from(Some(FormId(0x12EB7))).to_string(), "0x00012EB7");
        assert_eq!(ScriptValue::from(None).to_string(), "None");
        assert_eq!(ScriptValue::from(vec![0, 1, 0]).to_string(), "[0, 1, 0]");
    }
}
