//! Form reference strings.
//!
//! Two spellings are accepted:
//!
//! ```text
//! Skyrim.esm|0x012EB7     plugin file and hex local id (0x prefix required)
//! IronSword               editor id
//! ```
//!
//! Any string that does not split into exactly two `|` separated parts is
//! treated as an editor id.

use std::fmt;

use satchel_core::{CatalogOracle, FormId};

/// Parsed form reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormReference {
    /// Local id inside a plugin file.
    Local { plugin: String, local_id: u32 },
    EditorId(String),
}

impl FormReference {
    /// Parses a reference string.
    ///
    /// Returns `None` for a plugin reference whose id part is not a
    /// `0x`-prefixed hex number.
    pub fn parse(input: &str) -> Option<Self> {
        let parts: Vec<&str> = input.split('|').collect();
        match parts.as_slice() {
            [plugin, id] => {
                let local_id = parse_prefixed_hex(id)?;
                Some(Self::Local {
                    plugin: (*plugin).to_string(),
                    local_id,
                })
            }
            _ => Some(Self::EditorId(input.to_string())),
        }
    }

    /// Resolves this reference against `catalog`.
    ///
    /// Plugin references resolve through the catalog's load order; the upper
    /// byte of the local id is replaced by the plugin's load index.
    pub fn resolve<C>(&self, catalog: &C) -> Option<FormId>
    where
        C: CatalogOracle + ?Sized,
    {
        match self {
            Self::Local { plugin, local_id } => {
                let index = catalog.plugin_index(plugin)?;
                let id = FormId::from_parts(index, *local_id);
                catalog.form_kind(id).map(|_| id)
            }
            Self::EditorId(editor_id) => catalog.lookup_editor_id(editor_id),
        }
    }
}

impl fmt::Display for FormReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local { plugin, local_id } => write!(f, "{}|0x{:06X}", plugin, local_id),
            Self::EditorId(editor_id) => f.write_str(editor_id),
        }
    }
}

/// Parses and resolves `input` in one step.
///
/// A plugin reference that names a plugin outside the load order, or a local
/// id the catalog does not know, falls back to an editor id lookup of the
/// whole string.
pub fn resolve_form<C>(catalog: &C, input: &str) -> Option<FormId>
where
    C: CatalogOracle + ?Sized,
{
    let reference = FormReference::parse(input)?;
    reference
        .resolve(catalog)
        .or_else(|| match reference {
            FormReference::Local { .. } => catalog.lookup_editor_id(input),
            FormReference::EditorId(_) => None,
        })
}

fn parse_prefixed_hex(input: &str) -> Option<u32> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))?;
    if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}
