//! Named mod objects.
//!
//! A mod-object file maps property names to form references. Single
//! properties are stored under their own name; array properties are flattened
//! into `"{index}|{name}"` keys. Lookups are case-insensitive.
//!
//! ```ron
//! {
//!     "StolenGoodsChest": Form(Some("Satchel.esp|0x000D62")),
//!     "Rewards": Forms([Some("Gold001"), Some("Skyrim.esm|0x012EB7")]),
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use satchel_core::{CatalogOracle, FormId};
use serde::{Deserialize, Serialize};

use crate::forms::resolve_form;
use crate::loaders::{LoadResult, read_file};

/// Value of a single mod-object property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertySpec {
    Form(Option<String>),
    Forms(Vec<Option<String>>),
}

/// Contents of a mod-object file, keyed by property name.
pub type ModObjectSpec = BTreeMap<String, PropertySpec>;

/// Resolved mod objects.
#[derive(Clone, Debug, Default)]
pub struct ModObjectRegistry {
    objects: HashMap<String, FormId>,
}

impl ModObjectRegistry {
    /// Reads a mod-object file without resolving it.
    pub fn load_spec(path: &Path) -> LoadResult<ModObjectSpec> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse mod object RON: {}", e))
    }

    /// Resolves every property against `catalog`.
    ///
    /// Any unset or unresolvable property fails the whole preload.
    pub fn preload<C>(spec: &ModObjectSpec, catalog: &C) -> LoadResult<Self>
    where
        C: CatalogOracle + ?Sized,
    {
        tracing::info!("Preloading Mod Objects...");
        let mut objects = HashMap::new();

        for (name, property) in spec {
            match property {
                PropertySpec::Form(reference) => {
                    let form = reference
                        .as_deref()
                        .and_then(|reference| resolve_form(catalog, reference))
                        .ok_or_else(|| anyhow::anyhow!("Property {} is null.", name))?;
                    objects.insert(name.to_ascii_lowercase(), form);
                }
                PropertySpec::Forms(references) => {
                    for (index, reference) in references.iter().enumerate() {
                        let form = reference
                            .as_deref()
                            .and_then(|reference| resolve_form(catalog, reference))
                            .ok_or_else(|| {
                                anyhow::anyhow!("Undefined element {} in array property {}.", index, name)
                            })?;
                        objects.insert(format!("{}|{}", index, name).to_ascii_lowercase(), form);
                    }
                }
            }
        }

        tracing::info!("  >Found {} Mod Objects.", objects.len());
        Ok(Self { objects })
    }

    /// Looks up a mod object by key.
    pub fn get(&self, key: &str) -> LoadResult<FormId> {
        self.objects
            .get(&key.to_ascii_lowercase())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Mod Object {} was requested, but was not found.", key))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
