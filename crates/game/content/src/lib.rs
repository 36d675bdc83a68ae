//! Data-driven content for satchel hosts.
//!
//! This crate turns files in a data directory into the read-only inputs the
//! inventory rules consume:
//! - Catalog snapshots (RON)
//! - Container fixtures (RON)
//! - The acting identity (TOML)
//! - JSON settings files, validated against the parser version
//! - Mod objects: named forms resolved from form reference strings
//!
//! Form reference parsing ([`forms`]) has no file dependencies and is always
//! available; everything else lives behind the `loaders` feature.

pub mod forms;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub mod mod_objects;

#[cfg(feature = "loaders")]
pub mod settings;

pub use forms::{FormReference, resolve_form};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ContainerLoader, ContentFactory, IdentityLoader, LoadResult};

#[cfg(feature = "loaders")]
pub use mod_objects::{ModObjectRegistry, ModObjectSpec, PropertySpec};

#[cfg(feature = "loaders")]
pub use settings::{MINIMUM_VERSION_FIELD, PARSER_VERSION, SettingsReader, SettingsReport};
