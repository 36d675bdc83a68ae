//! Plugin lifecycle.
//!
//! [`Plugin::load`] reads the data directory, builds the oracles and container
//! store, and binds every script function. Startup work that depends on all
//! game data being present (settings, mod objects) runs when the host sends
//! [`Message::DataLoaded`].

use std::fmt;
use std::sync::Arc;

use satchel_content::{ContentFactory, ModObjectRegistry, SettingsReader, SettingsReport};
use satchel_core::SnapshotCatalogOracle;

use crate::api::{Diagnostics, Result, RuntimeError, ScriptValue};
use crate::config::RuntimeConfig;
use crate::functions::ScriptFunctions;
use crate::oracle::{IdentityOracleImpl, OracleManager};
use crate::registry::FunctionRegistry;
use crate::repository::{ContainerStore, InMemoryContainerStore};

/// Name the plugin reports to the host; also the default script name.
pub const PLUGIN_NAME: &str = "SatchelExtensions";

const SECTION_SEPARATOR: &str = "-------------------------------------------------";

/// Plugin version triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u16,
    pub minor: u16,
    pub patch: u16,
}

impl Version {
    pub const fn new(major: u16, minor: u16, patch: u16) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Version of this build.
    pub fn current() -> Self {
        Self::new(
            env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or_default(),
            env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or_default(),
            env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or_default(),
        )
    }

    pub fn as_array(&self) -> [i32; 3] {
        [
            i32::from(self.major),
            i32::from(self.minor),
            i32::from(self.patch),
        ]
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Host messages the plugin reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Message {
    PostLoad,
    DataLoaded,
    NewGame,
    PostLoadGame,
}

/// Entry point invoked by the host.
pub struct Plugin;

impl Plugin {
    /// Loads content from `config.data_dir` and binds every script function.
    ///
    /// # Errors
    ///
    /// Fails if the catalog, container or identity files cannot be loaded.
    pub fn load(config: RuntimeConfig, diagnostics: Arc<dyn Diagnostics>) -> Result<Session> {
        tracing::info!("{}", SECTION_SEPARATOR);
        tracing::info!("{} v{}", PLUGIN_NAME, Version::current());
        tracing::info!("{}", SECTION_SEPARATOR);
        tracing::info!("Performing startup tasks...");

        let factory = ContentFactory::new(&config.data_dir);
        let catalog = factory.load_catalog().map_err(RuntimeError::content)?;
        let identity = factory.load_identity().map_err(RuntimeError::content)?;
        let containers = factory.load_containers().map_err(RuntimeError::content)?;
        tracing::info!(
            forms = catalog.len(),
            containers = containers.len(),
            "  >Loaded content from {}.",
            config.data_dir.display()
        );

        let oracles = OracleManager::new(
            Arc::new(catalog),
            Arc::new(IdentityOracleImpl::new(identity)),
        );
        let store = Arc::new(InMemoryContainerStore::with_containers(containers));

        Ok(Session::new(config, oracles, store, diagnostics))
    }
}

/// A loaded plugin instance.
pub struct Session {
    config: RuntimeConfig,
    functions: ScriptFunctions,
    registry: FunctionRegistry,
    mod_objects: Option<ModObjectRegistry>,
    settings: Option<SettingsReport>,
}

impl Session {
    /// Assembles a session from already-built collaborators.
    pub fn new(
        config: RuntimeConfig,
        oracles: OracleManager,
        containers: Arc<dyn ContainerStore>,
        diagnostics: Arc<dyn Diagnostics>,
    ) -> Self {
        tracing::info!("{}", SECTION_SEPARATOR);
        let registry = FunctionRegistry::with_functions(config.script_name.clone());
        tracing::info!("{}", SECTION_SEPARATOR);

        Self {
            config,
            functions: ScriptFunctions::new(oracles, containers, diagnostics),
            registry,
            mod_objects: None,
            settings: None,
        }
    }

    /// Handles a host message.
    ///
    /// # Errors
    ///
    /// On `DataLoaded`, fails if the settings folder cannot be listed or the
    /// mod objects cannot be preloaded.
    pub fn on_message(&mut self, message: Message) -> Result<()> {
        match message {
            Message::DataLoaded => {
                let reader = SettingsReader::new(self.config.resolved_settings_dir());
                self.settings = Some(reader.read().map_err(RuntimeError::content)?);
                tracing::info!("{}", SECTION_SEPARATOR);

                let factory = ContentFactory::new(&self.config.data_dir);
                self.mod_objects = factory
                    .load_mod_objects(self.catalog())
                    .map_err(RuntimeError::content)?;
                tracing::info!("{}", SECTION_SEPARATOR);

                tracing::info!("Finished startup tasks, enjoy your game!");
            }
            other => tracing::debug!(message = %other, "ignoring host message"),
        }
        Ok(())
    }

    /// Dispatches a script call by function name.
    pub fn call(&self, function: &str, args: &[ScriptValue]) -> Result<ScriptValue> {
        self.registry.call(&self.functions, function, args)
    }

    pub fn functions(&self) -> &ScriptFunctions {
        &self.functions
    }

    pub fn registry(&self) -> &FunctionRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &SnapshotCatalogOracle {
        self.functions.oracles().catalog()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Mod objects preloaded on `DataLoaded`, if the data directory has any.
    pub fn mod_objects(&self) -> Option<&ModObjectRegistry> {
        self.mod_objects.as_ref()
    }

    /// Result of the settings pass run on `DataLoaded`.
    pub fn settings_report(&self) -> Option<&SettingsReport> {
        self.settings.as_ref()
    }
}
