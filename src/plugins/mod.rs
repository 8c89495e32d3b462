//! Plugin system for registering node types and socket compatibilities
//!
//! A plugin hands its node factories and compatibility pairs to a
//! [`PluginRegistry`] when loaded. The registry owns both tables and is
//! passed by reference to whatever needs to create nodes or check links.

pub mod objects;
pub mod standard;

use crate::compatibility::CompatibilityRegistry;
use crate::nodes::NodeRegistry;
use log::{info, warn};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PluginError {
    #[error("plugin '{0}' is already loaded")]
    AlreadyLoaded(String),
}

/// A bundle of node types and compatibility rules
pub trait Plugin {
    /// Unique plugin name
    fn name(&self) -> &'static str;

    /// Register node factories and compatibility pairs
    fn register(&self, registry: &mut PluginRegistry);
}

/// Node and compatibility tables filled in by loaded plugins
#[derive(Default)]
pub struct PluginRegistry {
    pub nodes: NodeRegistry,
    pub compatibility: CompatibilityRegistry,
    loaded: BTreeSet<&'static str>,
}

impl PluginRegistry {
    /// Create a registry with no plugins loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the plugins shipped in this crate
    pub fn with_builtin_plugins() -> Self {
        let mut registry = Self::new();
        for plugin in builtin_plugins() {
            if let Err(err) = registry.load(plugin.as_ref()) {
                warn!("{}", err);
            }
        }
        registry
    }

    /// Load a plugin, letting it register its content
    pub fn load(&mut self, plugin: &dyn Plugin) -> Result<(), PluginError> {
        let name = plugin.name();
        if !self.loaded.insert(name) {
            return Err(PluginError::AlreadyLoaded(name.to_string()));
        }

        plugin.register(self);
        info!("Loaded plugin: {}", name);
        Ok(())
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains(name)
    }

    /// Names of all loaded plugins
    pub fn loaded_plugins(&self) -> Vec<&'static str> {
        self.loaded.iter().copied().collect()
    }
}

/// Plugins shipped in this crate
pub fn builtin_plugins() -> Vec<Box<dyn Plugin>> {
    vec![Box::new(standard::StandardPlugin), Box::new(objects::ObjectsPlugin)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::{tags, SocketType};

    struct EmptyPlugin;

    impl Plugin for EmptyPlugin {
        fn name(&self) -> &'static str {
            "empty"
        }

        fn register(&self, _registry: &mut PluginRegistry) {}
    }

    #[test]
    fn test_plugin_loads_once() {
        let mut registry = PluginRegistry::new();
        assert!(registry.load(&EmptyPlugin).is_ok());
        assert!(registry.is_loaded("empty"));
        assert_eq!(
            registry.load(&EmptyPlugin),
            Err(PluginError::AlreadyLoaded("empty".to_string()))
        );
    }

    #[test]
    fn test_builtin_plugins() {
        let registry = PluginRegistry::with_builtin_plugins();

        assert_eq!(registry.loaded_plugins(), vec!["objects", "standard"]);
        assert_eq!(registry.nodes.node_types(), vec!["ADDPROPERTIES", "FILTEROBJECTS"]);
        assert!(registry.compatibility.is_compatible(
            &SocketType::new(tags::INTEGER),
            &SocketType::new(tags::FLOAT)
        ));
    }
}
