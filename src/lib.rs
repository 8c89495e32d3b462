//! MindTree node sockets
//!
//! Socket type compatibility for the MindTree node editor, together with the
//! node model it operates on and the built-in node plugins.

pub mod compatibility;
pub mod config;
pub mod nodes;
pub mod plugins;

// Re-export commonly used types
pub use compatibility::{CompatibilityRegistry, CompatibleSockets};
pub use config::{CompatibilityConfig, ConfigError};
pub use nodes::{Connection, GraphError, Node, NodeGraph, Port, SocketType, TypedSocket};
pub use plugins::{Plugin, PluginError, PluginRegistry};
