//! Node factory system with self-registration and metadata

use super::node::Node;
use super::socket_type::SocketType;
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};

/// Hierarchical category system for organizing nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    /// Create a new category from path components
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the full path as a slice
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Parse a dotted category path such as `Values.Numbers`
    pub fn from_dotted(path: &str) -> Self {
        let parts: Vec<&str> = path.split('.').filter(|part| !part.is_empty()).collect();
        Self::new(&parts)
    }

    /// Check if this category lies anywhere below another
    pub fn is_child_of(&self, other: &NodeCategory) -> bool {
        self.path.len() > other.path.len() && self.path[..other.path.len()] == other.path
    }

    /// Get display string for UI
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }
}

/// Socket definition for node creation
#[derive(Debug, Clone, PartialEq)]
pub struct PortDefinition {
    pub name: String,
    pub socket_type: SocketType,
}

impl PortDefinition {
    pub fn new(name: &str, socket_type: &str) -> Self {
        Self {
            name: name.to_string(),
            socket_type: SocketType::new(socket_type),
        }
    }
}

/// Describes a node type: its id, menu label and sockets
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    /// Unique type id, e.g. `ADDPROPERTIES`
    pub node_type: &'static str,
    /// Dotted menu path, e.g. `Objects.Add Properties`
    pub label: &'static str,
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
}

impl NodeMetadata {
    pub fn new(node_type: &'static str, label: &'static str) -> Self {
        Self {
            node_type,
            label,
            inputs: vec![],
            outputs: vec![],
        }
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Menu category: every label component but the last
    pub fn category(&self) -> NodeCategory {
        let parts: Vec<&str> = self.label.split('.').collect();
        NodeCategory::new(&parts[..parts.len() - 1])
    }

    /// Last label component
    pub fn display_name(&self) -> &'static str {
        self.label.rsplit('.').next().unwrap_or(self.label)
    }
}

/// A node type that can build fresh node instances
pub trait NodeFactory {
    /// Get node metadata
    fn metadata() -> NodeMetadata
    where
        Self: Sized;

    /// Create a node instance with the declared sockets
    fn create() -> Node
    where
        Self: Sized,
    {
        let meta = Self::metadata();
        let mut node = Node::new(0, meta.display_name()).with_type(meta.node_type);

        for input in &meta.inputs {
            node.add_input(input.name.as_str(), input.socket_type.clone());
        }
        for output in &meta.outputs {
            node.add_output(output.name.as_str(), output.socket_type.clone());
        }

        node
    }
}

type NodeCreator = fn() -> Node;
type MetadataProvider = fn() -> NodeMetadata;

/// Registry for managing node factories
#[derive(Default)]
pub struct NodeRegistry {
    creators: BTreeMap<String, NodeCreator>,
    metadata_providers: BTreeMap<String, MetadataProvider>,
    categories: HashMap<NodeCategory, Vec<String>>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node factory
    pub fn register<T: NodeFactory + 'static>(&mut self) {
        let metadata = T::metadata();
        let node_type = metadata.node_type.to_string();

        if self.creators.contains_key(&node_type) {
            warn!("Node type {} registered twice, keeping the latest", node_type);
            for types in self.categories.values_mut() {
                types.retain(|t| *t != node_type);
            }
        }
        debug!("Registering node type {} as '{}'", node_type, metadata.label);

        self.creators.insert(node_type.clone(), T::create);
        self.metadata_providers.insert(node_type.clone(), T::metadata);
        self.categories
            .entry(metadata.category())
            .or_default()
            .push(node_type);
    }

    /// Create a node by type name
    pub fn create_node(&self, node_type: &str) -> Option<Node> {
        match self.creators.get(node_type) {
            Some(creator) => Some(creator()),
            None => {
                warn!("No factory found for node type: {}", node_type);
                None
            }
        }
    }

    /// Get metadata for a node type without creating the node
    pub fn get_node_metadata(&self, node_type: &str) -> Option<NodeMetadata> {
        self.metadata_providers.get(node_type).map(|provider| provider())
    }

    /// All registered node types, sorted
    pub fn node_types(&self) -> Vec<&str> {
        self.creators.keys().map(String::as_str).collect()
    }

    /// Node types registered directly under `category`
    pub fn nodes_in_category(&self, category: &NodeCategory) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|types| types.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Categories holding at least one node type, sorted by path
    pub fn categories(&self) -> Vec<&NodeCategory> {
        let mut categories: Vec<_> = self
            .categories
            .iter()
            .filter(|(_, types)| !types.is_empty())
            .map(|(category, _)| category)
            .collect();
        categories.sort_by(|a, b| a.path().cmp(b.path()));
        categories
    }

    /// Node types in `category` and every category below it, sorted
    pub fn nodes_under(&self, category: &NodeCategory) -> Vec<&str> {
        let mut types: Vec<&str> = self
            .categories
            .iter()
            .filter(|(cat, _)| *cat == category || cat.is_child_of(category))
            .flat_map(|(_, types)| types.iter().map(String::as_str))
            .collect();
        types.sort_unstable();
        types
    }
}
