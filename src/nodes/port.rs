//! Port types and functionality for node connections

use super::node::Node;
use super::socket_type::SocketType;
use serde::{Deserialize, Serialize};

/// Unique identifier for a port
pub type PortId = usize;

/// Type of port (input or output)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortType {
    Input,
    Output,
}

/// Anything that carries a socket type and can take part in a
/// compatibility check
pub trait TypedSocket {
    fn socket_type(&self) -> &SocketType;
}

impl TypedSocket for SocketType {
    fn socket_type(&self) -> &SocketType {
        self
    }
}

/// Represents a connection point on a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Port {
    pub id: PortId,
    pub name: String,
    pub port_type: PortType,
    pub socket_type: SocketType,
    /// Nested nodes feeding a grouped input. Always empty for outputs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_nodes: Vec<Node>,
}

impl Port {
    /// Creates a new port
    pub fn new(
        id: PortId,
        name: impl Into<String>,
        port_type: PortType,
        socket_type: impl Into<SocketType>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            port_type,
            socket_type: socket_type.into(),
            child_nodes: Vec::new(),
        }
    }

    /// Checks if this port is an input
    pub fn is_input(&self) -> bool {
        matches!(self.port_type, PortType::Input)
    }

    /// Checks if this port is an output
    pub fn is_output(&self) -> bool {
        matches!(self.port_type, PortType::Output)
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.child_nodes
    }
}

impl TypedSocket for Port {
    fn socket_type(&self) -> &SocketType {
        &self.socket_type
    }
}
