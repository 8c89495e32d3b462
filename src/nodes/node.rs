//! Node types and core node functionality

use super::port::{Port, PortId, PortType};
use super::socket_type::SocketType;
use serde::{Deserialize, Serialize};

/// Unique identifier for a node
pub type NodeId = usize;

/// A node with ordered input and output sockets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub title: String,
    /// Type id of the factory that built this node, empty for ad hoc nodes
    #[serde(default)]
    pub node_type: String,
    pub inputs: Vec<Port>,
    pub outputs: Vec<Port>,
}

impl Node {
    /// Creates a new node without sockets
    pub fn new(id: NodeId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            node_type: String::new(),
            inputs: vec![],
            outputs: vec![],
        }
    }

    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = node_type.into();
        self
    }

    /// Adds an input port to the node
    pub fn add_input(
        &mut self,
        name: impl Into<String>,
        socket_type: impl Into<SocketType>,
    ) -> &mut Self {
        let port_id = self.inputs.len();
        self.inputs
            .push(Port::new(port_id, name, PortType::Input, socket_type));
        self
    }

    /// Adds an output port to the node
    pub fn add_output(
        &mut self,
        name: impl Into<String>,
        socket_type: impl Into<SocketType>,
    ) -> &mut Self {
        let port_id = self.outputs.len();
        self.outputs
            .push(Port::new(port_id, name, PortType::Output, socket_type));
        self
    }

    /// Nests `child` under the input at `input`.
    ///
    /// Returns the child back if the input does not exist.
    pub fn add_child_node(&mut self, input: PortId, child: Node) -> Result<&mut Self, Node> {
        match self.inputs.get_mut(input) {
            Some(port) => {
                port.child_nodes.push(child);
                Ok(self)
            }
            None => Err(child),
        }
    }

    /// Finds the first input with the given name
    pub fn input(&self, name: &str) -> Option<&Port> {
        self.inputs.iter().find(|port| port.name == name)
    }

    /// Finds the first output with the given name
    pub fn output(&self, name: &str) -> Option<&Port> {
        self.outputs.iter().find(|port| port.name == name)
    }
}
