//! Node graph data structures and operations

use super::node::{Node, NodeId};
use super::port::PortId;
use super::socket_type::SocketType;
use crate::compatibility::CompatibilityRegistry;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Represents a link from an output port to an input port on another node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub from_node: NodeId,
    pub from_port: PortId,
    pub to_node: NodeId,
    pub to_port: PortId,
}

impl Connection {
    /// Creates a new connection
    pub fn new(from_node: NodeId, from_port: PortId, to_node: NodeId, to_port: PortId) -> Self {
        Self {
            from_node,
            from_port,
            to_node,
            to_port,
        }
    }
}

/// Reasons a link between two ports is refused
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("cannot connect node {0} to itself")]
    SelfConnection(NodeId),

    #[error("node {0} does not exist")]
    MissingNode(NodeId),

    #[error("node {node} has no output port {port}")]
    MissingOutput { node: NodeId, port: PortId },

    #[error("node {node} has no input port {port}")]
    MissingInput { node: NodeId, port: PortId },

    #[error("cannot connect {from} output to {to} input")]
    Incompatible { from: SocketType, to: SocketType },
}

/// A graph containing nodes and their connections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeGraph {
    pub nodes: HashMap<NodeId, Node>,
    pub connections: Vec<Connection>,
    next_node_id: NodeId,
}

impl NodeGraph {
    /// Creates a new empty node graph
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            connections: Vec::new(),
            next_node_id: 0,
        }
    }

    /// Adds a node to the graph and returns its ID
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        let id = self.next_node_id;
        node.id = id;
        self.nodes.insert(id, node);
        self.next_node_id += 1;
        id
    }

    /// Removes a node and all its connections
    pub fn remove_node(&mut self, node_id: NodeId) -> Option<Node> {
        self.connections
            .retain(|conn| conn.from_node != node_id && conn.to_node != node_id);

        self.nodes.remove(&node_id)
    }

    /// Links an output port to an input port.
    ///
    /// The port types must be compatible under `compatibility`. An input
    /// holds a single link, so an existing link into the same input is
    /// replaced.
    ///
    /// Only top-level sockets of the two nodes are addressable. Inputs of
    /// child nodes nested under an input, such as the `Group.Value` paths
    /// reported by
    /// [`CompatibilityRegistry::get_compatible_sockets`], cannot be linked
    /// through a `Connection`; `to_port` always indexes `to_node.inputs`.
    pub fn add_connection(
        &mut self,
        connection: Connection,
        compatibility: &CompatibilityRegistry,
    ) -> Result<(), GraphError> {
        if connection.from_node == connection.to_node {
            return Err(GraphError::SelfConnection(connection.from_node));
        }

        let from_node = self
            .nodes
            .get(&connection.from_node)
            .ok_or(GraphError::MissingNode(connection.from_node))?;
        let to_node = self
            .nodes
            .get(&connection.to_node)
            .ok_or(GraphError::MissingNode(connection.to_node))?;

        let output = from_node
            .outputs
            .get(connection.from_port)
            .ok_or(GraphError::MissingOutput {
                node: connection.from_node,
                port: connection.from_port,
            })?;
        let input = to_node
            .inputs
            .get(connection.to_port)
            .ok_or(GraphError::MissingInput {
                node: connection.to_node,
                port: connection.to_port,
            })?;

        if !compatibility.is_compatible(output, input) {
            warn!(
                "Refusing link {}.{} -> {}.{}: {} does not fit {}",
                from_node.title,
                output.name,
                to_node.title,
                input.name,
                output.socket_type,
                input.socket_type
            );
            return Err(GraphError::Incompatible {
                from: output.socket_type.clone(),
                to: input.socket_type.clone(),
            });
        }

        debug!(
            "Linking {}.{} -> {}.{}",
            from_node.title, output.name, to_node.title, input.name
        );

        self.connections.retain(|conn| {
            !(conn.to_node == connection.to_node && conn.to_port == connection.to_port)
        });
        self.connections.push(connection);
        Ok(())
    }

    /// Removes a connection by index
    pub fn remove_connection(&mut self, index: usize) -> Option<Connection> {
        if index < self.connections.len() {
            Some(self.connections.remove(index))
        } else {
            None
        }
    }

    /// The link feeding an input port, if any
    pub fn input_link(&self, node: NodeId, port: PortId) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|conn| conn.to_node == node && conn.to_port == port)
    }
}

impl Default for NodeGraph {
    fn default() -> Self {
        Self::new()
    }
}
