//! Node system - sockets, nodes, graphs and node factories

pub mod factory;
pub mod graph;
pub mod node;
pub mod port;
pub mod socket_type;

// Re-export core types
pub use graph::{Connection, GraphError, NodeGraph};
pub use node::{Node, NodeId};
pub use port::{Port, PortId, PortType, TypedSocket};
pub use socket_type::{tags, SocketType};

// Re-export factory types
pub use factory::{NodeCategory, NodeFactory, NodeMetadata, NodeRegistry, PortDefinition};
