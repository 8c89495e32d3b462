//! Object group nodes: attaching properties to objects and filtering them

use super::{Plugin, PluginRegistry};
use crate::nodes::{tags, Node, NodeFactory, NodeMetadata, PortDefinition};

pub const PROPERTY_NAME: &str = "Property Name";
pub const PROPERTY_VALUE: &str = "Property Value";

/// Adds named properties to every object of a group
pub struct AddPropertiesNodeFactory;

impl NodeFactory for AddPropertiesNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("ADDPROPERTIES", "Objects.Add Properties")
            .with_inputs(vec![
                PortDefinition::new("Object(s)", tags::GROUPDATA),
                PortDefinition::new(PROPERTY_NAME, tags::STRING),
                PortDefinition::new(PROPERTY_VALUE, tags::VARIABLE),
            ])
            .with_outputs(vec![PortDefinition::new("Object(s)", tags::GROUPDATA)])
    }
}

/// Keeps the objects of a group whose name matches a regex
pub struct FilterObjectsNodeFactory;

impl NodeFactory for FilterObjectsNodeFactory {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new("FILTEROBJECTS", "Objects.Filter")
            .with_inputs(vec![
                PortDefinition::new("Objects", tags::GROUPDATA),
                PortDefinition::new("Name Regex", tags::STRING),
            ])
            .with_outputs(vec![PortDefinition::new("Objects", tags::GROUPDATA)])
    }
}

/// Appends another name/value input pair to an Add Properties node
pub fn add_property(node: &mut Node) {
    node.add_input(PROPERTY_NAME, tags::STRING)
        .add_input(PROPERTY_VALUE, tags::VARIABLE);
}

pub struct ObjectsPlugin;

impl Plugin for ObjectsPlugin {
    fn name(&self) -> &'static str {
        "objects"
    }

    fn register(&self, registry: &mut PluginRegistry) {
        registry.nodes.register::<AddPropertiesNodeFactory>();
        registry.nodes.register::<FilterObjectsNodeFactory>();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compatibility::CompatibilityRegistry;
    use crate::nodes::{NodeCategory, SocketType};

    #[test]
    fn test_add_properties_sockets() {
        let node = AddPropertiesNodeFactory::create();

        assert_eq!(node.title, "Add Properties");
        let inputs: Vec<_> = node.inputs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(inputs, vec!["Object(s)", PROPERTY_NAME, PROPERTY_VALUE]);
        assert_eq!(node.outputs[0].socket_type, SocketType::new(tags::GROUPDATA));
    }

    #[test]
    fn test_add_property_appends_pair() {
        let mut node = AddPropertiesNodeFactory::create();
        add_property(&mut node);

        assert_eq!(node.inputs.len(), 5);
        assert_eq!(node.inputs[3].name, PROPERTY_NAME);
        assert_eq!(node.inputs[3].id, 3);
        assert!(node.inputs[4].socket_type.is_wildcard());
    }

    #[test]
    fn test_string_output_fits_filter_inputs() {
        let compatibility = CompatibilityRegistry::new();
        let node = FilterObjectsNodeFactory::create();

        let found = compatibility.compatible_sockets(&SocketType::new(tags::STRING), &node);
        assert_eq!(found.keys().collect::<Vec<_>>(), vec!["Name Regex"]);
    }

    #[test]
    fn test_plugin_registers_objects_category() {
        let mut registry = PluginRegistry::new();
        registry.load(&ObjectsPlugin).unwrap();

        assert_eq!(
            registry.nodes.nodes_in_category(&NodeCategory::new(&["Objects"])),
            vec!["ADDPROPERTIES", "FILTEROBJECTS"]
        );
    }
}
