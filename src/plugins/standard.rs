//! Default socket compatibilities

use super::{Plugin, PluginRegistry};
use crate::nodes::tags;

/// Type pairs that convert into each other without loss of meaning
pub const DEFAULT_PAIRS: &[(&str, &str)] = &[
    (tags::FLOAT, tags::INTEGER),
    (tags::VECTOR3D, tags::COLOR),
];

pub struct StandardPlugin;

impl Plugin for StandardPlugin {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn register(&self, registry: &mut PluginRegistry) {
        for (a, b) in DEFAULT_PAIRS {
            registry.compatibility.add_compatibility(*a, *b);
        }
    }
}
