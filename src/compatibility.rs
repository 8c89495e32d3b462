//! Socket type compatibility
//!
//! Two sockets may be linked when their types are equal, when either side is
//! a wildcard (`VARIABLE` or the empty tag), or when the pair of types has
//! been registered as compatible. Registrations are symmetric and never
//! removed.

use crate::nodes::{Node, Port, SocketType, TypedSocket};
use log::debug;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Dotted input path (`Group.Value`) to the matching input port
pub type CompatibleSockets<'a> = BTreeMap<String, &'a Port>;

/// Registry of socket type pairs allowed to connect
#[derive(Debug, Clone, Default)]
pub struct CompatibilityRegistry {
    // Only `add_compatibility` writes here, and always both directions.
    maps: HashMap<SocketType, HashSet<SocketType>>,
}

impl CompatibilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `a` and `b` as compatible in both directions.
    ///
    /// Registering the same pair again has no effect.
    pub fn add_compatibility(&mut self, a: impl Into<SocketType>, b: impl Into<SocketType>) {
        let a = a.into();
        let b = b.into();
        debug!("Registering socket compatibility {} <-> {}", a, b);

        self.maps.entry(a.clone()).or_default().insert(b.clone());
        self.maps.entry(b).or_default().insert(a);
    }

    /// Checks whether two sockets may be linked
    pub fn is_compatible<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: TypedSocket + ?Sized,
        B: TypedSocket + ?Sized,
    {
        self.types_compatible(a.socket_type(), b.socket_type())
    }

    /// Checks whether two socket types may be linked
    pub fn types_compatible(&self, a: &SocketType, b: &SocketType) -> bool {
        if a == b {
            return true;
        }

        if a.is_wildcard() || b.is_wildcard() {
            return true;
        }

        self.is_registered(a, b) || self.is_registered(b, a)
    }

    fn is_registered(&self, from: &SocketType, to: &SocketType) -> bool {
        self.maps
            .get(from)
            .is_some_and(|compatible| compatible.contains(to))
    }

    /// Types registered as compatible with `socket_type`, in tag order
    pub fn compatible_types(&self, socket_type: &SocketType) -> Vec<&SocketType> {
        let mut types: Vec<_> = self
            .maps
            .get(socket_type)
            .map(|set| set.iter().collect())
            .unwrap_or_default();
        types.sort();
        types
    }

    /// Every registered pair once, smaller tag first, in tag order
    pub fn pairs(&self) -> Vec<(SocketType, SocketType)> {
        let mut pairs = BTreeSet::new();
        for (a, compatible) in &self.maps {
            for b in compatible {
                if a <= b {
                    pairs.insert((a.clone(), b.clone()));
                } else {
                    pairs.insert((b.clone(), a.clone()));
                }
            }
        }
        pairs.into_iter().collect()
    }

    /// Collects every input below `node` that accepts `output`.
    ///
    /// Inputs are keyed by their dotted path from `node`; inputs of nested
    /// child nodes are prefixed with the name of the input holding them.
    pub fn get_compatible_sockets<'a, S>(
        &self,
        output: &S,
        node: &'a Node,
        path_prefix: &[&str],
    ) -> CompatibleSockets<'a>
    where
        S: TypedSocket + ?Sized,
    {
        let mut path: Vec<&str> = path_prefix.to_vec();
        let mut found = CompatibleSockets::new();
        self.collect_compatible(output.socket_type(), node, &mut path, &mut found);
        debug!(
            "{} inputs under '{}' accept {}",
            found.len(),
            node.title,
            output.socket_type()
        );
        found
    }

    /// Same as [`get_compatible_sockets`](Self::get_compatible_sockets)
    /// with no path prefix
    pub fn compatible_sockets<'a, S>(&self, output: &S, node: &'a Node) -> CompatibleSockets<'a>
    where
        S: TypedSocket + ?Sized,
    {
        self.get_compatible_sockets(output, node, &[])
    }

    fn collect_compatible<'a: 'p, 'p>(
        &self,
        output: &SocketType,
        node: &'a Node,
        path: &mut Vec<&'p str>,
        found: &mut CompatibleSockets<'a>,
    ) {
        for input in &node.inputs {
            path.push(&input.name);
            if self.types_compatible(&input.socket_type, output) {
                found.insert(path.join("."), input);
            }
            for child in input.child_nodes() {
                self.collect_compatible(output, child, path, found);
            }
            path.pop();
        }
    }
}
