//! Socket type tags

use serde::{Deserialize, Serialize};
use std::fmt;

/// Well-known socket type tags used by the built-in node plugins
pub mod tags {
    /// Wildcard type, matches every other type
    pub const VARIABLE: &str = "VARIABLE";
    pub const FLOAT: &str = "FLOAT";
    pub const INTEGER: &str = "INTEGER";
    pub const STRING: &str = "STRING";
    pub const COLOR: &str = "COLOR";
    pub const VECTOR3D: &str = "VECTOR3D";
    pub const GROUPDATA: &str = "GROUPDATA";
}

/// Names the type of value flowing through a socket.
///
/// Tags are opaque strings. `VARIABLE` and the empty tag are wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SocketType(String);

impl SocketType {
    /// Creates a socket type from any string tag
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// Checks if this type matches any other type
    pub fn is_wildcard(&self) -> bool {
        self.0.is_empty() || self.0 == tags::VARIABLE
    }
}

impl fmt::Display for SocketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SocketType {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for SocketType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcards() {
        assert!(SocketType::new(tags::VARIABLE).is_wildcard());
        assert!(SocketType::new("").is_wildcard());
        assert!(SocketType::default().is_wildcard());
        assert!(!SocketType::new(tags::STRING).is_wildcard());
        // Tags are case sensitive
        assert!(!SocketType::new("variable").is_wildcard());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&SocketType::new(tags::GROUPDATA)).unwrap();
        assert_eq!(json, "\"GROUPDATA\"");

        let parsed: SocketType = serde_json::from_str("\"COLOR\"").unwrap();
        assert_eq!(parsed, SocketType::new(tags::COLOR));
    }
}
