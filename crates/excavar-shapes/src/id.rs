use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_NAMESPACE: &str = "excavar";

/// Namespaced shape key, written `namespace:path`.
///
/// Ordering is by namespace, then path; the registry cycles in this order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeId {
    namespace: String,
    path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid shape id `{0}`: expected `namespace:path` using [a-z0-9_.-/]")]
pub struct InvalidShapeId(pub String);

impl ShapeId {
    /// Builds an id from trusted parts. Use [`ShapeId::parse`] for user input.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Shorthand for an id in the default namespace.
    pub fn builtin(path: &str) -> Self {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    pub fn parse(s: &str) -> Result<Self, InvalidShapeId> {
        let (ns, path) = match s.split_once(':') {
            Some((ns, path)) => (ns, path),
            None => (DEFAULT_NAMESPACE, s),
        };
        let ns_ok = !ns.is_empty() && ns.chars().all(|c| is_id_char(c) && c != '/');
        let path_ok = !path.is_empty() && path.chars().all(is_id_char);
        if !ns_ok || !path_ok {
            return Err(InvalidShapeId(s.to_string()));
        }
        Ok(Self::new(ns, path))
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Translation key for the "shape selected" message, e.g.
    /// `excavar.shape.stairs_down.desc`.
    pub fn description_key(&self) -> String {
        format!(
            "{}.shape.{}.desc",
            self.namespace,
            self.path.replace('/', ".")
        )
    }
}

#[inline]
fn is_id_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '.' | '-' | '/')
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ShapeId {
    type Err = InvalidShapeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShapeId {
    type Error = InvalidShapeId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShapeId> for String {
    fn from(value: ShapeId) -> Self {
        value.to_string()
    }
}
