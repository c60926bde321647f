//! Strongly-typed space identifiers.

use std::fmt;

/// Identifies a placed space within one layout.
///
/// Ids are caller-assigned and must be unique among the spaces held by a
/// single controller. They stay stable for the lifetime of the space:
/// moves, rotations and resizes never change the id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpaceId(String);

impl SpaceId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for SpaceId {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for SpaceId {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl AsRef<str> for SpaceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
