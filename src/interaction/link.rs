//! Link records and identifiers
//!
//! A link is a directed connector between two shapes. The record holds the
//! persistent part of a link: identity, endpoint shape references and
//! color, plus the selection flag. Endpoint shapes are referenced by
//! identifier and resolved through the canvas collaborator on demand,
//! since shapes may move between renders.

use serde::{Deserialize, Serialize};

/// Identifier of a shape owned by the canvas.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShapeId(pub String);

impl ShapeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShapeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkId(pub String);

impl LinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persistent state of a directed link between two shapes.
///
/// Created when the user draws a connection between two existing shapes,
/// mutated by the interaction controller (selection) and destroyed through
/// the canvas collaborator. Hover state is view-local and deliberately not
/// part of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkRecord {
    pub id: LinkId,
    /// Shape the arrow leaves from
    pub origin: ShapeId,
    /// Shape the arrow points at
    pub target: ShapeId,
    /// CSS color used to fill the arrow; empty means the stylesheet default
    pub color: String,
    pub is_selected: bool,
}

impl LinkRecord {
    /// Create an unselected link with the given endpoints and color.
    pub fn new(
        id: LinkId,
        origin: ShapeId,
        target: ShapeId,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            origin,
            target,
            color: color.into(),
            is_selected: false,
        }
    }
}
