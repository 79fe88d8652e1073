//! Topology error type
//!
//! Every precondition violation on the public graph API is reported through
//! the single [`TopologyError`] enum. Errors are raised synchronously and a
//! failed operation leaves the graph untouched.

use std::fmt;

use thiserror::Error;

/// The kind of entity an operation expected to find alive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Node,
    Edge,
    Group,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Node => write!(f, "node"),
            EntityKind::Edge => write!(f, "edge"),
            EntityKind::Group => write!(f, "group"),
        }
    }
}

/// Errors raised by graph topology operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("invalid {kind} reference: expired or never registered")]
    InvalidReference { kind: EntityKind },

    #[error("entity is not a member of the target group")]
    NotAMember,

    #[error("grouping would make a group contain itself")]
    SelfContainment,

    #[error("no edge connects the given endpoints")]
    EdgeNotFound,
}

impl TopologyError {
    /// Create an invalid-reference error for a node
    pub fn invalid_node() -> Self {
        Self::InvalidReference {
            kind: EntityKind::Node,
        }
    }

    /// Create an invalid-reference error for an edge
    pub fn invalid_edge() -> Self {
        Self::InvalidReference {
            kind: EntityKind::Edge,
        }
    }

    /// Create an invalid-reference error for a group
    pub fn invalid_group() -> Self {
        Self::InvalidReference {
            kind: EntityKind::Group,
        }
    }

    /// Create an invalid-reference error for the given kind
    pub fn invalid_reference(kind: EntityKind) -> Self {
        Self::InvalidReference { kind }
    }
}
