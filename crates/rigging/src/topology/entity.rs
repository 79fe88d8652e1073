//! Entity identifiers and polymorphic references
//!
//! Edges and group memberships may refer to plain nodes or to groups. Rather
//! than a type hierarchy, the engine uses a tagged variant [`EntityRef`] and
//! switches on it explicitly wherever incidence or membership is maintained.

use crate::core::{EntityKind, Key};
use crate::topology::{Edge, Group, Node};

/// Stable identifier of a node, scoped to its owning graph
pub type NodeId = Key<Node>;

/// Stable identifier of an edge, scoped to its owning graph
pub type EdgeId = Key<Edge>;

/// Stable identifier of a group, scoped to its owning graph
pub type GroupId = Key<Group>;

/// A reference to either a node or a group
///
/// Both kinds can serve as edge endpoints and as group members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityRef {
    Node(NodeId),
    Group(GroupId),
}

impl EntityRef {
    /// The kind of entity referred to
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Node(_) => EntityKind::Node,
            EntityRef::Group(_) => EntityKind::Group,
        }
    }

    /// The node id, if this refers to a plain node
    pub fn as_node(&self) -> Option<NodeId> {
        match self {
            EntityRef::Node(id) => Some(*id),
            EntityRef::Group(_) => None,
        }
    }

    /// The group id, if this refers to a group
    pub fn as_group(&self) -> Option<GroupId> {
        match self {
            EntityRef::Node(_) => None,
            EntityRef::Group(id) => Some(*id),
        }
    }
}

impl From<NodeId> for EntityRef {
    fn from(id: NodeId) -> Self {
        EntityRef::Node(id)
    }
}

impl From<GroupId> for EntityRef {
    fn from(id: GroupId) -> Self {
        EntityRef::Group(id)
    }
}
