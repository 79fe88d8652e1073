//! Group container
//!
//! A group is a node specialization: it embeds a node part (so it can be an
//! edge endpoint and a member of another group, nesting without bound) and
//! additionally owns a membership set plus a derived adjacent-edge set.
//!
//! The adjacent-edge set is maintained incrementally by
//! [`Graph`](crate::topology::Graph) on every relevant mutation; queries never
//! recompute it.

use std::collections::BTreeSet;

use crate::topology::{EdgeId, EntityRef, GroupId, Node};

/// A container entity holding nodes and other groups as members
///
/// Membership counting is non-transitive: a nested child group counts as one
/// member of its parent, regardless of the child's own member count.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub(crate) node: Node,
    pub(crate) members: BTreeSet<EntityRef>,
    pub(crate) adjacent_edges: BTreeSet<EdgeId>,
}

impl Group {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Iterate over the direct members of this group
    pub fn members(&self) -> impl Iterator<Item = EntityRef> + '_ {
        self.members.iter().copied()
    }

    /// Number of direct members
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the entity is a direct member of this group
    pub fn contains_member(&self, entity: impl Into<EntityRef>) -> bool {
        self.members.contains(&entity.into())
    }

    /// Iterate over the edges with at least one endpoint inside this group
    pub fn adjacent_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacent_edges.iter().copied()
    }

    /// Number of adjacent edges
    pub fn adjacent_edge_count(&self) -> usize {
        self.adjacent_edges.len()
    }

    /// The group enclosing this group, if any
    pub fn group(&self) -> Option<GroupId> {
        self.node.group()
    }

    /// Returns true if this group is itself a member of another group
    pub fn is_grouped(&self) -> bool {
        self.node.is_grouped()
    }

    /// Number of edges arriving at this group as an endpoint
    pub fn in_degree(&self) -> usize {
        self.node.in_degree()
    }

    /// Number of edges leaving this group as an endpoint
    pub fn out_degree(&self) -> usize {
        self.node.out_degree()
    }

    /// Total degree of the group as an edge endpoint
    pub fn degree(&self) -> usize {
        self.node.degree()
    }

    /// Iterate over the edges incident to this group as an endpoint
    ///
    /// These are edges touching the group itself, not edges touching its
    /// members; the latter are [`Group::adjacent_edges`].
    pub fn incident_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.node.incident_edges()
    }
}
