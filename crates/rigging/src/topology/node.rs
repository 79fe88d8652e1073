//! Topology vertex
//!
//! A node tracks the edges incident to it and, optionally, the group that
//! encloses it. All mutation goes through [`Graph`](crate::topology::Graph);
//! the public surface of a node is read-only.

use std::collections::BTreeSet;

use crate::topology::{EdgeId, GroupId};

/// A vertex in the topology
///
/// Incidence sets are ordered for deterministic iteration. The node itself
/// never outlives the graph that created it.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub(crate) incoming: BTreeSet<EdgeId>,
    pub(crate) outgoing: BTreeSet<EdgeId>,
    pub(crate) group: Option<GroupId>,
}

impl Node {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of incoming edges
    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Total degree; a self-loop counts once as incoming and once as outgoing
    pub fn degree(&self) -> usize {
        self.in_degree() + self.out_degree()
    }

    /// Iterate over incoming edge ids
    pub fn incoming(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.incoming.iter().copied()
    }

    /// Iterate over outgoing edge ids
    pub fn outgoing(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.outgoing.iter().copied()
    }

    /// Iterate over all incident edge ids; a self-loop appears once
    pub fn incident_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.incoming.union(&self.outgoing).copied()
    }

    /// The enclosing group, if any
    pub fn group(&self) -> Option<GroupId> {
        self.group
    }

    /// Returns true if the node is currently a member of a group
    pub fn is_grouped(&self) -> bool {
        self.group.is_some()
    }

    pub(crate) fn join_group(&mut self, group: GroupId) {
        self.group = Some(group);
    }

    pub(crate) fn leave_group(&mut self) {
        self.group = None;
    }
}
