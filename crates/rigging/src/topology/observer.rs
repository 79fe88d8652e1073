//! Change notification
//!
//! The presentation layer (out of scope here) mirrors the topology by
//! registering a [`TopologyObserver`] on the graph. Callbacks fire
//! synchronously, in registration order, after each successful mutation and
//! never for failed operations. Composite operations (node removal, group
//! removal, clear) fire one callback per removed entity, inner-most first, so
//! an observer can replay state without special cases.

use crate::topology::{EdgeId, EntityRef, GroupId, NodeId};

/// Receives synchronous callbacks after each successful topology mutation
///
/// All methods have empty default bodies; implement only the ones of
/// interest.
pub trait TopologyObserver {
    /// A node was created
    fn node_created(&mut self, _node: NodeId) {}

    /// A node was removed; its incident edges were already removed
    fn node_removed(&mut self, _node: NodeId) {}

    /// An edge was created
    fn edge_created(&mut self, _edge: EdgeId) {}

    /// An edge was removed
    fn edge_removed(&mut self, _edge: EdgeId) {}

    /// A group was created
    fn group_created(&mut self, _group: GroupId) {}

    /// A group was removed; its members were already ungrouped
    fn group_removed(&mut self, _group: GroupId) {}

    /// An entity became a member of a group
    fn member_added(&mut self, _group: GroupId, _member: EntityRef) {}

    /// An entity left a group
    fn member_removed(&mut self, _group: GroupId, _member: EntityRef) {}
}
