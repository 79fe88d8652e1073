//! Graph orchestration
//!
//! [`Graph`] is the only entry point for topology mutation. It owns one
//! registry per entity kind, keeps incidence, membership, and group adjacency
//! consistent across every operation, and notifies registered observers after
//! each successful mutation.
//!
//! Every fallible operation validates all of its preconditions before its
//! first state change, so a failed call leaves the graph exactly as it was.

use std::fmt;

use tracing::{debug, trace};

use crate::core::{Registry, TopologyError};
use crate::topology::{
    Edge, EdgeId, EntityRef, Group, GroupId, Node, NodeId, TopologyObserver,
};

/// An in-memory graph of nodes, edges, and nestable groups
///
/// The graph exclusively owns all entity storage; callers hold copyable keys
/// whose validity can be checked at any time. Multiple graphs can coexist in
/// one process, each with an independent identifier namespace.
#[derive(Default)]
pub struct Graph {
    nodes: Registry<Node>,
    edges: Registry<Edge>,
    groups: Registry<Group>,
    observers: Vec<Box<dyn TopologyObserver>>,
}

impl Graph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; observers are notified in registration order
    pub fn add_observer(&mut self, observer: Box<dyn TopologyObserver>) {
        self.observers.push(observer);
    }

    fn notify(&mut self, event: impl Fn(&mut dyn TopologyObserver)) {
        for observer in &mut self.observers {
            event(observer.as_mut());
        }
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Create a node with empty incidence sets and no group
    pub fn create_node(&mut self) -> NodeId {
        let id = self.nodes.insert(Node::new());
        trace!(node = ?id, "node created");
        debug!(node_count = self.nodes.len(), "node registered");
        self.notify(|o| o.node_created(id));
        id
    }

    /// Remove a node, cascading removal of its incident edges
    ///
    /// If the node is a member of a group it leaves the group first.
    pub fn remove_node(&mut self, node: NodeId) -> Result<(), TopologyError> {
        if !self.nodes.contains(node) {
            return Err(TopologyError::invalid_node());
        }
        self.remove_node_unchecked(node);
        Ok(())
    }

    fn remove_node_unchecked(&mut self, node: NodeId) {
        let incident: Vec<EdgeId> = match self.nodes.get(node) {
            Some(n) => n.incident_edges().collect(),
            None => return,
        };
        for edge in incident {
            self.remove_edge_unchecked(edge);
        }
        if let Some(group) = self.group_of(node) {
            self.detach_member(group, node.into());
            self.notify(|o| o.member_removed(group, node.into()));
        }
        self.nodes.remove(node);
        trace!(node = ?node, "node removed");
        debug!(node_count = self.nodes.len(), "node unregistered");
        self.notify(|o| o.node_removed(node));
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Create a directed edge between two live entities
    ///
    /// Accepts nodes and groups on either side. Updates both endpoints'
    /// incidence sets and the adjacent-edge set of any group enclosing an
    /// endpoint.
    pub fn create_edge(
        &mut self,
        source: impl Into<EntityRef>,
        target: impl Into<EntityRef>,
    ) -> Result<EdgeId, TopologyError> {
        let source = source.into();
        let target = target.into();
        self.require_entity(source)?;
        self.require_entity(target)?;

        trace!(source = ?source, target = ?target, "creating edge");
        let id = self.edges.insert(Edge::new(source, target));
        if let Some(part) = self.node_part_mut(source) {
            part.outgoing.insert(id);
        }
        if let Some(part) = self.node_part_mut(target) {
            part.incoming.insert(id);
        }
        for endpoint in [source, target] {
            if let Some(group) = self.group_of(endpoint) {
                if let Some(g) = self.groups.get_mut(group) {
                    g.adjacent_edges.insert(id);
                }
            }
        }
        debug!(edge = ?id, edge_count = self.edges.len(), "edge registered");
        self.notify(|o| o.edge_created(id));
        Ok(id)
    }

    /// Remove an edge by id
    pub fn remove_edge(&mut self, edge: EdgeId) -> Result<(), TopologyError> {
        if !self.edges.contains(edge) {
            return Err(TopologyError::invalid_edge());
        }
        self.remove_edge_unchecked(edge);
        Ok(())
    }

    /// Remove the first edge running from `source` to `target`
    pub fn remove_edge_between(
        &mut self,
        source: impl Into<EntityRef>,
        target: impl Into<EntityRef>,
    ) -> Result<(), TopologyError> {
        let edge = self
            .find_edge(source, target)
            .ok_or(TopologyError::EdgeNotFound)?;
        self.remove_edge_unchecked(edge);
        Ok(())
    }

    fn remove_edge_unchecked(&mut self, edge: EdgeId) {
        let (source, target) = match self.edges.get(edge) {
            Some(e) => e.endpoints(),
            None => return,
        };
        if let Some(part) = self.node_part_mut(source) {
            part.outgoing.remove(&edge);
        }
        if let Some(part) = self.node_part_mut(target) {
            part.incoming.remove(&edge);
        }
        for endpoint in [source, target] {
            if let Some(group) = self.group_of(endpoint) {
                if let Some(g) = self.groups.get_mut(group) {
                    g.adjacent_edges.remove(&edge);
                }
            }
        }
        self.edges.remove(edge);
        trace!(edge = ?edge, "edge removed");
        debug!(edge_count = self.edges.len(), "edge unregistered");
        self.notify(|o| o.edge_removed(edge));
    }

    // ------------------------------------------------------------------
    // Groups
    // ------------------------------------------------------------------

    /// Create an empty group
    pub fn create_group(&mut self) -> GroupId {
        let id = self.groups.insert(Group::new());
        trace!(group = ?id, "group created");
        debug!(group_count = self.groups.len(), "group registered");
        self.notify(|o| o.group_created(id));
        id
    }

    /// Remove a group, ungrouping all of its members
    ///
    /// Edges incident to the group itself are removed first; members become
    /// group-less but are otherwise untouched.
    pub fn remove_group(&mut self, group: GroupId) -> Result<(), TopologyError> {
        if !self.groups.contains(group) {
            return Err(TopologyError::invalid_group());
        }
        self.remove_group_unchecked(group);
        Ok(())
    }

    fn remove_group_unchecked(&mut self, group: GroupId) {
        let incident: Vec<EdgeId> = match self.groups.get(group) {
            Some(g) => g.incident_edges().collect(),
            None => return,
        };
        for edge in incident {
            self.remove_edge_unchecked(edge);
        }
        let members: Vec<EntityRef> = match self.groups.get(group) {
            Some(g) => g.members().collect(),
            None => Vec::new(),
        };
        for member in members {
            self.detach_member(group, member);
            self.notify(|o| o.member_removed(group, member));
        }
        if let Some(parent) = self.group_of(group) {
            self.detach_member(parent, group.into());
            self.notify(|o| o.member_removed(parent, group.into()));
        }
        self.groups.remove(group);
        trace!(group = ?group, "group removed");
        debug!(group_count = self.groups.len(), "group unregistered");
        self.notify(|o| o.group_removed(group));
    }

    /// Add an entity (node or group) to a group
    ///
    /// An entity already grouped elsewhere is moved; re-adding an entity to
    /// its current group is a no-op. Grouping a group into itself or into one
    /// of its own descendants is rejected.
    pub fn add_to_group(
        &mut self,
        group: GroupId,
        entity: impl Into<EntityRef>,
    ) -> Result<(), TopologyError> {
        let entity = entity.into();
        if !self.groups.contains(group) {
            return Err(TopologyError::invalid_group());
        }
        self.require_entity(entity)?;
        if self.group_of(entity) == Some(group) {
            return Ok(());
        }
        if let EntityRef::Group(child) = entity {
            self.require_acyclic(group, child)?;
        }

        if let Some(current) = self.group_of(entity) {
            self.detach_member(current, entity);
            self.notify(|o| o.member_removed(current, entity));
        }
        self.attach_member(group, entity);
        trace!(group = ?group, member = ?entity, "member added to group");
        debug!(
            member_count = self.groups.get(group).map_or(0, Group::member_count),
            "group membership updated"
        );
        self.notify(|o| o.member_added(group, entity));
        Ok(())
    }

    /// Remove an entity from a group it is currently a member of
    ///
    /// Membership is an always-checked precondition: both keys being valid is
    /// not enough if the entity was never added to this group.
    pub fn remove_from_group(
        &mut self,
        group: GroupId,
        entity: impl Into<EntityRef>,
    ) -> Result<(), TopologyError> {
        let entity = entity.into();
        if !self.groups.contains(group) {
            return Err(TopologyError::invalid_group());
        }
        self.require_entity(entity)?;
        let is_member = self
            .groups
            .get(group)
            .map_or(false, |g| g.members.contains(&entity));
        if !is_member {
            return Err(TopologyError::NotAMember);
        }

        self.detach_member(group, entity);
        trace!(group = ?group, member = ?entity, "member removed from group");
        debug!(
            member_count = self.groups.get(group).map_or(0, Group::member_count),
            "group membership updated"
        );
        self.notify(|o| o.member_removed(group, entity));
        Ok(())
    }

    /// Add `member` to the group and fold its incident edges into the
    /// group's adjacent-edge set. Preconditions are the caller's business.
    fn attach_member(&mut self, group: GroupId, member: EntityRef) {
        let incident: Vec<EdgeId> = self
            .node_part(member)
            .map(|part| part.incident_edges().collect())
            .unwrap_or_default();
        if let Some(g) = self.groups.get_mut(group) {
            g.members.insert(member);
            for edge in incident {
                g.adjacent_edges.insert(edge);
            }
        }
        if let Some(part) = self.node_part_mut(member) {
            part.join_group(group);
        }
    }

    /// Remove `member` from the group and re-evaluate its incident edges:
    /// an edge stays adjacent only while its other endpoint is still a
    /// member.
    fn detach_member(&mut self, group: GroupId, member: EntityRef) {
        let incident: Vec<EdgeId> = self
            .node_part(member)
            .map(|part| part.incident_edges().collect())
            .unwrap_or_default();
        if let Some(g) = self.groups.get_mut(group) {
            g.members.remove(&member);
        }
        for edge in incident {
            let other = match self.edges.get(edge).and_then(|e| e.opposite(member)) {
                Some(other) => other,
                None => continue,
            };
            let retain = self
                .groups
                .get(group)
                .map_or(false, |g| g.members.contains(&other));
            if !retain {
                if let Some(g) = self.groups.get_mut(group) {
                    g.adjacent_edges.remove(&edge);
                }
            }
        }
        if let Some(part) = self.node_part_mut(member) {
            part.leave_group();
        }
    }

    /// Reject insertions that would make `child` contain itself: walk the
    /// ancestor chain of the target group looking for `child`.
    fn require_acyclic(&self, target: GroupId, child: GroupId) -> Result<(), TopologyError> {
        let mut current = Some(target);
        while let Some(group) = current {
            if group == child {
                return Err(TopologyError::SelfContainment);
            }
            current = self.groups.get(group).and_then(Group::group);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Whole-graph operations
    // ------------------------------------------------------------------

    /// Remove every entity: all edges, then all groups, then all nodes
    ///
    /// Every previously issued key expires; identifier generations are not
    /// reset, so stale keys stay invalid for the graph's lifetime.
    pub fn clear(&mut self) {
        trace!("clearing graph");
        let edges: Vec<EdgeId> = self.edges.keys().collect();
        for edge in edges {
            self.remove_edge_unchecked(edge);
        }
        let groups: Vec<GroupId> = self.groups.keys().collect();
        for group in groups {
            self.remove_group_unchecked(group);
        }
        let nodes: Vec<NodeId> = self.nodes.keys().collect();
        for node in nodes {
            self.remove_node_unchecked(node);
        }
        debug!("graph cleared");
    }

    // ------------------------------------------------------------------
    // Counts and resolution
    // ------------------------------------------------------------------

    /// Number of live nodes (groups are counted separately)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of live groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Resolve a node key
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node)
    }

    /// Resolve an edge key
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        self.edges.get(edge)
    }

    /// Resolve a group key
    pub fn group(&self, group: GroupId) -> Option<&Group> {
        self.groups.get(group)
    }

    /// Returns true if the node key resolves to a live node
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(node)
    }

    /// Returns true if the edge key resolves to a live edge
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edges.contains(edge)
    }

    /// Returns true if the group key resolves to a live group
    pub fn contains_group(&self, group: GroupId) -> bool {
        self.groups.contains(group)
    }

    /// Returns true if the entity reference resolves to a live entity
    pub fn is_valid(&self, entity: impl Into<EntityRef>) -> bool {
        self.node_part(entity.into()).is_some()
    }

    /// The group currently enclosing the entity, if any
    pub fn group_of(&self, entity: impl Into<EntityRef>) -> Option<GroupId> {
        self.node_part(entity.into()).and_then(Node::group)
    }

    /// Iterate over live nodes with their keys
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter()
    }

    /// Iterate over live edges with their keys
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter()
    }

    /// Iterate over live groups with their keys
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &Group)> {
        self.groups.iter()
    }

    // ------------------------------------------------------------------
    // Structure queries
    // ------------------------------------------------------------------

    /// The first edge running from `source` to `target`, if any
    pub fn find_edge(
        &self,
        source: impl Into<EntityRef>,
        target: impl Into<EntityRef>,
    ) -> Option<EdgeId> {
        let source = source.into();
        let target = target.into();
        self.node_part(source)?
            .outgoing()
            .find(|&edge| self.edges.get(edge).map_or(false, |e| e.target == target))
    }

    /// Returns true if an edge runs from `source` to `target`
    pub fn has_edge(&self, source: impl Into<EntityRef>, target: impl Into<EntityRef>) -> bool {
        self.find_edge(source, target).is_some()
    }

    /// Entities this entity points to
    pub fn successors(&self, entity: impl Into<EntityRef>) -> Vec<EntityRef> {
        self.node_part(entity.into())
            .map(|part| {
                part.outgoing()
                    .filter_map(|edge| self.edges.get(edge).map(Edge::target))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Entities pointing to this entity
    pub fn predecessors(&self, entity: impl Into<EntityRef>) -> Vec<EntityRef> {
        self.node_part(entity.into())
            .map(|part| {
                part.incoming()
                    .filter_map(|edge| self.edges.get(edge).map(Edge::source))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nodes with no incoming edges
    pub fn source_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.in_degree() == 0)
            .map(|(id, _)| id)
            .collect()
    }

    /// Nodes with no outgoing edges
    pub fn sink_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.out_degree() == 0)
            .map(|(id, _)| id)
            .collect()
    }

    // ------------------------------------------------------------------
    // Internal resolution over polymorphic references
    // ------------------------------------------------------------------

    fn node_part(&self, entity: EntityRef) -> Option<&Node> {
        match entity {
            EntityRef::Node(id) => self.nodes.get(id),
            EntityRef::Group(id) => self.groups.get(id).map(|g| &g.node),
        }
    }

    fn node_part_mut(&mut self, entity: EntityRef) -> Option<&mut Node> {
        match entity {
            EntityRef::Node(id) => self.nodes.get_mut(id),
            EntityRef::Group(id) => self.groups.get_mut(id).map(|g| &mut g.node),
        }
    }

    fn require_entity(&self, entity: EntityRef) -> Result<(), TopologyError> {
        if self.node_part(entity).is_some() {
            Ok(())
        } else {
            Err(TopologyError::invalid_reference(entity.kind()))
        }
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .field("groups", &self.groups.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityKind;

    #[test]
    fn test_node_lifecycle_and_counts() {
        let mut graph = Graph::new();
        assert_eq!(graph.node_count(), 0);

        let a = graph.create_node();
        let b = graph.create_node();
        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains_node(a));

        graph.remove_node(a).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert!(!graph.contains_node(a));
        assert!(graph.contains_node(b));

        assert_eq!(graph.remove_node(a), Err(TopologyError::invalid_node()));
    }

    #[test]
    fn test_edge_updates_incidence() {
        let mut graph = Graph::new();
        let a = graph.create_node();
        let b = graph.create_node();

        let edge = graph.create_edge(a, b).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node(a).unwrap().out_degree(), 1);
        assert_eq!(graph.node(a).unwrap().in_degree(), 0);
        assert_eq!(graph.node(b).unwrap().in_degree(), 1);
        assert_eq!(graph.edge(edge).unwrap().endpoints(), (a.into(), b.into()));

        graph.remove_edge(edge).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node(a).unwrap().degree(), 0);
        assert_eq!(graph.node(b).unwrap().degree(), 0);
    }

    #[test]
    fn test_create_edge_rejects_dead_endpoint() {
        let mut graph = Graph::new();
        let a = graph.create_node();
        let b = graph.create_node();
        graph.remove_node(b).unwrap();

        let result = graph.create_edge(a, b);
        assert_eq!(
            result,
            Err(TopologyError::invalid_reference(EntityKind::Node))
        );
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node(a).unwrap().degree(), 0);
    }

    #[test]
    fn test_create_edge_rejects_null_endpoint() {
        let mut graph = Graph::new();
        let a = graph.create_node();

        assert!(graph.create_edge(a, NodeId::null()).is_err());
        assert!(graph.create_edge(NodeId::null(), a).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_node_cascades_incident_edges() {
        let mut graph = Graph::new();
        let a = graph.create_node();
        let b = graph.create_node();
        let c = graph.create_node();
        graph.create_edge(a, b).unwrap();
        graph.create_edge(b, c).unwrap();
        graph.create_edge(c, a).unwrap();

        graph.remove_node(b).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node(a).unwrap().out_degree(), 0);
        assert_eq!(graph.node(a).unwrap().in_degree(), 1);
        assert_eq!(graph.node(c).unwrap().out_degree(), 1);
        assert_eq!(graph.node(c).unwrap().in_degree(), 0);
    }

    #[test]
    fn test_self_loop_is_removed_once() {
        let mut graph = Graph::new();
        let a = graph.create_node();
        graph.create_edge(a, a).unwrap();
        assert_eq!(graph.node(a).unwrap().degree(), 2);

        graph.remove_node(a).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_edge_between() {
        let mut graph = Graph::new();
        let a = graph.create_node();
        let b = graph.create_node();
        graph.create_edge(a, b).unwrap();

        // Direction matters
        assert_eq!(
            graph.remove_edge_between(b, a),
            Err(TopologyError::EdgeNotFound)
        );
        graph.remove_edge_between(a, b).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(
            graph.remove_edge_between(a, b),
            Err(TopologyError::EdgeNotFound)
        );
    }

    #[test]
    fn test_find_and_has_edge() {
        let mut graph = Graph::new();
        let a = graph.create_node();
        let b = graph.create_node();
        let edge = graph.create_edge(a, b).unwrap();

        assert_eq!(graph.find_edge(a, b), Some(edge));
        assert!(graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
    }

    #[test]
    fn test_group_membership_basics() {
        let mut graph = Graph::new();
        let group = graph.create_group();
        let node = graph.create_node();

        graph.add_to_group(group, node).unwrap();
        assert_eq!(graph.group(group).unwrap().member_count(), 1);
        assert!(graph.group(group).unwrap().contains_member(node));
        assert_eq!(graph.group_of(node), Some(group));
        assert_eq!(graph.node(node).unwrap().group(), Some(group));

        graph.remove_from_group(group, node).unwrap();
        assert_eq!(graph.group(group).unwrap().member_count(), 0);
        assert_eq!(graph.group_of(node), None);
    }

    #[test]
    fn test_regrouping_moves_the_entity() {
        let mut graph = Graph::new();
        let first = graph.create_group();
        let second = graph.create_group();
        let node = graph.create_node();

        graph.add_to_group(first, node).unwrap();
        graph.add_to_group(second, node).unwrap();

        assert_eq!(graph.group(first).unwrap().member_count(), 0);
        assert_eq!(graph.group(second).unwrap().member_count(), 1);
        assert_eq!(graph.group_of(node), Some(second));
    }

    #[test]
    fn test_readding_to_same_group_is_noop() {
        let mut graph = Graph::new();
        let group = graph.create_group();
        let node = graph.create_node();

        graph.add_to_group(group, node).unwrap();
        graph.add_to_group(group, node).unwrap();
        assert_eq!(graph.group(group).unwrap().member_count(), 1);
    }

    #[test]
    fn test_self_containment_is_rejected() {
        let mut graph = Graph::new();
        let g1 = graph.create_group();
        let g2 = graph.create_group();
        let g3 = graph.create_group();

        assert_eq!(
            graph.add_to_group(g1, g1),
            Err(TopologyError::SelfContainment)
        );

        graph.add_to_group(g1, g2).unwrap();
        assert_eq!(
            graph.add_to_group(g2, g1),
            Err(TopologyError::SelfContainment)
        );

        graph.add_to_group(g2, g3).unwrap();
        assert_eq!(
            graph.add_to_group(g3, g1),
            Err(TopologyError::SelfContainment)
        );
        // State is untouched by the rejected calls
        assert_eq!(graph.group_of(g1), None);
        assert_eq!(graph.group_of(g2), Some(g1));
        assert_eq!(graph.group_of(g3), Some(g2));
    }

    #[test]
    fn test_remove_group_ungroups_members() {
        let mut graph = Graph::new();
        let group = graph.create_group();
        let a = graph.create_node();
        let b = graph.create_node();
        graph.add_to_group(group, a).unwrap();
        graph.add_to_group(group, b).unwrap();

        graph.remove_group(group).unwrap();
        assert_eq!(graph.group_count(), 0);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.group_of(a), None);
        assert_eq!(graph.group_of(b), None);
    }

    #[test]
    fn test_remove_group_drops_its_own_edges() {
        let mut graph = Graph::new();
        let group = graph.create_group();
        let node = graph.create_node();
        graph.create_edge(node, group).unwrap();
        assert_eq!(graph.edge_count(), 1);

        graph.remove_group(group).unwrap();
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.node(node).unwrap().degree(), 0);
    }

    #[test]
    fn test_remove_nested_group_detaches_from_parent() {
        let mut graph = Graph::new();
        let parent = graph.create_group();
        let child = graph.create_group();
        graph.add_to_group(parent, child).unwrap();

        graph.remove_group(child).unwrap();
        assert_eq!(graph.group(parent).unwrap().member_count(), 0);
        assert_eq!(graph.group_count(), 1);
    }

    #[test]
    fn test_edge_between_groups() {
        let mut graph = Graph::new();
        let g1 = graph.create_group();
        let g2 = graph.create_group();

        let edge = graph.create_edge(g1, g2).unwrap();
        assert_eq!(graph.group(g1).unwrap().out_degree(), 1);
        assert_eq!(graph.group(g2).unwrap().in_degree(), 1);
        assert_eq!(
            graph.edge(edge).unwrap().endpoints(),
            (g1.into(), g2.into())
        );
    }

    #[test]
    fn test_successors_and_predecessors() {
        let mut graph = Graph::new();
        let a = graph.create_node();
        let b = graph.create_node();
        let c = graph.create_node();
        graph.create_edge(a, b).unwrap();
        graph.create_edge(a, c).unwrap();
        graph.create_edge(b, c).unwrap();

        let succ = graph.successors(a);
        assert_eq!(succ.len(), 2);
        assert!(succ.contains(&b.into()));
        assert!(succ.contains(&c.into()));

        let pred = graph.predecessors(c);
        assert_eq!(pred.len(), 2);
        assert!(pred.contains(&a.into()));
        assert!(pred.contains(&b.into()));

        assert_eq!(graph.source_nodes(), vec![a]);
        assert_eq!(graph.sink_nodes(), vec![c]);
    }

    #[test]
    fn test_is_valid_tracks_liveness() {
        let mut graph = Graph::new();
        let node = graph.create_node();
        let group = graph.create_group();

        assert!(graph.is_valid(node));
        assert!(graph.is_valid(group));
        assert!(!graph.is_valid(NodeId::null()));

        graph.remove_node(node).unwrap();
        graph.remove_group(group).unwrap();
        assert!(!graph.is_valid(node));
        assert!(!graph.is_valid(group));
    }

    #[test]
    fn test_iteration_yields_live_entities() {
        let mut graph = Graph::new();
        let a = graph.create_node();
        let b = graph.create_node();
        graph.remove_node(a).unwrap();

        let ids: Vec<NodeId> = graph.nodes().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![b]);
        assert_eq!(graph.edges().count(), 0);
        assert_eq!(graph.groups().count(), 0);
    }

    #[test]
    fn test_debug_shows_counts() {
        let mut graph = Graph::new();
        graph.create_node();
        let rendered = format!("{:?}", graph);
        assert!(rendered.contains("nodes: 1"));
    }
}
