//! Rigging - an embeddable graph topology engine
//!
//! A library for managing the identity, ownership, and structural
//! relationships of nodes, edges, and nestable groups, independent of any
//! rendering or UI layer. A visualization front end consumes the engine
//! through expiry-aware keys and a synchronous change-notifier trait.
//!
//! # Quick Start
//!
//! ```rust
//! use rigging::prelude::*;
//!
//! let mut graph = Graph::new();
//! let n1 = graph.create_node();
//! let n2 = graph.create_node();
//! graph.create_edge(n1, n2).unwrap();
//!
//! let group = graph.create_group();
//! graph.add_to_group(group, n1).unwrap();
//!
//! // The edge touches a member, so it is adjacent to the group
//! assert_eq!(graph.group(group).unwrap().adjacent_edge_count(), 1);
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! assert_eq!(graph.group_count(), 1);
//! ```
//!
//! # Handles
//!
//! Creation returns a copyable key rather than a reference. Keys never keep
//! an entity alive; after removal they simply stop resolving:
//!
//! ```rust
//! use rigging::prelude::*;
//!
//! let mut graph = Graph::new();
//! let node = graph.create_node();
//! assert!(graph.is_valid(node));
//!
//! graph.remove_node(node).unwrap();
//! assert!(!graph.is_valid(node));
//! assert!(graph.node(node).is_none());
//! ```
//!
//! # Observers
//!
//! Register a [`TopologyObserver`] to receive synchronous callbacks after
//! each successful mutation; failed operations notify nothing.

pub mod core;
pub mod topology;

pub use core::*;
pub use topology::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{EntityKind, Key, Registry, TopologyError};
    pub use crate::topology::{
        Edge, EdgeId, EntityRef, Graph, Group, GroupId, Node, NodeId, TopologyObserver,
    };
}
