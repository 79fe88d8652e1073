//! Directed edge between two entities
//!
//! An edge connects two [`EntityRef`]s: node to node, node to group, or group
//! to group. Endpoints are fixed at creation; rewiring is remove-and-create.

use crate::topology::EntityRef;

/// A directed connection between two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub(crate) source: EntityRef,
    pub(crate) target: EntityRef,
}

impl Edge {
    pub(crate) fn new(source: EntityRef, target: EntityRef) -> Self {
        Self { source, target }
    }

    /// The source endpoint
    pub fn source(&self) -> EntityRef {
        self.source
    }

    /// The target endpoint
    pub fn target(&self) -> EntityRef {
        self.target
    }

    /// Both endpoints as a `(source, target)` pair
    pub fn endpoints(&self) -> (EntityRef, EntityRef) {
        (self.source, self.target)
    }

    /// Returns true if source and target are the same entity
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns true if the given entity is one of the endpoints
    pub fn connects(&self, entity: impl Into<EntityRef>) -> bool {
        let entity = entity.into();
        self.source == entity || self.target == entity
    }

    /// The endpoint opposite to `entity`, or `None` if `entity` is not an
    /// endpoint. For a self-loop the opposite endpoint is the entity itself.
    pub fn opposite(&self, entity: impl Into<EntityRef>) -> Option<EntityRef> {
        let entity = entity.into();
        if self.source == entity {
            Some(self.target)
        } else if self.target == entity {
            Some(self.source)
        } else {
            None
        }
    }
}
