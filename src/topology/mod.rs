pub mod edge;
pub mod face;
pub mod half_edge;
pub mod loops;
pub mod solid;
pub mod vertex;

mod describe;

pub use describe::Entity;
pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use half_edge::{HalfEdgeData, HalfEdgeId};
pub use loops::{LoopData, LoopId};
pub use solid::{SolidData, SolidId};
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all topological entities.
///
/// Entities reference each other via typed IDs (generational indices),
/// avoiding self-referential structures and enabling safe mutation. A key
/// is never reissued: a recycled slot carries a new generation, so stale
/// IDs fail to resolve instead of aliasing a new entity.
///
/// The store exposes read-only traversal; the only way to mutate the
/// linked structure is through the Euler operators in
/// [`crate::operations::euler`].
#[derive(Debug, Default)]
pub struct TopologyStore {
    pub(crate) vertices: SlotMap<VertexId, VertexData>,
    pub(crate) half_edges: SlotMap<HalfEdgeId, HalfEdgeData>,
    pub(crate) edges: SlotMap<EdgeId, EdgeData>,
    pub(crate) loops: SlotMap<LoopId, LoopData>,
    pub(crate) faces: SlotMap<FaceId, FaceData>,
    pub(crate) solids: SlotMap<SolidId, SolidData>,
}

impl TopologyStore {
    /// Creates a new, empty topology store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or(TopologyError::EntityNotFound("vertex"))
    }

    /// Returns a reference to the half-edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn half_edge(&self, id: HalfEdgeId) -> Result<&HalfEdgeData, TopologyError> {
        self.half_edges
            .get(id)
            .ok_or(TopologyError::EntityNotFound("half-edge"))
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, TopologyError> {
        self.edges
            .get(id)
            .ok_or(TopologyError::EntityNotFound("edge"))
    }

    /// Returns a reference to the loop data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn loop_data(&self, id: LoopId) -> Result<&LoopData, TopologyError> {
        self.loops
            .get(id)
            .ok_or(TopologyError::EntityNotFound("loop"))
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, TopologyError> {
        self.faces
            .get(id)
            .ok_or(TopologyError::EntityNotFound("face"))
    }

    /// Returns a reference to the solid data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn solid(&self, id: SolidId) -> Result<&SolidData, TopologyError> {
        self.solids
            .get(id)
            .ok_or(TopologyError::EntityNotFound("solid"))
    }

    /// Iterates over all solids in the store.
    pub fn solids(&self) -> impl Iterator<Item = SolidId> + '_ {
        self.solids.keys()
    }

    /// Number of live half-edges across all solids.
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Walks the loop's circular half-edge list once, starting from its
    /// representative half-edge. An empty loop yields nothing.
    ///
    /// The walk borrows the store, so it cannot outlive a structural
    /// operator on any loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the loop is not found in the store.
    pub fn loop_half_edges(&self, id: LoopId) -> Result<LoopWalk<'_>, TopologyError> {
        let first = self.loop_data(id)?.first;
        Ok(LoopWalk {
            store: self,
            first,
            next: first,
        })
    }

    /// Walks one full cycle starting at `start`, inclusive.
    pub(crate) fn cycle_from(&self, start: HalfEdgeId) -> LoopWalk<'_> {
        LoopWalk {
            store: self,
            first: Some(start),
            next: Some(start),
        }
    }

    /// Linear scan of the cycle containing `start` for the directed
    /// half-edge `from -> to`. The scan starts at `start` itself.
    pub(crate) fn find_in_cycle(
        &self,
        start: HalfEdgeId,
        from: VertexId,
        to: VertexId,
    ) -> Option<HalfEdgeId> {
        self.cycle_from(start).find(|&h| {
            self.half_edges
                .get(h)
                .is_some_and(|he| he.start == from && he.end == to)
        })
    }

    /// Linear scan of the cycle containing `start` for the first half-edge
    /// arriving at `at`.
    pub(crate) fn find_ending_at(&self, start: HalfEdgeId, at: VertexId) -> Option<HalfEdgeId> {
        self.cycle_from(start)
            .find(|&h| self.half_edges.get(h).is_some_and(|he| he.end == at))
    }

    /// Inserts an edge together with its two partner half-edges.
    ///
    /// Both halves are assigned to `loop_id` and linked into a closed
    /// two-cycle (`he1 <-> he2`); callers re-splice `next`/`prev` as
    /// needed.
    pub(crate) fn new_edge_pair(
        &mut self,
        from: VertexId,
        to: VertexId,
        loop_id: LoopId,
    ) -> (EdgeId, HalfEdgeId, HalfEdgeId) {
        let he1 = self.half_edges.insert(HalfEdgeData {
            start: from,
            end: to,
            partner: HalfEdgeId::default(),
            edge: EdgeId::default(),
            loop_id,
            next: HalfEdgeId::default(),
            prev: HalfEdgeId::default(),
        });
        let he2 = self.half_edges.insert(HalfEdgeData {
            start: to,
            end: from,
            partner: he1,
            edge: EdgeId::default(),
            loop_id,
            next: he1,
            prev: he1,
        });
        let edge = self.edges.insert(EdgeData {
            half_edges: (he1, he2),
        });

        let first = &mut self.half_edges[he1];
        first.partner = he2;
        first.edge = edge;
        first.next = he2;
        first.prev = he2;
        self.half_edges[he2].edge = edge;

        (edge, he1, he2)
    }
}

/// Bounded iterator over one full cycle of a loop's half-edges.
///
/// Terminates when the walk returns to its starting half-edge, or early if
/// a link resolves to a dead slot.
pub struct LoopWalk<'a> {
    store: &'a TopologyStore,
    first: Option<HalfEdgeId>,
    next: Option<HalfEdgeId>,
}

impl Iterator for LoopWalk<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let current = self.next?;
        let he = self.store.half_edges.get(current)?;
        self.next = (Some(he.next) != self.first).then_some(he.next);
        Some(current)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::euler::{EndVertex, MakeEdgeVertex, MakeVertexFaceSolid};

    #[test]
    fn loop_walk_is_restartable() {
        let mut store = TopologyStore::new();
        let (_, face, v0) = MakeVertexFaceSolid::new(Point3::new(0.0, 0.0, 0.0)).execute(&mut store);
        let loop_id = store.face(face).unwrap().outer_loop();
        let v1 = MakeEdgeVertex::new(loop_id, v0, EndVertex::New(Point3::new(1.0, 0.0, 0.0)))
            .execute(&mut store)
            .unwrap();
        MakeEdgeVertex::new(loop_id, v1, EndVertex::New(Point3::new(1.0, 1.0, 0.0)))
            .execute(&mut store)
            .unwrap();

        let once: Vec<_> = store.loop_half_edges(loop_id).unwrap().collect();
        let twice: Vec<_> = store.loop_half_edges(loop_id).unwrap().collect();
        assert_eq!(once.len(), 4);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_loop_walk_yields_nothing() {
        let mut store = TopologyStore::new();
        let (_, face, _) = MakeVertexFaceSolid::new(Point3::new(0.0, 0.0, 0.0)).execute(&mut store);
        let loop_id = store.face(face).unwrap().outer_loop();
        assert_eq!(store.loop_half_edges(loop_id).unwrap().count(), 0);
    }

    #[test]
    fn stale_id_does_not_resolve() {
        let store = TopologyStore::new();
        assert_eq!(
            store.vertex(VertexId::default()).unwrap_err(),
            crate::error::TopologyError::EntityNotFound("vertex")
        );
    }
}
