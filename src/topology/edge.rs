use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the topology store.
    pub struct EdgeId;
}

/// Data associated with a topological edge.
///
/// An edge is an undirected boundary curve represented by its two partner
/// half-edges. Edges are created by `MakeEdgeVertex`/`MakeEdgeFace` and
/// destroyed only by `KillEdgeMakeRing`.
#[derive(Debug, Clone, Copy)]
pub struct EdgeData {
    pub(crate) half_edges: (HalfEdgeId, HalfEdgeId),
}

impl EdgeData {
    /// The two partner half-edges of this edge.
    #[must_use]
    pub fn half_edges(&self) -> (HalfEdgeId, HalfEdgeId) {
        self.half_edges
    }
}
