use super::edge::EdgeId;
use super::loops::LoopId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a half-edge in the topology store.
    pub struct HalfEdgeId;
}

/// One directed traversal of an edge around a loop.
///
/// Half-edges form a circular doubly linked list per loop via `next`/`prev`.
/// The two half-edges of an edge are partners and run in opposite
/// directions, so `start` and `end` are swapped between them.
#[derive(Debug, Clone, Copy)]
pub struct HalfEdgeData {
    pub(crate) start: VertexId,
    pub(crate) end: VertexId,
    pub(crate) partner: HalfEdgeId,
    pub(crate) edge: EdgeId,
    pub(crate) loop_id: LoopId,
    pub(crate) next: HalfEdgeId,
    pub(crate) prev: HalfEdgeId,
}

impl HalfEdgeData {
    /// Vertex this half-edge leaves from.
    #[must_use]
    pub fn start(&self) -> VertexId {
        self.start
    }

    /// Vertex this half-edge arrives at.
    #[must_use]
    pub fn end(&self) -> VertexId {
        self.end
    }

    /// The oppositely directed half-edge of the same edge.
    #[must_use]
    pub fn partner(&self) -> HalfEdgeId {
        self.partner
    }

    /// The undirected edge this half-edge belongs to.
    #[must_use]
    pub fn edge(&self) -> EdgeId {
        self.edge
    }

    /// The loop whose circular list currently contains this half-edge.
    #[must_use]
    pub fn loop_id(&self) -> LoopId {
        self.loop_id
    }

    /// Successor in the loop's circular list.
    #[must_use]
    pub fn next(&self) -> HalfEdgeId {
        self.next
    }

    /// Predecessor in the loop's circular list.
    #[must_use]
    pub fn prev(&self) -> HalfEdgeId {
        self.prev
    }
}
