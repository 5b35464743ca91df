use tracing::debug;

use crate::error::TopologyError;
use crate::math::Point3;
use crate::operations::query::IsValid;
use crate::topology::{LoopId, TopologyStore, VertexData, VertexId};

/// Where the far end of the new edge comes from.
#[derive(Debug, Clone, Copy)]
pub enum EndVertex {
    /// Allocate a fresh vertex at the given position.
    New(Point3),
    /// Reuse a vertex that already exists in the solid.
    Existing(VertexId),
}

/// Adds one edge and (usually) one new vertex to a loop's boundary.
///
/// The new half-edge pair is spliced into the loop immediately after the
/// first half-edge arriving at `from`. On an empty loop the pair becomes
/// the whole boundary.
#[derive(Debug)]
pub struct MakeEdgeVertex {
    loop_id: LoopId,
    from: VertexId,
    to: EndVertex,
}

impl MakeEdgeVertex {
    /// Creates a new `MakeEdgeVertex` operation.
    #[must_use]
    pub fn new(loop_id: LoopId, from: VertexId, to: EndVertex) -> Self {
        Self { loop_id, from, to }
    }

    /// Executes the operation, returning the vertex at the far end of the
    /// new edge.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::VertexNotInLoop`] if the loop is non-empty
    /// and no half-edge in it arrives at `from`; the store is left
    /// untouched in that case.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<VertexId, TopologyError> {
        let face = store.loop_data(self.loop_id)?.face;
        let solid = store.face(face)?.solid;
        store.vertex(self.from)?;

        // Locate the splice point before allocating anything so a failed
        // precondition leaves the store untouched.
        let after = match store.loop_data(self.loop_id)?.first {
            None => None,
            Some(first) => Some(
                store
                    .find_ending_at(first, self.from)
                    .ok_or(TopologyError::VertexNotInLoop)?,
            ),
        };

        let to = match self.to {
            EndVertex::Existing(v) => {
                store.vertex(v)?;
                v
            }
            EndVertex::New(point) => {
                let v = store.vertices.insert(VertexData::new(point));
                store.solids[solid].vertices.push(v);
                v
            }
        };

        let (edge, he1, he2) = store.new_edge_pair(self.from, to, self.loop_id);
        store.solids[solid].edges.push(edge);

        match after {
            None => {
                // First edge of the loop: the pair already forms the whole
                // cycle, the outward half becomes representative.
                store.loops[self.loop_id].first = Some(he1);
            }
            Some(at) => {
                let at_next = store.half_edges[at].next;
                store.half_edges[he2].next = at_next;
                store.half_edges[at_next].prev = he2;
                store.half_edges[at].next = he1;
                store.half_edges[he1].prev = at;
            }
        }

        debug!(?edge, vertex = ?to, loop_id = ?self.loop_id, "mev spliced edge into loop");
        debug_assert!(IsValid::new(solid).execute(store));
        Ok(to)
    }
}
