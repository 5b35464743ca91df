use tracing::debug;

use crate::error::TopologyError;
use crate::operations::query::IsValid;
use crate::topology::{FaceData, FaceId, LoopData, LoopId, TopologyStore, VertexId};

/// Splits a loop in two by inserting a chord edge, creating a new face.
///
/// The chord connects the end of one existing boundary half-edge to the
/// end of another. The sub-chain between them is cut off into the new
/// face's outer loop; the remainder stays with the original face.
#[derive(Debug)]
pub struct MakeEdgeFace {
    loop_id: LoopId,
    e1: (VertexId, VertexId),
    e2: (VertexId, VertexId),
}

impl MakeEdgeFace {
    /// Creates a new `MakeEdgeFace` operation. The two vertex pairs name
    /// directed half-edges already present in `loop_id`.
    #[must_use]
    pub fn new(
        loop_id: LoopId,
        e1_start: VertexId,
        e1_end: VertexId,
        e2_start: VertexId,
        e2_end: VertexId,
    ) -> Self {
        Self {
            loop_id,
            e1: (e1_start, e1_end),
            e2: (e2_start, e2_end),
        }
    }

    /// Executes the operation, returning the new face.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyLoop`] if the loop has no boundary
    /// yet, [`TopologyError::HalfEdgeNotFound`] if either directed
    /// half-edge is absent from it, or
    /// [`TopologyError::InvalidTopology`] if both anchors resolve to the
    /// same half-edge. No mutation happens on failure.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<FaceId, TopologyError> {
        let loop_data = store.loop_data(self.loop_id)?;
        let face = loop_data.face;
        let first = loop_data.first.ok_or(TopologyError::EmptyLoop)?;
        let solid = store.face(face)?.solid;

        let he1 = store
            .find_in_cycle(first, self.e1.0, self.e1.1)
            .ok_or(TopologyError::HalfEdgeNotFound)?;
        // The second scan continues forward from the first hit, inclusive.
        let he2 = store
            .find_in_cycle(he1, self.e2.0, self.e2.1)
            .ok_or(TopologyError::HalfEdgeNotFound)?;
        // Splicing the chord twice at one half-edge would cut off nothing.
        if he2 == he1 {
            return Err(TopologyError::InvalidTopology(
                "loop split requires two distinct half-edges".into(),
            ));
        }

        // Chord from the end of he1 to the end of he2.
        let (edge, nh1, nh2) = store.new_edge_pair(self.e1.1, self.e2.1, self.loop_id);
        store.solids[solid].edges.push(edge);

        let he1_next = store.half_edges[he1].next;
        let he2_next = store.half_edges[he2].next;

        store.half_edges[nh1].next = he2_next;
        store.half_edges[nh1].prev = he1;
        store.half_edges[nh2].next = he1_next;
        store.half_edges[nh2].prev = he2;
        store.half_edges[he2_next].prev = nh1;
        store.half_edges[he1].next = nh1;
        store.half_edges[he1_next].prev = nh2;
        store.half_edges[he2].next = nh2;

        let new_loop = store.loops.insert(LoopData {
            face: FaceId::default(),
            first: Some(nh1),
        });
        let new_face = store.faces.insert(FaceData {
            solid,
            outer_loop: new_loop,
            inner_loops: Vec::new(),
        });
        store.loops[new_loop].face = new_face;
        store.solids[solid].faces.push(new_face);

        // The cut-off cycle starting at the chord moves to the new loop;
        // the remainder keeps the old one, restarting at the chord's
        // partner. Loop ownership is re-derived, never assumed.
        store.loops[self.loop_id].first = Some(nh2);
        store.half_edges[nh1].loop_id = new_loop;
        let mut h = store.half_edges[nh1].next;
        while h != nh1 {
            store.half_edges[h].loop_id = new_loop;
            h = store.half_edges[h].next;
        }

        debug!(?edge, ?new_face, loop_id = ?self.loop_id, "mef split loop");
        debug_assert!(IsValid::new(solid).execute(store));
        Ok(new_face)
    }
}
