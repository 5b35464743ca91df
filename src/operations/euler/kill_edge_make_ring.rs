use tracing::debug;

use crate::error::TopologyError;
use crate::operations::query::IsValid;
use crate::topology::{LoopData, LoopId, TopologyStore, VertexId};

/// Removes a bridge edge from a loop, splitting its boundary into the
/// remaining outer chain and a new inner loop (a hole of the same face).
///
/// The edge and both its half-edges are destroyed and removed from the
/// solid's edge list.
#[derive(Debug)]
pub struct KillEdgeMakeRing {
    loop_id: LoopId,
    from: VertexId,
    to: VertexId,
}

impl KillEdgeMakeRing {
    /// Creates a new `KillEdgeMakeRing` operation naming the directed
    /// half-edge `from -> to` within `loop_id`.
    #[must_use]
    pub fn new(loop_id: LoopId, from: VertexId, to: VertexId) -> Self {
        Self { loop_id, from, to }
    }

    /// Executes the operation, returning the new inner loop.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyLoop`] if the loop has no boundary,
    /// or [`TopologyError::HalfEdgeNotFound`] if `from -> to` is not in
    /// the loop, its partner lies in a different loop, or the edge is
    /// pendant — in all three cases the edge is not a bridge of this
    /// boundary. No mutation happens on failure.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<LoopId, TopologyError> {
        let loop_data = store.loop_data(self.loop_id)?;
        let face = loop_data.face;
        let first = loop_data.first.ok_or(TopologyError::EmptyLoop)?;
        let solid = store.face(face)?.solid;

        let he1 = store
            .find_in_cycle(first, self.from, self.to)
            .ok_or(TopologyError::HalfEdgeNotFound)?;
        let he2 = store.half_edges[he1].partner;
        if store.half_edges[he2].loop_id != self.loop_id {
            return Err(TopologyError::HalfEdgeNotFound);
        }
        // A pendant edge has an empty chain on one side; removing it
        // cannot leave two non-empty boundaries.
        if store.half_edges[he1].next == he2 || store.half_edges[he2].next == he1 {
            return Err(TopologyError::HalfEdgeNotFound);
        }

        let he1_next = store.half_edges[he1].next;
        let he1_prev = store.half_edges[he1].prev;
        let he2_next = store.half_edges[he2].next;
        let he2_prev = store.half_edges[he2].prev;

        // Splice both halves out; this disconnects the boundary into two
        // disjoint circular chains.
        store.half_edges[he1_next].prev = he2_prev;
        store.half_edges[he1_prev].next = he2_next;
        store.half_edges[he2_next].prev = he1_prev;
        store.half_edges[he2_prev].next = he1_next;

        let new_loop = store.loops.insert(LoopData {
            face,
            first: Some(he2_next),
        });
        store.faces[face].inner_loops.push(new_loop);
        store.loops[self.loop_id].first = Some(he1_next);

        // Re-derive loop ownership for the detached chain.
        store.half_edges[he2_next].loop_id = new_loop;
        let mut h = store.half_edges[he2_next].next;
        while h != he2_next {
            store.half_edges[h].loop_id = new_loop;
            h = store.half_edges[h].next;
        }

        let edge = store.half_edges[he1].edge;
        store.half_edges.remove(he1);
        store.half_edges.remove(he2);
        store.edges.remove(edge);
        store.solids[solid].edges.retain(|&e| e != edge);

        debug!(?edge, ?new_loop, loop_id = ?self.loop_id, "kemr detached ring");
        debug_assert!(IsValid::new(solid).execute(store));
        Ok(new_loop)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::euler::{
        EndVertex, KillFaceMergeRingHole, MakeEdgeFace, MakeEdgeVertex, MakeVertexFaceSolid,
    };
    use crate::topology::{FaceId, SolidId};

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn square(store: &mut TopologyStore) -> (SolidId, FaceId, Vec<VertexId>) {
        let points = [
            p(0.0, 0.0, 0.0),
            p(4.0, 0.0, 0.0),
            p(4.0, 4.0, 0.0),
            p(0.0, 4.0, 0.0),
        ];
        let (solid, seed_face, v0) = MakeVertexFaceSolid::new(points[0]).execute(store);
        let loop_id = store.face(seed_face).unwrap().outer_loop();
        let mut verts = vec![v0];
        for &point in &points[1..] {
            let prev = *verts.last().unwrap();
            verts.push(
                MakeEdgeVertex::new(loop_id, prev, EndVertex::New(point))
                    .execute(store)
                    .unwrap(),
            );
        }
        let face = MakeEdgeFace::new(loop_id, verts[2], verts[3], verts[1], verts[0])
            .execute(store)
            .unwrap();
        (solid, face, verts)
    }

    /// Grows a rectangular ring inside `face` and returns the interior
    /// disc face plus the ring vertices, mirroring the `ring` directive.
    fn grow_ring(
        store: &mut TopologyStore,
        face: FaceId,
        points: &[Point3],
    ) -> (FaceId, Vec<VertexId>) {
        let loop_id = store.face(face).unwrap().outer_loop();
        let solid = store.face(face).unwrap().solid();
        let anchor = store.solid(solid).unwrap().vertices()[0];
        let mut ring = Vec::new();
        ring.push(
            MakeEdgeVertex::new(loop_id, anchor, EndVertex::New(points[0]))
                .execute(store)
                .unwrap(),
        );
        for &point in &points[1..] {
            let prev = *ring.last().unwrap();
            ring.push(
                MakeEdgeVertex::new(loop_id, prev, EndVertex::New(point))
                    .execute(store)
                    .unwrap(),
            );
        }
        let n = ring.len();
        let disc = MakeEdgeFace::new(loop_id, ring[1], ring[0], ring[n - 2], ring[n - 1])
            .execute(store)
            .unwrap();
        (disc, ring)
    }

    #[test]
    fn bridge_removal_turns_chain_into_hole() {
        let mut store = TopologyStore::new();
        let (solid, face, verts) = square(&mut store);
        let ring_points = [
            p(1.0, 1.0, 0.0),
            p(3.0, 1.0, 0.0),
            p(3.0, 3.0, 0.0),
            p(1.0, 3.0, 0.0),
        ];
        let (_, ring) = grow_ring(&mut store, face, &ring_points);

        let edges_before = store.solid(solid).unwrap().edges().len();
        let outer = store.face(face).unwrap().outer_loop();
        let hole = KillEdgeMakeRing::new(outer, ring[0], verts[0])
            .execute(&mut store)
            .unwrap();

        assert_eq!(store.solid(solid).unwrap().edges().len(), edges_before - 1);
        assert_eq!(store.face(face).unwrap().inner_loops(), &[hole]);
        assert_eq!(store.loop_data(hole).unwrap().face(), face);
        assert_eq!(store.loop_half_edges(hole).unwrap().count(), 4);
        assert_eq!(store.loop_half_edges(outer).unwrap().count(), 4);
        for h in store.loop_half_edges(hole).unwrap() {
            assert_eq!(store.half_edge(h).unwrap().loop_id(), hole);
        }
    }

    #[test]
    fn pendant_edge_is_rejected_without_mutation() {
        let mut store = TopologyStore::new();

        // Sole edge of a loop: both chains next to it are empty.
        let (solid, seed_face, v0) = MakeVertexFaceSolid::new(p(0.0, 0.0, 0.0)).execute(&mut store);
        let loop_id = store.face(seed_face).unwrap().outer_loop();
        let v1 = MakeEdgeVertex::new(loop_id, v0, EndVertex::New(p(1.0, 0.0, 0.0)))
            .execute(&mut store)
            .unwrap();

        let err = KillEdgeMakeRing::new(loop_id, v0, v1)
            .execute(&mut store)
            .unwrap_err();
        assert_eq!(err, TopologyError::HalfEdgeNotFound);
        assert_eq!(store.solid(solid).unwrap().edges().len(), 1);
        assert_eq!(store.loop_half_edges(loop_id).unwrap().count(), 2);
        assert!(store.face(seed_face).unwrap().inner_loops().is_empty());

        // A spike hanging off a square boundary: one side is empty.
        let (solid, face, verts) = square(&mut store);
        let outer = store.face(face).unwrap().outer_loop();
        let spike = MakeEdgeVertex::new(outer, verts[0], EndVertex::New(p(5.0, 5.0, 0.0)))
            .execute(&mut store)
            .unwrap();
        let edges_before = store.solid(solid).unwrap().edges().to_vec();

        let err = KillEdgeMakeRing::new(outer, spike, verts[0])
            .execute(&mut store)
            .unwrap_err();
        assert_eq!(err, TopologyError::HalfEdgeNotFound);
        assert_eq!(store.solid(solid).unwrap().edges(), edges_before);
        assert_eq!(store.loop_half_edges(outer).unwrap().count(), 6);
        assert!(store.face(face).unwrap().inner_loops().is_empty());
    }

    #[test]
    fn missing_bridge_fails_without_mutation() {
        let mut store = TopologyStore::new();
        let (solid, face, verts) = square(&mut store);
        let outer = store.face(face).unwrap().outer_loop();
        let edges_before = store.solid(solid).unwrap().edges().to_vec();

        // v0 -> v2 is a diagonal, not a boundary half-edge.
        let err = KillEdgeMakeRing::new(outer, verts[0], verts[2])
            .execute(&mut store)
            .unwrap_err();
        assert_eq!(err, TopologyError::HalfEdgeNotFound);
        assert_eq!(store.solid(solid).unwrap().edges(), edges_before);
        assert!(store.face(face).unwrap().inner_loops().is_empty());
    }

    #[test]
    fn hole_cut_then_hole_fill_keeps_vertex_and_edge_counts() {
        let mut store = TopologyStore::new();
        let (solid, face, verts) = square(&mut store);
        let ring_points = [
            p(1.0, 1.0, 0.0),
            p(3.0, 1.0, 0.0),
            p(3.0, 3.0, 0.0),
            p(1.0, 3.0, 0.0),
        ];

        let loop_id = store.face(face).unwrap().outer_loop();
        let anchor = verts[0];
        let mut ring = vec![
            MakeEdgeVertex::new(loop_id, anchor, EndVertex::New(ring_points[0]))
                .execute(&mut store)
                .unwrap(),
        ];
        for &point in &ring_points[1..] {
            let prev = *ring.last().unwrap();
            ring.push(
                MakeEdgeVertex::new(loop_id, prev, EndVertex::New(point))
                    .execute(&mut store)
                    .unwrap(),
            );
        }
        // Baseline after the chain is grown but before the interior is
        // closed off.
        let vertices_baseline = store.solid(solid).unwrap().vertices().len();
        let edges_baseline = store.solid(solid).unwrap().edges().len();
        let faces_baseline = store.solid(solid).unwrap().faces().len();

        let disc = MakeEdgeFace::new(loop_id, ring[1], ring[0], ring[2], ring[3])
            .execute(&mut store)
            .unwrap();
        KillEdgeMakeRing::new(loop_id, ring[0], anchor)
            .execute(&mut store)
            .unwrap();
        KillFaceMergeRingHole::new(face, disc)
            .execute(&mut store)
            .unwrap();

        // The chord added by MEF was consumed by KEMR's bridge removal;
        // KFMRH only moved a loop. Vertex and edge counts are unchanged.
        let solid_data = store.solid(solid).unwrap();
        assert_eq!(solid_data.vertices().len(), vertices_baseline);
        assert_eq!(solid_data.edges().len(), edges_baseline);
        assert_eq!(solid_data.faces().len(), faces_baseline);
        assert_eq!(store.face(face).unwrap().inner_loops().len(), 2);
    }
}
