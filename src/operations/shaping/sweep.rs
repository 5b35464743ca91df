use tracing::{debug, instrument};

use crate::error::TopologyError;
use crate::math::{Point3, Vector3};
use crate::operations::euler::{
    EndVertex, KillFaceMergeRingHole, MakeEdgeFace, MakeEdgeVertex,
};
use crate::topology::{FaceId, LoopId, SolidId, TopologyStore, VertexId};

/// Extrudes a face along a direction vector, turning a flat plate into a
/// prism. Holes of the face become through-holes of the prism.
///
/// The sweep is a pure composition of Euler operators: one edge-vertex
/// insertion per boundary vertex, one edge-face split per side wall, and
/// a ring merge per hole to carry it onto the far cap.
#[derive(Debug)]
pub struct Sweep {
    face: FaceId,
    direction: Vector3,
}

impl Sweep {
    /// Creates a new `Sweep` of `face` along `direction`.
    #[must_use]
    pub fn new(face: FaceId, direction: Vector3) -> Self {
        Self { face, direction }
    }

    /// Executes the sweep, returning the solid it grew.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EmptyLoop`] if the face has no boundary
    /// to extrude, or [`TopologyError::EntityNotFound`] if the face no
    /// longer resolves.
    #[instrument(skip_all, fields(face = ?self.face))]
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId, TopologyError> {
        let face = store.face(self.face)?;
        let solid = face.solid();
        let outer = face.outer_loop();
        let holes: Vec<LoopId> = face.inner_loops().to_vec();

        // The side walls grow on the far side of the boundary, so the
        // loop left over after all the splits is the far cap.
        let outer_enclosed = self.sweep_loop(store, outer)?;
        let far_face = store.loop_data(outer_enclosed)?.face();

        for hole in holes {
            let hole_enclosed = self.sweep_loop(store, hole)?;
            let plug_face = store.loop_data(hole_enclosed)?.face();
            KillFaceMergeRingHole::new(far_face, plug_face).execute(store)?;
        }

        debug!(?solid, ?far_face, holes = store.face(far_face)?.inner_loops().len(), "sweep finished");
        Ok(solid)
    }

    /// Extrudes one boundary ring, working in the loop on the partner
    /// side of `loop_id` so that `loop_id` itself keeps the near cap.
    /// Returns the enclosed loop, which afterwards traces the translated
    /// ring on the far side.
    fn sweep_loop(&self, store: &mut TopologyStore, loop_id: LoopId) -> Result<LoopId, TopologyError> {
        let first = store
            .loop_data(loop_id)?
            .first()
            .ok_or(TopologyError::EmptyLoop)?;
        let enclosed = store.half_edge(store.half_edge(first)?.partner())?.loop_id();

        // Boundary vertices in reverse order, which is forward order for
        // the enclosed loop.
        let mut ring = vec![store.half_edge(first)?.start()];
        let mut walker = store.half_edge(first)?.prev();
        while walker != first {
            ring.push(store.half_edge(walker)?.start());
            walker = store.half_edge(walker)?.prev();
        }

        let first_vertex = ring[0];
        let first_new = MakeEdgeVertex::new(
            enclosed,
            first_vertex,
            EndVertex::New(self.translated(store, first_vertex)?),
        )
        .execute(store)?;

        let mut last_start = first_vertex;
        let mut last_end = first_new;
        for &start in &ring[1..] {
            let end = MakeEdgeVertex::new(
                enclosed,
                start,
                EndVertex::New(self.translated(store, start)?),
            )
            .execute(store)?;
            MakeEdgeFace::new(enclosed, start, end, last_start, last_end).execute(store)?;
            last_start = last_end;
            last_end = end;
        }

        MakeEdgeFace::new(enclosed, first_vertex, first_new, last_start, last_end)
            .execute(store)?;
        Ok(enclosed)
    }

    fn translated(&self, store: &TopologyStore, vertex: VertexId) -> Result<Point3, TopologyError> {
        Ok(store.vertex(vertex)?.point() + self.direction)
    }
}
