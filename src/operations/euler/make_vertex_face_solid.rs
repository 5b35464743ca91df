use tracing::debug;

use crate::math::Point3;
use crate::topology::{
    FaceData, FaceId, LoopData, SolidData, SolidId, TopologyStore, VertexData, VertexId,
};

/// Seeds a new solid: one vertex, one face with an empty outer loop, no
/// edges. The minimal configuration from which a boundary is grown by
/// `MakeEdgeVertex` calls.
#[derive(Debug)]
pub struct MakeVertexFaceSolid {
    point: Point3,
}

impl MakeVertexFaceSolid {
    /// Creates a new `MakeVertexFaceSolid` operation.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the operation. Always succeeds.
    pub fn execute(&self, store: &mut TopologyStore) -> (SolidId, FaceId, VertexId) {
        let solid = store.solids.insert(SolidData::default());
        let vertex = store.vertices.insert(VertexData::new(self.point));
        let loop_id = store.loops.insert(LoopData {
            face: FaceId::default(),
            first: None,
        });
        let face = store.faces.insert(FaceData {
            solid,
            outer_loop: loop_id,
            inner_loops: Vec::new(),
        });
        store.loops[loop_id].face = face;

        let solid_data = &mut store.solids[solid];
        solid_data.vertices.push(vertex);
        solid_data.faces.push(face);

        debug!(?solid, ?face, ?vertex, "mvfs seeded solid");
        (solid, face, vertex)
    }
}
