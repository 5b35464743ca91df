use crate::math::Point3;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the topology store.
    pub struct VertexId;
}

/// Data associated with a topological vertex.
///
/// The vertex owns its immutable 3D position; vertices are created by
/// `MakeVertexFaceSolid` and `MakeEdgeVertex` and are never destroyed.
#[derive(Debug, Clone, Copy)]
pub struct VertexData {
    pub(crate) point: Point3,
}

impl VertexData {
    pub(crate) fn new(point: Point3) -> Self {
        Self { point }
    }

    /// The 3D position of the vertex.
    #[must_use]
    pub fn point(&self) -> Point3 {
        self.point
    }
}
