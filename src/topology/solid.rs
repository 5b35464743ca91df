use super::edge::EdgeId;
use super::face::FaceId;
use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a solid in the topology store.
    pub struct SolidId;
}

/// Data associated with a topological solid.
///
/// A solid is one connected shell. Its membership lists are exact: an
/// entity is listed iff it has been created for this solid and not yet
/// destroyed. Lists keep creation order, which the script driver relies
/// on to address vertices positionally.
#[derive(Debug, Clone, Default)]
pub struct SolidData {
    pub(crate) faces: Vec<FaceId>,
    pub(crate) edges: Vec<EdgeId>,
    pub(crate) vertices: Vec<VertexId>,
}

impl SolidData {
    /// Faces of the solid in creation order.
    #[must_use]
    pub fn faces(&self) -> &[FaceId] {
        &self.faces
    }

    /// Edges of the solid in creation order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Vertices of the solid in creation order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }
}
