use super::face::FaceId;
use super::half_edge::HalfEdgeId;

slotmap::new_key_type! {
    /// Unique identifier for a loop in the topology store.
    pub struct LoopId;
}

/// Data associated with a topological loop.
///
/// A loop is a closed circular boundary of half-edges bounding one region
/// of a face, either the outer boundary or a hole. Only `first` is stored;
/// the rest of the boundary is reached through the half-edge links.
#[derive(Debug, Clone, Copy)]
pub struct LoopData {
    pub(crate) face: FaceId,
    /// Representative half-edge, or `None` for the empty seed loop made by
    /// `MakeVertexFaceSolid`.
    pub(crate) first: Option<HalfEdgeId>,
}

impl LoopData {
    /// The face this loop bounds.
    #[must_use]
    pub fn face(&self) -> FaceId {
        self.face
    }

    /// Representative half-edge of the boundary, if any.
    #[must_use]
    pub fn first(&self) -> Option<HalfEdgeId> {
        self.first
    }
}
