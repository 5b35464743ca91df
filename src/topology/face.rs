use super::loops::LoopId;
use super::solid::SolidId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the topology store.
    pub struct FaceId;
}

/// Data associated with a topological face.
///
/// A face is a planar boundary patch with exactly one outer loop and
/// zero or more inner loops representing holes.
#[derive(Debug, Clone)]
pub struct FaceData {
    pub(crate) solid: SolidId,
    pub(crate) outer_loop: LoopId,
    pub(crate) inner_loops: Vec<LoopId>,
}

impl FaceData {
    /// The solid this face belongs to.
    #[must_use]
    pub fn solid(&self) -> SolidId {
        self.solid
    }

    /// The outer boundary loop.
    #[must_use]
    pub fn outer_loop(&self) -> LoopId {
        self.outer_loop
    }

    /// Inner boundary loops (holes).
    #[must_use]
    pub fn inner_loops(&self) -> &[LoopId] {
        &self.inner_loops
    }
}
