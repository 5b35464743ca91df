use tracing::debug;

use crate::error::TopologyError;
use crate::operations::query::IsValid;
use crate::topology::{FaceId, SolidId, TopologyStore};

/// Deletes a face and re-attaches its outer loop as a hole of another
/// face of the same solid.
///
/// Merging faces across two solids would have to unify their entity
/// spaces; that is deliberately unsupported and rejected.
#[derive(Debug)]
pub struct KillFaceMergeRingHole {
    outer: FaceId,
    inner: FaceId,
}

impl KillFaceMergeRingHole {
    /// Creates a new `KillFaceMergeRingHole` operation; `inner` is the
    /// face to dissolve into a hole of `outer`.
    #[must_use]
    pub fn new(outer: FaceId, inner: FaceId) -> Self {
        Self { outer, inner }
    }

    /// Executes the operation, returning the solid that keeps both
    /// boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::CrossSolidMergeUnsupported`] if the faces
    /// belong to different solids, or [`TopologyError::InvalidTopology`]
    /// if the two faces are the same. Neither solid is mutated on
    /// failure.
    pub fn execute(&self, store: &mut TopologyStore) -> Result<SolidId, TopologyError> {
        let solid = store.face(self.outer)?.solid;
        let inner_solid = store.face(self.inner)?.solid;
        if solid != inner_solid {
            return Err(TopologyError::CrossSolidMergeUnsupported);
        }
        if self.outer == self.inner {
            return Err(TopologyError::InvalidTopology(
                "a face cannot become its own hole".into(),
            ));
        }

        let ring = store.faces[self.inner].outer_loop;
        store.faces[self.outer].inner_loops.push(ring);
        store.loops[ring].face = self.outer;
        store.solids[solid].faces.retain(|&f| f != self.inner);
        store.faces.remove(self.inner);

        debug!(outer = ?self.outer, inner = ?self.inner, ?ring, "kfmrh merged ring as hole");
        debug_assert!(IsValid::new(solid).execute(store));
        Ok(solid)
    }
}
