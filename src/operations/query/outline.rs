use crate::error::TopologyError;
use crate::math::Point3;
use crate::topology::{FaceId, LoopId, TopologyStore};

/// The boundary polygons of a face: one outer ring plus any holes, each
/// given as vertex positions in stored winding order.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceOutline {
    pub outer: Vec<Point3>,
    pub holes: Vec<Vec<Point3>>,
}

/// Reads a face's boundary back out as point polygons.
pub struct Outline {
    face: FaceId,
}

impl Outline {
    /// Creates a new `Outline` query.
    #[must_use]
    pub fn new(face: FaceId) -> Self {
        Self { face }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`TopologyError::EntityNotFound`] if the face or any of
    /// its linked entities no longer resolves.
    pub fn execute(&self, store: &TopologyStore) -> Result<FaceOutline, TopologyError> {
        let face = store.face(self.face)?;
        let outer = collect_loop(store, face.outer_loop())?;
        let mut holes = Vec::with_capacity(face.inner_loops().len());
        for &hole in face.inner_loops() {
            holes.push(collect_loop(store, hole)?);
        }
        Ok(FaceOutline { outer, holes })
    }
}

fn collect_loop(store: &TopologyStore, loop_id: LoopId) -> Result<Vec<Point3>, TopologyError> {
    let mut points = Vec::new();
    for half_edge in store.loop_half_edges(loop_id)? {
        let start = store.half_edge(half_edge)?.start();
        points.push(store.vertex(start)?.point());
    }
    Ok(points)
}
