//! The five structural Euler operators.
//!
//! These are the only legal way to mutate the topology graph. Every
//! operator validates its preconditions before the first write and so
//! either commits completely or leaves the store untouched.

mod kill_edge_make_ring;
mod kill_face_merge_ring_hole;
mod make_edge_face;
mod make_edge_vertex;
mod make_vertex_face_solid;

pub use kill_edge_make_ring::KillEdgeMakeRing;
pub use kill_face_merge_ring_hole::KillFaceMergeRingHole;
pub use make_edge_face::MakeEdgeFace;
pub use make_edge_vertex::{EndVertex, MakeEdgeVertex};
pub use make_vertex_face_solid::MakeVertexFaceSolid;
