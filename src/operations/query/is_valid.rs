use std::collections::{HashMap, HashSet};

use crate::error::TopologyError;
use crate::topology::{EdgeId, HalfEdgeId, LoopId, SolidId, TopologyStore};

/// Validates the structural consistency of a solid's topology.
///
/// Every Euler operator debug-asserts this after committing, so a broken
/// splice is caught at the operator that introduced it rather than at a
/// later traversal.
pub struct IsValid {
    solid: SolidId,
}

impl IsValid {
    /// Creates a new `IsValid` query.
    #[must_use]
    pub fn new(solid: SolidId) -> Self {
        Self { solid }
    }

    /// Executes the validation, returning `true` if all invariants hold.
    #[must_use]
    pub fn execute(&self, store: &TopologyStore) -> bool {
        audit_solid(store, self.solid).is_ok()
    }
}

/// Walks every loop reachable from the solid's faces and checks the
/// linked-structure invariants:
///
/// - partner involution, with swapped endpoints and a shared edge;
/// - `next`/`prev` forming a circular doubly linked list per loop;
/// - every half-edge's `loop_id` matching the loop that contains it, and
///   no half-edge appearing in two loops;
/// - loop and face back-references;
/// - the solid's edge list holding exactly the edges on its boundaries,
///   each contributing both halves;
/// - every boundary vertex present in the solid's vertex list.
///
/// # Errors
///
/// Returns [`TopologyError::InvalidTopology`] naming the first violation
/// found, or [`TopologyError::EntityNotFound`] if a link resolves to a
/// dead slot.
pub fn audit_solid(store: &TopologyStore, solid_id: SolidId) -> Result<(), TopologyError> {
    let solid = store.solid(solid_id)?;
    // A corrupted cycle cannot run forever: no loop can legitimately hold
    // more half-edges than the store does.
    let step_budget = store.half_edge_count();

    let vertex_list: HashSet<_> = solid.vertices().iter().copied().collect();
    let mut owner: HashMap<HalfEdgeId, LoopId> = HashMap::new();
    let mut halves_per_edge: HashMap<EdgeId, usize> = HashMap::new();

    for &face_id in solid.faces() {
        let face = store.face(face_id)?;
        if face.solid() != solid_id {
            return Err(invalid("face does not reference its solid"));
        }
        let loops = std::iter::once(face.outer_loop()).chain(face.inner_loops().iter().copied());
        for loop_id in loops {
            let loop_data = store.loop_data(loop_id)?;
            if loop_data.face() != face_id {
                return Err(invalid("loop does not reference its face"));
            }
            let Some(first) = loop_data.first() else {
                continue;
            };

            let mut current = first;
            let mut steps = 0usize;
            loop {
                let he = store.half_edge(current)?;
                if he.loop_id() != loop_id {
                    return Err(invalid("half-edge loop back-reference is stale"));
                }
                if store.half_edge(he.next())?.prev() != current {
                    return Err(invalid("next/prev links disagree"));
                }
                let partner = store.half_edge(he.partner())?;
                if he.partner() == current || partner.partner() != current {
                    return Err(invalid("partner is not an involution"));
                }
                if partner.edge() != he.edge()
                    || partner.start() != he.end()
                    || partner.end() != he.start()
                {
                    return Err(invalid("partner does not mirror the edge"));
                }
                let (h1, h2) = store.edge(he.edge())?.half_edges();
                if (h1, h2) != (current, he.partner()) && (h2, h1) != (current, he.partner()) {
                    return Err(invalid("edge does not own this half-edge pair"));
                }
                if !vertex_list.contains(&he.start()) || !vertex_list.contains(&he.end()) {
                    return Err(invalid("boundary vertex missing from solid list"));
                }
                if owner.insert(current, loop_id).is_some() {
                    return Err(invalid("half-edge appears in two loops"));
                }
                *halves_per_edge.entry(he.edge()).or_insert(0) += 1;

                steps += 1;
                if steps > step_budget {
                    return Err(invalid("loop does not close"));
                }
                current = he.next();
                if current == first {
                    break;
                }
            }
        }
    }

    let edge_list: HashSet<_> = solid.edges().iter().copied().collect();
    if edge_list.len() != solid.edges().len() {
        return Err(invalid("duplicate edge in solid list"));
    }
    for (&edge, &halves) in &halves_per_edge {
        if halves != 2 {
            return Err(invalid("edge does not contribute exactly two halves"));
        }
        if !edge_list.contains(&edge) {
            return Err(invalid("boundary edge missing from solid list"));
        }
    }
    if edge_list.len() != halves_per_edge.len() {
        return Err(invalid("solid lists an edge that is on no boundary"));
    }

    Ok(())
}

fn invalid(message: &str) -> TopologyError {
    TopologyError::InvalidTopology(message.to_string())
}
