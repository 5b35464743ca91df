use std::fmt::Write as _;

use super::{EdgeId, FaceId, HalfEdgeId, LoopId, SolidId, TopologyStore, VertexId};

/// A reference to any entity in the topology store.
#[derive(Debug, Clone, Copy)]
pub enum Entity {
    Vertex(VertexId),
    HalfEdge(HalfEdgeId),
    Edge(EdgeId),
    Loop(LoopId),
    Face(FaceId),
    Solid(SolidId),
}

impl TopologyStore {
    /// Renders a human-readable description of an entity and, for
    /// aggregates, of everything it bounds. Dead IDs render as `<dead>`.
    #[must_use]
    pub fn describe(&self, entity: Entity) -> String {
        let mut out = String::new();
        self.describe_into(entity, &mut out);
        out
    }

    fn describe_into(&self, entity: Entity, out: &mut String) {
        match entity {
            Entity::Vertex(id) => match self.vertices.get(id) {
                Some(v) => {
                    let p = v.point;
                    let _ = writeln!(out, "vertex ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
                }
                None => out.push_str("<dead vertex>\n"),
            },
            Entity::HalfEdge(id) => {
                let _ = writeln!(out, "{}", self.half_edge_line(id));
            }
            Entity::Edge(id) => match self.edges.get(id) {
                Some(e) => {
                    let (h1, h2) = e.half_edges;
                    let _ = writeln!(out, "edge:");
                    let _ = writeln!(out, "  h1: {}", self.half_edge_line(h1));
                    let _ = writeln!(out, "  h2: {}", self.half_edge_line(h2));
                }
                None => out.push_str("<dead edge>\n"),
            },
            Entity::Loop(id) => match self.loops.get(id) {
                Some(_) => {
                    let _ = writeln!(out, "loop:");
                    if let Ok(walk) = self.loop_half_edges(id) {
                        for h in walk {
                            let _ = writeln!(out, "  {}", self.half_edge_line(h));
                        }
                    }
                }
                None => out.push_str("<dead loop>\n"),
            },
            Entity::Face(id) => match self.faces.get(id) {
                Some(face) => {
                    let _ = writeln!(out, "face:");
                    out.push_str("outer ");
                    self.describe_into(Entity::Loop(face.outer_loop), out);
                    for (i, &inner) in face.inner_loops.iter().enumerate() {
                        let _ = write!(out, "inner {i} ");
                        self.describe_into(Entity::Loop(inner), out);
                    }
                }
                None => out.push_str("<dead face>\n"),
            },
            Entity::Solid(id) => match self.solids.get(id) {
                Some(solid) => {
                    for &face in &solid.faces {
                        self.describe_into(Entity::Face(face), out);
                    }
                }
                None => out.push_str("<dead solid>\n"),
            },
        }
    }

    fn half_edge_line(&self, id: HalfEdgeId) -> String {
        let Some(he) = self.half_edges.get(id) else {
            return "<dead half-edge>".to_string();
        };
        match (self.vertices.get(he.start), self.vertices.get(he.end)) {
            (Some(s), Some(e)) => {
                let (s, e) = (s.point, e.point);
                format!(
                    "({:5.2},{:5.2},{:5.2}) -> ({:5.2},{:5.2},{:5.2})",
                    s.x, s.y, s.z, e.x, e.y, e.z
                )
            }
            _ => "<half-edge with dead vertex>".to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::euler::{EndVertex, MakeEdgeVertex, MakeVertexFaceSolid};

    #[test]
    fn describe_renders_coordinates() {
        let mut store = TopologyStore::new();
        let (solid, face, v0) =
            MakeVertexFaceSolid::new(Point3::new(1.0, 2.0, 3.0)).execute(&mut store);
        let loop_id = store.face(face).unwrap().outer_loop();
        MakeEdgeVertex::new(loop_id, v0, EndVertex::New(Point3::new(4.0, 5.0, 6.0)))
            .execute(&mut store)
            .unwrap();

        let text = store.describe(Entity::Solid(solid));
        assert!(text.contains("( 1.00, 2.00, 3.00) -> ( 4.00, 5.00, 6.00)"));
        assert!(text.contains("( 4.00, 5.00, 6.00) -> ( 1.00, 2.00, 3.00)"));

        let vertex_text = store.describe(Entity::Vertex(v0));
        assert!(vertex_text.contains("vertex (1.00, 2.00, 3.00)"));
    }
}
