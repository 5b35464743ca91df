//! Interpreter for the plain-text construction language.
//!
//! A script is a whitespace-separated token stream of three directives:
//!
//! ```text
//! face N x0 y0 z0 ... x(N-1) y(N-1) z(N-1)
//! ring N x0 y0 z0 ... x(N-1) y(N-1) z(N-1)
//! sweep dx dy dz
//! ```
//!
//! `face` starts a new solid from an N-gon and makes it the current
//! face. `ring` cuts an N-gon hole into the current face. `sweep`
//! extrudes the current face. Any other token ends interpretation
//! cleanly, so trailing commentary after the build steps is harmless.

use std::str::SplitWhitespace;

use tracing::debug;

use crate::error::{ScriptError, TopologyError};
use crate::math::{Point3, Vector3};
use crate::operations::euler::{
    EndVertex, KillEdgeMakeRing, MakeEdgeFace, MakeEdgeVertex, MakeVertexFaceSolid,
};
use crate::operations::shaping::Sweep;
use crate::topology::{FaceId, SolidId, TopologyStore};

/// Runs a construction script against a store, returning the solids it
/// created in order.
pub struct RunScript<'a> {
    source: &'a str,
}

impl<'a> RunScript<'a> {
    /// Creates a new `RunScript` over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Executes the script.
    ///
    /// Each directive is fully parsed and validated before the kernel is
    /// touched, so a malformed directive leaves no half-built solid
    /// behind.
    ///
    /// # Errors
    ///
    /// Returns [`ScriptError`] for malformed directives and
    /// [`TopologyError`](crate::error::TopologyError) if a well-formed
    /// directive names topology the kernel rejects.
    pub fn execute(&self, store: &mut TopologyStore) -> crate::Result<Vec<SolidId>> {
        let mut tokens = self.source.split_whitespace();
        let mut solids = Vec::new();
        let mut current: Option<(SolidId, FaceId)> = None;

        while let Some(word) = tokens.next() {
            match word {
                "face" => {
                    let points = parse_polygon("face", &mut tokens)?;
                    let (solid, face) = build_face(store, &points)?;
                    debug!(?solid, ?face, points = points.len(), "face directive");
                    solids.push(solid);
                    current = Some((solid, face));
                }
                "ring" => {
                    let points = parse_polygon("ring", &mut tokens)?;
                    let (solid, face) = current.ok_or(ScriptError::NoCurrentFace("ring"))?;
                    cut_ring(store, solid, face, &points)?;
                    debug!(?face, points = points.len(), "ring directive");
                }
                "sweep" => {
                    let direction = parse_vector("sweep", &mut tokens)?;
                    let (_, face) = current.ok_or(ScriptError::NoCurrentFace("sweep"))?;
                    Sweep::new(face, direction).execute(store)?;
                    debug!(?face, ?direction, "sweep directive");
                }
                other => {
                    debug!(token = other, "stopping at unknown token");
                    break;
                }
            }
        }
        Ok(solids)
    }
}

/// Builds an N-gon as a fresh solid: seed the first vertex, chain the
/// rest, then close the boundary with a chord. The returned face is the
/// one tracing the points in input order.
fn build_face(
    store: &mut TopologyStore,
    points: &[Point3],
) -> Result<(SolidId, FaceId), TopologyError> {
    let (solid, seed_face, v0) = MakeVertexFaceSolid::new(points[0]).execute(store);
    let loop_id = store.face(seed_face)?.outer_loop();
    let mut verts = vec![v0];
    for &point in &points[1..] {
        let prev = verts[verts.len() - 1];
        verts.push(MakeEdgeVertex::new(loop_id, prev, EndVertex::New(point)).execute(store)?);
    }
    let n = verts.len();
    let face =
        MakeEdgeFace::new(loop_id, verts[n - 2], verts[n - 1], verts[1], verts[0]).execute(store)?;
    Ok((solid, face))
}

/// Cuts an N-gon hole into `face`: grow the ring chain from the solid's
/// first vertex, close the ring into a disc face, then detach the
/// bridge so the ring becomes an inner loop.
fn cut_ring(
    store: &mut TopologyStore,
    solid: SolidId,
    face: FaceId,
    points: &[Point3],
) -> Result<(), TopologyError> {
    let loop_id = store.face(face)?.outer_loop();
    let anchor = store
        .solid(solid)?
        .vertices()
        .first()
        .copied()
        .ok_or(TopologyError::EntityNotFound("vertex"))?;

    let mut ring =
        vec![MakeEdgeVertex::new(loop_id, anchor, EndVertex::New(points[0])).execute(store)?];
    for &point in &points[1..] {
        let prev = ring[ring.len() - 1];
        ring.push(MakeEdgeVertex::new(loop_id, prev, EndVertex::New(point)).execute(store)?);
    }
    let n = ring.len();
    MakeEdgeFace::new(loop_id, ring[1], ring[0], ring[n - 2], ring[n - 1]).execute(store)?;
    KillEdgeMakeRing::new(loop_id, ring[0], anchor).execute(store)?;
    Ok(())
}

fn parse_polygon(
    directive: &'static str,
    tokens: &mut SplitWhitespace<'_>,
) -> Result<Vec<Point3>, ScriptError> {
    let token = tokens.next().ok_or(ScriptError::UnexpectedEof(directive))?;
    let count: usize = token.parse().map_err(|_| ScriptError::BadNumber {
        directive,
        token: token.to_string(),
    })?;
    if count < 3 {
        return Err(ScriptError::TooFewPoints { directive, count });
    }
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let x = parse_coordinate(directive, tokens)?;
        let y = parse_coordinate(directive, tokens)?;
        let z = parse_coordinate(directive, tokens)?;
        points.push(Point3::new(x, y, z));
    }
    Ok(points)
}

fn parse_vector(
    directive: &'static str,
    tokens: &mut SplitWhitespace<'_>,
) -> Result<Vector3, ScriptError> {
    let x = parse_coordinate(directive, tokens)?;
    let y = parse_coordinate(directive, tokens)?;
    let z = parse_coordinate(directive, tokens)?;
    Ok(Vector3::new(x, y, z))
}

fn parse_coordinate(
    directive: &'static str,
    tokens: &mut SplitWhitespace<'_>,
) -> Result<f64, ScriptError> {
    let token = tokens.next().ok_or(ScriptError::UnexpectedEof(directive))?;
    token.parse().map_err(|_| ScriptError::BadNumber {
        directive,
        token: token.to_string(),
    })
}
