use thiserror::Error;

/// Top-level error type for the Eulis kernel.
#[derive(Debug, Error)]
pub enum EulisError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Script(#[from] ScriptError),
}

/// Errors raised by the Euler operators and topology queries.
///
/// Every operator validates its preconditions before writing anything, so a
/// returned error means the store is exactly as it was before the call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("vertex is not the end of any half-edge in the loop")]
    VertexNotInLoop,

    #[error("directed half-edge not found in loop")]
    HalfEdgeNotFound,

    #[error("loop has no half-edges")]
    EmptyLoop,

    #[error("faces belong to different solids; cross-solid merge is unsupported")]
    CrossSolidMergeUnsupported,

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors raised while interpreting a construction script.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("`{directive}` requires at least 3 points, got {count}")]
    TooFewPoints {
        directive: &'static str,
        count: usize,
    },

    #[error("unparsable number {token:?} in `{directive}` directive")]
    BadNumber {
        directive: &'static str,
        token: String,
    },

    #[error("unexpected end of input inside `{0}` directive")]
    UnexpectedEof(&'static str),

    #[error("`{0}` directive requires a current face")]
    NoCurrentFace(&'static str),
}

/// Convenience type alias for results using [`EulisError`].
pub type Result<T> = std::result::Result<T, EulisError>;
