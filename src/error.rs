use thiserror::Error;

/// Top-level error type for the lofter geometry core.
#[derive(Debug, Error)]
pub enum LofterError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Loft(#[from] LoftError),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
}

/// Errors raised while validating or planarizing an input path.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("path has {count} vertices, at least {min} are required")]
    TooFewVertices { count: usize, min: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Structural failures of the loft connectivity.
#[derive(Debug, Error)]
pub enum LoftError {
    #[error("no starting connection: the first row of the adjacency matrix is empty")]
    NoStartingConnection,

    #[error("broken connectivity path at row {row}, column {col}")]
    BrokenConnectivityPath { row: usize, col: usize },
}

/// Failures of the ear-clipping triangulator.
#[derive(Debug, Error)]
pub enum TriangulationError {
    #[error("no ear found after {emitted} of {required} triangles")]
    NoEarFound { emitted: usize, required: usize },
}

/// Convenience type alias for results using [`LofterError`].
pub type Result<T> = std::result::Result<T, LofterError>;
