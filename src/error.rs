use std::path::PathBuf;

use crate::VertexIndex;

/// Errors related to loading, splitting, and writing meshes.
///
/// Parse variants carry the 1-based line number of the offending input line;
/// I/O failures carry the path they were about. Nothing here is retried:
/// every failure propagates to the caller with enough context to diagnose
/// without re-running.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: vertex expects 3 coordinates, found {found}")]
    VertexArity { line: usize, found: usize },
    #[error("line {line}: malformed vertex coordinate {token:?}")]
    Coordinate { line: usize, token: String },
    #[error("line {line}: malformed vertex reference {token:?}")]
    VertexReference { line: usize, token: String },
    #[error("line {line}: vertex reference {index} outside 1..={vertex_count}")]
    ReferenceOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceOutOfRange {
        face: usize,
        index: VertexIndex,
        vertex_count: usize,
    },
    #[error("mesh has no vertices, so its bounding-box center is undefined")]
    EmptyMesh,
}

impl Error {
    /// Attach a path to a raw I/O error.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
