use thiserror::Error;

/// Errors raised while assembling a mesh from vertices and faces.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("face {face} references vertex {index}, but the mesh has {count} vertices")]
    VertexOutOfRange {
        face: usize,
        index: usize,
        count: usize,
    },
    #[error("face {face} repeats vertex {index}")]
    DuplicateVertex { face: usize, index: usize },
}
