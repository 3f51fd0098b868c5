use nalgebra::Point3;

use crate::real::Float;
use crate::VertexIndex;

/// A position in 3D space. Vertices have no identity beyond their index in
/// a mesh's vertex sequence; coincident vertices are not deduplicated.
pub type Vertex<Real> = Point3<Real>;

/// An ordered sequence of vertex indices forming one polygon of a [Mesh].
///
/// Arity is arbitrary (typically 3 or 4); no planarity or convexity checks
/// are performed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Face(pub Vec<VertexIndex>);

impl Face {
    #[inline]
    pub fn new(indices: Vec<VertexIndex>) -> Self {
        Self(indices)
    }

    /// The vertex indices of this face, in winding order.
    #[inline]
    pub fn indices(&self) -> &[VertexIndex] {
        &self.0
    }
}

impl FromIterator<VertexIndex> for Face {
    fn from_iter<I: IntoIterator<Item = VertexIndex>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A vertex sequence paired with a face sequence, describing a polygonal
/// surface.
///
/// Invariant: every index stored in a face is a valid position in the
/// vertex sequence. The loader establishes this eagerly at parse time; the
/// splitter re-establishes it per partition by remapping.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh<Real: Float> {
    pub vertices: Vec<Vertex<Real>>,
    pub faces: Vec<Face>,
}

impl<Real: Float> Mesh<Real> {
    pub fn new(vertices: Vec<Vertex<Real>>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Whether this mesh has neither vertices nor faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.faces.is_empty()
    }
}
