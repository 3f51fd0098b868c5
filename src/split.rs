//! Partitioning a mesh into four quadrant sub-meshes.

use std::path::{Path, PathBuf};

use nalgebra::Point3;

use crate::real::Float;
use crate::{Aabb, Error, Face, Mesh, Quadrant, VertexIndex};

/// The default base name of exported quadrant files.
pub const DEFAULT_PREFIX: &str = "file";

/// Report of one successfully written quadrant file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantFile {
    pub quadrant: Quadrant,
    pub path: PathBuf,
    pub vertex_count: usize,
    pub face_count: usize,
}

/// Splits a loaded [Mesh] into four quadrant sub-meshes around a center
/// point, usually the mesh's bounding-box center.
///
/// The split is topology-agnostic: each vertex is classified once by
/// position, and a face survives into a quadrant only if *every* vertex it
/// references landed there. Faces crossing a quadrant seam are dropped
/// whole, never clipped or re-triangulated; this trades completeness at the
/// seams for an O(V+F) scan per quadrant.
#[derive(Debug, Clone)]
pub struct Splitter<Real: Float> {
    mesh: Mesh<Real>,
    center: Point3<Real>,
}

impl<Real: Float> Splitter<Real> {
    /// Finalize a loaded mesh for splitting, computing its bounding-box
    /// center.
    ///
    /// # Errors
    /// * [Error::EmptyMesh] if the mesh has no vertices (the center would be
    ///   undefined).
    /// * [Error::FaceOutOfRange] if a face references a vertex the mesh
    ///   doesn't have.
    pub fn new(mesh: Mesh<Real>) -> Result<Self, Error> {
        let center = Aabb::from_points(&mesh.vertices)
            .ok_or(Error::EmptyMesh)?
            .center();
        Self::with_center(mesh, center)
    }

    /// Finalize a loaded mesh for splitting around an explicit center.
    pub fn with_center(mesh: Mesh<Real>, center: Point3<Real>) -> Result<Self, Error> {
        for (fi, face) in mesh.faces.iter().enumerate() {
            for &index in face.indices() {
                if index as usize >= mesh.vertices.len() {
                    return Err(Error::FaceOutOfRange {
                        face: fi,
                        index,
                        vertex_count: mesh.vertices.len(),
                    });
                }
            }
        }
        Ok(Self { mesh, center })
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh<Real> {
        &self.mesh
    }

    /// The center the split classifies against.
    #[inline]
    pub fn center(&self) -> &Point3<Real> {
        &self.center
    }

    /// Build the sub-mesh of one quadrant.
    ///
    /// Vertices keep their relative order and are re-indexed from 0; face
    /// indices are rewritten to the new local numbering, in their original
    /// per-face order.
    pub fn quadrant(&self, q: Quadrant) -> Mesh<Real> {
        let mut vertices = Vec::new();
        // original index -> local index; dense, None = not in `q`
        let mut remap: Vec<Option<VertexIndex>> = vec![None; self.mesh.vertices.len()];
        for (i, v) in self.mesh.vertices.iter().enumerate() {
            if Quadrant::from_center(&self.center, v) == q {
                remap[i] = Some(vertices.len() as VertexIndex);
                vertices.push(*v);
            }
        }

        // containment filter: a face survives iff every index remaps
        let faces = self
            .mesh
            .faces
            .iter()
            .filter_map(|face| {
                face.indices()
                    .iter()
                    .map(|&i| remap[i as usize])
                    .collect::<Option<Face>>()
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            quadrant = q.label(),
            vertices = vertices.len(),
            faces = faces.len(),
            "built quadrant sub-mesh"
        );
        Mesh::new(vertices, faces)
    }

    /// Build all four quadrant sub-meshes, in label order.
    ///
    /// Every source vertex appears in exactly one of the results; nothing is
    /// shared between them.
    pub fn split(&self) -> [Mesh<Real>; 4] {
        std::array::from_fn(|i| self.quadrant(Quadrant(i as u8)))
    }

    /// Write the four quadrants as `{prefix}{n}.{extension}` (n = 1..=4)
    /// into `dir`, which must already exist.
    ///
    /// All four quadrants are always attempted, and each outcome is reported
    /// independently, in label order; one unwritable partition doesn't hide
    /// the other three.
    pub fn export(
        &self,
        dir: &Path,
        prefix: &str,
        extension: &str,
    ) -> [Result<QuadrantFile, Error>; 4] {
        std::array::from_fn(|i| {
            let q = Quadrant(i as u8);
            let sub = self.quadrant(q);
            let path = dir.join(format!("{prefix}{}.{extension}", q.label()));
            sub.to_obj_file(&path)?;
            Ok(QuadrantFile {
                quadrant: q,
                path,
                vertex_count: sub.vertex_count(),
                face_count: sub.face_count(),
            })
        })
    }
}
