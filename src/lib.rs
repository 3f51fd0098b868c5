//! Quadrant mesh splitting: load a Wavefront-style mesh, classify its
//! vertices into four quadrants around the bounding-box center, and write
//! each quadrant back out as an independent mesh. Space is partitioned into
//! multiples of 4 rather than 8, and only once (the planar little sibling of
//! an octree's first subdivision).
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

pub mod aabb;
pub mod error;
mod mesh;
mod quadrant;
pub mod real;
mod split;
mod wavefront;

pub use aabb::Aabb;
pub use error::Error;
pub use mesh::*;
pub use quadrant::*;
pub use real::Float;
pub use split::*;

/// Index type of vertices within a mesh.
///
/// Faces store these. The on-disk format is 1-based; in memory, indices are
/// always 0-based.
pub type VertexIndex = u32;
