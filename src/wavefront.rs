//! Reading and writing the line-oriented Wavefront-style mesh format.
//!
//! Only the `v` and `f` line types carry meaning here; every other first
//! token is skipped, so files with normals, texture coordinates, comments,
//! groups, etc. still load (those lines are simply dropped). Face reference
//! tokens may carry slash-delimited auxiliary fields (`7/6/3`); only the
//! part before the first slash is significant.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::real::Float;
use crate::{Error, Face, Mesh, VertexIndex};

impl<Real: Float> Mesh<Real> {
    /// Load a mesh from a file on disk.
    ///
    /// # Errors
    /// * [Error::Io] if the file can't be read.
    /// * Any parse error of [parse_obj](Mesh::parse_obj).
    pub fn from_obj_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(Error::io(path))?;
        let mesh = Self::parse_obj(&text)?;
        tracing::debug!(
            path = %path.display(),
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "loaded mesh"
        );
        Ok(mesh)
    }

    /// Parse a mesh from text.
    ///
    /// Vertices and faces are kept in file order. Face references are
    /// converted from the on-disk 1-based numbering to 0-based indices, and
    /// every reference is checked against the final vertex count once the
    /// whole text has been consumed, so a face may legally reference a
    /// vertex defined further down the file, but a reference to a vertex
    /// that never appears fails the whole load.
    pub fn parse_obj(text: &str) -> Result<Self, Error> {
        let mut vertices = Vec::new();
        // parsed faces, still 1-based, tagged with their source line for the
        // bounds check below
        let mut raw_faces: Vec<(usize, Vec<i64>)> = Vec::new();

        for (n, line) in text.lines().enumerate() {
            let line_no = n + 1;
            let mut tokens = line.split_whitespace();
            match tokens.next() {
                None => continue, // blank or whitespace-only
                Some("v") => {
                    let mut coord = |axis: usize| -> Result<Real, Error> {
                        let token = tokens.next().ok_or(Error::VertexArity {
                            line: line_no,
                            found: axis,
                        })?;
                        token.parse().map_err(|_| Error::Coordinate {
                            line: line_no,
                            token: token.to_owned(),
                        })
                    };
                    let (x, y, z) = (coord(0)?, coord(1)?, coord(2)?);
                    vertices.push(nalgebra::point![x, y, z]);
                }
                Some("f") => {
                    let refs = tokens
                        .map(|token| {
                            // only the part before the first slash counts;
                            // `7/6/3` refers to vertex 7
                            let index = token.split('/').next().unwrap_or(token);
                            index.parse::<i64>().map_err(|_| Error::VertexReference {
                                line: line_no,
                                token: token.to_owned(),
                            })
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    raw_faces.push((line_no, refs));
                }
                Some(_) => tracing::trace!(line = line_no, "skipped unrecognized line"),
            }
        }

        let faces = raw_faces
            .into_iter()
            .map(|(line, refs)| {
                refs.into_iter()
                    .map(|index| {
                        if index < 1 || index > vertices.len() as i64 {
                            return Err(Error::ReferenceOutOfRange {
                                line,
                                index,
                                vertex_count: vertices.len(),
                            });
                        }
                        Ok((index - 1) as VertexIndex)
                    })
                    .collect::<Result<Face, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(vertices, faces))
    }

    /// Serialize `self` into a writer, one `v` line per vertex followed by
    /// one `f` line per face, indices converted back to 1-based.
    ///
    /// Coordinates are written with the scalar's `Display` formatting, which
    /// round-trips through the loader exactly.
    pub fn write_obj<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        for v in &self.vertices {
            writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for face in &self.faces {
            w.write_all(b"f")?;
            for index in face.indices() {
                write!(w, " {}", index + 1)?;
            }
            w.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Write `self` to a file on disk, replacing any existing file.
    ///
    /// # Errors
    /// * [Error::Io] if the file can't be created (in particular, if its
    ///   parent directory doesn't exist) or written.
    pub fn to_obj_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let mut w = BufWriter::new(File::create(path).map_err(Error::io(path))?);
        self.write_obj(&mut w).map_err(Error::io(path))?;
        w.flush().map_err(Error::io(path))
    }
}
