//! Line-oriented reader for triangulated Wavefront-style model text.
//!
//! Only `v`, `vt`, `vn` and `f` records are interpreted; every other tag
//! (objects, groups, materials, smoothing groups, ...) is skipped so files
//! exported with extension records still load.

use std::path::Path;
use std::str::SplitWhitespace;

use glam::{Vec2, Vec3};

use super::indexer::{build_indexed_mesh, IndexedMesh};
use super::vertex::{ExpandedVertex, Face, FaceVertex};
use crate::error::{Attribute, MeshcamError, ParseError, ParseErrorKind};
use crate::options::{ImportOptions, TexCoordV};

/// Attribute tables and faces of a parsed model, before resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjModel {
    /// `v` records in file order.
    pub positions: Vec<Vec3>,
    /// `vt` records in file order, V already inverted.
    pub texcoords: Vec<Vec2>,
    /// `vn` records in file order.
    pub normals: Vec<Vec3>,
    /// `f` records in file order.
    pub faces: Vec<Face>,
}

impl ObjModel {
    /// Resolve every face corner against the attribute tables.
    ///
    /// Produces the face-major flat stream (corners 0, 1, 2 of each face in
    /// turn), `3 * faces.len()` entries long.
    pub fn expand(&self) -> Result<Vec<ExpandedVertex>, ParseError> {
        let mut stream = Vec::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            for corner in &face.corners {
                stream.push(self.resolve(corner, face.line)?);
            }
        }
        Ok(stream)
    }

    fn resolve(
        &self,
        corner: &FaceVertex,
        line: usize,
    ) -> Result<ExpandedVertex, ParseError> {
        let position =
            lookup(&self.positions, corner.position, Attribute::Position, line)?;
        let texcoord =
            lookup(&self.texcoords, corner.texcoord, Attribute::TexCoord, line)?;
        let normal = lookup(&self.normals, corner.normal, Attribute::Normal, line)?;
        Ok(ExpandedVertex::new(position, texcoord, normal))
    }
}

fn lookup<T: Copy>(
    table: &[T],
    index: usize,
    attribute: Attribute,
    line: usize,
) -> Result<T, ParseError> {
    table.get(index).copied().ok_or_else(|| {
        ParseError::new(
            line,
            ParseErrorKind::IndexOutOfRange {
                attribute,
                index: index + 1,
                len: table.len(),
            },
        )
    })
}

/// Parse model text with default [`ImportOptions`].
pub fn parse_obj(text: &str) -> Result<ObjModel, ParseError> {
    parse_obj_with(text, &ImportOptions::default())
}

/// Parse model text into attribute tables and faces.
///
/// Indices are converted from the file's 1-based numbering to 0-based (an
/// index of `0` is a malformed corner) but are not checked against the
/// tables until [`ObjModel::expand`].
pub fn parse_obj_with(
    text: &str,
    options: &ImportOptions,
) -> Result<ObjModel, ParseError> {
    let mut model = ObjModel::default();

    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        let content = raw.split_once('#').map_or(raw, |(data, _)| data);
        let mut tokens = content.split_whitespace();
        let Some(tag) = tokens.next() else {
            continue;
        };

        match tag {
            "v" => {
                let [x, y, z] = floats::<3>(tag, tokens, line)?;
                model.positions.push(Vec3::new(x, y, z));
            }
            "vt" => {
                let [u, v] = floats::<2>(tag, tokens, line)?;
                model.texcoords.push(Vec2::new(u, flip_v(v, options.texcoord_v)));
            }
            "vn" => {
                let [x, y, z] = floats::<3>(tag, tokens, line)?;
                model.normals.push(Vec3::new(x, y, z));
            }
            "f" => model.faces.push(face(tokens, line)?),
            _ => {}
        }
    }

    log::debug!(
        "parsed model: {} positions, {} texcoords, {} normals, {} faces",
        model.positions.len(),
        model.texcoords.len(),
        model.normals.len(),
        model.faces.len()
    );
    Ok(model)
}

/// Parse and resolve model text into the flat per-corner stream.
pub fn import_obj(
    text: &str,
    options: &ImportOptions,
) -> Result<Vec<ExpandedVertex>, ParseError> {
    parse_obj_with(text, options)?.expand()
}

/// Read a model file, resolve it, and build its indexed mesh.
pub fn load_obj(
    path: &Path,
    options: &ImportOptions,
) -> Result<IndexedMesh, MeshcamError> {
    let text = std::fs::read_to_string(path)?;
    let stream = import_obj(&text, options)?;
    let mesh = build_indexed_mesh(&stream)?;
    log::info!(
        "loaded {}: {} triangles, {} corners -> {} unique vertices",
        path.display(),
        mesh.triangle_count(),
        stream.len(),
        mesh.vertices.len()
    );
    Ok(mesh)
}

fn flip_v(v: f32, mode: TexCoordV) -> f32 {
    match mode {
        TexCoordV::Negate => -v,
        TexCoordV::OneMinus => 1.0 - v,
        TexCoordV::Keep => v,
    }
}

/// Read the first `N` components of a numeric record; extras are ignored.
fn floats<const N: usize>(
    tag: &str,
    mut tokens: SplitWhitespace<'_>,
    line: usize,
) -> Result<[f32; N], ParseError> {
    let mut out = [0.0; N];
    for slot in &mut out {
        *slot = tokens
            .next()
            .and_then(|t| t.parse::<f32>().ok())
            .ok_or_else(|| {
                ParseError::new(
                    line,
                    ParseErrorKind::MalformedRecord {
                        tag: tag.to_owned(),
                        expected: N,
                    },
                )
            })?;
    }
    Ok(out)
}

fn face(
    tokens: SplitWhitespace<'_>,
    line: usize,
) -> Result<Face, ParseError> {
    let corners: Vec<&str> = tokens.collect();
    let [a, b, c] = corners.as_slice() else {
        return Err(ParseError::new(
            line,
            ParseErrorKind::FaceArity {
                corners: corners.len(),
            },
        ));
    };
    Ok(Face {
        corners: [corner(a, line)?, corner(b, line)?, corner(c, line)?],
        line,
    })
}

fn corner(text: &str, line: usize) -> Result<FaceVertex, ParseError> {
    let malformed = || {
        ParseError::new(
            line,
            ParseErrorKind::MalformedCorner {
                corner: text.to_owned(),
            },
        )
    };

    // 1-based in the file; 0 names nothing.
    let mut parts = text.split('/');
    let mut next = || -> Result<usize, ParseError> {
        parts
            .next()
            .and_then(|p| p.parse::<usize>().ok())
            .and_then(|i| i.checked_sub(1))
            .ok_or_else(malformed)
    };
    let (position, texcoord, normal) = (next()?, next()?, next()?);
    if parts.next().is_some() {
        return Err(malformed());
    }

    Ok(FaceVertex {
        position,
        texcoord,
        normal,
    })
}
