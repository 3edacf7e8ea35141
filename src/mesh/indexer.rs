//! Exact-match vertex deduplication.
//!
//! Collapses the flat per-corner stream into a unique vertex buffer plus an
//! index buffer. Vertices merge only when all eight float components are
//! bit-identical; there is no welding tolerance.

use std::collections::hash_map::Entry;

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::vertex::{ExpandedVertex, GpuVertex};
use crate::error::MeshcamError;

/// Deduplicated vertices plus the index sequence that rebuilds the stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedMesh {
    /// Unique vertices in order of first occurrence.
    pub vertices: Vec<ExpandedVertex>,
    /// One entry per corner of the source stream.
    pub indices: Vec<u32>,
}

/// Build an [`IndexedMesh`] from a flat, face-major corner stream.
///
/// `indices[i]` is the slot of `stream[i]` in `vertices`; a triple seen for
/// the first time takes the next free slot.
///
/// # Errors
///
/// [`MeshcamError::IndexOverflow`] if the stream holds more than
/// `u32::MAX + 1` unique vertices.
pub fn build_indexed_mesh(
    stream: &[ExpandedVertex],
) -> Result<IndexedMesh, MeshcamError> {
    let mut slots: FxHashMap<[u32; 8], u32> = FxHashMap::default();
    let mut mesh = IndexedMesh {
        vertices: Vec::new(),
        indices: Vec::with_capacity(stream.len()),
    };

    for vertex in stream {
        let slot = match slots.entry(vertex.bit_key()) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => {
                let slot = u32::try_from(mesh.vertices.len())
                    .map_err(|_| MeshcamError::IndexOverflow)?;
                mesh.vertices.push(*vertex);
                *e.insert(slot)
            }
        };
        mesh.indices.push(slot);
    }

    log::debug!(
        "indexed {} corners into {} unique vertices",
        stream.len(),
        mesh.vertices.len()
    );
    Ok(mesh)
}

impl IndexedMesh {
    /// True when the mesh has no corners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Number of triangles described by the index buffer.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Replay the index buffer against the vertices, rebuilding the flat
    /// stream the mesh was built from.
    ///
    /// `None` if an index does not name a vertex, which only happens when
    /// the public fields were edited after indexing.
    #[must_use]
    pub fn replay(&self) -> Option<Vec<ExpandedVertex>> {
        self.indices
            .iter()
            .map(|&i| self.vertices.get(i as usize).copied())
            .collect()
    }

    /// Vertices in the interleaved upload layout. View the result as bytes
    /// with `bytemuck::cast_slice`.
    #[must_use]
    pub fn gpu_vertices(&self) -> Vec<GpuVertex> {
        self.vertices.iter().copied().map(GpuVertex::from).collect()
    }

    /// Raw bytes of the 32-bit index buffer.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// The index buffer narrowed to 16 bits, if every index fits.
    #[must_use]
    pub fn indices_u16(&self) -> Option<Vec<u16>> {
        if self.vertices.len() > usize::from(u16::MAX) + 1 {
            return None;
        }
        self.indices
            .iter()
            .map(|&i| u16::try_from(i).ok())
            .collect()
    }

    /// Axis-aligned bounds of the vertex positions as `(min, max)`.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (lo.min(v.position), hi.max(v.position))
        }))
    }
}
