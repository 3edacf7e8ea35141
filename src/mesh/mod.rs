//! Model import and vertex indexing.
//!
//! [`obj`] turns model text into a flat, fully duplicated stream of
//! per-corner attributes; [`indexer`] collapses that stream into a vertex
//! buffer and index buffer for the rendering boundary.

/// Exact-match deduplication into vertex and index buffers.
pub mod indexer;
/// Line-oriented model text reader.
pub mod obj;
/// Face, corner and vertex types.
pub mod vertex;

pub use indexer::{build_indexed_mesh, IndexedMesh};
pub use obj::{import_obj, load_obj, parse_obj, parse_obj_with, ObjModel};
pub use vertex::{ExpandedVertex, Face, FaceVertex, GpuVertex};
