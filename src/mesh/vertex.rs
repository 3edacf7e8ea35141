use glam::{Vec2, Vec3};

/// One triangle corner: 0-based indices into the position, texcoord and
/// normal tables of an [`ObjModel`](super::ObjModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceVertex {
    /// Index into `positions`.
    pub position: usize,
    /// Index into `texcoords`.
    pub texcoord: usize,
    /// Index into `normals`.
    pub normal: usize,
}

/// A triangular face and the source line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Corners in winding order.
    pub corners: [FaceVertex; 3],
    /// 1-based line number of the `f` record.
    pub line: usize,
}

/// Fully resolved attributes of a single triangle corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpandedVertex {
    /// Object-space position.
    pub position: Vec3,
    /// Texture coordinate, V already inverted for image lookups.
    pub texcoord: Vec2,
    /// Vertex normal as written in the model (not renormalized).
    pub normal: Vec3,
}

impl ExpandedVertex {
    /// Build a vertex from its three attributes.
    #[must_use]
    pub const fn new(position: Vec3, texcoord: Vec2, normal: Vec3) -> Self {
        Self {
            position,
            texcoord,
            normal,
        }
    }

    /// Exact bit pattern of all eight components.
    ///
    /// Two vertices share a key iff every component is bit-identical, so
    /// `0.0` and `-0.0` differ while identical NaNs agree.
    #[must_use]
    pub fn bit_key(&self) -> [u32; 8] {
        let [px, py, pz] = self.position.to_array().map(f32::to_bits);
        let [u, v] = self.texcoord.to_array().map(f32::to_bits);
        let [nx, ny, nz] = self.normal.to_array().map(f32::to_bits);
        [px, py, pz, u, v, nx, ny, nz]
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Interleaved vertex layout for GPU upload (32 bytes, no padding).
pub struct GpuVertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Texture coordinate.
    pub uv: [f32; 2],
    /// Vertex normal.
    pub normal: [f32; 3],
}

impl From<ExpandedVertex> for GpuVertex {
    fn from(v: ExpandedVertex) -> Self {
        Self {
            position: v.position.to_array(),
            uv: v.texcoord.to_array(),
            normal: v.normal.to_array(),
        }
    }
}
