//! Geometry module for outline tessellation
//!
//! # Submodules
//! - `types` - Point / vector primitive and polygon-with-holes
//! - `predicates` - orientation, signed area and containment tests
//! - `mesh` - triangle mesh output and flat GPU buffers
//! - `binary` - binary container for mesh geometry

mod types;
mod predicates;
mod mesh;
mod binary;

pub use types::{Point, Polygon, bounds_of};

pub use predicates::{
    orient2d,
    signed_area,
    signed_area2,
    barycentric,
    point_in_triangle,
    point_in_triangle_inclusive,
    locally_inside,
};

pub use mesh::{
    Mesh,
    MeshGeometry,
    PackedMeshGeometry,
    serialize_f32_slice_base64,
    serialize_u32_slice_base64,
    decode_f32_base64,
};

pub use binary::{
    MESH_MAGIC,
    write_mesh_binary,
    mesh_to_bytes,
    read_mesh_binary,
};
