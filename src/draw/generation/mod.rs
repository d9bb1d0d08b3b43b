//! Batch geometry generation
//!
//! Tessellates many independent shapes in parallel and merges them into a
//! single flat GPU buffer.
//!
//! # Submodules
//! - `batch` - parallel tessellation, buffer merging and per-shape ranges

mod batch;

pub use batch::{
    tessellate_batch,
    merge_meshes,
    generate_batch_geometry,
    BatchGeometry,
    ShapeRange,
    ShapeFailure,
};
