//! Outline drawing pipeline: parse, tessellate, batch
//!
//! # Submodules
//! - `geometry` - points, predicates, meshes and their encodings
//! - `parsing` - path commands, SVG path data and documents
//! - `tessellation` - curves to contours to triangles
//! - `generation` - parallel batch tessellation into merged GPU buffers

pub mod geometry;
pub mod parsing;
pub mod tessellation;
pub mod generation;
