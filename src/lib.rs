//! Planar outline tessellation
//!
//! Converts closed vector outlines (glyphs, SVG paths, polygons with holes)
//! into triangle meshes: a vertex buffer plus index triples ready for the GPU.
//!
//! ```ignore
//! use outline_tess::draw::parsing::Path;
//! use outline_tess::draw::tessellation::{tessellate_path, TessellationOptions};
//!
//! let mut path = Path::new();
//! path.rect(0.0, 0.0, 10.0, 10.0, Default::default());
//! let mesh = tessellate_path(path.commands(), &TessellationOptions::default())?;
//! assert_eq!(mesh.triangle_count(), 2);
//! ```

pub mod draw;
pub mod error;

pub use draw::generation::{merge_meshes, tessellate_batch, BatchGeometry, ShapeFailure, ShapeRange};
pub use draw::geometry::{Mesh, MeshGeometry, Point, Polygon};
pub use draw::parsing::{Path, PathCommand, Winding};
pub use draw::tessellation::{tessellate_loops, tessellate_path, tessellate_polygon, TessellationOptions};
pub use error::TessellationError;
