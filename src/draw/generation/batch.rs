//! Parallel batch tessellation
//!
//! Each shape owns its own vertex arena, so shapes are tessellated with no
//! shared state and results are merged sequentially afterwards.

use crate::draw::geometry::{Mesh, MeshGeometry};
use crate::draw::parsing::PathCommand;
use crate::draw::tessellation::{tessellate_path, TessellationOptions};
use crate::error::TessellationError;
use indexmap::IndexMap;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Where one shape's data lives inside the merged buffers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRange {
    pub id: String,
    pub vertex_start: u32,
    pub vertex_count: u32,
    pub index_start: u32,
    pub index_count: u32,
    /// min_x, min_y, max_x, max_y of the shape's triangles
    pub bounds: [f32; 4],
}

/// A shape that could not be tessellated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeFailure {
    pub id: String,
    pub error: String,
}

/// Merged output of a batch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchGeometry {
    pub geometry: MeshGeometry,
    pub ranges: Vec<ShapeRange>,
    #[serde(default)]
    pub failures: Vec<ShapeFailure>,
}

impl BatchGeometry {
    pub fn shape_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.geometry.index_count / 3
    }
}

/// Tessellate every shape in parallel, preserving input order
pub fn tessellate_batch(
    shapes: &IndexMap<String, Vec<PathCommand>>,
    options: &TessellationOptions,
) -> IndexMap<String, Result<Mesh, TessellationError>> {
    let results: Vec<(String, Result<Mesh, TessellationError>)> = shapes
        .par_iter()
        .map(|(id, commands)| (id.clone(), tessellate_path(commands, options)))
        .collect();
    results.into_iter().collect()
}

/// Merge per-shape meshes into one buffer, offsetting indices by the running
/// vertex count. Failed shapes are listed in `failures` and contribute no data.
pub fn merge_meshes(results: IndexMap<String, Result<Mesh, TessellationError>>) -> BatchGeometry {
    let mut all_verts: Vec<f32> = Vec::new();
    let mut all_indices: Vec<u32> = Vec::new();
    let mut ranges = Vec::new();
    let mut failures = Vec::new();

    for (id, result) in results {
        let mesh = match result {
            Ok(mesh) => mesh,
            Err(err) => {
                tracing::warn!(shape = %id, error = %err, "shape failed to tessellate");
                failures.push(ShapeFailure { id, error: err.to_string() });
                continue;
            }
        };

        let (verts, indices) = mesh.to_buffers();
        let vert_offset = (all_verts.len() / 2) as u32;
        let index_start = all_indices.len() as u32;
        let bounds = mesh
            .bounds()
            .map(|[a, b, c, d]| [a as f32, b as f32, c as f32, d as f32])
            .unwrap_or_default();

        ranges.push(ShapeRange {
            id,
            vertex_start: vert_offset,
            vertex_count: (verts.len() / 2) as u32,
            index_start,
            index_count: indices.len() as u32,
            bounds,
        });

        all_verts.extend(verts);
        all_indices.extend(indices.iter().map(|&idx| idx + vert_offset));
    }

    tracing::debug!(
        shapes = ranges.len(),
        failed = failures.len(),
        vertices = all_verts.len() / 2,
        triangles = all_indices.len() / 3,
        "merged batch geometry"
    );

    BatchGeometry {
        geometry: MeshGeometry::from_buffers(all_verts, all_indices),
        ranges,
        failures,
    }
}

/// Tessellate and merge in one step
pub fn generate_batch_geometry(
    shapes: &IndexMap<String, Vec<PathCommand>>,
    options: &TessellationOptions,
) -> Result<BatchGeometry, TessellationError> {
    options.validate()?;
    Ok(merge_meshes(tessellate_batch(shapes, options)))
}
