//! Triangle mesh output and its GPU-facing encodings
//!
//! A [`Mesh`] is the only artifact the tessellation pipeline hands outward:
//! the (grown) vertex arena of one shape plus a list of index triples.

use super::predicates::orient2d;
use super::types::{bounds_of, Point};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize, Serializer};

/// Triangulated shape: vertex buffer plus index triples into it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point>,
    pub triangles: Vec<[usize; 3]>,
}

impl Mesh {
    pub fn new(vertices: Vec<Point>, triangles: Vec<[usize; 3]>) -> Self {
        Mesh { vertices, triangles }
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Corner points of triangle `i`
    pub fn triangle_points(&self, i: usize) -> [Point; 3] {
        let [a, b, c] = self.triangles[i];
        [self.vertices[a], self.vertices[b], self.vertices[c]]
    }

    /// Unsigned area of triangle `i`
    pub fn triangle_area(&self, i: usize) -> f64 {
        let [a, b, c] = self.triangle_points(i);
        orient2d(a, b, c).abs() * 0.5
    }

    /// Total covered area (sum of unsigned triangle areas)
    pub fn area(&self) -> f64 {
        (0..self.triangles.len()).map(|i| self.triangle_area(i)).sum()
    }

    /// Bounds of the vertices actually referenced by triangles
    pub fn bounds(&self) -> Option<[f64; 4]> {
        let used: Vec<Point> = self
            .triangles
            .iter()
            .flat_map(|t| t.iter().map(|&i| self.vertices[i]))
            .collect();
        bounds_of(&used)
    }

    /// Flat GPU buffers: `[x, y, x, y, ...]` as f32 and indices as u32
    pub fn to_buffers(&self) -> (Vec<f32>, Vec<u32>) {
        let mut vertex_data = Vec::with_capacity(self.vertices.len() * 2);
        for p in &self.vertices {
            vertex_data.push(p.x as f32);
            vertex_data.push(p.y as f32);
        }
        let index_data: Vec<u32> = self
            .triangles
            .iter()
            .flat_map(|t| t.iter().map(|&i| i as u32))
            .collect();
        (vertex_data, index_data)
    }

    pub fn to_geometry(&self) -> MeshGeometry {
        let (vertex_data, index_data) = self.to_buffers();
        MeshGeometry::from_buffers(vertex_data, index_data)
    }
}

/// Serializable flat geometry for JSON / MessagePack output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshGeometry {
    /// Float32 vertex data (x, y, x, y, ...)
    #[serde(rename = "vertexData")]
    pub vertex_data: Vec<f32>,

    /// Number of vertices (not floats)
    #[serde(rename = "vertexCount")]
    pub vertex_count: usize,

    /// Uint32 triangle indices, three per triangle
    #[serde(rename = "indexData")]
    pub index_data: Vec<u32>,

    #[serde(rename = "indexCount")]
    pub index_count: usize,
}

impl MeshGeometry {
    pub fn from_buffers(vertex_data: Vec<f32>, index_data: Vec<u32>) -> Self {
        MeshGeometry {
            vertex_count: vertex_data.len() / 2,
            index_count: index_data.len(),
            vertex_data,
            index_data,
        }
    }

    /// Same buffers, serialized as base64 strings for compact JSON transmission
    pub fn packed(&self) -> PackedMeshGeometry<'_> {
        PackedMeshGeometry {
            vertex_data: &self.vertex_data,
            vertex_count: self.vertex_count,
            index_data: &self.index_data,
            index_count: self.index_count,
        }
    }
}

/// Borrowed view of [`MeshGeometry`] with base64-encoded buffers
#[derive(Serialize)]
pub struct PackedMeshGeometry<'a> {
    #[serde(rename = "vertexData", serialize_with = "serialize_f32_slice_base64")]
    pub vertex_data: &'a [f32],

    #[serde(rename = "vertexCount")]
    pub vertex_count: usize,

    #[serde(rename = "indexData", serialize_with = "serialize_u32_slice_base64")]
    pub index_data: &'a [u32],

    #[serde(rename = "indexCount")]
    pub index_count: usize,
}

/// Serialize f32 data as base64 of its little-endian bytes
pub fn serialize_f32_slice_base64<S>(data: &&[f32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
    serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
}

/// Serialize u32 data as base64 of its little-endian bytes
pub fn serialize_u32_slice_base64<S>(data: &&[u32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
    serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
}

/// Decode a base64 string produced by [`serialize_f32_slice_base64`]
pub fn decode_f32_base64(encoded: &str) -> anyhow::Result<Vec<f32>> {
    let bytes = general_purpose::STANDARD.decode(encoded)?;
    anyhow::ensure!(bytes.len() % 4 == 0, "base64 payload is not a whole number of f32 values");
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}
