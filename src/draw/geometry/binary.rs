//! Binary serialization for mesh geometry
//!
//! Little-endian container so a consumer can map the payload straight into
//! Float32Array / Uint32Array views.
//!
//! Format: `[magic: 8 bytes][vertex_count: u32][index_count: u32][vertex_data][index_data]`
//! - vertex_data: raw f32 array (x, y, x, y, ...)
//! - index_data: raw u32 array, three per triangle

use super::mesh::MeshGeometry;
use byteorder::{ByteOrder, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

pub const MESH_MAGIC: &[u8; 8] = b"OTESSMB1";

/// Write geometry in the binary container format
pub fn write_mesh_binary<W: Write>(writer: &mut W, geometry: &MeshGeometry) -> io::Result<()> {
    writer.write_all(MESH_MAGIC)?;
    writer.write_u32::<LittleEndian>(geometry.vertex_count as u32)?;
    writer.write_u32::<LittleEndian>(geometry.index_data.len() as u32)?;
    for &f in &geometry.vertex_data {
        writer.write_f32::<LittleEndian>(f)?;
    }
    for &idx in &geometry.index_data {
        writer.write_u32::<LittleEndian>(idx)?;
    }
    Ok(())
}

pub fn mesh_to_bytes(geometry: &MeshGeometry) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(16 + geometry.vertex_data.len() * 4 + geometry.index_data.len() * 4);
    // Writing into a Vec cannot fail
    let _ = write_mesh_binary(&mut buffer, geometry);
    buffer
}

/// Read geometry back from the binary container format
pub fn read_mesh_binary<R: Read>(reader: &mut R) -> anyhow::Result<MeshGeometry> {
    let mut magic = [0u8; 8];
    reader.read_exact(&mut magic)?;
    anyhow::ensure!(&magic == MESH_MAGIC, "not a mesh binary (bad magic header)");

    let vertex_count = reader.read_u32::<LittleEndian>()? as usize;
    let index_count = reader.read_u32::<LittleEndian>()? as usize;
    anyhow::ensure!(index_count % 3 == 0, "index count {} is not a multiple of 3", index_count);

    // Size the payload from the bytes actually present, never from the header
    let mut payload = Vec::new();
    reader.read_to_end(&mut payload)?;
    let expected = vertex_count
        .checked_mul(2)
        .and_then(|floats| floats.checked_add(index_count))
        .and_then(|words| words.checked_mul(4));
    anyhow::ensure!(
        expected == Some(payload.len()),
        "payload is {} bytes, header declares {} vertices and {} indices",
        payload.len(),
        vertex_count,
        index_count
    );

    let (vertex_bytes, index_bytes) = payload.split_at(vertex_count * 8);
    let mut vertex_data = vec![0f32; vertex_count * 2];
    LittleEndian::read_f32_into(vertex_bytes, &mut vertex_data);
    let mut index_data = vec![0u32; index_count];
    LittleEndian::read_u32_into(index_bytes, &mut index_data);

    if let Some(&bad) = index_data.iter().find(|&&i| i as usize >= vertex_count) {
        anyhow::bail!("index {} out of range for {} vertices", bad, vertex_count);
    }

    Ok(MeshGeometry::from_buffers(vertex_data, index_data))
}
