use std::path::Path;

use gltf::Gltf;
use tracing::{debug, warn};
use vantage_core::{Mat4, Quat, Transform, Vec3};

use crate::error::AssetError;
use crate::mesh::{MeshAsset, FLOATS_PER_VERTEX};

const MEMORY_SOURCE: &str = "<memory>";

/// Load the first mesh of a glTF 2.0 file (.gltf or .glb).
///
/// Never fails: any problem is logged and an empty [`MeshAsset`] is returned,
/// so start-up is never blocked by a bad asset. Use [`try_load_mesh`] to find
/// out why a load came back empty.
pub fn load_mesh(path: &Path) -> MeshAsset {
    try_load_mesh(path).unwrap_or_else(|e| {
        warn!("{}, using empty mesh", e);
        MeshAsset::empty()
    })
}

/// Load the first mesh of an in-memory glTF document (JSON or GLB).
///
/// Same never-fail policy as [`load_mesh`].
pub fn load_mesh_from_slice(bytes: &[u8]) -> MeshAsset {
    try_load_mesh_from_slice(bytes).unwrap_or_else(|e| {
        warn!("{}, using empty mesh", e);
        MeshAsset::empty()
    })
}

/// Load the first mesh of a glTF 2.0 file, reporting why it failed.
///
/// Only the first node (in file order) that references a mesh is used, and
/// only that mesh's first primitive. Images are never decoded.
pub fn try_load_mesh(path: &Path) -> Result<MeshAsset, AssetError> {
    let source = path.display().to_string();

    let Gltf { document, blob } =
        Gltf::open(path).map_err(|e| AssetError::Parse(source.clone(), e.to_string()))?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob)
        .map_err(|e| AssetError::Buffers(source.clone(), e.to_string()))?;

    extract_mesh(&document, &buffers, &source)
}

/// Load the first mesh of an in-memory glTF document, reporting why it failed.
///
/// Buffers must come from the GLB binary chunk or `data:` URIs; external
/// file references cannot be resolved without a base path.
pub fn try_load_mesh_from_slice(bytes: &[u8]) -> Result<MeshAsset, AssetError> {
    let Gltf { document, blob } = Gltf::from_slice(bytes)
        .map_err(|e| AssetError::Parse(MEMORY_SOURCE.to_string(), e.to_string()))?;
    let buffers = gltf::import_buffers(&document, None, blob)
        .map_err(|e| AssetError::Buffers(MEMORY_SOURCE.to_string(), e.to_string()))?;

    extract_mesh(&document, &buffers, MEMORY_SOURCE)
}

fn extract_mesh(
    document: &gltf::Document,
    buffers: &[gltf::buffer::Data],
    source: &str,
) -> Result<MeshAsset, AssetError> {
    let (node, mesh) = document
        .nodes()
        .find_map(|node| node.mesh().map(|mesh| (node, mesh)))
        .ok_or_else(|| AssetError::NoMeshNode(source.to_string()))?;

    let transform = Transform::from_matrix(local_matrix(&node));
    let mesh_name = mesh.name().unwrap_or("unnamed").to_string();

    let primitive = mesh
        .primitives()
        .next()
        .ok_or_else(|| AssetError::NoPrimitive(source.to_string(), mesh_name.clone()))?;
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));

    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or_else(|| AssetError::MissingPositions(source.to_string(), mesh_name.clone()))?
        .collect();

    let tex_coords: Vec<[f32; 2]> = reader
        .read_tex_coords(0)
        .map(|tc| tc.into_f32().collect())
        .unwrap_or_default();

    let indices: Vec<u32> = reader
        .read_indices()
        .map(|idx| idx.into_u32().collect())
        .unwrap_or_default();

    if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(AssetError::IndexOutOfRange {
            source_name: source.to_string(),
            index,
            vertex_count: positions.len(),
        });
    }

    let vertices = interleave(&positions, &tex_coords);

    debug!(
        "glTF '{}': node '{}' mesh '{}' -> {} vertices, {} indices",
        source,
        node.name().unwrap_or("unnamed"),
        mesh_name,
        positions.len(),
        indices.len()
    );

    Ok(MeshAsset {
        transform,
        vertices,
        indices,
    })
}

/// The node's local matrix, composed as `T * R * S` when stored decomposed.
fn local_matrix(node: &gltf::Node) -> Mat4 {
    match node.transform() {
        gltf::scene::Transform::Matrix { matrix } => Mat4::from_cols_array_2d(&matrix),
        gltf::scene::Transform::Decomposed {
            translation,
            rotation,
            scale,
        } => Mat4::from_scale_rotation_translation(
            Vec3::from(scale),
            Quat::from_array(rotation),
            Vec3::from(translation),
        ),
    }
}

/// Interleave positions with texcoords, padding missing texcoords with `(0, 0)`.
fn interleave(positions: &[[f32; 3]], tex_coords: &[[f32; 2]]) -> Vec<f32> {
    let mut vertices = Vec::with_capacity(positions.len() * FLOATS_PER_VERTEX);
    for (i, [x, y, z]) in positions.iter().copied().enumerate() {
        let [u, v] = tex_coords.get(i).copied().unwrap_or([0.0, 0.0]);
        vertices.extend_from_slice(&[x, y, z, u, v]);
    }
    vertices
}
