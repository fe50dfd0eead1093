//! Vantage Assets - glTF mesh loading
//!
//! Converts a glTF 2.0 scene (.gltf or .glb) into a single CPU-side
//! [`MeshAsset`]: the first mesh-bearing node, its decomposed local transform,
//! and its first primitive flattened into interleaved vertices and indices.

mod error;
mod gltf_loader;
mod mesh;

#[cfg(test)]
mod test_support;

pub use error::AssetError;
pub use gltf_loader::{load_mesh, load_mesh_from_slice, try_load_mesh, try_load_mesh_from_slice};
pub use mesh::{MeshAsset, FLOATS_PER_VERTEX};
