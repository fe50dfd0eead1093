use vantage_core::{Mat4, Transform};

/// Floats per interleaved vertex: position (3) followed by texcoord (2).
pub const FLOATS_PER_VERTEX: usize = 5;

/// A loaded mesh asset (renderer-agnostic).
///
/// Holds the decomposed local transform of the source node plus its first
/// primitive flattened into `[x, y, z, u, v]` vertices. An empty `indices`
/// list means the mesh is drawn non-indexed, by vertex count.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshAsset {
    pub transform: Transform,
    pub vertices: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshAsset {
    /// The inert result every failed load degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }

    /// True when nothing can be drawn from this asset.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn is_indexed(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Number of elements to submit: the index count when indexed, otherwise
    /// the vertex count.
    pub fn draw_count(&self) -> usize {
        if self.is_indexed() {
            self.indices.len()
        } else {
            self.vertex_count()
        }
    }

    /// Position of vertex `index`, if it exists.
    pub fn position(&self, index: usize) -> Option<[f32; 3]> {
        let v = self.vertex(index)?;
        Some([v[0], v[1], v[2]])
    }

    /// Texture coordinate of vertex `index`, if it exists.
    pub fn tex_coord(&self, index: usize) -> Option<[f32; 2]> {
        let v = self.vertex(index)?;
        Some([v[3], v[4]])
    }

    fn vertex(&self, index: usize) -> Option<&[f32]> {
        let start = index.checked_mul(FLOATS_PER_VERTEX)?;
        self.vertices.get(start..start + FLOATS_PER_VERTEX)
    }

    /// Initial model matrix for the renderer.
    pub fn model_matrix(&self) -> Mat4 {
        self.transform.matrix()
    }

    /// Vertex data as raw bytes, ready for a GPU buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as raw bytes (`u32` little/native endian).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Vec3;

    fn triangle() -> MeshAsset {
        MeshAsset {
            transform: Transform::from_position(Vec3::new(0.0, 1.0, 0.0)),
            vertices: vec![
                0.0, 0.0, 0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, 1.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, 1.0,
            ],
            indices: Vec::new(),
        }
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = MeshAsset::empty();
        assert!(mesh.is_empty());
        assert!(!mesh.is_indexed());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.draw_count(), 0);
        assert_eq!(mesh.model_matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn test_non_indexed_draws_by_vertex_count() {
        let mesh = triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.draw_count(), 3);
        assert_eq!(mesh.position(1), Some([1.0, 0.0, 0.0]));
        assert_eq!(mesh.tex_coord(2), Some([0.0, 1.0]));
        assert_eq!(mesh.position(3), None);
    }

    #[test]
    fn test_byte_views() {
        let mut mesh = triangle();
        mesh.indices = vec![0, 1, 2];
        assert_eq!(mesh.vertex_bytes().len(), 15 * 4);
        assert_eq!(mesh.index_bytes().len(), 3 * 4);
        assert_eq!(mesh.draw_count(), 3);
    }
}
