//! In-memory glTF fixtures for loader tests.

use std::borrow::Cow;

use gltf::binary::{Glb, Header};
use serde_json::{json, Map, Value};

pub(crate) const QUAD_POSITIONS: [[f32; 3]; 4] = [
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.5, 0.5, 0.0],
    [-0.5, 0.5, 0.0],
];

pub(crate) const QUAD_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

pub(crate) const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

const FLOAT: u32 = 5126;
const UNSIGNED_SHORT: u32 = 5123;

/// A one-mesh scene whose mesh is a unit quad.
pub(crate) struct QuadScene {
    /// The `nodes` array; mesh index 0 is the quad.
    pub nodes: Value,
    pub with_tex_coords: bool,
    pub indices: Option<Vec<u16>>,
}

impl Default for QuadScene {
    fn default() -> Self {
        Self {
            nodes: json!([{ "name": "quad", "mesh": 0 }]),
            with_tex_coords: true,
            indices: Some(QUAD_INDICES.to_vec()),
        }
    }
}

impl QuadScene {
    /// Build the JSON document and its binary buffer. The single buffer has
    /// no `uri`, so it resolves to the GLB binary chunk.
    pub fn build(&self) -> (Value, Vec<u8>) {
        let mut bin = Vec::new();
        let mut buffer_views = Vec::new();
        let mut accessors = Vec::new();
        let mut attributes = Map::new();

        let offset = bin.len();
        for component in QUAD_POSITIONS.iter().flatten() {
            bin.extend_from_slice(&component.to_le_bytes());
        }
        buffer_views.push(json!({ "buffer": 0, "byteOffset": offset, "byteLength": bin.len() - offset }));
        accessors.push(json!({
            "bufferView": buffer_views.len() - 1,
            "componentType": FLOAT,
            "count": QUAD_POSITIONS.len(),
            "type": "VEC3",
            "min": [-0.5, -0.5, 0.0],
            "max": [0.5, 0.5, 0.0]
        }));
        attributes.insert("POSITION".to_string(), json!(accessors.len() - 1));

        if self.with_tex_coords {
            let offset = bin.len();
            for component in QUAD_TEX_COORDS.iter().flatten() {
                bin.extend_from_slice(&component.to_le_bytes());
            }
            buffer_views.push(json!({ "buffer": 0, "byteOffset": offset, "byteLength": bin.len() - offset }));
            accessors.push(json!({
                "bufferView": buffer_views.len() - 1,
                "componentType": FLOAT,
                "count": QUAD_TEX_COORDS.len(),
                "type": "VEC2"
            }));
            attributes.insert("TEXCOORD_0".to_string(), json!(accessors.len() - 1));
        }

        let mut primitive = json!({ "attributes": attributes });

        if let Some(indices) = &self.indices {
            let offset = bin.len();
            for index in indices {
                bin.extend_from_slice(&index.to_le_bytes());
            }
            buffer_views.push(json!({ "buffer": 0, "byteOffset": offset, "byteLength": bin.len() - offset }));
            accessors.push(json!({
                "bufferView": buffer_views.len() - 1,
                "componentType": UNSIGNED_SHORT,
                "count": indices.len(),
                "type": "SCALAR"
            }));
            primitive["indices"] = json!(accessors.len() - 1);
        }

        let document = json!({
            "asset": { "version": "2.0" },
            "nodes": self.nodes,
            "meshes": [{ "name": "quad", "primitives": [primitive] }],
            "buffers": [{ "byteLength": bin.len() }],
            "bufferViews": buffer_views,
            "accessors": accessors
        });

        (document, bin)
    }

    pub fn to_glb(&self) -> Vec<u8> {
        let (document, bin) = self.build();
        glb(&document.to_string(), &bin)
    }
}

/// Pack a JSON document and optional binary payload into a GLB container.
/// An empty `bin` leaves out the binary chunk.
pub(crate) fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let glb = Glb {
        // Written length is recomputed from the chunks.
        header: Header {
            magic: *b"glTF",
            version: 2,
            length: 0,
        },
        json: Cow::Borrowed(json.as_bytes()),
        bin: (!bin.is_empty()).then_some(Cow::Borrowed(bin)),
    };
    glb.to_vec().expect("GLB fixture serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_glb_splits_back_into_chunks() {
        let (document, bin) = QuadScene::default().build();
        let bytes = glb(&document.to_string(), &bin);

        let parsed = Glb::from_slice(&bytes).unwrap();
        assert_eq!(parsed.header.length as usize, bytes.len());
        assert_eq!(bytes.len() % 4, 0);
        let chunk = parsed.bin.unwrap();
        assert_eq!(&chunk[..bin.len()], &bin[..]);
    }

    #[test]
    fn test_empty_payload_omits_binary_chunk() {
        let bytes = glb(r#"{"asset":{"version":"2.0"}}"#, &[]);
        assert!(Glb::from_slice(&bytes).unwrap().bin.is_none());
    }
}
