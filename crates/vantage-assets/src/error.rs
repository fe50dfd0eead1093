/// Errors that can occur while converting a glTF scene into a [`MeshAsset`].
///
/// The first field of every variant names the source (a file path or
/// `<memory>` for slice loads).
///
/// [`MeshAsset`]: crate::MeshAsset
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to parse glTF '{0}': {1}")]
    Parse(String, String),

    #[error("failed to load buffers for '{0}': {1}")]
    Buffers(String, String),

    #[error("no node in '{0}' references a mesh")]
    NoMeshNode(String),

    #[error("mesh '{1}' in '{0}' has no primitives")]
    NoPrimitive(String, String),

    #[error("first primitive of mesh '{1}' in '{0}' has no POSITION attribute")]
    MissingPositions(String, String),

    #[error("index {index} in '{source_name}' is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        source_name: String,
        index: u32,
        vertex_count: usize,
    },
}
