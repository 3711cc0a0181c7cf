use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(
        "PNG encoding is not available in this build. Reinstall with the `png` feature of the `image` crate enabled."
    )]
    MissingDependency,

    #[error("Client '{0}' not recognized (expected one of: guara, vale_das_minas)")]
    InvalidInput(String),

    #[error("Failed to create {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to save {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl GenerateError {
    /// True for failures that happened while touching the filesystem.
    pub fn is_io(&self) -> bool {
        matches!(self, GenerateError::Io { .. } | GenerateError::Save { .. })
    }
}
