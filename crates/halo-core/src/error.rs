use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouterError>;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("mount point #{id} not found in document")]
    MountMissing { id: String },

    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),
}

impl RouterError {
    #[must_use]
    pub fn mount_missing(id: impl Into<String>) -> Self {
        Self::MountMissing { id: id.into() }
    }
}
