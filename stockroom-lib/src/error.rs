use thiserror::Error;

use crate::{
    draft::ValidationError,
    model::{AssetId, BranchId, GroupId},
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Server responded with HTTP {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Could not decode response: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse TOML: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("Could not serialize TOML: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("$HOME must exist")]
    NoHomeDir,
    #[error("Invalid asset: {0}")]
    Validation(#[from] ValidationError),
    #[error("No asset with id {0}")]
    AssetNotFound(AssetId),
    #[error("Branch {0} is not available")]
    UnknownBranch(BranchId),
    #[error("Group {0} is not available")]
    UnknownGroup(GroupId),
}
