//! Error types for the provisioner

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid stream path: {0}")]
    InvalidPath(String),
}
