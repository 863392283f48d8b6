use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Empty file: {}", .0.display())]
    EmptyFile(PathBuf),
}

pub type Result<T> = std::result::Result<T, HookError>;
