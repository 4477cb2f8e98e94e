use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Blog directory {0} does not exist")]
    MissingDirectory(PathBuf),

    #[error("Error reading {0}")]
    UnreadableFile(PathBuf, #[source] io::Error),

    #[error("Invalid front matter in {0}: {1}")]
    UnparsableHeader(PathBuf, String),

    #[error("Featured region <CardGroup cols={{2}}> not found in {0}")]
    MissingMarkerRegion(PathBuf),

    #[error("Slug {0} is produced by more than one content file")]
    DuplicateSlug(String),

    #[error("Error writing {0}")]
    Write(PathBuf, #[source] io::Error),

    #[error("Error rendering {0}")]
    Render(String),
}

pub type BlogResult<T> = Result<T, BlogError>;
