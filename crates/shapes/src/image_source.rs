use std::path::{Path, PathBuf};

use foundation::handles::Handle;
use serde::{Deserialize, Serialize};

/// Reference to an image resolved by an external image/texture loader.
///
/// Shapes never decode or validate the referenced resource. The value is only
/// stored, forwarded to the loader and compared. Handle variants compare by
/// handle identity, so two distinct buffers with identical pixels differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
    /// In-memory image held in the loader's buffer cache.
    Buffer(Handle),
    /// Procedural image generator registered with the loader.
    Generator(Handle),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ImageSourceKind {
    Path,
    Url,
    Buffer,
    Generator,
}

impl ImageSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        ImageSource::Path(path.as_ref().to_path_buf())
    }

    pub fn from_url(url: impl Into<String>) -> Self {
        ImageSource::Url(url.into())
    }

    pub fn from_buffer(handle: Handle) -> Self {
        ImageSource::Buffer(handle)
    }

    pub fn from_generator(handle: Handle) -> Self {
        ImageSource::Generator(handle)
    }

    pub fn kind(&self) -> ImageSourceKind {
        match self {
            ImageSource::Path(_) => ImageSourceKind::Path,
            ImageSource::Url(_) => ImageSourceKind::Url,
            ImageSource::Buffer(_) => ImageSourceKind::Buffer,
            ImageSource::Generator(_) => ImageSourceKind::Generator,
        }
    }

    pub fn handle(&self) -> Option<Handle> {
        match self {
            ImageSource::Buffer(h) | ImageSource::Generator(h) => Some(*h),
            ImageSource::Path(_) | ImageSource::Url(_) => None,
        }
    }
}
