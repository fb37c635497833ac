//! Logical asset path resolution

use std::path::PathBuf;

/// Result of resolving a logical asset path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    /// File exists under the assets directory
    Found(PathBuf),

    /// Expected location that has no file yet
    Missing(PathBuf),
}

/// Maps logical visual paths like `/images/bp-diagram.svg` to files under
/// the local assets directory. A missing file is reported as a status, never
/// as an error; the renderer tells the author which file to add.
pub struct AssetResolver {
    images_dir: PathBuf,
}

impl AssetResolver {
    /// Resolve against `<assets_dir>/images`
    pub fn new(assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            images_dir: assets_dir.into().join("images"),
        }
    }

    /// Map a logical source path to its expected local file
    pub fn resolve(&self, src: &str) -> AssetStatus {
        let fname = src.replace("/images/", "");
        let path = self.images_dir.join(fname.trim_start_matches('/'));

        if path.exists() {
            AssetStatus::Found(path)
        } else {
            AssetStatus::Missing(path)
        }
    }
}
