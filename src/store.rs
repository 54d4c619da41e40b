use anyhow::{Context, Result};
use md5::{Digest, Md5};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persists fetched resources under content-addressed filenames inside a
/// local asset directory.
#[derive(Clone)]
pub struct AssetStore {
    asset_dir: PathBuf,
}

impl AssetStore {
    /// Creates the asset directory on first use; idempotent thereafter.
    pub fn new(asset_dir: &Path) -> Result<Self> {
        if !asset_dir.exists() {
            fs::create_dir_all(asset_dir)
                .with_context(|| format!("Failed to create asset directory: {:?}", asset_dir))?;
            println!("📁 Created directory: {}", asset_dir.display());
        }

        Ok(Self {
            asset_dir: asset_dir.to_path_buf(),
        })
    }

    /// Deterministic filename for a URL: md5 hex of the exact URL string
    /// plus the inferred extension. The hash keeps filenames short no
    /// matter how long the query string is.
    pub fn asset_filename(url: &str, extension: &str) -> String {
        let digest = Md5::digest(url.as_bytes());
        format!("{}{}", hex::encode(digest), extension)
    }

    /// Write the fetched bytes, overwriting any previous file of the same
    /// name, and return the relative local path used in the document.
    pub fn store(&self, url: &str, extension: &str, content: &[u8]) -> Result<String> {
        let filename = Self::asset_filename(url, extension);
        let file_path = self.asset_dir.join(&filename);

        let mut file = fs::File::create(&file_path)
            .with_context(|| format!("Failed to create file: {:?}", file_path))?;
        file.write_all(content)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(format!("{}/{}", self.asset_dir.display(), filename))
    }
}
