//! Writing encoded sprites to disk and checking the result.
//!
//! Each sprite is written independently; one failed file never blocks the
//! rest of the batch. After a run, [`verify_tree`] walks the output root and
//! reconciles the PNGs it finds against the manifest.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::manifest::Manifest;
use crate::png::{self, EncodeError};
use crate::sprites::Sprite;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Encode `sprite` and write it as `<dir>/<name>.png`, creating `dir` and
/// its parents first. Returns the written path.
pub fn write_sprite(dir: &Path, sprite: &Sprite) -> Result<PathBuf, OutputError> {
    let bytes = png::encode(&sprite.canvas)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.png", sprite.name));
    fs::write(&path, bytes)?;
    Ok(path)
}

/// What a post-generation scan of the output tree found.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TreeReport {
    /// Manifest entries with no file on disk.
    pub missing: Vec<PathBuf>,
    /// PNG files on disk that no manifest entry claims.
    pub strays: Vec<PathBuf>,
}

impl TreeReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.strays.is_empty()
    }
}

/// Walk `root` and reconcile every `.png` found against `manifest`.
pub fn verify_tree(root: &Path, manifest: &Manifest) -> TreeReport {
    let expected: HashSet<PathBuf> = manifest
        .sprites
        .iter()
        .map(|e| root.join(&e.folder).join(&e.file))
        .collect();

    let mut found: HashSet<PathBuf> = HashSet::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        if entry.path().extension().and_then(|s| s.to_str()) == Some("png") {
            found.insert(entry.path().to_path_buf());
        }
    }

    let mut missing: Vec<PathBuf> = expected.difference(&found).cloned().collect();
    missing.sort();
    let mut strays: Vec<PathBuf> = found.difference(&expected).cloned().collect();
    strays.sort();

    TreeReport { missing, strays }
}
