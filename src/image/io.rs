//! File helpers for PGM images and JSON reports.
//!
//! - `load_pgm`: read a binary PGM from disk into an owned `GrayImage`.
//! - `save_pgm`: write a `GrayImage` as binary PGM.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{pgm, GrayImage};
use crate::error::{BlurError, BlurResult};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load a binary PGM file.
pub fn load_pgm(path: &Path) -> BlurResult<GrayImage> {
    let bytes = fs::read(path).map_err(|e| BlurError::io(path, e))?;
    pgm::decode(&bytes)
}

/// Save an image as binary PGM. The parent directory must already exist.
pub fn save_pgm(image: &GrayImage, path: &Path) -> BlurResult<()> {
    let file = File::create(path).map_err(|e| BlurError::io(path, e))?;
    let mut out = BufWriter::new(file);
    pgm::encode_to(image, &mut out).map_err(|e| BlurError::io(path, e))?;
    out.flush().map_err(|e| BlurError::io(path, e))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> BlurResult<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| BlurError::io(path, std::io::Error::other(e)))?;
    fs::write(path, json).map_err(|e| BlurError::io(path, e))
}

fn ensure_parent_dir(path: &Path) -> BlurResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| BlurError::io(parent, e))?;
        }
    }
    Ok(())
}
