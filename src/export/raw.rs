//! Headerless RAW export of texture bytes.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::texture::Texture;

/// Errors that can occur during RAW export.
#[derive(Error, Debug)]
pub enum RawExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the texture's row-major 8-bit intensities with no header.
pub fn export_texture_raw(texture: &Texture, path: &Path) -> Result<(), RawExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(texture.as_raw())?;
    writer.flush()?;
    Ok(())
}

/// Returns the expected file size for a RAW export of a `size × size` texture.
pub fn expected_file_size(size: u32) -> u64 {
    (size as u64) * (size as u64)
}
