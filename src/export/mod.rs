//! Export module for saving synthesized textures to disk.
//!
//! Supports 8-bit grayscale PNG and headerless RAW bytes.

mod png;
mod raw;

pub use png::{export_texture_png, export_textures_png, PngExportError, PngExportOptions};
pub use raw::{export_texture_raw, expected_file_size, RawExportError};
