//! PNG export for synthesized textures.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ImageEncoder;
use thiserror::Error;

use crate::texture::Texture;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports a texture as an 8-bit grayscale PNG.
///
/// # Arguments
/// * `texture` - The texture to export
/// * `path` - Output file path
/// * `options` - Compression and filter settings
pub fn export_texture_png(
    texture: &Texture,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let size = texture.size();

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);
    encoder.write_image(
        texture.as_raw(),
        size,
        size,
        image::ExtendedColorType::L8,
    )?;

    Ok(())
}

/// Exports several named textures into one directory.
///
/// Files are named `{base_name}_{name}.png`, e.g. `texture_cloud.png`.
///
/// # Returns
/// `Ok(())` on success, or the first error encountered
pub fn export_textures_png(
    textures: &[(&str, &Texture)],
    output_dir: &Path,
    base_name: &str,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    std::fs::create_dir_all(output_dir)?;

    for (name, texture) in textures {
        let filename = format!("{}_{}.png", base_name, name);
        let path = output_dir.join(filename);
        export_texture_png(texture, &path, options)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::{TextureConfig, TextureSynthesizer};
    use tempfile::tempdir;

    fn gradient_texture(size: u32) -> Texture {
        let mut texture = Texture::new(size);
        for y in 0..size {
            for x in 0..size {
                texture.set(x, y, ((x + y) * 255 / (2 * size - 2)) as u8);
            }
        }
        texture
    }

    #[test]
    fn test_export_texture_png_round_trips_pixels() {
        let texture = gradient_texture(16);
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        export_texture_png(&texture, &path, &PngExportOptions::default()).unwrap();

        let decoded = image::open(&path).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (16, 16));
        assert_eq!(decoded.get_pixel(15, 0)[0], texture.get(15, 0));
        assert_eq!(decoded.get_pixel(3, 9)[0], texture.get(3, 9));
        assert_eq!(decoded.as_raw().as_slice(), texture.as_raw());
    }

    #[test]
    fn test_export_textures_png() {
        let mut synth = TextureSynthesizer::new(TextureConfig::new(16, 42)).unwrap();
        let cloud = synth.make_texture(None).clone();
        let flat = synth.make_texture_with(|_, _| 0.0).clone();

        let dir = tempdir().unwrap();
        export_textures_png(
            &[("cloud", &cloud), ("flat", &flat)],
            dir.path(),
            "texture",
            &PngExportOptions::default(),
        )
        .unwrap();

        for name in ["cloud", "flat"] {
            let path = dir.path().join(format!("texture_{}.png", name));
            assert!(path.exists(), "Missing file for {}", name);
        }
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let texture = Texture::new(4);
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("test.png");

        let result = export_texture_png(&texture, &path, &PngExportOptions::default());
        assert!(matches!(result, Err(PngExportError::Io(_))));
    }
}
