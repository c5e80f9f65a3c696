//! Square 8-bit grayscale texture buffer.

/// A dense `size × size` grid of 8-bit intensities in row-major order.
///
/// Pattern coordinate `(x, y)` is column `x`, row `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    size: u32,
    pixels: Vec<u8>,
}

impl Texture {
    /// Creates a black texture.
    pub fn new(size: u32) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            pixels: vec![0; len],
        }
    }

    /// Width and height in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.size as usize) + (x as usize)
    }

    /// Returns the intensity at column `x`, row `y`.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[self.index(x, y)]
    }

    /// Sets the intensity at column `x`, row `y`.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let i = self.index(x, y);
        self.pixels[i] = value;
    }

    /// Row-major pixel data.
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Returns the darkest and brightest intensity.
    pub fn intensity_range(&self) -> (u8, u8) {
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        for &p in &self.pixels {
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut texture = Texture::new(4);
        texture.set(3, 1, 200);
        assert_eq!(texture.get(3, 1), 200);
        assert_eq!(texture.as_raw()[1 * 4 + 3], 200);
        assert_eq!(texture.as_raw().len(), 16);
    }

    #[test]
    fn test_intensity_range() {
        let mut texture = Texture::new(2);
        texture.set(0, 0, 10);
        texture.set(1, 1, 250);
        texture.set(0, 1, 10);
        texture.set(1, 0, 11);
        assert_eq!(texture.intensity_range(), (10, 250));
    }
}
