/// Raw light intensities of a rendered frame, one value per pixel in row-major order.
#[derive(Debug, Clone)]
pub struct IntensityFrame {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl IntensityFrame {
    /// Makes an all-dark frame.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width as usize * height as usize],
        }
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[cfg(test)]
    fn set(&mut self, x: u32, y: u32, value: f32) {
        assert!(x < self.width && y < self.height);
        self.values[pixel_index(self.width, x, y)] = value;
    }

    pub(crate) fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// The largest intensity in the frame; 0 for an all-dark frame. NaN values are ignored.
    pub fn max(&self) -> f32 {
        self.values.iter().copied().fold(0.0, f32::max)
    }

    /// Scales the frame so that its brightest pixel becomes 255 and rounds every pixel to the
    /// nearest gray level. A frame without any positive intensity becomes all black.
    pub fn normalized(&self) -> GrayImage {
        let max = self.max();
        let levels = if max > 0.0 {
            self.values.iter().map(|v| to_gray_level(v / max)).collect()
        } else {
            vec![0; self.values.len()]
        };
        GrayImage {
            width: self.width,
            height: self.height,
            levels,
        }
    }
}

/// Row-major offset of pixel (x, y), computed in `usize` so large frames don't overflow `u32`.
fn pixel_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Clamps an f32 value to [0, 1], mutiplies it by 255 and rounds it to u8.
/// Returns 0 if `f` is NaN.
fn to_gray_level(f: f32) -> u8 {
    if f > 1.0 {
        255
    } else if f >= 0.0 {
        (f * 255.0).round() as u8
    } else {
        0
    }
}

/// An 8-bit grayscale image, stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    width: u32,
    height: u32,
    levels: Vec<u8>,
}

impl GrayImage {
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn level(&self, x: u32, y: u32) -> u8 {
        assert!(x < self.width && y < self.height);
        self.levels[pixel_index(self.width, x, y)]
    }

    /// Returns the pixel as an RGB triple with equal channels.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let v = self.level(x, y);
        [v, v, v]
    }

    pub fn levels(&self) -> &[u8] {
        &self.levels
    }

    /// Expands the image to 8-bit RGB, 3 bytes per pixel, ready for encoding.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.levels.iter().flat_map(|v| [*v; 3]).collect()
    }
}
