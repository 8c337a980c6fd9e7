use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use scene::frame::GrayImage;

/// Encodes the image as an 8-bit RGB png file.
pub fn write_png(image: &GrayImage, path: &Path) -> Result<(), String> {
    let (width, height) = image.resolution();
    let file = File::create(path).map_err(|e| format!("Cannot create {}: {}", path.display(), e))?;
    let ref mut w = BufWriter::new(file);

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::RGB);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder
        .write_header()
        .map_err(|e| format!("Cannot write png header: {}", e))?;
    writer
        .write_image_data(&image.to_rgb_bytes())
        .map_err(|e| format!("Cannot write png data: {}", e))
}
