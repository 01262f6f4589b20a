//! PNG encoding for rendered heatmaps.

use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder, RgbaImage};

use citygrid_common::{CityGridError, CityGridResult};

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> CityGridResult<Vec<u8>> {
    let mut png = Vec::new();
    // Heatmaps are large flat blocks; adaptive filtering pays off.
    let encoder =
        PngEncoder::new_with_quality(&mut png, CompressionType::Default, FilterType::Adaptive);
    encoder
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)
        .map_err(|e| CityGridError::EncodeError(e.to_string()))?;

    tracing::debug!(
        width = image.width(),
        height = image.height(),
        bytes = png.len(),
        "Encoded PNG"
    );
    Ok(png)
}

/// Encode and write an image to `path`.
pub fn write_png(image: &RgbaImage, path: impl AsRef<Path>) -> CityGridResult<()> {
    let png = encode_png(image)?;
    std::fs::write(path, png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_png_signature() {
        let image = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]));
        let png = encode_png(&image).unwrap();
        assert_eq!(&png[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
