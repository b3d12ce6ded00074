use crate::{Error, command::RasterMode};
use image::{DynamicImage, GenericImageView, Pixel};
use std::path::Path;

/// Image adapted to raster printing
///
/// Wraps the source image, which gets scaled to the printer's dot width and reduced to a
/// one-bit bitmap at print time. Pixels darker than the luminance threshold print black,
/// transparent pixels print white.
pub struct RasterImage {
    /// Source image, useful for scaling
    dynamic_image: DynamicImage
}

impl RasterImage {
    /// Creates a new RasterImage from a [DynamicImage](https://docs.rs/image/0.24/image/enum.DynamicImage.html)
    pub fn new(dynamic_image: DynamicImage) -> RasterImage {
        RasterImage {
            dynamic_image
        }
    }

    /// Loads a RasterImage from a file
    pub fn open<T: AsRef<Path>>(path: T) -> Result<RasterImage, Error> {
        let dynamic_image = image::open(path).map_err(Error::ImageError)?;
        Ok(RasterImage::new(dynamic_image))
    }

    /// Builds the full raster payload: size selector, geometry header, and packed rows.
    ///
    /// The wire format is `GS v 0 m xL xH yL yH d1...dk`, where `xL + xH * 256` counts bytes
    /// per row and `yL + yH * 256` counts rows. The image gets scaled to the printer width
    /// preserving its aspect ratio, and packed 8 horizontal pixels per byte, most significant
    /// bit first.
    pub (crate) fn to_raster(&self, printer_width: u16, mode: RasterMode) -> Vec<u8> {
        let (im_width, im_height) = self.dynamic_image.dimensions();
        let aspect_ratio = (im_width as f64)/(im_height as f64);
        let height = ((printer_width as f64)/aspect_ratio).floor() as u32;
        let resized_image = image::imageops::resize(
            &self.dynamic_image,
            printer_width as u32,
            height,
            image::imageops::FilterType::Nearest
        );

        let bytes_per_row = ((printer_width as usize) + 7)/8;
        let mut feed = mode.as_bytes();
        feed.push((bytes_per_row % 256) as u8);
        feed.push((bytes_per_row / 256) as u8);
        feed.push((height % 256) as u8);
        feed.push((height / 256) as u8);

        for y in 0..height {
            let mut row = vec![0u8; bytes_per_row];
            for x in 0..(printer_width as u32) {
                let ps = resized_image.get_pixel(x, y).channels();
                // Transparent pixels stay white
                let color = if ps[3] > 64 {
                    let grayscale = 0.2126*(ps[0] as f64) + 0.7152*(ps[1] as f64) + 0.0722*(ps[2] as f64);
                    if grayscale < 78.0 {
                        0x01
                    } else {
                        0x00
                    }
                } else {
                    0x00
                };
                row[(x/8) as usize] |= color << (7 - x%8);
            }
            feed.extend_from_slice(&row);
        }
        feed
    }
}

#[cfg(test)]
mod tests {
    use super::RasterImage;
    use crate::command::RasterMode;
    use image::DynamicImage;

    #[test]
    fn payload_header_carries_geometry() {
        // A square black image, printed on an 8-dot wide head: one byte per row, 8 rows
        let mut buffer = image::RgbaImage::new(4, 4);
        for pixel in buffer.pixels_mut() {
            *pixel = image::Rgba([0, 0, 0, 255]);
        }
        let raster_image = RasterImage::new(DynamicImage::ImageRgba8(buffer));
        let feed = raster_image.to_raster(8, RasterMode::Normal);
        assert_eq!(&feed[..8], [0x1d, 0x76, 0x30, 0x00, 0x01, 0x00, 0x08, 0x00]);
        // Every dot is black
        assert_eq!(&feed[8..], vec![0xff; 8].as_slice());
    }

    #[test]
    fn transparent_pixels_stay_white() {
        let buffer = image::RgbaImage::new(4, 4);
        let raster_image = RasterImage::new(DynamicImage::ImageRgba8(buffer));
        let feed = raster_image.to_raster(8, RasterMode::Normal);
        assert_eq!(&feed[8..], vec![0x00; 8].as_slice());
    }
}
