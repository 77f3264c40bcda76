use crate::models::Bitmap;
use crate::utils::ScanError;
use image::ImageFormat;
use std::io::Cursor;
use std::path::Path;

// Perceptual grayscale weights; must stay exactly these values for output
// parity with the capture pipeline.
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

// Linear contrast stretch around mid-gray. Pushes ink toward black and
// paper toward white, which raises OCR confidence on envelope text.
const CONTRAST_FACTOR: f32 = 1.5;
const CONTRAST_MIDPOINT: f32 = 128.0;

/// ImageProcessor prepares captured envelope photos for OCR.
pub struct ImageProcessor;

impl ImageProcessor {
    /// Decode an image file into an RGBA bitmap.
    pub fn load_bitmap<P: AsRef<Path>>(path: P) -> Result<Bitmap, ScanError> {
        let img = image::open(path.as_ref()).map_err(|e| {
            ScanError::ImageProcessingError(format!("Failed to open image: {}", e))
        })?;
        Ok(Bitmap::from_rgba_image(img.to_rgba8()))
    }

    /// Grayscale conversion plus contrast enhancement, applied per pixel.
    ///
    /// Dimensions are preserved and the alpha channel is copied through
    /// unchanged. The transform is single-pass: reapplying it pushes values
    /// further toward the extremes, so it must run once per capture.
    /// A zero-area bitmap is returned unchanged.
    pub fn normalize(mut bitmap: Bitmap) -> Bitmap {
        if bitmap.is_empty() {
            return bitmap;
        }

        for pixel in bitmap.data_mut().chunks_exact_mut(4) {
            let luma = LUMA_R * pixel[0] as f32
                + LUMA_G * pixel[1] as f32
                + LUMA_B * pixel[2] as f32;
            let enhanced = ((luma - CONTRAST_MIDPOINT) * CONTRAST_FACTOR + CONTRAST_MIDPOINT)
                .clamp(0.0, 255.0)
                .round() as u8;
            pixel[0] = enhanced;
            pixel[1] = enhanced;
            pixel[2] = enhanced;
            // pixel[3] (alpha) untouched
        }

        bitmap
    }

    /// Encode a bitmap as PNG bytes for handoff to the OCR engine.
    pub fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, ScanError> {
        let img = bitmap.to_rgba_image();
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        img.write_to(&mut cursor, ImageFormat::Png).map_err(|e| {
            ScanError::ImageProcessingError(format!("Failed to encode bitmap: {}", e))
        })?;
        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_bitmap(width: u32, height: u32, rgba: [u8; 4]) -> Bitmap {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for _ in 0..(width * height) {
            data.extend_from_slice(&rgba);
        }
        Bitmap::new(width, height, data).unwrap()
    }

    #[test]
    fn test_normalize_preserves_dimensions() {
        let bitmap = solid_bitmap(7, 3, [10, 200, 30, 255]);
        let normalized = ImageProcessor::normalize(bitmap);
        assert_eq!(normalized.width(), 7);
        assert_eq!(normalized.height(), 3);
        assert_eq!(normalized.data().len(), 7 * 3 * 4);
    }

    #[test]
    fn test_normalize_is_achromatic_and_keeps_alpha() {
        let bitmap = solid_bitmap(4, 4, [13, 77, 230, 190]);
        let normalized = ImageProcessor::normalize(bitmap);
        for pixel in normalized.data().chunks_exact(4) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
            assert_eq!(pixel[3], 190);
        }
    }

    #[test]
    fn test_mid_gray_is_a_fixed_point() {
        let bitmap = solid_bitmap(2, 2, [128, 128, 128, 255]);
        let normalized = ImageProcessor::normalize(bitmap.clone());
        assert_eq!(normalized, bitmap);
    }

    #[test]
    fn test_contrast_clamps_at_extremes() {
        let dark = ImageProcessor::normalize(solid_bitmap(1, 1, [0, 0, 0, 255]));
        assert_eq!(&dark.data()[..3], &[0, 0, 0]);

        let bright = ImageProcessor::normalize(solid_bitmap(1, 1, [255, 255, 255, 255]));
        assert_eq!(&bright.data()[..3], &[255, 255, 255]);
    }

    #[test]
    fn test_known_pixel_value() {
        // L = 0.299*200 + 0.587*100 + 0.114*50 = 124.2
        // E = (124.2 - 128) * 1.5 + 128 = 122.3 -> 122
        let normalized = ImageProcessor::normalize(solid_bitmap(1, 1, [200, 100, 50, 255]));
        assert_eq!(&normalized.data()[..4], &[122, 122, 122, 255]);
    }

    #[test]
    fn test_zero_area_bitmap_passes_through() {
        let bitmap = Bitmap::new(0, 0, Vec::new()).unwrap();
        let normalized = ImageProcessor::normalize(bitmap);
        assert!(normalized.is_empty());
        assert!(normalized.data().is_empty());
    }

    #[test]
    fn test_normalize_is_not_idempotent_off_midpoint() {
        let once = ImageProcessor::normalize(solid_bitmap(1, 1, [100, 100, 100, 255]));
        let twice = ImageProcessor::normalize(once.clone());
        assert_ne!(once, twice);
    }
}
