pub mod image_helper {
    use crate::core_modules::pixel::pixel::{Byte, CHANNELS};
    use crate::core_modules::yuv::{Nv21Frame, encode_nv21};
    use crate::error::Result;
    use image::{ImageEncoder, RgbaImage};
    use std::path::Path;

    /// An NV21 frame that owns its bytes.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct OwnedFrame {
        pub data: Vec<Byte>,
        pub width: u32,
        pub height: u32,
    }

    impl OwnedFrame {
        pub fn view(&self) -> Result<Nv21Frame<'_>> {
            Nv21Frame::new(&self.data, self.width, self.height)
        }
    }

    /// Encodes an RGBA image as NV21, dropping a trailing odd row or column.
    pub fn rgba_to_nv21(image: &RgbaImage) -> Result<OwnedFrame> {
        let width = image.width() & !1;
        let height = image.height() & !1;
        let cropped = image::imageops::crop_imm(image, 0, 0, width, height).to_image();
        let data = encode_nv21(cropped.as_raw(), width, height)?;
        Ok(OwnedFrame {
            data,
            width,
            height,
        })
    }

    /// Loads any image format the `image` crate understands and encodes it as NV21.
    pub fn load_nv21(path: impl AsRef<Path>) -> Result<OwnedFrame> {
        let image = image::open(path)?.to_rgba8();
        rgba_to_nv21(&image)
    }

    /// Decodes an NV21 frame and writes it out as a PNG.
    pub fn save(path: impl AsRef<Path>, frame: &Nv21Frame<'_>) -> Result<()> {
        let output = std::fs::File::create(path).map_err(image::ImageError::IoError)?;
        let encoder = image::codecs::png::PngEncoder::new(output);
        let rgba = frame.to_rgba();
        debug_assert_eq!(rgba.len(), (frame.width() * frame.height()) as usize * CHANNELS);

        encoder.write_image(&rgba, frame.width(), frame.height(), image::ExtendedColorType::Rgba8)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::image_helper::*;
    use crate::core_modules::pixel::pixel::Pixel;
    use image::{Rgba, RgbaImage};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("color_vision_{}_{}", std::process::id(), name))
    }

    #[test]
    fn odd_edges_are_cropped() {
        let image = RgbaImage::from_pixel(7, 5, Rgba([10, 20, 30, 255]));
        let frame = rgba_to_nv21(&image).expect("Error encoding frame.");
        assert_eq!((frame.width, frame.height), (6, 4));
        assert_eq!(frame.data.len(), 6 * 4 * 3 / 2);
    }

    #[test]
    fn save_and_reload_solid_frame() {
        let image = RgbaImage::from_pixel(16, 12, Rgba([0, 0, 255, 255]));
        let frame = rgba_to_nv21(&image).expect("Error encoding frame.");
        let path = temp_path("solid_blue.png");

        save(&path, &frame.view().unwrap()).expect("Error Saving File.");
        let reloaded = load_nv21(&path).expect("Error Loading File.");
        std::fs::remove_file(&path).ok();

        assert_eq!((reloaded.width, reloaded.height), (16, 12));
        let pixel = reloaded.view().unwrap().pixel_at(8, 6).unwrap();
        let expected = Pixel::rgb(0, 0, 255);
        assert!((pixel.blue as i16 - expected.blue as i16).abs() <= 3);
        assert!(pixel.red <= 3 && pixel.green <= 3);
    }

    #[test]
    fn save_gradient_file() {
        let mut image = RgbaImage::new(32, 32);
        for (x, _y, pixel) in image.enumerate_pixels_mut() {
            let intensity = (x * 8) as u8;
            *pixel = Rgba([intensity, intensity, intensity, 255]);
        }
        let frame = rgba_to_nv21(&image).expect("Error encoding frame.");
        let path = temp_path("gradient.png");

        save(&path, &frame.view().unwrap()).expect("Error Saving File.");
        let written = image::open(&path).expect("Error Loading File.").to_rgba8();
        std::fs::remove_file(&path).ok();

        assert_eq!(written.dimensions(), (32, 32));
        assert!(written.get_pixel(0, 0)[0] < written.get_pixel(31, 0)[0]);
    }

    #[test]
    fn missing_files_surface_image_errors() {
        let result = load_nv21(temp_path("does_not_exist.png"));
        assert!(matches!(result, Err(crate::error::ColorError::Image(_))));
    }
}
