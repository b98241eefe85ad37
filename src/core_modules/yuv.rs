// THEORY:
// The `yuv` module is the bridge between the camera's native preview format and
// the RGB world the rest of the pipeline works in. Camera callbacks deliver NV21
// (YUV 4:2:0 semi-planar) buffers: a full-resolution luma plane followed by one
// interleaved V/U pair for every 2x2 block of luma samples.
//
//   offset 0                    : Y[0..width*height]
//   offset width*height         : V U V U ... (height/2 rows of `width` bytes)
//
// For pixel (x, y) the chroma pair lives at
//   width*height + width*(y >> 1) + (x & !1)
// with V first and U second.
//
// Decoding uses the BT.601 full-range coefficients and rounds to nearest before
// clamping. `Nv21Frame` validates the buffer shape once at construction so every
// later read is guaranteed to be inside the buffer; pixel coordinates are still
// checked individually and reported as `OutOfRange`.
//
// The inverse transform (`rgb_to_yuv`, `encode_nv21`) exists so still images and
// synthetic test frames can be pushed through exactly the same decode path as a
// live camera frame.

use crate::core_modules::pixel::pixel::{Byte, CHANNELS, ComputedChannel, Pixel, clamp_channel};
use crate::error::{ColorError, Result};

const CHROMA_OFFSET: ComputedChannel = 128.0;

const RED_FROM_V: ComputedChannel = 1.402;
const GREEN_FROM_U: ComputedChannel = 0.344;
const GREEN_FROM_V: ComputedChannel = 0.714;
const BLUE_FROM_U: ComputedChannel = 1.772;

/// Number of bytes in an NV21 frame of the given luma resolution.
pub fn nv21_len(width: u32, height: u32) -> usize {
    let luma = width as usize * height as usize;
    luma + luma / 2
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 || width % 2 != 0 || height % 2 != 0 {
        return Err(ColorError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Decodes one luma sample and its chroma pair into an opaque RGB pixel.
pub fn yuv_to_rgb(luma: Byte, u: Byte, v: Byte) -> Pixel {
    let y = luma as ComputedChannel;
    let u = u as ComputedChannel - CHROMA_OFFSET;
    let v = v as ComputedChannel - CHROMA_OFFSET;

    Pixel::from_computed(
        y + RED_FROM_V * v,
        y - GREEN_FROM_U * u - GREEN_FROM_V * v,
        y + BLUE_FROM_U * u,
    )
}

/// BT.601 full-range forward transform, returned as `(y, u, v)`.
pub fn rgb_to_yuv(pixel: &Pixel) -> (Byte, Byte, Byte) {
    let (y, u, v) = rgb_to_yuv_computed(pixel);
    (clamp_channel(y), clamp_channel(u), clamp_channel(v))
}

fn rgb_to_yuv_computed(pixel: &Pixel) -> (ComputedChannel, ComputedChannel, ComputedChannel) {
    let r = pixel.red as ComputedChannel;
    let g = pixel.green as ComputedChannel;
    let b = pixel.blue as ComputedChannel;

    let y = pixel.luminance();
    let u = -0.168_736 * r - 0.331_264 * g + 0.5 * b + CHROMA_OFFSET;
    let v = 0.5 * r - 0.418_688 * g - 0.081_312 * b + CHROMA_OFFSET;
    (y, u, v)
}

/// A borrowed, shape-checked view over one NV21 frame.
#[derive(Debug, Clone, Copy)]
pub struct Nv21Frame<'a> {
    data: &'a [Byte],
    width: u32,
    height: u32,
}

impl<'a> Nv21Frame<'a> {
    /// Wraps `data`, rejecting odd or zero dimensions and buffers of the wrong length.
    pub fn new(data: &'a [Byte], width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;

        let expected = nv21_len(width, height);
        if data.len() != expected {
            return Err(ColorError::MalformedFrame {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &'a [Byte] {
        self.data
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// The RGB value of the pixel at `(x, y)`.
    pub fn pixel_at(&self, x: u32, y: u32) -> Result<Pixel> {
        if !self.contains(x, y) {
            return Err(ColorError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.decode(x as usize, y as usize))
    }

    /// Decodes one full row, left to right.
    pub fn row(&self, y: u32) -> Result<impl Iterator<Item = Pixel> + '_> {
        if y >= self.height {
            return Err(ColorError::OutOfRange {
                x: 0,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((0..self.width as usize).map(move |x| self.decode(x, y as usize)))
    }

    /// Decodes the whole frame into a row-major RGBA8 buffer.
    pub fn to_rgba(&self) -> Vec<Byte> {
        let mut rgba = Vec::with_capacity(self.width as usize * self.height as usize * CHANNELS);
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                let bytes: [Byte; CHANNELS] = self.decode(x, y).into();
                rgba.extend_from_slice(&bytes);
            }
        }
        rgba
    }

    // Callers guarantee `x < width` and `y < height`; the buffer length was
    // checked in `new`, so every index below is in bounds.
    fn decode(&self, x: usize, y: usize) -> Pixel {
        let width = self.width as usize;
        let height = self.height as usize;

        let luma = self.data[y * width + x];
        let chroma = width * height + width * (y >> 1) + (x & !1);
        let v = self.data[chroma];
        let u = self.data[chroma + 1];

        yuv_to_rgb(luma, u, v)
    }
}

/// Encodes a row-major RGBA8 buffer as NV21.
///
/// Luma is computed per pixel; each chroma pair is the mean over its 2x2 block.
pub fn encode_nv21(rgba: &[Byte], width: u32, height: u32) -> Result<Vec<Byte>> {
    check_dimensions(width, height)?;

    let expected = width as usize * height as usize * CHANNELS;
    if rgba.len() != expected {
        return Err(ColorError::MalformedFrame {
            expected,
            actual: rgba.len(),
        });
    }

    let width = width as usize;
    let height = height as usize;
    let pixel = |x: usize, y: usize| {
        let start = (y * width + x) * CHANNELS;
        Pixel::rgb(rgba[start], rgba[start + 1], rgba[start + 2])
    };

    let mut frame = Vec::with_capacity(nv21_len(width as u32, height as u32));

    for y in 0..height {
        for x in 0..width {
            frame.push(rgb_to_yuv(&pixel(x, y)).0);
        }
    }

    for block_y in (0..height).step_by(2) {
        for block_x in (0..width).step_by(2) {
            let mut sum_u = 0.0;
            let mut sum_v = 0.0;
            for (x, y) in [
                (block_x, block_y),
                (block_x + 1, block_y),
                (block_x, block_y + 1),
                (block_x + 1, block_y + 1),
            ] {
                let (_, u, v) = rgb_to_yuv_computed(&pixel(x, y));
                sum_u += u;
                sum_v += v;
            }
            frame.push(clamp_channel(sum_v / 4.0));
            frame.push(clamp_channel(sum_u / 4.0));
        }
    }

    Ok(frame)
}
