// THEORY:
// The `Pixel` module is the most fundamental unit of the color pipeline. It is a
// "dumb" data container for one RGBA sample plus the handful of single-pixel
// conversions the rest of the system needs: packing into the host's ARGB integer,
// rendering the `#RRGGBB` hex code shown to users, and turning floating-point
// channel estimates back into bytes.
//
// Key principles:
// 1.  **Plain data**: A `Pixel` is `Copy` and carries no derived state. Everything
//     about it can be recomputed from the four bytes.
// 2.  **One rounding rule**: Any floating-point channel (a YUV decode, an average)
//     becomes a byte through `clamp_channel`, so rounding is consistent everywhere.

pub mod pixel {
    use std::fmt;

    pub type Byte = u8;
    pub type Channel = Byte;
    pub type ComputedChannel = f64;
    pub type Luminance = f64;
    pub type Argb = u32;

    pub const CHANNELS: usize = 4;
    pub const OPAQUE: Channel = 0xFF;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Default for Pixel {
        fn default() -> Self {
            Pixel {
                red: Channel::default(),
                green: Channel::default(),
                blue: Channel::default(),
                alpha: Channel::default(),
            }
        }
    }

    /// Rounds to nearest and clamps into the byte range.
    #[inline]
    pub fn clamp_channel(value: ComputedChannel) -> Channel {
        value.round().clamp(0.0, 255.0) as Channel
    }

    impl Pixel {
        pub fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// An opaque pixel.
        pub fn rgb(red: Channel, green: Channel, blue: Channel) -> Self {
            Self::new(red, green, blue, OPAQUE)
        }

        /// Builds an opaque pixel from unbounded channel estimates.
        pub fn from_computed(
            red: ComputedChannel,
            green: ComputedChannel,
            blue: ComputedChannel,
        ) -> Self {
            Self::rgb(clamp_channel(red), clamp_channel(green), clamp_channel(blue))
        }

        /// Luminance estimate (Rec. 601 luma).
        pub fn luminance(&self) -> Luminance {
            0.299 * self.red as f64 + 0.587 * self.green as f64 + 0.114 * self.blue as f64
        }

        /// Packs the pixel as `0xAARRGGBB`.
        pub fn argb(&self) -> Argb {
            (self.alpha as Argb) << 24
                | (self.red as Argb) << 16
                | (self.green as Argb) << 8
                | self.blue as Argb
        }

        /// `#RRGGBB`, uppercase, alpha omitted.
        pub fn hex_code(&self) -> String {
            format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        }
    }

    impl fmt::Display for Pixel {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.hex_code())
        }
    }

    impl From<[Byte; CHANNELS]> for Pixel {
        fn from(bytes: [Byte; CHANNELS]) -> Self {
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for [Byte; CHANNELS] {
        fn from(pixel: Pixel) -> Self {
            [pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::*;

    #[test]
    fn hex_code_is_uppercase_without_alpha() {
        assert_eq!(Pixel::new(0xAB, 0x0C, 0xFF, 0x10).hex_code(), "#AB0CFF");
        assert_eq!(Pixel::rgb(255, 0, 0).to_string(), "#FF0000");
    }

    #[test]
    fn argb_packs_alpha_first() {
        assert_eq!(Pixel::rgb(0x12, 0x34, 0x56).argb(), 0xFF12_3456);
    }

    #[test]
    fn computed_channels_round_and_clamp() {
        let pixel = Pixel::from_computed(254.5, -3.2, 300.0);
        assert_eq!(pixel, Pixel::rgb(255, 0, 255));
        assert_eq!(clamp_channel(0.49), 0);
        assert_eq!(clamp_channel(127.5), 128);
    }

    #[test]
    fn converts_to_and_from_rgba_bytes() {
        let pixel = Pixel::from([1, 2, 3, 4]);
        assert_eq!(pixel, Pixel::new(1, 2, 3, 4));
        let bytes: [Byte; CHANNELS] = pixel.into();
        assert_eq!(bytes, [1, 2, 3, 4]);
    }

    #[test]
    fn luminance_of_white_is_full_scale() {
        assert!((Pixel::rgb(255, 255, 255).luminance() - 255.0).abs() < 1e-9);
    }
}
