// THEORY:
// The `region` module turns "the pixels under the view-port" into one color. It
// owns two things:
//
// 1.  **`SampleRect`**: the half-open window `[x1, x2) x [y1, y2)` a collaborator
//     wants sampled. Both axes use the same convention so a rectangle touching
//     the frame edge has `x2 == width` / `y2 == height`, and its area is simply
//     `(x2 - x1) * (y2 - y1)`.
// 2.  **`average_region`**: spatial pooling over that window. Averaging a block of
//     pixels cancels single-pixel sensor noise and gives a stable reading even when
//     the camera jitters.
//
// Channel sums are kept as exact integers and divided once at the end, rounding to
// nearest. Integer sums are associative, so the result does not depend on the order
// pixels are visited, and there is no truncation bias toward darker colors.

pub mod region {
    use crate::core_modules::pixel::pixel::{ComputedChannel, Pixel};
    use crate::core_modules::yuv::Nv21Frame;
    use crate::error::{ColorError, Result};
    use std::fmt;

    pub type Coordinate = u32;

    /// A half-open pixel window within a frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SampleRect {
        pub x1: Coordinate,
        pub y1: Coordinate,
        pub x2: Coordinate,
        pub y2: Coordinate,
    }

    impl SampleRect {
        pub fn new(x1: Coordinate, y1: Coordinate, x2: Coordinate, y2: Coordinate) -> Self {
            Self { x1, y1, x2, y2 }
        }

        /// The whole frame.
        pub fn full(width: Coordinate, height: Coordinate) -> Self {
            Self::new(0, 0, width, height)
        }

        /// A `width` x `height` window centred on the frame midpoint, clipped to the frame.
        pub fn centered(
            frame_width: Coordinate,
            frame_height: Coordinate,
            width: Coordinate,
            height: Coordinate,
        ) -> Self {
            let (x1, x2) = centered_span(frame_width, width);
            let (y1, y2) = centered_span(frame_height, height);
            Self::new(x1, y1, x2, y2)
        }

        pub fn width(&self) -> Coordinate {
            self.x2.saturating_sub(self.x1)
        }

        pub fn height(&self) -> Coordinate {
            self.y2.saturating_sub(self.y1)
        }

        /// Number of pixels covered.
        pub fn area(&self) -> u64 {
            self.width() as u64 * self.height() as u64
        }

        pub fn is_empty(&self) -> bool {
            self.x1 >= self.x2 || self.y1 >= self.y2
        }

        pub fn fits_within(&self, width: Coordinate, height: Coordinate) -> bool {
            self.x2 <= width && self.y2 <= height
        }

        /// Clamps every coordinate into the frame. The result may be empty.
        pub fn clipped_to(&self, width: Coordinate, height: Coordinate) -> Self {
            Self::new(
                self.x1.min(width),
                self.y1.min(height),
                self.x2.min(width),
                self.y2.min(height),
            )
        }

        /// Fails with `InvalidRegion` unless the rect is non-empty and inside the frame.
        pub fn validate(&self, width: Coordinate, height: Coordinate) -> Result<()> {
            if self.is_empty() || !self.fits_within(width, height) {
                return Err(ColorError::InvalidRegion {
                    rect: *self,
                    width,
                    height,
                });
            }
            Ok(())
        }
    }

    impl fmt::Display for SampleRect {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "({}, {})-({}, {})", self.x1, self.y1, self.x2, self.y2)
        }
    }

    fn centered_span(extent: Coordinate, size: Coordinate) -> (Coordinate, Coordinate) {
        let size = size.min(extent);
        let start = extent / 2 - size / 2;
        (start, start + size)
    }

    /// Averages the RGB value of every pixel in `rect`.
    pub fn average_region(frame: &Nv21Frame<'_>, rect: SampleRect) -> Result<Pixel> {
        rect.validate(frame.width(), frame.height())?;

        let mut sum_red = 0u64;
        let mut sum_green = 0u64;
        let mut sum_blue = 0u64;
        let mut count = 0u64;

        for y in rect.y1..rect.y2 {
            for x in rect.x1..rect.x2 {
                let pixel = frame.pixel_at(x, y)?;
                sum_red += pixel.red as u64;
                sum_green += pixel.green as u64;
                sum_blue += pixel.blue as u64;
                count += 1;
            }
        }
        debug_assert_eq!(count, rect.area());

        if count == 0 {
            return Err(ColorError::InvalidRegion {
                rect,
                width: frame.width(),
                height: frame.height(),
            });
        }

        let count = count as ComputedChannel;
        Ok(Pixel::from_computed(
            sum_red as ComputedChannel / count,
            sum_green as ComputedChannel / count,
            sum_blue as ComputedChannel / count,
        ))
    }
}
