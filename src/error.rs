// THEORY:
// Every failure the color pipeline can produce is local and synchronous: a frame
// with the wrong shape, a sample region that does not fit, a palette with nothing
// in it. None of them leave state behind, so callers simply drop the frame (or
// fix their setup) and move on. The enum below names each case explicitly so a
// caller never has to interpret a missing color name.

use crate::core_modules::region::region::SampleRect;
use thiserror::Error;

/// Errors surfaced by the color pipeline.
#[derive(Debug, Error)]
pub enum ColorError {
    /// The buffer length does not match `width * height * 3 / 2`.
    #[error("NV21 frame holds {actual} bytes but {expected} are required")]
    MalformedFrame { expected: usize, actual: usize },

    /// Frame dimensions are zero or odd, which 4:2:0 chroma indexing cannot handle.
    #[error("frame dimensions {width}x{height} must be positive and even")]
    InvalidDimensions { width: u32, height: u32 },

    /// The sample rectangle is degenerate or does not fit inside the frame.
    #[error("sample region {rect} is empty or outside the {width}x{height} frame")]
    InvalidRegion {
        rect: SampleRect,
        width: u32,
        height: u32,
    },

    /// A pixel read fell outside the frame.
    #[error("pixel ({x}, {y}) is outside the {width}x{height} frame")]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Classification was attempted against a palette with no entries.
    #[error("cannot classify against an empty palette")]
    EmptyPalette,

    /// The parallel worker pool has shut down.
    #[error("frame worker pool is no longer accepting work")]
    WorkerUnavailable,

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl ColorError {
    /// True for both flavours of a badly shaped frame.
    pub fn is_malformed_frame(&self) -> bool {
        matches!(
            self,
            ColorError::MalformedFrame { .. } | ColorError::InvalidDimensions { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;
