// THEORY:
// This file is the main entry point for the `color_vision` library crate. It
// exports the `ColorPipeline` and its associated data structures (`PipelineConfig`,
// `ColorReport`, `SampleRect`, ...) as the high-level interface: hand it an NV21
// camera frame and a sample rectangle, get back the name of the closest color.
//
// The building blocks live in `core_modules` and stay public for callers that
// need a single stage (decoding a frame for display, classifying an RGB value
// picked some other way). `parallel_pipeline` layers a tokio worker pool on top
// for callers that classify many frames at once.

pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;

pub use core_modules::palette::{Palette, PaletteEntry, PaletteKind};
pub use core_modules::pixel::pixel::Pixel;
pub use core_modules::region::region::SampleRect;
pub use core_modules::yuv::Nv21Frame;
pub use error::{ColorError, Result};
pub use parallel_pipeline::{FrameRequest, ParallelPipeline};
pub use pipeline::{ColorPipeline, ColorReport, PipelineConfig, RegionPolicy};
