// THEORY:
// The `pipeline` module is the top-level API for the color engine. It composes the
// full stack into one call: a camera collaborator hands over an NV21 frame and a
// sample rectangle, and gets back the name of the closest reference color.
//
//   frame bytes ─► Nv21Frame (shape check) ─► SampleRect (region policy)
//               ─► average_region ─► classify ─► ColorReport
//
// A `ColorPipeline` holds only its configuration and an `Arc` to an immutable
// palette. It never keeps a frame past the call that received it, so one pipeline
// can be cloned freely and used from as many threads as there are frames.

use crate::core_modules::classifier::{self, Distance};
use crate::core_modules::palette::{self, Palette};
use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::region::region::{Coordinate, SampleRect, average_region};
use crate::core_modules::yuv::Nv21Frame;
use crate::error::Result;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

// Re-export key data structures for the public API.
pub use crate::core_modules::classifier::Classification;
pub use crate::core_modules::palette::{PaletteEntry, PaletteKind};

const DEFAULT_FRAME_WIDTH: Coordinate = 640;
const DEFAULT_FRAME_HEIGHT: Coordinate = 480;
const DEFAULT_SAMPLE_SIZE: Coordinate = 32;

/// What to do with a sample rectangle that does not fit the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionPolicy {
    /// Reject it with `InvalidRegion`.
    #[default]
    Strict,
    /// Clip it to the frame first; only a rectangle that is empty after clipping fails.
    Clip,
}

/// Configuration for the ColorPipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Preview frame width used by `classify_center`.
    pub frame_width: Coordinate,
    /// Preview frame height used by `classify_center`.
    pub frame_height: Coordinate,
    /// Width of the centred view-port sampled by `classify_center`.
    pub sample_width: Coordinate,
    /// Height of the centred view-port sampled by `classify_center`.
    pub sample_height: Coordinate,
    pub palette: PaletteKind,
    pub region_policy: RegionPolicy,
    /// Number of workers used by the parallel pipeline.
    pub worker_count: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
            sample_width: DEFAULT_SAMPLE_SIZE,
            sample_height: DEFAULT_SAMPLE_SIZE,
            palette: PaletteKind::default(),
            region_policy: RegionPolicy::default(),
            worker_count: num_cpus::get(),
        }
    }
}

impl PipelineConfig {
    pub fn with_frame_size(mut self, width: Coordinate, height: Coordinate) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }

    pub fn with_sample_size(mut self, width: Coordinate, height: Coordinate) -> Self {
        self.sample_width = width;
        self.sample_height = height;
        self
    }

    pub fn with_palette(mut self, palette: PaletteKind) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_region_policy(mut self, region_policy: RegionPolicy) -> Self {
        self.region_policy = region_policy;
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// The centred view-port inside the configured frame.
    pub fn sample_rect(&self) -> SampleRect {
        SampleRect::centered(
            self.frame_width,
            self.frame_height,
            self.sample_width,
            self.sample_height,
        )
    }
}

/// The result of classifying one sample region.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorReport {
    pub matched_name: String,
    pub category: Option<String>,
    /// The averaged color of the region.
    pub averaged: Pixel,
    /// `#RRGGBB` of `averaged`.
    pub hex_code: String,
    /// Mean squared error between `averaged` and the matched entry.
    pub distance: Distance,
}

impl ColorReport {
    fn from_classification(averaged: Pixel, classification: &Classification<'_>) -> Self {
        Self {
            matched_name: classification.entry.name.clone(),
            category: classification.entry.category.clone(),
            averaged,
            hex_code: averaged.hex_code(),
            distance: classification.distance,
        }
    }

    /// `"name (category)"` when a category is known.
    pub fn display_name(&self) -> String {
        palette::labelled(&self.matched_name, self.category.as_deref())
    }
}

impl fmt::Display for ColorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_name(), self.hex_code)
    }
}

/// The main, top-level struct for the color engine.
#[derive(Debug, Clone)]
pub struct ColorPipeline {
    config: PipelineConfig,
    palette: Arc<Palette>,
}

impl ColorPipeline {
    /// Uses the process-wide instance of the configured built-in palette.
    pub fn new(config: PipelineConfig) -> Self {
        let palette = Palette::shared(config.palette);
        Self::with_palette(config, palette)
    }

    /// Uses a caller-supplied palette; `config.palette` is ignored.
    pub fn with_palette(config: PipelineConfig, palette: Arc<Palette>) -> Self {
        Self { config, palette }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Averages `rect` of an NV21 frame and names the result.
    pub fn classify_region(
        &self,
        frame: &[u8],
        width: Coordinate,
        height: Coordinate,
        rect: SampleRect,
    ) -> Result<ColorReport> {
        let frame = Nv21Frame::new(frame, width, height)?;
        let rect = self.resolve_region(rect, width, height)?;

        let averaged = average_region(&frame, rect)?;
        let report = self.classify_rgb(averaged)?;
        debug!(%rect, averaged = %report.hex_code, name = %report.matched_name, "classified region");
        Ok(report)
    }

    /// Samples the configured centred view-port of a frame at the configured size.
    pub fn classify_center(&self, frame: &[u8]) -> Result<ColorReport> {
        self.classify_region(
            frame,
            self.config.frame_width,
            self.config.frame_height,
            self.config.sample_rect(),
        )
    }

    /// Names an already averaged color.
    pub fn classify_rgb(&self, averaged: Pixel) -> Result<ColorReport> {
        let classification = classifier::classify(&averaged, &self.palette)?;
        Ok(ColorReport::from_classification(averaged, &classification))
    }

    /// The `count` closest palette entries to `color`.
    pub fn nearest(&self, color: &Pixel, count: usize) -> Vec<Classification<'_>> {
        classifier::rank(color, &self.palette, count)
    }

    fn resolve_region(
        &self,
        rect: SampleRect,
        width: Coordinate,
        height: Coordinate,
    ) -> Result<SampleRect> {
        let rect = match self.config.region_policy {
            RegionPolicy::Strict => rect,
            RegionPolicy::Clip => {
                let clipped = rect.clipped_to(width, height);
                if clipped != rect {
                    warn!(requested = %rect, clipped = %clipped, "sample region clipped to frame");
                }
                clipped
            }
        };
        rect.validate(width, height)?;
        Ok(rect)
    }
}
