use color_vision::core_modules::yuv::{encode_nv21, nv21_len, rgb_to_yuv};
use color_vision::{
    ColorError, ColorPipeline, Palette, PaletteEntry, Pixel, PipelineConfig, SampleRect,
};
use std::sync::Arc;

fn solid_nv21(width: u32, height: u32, color: Pixel) -> Vec<u8> {
    let (y, u, v) = rgb_to_yuv(&color);
    let luma = (width * height) as usize;
    let mut frame = vec![y; luma];
    for _ in 0..luma / 4 {
        frame.push(v);
        frame.push(u);
    }
    frame
}

fn within(actual: Pixel, expected: Pixel, tolerance: i16) -> bool {
    let close = |a: u8, b: u8| (a as i16 - b as i16).abs() <= tolerance;
    close(actual.red, expected.red)
        && close(actual.green, expected.green)
        && close(actual.blue, expected.blue)
}

fn pipeline() -> ColorPipeline {
    ColorPipeline::new(PipelineConfig::default())
}

#[test]
fn solid_red_frame_is_named_red() {
    let frame = solid_nv21(4, 4, Pixel::rgb(255, 0, 0));
    let report = pipeline()
        .classify_region(&frame, 4, 4, SampleRect::new(0, 0, 4, 4))
        .unwrap();

    assert_eq!(report.matched_name, "Red");
    assert!(report.category.is_none());
    assert!(within(report.averaged, Pixel::rgb(255, 0, 0), 1));
    assert_eq!(report.hex_code, report.averaged.hex_code());
}

#[test]
fn solid_red_frame_decodes_deterministically() {
    // BT.601 with these coefficients cannot hit (255, 0, 0) exactly; the nearest
    // encodable triple (76, 85, 255) decodes to (254, 0, 0).
    let frame = solid_nv21(4, 4, Pixel::rgb(255, 0, 0));
    assert_eq!(&frame[16..18], &[255, 85]);
    assert_eq!(frame[0], 76);

    let report = pipeline()
        .classify_region(&frame, 4, 4, SampleRect::full(4, 4))
        .unwrap();
    assert_eq!(report.averaged, Pixel::rgb(254, 0, 0));
    assert_eq!(report.hex_code, "#FE0000");
    assert!((report.distance - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn every_pixel_of_a_solid_frame_round_trips() {
    for color in [
        Pixel::rgb(255, 255, 0),
        Pixel::rgb(0, 128, 128),
        Pixel::rgb(75, 0, 130),
        Pixel::rgb(210, 180, 140),
    ] {
        let data = solid_nv21(6, 4, color);
        let frame = color_vision::Nv21Frame::new(&data, 6, 4).unwrap();
        for y in 0..4 {
            for x in 0..6 {
                let decoded = frame.pixel_at(x, y).unwrap();
                assert!(within(decoded, color, 2), "{decoded:?} vs {color:?}");
            }
        }
    }
}

#[test]
fn half_and_half_frame_averages_to_the_mean() {
    let mut rgba = Vec::new();
    for y in 0..8 {
        for _x in 0..8 {
            let color = if y < 4 { [0, 0, 0, 255] } else { [200, 200, 200, 255] };
            rgba.extend_from_slice(&color);
        }
    }
    let frame = encode_nv21(&rgba, 8, 8).unwrap();
    let report = pipeline()
        .classify_region(&frame, 8, 8, SampleRect::full(8, 8))
        .unwrap();
    assert!(within(report.averaged, Pixel::rgb(100, 100, 100), 1));
}

#[test]
fn classification_is_repeatable() {
    let frame = solid_nv21(8, 8, Pixel::rgb(46, 139, 87));
    let pipeline = pipeline();
    let first = pipeline
        .classify_region(&frame, 8, 8, SampleRect::new(2, 2, 6, 6))
        .unwrap();
    let second = pipeline
        .classify_region(&frame, 8, 8, SampleRect::new(2, 2, 6, 6))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn tie_goes_to_the_first_entry() {
    let palette = Arc::new(Palette::new(vec![
        PaletteEntry::new("Warm", 140, 128, 128),
        PaletteEntry::new("Cool", 128, 128, 140),
    ]));
    let pipeline = ColorPipeline::with_palette(PipelineConfig::default(), palette);
    let frame = solid_nv21(4, 4, Pixel::rgb(128, 128, 128));
    let report = pipeline
        .classify_region(&frame, 4, 4, SampleRect::full(4, 4))
        .unwrap();
    assert_eq!(report.averaged, Pixel::rgb(128, 128, 128));
    assert_eq!(report.matched_name, "Warm");
}

#[test]
fn empty_palette_fails() {
    let pipeline =
        ColorPipeline::with_palette(PipelineConfig::default(), Arc::new(Palette::empty()));
    let frame = solid_nv21(4, 4, Pixel::rgb(1, 2, 3));
    let result = pipeline.classify_region(&frame, 4, 4, SampleRect::full(4, 4));
    assert!(matches!(result, Err(ColorError::EmptyPalette)));
}

#[test]
fn degenerate_region_fails() {
    let frame = solid_nv21(4, 4, Pixel::rgb(1, 2, 3));
    let result = pipeline().classify_region(&frame, 4, 4, SampleRect::new(1, 0, 1, 4));
    assert!(matches!(result, Err(ColorError::InvalidRegion { .. })));
}

#[test]
fn short_buffer_is_a_malformed_frame() {
    let mut frame = solid_nv21(4, 4, Pixel::rgb(1, 2, 3));
    frame.truncate(nv21_len(4, 4) - 1);
    let result = pipeline().classify_region(&frame, 4, 4, SampleRect::full(4, 4));
    match result {
        Err(ColorError::MalformedFrame { expected, actual }) => {
            assert_eq!(expected, 24);
            assert_eq!(actual, 23);
        }
        other => panic!("expected MalformedFrame, got {other:?}"),
    }
}

#[test]
fn region_touching_both_edges_is_processed() {
    let frame = solid_nv21(6, 4, Pixel::rgb(0, 0, 255));
    let report = pipeline()
        .classify_region(&frame, 6, 4, SampleRect::new(3, 1, 6, 4))
        .unwrap();
    assert_eq!(report.matched_name, "Blue");
}
