use super::*;
use crate::design::palette::FALLBACK_PALETTE;
use crate::foundation::core::{Canvas, Rgb8};

#[test]
fn segment_alpha_fades_toward_the_bottom() {
    assert_eq!(segment_alpha(1.0, 0), 140);
    assert_eq!(segment_alpha(0.0, 0), 40);
    assert_eq!(segment_alpha(1.0, 12), 70);
    for k in 1..PAINT_SEGMENTS {
        assert!(segment_alpha(0.7, k) <= segment_alpha(0.7, k - 1));
    }
}

#[test]
fn strokes_sample_documented_ranges() {
    let mut rng = PosterRng::new(42);
    let strokes = sample_strokes(1080.0, 1920.0, 1.0, 5, &mut rng);
    assert_eq!(strokes.len(), PAINT_STROKES);
    for s in strokes {
        assert!((0.0..1080.0).contains(&s.x0));
        assert!((0.0..std::f64::consts::TAU).contains(&s.phase));
        assert!((0.15 * 1920.0..0.45 * 1920.0).contains(&s.wavelength));
        assert!((6.0..=18.0).contains(&s.width));
        assert!(s.palette_index < 5);
    }
}

#[test]
fn stroke_offset_is_bounded_by_amplitude() {
    let s = PaintStroke {
        x0: 100.0,
        phase: 0.3,
        wavelength: 250.0,
        width: 10.0,
        palette_index: 0,
    };
    for y in 0..500 {
        assert!((s.x_at(f64::from(y), 30.0) - 100.0).abs() <= 30.0 + 1e-9);
    }
}

#[test]
fn paint_is_seeded() {
    let canvas = Canvas::new(80, 120).unwrap();
    let palette = Palette::new(FALLBACK_PALETTE.to_vec());
    let run = |seed| {
        let mut frame = PosterFrame::filled(canvas, Rgb8::new(20, 20, 20)).unwrap();
        let mut rng = PosterRng::new(seed);
        apply_flowing_paint(&mut frame, &palette, 0.6, &mut rng).unwrap();
        frame
    };
    assert_eq!(run(1), run(1));
    assert_ne!(run(1), run(2));
}
