use super::*;
use crate::design::palette::FALLBACK_PALETTE;
use crate::foundation::core::{Canvas, Rgb8};

#[test]
fn bands_stay_within_the_canvas_horizontally() {
    let mut rng = PosterRng::new(42);
    let bands = sample_bands(540.0, 960.0, 0.5, 3, &mut rng);
    assert_eq!(bands.len(), OCEAN_BANDS);
    for band in bands {
        assert!(band.rect.x0 >= 0.0);
        assert!(band.rect.x1 <= 540.0 + 1e-9);
        assert!(band.rect.width() >= 0.4 * 540.0);
        assert!((4.0..=13.0).contains(&band.rect.height()));
        assert!(band.palette_index < 3);
    }
}

#[test]
fn zero_intensity_bands_are_invisible_but_still_drawn() {
    let canvas = Canvas::new(90, 120).unwrap();
    let palette = Palette::new(FALLBACK_PALETTE.to_vec());
    let base = PosterFrame::filled(canvas, Rgb8::new(40, 80, 120)).unwrap();

    let mut styled = base.clone();
    let mut rng = PosterRng::new(9);
    apply_ocean(&mut styled, &palette, 0.0, &mut rng).unwrap();

    // Same draws, no bands painted.
    let mut expected = base;
    let mut rng = PosterRng::new(9);
    let _ = sample_bands(90.0, 120.0, canvas.scale(), palette.len(), &mut rng);
    blur_scaled(&mut expected, OCEAN_BLUR).unwrap();
    apply_noise(&mut expected, OCEAN_NOISE, &mut rng);

    assert_eq!(styled, expected);
}

#[test]
fn visible_bands_lighten_a_dark_frame() {
    let canvas = Canvas::new(90, 120).unwrap();
    let palette = Palette::new(vec![Rgb8::new(255, 255, 255)]);
    let base = PosterFrame::filled(canvas, Rgb8::new(0, 0, 0)).unwrap();
    let mut styled = base.clone();
    let mut rng = PosterRng::new(2);
    apply_ocean(&mut styled, &palette, 1.0, &mut rng).unwrap();

    let sum = |f: &PosterFrame| f.data.iter().map(|&v| u64::from(v)).sum::<u64>();
    assert!(sum(&styled) > sum(&base) + 90 * 120 * 10);
}
