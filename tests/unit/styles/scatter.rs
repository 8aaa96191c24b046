use super::*;
use crate::foundation::core::Canvas;

#[test]
fn shape_count_follows_intensity() {
    assert_eq!(shape_count(0.0), 8);
    assert_eq!(shape_count(0.5), 34);
    assert_eq!(shape_count(1.0), 60);
}

#[test]
fn shapes_sample_documented_ranges() {
    let mut rng = PosterRng::new(4);
    let shapes = sample_shapes(1080.0, 1920.0, 1.0, 1.0, 3, &mut rng);
    assert_eq!(shapes.len(), 60);
    for s in &shapes {
        assert!((0.0..1080.0).contains(&s.center.x));
        assert!((0.0..1920.0).contains(&s.center.y));
        assert!((100.0..200.0).contains(&s.size));
        assert!((0.0..PI).contains(&s.rotation));
        assert!(s.palette_index < 3);
    }
    assert!(shapes.iter().any(|s| s.kind == ShapeKind::Triangle));
}

fn scatter(flavor: ScatterFlavor, seed: u64) -> PosterFrame {
    let canvas = Canvas::new(216, 384).unwrap();
    let palette = Palette::new(vec![Rgb8::new(30, 90, 160), Rgb8::new(220, 200, 120)]);
    let mut frame = PosterFrame::filled(canvas, Rgb8::new(10, 10, 10)).unwrap();
    let mut rng = PosterRng::new(seed);
    apply_shape_scatter(&mut frame, &palette, 0.5, flavor, &[], &mut rng).unwrap();
    frame
}

#[test]
fn film_mood_paints_an_opaque_border() {
    let frame = scatter(ScatterFlavor::FilmMood, 8);
    let bound = (SCATTER_NOISE * 255.0).floor() as i32;
    for (x, y) in [(1, 1), (214, 200), (100, 382)] {
        let px = frame.pixel(x, y);
        for (c, want) in px[..3].iter().zip(FILM_BORDER.to_array()) {
            assert!((i32::from(*c) - i32::from(want)).abs() <= bound, "{px:?} at {x},{y}");
        }
    }
}

#[test]
fn flavors_change_the_result() {
    let dreamy = scatter(ScatterFlavor::Dreamy, 8);
    for flavor in [
        ScatterFlavor::Cyberpunk,
        ScatterFlavor::FilmMood,
        ScatterFlavor::Shimmer,
        ScatterFlavor::BrutalistGrid,
    ] {
        assert_ne!(scatter(flavor, 8), dreamy, "{flavor:?}");
    }
}

#[test]
fn triangle_path_is_closed() {
    let shape = ScatterShape {
        kind: ShapeKind::Triangle,
        center: Point::new(50.0, 50.0),
        size: 20.0,
        palette_index: 0,
        rotation: 0.0,
    };
    let path = shape.path();
    assert_eq!(path.elements().len(), 4);
    assert!(matches!(path.elements()[3], kurbo::PathEl::ClosePath));
}
