use super::*;

fn white_frame(w: u32, h: u32) -> PosterFrame {
    PosterFrame::filled(Canvas::new(w, h).unwrap(), Rgb8::new(255, 255, 255)).unwrap()
}

#[test]
fn empty_layer_leaves_frame_untouched() {
    let mut frame = white_frame(16, 16);
    let before = frame.clone();
    ShapeLayer::new(frame.canvas())
        .unwrap()
        .composite_onto(&mut frame)
        .unwrap();
    assert_eq!(frame, before);
}

#[test]
fn opaque_rect_covers_its_pixels_only() {
    let mut frame = white_frame(16, 16);
    let mut layer = ShapeLayer::new(frame.canvas()).unwrap();
    layer.fill_rect(Rect::new(4.0, 4.0, 12.0, 12.0), Rgb8::new(255, 0, 0), 255);
    layer.composite_onto(&mut frame).unwrap();

    assert_eq!(frame.pixel(8, 8), [255, 0, 0, 255]);
    assert_eq!(frame.pixel(1, 1), [255, 255, 255, 255]);
    assert!(frame.is_opaque());
}

#[test]
fn translucent_fill_blends() {
    let mut frame = white_frame(8, 8);
    let mut layer = ShapeLayer::new(frame.canvas()).unwrap();
    layer.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Rgb8::new(0, 0, 0), 128);
    layer.composite_onto(&mut frame).unwrap();
    let px = frame.pixel(4, 4);
    assert!(px[0] > 100 && px[0] < 160, "got {px:?}");
    assert_eq!(px[3], 255);
}

#[test]
fn zero_alpha_draws_nothing() {
    let mut frame = white_frame(8, 8);
    let before = frame.clone();
    let mut layer = ShapeLayer::new(frame.canvas()).unwrap();
    layer.fill_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Rgb8::new(0, 0, 0), 0);
    layer.composite_onto(&mut frame).unwrap();
    assert_eq!(frame, before);
}

#[test]
fn ribbon_needs_two_distinct_points() {
    assert!(ribbon(&[Point::new(1.0, 1.0)], 2.0).is_none());
    assert!(ribbon(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)], 2.0).is_none());
    assert!(ribbon(&[Point::new(0.0, 0.0), Point::new(0.0, 10.0)], 0.0).is_none());

    let path = ribbon(&[Point::new(5.0, 0.0), Point::new(5.0, 10.0)], 4.0).unwrap();
    let bbox = path.bounding_box();
    assert_eq!(bbox, Rect::new(3.0, 0.0, 7.0, 10.0));
}

#[test]
fn size_mismatch_is_an_error() {
    let layer = ShapeLayer::new(Canvas::new(4, 4).unwrap()).unwrap();
    let mut frame = white_frame(8, 8);
    assert!(layer.composite_onto(&mut frame).is_err());
}
