use super::*;
use crate::foundation::core::{Canvas, Rgb8};
use crate::render::frame::PosterFrame;

fn palette() -> Palette {
    Palette::new(vec![
        Rgb8::new(250, 0, 0),
        Rgb8::new(0, 250, 0),
        Rgb8::new(0, 0, 250),
    ])
}

fn draw(motifs: &[CityMotif], canvas: Canvas) -> PosterFrame {
    let mut frame = PosterFrame::filled(canvas, Rgb8::new(0, 0, 0)).unwrap();
    let mut layer = ShapeLayer::new(canvas).unwrap();
    let (w, h) = (f64::from(canvas.width), f64::from(canvas.height));
    draw_motifs(&mut layer, motifs, &palette(), w, h, canvas.scale());
    layer.composite_onto(&mut frame).unwrap();
    frame
}

#[test]
fn no_motifs_leave_the_frame_untouched() {
    let canvas = Canvas::new(120, 96).unwrap();
    let frame = draw(&[], canvas);
    assert!(frame.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
}

#[test]
fn pixel_grid_uses_third_palette_color() {
    let canvas = Canvas::new(1080, 96).unwrap();
    let frame = draw(&[CityMotif::PixelGrid], canvas);
    let square = frame.pixel(23, 23);
    assert_eq!(square[0], 0);
    assert!(square[2] > 100);
    assert_eq!(frame.pixel(10, 10), [0, 0, 0, 255]);
}

#[test]
fn vertical_lines_use_second_palette_color() {
    let canvas = Canvas::new(1080, 40).unwrap();
    let frame = draw(&[CityMotif::VerticalLines], canvas);
    let line = frame.pixel(90, 20);
    assert!(line[1] > 80);
    assert_eq!(frame.pixel(45, 20), [0, 0, 0, 255]);
}

#[test]
fn arc_rows_stay_in_the_lower_half() {
    let canvas = Canvas::new(160, 200).unwrap();
    let frame = draw(&[CityMotif::ArcRows], canvas);
    for y in 0..80 {
        for x in 0..160 {
            assert_eq!(frame.pixel(x, y), [0, 0, 0, 255], "at {x},{y}");
        }
    }
    assert!((100..200).any(|y| (0..160).any(|x| frame.pixel(x, y)[0] > 0)));
}
