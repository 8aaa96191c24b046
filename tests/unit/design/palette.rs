use super::*;

fn entries(json: &str) -> Vec<PaletteEntry> {
    serde_json::from_str(json).unwrap()
}

#[test]
fn hex_white_parses() {
    assert_eq!(
        PaletteEntry::hex("#FFFFFF").to_rgb(),
        Some(Rgb8::new(255, 255, 255))
    );
}

#[test]
fn hex_variants_parse() {
    assert_eq!(PaletteEntry::hex("112233").to_rgb(), Some(Rgb8::new(0x11, 0x22, 0x33)));
    assert_eq!(PaletteEntry::hex("#abc").to_rgb(), Some(Rgb8::new(0xAA, 0xBB, 0xCC)));
    assert_eq!(
        PaletteEntry::hex("#11223380").to_rgb(),
        Some(Rgb8::new(0x11, 0x22, 0x33))
    );
    assert_eq!(PaletteEntry::hex("#12345").to_rgb(), None);
    assert_eq!(PaletteEntry::hex("#GG0000").to_rgb(), None);
    assert_eq!(PaletteEntry::hex("").to_rgb(), None);
}

#[test]
fn normalized_and_scaled_triples_are_distinguished() {
    let parsed = entries("[[1.0, 0.0, 0.5], [255, 0, 128]]");
    let palette = normalize_palette(&parsed, None);
    assert_eq!(
        palette.colors(),
        &[Rgb8::new(255, 0, 128), Rgb8::new(255, 0, 128)]
    );
}

#[test]
fn ambiguous_unit_triple_is_white() {
    let parsed = entries("[[1, 1, 1]]");
    assert_eq!(
        normalize_palette(&parsed, None).colors(),
        &[Rgb8::new(255, 255, 255)]
    );
}

#[test]
fn tagged_entries_bypass_heuristic() {
    let parsed = entries(r#"[{"byte": [1, 1, 1]}, {"unit": [0.2, 0.4, 1.0]}]"#);
    assert_eq!(
        normalize_palette(&parsed, None).colors(),
        &[Rgb8::new(1, 1, 1), Rgb8::new(51, 102, 255)]
    );
}

#[test]
fn out_of_range_components_are_clamped() {
    let parsed = entries("[[300, -20, 12.4]]");
    assert_eq!(
        normalize_palette(&parsed, None).colors(),
        &[Rgb8::new(255, 0, 12)]
    );
}

#[test]
fn malformed_entries_are_dropped_in_order() {
    let parsed = entries(r##"["#000000", "nope", [0.5], {"x": 1}, null, "#FFFFFF"]"##);
    assert_eq!(
        normalize_palette(&parsed, None).colors(),
        &[Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)]
    );
}

#[test]
fn empty_palette_uses_fallback() {
    let palette = normalize_palette(&[], None);
    assert!(palette.len() >= 2);
    assert_eq!(palette.colors(), &FALLBACK_PALETTE);

    let ocean = normalize_palette(&[], Some(StyleMode::OceanMotion));
    assert_eq!(ocean.len(), 3);
    assert_ne!(ocean.colors(), &FALLBACK_PALETTE);
}

#[test]
fn single_color_duplicates_for_gradient() {
    let palette = Palette::new(vec![Rgb8::new(9, 8, 7)]);
    assert_eq!(
        palette.gradient_stops(),
        vec![Rgb8::new(9, 8, 7), Rgb8::new(9, 8, 7)]
    );
    assert_eq!(palette.cyclic(5), Rgb8::new(9, 8, 7));
}
