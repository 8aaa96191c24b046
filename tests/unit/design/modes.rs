use super::*;

#[test]
fn style_aliases_resolve() {
    assert_eq!(StyleMode::parse("misty_gradient"), StyleMode::MistyGradient);
    assert_eq!(StyleMode::parse(" Ocean-Motion "), StyleMode::OceanMotion);
    assert_eq!(StyleMode::parse("flowing paint"), StyleMode::FlowingPaint);
    assert_eq!(StyleMode::parse("minimal"), StyleMode::CleanMinimal);
    assert_eq!(
        StyleMode::parse("Brutalist grid"),
        StyleMode::ShapeScatter(ScatterFlavor::BrutalistGrid)
    );
    assert_eq!(
        StyleMode::parse("Film mood"),
        StyleMode::ShapeScatter(ScatterFlavor::FilmMood)
    );
}

#[test]
fn unknown_style_falls_back_to_default() {
    assert_eq!(StyleMode::parse("vaporwave"), StyleMode::default());
    assert_eq!(StyleMode::parse(""), StyleMode::MistyGradient);
}

#[test]
fn style_as_str_round_trips() {
    for mode in [
        StyleMode::MistyGradient,
        StyleMode::OceanMotion,
        StyleMode::FlowingPaint,
        StyleMode::CleanMinimal,
        StyleMode::ShapeScatter(ScatterFlavor::Dreamy),
        StyleMode::ShapeScatter(ScatterFlavor::Cyberpunk),
        StyleMode::ShapeScatter(ScatterFlavor::FilmMood),
        StyleMode::ShapeScatter(ScatterFlavor::Shimmer),
        StyleMode::ShapeScatter(ScatterFlavor::BrutalistGrid),
    ] {
        assert_eq!(StyleMode::parse(mode.as_str()), mode);
    }
}

#[test]
fn focus_parsing_defaults_to_balanced() {
    assert_eq!(TypographyFocus::parse("bottom"), TypographyFocus::BottomFocused);
    assert_eq!(TypographyFocus::parse("Large Title"), TypographyFocus::LargeTitle);
    assert_eq!(TypographyFocus::parse("top-balanced"), TypographyFocus::Balanced);
    assert_eq!(TypographyFocus::parse("diagonal"), TypographyFocus::Balanced);
}

#[test]
fn motifs_follow_fixed_order_and_dedupe() {
    let got = CityMotif::from_keywords(&["Paris at dusk", "TOKYO", "tokyo tower"]);
    assert_eq!(got, vec![CityMotif::VerticalLines, CityMotif::ArcRows]);

    let none = CityMotif::from_keywords(&["lisbon"]);
    assert!(none.is_empty());

    let seoul = CityMotif::from_keywords(&["seoul".to_string()]);
    assert_eq!(seoul, vec![CityMotif::PixelGrid]);
}
