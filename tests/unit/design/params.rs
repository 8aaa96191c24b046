use super::*;
use crate::design::modes::ScatterFlavor;
use crate::foundation::core::Rgb8;

const ANALYZER_JSON: &str = r##"{
  "title": "Seoul Nights",
  "subtitle": "neon on wet asphalt",
  "mood": "electric calm",
  "intensity": 0.8,
  "palette": ["#112233", "#AABBCC"],
  "style_mode": "ocean_motion",
  "city_keywords": ["seoul"],
  "typography_focus": "bottom_focused"
}"##;

#[test]
fn parses_full_contract() {
    let p = DesignParameters::from_json_str(ANALYZER_JSON).unwrap();
    assert_eq!(p.title, "Seoul Nights");
    assert_eq!(p.intensity, Some(0.8));
    assert_eq!(p.palette.len(), 2);

    let d = p.resolve();
    assert_eq!(d.style, StyleMode::OceanMotion);
    assert_eq!(d.focus, TypographyFocus::BottomFocused);
    assert_eq!(
        d.palette.colors(),
        &[Rgb8::new(0x11, 0x22, 0x33), Rgb8::new(0xAA, 0xBB, 0xCC)]
    );
    assert_eq!(d.motifs, vec![CityMotif::PixelGrid]);
}

#[test]
fn missing_and_malformed_fields_get_defaults() {
    let p = DesignParameters::from_json_str(
        r#"{"title": null, "intensity": "lots", "palette": 7, "city_keywords": [1, "rome"], "styleMode": 3}"#,
    )
    .unwrap();
    let d = p.resolve();
    assert_eq!(d.title, DEFAULT_TITLE);
    assert_eq!(d.subtitle, DEFAULT_SUBTITLE);
    assert_eq!(d.intensity, DEFAULT_INTENSITY);
    assert!(d.palette.len() >= 2);
    assert_eq!(d.city_keywords, vec!["rome".to_string()]);
    assert_eq!(d.style, StyleMode::MistyGradient);
}

#[test]
fn intensity_is_clamped() {
    let hi = DesignParameters {
        intensity: Some(1.5),
        ..DesignParameters::default()
    };
    let lo = DesignParameters {
        intensity: Some(-0.3),
        ..DesignParameters::default()
    };
    assert_eq!(hi.resolve().intensity, 1.0);
    assert_eq!(lo.resolve().intensity, 0.0);

    let numeric_string = DesignParameters::from_json_str(r#"{"intensity": " 0.25 "}"#).unwrap();
    assert_eq!(numeric_string.resolve().intensity, 0.25);
}

#[test]
fn aliases_are_accepted() {
    let p = DesignParameters::from_json_str(
        r#"{"color_palette": [[0.0, 0.0, 1.0]], "cityKeywords": "tokyo", "typographyFocus": "large_title", "styleMode": "Shimmer"}"#,
    )
    .unwrap();
    let d = p.resolve();
    assert_eq!(d.palette.colors(), &[Rgb8::new(0, 0, 255)]);
    assert_eq!(d.motifs, vec![CityMotif::VerticalLines]);
    assert_eq!(d.focus, TypographyFocus::LargeTitle);
    assert_eq!(d.style, StyleMode::ShapeScatter(ScatterFlavor::Shimmer));
}

#[test]
fn non_object_json_is_rejected() {
    assert!(DesignParameters::from_json_str("[1, 2]").is_err());
    assert!(DesignParameters::from_json_str("not json").is_err());
    assert!(DesignParameters::from_json_str("\"Seoul\"").is_err());

    // A positional array must not fill the struct field by field.
    let positional = r##"["Seoul", "Rain", "sad", 0.9, ["#112233"], "ocean_motion"]"##;
    let err = DesignParameters::from_json_str(positional).unwrap_err();
    assert!(matches!(err, crate::PosterError::Serde(_)));
    assert!(DesignParameters::from_reader(positional.as_bytes()).is_err());
}

#[test]
fn canonical_key_wins_over_alias() {
    let p = DesignParameters::from_json_str(
        r##"{"style_mode": "ocean_motion", "styleMode": "cyberpunk",
            "palette": ["#112233"], "color_palette": ["#FFFFFF"],
            "city_keywords": ["rome"], "cityKeywords": ["tokyo"],
            "typography_focus": "large_title", "typographyFocus": "bottom_focused"}"##,
    )
    .unwrap();
    let d = p.resolve();
    assert_eq!(d.style, StyleMode::OceanMotion);
    assert_eq!(d.palette.colors(), &[Rgb8::new(0x11, 0x22, 0x33)]);
    assert_eq!(d.motifs, vec![CityMotif::ArcRows]);
    assert_eq!(d.focus, TypographyFocus::LargeTitle);

    let same = DesignParameters::from_json_str(
        r#"{"style_mode": "ocean_motion", "styleMode": "ocean_motion"}"#,
    )
    .unwrap();
    assert_eq!(same.resolve().style, StyleMode::OceanMotion);
}

#[test]
fn reply_with_code_fence_is_parsed() {
    let reply = format!("Here you go:\n```json\n{ANALYZER_JSON}\n```\nEnjoy!");
    let p = DesignParameters::from_reply(&reply).unwrap();
    assert_eq!(p.title, "Seoul Nights");

    let bare = format!("  {ANALYZER_JSON}  ");
    assert_eq!(DesignParameters::from_reply(&bare).unwrap(), p);

    assert!(DesignParameters::from_reply("sorry, I cannot help").is_err());
}

#[test]
fn serialization_round_trips_through_json() {
    let p = DesignParameters::from_json_str(ANALYZER_JSON).unwrap();
    let json = serde_json::to_string(&p).unwrap();
    let back = DesignParameters::from_json_str(&json).unwrap();
    assert_eq!(back, p);
}
