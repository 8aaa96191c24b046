use crate::analyze::{Analyzer, require_input};
use crate::design::modes::{StyleMode, TypographyFocus};
use crate::design::palette::PaletteEntry;
use crate::design::params::{DEFAULT_INTENSITY, DesignParameters};
use crate::foundation::error::PosterResult;

struct MoodRule {
    triggers: &'static [&'static str],
    palette: [&'static str; 3],
    style: StyleMode,
    mood: &'static str,
}

const RULES: [MoodRule; 3] = [
    MoodRule {
        triggers: &["rain", "fog", "雾", "雨", "sad", "lonely", "寂寞"],
        palette: ["#7FA2C8", "#E7EDF5", "#405B88"],
        style: StyleMode::MistyGradient,
        mood: "melancholic soft",
    },
    MoodRule {
        triggers: &["sea", "海", "wave", "ocean"],
        palette: ["#6EC3D6", "#E3F6FD", "#2C5B8A"],
        style: StyleMode::OceanMotion,
        mood: "ocean dream",
    },
    MoodRule {
        triggers: &["summer", "阳光", "暖", "bright"],
        palette: ["#F9E8A5", "#FFBE88", "#7FD2C3"],
        style: StyleMode::FlowingPaint,
        mood: "warm bright",
    },
];

const CALM_PALETTE: [&str; 3] = ["#A9C8D8", "#E4EEF5", "#6FA3C8"];
const CALM_MOOD: &str = "calm nostalgic";

/// Offline keyword heuristic.
///
/// The first rule whose trigger appears in the lower-cased city joined to the memory (no
/// separator) wins; otherwise the calm blue-gray mist is used. Intensity is always the default.
/// Title and subtitle are English.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalAnalyzer;

impl Analyzer for LocalAnalyzer {
    fn analyze(&self, city: &str, memory: &str) -> PosterResult<DesignParameters> {
        require_input(city, memory)?;
        let city = city.trim();
        let text = format!("{city}{memory}").to_lowercase();

        let rule = RULES
            .iter()
            .find(|rule| rule.triggers.iter().any(|t| text.contains(t)));
        let (palette, style, mood) = match rule {
            Some(rule) => (rule.palette, rule.style, rule.mood),
            None => (CALM_PALETTE, StyleMode::MistyGradient, CALM_MOOD),
        };
        tracing::debug!(city, style = %style, mood, "local analysis");

        Ok(DesignParameters {
            title: format!("Memory of {city}"),
            subtitle: "Emotional fragments of this city.".to_string(),
            mood: mood.to_string(),
            intensity: Some(DEFAULT_INTENSITY),
            palette: palette.into_iter().map(PaletteEntry::hex).collect(),
            style_mode: style.as_str().to_string(),
            city_keywords: vec![city.to_lowercase()],
            typography_focus: TypographyFocus::Balanced.as_str().to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/analyze/local.rs"]
mod tests;
