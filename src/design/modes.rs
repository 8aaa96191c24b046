//! Closed discriminators decoded from the analyzer's free-text fields.
//!
//! Every parser is total: unknown strings resolve to the documented default variant instead of
//! failing, so an unexpected analyzer reply can never abort a render.

use std::fmt;

fn canonical(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect()
}

/// Rendering strategy selected by `style_mode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleMode {
    /// Heavy gaussian haze over the gradient.
    #[default]
    MistyGradient,
    /// Translucent horizontal bands.
    OceanMotion,
    /// Vertical sinusoidal paint strokes.
    FlowingPaint,
    /// Soft blur with almost no grain.
    CleanMinimal,
    /// Scattered primitive shapes plus a flavor overlay and city motifs.
    ShapeScatter(ScatterFlavor),
}

impl StyleMode {
    /// Decode a discriminator; unknown values fall back to [`StyleMode::default`].
    pub fn parse(s: &str) -> Self {
        match canonical(s).as_str() {
            "misty_gradient" | "mist" | "misty" => Self::MistyGradient,
            "ocean_motion" | "ocean" => Self::OceanMotion,
            "flowing_paint" | "paint" => Self::FlowingPaint,
            "clean_minimal" | "minimal" | "clean" => Self::CleanMinimal,
            other => match ScatterFlavor::try_parse(other) {
                Some(flavor) => Self::ShapeScatter(flavor),
                None => Self::default(),
            },
        }
    }

    /// Canonical discriminator string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MistyGradient => "misty_gradient",
            Self::OceanMotion => "ocean_motion",
            Self::FlowingPaint => "flowing_paint",
            Self::CleanMinimal => "clean_minimal",
            Self::ShapeScatter(flavor) => flavor.as_str(),
        }
    }
}

impl fmt::Display for StyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Art-style overlay drawn on top of a shape scatter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScatterFlavor {
    /// Shapes only.
    #[default]
    Dreamy,
    /// Magenta vertical scan lines.
    Cyberpunk,
    /// Sepia frame border.
    FilmMood,
    /// Random white sparkles.
    Shimmer,
    /// Gray orthogonal grid.
    BrutalistGrid,
}

impl ScatterFlavor {
    fn try_parse(canon: &str) -> Option<Self> {
        Some(match canon {
            "shape_scatter" | "scatter" | "dreamy" => Self::Dreamy,
            "cyberpunk" => Self::Cyberpunk,
            "film_mood" | "film" => Self::FilmMood,
            "shimmer" => Self::Shimmer,
            "brutalist_grid" | "brutalist" => Self::BrutalistGrid,
            _ => return None,
        })
    }

    /// Canonical discriminator string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dreamy => "shape_scatter",
            Self::Cyberpunk => "cyberpunk",
            Self::FilmMood => "film_mood",
            Self::Shimmer => "shimmer",
            Self::BrutalistGrid => "brutalist_grid",
        }
    }
}

/// Caption layout selected by `typography_focus`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypographyFocus {
    /// Caption band in the upper part of the poster.
    #[default]
    Balanced,
    /// Caption band in the lower third.
    BottomFocused,
    /// Balanced position with an enlarged title.
    LargeTitle,
}

impl TypographyFocus {
    /// Decode a discriminator; unknown values fall back to [`TypographyFocus::Balanced`].
    pub fn parse(s: &str) -> Self {
        match canonical(s).as_str() {
            "bottom_focused" | "bottom" => Self::BottomFocused,
            "large_title" | "large" => Self::LargeTitle,
            _ => Self::Balanced,
        }
    }

    /// Canonical discriminator string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::BottomFocused => "bottom_focused",
            Self::LargeTitle => "large_title",
        }
    }
}

/// Fixed geometric overlays triggered by recognized city keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CityMotif {
    /// Evenly spaced vertical lines.
    VerticalLines,
    /// Sparse grid of small squares.
    PixelGrid,
    /// Rows of half-circle arcs.
    ArcRows,
}

impl CityMotif {
    /// All motifs in application order.
    pub const ALL: [CityMotif; 3] = [Self::VerticalLines, Self::PixelGrid, Self::ArcRows];

    fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::VerticalLines => &["tokyo", "new york", "hong kong", "shanghai", "neon"],
            Self::PixelGrid => &["seoul", "berlin", "shenzhen", "pixel"],
            Self::ArcRows => &["paris", "venice", "rome", "london", "bridge"],
        }
    }

    /// Motifs triggered by `keywords`, deduplicated, in [`CityMotif::ALL`] order.
    pub fn from_keywords<S: AsRef<str>>(keywords: &[S]) -> Vec<CityMotif> {
        let lowered: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .filter(|motif| {
                lowered
                    .iter()
                    .any(|k| motif.tokens().iter().any(|t| k.contains(t)))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/design/modes.rs"]
mod tests;
