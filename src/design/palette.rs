use crate::design::modes::StyleMode;
use crate::foundation::core::Rgb8;

/// One color as produced by the analyzer.
///
/// The analyzer contract allows three encodings. When the encoding is tagged (`{"unit": [..]}`
/// or `{"byte": [..]}`) it is trusted; a bare numeric array is classified by the `<= 1.0`
/// heuristic. A uniform near-black byte triple and a uniform normalized color are
/// indistinguishable without the tag, so `[1, 1, 1]` is read as normalized white.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum PaletteEntry {
    /// `#RRGGBB`, `RRGGBB`, `#RGB` or `#RRGGBBAA`.
    Hex(String),
    /// Explicitly tagged numeric triple.
    Tagged(TaggedColor),
    /// Untagged numeric array, classified heuristically.
    Triple(Vec<f64>),
    /// Anything else; always dropped.
    Unrecognized(serde_json::Value),
}

/// Numeric triple with an explicit encoding tag.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaggedColor {
    /// Components in `[0, 1]`.
    Unit([f64; 3]),
    /// Components in `[0, 255]`.
    Byte([f64; 3]),
}

impl PaletteEntry {
    /// Hex entry helper.
    pub fn hex(s: impl Into<String>) -> Self {
        Self::Hex(s.into())
    }

    /// Decode to RGB8, or `None` if the entry is unparsable.
    pub fn to_rgb(&self) -> Option<Rgb8> {
        match self {
            Self::Hex(s) => parse_hex(s),
            Self::Tagged(TaggedColor::Unit(c)) => scaled(*c, 255.0),
            Self::Tagged(TaggedColor::Byte(c)) => scaled(*c, 1.0),
            Self::Triple(v) => {
                let c: [f64; 3] = v.get(..3)?.try_into().ok()?;
                if c.iter().all(|&x| x <= 1.0) {
                    scaled(c, 255.0)
                } else {
                    scaled(c, 1.0)
                }
            }
            Self::Unrecognized(_) => None,
        }
    }
}

fn scaled(c: [f64; 3], factor: f64) -> Option<Rgb8> {
    if c.iter().any(|x| !x.is_finite()) {
        return None;
    }
    let ch = |x: f64| -> u8 { (x * factor).clamp(0.0, 255.0).round() as u8 };
    Some(Rgb8::new(ch(c[0]), ch(c[1]), ch(c[2])))
}

fn parse_hex(s: &str) -> Option<Rgb8> {
    let digits = s.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits[..6].to_string(),
        _ => return None,
    };
    let pair = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb8::new(pair(0)?, pair(2)?, pair(4)?))
}

/// Muted blue-gray default used when nothing in the analyzer palette parses.
pub const FALLBACK_PALETTE: [Rgb8; 3] = [
    Rgb8::new(0xA9, 0xC8, 0xD8),
    Rgb8::new(0xE4, 0xEE, 0xF5),
    Rgb8::new(0x6F, 0xA3, 0xC8),
];

const OCEAN_PALETTE: [Rgb8; 3] = [
    Rgb8::new(0x6E, 0xC3, 0xD6),
    Rgb8::new(0xE3, 0xF6, 0xFD),
    Rgb8::new(0x2C, 0x5B, 0x8A),
];

const WARM_PALETTE: [Rgb8; 3] = [
    Rgb8::new(0xF9, 0xE8, 0xA5),
    Rgb8::new(0xFF, 0xBE, 0x88),
    Rgb8::new(0x7F, 0xD2, 0xC3),
];

/// Fallback palette for a style hint.
pub fn fallback_palette(hint: Option<StyleMode>) -> &'static [Rgb8; 3] {
    match hint {
        Some(StyleMode::OceanMotion) => &OCEAN_PALETTE,
        Some(StyleMode::FlowingPaint) => &WARM_PALETTE,
        _ => &FALLBACK_PALETTE,
    }
}

/// Ordered, non-empty sequence of opaque colors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    /// Wrap colors; an empty input is replaced by [`FALLBACK_PALETTE`].
    pub fn new(colors: Vec<Rgb8>) -> Self {
        if colors.is_empty() {
            return Self {
                colors: FALLBACK_PALETTE.to_vec(),
            };
        }
        Self { colors }
    }

    /// Colors in analyzer order.
    pub fn colors(&self) -> &[Rgb8] {
        &self.colors
    }

    /// Number of colors (always >= 1).
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `i` modulo the palette length.
    pub fn cyclic(&self, i: usize) -> Rgb8 {
        self.colors[i % self.colors.len()]
    }

    /// Stops for the gradient: at least two, a single color is duplicated.
    pub fn gradient_stops(&self) -> Vec<Rgb8> {
        match self.colors.as_slice() {
            [only] => vec![*only, *only],
            many => many.to_vec(),
        }
    }
}

/// Decode analyzer palette entries into a canonical palette.
///
/// Unparsable entries are dropped (order of the rest is preserved). When nothing survives, the
/// fallback palette for `hint` is returned.
pub fn normalize_palette(entries: &[PaletteEntry], hint: Option<StyleMode>) -> Palette {
    let mut colors = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry.to_rgb() {
            Some(c) => colors.push(c),
            None => tracing::warn!(?entry, "dropping unparsable palette entry"),
        }
    }
    if colors.is_empty() {
        tracing::warn!(
            entries = entries.len(),
            "palette empty after parsing, using fallback"
        );
        return Palette {
            colors: fallback_palette(hint).to_vec(),
        };
    }
    Palette { colors }
}

#[cfg(test)]
#[path = "../../tests/unit/design/palette.rs"]
mod tests;
