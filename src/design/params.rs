use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::design::modes::{CityMotif, StyleMode, TypographyFocus};
use crate::design::palette::{Palette, PaletteEntry, normalize_palette};
use crate::foundation::error::{PosterError, PosterResult};
use crate::foundation::math::clamp_unit;

/// Title used when the analyzer leaves it empty.
pub const DEFAULT_TITLE: &str = "Memory of the City";
/// Subtitle used when the analyzer leaves it empty.
pub const DEFAULT_SUBTITLE: &str = "Fragments of a feeling, held in color.";
/// Intensity used when the analyzer omits it or sends something non-numeric.
pub const DEFAULT_INTENSITY: f64 = 0.5;

/// `(canonical, alias)` key pairs accepted in analyzer output.
const FIELD_ALIASES: [(&str, &str); 4] = [
    ("palette", "color_palette"),
    ("style_mode", "styleMode"),
    ("city_keywords", "cityKeywords"),
    ("typography_focus", "typographyFocus"),
];

/// Design parameters as produced by an analyzer.
///
/// This is the JSON-facing contract. Every field is optional and every malformed value is
/// tolerated: strings that are not strings become empty, a non-numeric intensity becomes
/// `None`, palette entries that cannot be decoded are kept as
/// [`PaletteEntry::Unrecognized`] and dropped later. Call [`DesignParameters::resolve`] to get
/// the validated [`PosterDesign`] the renderer consumes.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DesignParameters {
    /// Poster title.
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    /// One or two short lines under the title.
    #[serde(default, deserialize_with = "lenient::string")]
    pub subtitle: String,
    /// Free-text mood label; informational only.
    #[serde(default, deserialize_with = "lenient::string")]
    pub mood: String,
    /// Nominally in `[0, 1]`; clamped on resolve.
    #[serde(
        default,
        deserialize_with = "lenient::number",
        skip_serializing_if = "Option::is_none"
    )]
    pub intensity: Option<f64>,
    /// Ordered palette, 3-5 colors nominally.
    #[serde(default, alias = "color_palette", deserialize_with = "lenient::palette")]
    pub palette: Vec<PaletteEntry>,
    /// Style discriminator, see [`StyleMode::parse`].
    #[serde(default, alias = "styleMode", deserialize_with = "lenient::string")]
    pub style_mode: String,
    /// Free-text tokens consulted by motif logic.
    #[serde(default, alias = "cityKeywords", deserialize_with = "lenient::string_list")]
    pub city_keywords: Vec<String>,
    /// Caption layout discriminator, see [`TypographyFocus::parse`].
    #[serde(default, alias = "typographyFocus", deserialize_with = "lenient::string")]
    pub typography_focus: String,
}

impl DesignParameters {
    /// Parse from a JSON object.
    ///
    /// Anything other than an object (arrays included) is rejected.
    pub fn from_json_str(s: &str) -> PosterResult<Self> {
        let value: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| PosterError::serde(format!("parse design parameters JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Parse from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> PosterResult<Self> {
        let value: serde_json::Value = serde_json::from_reader(r)
            .map_err(|e| PosterError::serde(format!("parse design parameters JSON: {e}")))?;
        Self::from_value(value)
    }

    /// Decode an already parsed JSON object.
    ///
    /// When a field appears under both its canonical key and its alias, the canonical key
    /// wins and the alias is ignored.
    pub fn from_value(value: serde_json::Value) -> PosterResult<Self> {
        let serde_json::Value::Object(mut map) = value else {
            return Err(PosterError::serde("design parameters must be a JSON object"));
        };
        for (canonical, alias) in FIELD_ALIASES {
            if let Some(v) = map.remove(alias) {
                map.entry(canonical).or_insert(v);
            }
        }
        serde_json::from_value(serde_json::Value::Object(map))
            .map_err(|e| PosterError::serde(format!("decode design parameters: {e}")))
    }

    /// Parse from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PosterResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PosterError::validation(format!(
                "open design parameters '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a free-form analyzer reply.
    ///
    /// Language-model replies often wrap the JSON object in a Markdown code fence or surround
    /// it with prose; the first `{` .. last `}` span is extracted before parsing.
    pub fn from_reply(reply: &str) -> PosterResult<Self> {
        let body = strip_code_fence(reply);
        let start = body.find('{');
        let end = body.rfind('}');
        match (start, end) {
            (Some(s), Some(e)) if s < e => Self::from_json_str(&body[s..=e]),
            _ => Err(PosterError::serde("analyzer reply contains no JSON object")),
        }
    }

    /// Apply defaults, clamp intensity, decode discriminators and normalize the palette.
    pub fn resolve(&self) -> PosterDesign {
        let style = StyleMode::parse(&self.style_mode);
        let intensity = match self.intensity {
            Some(v) if v.is_finite() => clamp_unit(v),
            _ => DEFAULT_INTENSITY,
        };
        PosterDesign {
            title: non_empty_or(&self.title, DEFAULT_TITLE),
            subtitle: non_empty_or(&self.subtitle, DEFAULT_SUBTITLE),
            mood: self.mood.trim().to_string(),
            intensity,
            palette: normalize_palette(&self.palette, Some(style)),
            style,
            focus: TypographyFocus::parse(&self.typography_focus),
            motifs: CityMotif::from_keywords(&self.city_keywords),
            city_keywords: self.city_keywords.clone(),
        }
    }
}

fn non_empty_or(s: &str, default: &str) -> String {
    let t = s.trim();
    if t.is_empty() {
        default.to_string()
    } else {
        t.to_string()
    }
}

fn strip_code_fence(reply: &str) -> &str {
    let t = reply.trim();
    let Some(open) = t.find("```") else {
        return t;
    };
    let after = &t[open + 3..];
    // Skip an optional language tag on the fence line.
    let body_start = after.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after[body_start..];
    match body.find("```") {
        Some(close) => &body[..close],
        None => body,
    }
}

/// Validated design consumed by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct PosterDesign {
    /// Title, never empty.
    pub title: String,
    /// Subtitle, never empty.
    pub subtitle: String,
    /// Mood label (may be empty).
    pub mood: String,
    /// Intensity in `[0, 1]`.
    pub intensity: f64,
    /// Non-empty palette.
    pub palette: Palette,
    /// Selected style.
    pub style: StyleMode,
    /// Selected caption layout.
    pub focus: TypographyFocus,
    /// Motifs triggered by the keywords.
    pub motifs: Vec<CityMotif>,
    /// Keywords as given.
    pub city_keywords: Vec<String>,
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use crate::design::palette::PaletteEntry;

    pub(super) fn string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        })
    }

    pub(super) fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        })
    }

    pub(super) fn string_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .filter_map(|v| match v {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
            Value::String(s) => vec![s],
            _ => Vec::new(),
        })
    }

    pub(super) fn palette<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Vec<PaletteEntry>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Array(items) => items
                .into_iter()
                .map(|v| {
                    serde_json::from_value(v.clone()).unwrap_or(PaletteEntry::Unrecognized(v))
                })
                .collect(),
            Value::String(s) => vec![PaletteEntry::Hex(s)],
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/design/params.rs"]
mod tests;
