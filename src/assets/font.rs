use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{PosterError, PosterResult};

/// Raw font file bytes handed to the typography stage.
///
/// The renderer never touches the filesystem; callers load a font with [`load_font_file`] or
/// [`discover_system_font`] and pass it through [`crate::RenderOptions`].
#[derive(Clone)]
pub struct FontData {
    bytes: Arc<Vec<u8>>,
    index: u32,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("bytes_len", &self.bytes.len())
            .field("index", &self.index)
            .finish()
    }
}

impl FontData {
    /// Wrap in-memory font bytes (TTF/OTF, or a collection with face `index`).
    pub fn from_bytes(bytes: Vec<u8>, index: u32) -> PosterResult<Self> {
        if bytes.is_empty() {
            return Err(PosterError::validation("font data is empty"));
        }
        Ok(Self {
            bytes: Arc::new(bytes),
            index,
        })
    }

    /// Font file bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Face index within a collection.
    pub fn index(&self) -> u32 {
        self.index
    }

    pub(crate) fn to_cpu_font(&self) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(self.bytes.as_ref().clone()),
            self.index,
        )
    }
}

/// Read a font file from disk.
pub fn load_font_file(path: impl AsRef<Path>) -> PosterResult<FontData> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
    FontData::from_bytes(bytes, 0)
}

/// Find a sans-serif system font, falling back to any installed face.
pub fn discover_system_font() -> Option<FontData> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let query = usvg::fontdb::Query {
        families: &[
            usvg::fontdb::Family::SansSerif,
            usvg::fontdb::Family::Serif,
        ],
        ..usvg::fontdb::Query::default()
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|f| f.id))?;
    let font = db.with_face_data(id, |data, index| FontData::from_bytes(data.to_vec(), index));
    match font {
        Some(Ok(font)) => {
            tracing::debug!(?font, "discovered system font");
            Some(font)
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
