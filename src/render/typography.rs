use crate::assets::font::FontData;
use crate::assets::text::{TextBrushRgba8, TextLayoutEngine, draw_layout};
use crate::design::modes::TypographyFocus;
use crate::foundation::core::{Canvas, Rect, Rgb8};
use crate::foundation::error::PosterResult;
use crate::render::frame::PosterFrame;
use crate::render::layer::ShapeLayer;

/// Alpha of the dark caption band.
pub const CAPTION_BAND_ALPHA: u8 = 70;
/// Horizontal text margin as a fraction of width.
pub const CAPTION_MARGIN_FRAC: f64 = 0.08;
/// Band padding around the text box, in reference pixels.
pub const CAPTION_PAD_PX: f64 = 16.0;

const TITLE_RGBA: TextBrushRgba8 = TextBrushRgba8 {
    r: 245,
    g: 245,
    b: 245,
    a: 255,
};
const SUBTITLE_RGBA: TextBrushRgba8 = TextBrushRgba8 {
    r: 215,
    g: 215,
    b: 215,
    a: 255,
};

/// Geometry of the caption for a canvas and focus.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptionLayout {
    /// Translucent band rectangle (text box plus padding).
    pub band: Rect,
    /// Left edge of the text.
    pub text_x: f64,
    /// Top of the title.
    pub text_top: f64,
    /// Wrap width of both lines.
    pub text_width: f64,
    /// Title font size in pixels.
    pub title_size: f64,
    /// Subtitle font size in pixels.
    pub subtitle_size: f64,
    /// Band padding around the text box in pixels.
    pub pad: f64,
}

impl CaptionLayout {
    /// Compute the layout. Bottom-focused captions sit at 66-76% of the height, all others at
    /// 18-28%. The band grows with [`CaptionLayout::fit_text_bottom`] once text is shaped.
    pub fn new(canvas: Canvas, focus: TypographyFocus) -> Self {
        let w = f64::from(canvas.width);
        let h = f64::from(canvas.height);
        let top_frac = match focus {
            TypographyFocus::BottomFocused => 0.66,
            TypographyFocus::Balanced | TypographyFocus::LargeTitle => 0.18,
        };
        let title_mul = match focus {
            TypographyFocus::LargeTitle => 1.6,
            _ => 1.0,
        };
        let top = top_frac * h;
        let bottom = top + 0.10 * h;
        let margin = CAPTION_MARGIN_FRAC * w;
        let pad = CAPTION_PAD_PX * canvas.scale();
        Self {
            band: Rect::new(margin - pad, top - pad, w - margin + pad, bottom + pad),
            text_x: margin,
            text_top: top,
            text_width: w - 2.0 * margin,
            title_size: 0.055 * w * title_mul,
            subtitle_size: 0.028 * w,
            pad,
        }
    }

    /// Extend the band so it covers text ending at `text_bottom`. Never shrinks.
    pub fn fit_text_bottom(&mut self, text_bottom: f64) {
        self.band.y1 = self.band.y1.max(text_bottom + self.pad);
    }
}

/// Shaped title and subtitle, positioned against a [`CaptionLayout`].
pub(crate) struct CaptionText {
    title: parley::Layout<TextBrushRgba8>,
    subtitle: parley::Layout<TextBrushRgba8>,
    subtitle_top: f64,
    font: vello_cpu::peniko::FontData,
}

impl CaptionText {
    fn shape(
        layout: &CaptionLayout,
        title: &str,
        subtitle: &str,
        font: &FontData,
    ) -> PosterResult<Self> {
        let mut engine = TextLayoutEngine::new();
        let wrap = layout.text_width as f32;
        let title = engine.layout_plain(
            title,
            font.bytes(),
            layout.title_size as f32,
            TITLE_RGBA,
            wrap,
        )?;
        let subtitle = engine.layout_plain(
            subtitle,
            font.bytes(),
            layout.subtitle_size as f32,
            SUBTITLE_RGBA,
            wrap,
        )?;
        let subtitle_top =
            layout.text_top + f64::from(title.height()) + 0.4 * layout.subtitle_size;
        Ok(Self {
            title,
            subtitle,
            subtitle_top,
            font: font.to_cpu_font(),
        })
    }

    /// Bottom edge of the subtitle.
    pub(crate) fn bottom(&self) -> f64 {
        self.subtitle_top + f64::from(self.subtitle.height())
    }

    fn draw(&self, layer: &mut ShapeLayer, layout: &CaptionLayout) {
        let ctx = layer.ctx_mut();
        draw_layout(ctx, &self.title, &self.font, layout.text_x, layout.text_top);
        draw_layout(ctx, &self.subtitle, &self.font, layout.text_x, self.subtitle_top);
    }
}

/// Lay out the caption for `canvas`, shaping text first when a font is given so the band
/// can cover it.
pub(crate) fn shape_caption(
    canvas: Canvas,
    title: &str,
    subtitle: &str,
    focus: TypographyFocus,
    font: Option<&FontData>,
) -> PosterResult<(CaptionLayout, Option<CaptionText>)> {
    let mut layout = CaptionLayout::new(canvas, focus);
    let text = font
        .map(|font| CaptionText::shape(&layout, title, subtitle, font))
        .transpose()?;
    if let Some(text) = &text {
        layout.fit_text_bottom(text.bottom());
    }
    Ok((layout, text))
}

/// Draw the caption band and, when a font is available, the title and subtitle.
///
/// Deterministic; consumes no randomness.
#[tracing::instrument(skip(frame, font), fields(w = frame.width, h = frame.height))]
pub fn apply_typography(
    frame: &mut PosterFrame,
    title: &str,
    subtitle: &str,
    focus: TypographyFocus,
    font: Option<&FontData>,
) -> PosterResult<()> {
    let (layout, text) = shape_caption(frame.canvas(), title, subtitle, focus, font)?;
    let mut layer = ShapeLayer::new(frame.canvas())?;
    layer.fill_rect(layout.band, Rgb8::new(0, 0, 0), CAPTION_BAND_ALPHA);

    match &text {
        Some(text) => text.draw(&mut layer, &layout),
        None => tracing::warn!("no font available, caption text skipped"),
    }

    layer.composite_onto(frame)
}

#[cfg(test)]
#[path = "../../tests/unit/render/typography.rs"]
mod tests;
