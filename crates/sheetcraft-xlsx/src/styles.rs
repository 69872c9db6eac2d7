//! Translation of core styles into `rust_xlsxwriter` formats

use ahash::AHashMap;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, FormatPattern};
use sheetcraft_core::style::{
    BorderEdge, BorderLineStyle, Color, FontStyle, HorizontalAlignment, Style, VerticalAlignment,
};

/// Workbook-wide cache of formats, one per distinct style
#[derive(Default)]
pub(crate) struct FormatCache {
    formats: AHashMap<Style, Format>,
    fonts: AHashMap<FontStyle, Format>,
}

impl FormatCache {
    /// Format for a whole cell style
    pub(crate) fn format(&mut self, style: &Style) -> &Format {
        self.formats
            .entry(style.clone())
            .or_insert_with(|| to_format(style))
    }

    /// Format carrying only font settings, for rich text runs
    pub(crate) fn font_format(&mut self, font: &FontStyle) -> &Format {
        self.fonts
            .entry(font.clone())
            .or_insert_with(|| apply_font(Format::new(), font))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.formats.len()
    }
}

fn to_format(style: &Style) -> Format {
    let mut format = apply_font(Format::new(), &style.font);

    if let Some(color) = style.fill.color() {
        format = format
            .set_pattern(FormatPattern::Solid)
            .set_background_color(to_xlsx_color(color));
    }

    let border = &style.border;
    if let Some(edge) = border.top {
        let (line, color) = to_xlsx_border(edge);
        format = format.set_border_top(line);
        if let Some(color) = color {
            format = format.set_border_top_color(color);
        }
    }
    if let Some(edge) = border.bottom {
        let (line, color) = to_xlsx_border(edge);
        format = format.set_border_bottom(line);
        if let Some(color) = color {
            format = format.set_border_bottom_color(color);
        }
    }
    if let Some(edge) = border.left {
        let (line, color) = to_xlsx_border(edge);
        format = format.set_border_left(line);
        if let Some(color) = color {
            format = format.set_border_left_color(color);
        }
    }
    if let Some(edge) = border.right {
        let (line, color) = to_xlsx_border(edge);
        format = format.set_border_right(line);
        if let Some(color) = color {
            format = format.set_border_right_color(color);
        }
    }

    if let Some(align) = horizontal_align(style.alignment.horizontal) {
        format = format.set_align(align);
    }
    if let Some(align) = vertical_align(style.alignment.vertical) {
        format = format.set_align(align);
    }
    if style.alignment.wrap_text {
        format = format.set_text_wrap();
    }

    if !style.number_format.is_general() {
        format = format.set_num_format(style.number_format.format_string());
    }

    format
}

fn apply_font(mut format: Format, font: &FontStyle) -> Format {
    format = format.set_font_name(&font.name).set_font_size(font.size);
    if font.bold {
        format = format.set_bold();
    }
    if font.italic {
        format = format.set_italic();
    }
    if font.underline {
        format = format.set_underline(rust_xlsxwriter::FormatUnderline::Single);
    }
    if !font.color.is_auto() {
        format = format.set_font_color(to_xlsx_color(font.color));
    }
    format
}

fn to_xlsx_color(color: Color) -> rust_xlsxwriter::Color {
    match color {
        Color::Auto => rust_xlsxwriter::Color::Automatic,
        other => rust_xlsxwriter::Color::RGB(other.to_rgb_u32()),
    }
}

fn to_xlsx_border(edge: BorderEdge) -> (FormatBorder, Option<rust_xlsxwriter::Color>) {
    let line = match edge.style {
        BorderLineStyle::None => FormatBorder::None,
        BorderLineStyle::Thin => FormatBorder::Thin,
        BorderLineStyle::Medium => FormatBorder::Medium,
        BorderLineStyle::Thick => FormatBorder::Thick,
        BorderLineStyle::Dashed => FormatBorder::Dashed,
        BorderLineStyle::Dotted => FormatBorder::Dotted,
        BorderLineStyle::Double => FormatBorder::Double,
        BorderLineStyle::Hair => FormatBorder::Hair,
    };
    let color = (!edge.color.is_auto()).then(|| to_xlsx_color(edge.color));
    (line, color)
}

fn horizontal_align(align: HorizontalAlignment) -> Option<FormatAlign> {
    match align {
        HorizontalAlignment::General => None,
        HorizontalAlignment::Left => Some(FormatAlign::Left),
        HorizontalAlignment::Center => Some(FormatAlign::Center),
        HorizontalAlignment::Right => Some(FormatAlign::Right),
        HorizontalAlignment::Fill => Some(FormatAlign::Fill),
        HorizontalAlignment::Justify => Some(FormatAlign::Justify),
        HorizontalAlignment::CenterContinuous => Some(FormatAlign::CenterAcross),
        HorizontalAlignment::Distributed => Some(FormatAlign::Distributed),
    }
}

// Bottom is the format default and needs no explicit alignment
fn vertical_align(align: VerticalAlignment) -> Option<FormatAlign> {
    match align {
        VerticalAlignment::Bottom => None,
        VerticalAlignment::Top => Some(FormatAlign::Top),
        VerticalAlignment::Center => Some(FormatAlign::VerticalCenter),
        VerticalAlignment::Justify => Some(FormatAlign::VerticalJustify),
        VerticalAlignment::Distributed => Some(FormatAlign::VerticalDistributed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_are_cached_per_style() {
        let mut cache = FormatCache::default();
        let bold = Style::new().bold(true);

        cache.format(&bold);
        cache.format(&Style::new().bold(true));
        cache.format(&Style::new().fill_color(Color::RED));

        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_color_mapping_drops_alpha() {
        assert_eq!(
            to_xlsx_color(Color::argb(0, 0x12, 0x34, 0x56)),
            rust_xlsxwriter::Color::RGB(0x123456)
        );
        assert_eq!(
            to_xlsx_color(Color::Auto),
            rust_xlsxwriter::Color::Automatic
        );
    }
}
