//! The [`LuluLogo`] widget renders the product mark.
use crate::styles::theme;
use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Widget;

/// The sparkle glyph used as the brand mark
pub const SPARKLE: &str = "✦";

/// Product name shown next to the mark
pub const PRODUCT_NAME: &str = "Lulu CRM";

/// Renders:
///
/// ```text
///   ╻  ╻ ╻╻  ╻ ╻
/// ✦ ┃  ┃ ┃┃  ┃ ┃
///   ┗━╸┗━┛┗━╸┗━┛
/// ```
///
/// or, in the compact size, `✦ Lulu CRM` on a single line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LuluLogo {
    size: Size,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// One line: mark and product name
    #[default]
    Compact,
    /// Three lines of box drawing characters
    Large,
}

impl LuluLogo {
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    pub const fn compact() -> Self {
        Self::new(Size::Compact)
    }

    pub const fn large() -> Self {
        Self::new(Size::Large)
    }

    /// Largest logo that fits in `area`.
    pub fn fitting(area: Rect) -> Self {
        if area.width >= Size::Large.width() && area.height >= Size::Large.height() {
            Self::large()
        } else {
            Self::compact()
        }
    }

    pub const fn width(&self) -> u16 {
        self.size.width()
    }

    pub const fn height(&self) -> u16 {
        self.size.height()
    }
}

impl Widget for LuluLogo {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let text = match self.size {
            Size::Compact => Text::from(Line::from(vec![
                Span::styled(SPARKLE, t.accent_style()),
                Span::raw(" "),
                Span::styled(PRODUCT_NAME, t.title_style()),
            ])),
            Size::Large => Text::from(
                large_art()
                    .lines()
                    .map(|line| {
                        Line::from(vec![Span::raw("  "), Span::styled(line, t.title_style())])
                    })
                    .collect::<Vec<_>>(),
            ),
        };
        text.render(area, buf);
        if self.size == Size::Large && area.height > 1 {
            // The mark sits on the middle row, left of the letters.
            buf.set_string(area.x, area.y + 1, SPARKLE, t.accent_style());
        }
    }
}

impl Size {
    pub const fn width(self) -> u16 {
        match self {
            Self::Compact => 10, // "✦ Lulu CRM"
            Self::Large => 14,   // mark column + "╻  ╻ ╻╻  ╻ ╻"
        }
    }

    pub const fn height(self) -> u16 {
        match self {
            Self::Compact => 1,
            Self::Large => 3,
        }
    }
}

const fn large_art() -> &'static str {
    indoc! {"
        ╻  ╻ ╻╻  ╻ ╻
        ┃  ┃ ┃┃  ┃ ┃
        ┗━╸┗━┛┗━╸┗━┛
    "}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_logo_is_compact() {
        assert_eq!(LuluLogo::default(), LuluLogo::compact());
    }

    #[test]
    fn large_dimensions_match_art() {
        let lines: Vec<&str> = large_art().lines().collect();
        assert_eq!(lines.len() as u16, Size::Large.height());
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        // two columns are reserved for the mark
        assert_eq!(widest as u16 + 2, Size::Large.width());
    }

    #[test]
    fn compact_width_matches_text() {
        let text = format!("{} {}", SPARKLE, PRODUCT_NAME);
        assert_eq!(text.chars().count() as u16, Size::Compact.width());
    }

    #[test]
    fn fitting_falls_back_to_compact() {
        assert_eq!(LuluLogo::fitting(Rect::new(0, 0, 80, 3)), LuluLogo::large());
        assert_eq!(LuluLogo::fitting(Rect::new(0, 0, 80, 1)), LuluLogo::compact());
        assert_eq!(LuluLogo::fitting(Rect::new(0, 0, 12, 3)), LuluLogo::compact());
    }

    #[test]
    fn compact_renders_product_name() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        LuluLogo::compact().render(area, &mut buf);
        let row: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(row.starts_with("✦ Lulu CRM"));
    }
}
