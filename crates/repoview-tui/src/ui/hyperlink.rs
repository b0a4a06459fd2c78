//! OSC 8 terminal hyperlinks.
//!
//! ratatui has no notion of links, so the label is drawn normally and then
//! each pair of cells is overwritten with the same text wrapped in the OSC 8
//! escape. Terminals without OSC 8 support show the plain label.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Widget,
};

/// A single-line clickable label pointing at `url`.
pub struct Hyperlink<'a> {
    text: &'a str,
    url: &'a str,
    style: Style,
}

impl<'a> Hyperlink<'a> {
    pub fn new(text: &'a str, url: &'a str) -> Self {
        Self {
            text,
            url,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

/// Wraps `text` in an OSC 8 link to `url`.
///
/// `url` must already be free of control characters.
pub fn osc8(url: &str, text: &str) -> String {
    format!("\x1B]8;;{url}\x07{text}\x1B]8;;\x07")
}

impl Widget for Hyperlink<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buf.set_span(area.x, area.y, &Span::styled(self.text, self.style), area.width);

        let url: String = self.url.chars().filter(|c| !c.is_control()).collect();
        let chars: Vec<char> = self.text.chars().collect();
        for (i, chunk) in chars.chunks(2).enumerate() {
            let offset = (i * 2) as u16;
            if offset >= area.width {
                break;
            }
            let chunk: String = chunk.iter().collect();
            if let Some(cell) = buf.cell_mut((area.x + offset, area.y)) {
                cell.set_symbol(&osc8(&url, &chunk));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn osc8_wraps_text() {
        assert_eq!(
            osc8("https://x.test/a.png", "Op"),
            "\x1B]8;;https://x.test/a.png\x07Op\x1B]8;;\x07"
        );
    }

    #[test]
    fn render_links_every_other_cell() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        Hyperlink::new("Open image", "https://x.test/k.png").render(area, &mut buf);

        assert_eq!(
            buf[(0, 0)].symbol(),
            osc8("https://x.test/k.png", "Op").as_str()
        );
        assert_eq!(
            buf[(8, 0)].symbol(),
            osc8("https://x.test/k.png", "ge").as_str()
        );
    }

    #[test]
    fn control_characters_are_stripped_from_url() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        Hyperlink::new("ab", "https://x.test/\x07evil").render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), osc8("https://x.test/evil", "ab").as_str());
    }

    #[test]
    fn render_clips_to_area() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        Hyperlink::new("Open image", "u").render(area, &mut buf);
        assert_eq!(buf[(2, 0)].symbol(), osc8("u", "en").as_str());
    }
}
