//! Preview pane: the selected file's image, name and content link.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use repoview_core::config::theme::{parse_color, Theme};
use repoview_core::view::list::LOADING_PLACEHOLDER;
use repoview_core::view::status::{Preview, OPEN_LABEL, PREVIEW_PLACEHOLDER};

use crate::image_preview::{ImagePreviewState, ImageSlot};
use crate::ui::hyperlink::Hyperlink;

/// Rows below the image: name, blank, link.
const META_HEIGHT: u16 = 3;

/// What fills the picture area above the metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Picture {
    /// Drawn through the terminal graphics protocol.
    Image,
    /// One line of text instead of the picture.
    Notice(String, bool),
}

/// Decides what the picture area shows for `url`.
fn picture_for(slot: Option<&ImageSlot>) -> Picture {
    match slot {
        Some(ImageSlot::Ready(_)) => Picture::Image,
        Some(ImageSlot::Failed(message)) => Picture::Notice(message.clone(), true),
        Some(ImageSlot::Loading) | None => Picture::Notice(LOADING_PLACEHOLDER.to_string(), false),
    }
}

/// Lines of the metadata block under the picture.
pub fn meta_lines(name: &str, has_link: bool, theme: &Theme) -> Vec<Line<'static>> {
    let title = Line::from(Span::styled(
        name.to_string(),
        Style::default()
            .fg(parse_color(&theme.preview.title_fg))
            .add_modifier(Modifier::BOLD),
    ));
    if has_link {
        vec![title, Line::from("")]
    } else {
        vec![title]
    }
}

/// Renders the preview panel for the selected entry.
pub fn render_preview(
    f: &mut Frame,
    area: Rect,
    preview: &Preview,
    theme: &Theme,
    image_state: Option<&mut ImagePreviewState>,
) {
    let border_fg = parse_color(&theme.preview.border_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Preview")
        .border_style(Style::default().fg(border_fg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Preview::File {
        name, url, image, ..
    } = preview
    else {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            PREVIEW_PLACEHOLDER,
            Style::default()
                .fg(parse_color(&theme.preview.placeholder_fg))
                .add_modifier(Modifier::ITALIC),
        )));
        f.render_widget(placeholder, inner);
        return;
    };

    let picture_height = inner.height.saturating_sub(META_HEIGHT);
    let drawable = match (url, image_state) {
        (Some(url), Some(state)) if *image && picture_height >= 3 => Some((url, state)),
        _ => None,
    };

    let meta_area = match drawable {
        Some((url, state)) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(picture_height), Constraint::Length(META_HEIGHT)])
                .split(inner);
            render_picture(f, chunks[0], url, state, theme);
            chunks[1]
        }
        None => inner,
    };

    f.render_widget(Paragraph::new(meta_lines(name, url.is_some(), theme)), meta_area);

    if let Some(url) = url {
        let link_area = Rect {
            y: meta_area.y + 2,
            height: 1,
            ..meta_area
        };
        if link_area.y < meta_area.bottom() {
            let style = Style::default()
                .fg(parse_color(&theme.preview.link_fg))
                .add_modifier(Modifier::UNDERLINED);
            f.render_widget(Hyperlink::new(OPEN_LABEL, url).style(style), link_area);
        }
    }
}

fn render_picture(
    f: &mut Frame,
    area: Rect,
    url: &str,
    state: &mut ImagePreviewState,
    theme: &Theme,
) {
    match state.slot_mut(url) {
        Some(ImageSlot::Ready(protocol)) => {
            let widget = ratatui_image::StatefulImage::default();
            f.render_stateful_widget(widget, area, protocol);
        }
        slot => {
            let Picture::Notice(text, is_error) = picture_for(slot.as_deref()) else {
                return;
            };
            let fg = if is_error {
                parse_color(&theme.preview.error_fg)
            } else {
                parse_color(&theme.preview.placeholder_fg)
            };
            f.render_widget(
                Paragraph::new(Span::styled(text, Style::default().fg(fg))),
                area,
            );
        }
    }
}
