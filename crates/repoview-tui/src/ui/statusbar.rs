//! Status bar rendering.
//!
//! One row at the bottom: folder/file counts of the current directory on the
//! left, the selected file's name on the right, and the latest status
//! message (e.g. a failed fetch) in between.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use repoview_core::config::theme::{parse_color, Theme};
use repoview_core::naming::escape_text;
use repoview_core::view::status::StatusLine;

/// Builds the status bar line, padding so the selection is right-aligned.
pub fn statusbar_line(
    status: &StatusLine,
    message: Option<&str>,
    width: u16,
    theme: &Theme,
) -> Line<'static> {
    let bg = parse_color(&theme.statusbar.bg);
    let counts = Span::styled(
        format!(" {}", status.counts),
        Style::default()
            .fg(parse_color(&theme.statusbar.counts_fg))
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    );
    let message = message
        .map(|msg| {
            Span::styled(
                format!("  {}", escape_text(msg)),
                Style::default()
                    .fg(parse_color(&theme.statusbar.message_fg))
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();
    let selection = Span::styled(
        format!("{} ", status.selection),
        Style::default()
            .fg(parse_color(&theme.statusbar.selection_fg))
            .bg(bg),
    );

    let used = counts.width() + message.width() + selection.width();
    let spacer = Span::raw(" ".repeat((width as usize).saturating_sub(used)));

    Line::from(vec![counts, message, spacer, selection])
}

/// Renders the bottom status bar.
pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    status: &StatusLine,
    message: Option<&str>,
    theme: &Theme,
) {
    let bg = parse_color(&theme.statusbar.bg);
    let line = statusbar_line(status, message, area.width, theme);
    f.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
