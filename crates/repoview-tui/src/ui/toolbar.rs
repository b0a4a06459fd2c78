//! Toolbar: Back/Forward/Up affordances, the search box and the repository.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use repoview_core::config::theme::{parse_color, Theme};
use repoview_core::naming::escape_text;
use repoview_core::view::Controls;

/// Builds the toolbar line. Disabled controls are dimmed.
pub fn toolbar_line(
    controls: Controls,
    query: &str,
    searching: bool,
    repository: &str,
    theme: &Theme,
) -> Line<'static> {
    let enabled = Style::default()
        .fg(parse_color(&theme.toolbar.enabled_fg))
        .add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(parse_color(&theme.toolbar.disabled_fg));
    let control = |label: &'static str, on: bool| {
        Span::styled(label, if on { enabled } else { disabled })
    };

    let search_style = Style::default().fg(parse_color(&theme.toolbar.search_fg));
    let cursor = if searching { "_" } else { "" };
    let search = if query.is_empty() && !searching {
        Span::styled(" / to search", disabled)
    } else {
        Span::styled(format!(" Search: {}{cursor}", escape_text(query)), search_style)
    };

    Line::from(vec![
        control(" \u{2190} Back ", controls.back),
        control(" Forward \u{2192} ", controls.forward),
        control(" \u{2191} Up ", controls.up),
        Span::raw(" \u{2502}"),
        search,
        Span::styled(format!("   {}", escape_text(repository)), disabled),
    ])
}

pub fn render_toolbar(
    f: &mut Frame,
    area: Rect,
    controls: Controls,
    query: &str,
    searching: bool,
    repository: &str,
    theme: &Theme,
) {
    let line = toolbar_line(controls, query, searching, repository, theme);
    f.render_widget(Paragraph::new(line), area);
}
