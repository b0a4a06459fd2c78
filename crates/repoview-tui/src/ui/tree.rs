//! Folder tree pane.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use repoview_core::config::theme::{parse_color, Theme};
use repoview_core::view::tree::{TreeRow, Twisty};

use crate::icons::folder_glyph;

/// Expand affordance glyph for a node.
pub fn twisty_glyph(twisty: Twisty) -> &'static str {
    match twisty {
        Twisty::Collapsed => "\u{25b8} ",
        Twisty::Expanded => "\u{25be} ",
        Twisty::Leaf => "  ",
    }
}

/// Builds one indented tree row.
pub fn tree_line(row: &TreeRow, theme: &Theme, show_icons: bool) -> Line<'static> {
    let name_style = if row.active {
        Style::default()
            .fg(parse_color(&theme.tree.active_fg))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(parse_color(&theme.tree.dir_fg))
    };
    let twisty_style = Style::default().fg(parse_color(&theme.tree.twisty_fg));
    let open = row.twisty == Twisty::Expanded;

    let mut spans = vec![
        Span::raw("  ".repeat(row.depth)),
        Span::styled(twisty_glyph(row.twisty), twisty_style),
        Span::styled(
            format!("{}{}", folder_glyph(open, show_icons), row.name),
            name_style,
        ),
    ];
    if row.loading {
        spans.push(Span::styled(" \u{2026}", twisty_style));
    }
    Line::from(spans)
}

/// Renders the folder tree with the cursor row highlighted.
pub fn render_tree(
    f: &mut Frame,
    area: Rect,
    rows: &[TreeRow],
    cursor: usize,
    theme: &Theme,
    show_icons: bool,
    is_active: bool,
) {
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(tree_line(row, theme, show_icons)))
        .collect();

    let border_color = if is_active {
        parse_color(&theme.list.selected_fg)
    } else {
        Color::DarkGray
    };

    let mut list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Folders")
            .border_style(Style::default().fg(border_color)),
    );
    if is_active {
        list = list.highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    }

    let mut state = ListState::default();
    if !rows.is_empty() {
        state.select(Some(cursor));
    }
    f.render_stateful_widget(list, area, &mut state);
}
