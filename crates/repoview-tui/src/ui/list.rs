//! List pane rendering with name/type/size columns and theme support.
//!
//! Rows come pre-sorted and pre-filtered from [`ListView`]; this module only
//! styles them. The row under the cursor is reversed when the pane has
//! focus; the selected (previewed) entry is marked with a bullet.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use repoview_core::config::theme::{parse_color, Theme};
use repoview_core::naming::EntryIcon;
use repoview_core::view::list::{ListRow, ListView};

use crate::icons::glyph;

/// Marker in front of the selected entry.
const SELECTED_MARK: &str = "\u{2022} ";

/// Text of the name column: selection mark, icon, escaped name.
pub fn name_text(row: &ListRow, show_icons: bool) -> String {
    let mark = if row.selected { SELECTED_MARK } else { "  " };
    format!("{mark}{}{}", glyph(row.icon, show_icons), row.name)
}

fn name_style(row: &ListRow, theme: &Theme) -> Style {
    if row.selected {
        return Style::default()
            .fg(parse_color(&theme.list.selected_fg))
            .add_modifier(Modifier::BOLD);
    }
    match row.icon {
        EntryIcon::Folder => Style::default()
            .fg(parse_color(&theme.list.dir_fg))
            .add_modifier(Modifier::BOLD),
        EntryIcon::Image => Style::default().fg(parse_color(&theme.list.image_fg)),
        EntryIcon::Document => Style::default(),
    }
}

/// The single line shown instead of rows, if any.
pub fn placeholder_line(view: &ListView, theme: &Theme) -> Option<Line<'static>> {
    let text = view.placeholder()?.to_string();
    let fg = match view {
        ListView::Error(_) => parse_color(&theme.list.error_fg),
        _ => parse_color(&theme.list.placeholder_fg),
    };
    Some(Line::from(Span::styled(
        text,
        Style::default().fg(fg).add_modifier(Modifier::ITALIC),
    )))
}

/// Renders the list pane for the current directory.
#[allow(clippy::too_many_arguments)]
pub fn render_list(
    f: &mut Frame,
    area: Rect,
    view: &ListView,
    title: &str,
    cursor: usize,
    theme: &Theme,
    show_icons: bool,
    is_active: bool,
) {
    let border_color = if is_active {
        parse_color(&theme.list.selected_fg)
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_owned())
        .border_style(Style::default().fg(border_color));

    if let Some(line) = placeholder_line(view, theme) {
        f.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let detail = Style::default().fg(parse_color(&theme.list.detail_fg));
    let rows: Vec<Row> = view
        .rows()
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(Span::styled(name_text(row, show_icons), name_style(row, theme))),
                Cell::from(Span::styled(row.type_label.clone(), detail)),
                Cell::from(Line::from(Span::styled(row.size.clone(), detail)).right_aligned()),
            ])
        })
        .collect();

    let header = Row::new(vec!["Name", "Type", "Size"]).style(
        Style::default()
            .fg(parse_color(&theme.list.header_fg))
            .add_modifier(Modifier::BOLD),
    );

    let mut table = Table::new(
        rows,
        [
            Constraint::Min(16),
            Constraint::Length(14),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(block);
    if is_active {
        table = table.row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    }

    let mut state = TableState::default();
    state.select(Some(cursor));
    f.render_stateful_widget(table, area, &mut state);
}
