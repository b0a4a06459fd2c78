use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use repoview_core::config::theme::{parse_color, Theme};
use repoview_core::{ActionCategory, ActionRegistry, Keymap};

/// Builds the help text: one section per action category, each action with
/// the keys currently bound to it.
pub fn help_lines(registry: &ActionRegistry, keymap: &Keymap) -> Vec<String> {
    let mut lines = Vec::new();
    for category in [ActionCategory::Navigation, ActionCategory::View, ActionCategory::System] {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(category.label().to_string());
        for desc in registry.all().iter().filter(|d| d.category == category) {
            let keys = keymap
                .keys_for_action(desc.action)
                .map(|keys| keys.join(", "))
                .unwrap_or_else(|| "-".to_string());
            lines.push(format!("  {keys:<22} {}", desc.description));
        }
    }
    lines.push(String::new());
    lines.push(format!("  {:<22} {}", "Ctrl+c", "Exit the explorer"));
    lines
}

/// Renders a centered popup dialog with the given title and message lines.
pub fn render_popup(f: &mut Frame, title: &str, lines: &[String], theme: &Theme) {
    let area = centered_rect(60, 60, f.area());
    let border_fg = parse_color(&theme.popup.border_fg);

    f.render_widget(Clear, area);

    let content: Vec<Line> = lines
        .iter()
        .map(|l| {
            if l.starts_with(' ') || l.is_empty() {
                Line::from(l.as_str())
            } else {
                Line::from(Span::styled(
                    l.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
            }
        })
        .collect();

    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(popup, area);
}

/// Calculates a centered rectangle of the given percentage size within the parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
