use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use repoview_core::config::theme::{parse_color, Theme};
use repoview_core::view::breadcrumb::Crumb;

/// Separator drawn between crumbs.
pub const SEPARATOR: &str = " \u{203a} ";

/// Builds the breadcrumb trail.
/// Example: " Home › Kits › 2024"
pub fn breadcrumb_line(crumbs: &[Crumb], theme: &Theme) -> Line<'static> {
    let home_fg = parse_color(&theme.breadcrumb.home_fg);
    let sep_fg = parse_color(&theme.breadcrumb.separator_fg);
    let comp_fg = parse_color(&theme.breadcrumb.component_fg);

    let mut parts: Vec<Span> = Vec::with_capacity(crumbs.len() * 2 + 1);
    parts.push(Span::raw(" "));
    for (i, crumb) in crumbs.iter().enumerate() {
        if i == 0 {
            parts.push(Span::styled(
                crumb.label.clone(),
                Style::default().fg(home_fg).add_modifier(Modifier::BOLD),
            ));
            continue;
        }
        parts.push(Span::styled(SEPARATOR, Style::default().fg(sep_fg)));
        let style = if i + 1 == crumbs.len() {
            Style::default().fg(comp_fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(comp_fg)
        };
        parts.push(Span::styled(crumb.label.clone(), style));
    }
    Line::from(parts)
}

/// Renders the breadcrumb trail for the current path.
pub fn render_breadcrumb(f: &mut Frame, area: Rect, crumbs: &[Crumb], theme: &Theme) {
    let bg = parse_color(&theme.breadcrumb.bg);
    let breadcrumb =
        Paragraph::new(breadcrumb_line(crumbs, theme)).style(Style::default().bg(bg));
    f.render_widget(breadcrumb, area);
}
