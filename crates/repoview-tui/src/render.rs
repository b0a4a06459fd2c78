use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use repoview_core::config::settings::UiConfig;
use repoview_core::view::breadcrumb::crumbs;
use repoview_core::view::list::{self, ListView};
use repoview_core::view::status::{Preview, StatusLine};
use repoview_core::view::tree;

use crate::app::{App, AppMode, Focus};
use crate::image_preview::ImagePreviewState;
use crate::ui::breadcrumb::render_breadcrumb;
use crate::ui::list::render_list;
use crate::ui::popup::{help_lines, render_popup};
use crate::ui::preview::render_preview;
use crate::ui::statusbar::render_statusbar;
use crate::ui::toolbar::render_toolbar;
use crate::ui::tree::render_tree;

/// Screen regions, top to bottom and left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub toolbar: Rect,
    pub breadcrumb: Rect,
    pub tree: Rect,
    pub list: Rect,
    pub preview: Rect,
    pub statusbar: Rect,
}

/// Splits `area` into the fixed rows and the three content columns.
///
/// Ratios come from `[ui]`; out-of-range values are clamped so the list pane
/// always keeps at least a fifth of the width.
pub fn layout(area: Rect, ui: &UiConfig) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let tree_pct = percent(ui.tree_ratio);
    let preview_pct = percent(ui.preview_ratio).min(80 - tree_pct);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(tree_pct),
            Constraint::Percentage(100 - tree_pct - preview_pct),
            Constraint::Percentage(preview_pct),
        ])
        .split(rows[2]);

    Regions {
        toolbar: rows[0],
        breadcrumb: rows[1],
        tree: columns[0],
        list: columns[1],
        preview: columns[2],
        statusbar: rows[3],
    }
}

fn percent(ratio: f64) -> u16 {
    (ratio.clamp(0.0, 0.4) * 100.0).round() as u16
}

/// Composes the full UI layout for one frame.
pub fn render(f: &mut Frame, app: &App, image_state: Option<&mut ImagePreviewState>) {
    let theme = app.theme();
    let show_icons = app.ui().show_icons;
    let snapshot = app.snapshot();
    let session = snapshot.session();
    let regions = layout(f.area(), app.ui());

    render_toolbar(
        f,
        regions.toolbar,
        snapshot.controls(),
        session.query(),
        app.mode() == AppMode::Search,
        app.title(),
        theme,
    );
    render_breadcrumb(f, regions.breadcrumb, &crumbs(session.current_path()), theme);

    let rows = tree::build(&snapshot);
    render_tree(
        f,
        regions.tree,
        &rows,
        app.tree_cursor(&rows),
        theme,
        show_icons,
        app.focus() == Focus::Tree,
    );

    let view = ListView::project(&snapshot);
    render_list(
        f,
        regions.list,
        &view,
        &list::title(session.current_path()),
        app.list_cursor(&view),
        theme,
        show_icons,
        app.focus() == Focus::List,
    );

    render_preview(f, regions.preview, &Preview::project(&snapshot), theme, image_state);
    render_statusbar(
        f,
        regions.statusbar,
        &StatusLine::project(&snapshot),
        app.status_message(),
        theme,
    );

    if app.mode() == AppMode::Help {
        render_popup(f, "Help", &help_lines(app.registry(), app.keymap()), theme);
    }
}
