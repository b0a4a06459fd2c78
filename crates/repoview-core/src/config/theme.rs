//! Theme configuration.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use serde::{Deserialize, Serialize};

/// Complete theme configuration with per-region color groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub tree: TreeTheme,
    #[serde(default)]
    pub list: ListTheme,
    #[serde(default)]
    pub toolbar: ToolbarTheme,
    #[serde(default)]
    pub breadcrumb: BreadcrumbTheme,
    #[serde(default)]
    pub preview: PreviewTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

/// Folder tree colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeTheme {
    pub dir_fg: String,
    pub active_fg: String,
    pub twisty_fg: String,
}

impl Default for TreeTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".to_string(),
            active_fg: "yellow".to_string(),
            twisty_fg: "dark_gray".to_string(),
        }
    }
}

/// List pane colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListTheme {
    pub dir_fg: String,
    pub image_fg: String,
    pub selected_fg: String,
    pub header_fg: String,
    pub detail_fg: String,
    pub placeholder_fg: String,
    pub error_fg: String,
}

impl Default for ListTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".to_string(),
            image_fg: "magenta".to_string(),
            selected_fg: "yellow".to_string(),
            header_fg: "cyan".to_string(),
            detail_fg: "gray".to_string(),
            placeholder_fg: "dark_gray".to_string(),
            error_fg: "red".to_string(),
        }
    }
}

/// Back/Forward/Up controls and search box colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarTheme {
    pub enabled_fg: String,
    pub disabled_fg: String,
    pub search_fg: String,
}

impl Default for ToolbarTheme {
    fn default() -> Self {
        Self {
            enabled_fg: "white".to_string(),
            disabled_fg: "dark_gray".to_string(),
            search_fg: "yellow".to_string(),
        }
    }
}

/// Breadcrumb path colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BreadcrumbTheme {
    pub bg: String,
    pub home_fg: String,
    pub separator_fg: String,
    pub component_fg: String,
}

impl Default for BreadcrumbTheme {
    fn default() -> Self {
        Self {
            bg: "dark_gray".to_string(),
            home_fg: "cyan".to_string(),
            separator_fg: "gray".to_string(),
            component_fg: "white".to_string(),
        }
    }
}

/// Preview panel colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewTheme {
    pub border_fg: String,
    pub title_fg: String,
    pub link_fg: String,
    pub placeholder_fg: String,
    pub error_fg: String,
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self {
            border_fg: "dark_gray".to_string(),
            title_fg: "white".to_string(),
            link_fg: "light_blue".to_string(),
            placeholder_fg: "dark_gray".to_string(),
            error_fg: "red".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarTheme {
    pub bg: String,
    pub counts_fg: String,
    pub selection_fg: String,
    pub message_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            counts_fg: "black".to_string(),
            selection_fg: "blue".to_string(),
            message_fg: "magenta".to_string(),
        }
    }
}

/// Popup/dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupTheme {
    pub border_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        hex if hex.starts_with('#') && hex.len() == 7 && hex.is_ascii() => {
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).unwrap_or(0)
            };
            Color::Rgb(channel(1..3), channel(3..5), channel(5..7))
        }
        _ => Color::Reset,
    }
}
