// TOML theme format parser
//
// Each theme names every color the dashboard draws with. Sections:
// [meta], [ui] for chrome, [content] for output blocks, [chart] for series.
//
// Format version: 1

use ratatui::style::Color;
use serde::Deserialize;

/// Root structure for TOML theme files
#[derive(Debug, Clone, Deserialize)]
pub struct TomlTheme {
    pub meta: ThemeMeta,
    pub ui: UiColors,
    pub content: ContentColors,
    pub chart: ChartColors,
}

/// Theme metadata
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeMeta {
    pub name: String,
    pub version: u32,
}

/// Shell chrome colors
#[derive(Debug, Clone, Deserialize)]
pub struct UiColors {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub border_focused: String,
    pub title: String,
    pub status_bar: String,
    pub selection_bg: String,
    pub selection_fg: String,
    /// Secondary text; falls back to foreground
    pub muted: Option<String>,
    /// "plain", "rounded", "double" or "thick" (default: plain)
    pub border_type: Option<String>,
    /// Lock marker for gated panels in the sidebar
    pub locked: Option<String>,
}

/// Output block colors
#[derive(Debug, Clone, Deserialize)]
pub struct ContentColors {
    pub header: String,
    pub subheader: String,
    pub info: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

/// Chart colors
#[derive(Debug, Clone, Deserialize)]
pub struct ChartColors {
    pub axis: String,
    /// Series colors, cycled when a chart has more series than entries
    pub series: Vec<String>,
}

impl TomlTheme {
    /// Parse a TOML theme from string
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Parse a color string to ratatui Color
    /// Supports:
    /// - Hex format: #RRGGBB
    /// - ANSI format: ansi:0-15, ansi:fg, ansi:bg
    pub fn parse_color(value: &str) -> Color {
        Self::try_parse_color(value).unwrap_or(Color::White)
    }

    /// Like [`parse_color`](Self::parse_color) but reports unparseable input
    pub fn try_parse_color(value: &str) -> Option<Color> {
        if let Some(ansi) = value.strip_prefix("ansi:") {
            let color = match ansi {
                "0" => Color::Black,
                "1" => Color::Red,
                "2" => Color::Green,
                "3" => Color::Yellow,
                "4" => Color::Blue,
                "5" => Color::Magenta,
                "6" => Color::Cyan,
                "7" => Color::White,
                "8" => Color::DarkGray,
                "9" => Color::LightRed,
                "10" => Color::LightGreen,
                "11" => Color::LightYellow,
                "12" => Color::LightBlue,
                "13" => Color::LightMagenta,
                "14" => Color::LightCyan,
                "15" => Color::Gray,
                "fg" | "bg" => Color::Reset,
                _ => return None,
            };
            return Some(color);
        }

        let hex = value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color::Rgb(r, g, b))
    }
}
