// Theme system for the TUI
//
// - TomlTheme: on-disk format with every color named explicitly
// - Theme: resolved colors ready for rendering
//
// Theme loading priority:
// 1. External TOML themes from ~/.config/creator-suite/themes/*.toml
// 2. Bundled themes (extracted on first run)
// 3. Fallback to hardcoded default

mod bundled;
mod toml_format;

pub use toml_format::TomlTheme;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use std::path::PathBuf;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Shell ───────────────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub highlight: Color,
    pub title: Color,
    pub status_bar: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub muted: Color,
    pub locked: Color,
    pub border_type: BorderType,

    // ─── Output blocks ───────────────────────────────────────
    pub header: Color,
    pub subheader: Color,
    pub info: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,

    // ─── Charts ──────────────────────────────────────────────
    pub axis: Color,
    pub series: Vec<Color>,
}

impl Theme {
    /// Load theme by name, falling back to the hardcoded default
    pub fn by_name(name: &str) -> Self {
        match Self::load_toml(name) {
            Some(theme) => theme,
            None => {
                tracing::warn!(theme = %name, "Theme not found, using fallback");
                Self::hardcoded_default()
            }
        }
    }

    /// Load from an external TOML file or a bundled theme
    fn load_toml(name: &str) -> Option<Self> {
        let normalized = name.replace(' ', "_");

        if let Some(dir) = Self::themes_dir() {
            for stem in [name, normalized.as_str()] {
                let path = dir.join(format!("{}.toml", stem));
                let Ok(contents) = std::fs::read_to_string(&path) else {
                    continue;
                };
                match TomlTheme::from_str(&contents) {
                    Ok(toml_theme) => return Some(Self::from_toml(toml_theme)),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Ignoring broken theme file");
                    }
                }
            }
        }

        let filename = format!("{}.toml", normalized);
        bundled::BUNDLED_THEMES
            .iter()
            .find(|t| t.filename.eq_ignore_ascii_case(&filename))
            .and_then(|t| TomlTheme::from_str(t.content).ok())
            .map(Self::from_toml)
    }

    /// Get themes directory path
    fn themes_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".config").join("creator-suite").join("themes"))
    }

    fn parse_border_type(value: Option<&str>) -> BorderType {
        match value {
            Some("rounded") => BorderType::Rounded,
            Some("double") => BorderType::Double,
            Some("thick") => BorderType::Thick,
            _ => BorderType::Plain,
        }
    }

    /// Create theme from native TOML format
    fn from_toml(toml: TomlTheme) -> Self {
        let parse = TomlTheme::parse_color;
        let foreground = parse(&toml.ui.foreground);

        let mut series: Vec<Color> = toml.chart.series.iter().map(|c| parse(c)).collect();
        if series.is_empty() {
            series.push(foreground);
        }

        Self {
            name: toml.meta.name.clone(),

            background: parse(&toml.ui.background),
            foreground,
            border: parse(&toml.ui.border),
            highlight: parse(&toml.ui.border_focused),
            title: parse(&toml.ui.title),
            status_bar: parse(&toml.ui.status_bar),
            selection: parse(&toml.ui.selection_bg),
            selection_fg: parse(&toml.ui.selection_fg),
            muted: toml.ui.muted.as_deref().map(parse).unwrap_or(foreground),
            locked: toml
                .ui
                .locked
                .as_deref()
                .map(parse)
                .unwrap_or_else(|| parse(&toml.content.error)),
            border_type: Self::parse_border_type(toml.ui.border_type.as_deref()),

            header: parse(&toml.content.header),
            subheader: parse(&toml.content.subheader),
            info: parse(&toml.content.info),
            success: parse(&toml.content.success),
            warning: parse(&toml.content.warning),
            error: parse(&toml.content.error),

            axis: parse(&toml.chart.axis),
            series,
        }
    }

    /// Hardcoded fallback when no themes can be loaded
    fn hardcoded_default() -> Self {
        Self {
            name: "Studio Dark (Fallback)".to_string(),

            background: Color::Rgb(31, 33, 38),
            foreground: Color::Rgb(216, 212, 207),
            border: Color::Rgb(58, 61, 68),
            highlight: Color::Rgb(224, 164, 88),
            title: Color::Rgb(224, 164, 88),
            status_bar: Color::Rgb(224, 164, 88),
            selection: Color::Rgb(59, 54, 49),
            selection_fg: Color::Rgb(240, 235, 229),
            muted: Color::Rgb(139, 133, 126),
            locked: Color::Rgb(196, 106, 90),
            border_type: BorderType::Plain,

            header: Color::Rgb(224, 164, 88),
            subheader: Color::Rgb(127, 179, 200),
            info: Color::Rgb(127, 179, 200),
            success: Color::Rgb(147, 182, 103),
            warning: Color::Rgb(220, 177, 79),
            error: Color::Rgb(208, 101, 79),

            axis: Color::Rgb(139, 133, 126),
            series: vec![Color::Rgb(95, 176, 166), Color::Rgb(198, 148, 201)],
        }
    }

    /// Color for the `index`-th chart series
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }

    /// List all available themes (bundled + external)
    pub fn list_available() -> Vec<String> {
        let mut themes: Vec<String> = bundled::list_bundled_themes()
            .into_iter()
            .map(str::to_string)
            .collect();

        if let Some(entries) = Self::themes_dir().and_then(|d| std::fs::read_dir(d).ok()) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) = path.file_stem() {
                        let display_name = stem.to_string_lossy().replace('_', " ");
                        if !themes.iter().any(|t| t.eq_ignore_ascii_case(&display_name)) {
                            themes.push(display_name);
                        }
                    }
                }
            }
        }

        themes
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::by_name(crate::config::DEFAULT_THEME)
    }
}

/// Ensure themes directory exists and extract bundled themes on first run
pub fn ensure_themes_extracted() {
    let Some(themes_dir) = Theme::themes_dir() else {
        return;
    };

    if std::fs::create_dir_all(&themes_dir).is_err() {
        return;
    }

    let marker = themes_dir.join(".extracted_v1");
    if marker.exists() {
        return;
    }

    for theme in bundled::BUNDLED_THEMES {
        let path = themes_dir.join(theme.filename);
        // Never overwrite user edits
        if !path.exists() {
            let _ = std::fs::write(&path, theme.content);
        }
    }

    let _ = std::fs::write(&marker, "1");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_theme_resolves_by_display_name() {
        let theme = Theme::load_toml("Studio Light").unwrap();
        assert_eq!(theme.name, "Studio Light");
        assert_eq!(theme.border_type, BorderType::Rounded);
    }

    #[test]
    fn terminal_theme_uses_ansi_colors() {
        let theme = Theme::load_toml("terminal").unwrap();
        assert_eq!(theme.background, Color::Reset);
        assert_eq!(theme.success, Color::Green);
        // muted not set, falls back to foreground
        assert_eq!(theme.muted, theme.foreground);
    }

    #[test]
    fn series_colors_cycle() {
        let theme = Theme::hardcoded_default();
        assert_eq!(theme.series_color(0), theme.series_color(2));
    }

    #[test]
    fn bundled_names_are_listed() {
        let names = Theme::list_available();
        assert!(names.iter().any(|n| n == "Studio Dark"));
        assert!(names.iter().any(|n| n == "Terminal"));
    }
}
