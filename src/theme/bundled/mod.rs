//! Bundled TOML themes (compiled into binary, extracted on first run)
//!
//! Written to ~/.config/creator-suite/themes/ on first run so users can
//! edit them or add their own next to them.

mod studio_dark;
mod studio_light;
mod terminal;

pub use studio_dark::THEME as STUDIO_DARK;
pub use studio_light::THEME as STUDIO_LIGHT;
pub use terminal::THEME as TERMINAL;

/// Bundled theme: file name and TOML content
pub struct BundledTheme {
    pub filename: &'static str,
    pub content: &'static str,
}

/// All bundled themes
pub const BUNDLED_THEMES: &[BundledTheme] = &[
    BundledTheme {
        filename: "Studio_Dark.toml",
        content: STUDIO_DARK,
    },
    BundledTheme {
        filename: "Studio_Light.toml",
        content: STUDIO_LIGHT,
    },
    BundledTheme {
        filename: "Terminal.toml",
        content: TERMINAL,
    },
];

/// Display names of the bundled themes
pub fn list_bundled_themes() -> Vec<&'static str> {
    vec!["Studio Dark", "Studio Light", "Terminal"]
}
