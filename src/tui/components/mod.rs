// Components module - UI building blocks
//
// Shell components (title bar, status bar, toast) read the App directly.
// Panes (nav, form, output, logs, chart) take the data they draw so they can
// be tested without a terminal.

pub mod chart_panel;
pub mod form_panel;
pub mod formatters;
pub mod logs_panel;
pub mod nav_panel;
pub mod output_panel;
pub mod scrollbar;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use logs_panel::LogsPanel;
pub use nav_panel::NavPanel;
pub use output_panel::OutputPanel;
pub use toast::Toast;
