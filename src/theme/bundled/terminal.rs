//! Terminal - inherits the terminal's own ANSI palette
//!
//! Uses "ansi:N" colors (0-7 standard, 8-15 bright, fg/bg for defaults)
//! so the dashboard follows whatever the terminal is configured with.

pub const THEME: &str = r##"# Terminal theme for creator-suite

[meta]
name = "Terminal"
version = 1

[ui]
background = "ansi:bg"
foreground = "ansi:fg"
border = "ansi:fg"
border_focused = "ansi:3"
title = "ansi:6"
status_bar = "ansi:fg"
selection_bg = "ansi:8"
selection_fg = "ansi:fg"
locked = "ansi:1"

[content]
header = "ansi:6"
subheader = "ansi:4"
info = "ansi:4"
success = "ansi:2"
warning = "ansi:3"
error = "ansi:1"

[chart]
axis = "ansi:8"
series = ["ansi:6", "ansi:5", "ansi:3", "ansi:2"]
"##;
