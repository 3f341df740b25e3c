//! Studio Dark - the default dashboard theme

pub const THEME: &str = r##"# Studio Dark theme for creator-suite

[meta]
name = "Studio Dark"
version = 1

[ui]
background = "#1f2126"
foreground = "#d8d4cf"
border = "#3a3d44"
border_focused = "#e0a458"
title = "#e0a458"
status_bar = "#e0a458"
selection_bg = "#3b3631"
selection_fg = "#f0ebe5"
muted = "#8b857e"
border_type = "rounded"
locked = "#c46a5a"

[content]
header = "#e0a458"
subheader = "#7fb3c8"
info = "#7fb3c8"
success = "#93b667"
warning = "#dcb14f"
error = "#d0654f"

[chart]
axis = "#8b857e"
series = ["#5fb0a6", "#c694c9", "#dcb14f", "#7fb3c8"]
"##;
