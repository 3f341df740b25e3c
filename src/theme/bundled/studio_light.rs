//! Studio Light - daylight variant of Studio Dark

pub const THEME: &str = r##"# Studio Light theme for creator-suite

[meta]
name = "Studio Light"
version = 1

[ui]
background = "#f7f4ef"
foreground = "#3b3833"
border = "#d3cdc4"
border_focused = "#b06f1e"
title = "#b06f1e"
status_bar = "#b06f1e"
selection_bg = "#e8dfd2"
selection_fg = "#2a2723"
muted = "#8a8377"
border_type = "rounded"
locked = "#b2452f"

[content]
header = "#b06f1e"
subheader = "#2f6f8a"
info = "#2f6f8a"
success = "#4f7a25"
warning = "#9a7412"
error = "#b2452f"

[chart]
axis = "#8a8377"
series = ["#2a7d73", "#8a4f8e", "#9a7412", "#2f6f8a"]
"##;
