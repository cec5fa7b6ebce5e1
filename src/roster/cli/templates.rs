//! # CLI Templates
//!
//! Output is rendered from minijinja templates kept as standalone files under
//! `templates/` and embedded here at compile time.
//!
//! Layout math (column widths, padding) happens in `render.rs`; templates only
//! arrange pre-padded strings and choose styles through the `style` filter.
//! Loops emit their own line breaks, so each row line in a template ends right
//! before `{% endfor %}` or `{% else %}`.
//!
//! Templates whose name ends in `.html` are HTML-escaped automatically.

pub const TABLE: (&str, &str) = ("table.tmp", include_str!("templates/table.tmp"));
pub const LOAD_ERROR: (&str, &str) = ("load_error.tmp", include_str!("templates/load_error.tmp"));
pub const MESSAGES: (&str, &str) = ("messages.tmp", include_str!("templates/messages.tmp"));
pub const SHELL_HELP: (&str, &str) = ("shell_help.tmp", include_str!("templates/shell_help.tmp"));
pub const PAGE: (&str, &str) = ("page.html", include_str!("templates/page.html"));

pub const ALL: [(&str, &str); 5] = [TABLE, LOAD_ERROR, MESSAGES, SHELL_HELP, PAGE];
