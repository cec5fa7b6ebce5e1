//! Styles for the roster CLI.
//!
//! Templates only ever name *semantic* styles (`status-passing`, `header`,
//! ...). This module maps those names to concrete `console::Style`s, so the
//! look can change without touching templates or rendering code.
//!
//! A style name the theme does not know is rendered with a `(!?)` prefix so
//! typos in templates show up immediately instead of silently losing styling.
use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style that is not registered.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const TABLE_TITLE: &str = "table-title";
    pub const HEADER: &str = "header";
    pub const AVATAR: &str = "avatar";
    pub const MUTED: &str = "muted";
    pub const PASSING: &str = "status-passing";
    pub const FAILED: &str = "status-failed";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const PROMPT: &str = "prompt";
}

pub static ROSTER_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TABLE_TITLE, Style::new().bold().underlined())
        .add(names::HEADER, Style::new().bold())
        .add(names::AVATAR, Style::new().black().on_cyan())
        .add(names::MUTED, Style::new().color256(245))
        .add(names::PASSING, Style::new().green())
        .add(names::FAILED, Style::new().red())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, Style::new().color256(245).italic())
        .add(names::PROMPT, Style::new().cyan().bold())
});

/// A named collection of styles.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named style, replacing any existing one with the same name.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Applies a named style. With `use_color` off the text is returned
    /// unchanged, but unknown names still get the missing-style indicator.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style
                .clone()
                .force_styling(true)
                .apply_to(text)
                .to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}
