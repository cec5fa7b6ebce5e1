//! # Rendering Module
//!
//! Turns the library's [`View`]s and [`CmdResult`]s into text for one of the
//! three output formats:
//!
//! - `term`: styled tables rendered from minijinja templates. Column widths and
//!   padding are computed here (Unicode-aware); templates pick styles through
//!   the `style` filter, which degrades to plain text without color support.
//! - `json`: the view-model as pretty-printed JSON.
//! - `html`: a standalone page with one table per view table.
//!
//! A single table view never emits the female/male pair and a partitioned view
//! never emits the main table, mirroring the two layouts of the roster page.

use super::styles::{names, ROSTER_THEME};
use super::templates;
use clap::ValueEnum;
use minijinja::{Environment, Value};
use roster::api::{CmdMessage, CmdResult, MessageLevel};
use roster::view::{RowView, TableView, View, ALL_TITLE};
use serde::Serialize;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

pub const LOAD_ERROR_MESSAGE: &str = "Error loading student data. Please try again later.";
pub const EMPTY_MESSAGE: &str = "No students found.";
pub const PAGE_HEADING: &str = "Student Roster";
pub const COLUMNS: [&str; 7] = ["ID", "Name", "Gender", "Class", "Marks", "Status", "Email"];

const COLUMN_GAP: &str = "  ";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Term,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s, true)
    }
}

#[derive(Serialize)]
struct RowLine {
    id: String,
    avatar: String,
    name: String,
    gender: String,
    class: String,
    marks: String,
    status: String,
    status_style: &'static str,
    email: String,
}

#[derive(Serialize)]
struct TableData {
    title: String,
    count_label: String,
    header: String,
    rows: Vec<RowLine>,
    empty_message: &'static str,
}

#[derive(Serialize)]
struct LoadErrorData {
    title: &'static str,
    header: String,
    message: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct PageTable<'a> {
    title: &'a str,
    rows: &'a [RowView],
    error: Option<&'static str>,
}

#[derive(Serialize)]
struct PageData<'a> {
    heading: &'static str,
    columns: [&'static str; 7],
    tables: Vec<PageTable<'a>>,
    messages: &'a [CmdMessage],
}

#[derive(Serialize)]
pub struct HelpEntry {
    pub usage: String,
    pub about: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    commands: Vec<HelpEntry>,
}

/// Renders views in one output format, with the templates compiled once.
pub struct ViewRenderer {
    format: OutputFormat,
    use_color: bool,
    env: Environment<'static>,
}

impl ViewRenderer {
    pub fn new(format: OutputFormat, use_color: bool) -> Self {
        Self {
            format,
            use_color,
            env: build_environment(use_color),
        }
    }

    /// The view followed by its messages (embedded in the document for json/html).
    pub fn render_result(&self, result: &CmdResult) -> String {
        match self.format {
            OutputFormat::Term => {
                let mut out = self.render_view(&result.view);
                out.push_str(&self.render_messages(&result.messages));
                out
            }
            OutputFormat::Json => to_json(result),
            OutputFormat::Html => self.render_page(result.view.tables(), &result.messages, None),
        }
    }

    pub fn render_view(&self, view: &View) -> String {
        match self.format {
            OutputFormat::Term => view
                .tables()
                .into_iter()
                .map(|table| self.render_table(table))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputFormat::Json => to_json(view),
            OutputFormat::Html => self.render_page(view.tables(), &[], None),
        }
    }

    /// The main table reduced to a single error row.
    pub fn render_load_error(&self) -> String {
        match self.format {
            OutputFormat::Term => {
                let widths = ColumnWidths::header_only();
                let data = LoadErrorData {
                    title: ALL_TITLE,
                    header: widths.header(),
                    message: LOAD_ERROR_MESSAGE,
                };
                self.render_template(templates::LOAD_ERROR.0, &data)
            }
            OutputFormat::Json => to_json(&serde_json::json!({
                "layout": "single",
                "table": { "title": ALL_TITLE, "rows": [] },
                "error": LOAD_ERROR_MESSAGE,
            })),
            OutputFormat::Html => {
                let empty = TableView::new(ALL_TITLE, &[]);
                self.render_page(vec![&empty], &[], Some(LOAD_ERROR_MESSAGE))
            }
        }
    }

    /// Messages as styled lines. Only the term format prints them on their own.
    pub fn render_messages(&self, messages: &[CmdMessage]) -> String {
        if messages.is_empty() || self.format != OutputFormat::Term {
            return String::new();
        }

        let data = MessagesData {
            messages: messages
                .iter()
                .map(|msg| MessageData {
                    content: msg.content.clone(),
                    style: message_style(msg.level),
                })
                .collect(),
        };

        self.render_template(templates::MESSAGES.0, &data)
    }

    pub fn render_help(&self, commands: Vec<HelpEntry>) -> String {
        let width = commands.iter().map(|c| c.usage.width()).max().unwrap_or(0);
        let commands = commands
            .into_iter()
            .map(|c| HelpEntry {
                usage: pad(&c.usage, width),
                about: c.about,
            })
            .collect();
        self.render_template(templates::SHELL_HELP.0, &HelpData { commands })
    }

    /// Styles a single string with a theme style, honoring the color setting.
    pub fn style(&self, name: &str, text: &str) -> String {
        ROSTER_THEME.apply(name, text, self.use_color)
    }

    fn render_table(&self, table: &TableView) -> String {
        let widths = ColumnWidths::measure(&table.rows);
        let rows = table
            .rows
            .iter()
            .map(|row| RowLine {
                id: pad(&row.id.to_string(), widths.id),
                avatar: pad(&row.avatar, widths.avatar),
                name: pad(&row.name, widths.name),
                gender: pad(&row.gender, widths.gender),
                class: pad(&row.class.to_string(), widths.class),
                marks: pad(&row.marks, widths.marks),
                status: pad(&row.status, widths.status),
                status_style: if row.passing {
                    names::PASSING
                } else {
                    names::FAILED
                },
                email: row.email.clone(),
            })
            .collect();

        let data = TableData {
            title: table.title.clone(),
            count_label: format!("({})", table.len()),
            header: widths.header(),
            rows,
            empty_message: EMPTY_MESSAGE,
        };
        self.render_template(templates::TABLE.0, &data)
    }

    fn render_page(
        &self,
        tables: Vec<&TableView>,
        messages: &[CmdMessage],
        error: Option<&'static str>,
    ) -> String {
        let data = PageData {
            heading: PAGE_HEADING,
            columns: COLUMNS,
            tables: tables
                .into_iter()
                .map(|t| PageTable {
                    title: &t.title,
                    rows: &t.rows,
                    error,
                })
                .collect(),
            messages,
        };
        self.render_template(templates::PAGE.0, &data)
    }

    fn render_template<T: Serialize>(&self, name: &str, data: &T) -> String {
        let rendered = self
            .env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data));
        match rendered {
            Ok(mut out) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out
            }
            Err(e) => format!("Render error: {}\n", e),
        }
    }
}

fn build_environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    for (name, source) in templates::ALL {
        if let Err(e) = env.add_template(name, source) {
            tracing::error!(template = name, error = %e, "invalid template");
        }
    }
    env.add_filter("style", move |value: Value, name: String| -> String {
        ROSTER_THEME.apply(&name, &value.to_string(), use_color)
    });
    env
}

fn message_style(level: MessageLevel) -> &'static str {
    match level {
        MessageLevel::Info => names::INFO,
        MessageLevel::Success => names::SUCCESS,
        MessageLevel::Warning => names::WARNING,
        MessageLevel::Error => names::ERROR,
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(json) => format!("{}\n", json),
        Err(e) => format!("Render error: {}\n", e),
    }
}

/// Per-column display widths for one table.
struct ColumnWidths {
    id: usize,
    avatar: usize,
    name: usize,
    gender: usize,
    class: usize,
    marks: usize,
    status: usize,
}

impl ColumnWidths {
    fn header_only() -> Self {
        Self::measure(&[])
    }

    fn measure(rows: &[RowView]) -> Self {
        let widest = |header: &str, cells: Vec<usize>| {
            cells.into_iter().fold(header.width(), usize::max)
        };

        let avatar = rows.iter().map(|r| r.avatar.width()).fold(1, usize::max);
        let name_cells = rows.iter().map(|r| r.name.width()).max().unwrap_or(0);
        // The Name header spans the avatar, a space and the name.
        let name = name_cells.max(COLUMNS[1].width().saturating_sub(avatar + 1));

        Self {
            id: widest(COLUMNS[0], rows.iter().map(|r| r.id.to_string().width()).collect()),
            avatar,
            name,
            gender: widest(COLUMNS[2], rows.iter().map(|r| r.gender.width()).collect()),
            class: widest(COLUMNS[3], rows.iter().map(|r| r.class.to_string().width()).collect()),
            marks: widest(COLUMNS[4], rows.iter().map(|r| r.marks.width()).collect()),
            status: widest(COLUMNS[5], rows.iter().map(|r| r.status.width()).collect()),
        }
    }

    fn header(&self) -> String {
        [
            pad(COLUMNS[0], self.id),
            pad(COLUMNS[1], self.avatar + 1 + self.name),
            pad(COLUMNS[2], self.gender),
            pad(COLUMNS[3], self.class),
            pad(COLUMNS[4], self.marks),
            pad(COLUMNS[5], self.status),
            COLUMNS[6].to_string(),
        ]
        .join(COLUMN_GAP)
    }
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
