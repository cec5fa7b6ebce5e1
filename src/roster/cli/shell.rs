//! Interactive roster session.
//!
//! Each input line is one user action against the same [`RosterApi`], so the
//! view mode carries over between lines exactly as it does between clicks on
//! the roster page: after `sort gender`, every `search` renders two tables
//! until another sort switches back to one.

use super::render::{HelpEntry, ViewRenderer};
use super::styles::names;
use roster::api::{CmdMessage, RosterApi};
use roster::source::DataSource;
use roster::view::{Action, SortAction};
use std::io::{self, BufRead, Write};
use tracing::debug;

const PROMPT: &str = "roster>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Run(Action),
    Show,
    Mode,
    Help,
    Quit,
}

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (trimmed, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "/" => ShellCommand::Run(Action::Search(rest.to_string())),
        "sort" => {
            let action = rest.parse::<SortAction>().map_err(|e| e.to_string())?;
            ShellCommand::Run(Action::Sort(action))
        }
        "show" => ShellCommand::Show,
        "mode" => ShellCommand::Mode,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => match other.parse::<SortAction>() {
            Ok(action) if rest.is_empty() => ShellCommand::Run(Action::Sort(action)),
            _ => {
                return Err(format!(
                    "Unknown command '{}'. Type 'help' for commands.",
                    word
                ))
            }
        },
    };
    Ok(Some(command))
}

fn help_entries() -> Vec<HelpEntry> {
    vec![
        HelpEntry {
            usage: "search <term>".into(),
            about: "filter by name or email (blank shows everyone)",
        },
        HelpEntry {
            usage: "sort <az|za|marks|passing|class|gender>".into(),
            about: "sort or split the roster",
        },
        HelpEntry {
            usage: "show".into(),
            about: "print the current view again",
        },
        HelpEntry {
            usage: "mode".into(),
            about: "print the current view mode",
        },
        HelpEntry {
            usage: "help".into(),
            about: "this list",
        },
        HelpEntry {
            usage: "quit".into(),
            about: "leave the shell",
        },
    ]
}

/// Reads commands until `quit` or end of input.
///
/// The api must already be loaded; actions on an unloaded api are reported
/// as error messages.
pub fn run_shell<S, R, W>(
    api: &mut RosterApi<S>,
    renderer: &ViewRenderer,
    input: R,
    out: &mut W,
    show_prompt: bool,
) -> io::Result<()>
where
    S: DataSource,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        if show_prompt {
            write!(out, "{} ", renderer.style(names::PROMPT, PROMPT))?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                write!(out, "{}", renderer.render_messages(&[CmdMessage::warning(message)]))?;
                continue;
            }
        };
        debug!(?command, "shell command");

        match command {
            ShellCommand::Run(action) => match api.dispatch(action) {
                Ok(result) => write!(out, "{}", renderer.render_result(&result))?,
                Err(e) => write!(
                    out,
                    "{}",
                    renderer.render_messages(&[CmdMessage::error(e.to_string())])
                )?,
            },
            ShellCommand::Show => {
                if let Some(view) = api.current_view() {
                    write!(out, "{}", renderer.render_view(view))?;
                }
            }
            ShellCommand::Mode => writeln!(out, "{}", api.mode())?,
            ShellCommand::Help => write!(out, "{}", renderer.render_help(help_entries()))?,
            ShellCommand::Quit => break,
        }
    }
    Ok(())
}
