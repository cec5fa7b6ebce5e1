use super::logging::{init_logging, LogConfig};
use super::render::{OutputFormat, ViewRenderer};
use super::setup::{Cli, Commands};
use super::shell::run_shell;
use clap::Parser;
use console::Term;
use roster::api::{CmdMessage, CmdResult, RosterApi};
use roster::config::{config_dir, RosterConfig};
use roster::error::{RosterError, Result};
use roster::source::{self, DataSource};
use roster::view::SortAction;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: RosterApi<Box<dyn DataSource>>,
    renderer: ViewRenderer,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let no_color_env = std::env::var_os("NO_COLOR").is_some();
    let use_color = color_enabled(
        cli.no_color,
        no_color_env,
        Term::stdout().features().colors_supported(),
    );
    let log_ansi = color_enabled(
        cli.no_color,
        no_color_env,
        Term::stderr().features().colors_supported(),
    );
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_ansi(log_ansi));

    let config_dir = config_dir()?;
    let config = RosterConfig::load(&config_dir)?;

    match cli.command {
        Some(Commands::Config { key, value }) => {
            handle_config(config, config_dir, key, value, use_color)
        }
        Some(Commands::List { sort, search }) => {
            let mut ctx = init_context(&cli.data, cli.output, &config, use_color)?;
            handle_list(&mut ctx, sort, search)
        }
        Some(Commands::Shell) => {
            let mut ctx = init_context(&cli.data, cli.output, &config, use_color)?;
            handle_shell(&mut ctx)
        }
        None => {
            let mut ctx = init_context(&cli.data, cli.output, &config, use_color)?;
            handle_list(&mut ctx, None, None)
        }
    }
}

/// Color for one stream: the terminal behind it must support it and neither
/// `--no-color` nor `NO_COLOR` may be set.
fn color_enabled(no_color_flag: bool, no_color_env: bool, stream_supports_color: bool) -> bool {
    !no_color_flag && !no_color_env && stream_supports_color
}

fn init_context(
    data: &Option<String>,
    output: Option<OutputFormat>,
    config: &RosterConfig,
    use_color: bool,
) -> Result<AppContext> {
    let location = config.resolve_data(data.as_deref());
    let format = match output {
        Some(format) => format,
        None => config
            .output
            .parse::<OutputFormat>()
            .map_err(RosterError::Config)?,
    };
    debug!(%location, ?format, "cli context");

    Ok(AppContext {
        api: RosterApi::new(source::open(&location)),
        renderer: ViewRenderer::new(format, use_color),
    })
}

/// Loads the roster, or prints the error table and hands back the failure.
fn load(ctx: &mut AppContext) -> Result<CmdResult> {
    ctx.api.load().inspect_err(|_| {
        print!("{}", ctx.renderer.render_load_error());
    })
}

fn handle_list(
    ctx: &mut AppContext,
    sort: Option<SortAction>,
    search: Option<String>,
) -> Result<()> {
    let loaded = load(ctx)?;
    let mut result = CmdResult::new(loaded.view);

    if let Some(action) = sort {
        let sorted = ctx.api.sort(action)?;
        result.view = sorted.view;
        result.messages.extend(sorted.messages);
    }
    if let Some(term) = search {
        let found = ctx.api.search(&term)?;
        result.view = found.view;
        result.messages.extend(found.messages);
    }

    print!("{}", ctx.renderer.render_result(&result));
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let loaded = load(ctx)?;
    let interactive = io::stdin().is_terminal();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", ctx.renderer.render_result(&loaded))?;
    if interactive {
        write!(out, "{}", ctx.renderer.render_messages(&[CmdMessage::info(
            "Type 'help' for commands, 'quit' to leave."
        )]))?;
    }

    run_shell(&mut ctx.api, &ctx.renderer, io::stdin().lock(), &mut out, interactive)?;
    Ok(())
}

fn handle_config(
    mut config: RosterConfig,
    config_dir: PathBuf,
    key: Option<String>,
    value: Option<String>,
    use_color: bool,
) -> Result<()> {
    let renderer = ViewRenderer::new(OutputFormat::Term, use_color);
    match (key.as_deref(), value) {
        (None, _) => {
            println!("data = {}", config.data);
            println!("output = {}", config.output);
        }
        (Some(key), None) => println!("{} = {}", key, config.get(key)?),
        (Some(key), Some(value)) => {
            config.set(key, &value)?;
            config.save(&config_dir)?;
            print!(
                "{}",
                renderer.render_messages(&[CmdMessage::success(format!(
                    "{} set to {}",
                    key,
                    config.get(key)?
                ))])
            );
        }
    }
    Ok(())
}
