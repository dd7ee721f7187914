use std::{num::NonZeroUsize, path::PathBuf};

use admin_core::{
    fetch_load, AppState, Command, FileRecordSource, HttpRecordSource, RecordSource,
};
use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod render;

use commands::{parse_input, ConsoleInput, HELP};
use config::{load_settings, Settings};

#[derive(Parser, Debug)]
#[command(about = "Search, page, select, edit and delete members in memory")]
struct Args {
    /// Config file (defaults to ./admin.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    source_url: Option<String>,
    /// Read members from a local JSON file instead of the URL
    #[arg(long)]
    file: Option<PathBuf>,
    #[arg(long)]
    page_size: Option<NonZeroUsize>,
    #[arg(long)]
    log_filter: Option<String>,
    /// Print each view as one JSON line instead of a table
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(v) = &self.source_url {
            settings.source_url = v.clone();
            settings.source_file = None;
        }
        if let Some(v) = &self.file {
            settings.source_file = Some(v.clone());
        }
        if let Some(v) = self.page_size {
            settings.page_size = v;
        }
        if let Some(v) = &self.log_filter {
            settings.log_filter = v.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(args.config.as_deref())?;
    args.apply_to(&mut settings);

    let filter = EnvFilter::try_new(&settings.log_filter)
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let source: Box<dyn RecordSource> = match &settings.source_file {
        Some(path) => Box::new(FileRecordSource::new(path)),
        None => Box::new(HttpRecordSource::new(&settings.source_url)?),
    };

    info!(
        source = %source.describe(),
        page_size = settings.page_size.get(),
        "admin console starting"
    );

    let mut state = AppState::with_page_size(settings.page_size);
    draw(&state, args.json)?;

    let load = fetch_load(source.as_ref());
    tokio::pin!(load);
    let mut loading = true;
    let mut stdin_open = true;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    // Commands are applied while the load is in flight. At EOF a pending load
    // is still awaited before exiting.
    while loading || stdin_open {
        tokio::select! {
            command = &mut load, if loading => {
                loading = false;
                apply_and_draw(&mut state, command, args.json)?;
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line.context("failed to read stdin")? else {
                    stdin_open = false;
                    continue;
                };
                if !handle_line(&mut state, &line, args.json)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Returns `false` once the user asks to quit.
fn handle_line(state: &mut AppState, line: &str, json: bool) -> Result<bool> {
    match parse_input(line) {
        Ok(ConsoleInput::Quit) => return Ok(false),
        Ok(ConsoleInput::Help) => println!("{HELP}"),
        Ok(ConsoleInput::Show) => draw(state, json)?,
        Ok(ConsoleInput::Apply(command)) => apply_and_draw(state, command, json)?,
        Err(err) => {
            debug!(input = %line, "console: rejected input");
            eprintln!("{err}");
        }
    }
    Ok(true)
}

fn apply_and_draw(state: &mut AppState, command: Command, json: bool) -> Result<()> {
    let transition = state.apply(command);
    if let Some(status) = render::describe_transition(&transition) {
        eprintln!("{status}");
    }
    draw(state, json)
}

fn draw(state: &AppState, json: bool) -> Result<()> {
    let snapshot = state.snapshot();
    if json {
        println!("{}", render::render_json(&snapshot)?);
    } else {
        print!("{}", render::render_table(&snapshot));
    }
    Ok(())
}
