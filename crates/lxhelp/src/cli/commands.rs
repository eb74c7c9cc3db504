//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Loads configuration from disk and the environment
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Logging, configuration, clipboard backend, API
//! 3. **Dispatch**: Route commands to handlers
//! 4. **Output Formatting**: Text through `render.rs`, or JSON snapshots

use super::browse;
use super::logging::{self, Verbosity};
use super::render::{self, Render};
use super::setup::{Cli, Commands, OutputFormat};
use anyhow::{Context, Result};
use clap::Parser;
use lxhelpapp::api::{CmdResult, LxApi};
use lxhelpapp::catalog::PageKind;
use lxhelpapp::clipboard::SystemClipboard;
use lxhelpapp::config::{self, LxConfig};
use lxhelpapp::disclosure::Disclosure;
use lxhelpapp::page::{Page, Progress};
use serde::Serialize;
use serde_json::json;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Instant;

pub struct AppContext {
    pub api: LxApi<SystemClipboard>,
    pub output: OutputFormat,
    pub width: usize,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet), cli.no_color);

    let config = load_config()?;
    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }
    let mut ctx = init_context(&cli, &config)?;

    match cli.command.unwrap_or(Commands::Pages) {
        Commands::Pages => handle_pages(&ctx),
        Commands::Errors { query, open } => handle_errors(&ctx, query, open),
        Commands::Topics { page, query, open } => handle_topics(&ctx, page, query, open),
        Commands::Checklist { query, check } => handle_checklist(&ctx, query, &check),
        Commands::Copy { page, number } => handle_copy(&mut ctx, page, number),
        Commands::Browse { page } => handle_browse(&mut ctx, page),
    }
}

fn load_config() -> Result<LxConfig> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project = config::project_dir(&cwd);
    let global = config::global_dir();
    tracing::debug!(project = %project.display(), "loading config");
    LxConfig::load(Some(&project), global.as_deref()).context("failed to load configuration")
}

fn init_context(cli: &Cli, config: &LxConfig) -> Result<AppContext> {
    let clipboard = match config.clipboard_argv()? {
        Some(argv) => SystemClipboard::with_command(argv),
        None => SystemClipboard::new(),
    };
    Ok(AppContext {
        api: LxApi::with_config(clipboard, config),
        output: cli.output,
        width: render::terminal_width(),
    })
}

fn handle_pages(ctx: &AppContext) -> Result<()> {
    let pages = ctx.api.pages();
    match ctx.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pages)?),
        OutputFormat::Text => print!("{}", render::render_pages(&pages)),
    }
    Ok(())
}

fn handle_errors(ctx: &AppContext, query: Option<String>, open: Option<usize>) -> Result<()> {
    let mut page = ctx.api.error_page();
    let result = prepare(ctx, &mut page, query.as_deref(), open)?;
    show(ctx, PageKind::Errors.title(), &page, &result, None)?;
    if ctx.output == OutputFormat::Text && page.query().is_empty() {
        print!("\n{}", render::render_tips());
    }
    Ok(())
}

fn handle_topics(
    ctx: &AppContext,
    kind: PageKind,
    query: Option<String>,
    open: Option<usize>,
) -> Result<()> {
    let mut page = ctx.api.guide_page(kind)?;
    let result = prepare(ctx, &mut page, query.as_deref(), open)?;
    show(ctx, kind.title(), &page, &result, None)
}

fn handle_checklist(ctx: &AppContext, query: Option<String>, check: &[usize]) -> Result<()> {
    let mut page = ctx.api.checklist_page();
    let mut result = match query.as_deref() {
        Some(q) => ctx.api.search(&mut page, q),
        None => CmdResult::default(),
    };
    for &number in check {
        result
            .messages
            .extend(ctx.api.toggle(&mut page, number)?.messages);
    }
    let progress = page.progress();
    show(
        ctx,
        PageKind::Troubleshooting.title(),
        &page,
        &result,
        Some(progress),
    )
}

fn handle_copy(ctx: &mut AppContext, kind: PageKind, number: usize) -> Result<()> {
    let now = Instant::now();
    let result = match kind {
        PageKind::Errors => {
            let mut page = ctx.api.error_page();
            ctx.api.copy(&mut page, number, now)?
        }
        PageKind::Troubleshooting => {
            let mut page = ctx.api.checklist_page();
            ctx.api.copy(&mut page, number, now)?
        }
        guide => {
            let mut page = ctx.api.guide_page(guide)?;
            ctx.api.copy(&mut page, number, now)?
        }
    };
    match ctx.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", render::render_messages(&result.messages)),
    }
    Ok(())
}

fn handle_browse(ctx: &mut AppContext, kind: PageKind) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin.is_terminal();
    let session = browse::Session {
        title: kind.title(),
        width: ctx.width,
        prompt,
    };
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    match kind {
        PageKind::Errors => {
            let page = ctx.api.error_page();
            session.run(&mut ctx.api, page, &mut input, &mut out, |_| None)
        }
        PageKind::Troubleshooting => {
            let page = ctx.api.checklist_page();
            session.run(&mut ctx.api, page, &mut input, &mut out, |p| {
                Some(p.progress())
            })
        }
        guide => {
            let page = ctx.api.guide_page(guide)?;
            session.run(&mut ctx.api, page, &mut input, &mut out, |_| None)
        }
    }
}

/// Applies the query, then opens record `open` if the query still shows it.
fn prepare<T: Render, D: Disclosure>(
    ctx: &AppContext,
    page: &mut Page<'_, T, D>,
    query: Option<&str>,
    open: Option<usize>,
) -> Result<CmdResult> {
    let mut result = match query {
        Some(q) => ctx.api.search(page, q),
        None => CmdResult::default(),
    };
    if let Some(number) = open {
        result.messages.extend(ctx.api.open(page, number)?.messages);
    }
    Ok(result)
}

fn show<T: Render + Serialize, D: Disclosure>(
    ctx: &AppContext,
    title: &str,
    page: &Page<'_, T, D>,
    result: &CmdResult,
    progress: Option<Progress>,
) -> Result<()> {
    let now = Instant::now();
    match ctx.output {
        OutputFormat::Json => {
            let value = json!({
                "snapshot": page.snapshot(now),
                "progress": progress,
                "messages": result.messages,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            print!("{}", render::render_page(title, page, now, ctx.width));
            if let Some(progress) = progress {
                print!("\n{}", render::render_progress(progress));
            }
            if !result.messages.is_empty() {
                print!("\n{}", render::render_messages(&result.messages));
            }
        }
    }
    Ok(())
}
