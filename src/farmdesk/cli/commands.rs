//! # CLI Layer
//!
//! This module is **one possible UI client** for farmdesk; it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin prompts)
//! - Handles argument parsing
//! - Formats output for human consumption
//! - Installs the tracing subscriber
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Context Setup**: Build `AppContext` from the config directory and seed data
//! 3. **API Dispatch**: Call the matching `FarmdeskApi` method
//! 4. **Output Formatting**: Turn `CmdResult` into templates or JSON
//!
//! Records are not persisted. A one-shot command sees a freshly seeded store; the
//! `shell` subcommand keeps one store alive for a whole session.

use super::render::{
    print_messages, render_config, render_dashboard, render_farmer, render_farmer_list,
    render_json,
};
use super::setup::{Cli, Commands, EditArgs};
use super::shell;
use chrono::{Local, NaiveDate};
use clap::Parser;
use farmdesk::api::{CmdMessage, CmdResult, ConfigAction, FarmdeskApi, FarmerFilter};
use farmdesk::config::FarmdeskConfig;
use farmdesk::error::Result;
use farmdesk::model::{FarmerDraft, FarmerId, StatusFilter};
use farmdesk::seed;
use farmdesk::store::memory::InMemoryStore;
use std::io::{self, Write};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "FARMDESK_LOG";
const DELETE_PROMPT: &str =
    "Are you sure you want to delete this farmer? This action cannot be undone. [y/N] ";

pub struct AppContext {
    pub api: FarmdeskApi<InMemoryStore>,
    pub json: bool,
    pub use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;
    match cli.command {
        Some(Commands::Shell) => shell::run(&mut ctx),
        Some(command) => dispatch(&mut ctx, command),
        None => handle_dashboard(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = FarmdeskConfig::default_dir()?;
    let config = FarmdeskConfig::load(&config_dir)?;
    debug!(dir = %config_dir.display(), ?config, "loaded config");

    let store = seed::initial_store(config.seed_mock_data)?;
    let api = FarmdeskApi::new(store, config_dir).with_recent_count(config.recent_count);

    let use_color = !cli.no_color && console::Term::stdout().features().colors_supported();
    colored::control::set_override(use_color);

    Ok(AppContext {
        api,
        json: cli.json,
        use_color,
    })
}

/// Runs one parsed command against the context's store.
pub fn dispatch(ctx: &mut AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Dashboard => handle_dashboard(ctx),
        Commands::List { search, status } => handle_list(ctx, search, status),
        Commands::Show { id } => handle_show(ctx, FarmerId::new(id)),
        Commands::Add(args) => handle_add(ctx, args.into()),
        Commands::Edit { id, fields } => handle_edit(ctx, FarmerId::new(id), fields),
        Commands::Delete { id, yes } => handle_delete(ctx, FarmerId::new(id), yes),
        Commands::Config { key, value } => handle_config(ctx, key, value),
        Commands::Shell => {
            debug!("ignoring nested shell");
            Ok(())
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.dashboard()?;
    if let Some(summary) = &result.dashboard {
        if ctx.json {
            print!("{}", render_json(summary)?);
        } else {
            print!("{}", render_dashboard(summary, today(), ctx.use_color));
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>, status: StatusFilter) -> Result<()> {
    let filter = FarmerFilter {
        status,
        search_term: search,
    };
    let result = ctx.api.list_farmers(&filter)?;
    if ctx.json {
        print!("{}", render_json(&result.listed_farmers)?);
    } else {
        print!(
            "{}",
            render_farmer_list(&result.listed_farmers, today(), ctx.use_color)
        );
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, id: FarmerId) -> Result<()> {
    let result = ctx.api.get_farmer(&id)?;
    for dp in &result.listed_farmers {
        if ctx.json {
            print!("{}", render_json(dp)?);
        } else {
            print!("{}", render_farmer(dp, today(), ctx.use_color));
        }
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, draft: FarmerDraft) -> Result<()> {
    let result = ctx.api.create_farmer(draft)?;
    print_mutation(ctx, &result)
}

fn handle_edit(ctx: &mut AppContext, id: FarmerId, fields: EditArgs) -> Result<()> {
    let current = ctx.api.get_farmer(&id)?;
    let mut draft = match current.listed_farmers.first() {
        Some(dp) => dp.farmer.to_draft(),
        None => FarmerDraft::default(),
    };
    fields.apply_to(&mut draft);

    let result = ctx.api.update_farmer(&id, draft)?;
    print_mutation(ctx, &result)
}

fn handle_delete(ctx: &mut AppContext, id: FarmerId, yes: bool) -> Result<()> {
    // Unknown ids fail before asking anything.
    ctx.api.get_farmer(&id)?;

    if !yes && !confirm(DELETE_PROMPT)? {
        debug!(%id, "delete cancelled");
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Delete cancelled."));
        return print_mutation(ctx, &result);
    }

    let result = ctx.api.delete_farmer(&id)?;
    print_mutation(ctx, &result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if ctx.json {
        if let Some(config) = &result.config {
            print!("{}", render_json(config)?);
            return Ok(());
        }
    } else if result.messages.is_empty() {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color));
        }
    }
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn print_mutation(ctx: &AppContext, result: &CmdResult) -> Result<()> {
    if ctx.json {
        print!("{}", render_json(&result.affected_farmers)?);
    } else {
        print_messages(&result.messages, ctx.use_color);
    }
    Ok(())
}

/// Reads one line from stdin; anything but `y`/`yes` declines.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
