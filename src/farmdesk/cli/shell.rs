//! Interactive session: one store, many commands.
//!
//! Each line is parsed with the same clap definition as the command line, so
//! `list --status premium` works the same in both places. The shell subscribes to
//! store events and reports the record count after every change.

use super::commands::{dispatch, AppContext};
use super::setup::{Cli, Commands};
use clap::{CommandFactory, Parser};
use farmdesk::error::Result;
use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;
use tracing::debug;

const PROMPT: &str = "farmdesk> ";

pub fn run(ctx: &mut AppContext) -> Result<()> {
    let changed = Rc::new(Cell::new(None));
    let sink = Rc::clone(&changed);
    let subscription = ctx
        .api
        .subscribe(move |event| sink.set(Some(event.snapshot.len())));

    if !ctx.json {
        println!("farmdesk shell. Type 'help' for commands, 'exit' to quit.");
    }

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        // No StdinLock is held across iterations; delete confirmations read stdin too.
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let words = match split_words(&line) {
            Ok(words) => words,
            Err(msg) => {
                eprintln!("{}", msg);
                continue;
            }
        };
        let Some(first) = words.first() else {
            continue;
        };
        match first.as_str() {
            "exit" | "quit" => break,
            "help" => {
                print!("{}", Cli::command().render_help());
                continue;
            }
            _ => {}
        }

        let cli = match Cli::try_parse_from(std::iter::once("farmdesk".to_string()).chain(words)) {
            Ok(cli) => cli,
            Err(e) => {
                let _ = e.print();
                continue;
            }
        };

        if cli.verbose {
            eprintln!("--verbose applies to the whole session; start the shell with -v instead");
            continue;
        }

        let saved = LineFlags::apply(ctx, &cli);
        let outcome = dispatch(ctx, cli.command.unwrap_or(Commands::Dashboard));
        saved.restore(ctx);

        match outcome {
            Ok(()) => {}
            Err(e) if e.is_recoverable_by_form() => eprintln!("{}", e),
            Err(e) => eprintln!("Error: {}", e),
        }

        if let Some(count) = changed.take() {
            if !ctx.json {
                println!("{}", count_line(count));
            }
        }
    }

    ctx.api.unsubscribe(subscription);
    debug!(version = ctx.api.version(), "shell session ended");
    Ok(())
}

/// `--json` and `--no-color` given on a line apply to that line only.
struct LineFlags {
    json: bool,
    use_color: bool,
}

impl LineFlags {
    /// Applies the line's flags and returns the session values to restore.
    fn apply(ctx: &mut AppContext, cli: &Cli) -> Self {
        let saved = Self {
            json: ctx.json,
            use_color: ctx.use_color,
        };
        ctx.json |= cli.json;
        ctx.use_color &= !cli.no_color;
        colored::control::set_override(ctx.use_color);
        saved
    }

    fn restore(self, ctx: &mut AppContext) {
        ctx.json = self.json;
        ctx.use_color = self.use_color;
        colored::control::set_override(ctx.use_color);
    }
}

fn count_line(count: usize) -> String {
    if count == 1 {
        "(1 farmer)".to_string()
    } else {
        format!("({} farmers)", count)
    }
}

/// Splits a line on whitespace, keeping single- or double-quoted runs together.
fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}
