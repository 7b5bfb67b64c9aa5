//! Terminal shim and entry point.
//!
//! This module provides the thin integration layer between the marquee library
//! and the terminal: it parses CLI flags, loads configuration, drives the
//! event loop, and executes the actions the event handler emits.
//!
//! # Architecture
//!
//! The shim owns two input sources and multiplexes them into the single event
//! handler:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   stdin (user commands)      │──┐
//! └──────────────────────────────┘  │    ┌──────────────────┐
//!                                   ├──▶ │  handle_event    │──▶ render
//! ┌──────────────────────────────┐  │    │  (library layer) │──▶ actions
//! │   fetch responses (channel)  │──┘    └──────────────────┘
//! └──────────────────────────────┘
//! ```
//!
//! Actions map to side effects: `Dispatch` hands a request to the fetch
//! executor, `Quit` ends the loop.
//!
//! # Command Mapping
//!
//! Input lines are translated to library events:
//!
//! - `j` / `k` (or `down` / `up`) → cursor movement
//! - `search <text>` → `Event::Search` (`search` alone clears)
//! - `genre <name>` → `Event::ToggleGenre` (`genre` alone clears)
//! - `sort newest|oldest|title` → `Event::Sort`
//! - `open`, `reviews`, `review` → navigation
//! - `author/rating/comment <...>`, `submit` → the add-review form
//! - `r`, `b`, `q` → refresh, back, quit

use std::io::Write as _;
use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use marquee::api::ApiClient;
use marquee::app::{handle_event, Action, Event};
use marquee::catalog::SortMode;
use marquee::fetch::{FetchResponse, FetchWorker};
use marquee::{initialize, observability, ui, AppState, Config};

/// Browse a movie catalog and its reviews from the terminal.
#[derive(Debug, Parser)]
#[command(name = "marquee", version, about)]
struct Cli {
    /// Base URL of the catalog API (e.g. http://192.168.1.2:5000/api)
    #[arg(long, env = "MARQUEE_BASE_URL")]
    base_url: Option<String>,

    /// Path to a TOML config file (default: ~/.config/marquee/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Tracing level (trace, debug, info, warn, error)
    #[arg(long)]
    trace_level: Option<String>,
}

#[tokio::main]
async fn main() -> marquee::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    observability::init_tracing(&config);

    tracing::debug!(base_url = %config.base_url, "client starting");

    let client = ApiClient::new(&config)?;
    if !client.health().await {
        eprintln!(
            "warning: cannot reach backend at {} (is the server running?)",
            config.base_url
        );
    }

    let (worker, mut responses) = FetchWorker::new(client);
    let mut state = initialize(&config);

    // Kick off the initial movie list load before reading any input.
    let (render, actions) = handle_event(&mut state, &Event::Init)?;
    let _ = run_actions(&worker, actions);
    if render {
        print_screen(&state);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(&state);

        let event = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => match map_command(&line) {
                    Command::Event(event) => event,
                    Command::Help => {
                        print_screen(&state);
                        continue;
                    }
                    Command::Empty => continue,
                    Command::Unknown(word) => {
                        println!("unrecognized command: {word} (try `help`)");
                        continue;
                    }
                },
                // stdin closed
                None => break,
            },
            Some(response) = responses.recv() => Event::Fetch(response),
        };

        match handle_event(&mut state, &event) {
            Ok((render, actions)) => {
                if run_actions(&worker, actions) {
                    break;
                }
                if render {
                    // Drain any already-completed fetches before drawing, so a
                    // fast response doesn't leave a stale loading screen up.
                    while let Ok(response) = responses.try_recv() {
                        apply_response(&mut state, &worker, response)?;
                    }
                    print_screen(&state);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
            }
        }
    }

    Ok(())
}

/// Applies a fetch response outside the main select loop.
///
/// Follow-up dispatches (the post-submit review reload) still run; only a
/// `Quit` would be meaningless here, and fetch responses never emit one.
fn apply_response(
    state: &mut AppState,
    worker: &FetchWorker,
    response: FetchResponse,
) -> marquee::Result<()> {
    let (_, actions) = handle_event(state, &Event::Fetch(response))?;
    run_actions(worker, actions);
    Ok(())
}

/// Executes actions emitted by the event handler.
///
/// Returns `true` when a `Quit` action was seen and the loop should end.
fn run_actions(worker: &FetchWorker, actions: Vec<Action>) -> bool {
    let mut quit = false;
    for action in actions {
        match action {
            Action::Dispatch(request) => worker.dispatch(request),
            Action::Quit => quit = true,
        }
    }
    quit
}

/// Resolves configuration from file, environment, and CLI flags.
///
/// Precedence, lowest to highest: defaults, the config file (explicit
/// `--config` path, or the default location when it exists), then individual
/// CLI flags.
fn load_config(cli: &Cli) -> marquee::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => match marquee::infrastructure::default_config_path() {
            Some(path) if path.exists() => Config::from_file(&path)?,
            _ => Config::default(),
        },
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(trace_level) = &cli.trace_level {
        config.trace_level = Some(trace_level.clone());
    }

    Ok(config)
}

/// Result of interpreting one input line.
#[derive(Debug, PartialEq)]
enum Command {
    /// A library event to process.
    Event(Event),
    /// Redraw the current screen with its command hints.
    Help,
    /// Blank line, nothing to do.
    Empty,
    /// Unrecognized first word.
    Unknown(String),
}

/// Translates an input line into a library event.
///
/// Commands are context-free: the event handler itself ignores events that
/// don't apply to the current screen, so the shim doesn't need to know which
/// screen is showing.
fn map_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let event = match word {
        "" => return Command::Empty,
        "help" | "?" => return Command::Help,

        "j" | "down" => Event::CursorDown,
        "k" | "up" => Event::CursorUp,

        "search" => Event::Search(rest.to_string()),
        "genre" => {
            if rest.is_empty() {
                Event::ClearGenre
            } else {
                Event::ToggleGenre(rest.to_string())
            }
        }
        "all" => Event::ClearGenre,
        "sort" => match rest {
            "newest" => Event::Sort(SortMode::Newest),
            "oldest" => Event::Sort(SortMode::Oldest),
            "title" => Event::Sort(SortMode::Title),
            other => return Command::Unknown(format!("sort {other}")),
        },
        "reset" => Event::ResetFilters,

        "open" | "details" => Event::OpenDetail,
        "reviews" => Event::OpenReviews,
        "review" | "add" => Event::OpenAddReview,
        "b" | "back" | "cancel" => Event::Back,
        "r" | "refresh" => Event::Refresh,
        "q" | "quit" | "exit" => Event::Quit,

        "author" | "name" => Event::Author(rest.to_string()),
        "rating" => match rest.parse::<u8>() {
            Ok(rating) => Event::Rating(rating),
            Err(_) => return Command::Unknown(format!("rating {rest}")),
        },
        "comment" => Event::Comment(rest.to_string()),
        "submit" => Event::Submit,

        other => return Command::Unknown(other.to_string()),
    };

    Command::Event(event)
}

fn print_screen(state: &AppState) {
    println!("\n{}", ui::render(state));
}

fn prompt(state: &AppState) {
    print!("{}> ", state.current().name());
    let _ = std::io::stdout().flush();
}
