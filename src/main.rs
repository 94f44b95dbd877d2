//! Line-oriented runtime for the connections coordinator.
//!
//! This binary is the thin integration layer between the library and a
//! terminal. It maps stdin commands to library events, runs the worker on its
//! own thread, and re-renders the list whenever the handler reports a change.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   Input::Command   ┌────────────────────┐
//! │ stdin thread │ ─────────────────▶ │                    │
//! └──────────────┘                    │    main thread     │
//! ┌──────────────┐   Input::Worker    │  (AppState, UI)    │
//! │ worker thread│ ─────────────────▶ │                    │
//! │ (collabora-  │ ◀───────────────── │                    │
//! │  tors)       │   WorkerMessage    └────────────────────┘
//! └──────────────┘
//! ```
//!
//! Messages between the main thread and the worker travel as JSON, the same
//! wire format a process boundary would use.
//!
//! # Commands
//!
//! - `more`: Load the next page (`EndReached`)
//! - `retry`: Retry a failed page fetch
//! - `search <query>` or `/<query>`: Submit a search
//! - `clear`: Clear the search
//! - `quit`: Exit

use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use connections::observability::init_tracing;
use connections::search::FuzzySearch;
use connections::source::{ConnectionSource, InMemorySource, JsonFileSource};
use connections::worker::{ConnectionsWorker, WorkerMessage, WorkerResponse};
use connections::{handle_event, Action, AppState, Config, Event};

/// Browse and search a paginated list of connections.
#[derive(Debug, Parser)]
#[command(name = "connections", version, about)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, default_value = "connections.toml")]
    config: PathBuf,

    /// JSON file of connection records; overrides `data_file` from the config.
    #[arg(short, long)]
    data: Option<PathBuf>,
}

/// Everything the main thread can be woken up by.
#[derive(Debug)]
enum Input {
    /// A line typed on stdin.
    Command(String),
    /// A serialized [`WorkerResponse`].
    Worker(String),
    /// stdin was closed.
    Closed,
}

/// Runtime state wrapper.
///
/// Wraps the library's `AppState` with the channel to the worker thread.
struct Runtime {
    /// Core application state from library layer.
    app: AppState,

    /// Serialized [`WorkerMessage`]s for the worker thread.
    worker_tx: Sender<String>,
}

impl Runtime {
    /// Runs an event through the handler, executes its actions and renders.
    fn update(&mut self, event: &Event) {
        let span = tracing::debug_span!("runtime_update", event_type = ?event);
        let _guard = span.entered();

        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                if should_render {
                    self.render();
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
            }
        }
    }

    fn render(&self) {
        let vm = self.app.compute_viewmodel();
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = connections::ui::render(&vm, &mut stdout).and_then(|()| stdout.flush()) {
            tracing::warn!(error = %e, "failed to render");
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&self, action: &Action) {
        match action {
            Action::PostToWorker(message) => self.post_worker_message(message),
        }
    }

    /// Serializes the message and hands it to the worker thread.
    ///
    /// Serialization and send errors are logged, not propagated.
    fn post_worker_message(&self, message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                if self.worker_tx.send(payload).is_err() {
                    tracing::warn!("worker thread has stopped");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    /// Maps a worker payload to an application event.
    fn map_worker_payload(payload: &str) -> Option<Event> {
        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => {
                tracing::debug!(response = ?response, "worker response received");
                Some(Event::WorkerResponse(response))
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }
}

/// Result of parsing one stdin line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Event(Event),
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();

    if let Some(query) = line.strip_prefix('/') {
        return Command::Event(Event::SearchSubmit(query.to_string()));
    }

    match line.split_once(char::is_whitespace) {
        Some(("search", query)) => Command::Event(Event::SearchSubmit(query.to_string())),
        _ => match line {
            "more" => Command::Event(Event::EndReached),
            "retry" => Command::Event(Event::RetryFetch),
            "clear" => Command::Event(Event::SearchClear),
            "quit" | "q" => Command::Quit,
            _ => Command::Unknown,
        },
    }
}

fn build_source(config: &Config) -> connections::Result<Box<dyn ConnectionSource>> {
    match &config.data_file {
        Some(path) => Ok(Box::new(JsonFileSource::new(path.clone())?)),
        None => {
            tracing::warn!("no data file configured, starting with an empty source");
            Ok(Box::new(InMemorySource::default()))
        }
    }
}

fn spawn_worker(mut worker: ConnectionsWorker, inputs: Sender<Input>) -> Sender<String> {
    let (tx, rx): (Sender<String>, Receiver<String>) = mpsc::channel();

    thread::spawn(move || {
        for payload in rx {
            let message = match serde_json::from_str::<WorkerMessage>(&payload) {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to deserialize worker message");
                    continue;
                }
            };

            let response = worker.handle_message(message);
            match serde_json::to_string(&response) {
                Ok(payload) => {
                    if inputs.send(Input::Worker(payload)).is_err() {
                        break;
                    }
                }
                Err(e) => tracing::warn!(error = %e, "failed to serialize worker response"),
            }
        }
    });

    tx
}

fn spawn_stdin_reader(inputs: Sender<Input>) {
    thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if inputs.send(Input::Command(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read stdin");
                    break;
                }
            }
        }
        let _ = inputs.send(Input::Closed);
    });
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("connections: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(data) = cli.data {
        config.data_file = Some(data);
    }

    init_tracing(&config);

    let source = match build_source(&config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!(error = %e, "failed to open data file");
            eprintln!("connections: {e}");
            return ExitCode::FAILURE;
        }
    };

    let (input_tx, input_rx) = mpsc::channel();
    let worker = ConnectionsWorker::new(source, Box::new(FuzzySearch::new()));
    let worker_tx = spawn_worker(worker, input_tx.clone());
    spawn_stdin_reader(input_tx);

    let mut runtime = Runtime {
        app: connections::initialize(&config),
        worker_tx,
    };

    runtime.update(&Event::Mount);

    for input in input_rx {
        match input {
            Input::Command(line) => match parse_command(&line) {
                Command::Event(event) => runtime.update(&event),
                Command::Quit => break,
                Command::Unknown => {
                    if !line.trim().is_empty() {
                        eprintln!("unknown command: {}", line.trim());
                    }
                }
            },
            Input::Worker(payload) => {
                if let Some(event) = Runtime::map_worker_payload(&payload) {
                    runtime.update(&event);
                }
            }
            Input::Closed => break,
        }
    }

    tracing::debug!("shutting down");
    ExitCode::SUCCESS
}
