use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::UnboundedReceiver;

use cmdframe::config::{self, ConfigResult};
use cmdframe::frame::CommandFrame;
use cmdframe::history::{CommandHistory, storage};
use cmdframe::messaging::{BackgroundMessage, Messenger, Outbound};

/// Background command that reopens the command line with its argument
const FILLCMDLINE: &str = "fillcmdline";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Command line with debounced completions and history recall"
)]
struct Args {
    /// Config file to use instead of ~/.config/cmdframe/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not record submitted commands in the history
    #[arg(long)]
    incognito: bool,

    /// Neither load nor save the history file
    #[arg(long)]
    no_history: bool,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let ConfigResult { config, warning } = match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => config::load_config(),
    };

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let history_file = if args.no_history || !config.history.persist {
        None
    } else {
        storage::history_path()
    };
    let history = CommandHistory::from_entries(
        history_file
            .as_deref()
            .map(storage::load_history_from_path)
            .unwrap_or_default(),
    );
    log::info!("Loaded {} history entries", history.len());

    let (messenger, outbound) = Messenger::channel();
    let frame = CommandFrame::from_config(&config, history.clone(), messenger, args.incognito);
    let mut host = Host {
        frame,
        received: warning
            .into_iter()
            .map(|w| format!("config ignored: {}", w))
            .collect(),
    };

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = host.run(terminal, outbound).await;
    ratatui::restore();

    if let Some(path) = history_file {
        storage::save_history_to_path(&path, &history.entries(), config.history.max_entries)
            .wrap_err_with(|| format!("failed to save history to {}", path.display()))?;
    }

    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .wrap_err("failed to initialise logging")
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// The terminal standing in for the page and the background
struct Host {
    frame: CommandFrame,
    /// Commands the background has received, oldest first
    received: Vec<String>,
}

impl Host {
    async fn run(
        &mut self,
        mut terminal: DefaultTerminal,
        mut outbound: UnboundedReceiver<Outbound>,
    ) -> Result<()> {
        let mut events = EventStream::new();

        loop {
            terminal.draw(|f| self.frame.render(f, &self.received))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if self.on_key(key) == Flow::Quit {
                            break;
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                Some(message) = outbound.recv() => self.on_outbound(message),
            }
        }

        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) -> Flow {
        if self.frame.is_visible() {
            if let Err(e) = self.frame.handle_key(key) {
                log::error!("{}", e);
                self.received.push(format!("error: {}", e));
            }
            return Flow::Continue;
        }

        match key.code {
            KeyCode::Char(':') => self.frame.fillcmdline("", false, true),
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Flow::Quit;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn on_outbound(&mut self, message: Outbound) {
        match message {
            Outbound::Background(BackgroundMessage::RecvExStr(command)) => {
                log::info!("Background received {:?}", command);
                if let Some(text) = command.strip_prefix(FILLCMDLINE) {
                    if text.is_empty() || text.starts_with(char::is_whitespace) {
                        self.frame.fillcmdline(text.trim_start(), false, true);
                    }
                }
                self.received.push(command);
            }
            Outbound::Content(message) => log::trace!("Content surface got {:?}", message),
        }
    }
}
