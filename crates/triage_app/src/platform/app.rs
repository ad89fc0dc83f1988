use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use triage_core::{update, AppState, AppViewModel, Msg};
use triage_logging::{triage_info, triage_warn};

use super::announcer::TerminalAnnouncer;
use super::clipboard::SystemClipboard;
use super::config::{self, AppConfig, OutputFormat};
use super::effects::EffectRunner;
use super::input::{self, Action, Command};
use super::{logging, ui};

/// Everything the host loop reacts to.
#[derive(Debug)]
pub enum HostEvent {
    Input(Command),
    InputClosed,
    Core(Msg),
}

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let (config, config_err) = match config::load_config(&cwd) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::initialize(config.log_destination);
    if let Some(err) = config_err {
        triage_warn!("{}; using defaults", err);
    }
    triage_info!("starting with {:?}", config);

    let (event_tx, event_rx) = mpsc::channel::<HostEvent>();
    spawn_input_reader(event_tx.clone());

    let runner = EffectRunner::new(
        event_tx,
        Arc::new(SystemClipboard::new()),
        Arc::new(TerminalAnnouncer::new(config.announce)),
    );
    let state = AppState::new().with_copy_revert_delay(config.copy_revert_delay());
    let mut host = Host::new(state, runner, config.output, io::stdout());

    host.dispatch(Msg::ModalOpened)?;
    while let Ok(event) = event_rx.recv() {
        let keep_running = match event {
            HostEvent::Core(msg) => {
                host.dispatch(msg)?;
                true
            }
            HostEvent::Input(command) => host.handle_command(command)?,
            HostEvent::InputClosed => false,
        };
        if !keep_running {
            break;
        }
    }

    host.dispatch(Msg::ModalClosed)?;
    triage_info!("exiting");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = input::parse_command(&line) {
                if event_tx.send(HostEvent::Input(command)).is_err() {
                    return;
                }
            }
        }
        let _ = event_tx.send(HostEvent::InputClosed);
    });
}

/// Owns the core state and re-renders it after every change.
struct Host<W: Write> {
    state: AppState,
    runner: EffectRunner,
    output: OutputFormat,
    out: W,
}

impl<W: Write> Host<W> {
    fn new(state: AppState, runner: EffectRunner, output: OutputFormat, out: W) -> Self {
        Self {
            state,
            runner,
            output,
            out,
        }
    }

    fn view(&self) -> AppViewModel {
        self.state.view()
    }

    fn dispatch(&mut self, msg: Msg) -> anyhow::Result<()> {
        let was_open = self.state.is_modal_open();
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        // A close never renders the flow; show the reopen hint instead.
        let closed_now = was_open && !self.state.is_modal_open();
        if was_dirty || closed_now {
            self.render()?;
        }
        self.runner.enqueue(effects);
        Ok(())
    }

    /// Returns whether the loop should keep running.
    fn handle_command(&mut self, command: Command) -> anyhow::Result<bool> {
        match input::resolve(command, &self.view()) {
            Action::Dispatch(msg) => self.dispatch(msg)?,
            Action::Quit => return Ok(false),
            Action::Help => self.write_lines(&input::help_lines())?,
            Action::Notice(notice) => self.write_lines(&[notice])?,
        }
        Ok(true)
    }

    fn render(&mut self) -> anyhow::Result<()> {
        let view = self.view();
        match self.output {
            OutputFormat::Text => {
                let mut lines = vec![String::new()];
                lines.extend(ui::render::render(&view));
                self.write_lines(&lines)
            }
            OutputFormat::Json => {
                let json = ui::render::render_json(&view).context("serialize view")?;
                self.write_lines(&[json])
            }
        }
    }

    fn write_lines(&mut self, lines: &[String]) -> anyhow::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}").context("write to stdout")?;
        }
        self.out.flush().context("flush stdout")?;
        Ok(())
    }
}
