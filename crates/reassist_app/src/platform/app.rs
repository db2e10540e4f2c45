use std::io::{self, BufRead, Write};
use std::sync::mpsc;

use anyhow::Context;
use reassist_core::{update, AppState, Msg};
use reassist_data::{
    builtin_profile, export_fixture, BuiltinProfile, FileProfileSource, ProfileSource,
};
use reassist_logging::{ra_debug, ra_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::render;

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    logging::initialize(config.log, config.log_level);

    if let Some(path) = &config.export_fixture {
        let written = export_fixture(&builtin_profile(), path)
            .with_context(|| format!("exporting fixture to {}", path.display()))?;
        println!("Wrote {}", written.display());
        return Ok(());
    }

    let source: Box<dyn ProfileSource> = match &config.fixture {
        Some(path) => Box::new(FileProfileSource::new(path)),
        None => Box::new(BuiltinProfile),
    };
    let profile = source
        .load()
        .with_context(|| format!("loading {}", source.describe()))?;
    ra_info!("Starting at {} with {}", config.start, source.describe());

    let state = AppState::from_profile(profile).with_location(config.start);
    let mut session = Session::new(state);
    session
        .run(io::stdin().lock(), &mut io::stdout().lock())
        .context("terminal session failed")?;

    ra_info!("Session ended");
    Ok(())
}

/// Read-update-render loop over line-oriented input.
struct Session {
    state: AppState,
    effects: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

impl Session {
    fn new(state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            state,
            effects: EffectRunner::new(msg_tx),
            msg_rx,
        }
    }

    fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.render(out)?;
        for line in input.lines() {
            match parse_command(&line?) {
                Command::Dispatch(msg) => self.dispatch(msg, out)?,
                Command::Help => {
                    for help_line in HELP {
                        writeln!(out, "{help_line}")?;
                    }
                }
                Command::Quit => break,
                Command::Unknown(text) => {
                    writeln!(out, "Unknown command {text:?}; type `help` for the list.")?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, msg: Msg, out: &mut W) -> io::Result<()> {
        self.apply(msg, out)?;
        self.process_pending_messages(out)?;
        if self.state.consume_dirty() {
            self.render(out)?;
        }
        Ok(())
    }

    fn apply<W: Write>(&mut self, msg: Msg, out: &mut W) -> io::Result<()> {
        ra_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects, out)
    }

    fn process_pending_messages<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.apply(msg, out)?;
        }
        Ok(())
    }

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in render(&self.state.view()) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
