use std::io::{self, Write};
use std::sync::mpsc;

use reassist_core::{Effect, Msg};
use reassist_logging::{ra_info, ra_warn};

/// Carries out core effects against the terminal.
///
/// Navigation has no router behind it: the new location is fed straight
/// back to the state as `Msg::LocationChanged`.
pub struct EffectRunner {
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        Self { msg_tx }
    }

    pub fn run<W: Write>(&self, effects: Vec<Effect>, out: &mut W) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::Navigate { path } => {
                    ra_info!("Navigate path={}", path);
                    writeln!(out, "-> {path}")?;
                    if let Err(err) = self.msg_tx.send(Msg::LocationChanged(path)) {
                        ra_warn!("Location update lost, receiver gone: {:?}", err.0);
                    }
                }
                Effect::Notify { message } => {
                    ra_info!("Notify message={:?}", message);
                    writeln!(out, "[notice] {message}")?;
                }
                Effect::SectionNav { target } => {
                    ra_info!("SectionNav target={}", target);
                    writeln!(out, "-> #{target}")?;
                }
            }
        }
        Ok(())
    }
}
