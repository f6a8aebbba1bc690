#[macro_use]
extern crate failure;

#[macro_use]
extern crate log;

#[macro_use]
extern crate serde_derive;

mod color;
mod config_file;
mod errors;
mod indicator;
mod integrations;
mod logging;
mod network;
mod poll_loop;
mod process;
mod remote_status;
mod state_machine;

use std::env;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use failure::Error;

use crate::config_file::Config;
use crate::indicator::Blink1Tool;
use crate::integrations::SshIntegration;
use crate::network::HttpProbe;

const CONFIG_FILE_NAME: &str = "config.toml";

fn main() {
    if let Err(e) = run() {
        error!("Exiting: {}", e);
        eprintln!("blink_status_light: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config_path = config_path()?;
    let config = Config::load(&config_path)?;
    logging::init_logging(&config)?;

    if config_path.exists() {
        info!("Loaded config from {:?}.", config_path);
    } else {
        warn!(
            "No config file at {:?}, using built-in defaults.",
            config_path
        );
    }

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = running.clone();
    ctrlc::set_handler(move || {
        info!("Received termination signal, stopping after this pattern.");
        handler_flag.store(false, Ordering::SeqCst);
    })
    .map_err(|e| format_err!("Unable to set termination handler: {}", e))?;

    let mut integration = SshIntegration::from_config(&config);
    let probe = HttpProbe::new(&config.stable_public_host)?;
    let indicator = Blink1Tool::from_config(&config);

    info!(
        "Running. Polling {} via '{}' ({:?}), probing {}.",
        config.host,
        config.status_command,
        config.status_format,
        probe.url()
    );
    poll_loop::poll(&mut integration, &probe, &indicator, &running)?;
    Ok(())
}

/// The config file lives next to the executable, where build.rs puts it.
fn config_path() -> Result<PathBuf, Error> {
    let exe = env::current_exe()?;
    let dir = exe
        .parent()
        .ok_or_else(|| format_err!("Executable {:?} has no parent directory", exe))?;
    Ok(dir.join(CONFIG_FILE_NAME))
}
