use std::io::{self, Write, stdout};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use ratatui::DefaultTerminal;
use tracing::warn;
use whirl_config::Config;

mod app;
mod cli;
mod logging;
mod panel;

use app::App;
use cli::Cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let config = cli.resolve().wrap_err("invalid configuration")?;
    logging::init(config.log_file.as_deref())?;

    let terminal = ratatui::init();
    release_mouse_on_panic();
    let result = run(&config, terminal);
    if let Err(err) = release_mouse(&mut stdout()) {
        warn!(%err, "failed to release mouse capture");
    }
    ratatui::restore();
    result
}

fn run(config: &Config, terminal: DefaultTerminal) -> color_eyre::Result<()> {
    execute!(stdout(), EnableMouseCapture, EnableFocusChange)
        .wrap_err("failed to enable mouse capture")?;
    let size = terminal.size()?;
    App::new(config, size).run(terminal)
}

/// Turn off mouse and focus reporting.
fn release_mouse<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, DisableMouseCapture, DisableFocusChange)
}

/// Chain onto the hook `ratatui::init` installed, which only restores the
/// screen and raw mode.
fn release_mouse_on_panic() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = release_mouse(&mut stdout());
        hook(info);
    }));
}
