//! Tilepos entrypoint: builds one demo screen, renders it once, prints it.
use anyhow::Result;
use clap::Parser;
use core_config::Config;
use core_render::{Frame, render_screen, writer::Writer};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

mod screens;
mod state;

use state::{PosState, Screen, Shared, lock};

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "tilepos", version, about = "Tile grid point-of-sale demo")]
struct Args {
    /// Configuration file path (overrides discovery of `tilepos.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,
    /// Screen to render.
    #[arg(long, value_enum, default_value_t = Screen::Ordering)]
    screen: Screen,
    /// Initial page of the ordering menu list.
    #[arg(long, default_value_t = 0)]
    page: usize,
    /// Press the tile at `X,Y` and render the resulting screen.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    press: Option<(u16, u16)>,
}

fn parse_point(s: &str) -> std::result::Result<(u16, u16), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok((x, y))
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join("tilepos.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "tilepos.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .try_init()
        .ok()
        // Already installed elsewhere; dropping the guard shuts the writer down.
        .map(|_| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn render(state: &Shared, config: &Config) -> Frame {
    let screen = lock(state).screen;
    let root = screens::build(screen, state, &config.file.list);
    render_screen(&*root, config.screen_bounds())
}

fn emit(frame: &Frame, cell_width: usize) -> Result<()> {
    let mut writer = Writer::new();
    writer.paint(frame, (0, 0), cell_width);
    let mut out = std::io::stdout().lock();
    if out.is_terminal() {
        queue!(out, Clear(ClearType::All))?;
        writer.flush_to(&mut out)?;
        queue!(out, MoveTo(0, frame.height), Print("\n"))?;
        out.flush()?;
    } else {
        writer.flush_plain(&mut out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let config = core_config::load_from(args.config.clone())?;
    info!(
        target: "runtime.startup",
        screen = ?args.screen,
        page = args.page,
        columns = config.effective.columns,
        rows = config.effective.rows,
        cell_width = config.effective.cell_width,
        config_override = args.config.is_some(),
        "bootstrap_complete"
    );

    let state = PosState {
        screen: args.screen,
        choice_page: args.page,
        ..PosState::default()
    }
    .into_shared();

    let mut frame = render(&state, &config);
    if let Some((x, y)) = args.press {
        let pressed = frame.tile_at(x, y).cloned();
        match pressed {
            Some(tile) if tile.press() => frame = render(&state, &config),
            _ => warn!(target: "ui.press", x, y, "press_missed"),
        }
    }

    emit(&frame, usize::from(config.effective.cell_width))?;
    info!(target: "runtime", "shutdown");
    Ok(())
}
