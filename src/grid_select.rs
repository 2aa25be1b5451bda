use crossterm::event;
use grid_select::display::render_text_grid;
use grid_select::logging::init_logging;
use grid_select::terminal::{TerminalGuard, Tui};
use grid_select::{App, AppConfig, GridTrait};
use log::{debug, info};
use std::io;
use std::time::{Duration, Instant};

/// Poll timeout while nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_args(std::env::args().skip(1))?;
    init_logging(&config)?;
    info!(
        "Starting grid selector: {}x{} grid, {}ms transitions",
        config.grid.rows, config.grid.cols, config.animation_ms
    );

    let mut app = App::new(&config);
    {
        let mut guard = TerminalGuard::enter()?;
        run(guard.terminal(), &mut app, config.tick_rate())?;
    }

    let selector = app.selector();
    info!("Exiting with {} cells selected", selector.selected_count());
    debug!(
        "Final selection:\n{}",
        render_text_grid(selector.config(), selector.selection())
    );
    Ok(())
}

fn run(terminal: &mut Tui, app: &mut App, tick_rate: Duration) -> io::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let timeout = if app.is_animating(Instant::now()) {
            tick_rate
        } else {
            IDLE_POLL
        };
        if event::poll(timeout)? {
            app.handle_event(&event::read()?);
        }

        app.tick(Instant::now());
        if app.should_quit() {
            return Ok(());
        }
    }
}
