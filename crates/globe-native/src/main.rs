use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use globe_core::{Animator, FrameQueue, Grid, Rasterizer};

mod screen;
mod settings;
mod view;

use settings::{Settings, FPS_ENV, PRESET_ENV};

const USAGE: &str = "usage: ascii-globe [point-cloud|wireframe]\n\
    env: ASCII_GLOBE_PRESET (preset), ASCII_GLOBE_FPS (1-240, default 60)\n\
    keys: q / Esc / Ctrl-C to quit";

/// Raw mode + alternate screen for as long as this lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            DisableLineWrap,
            cursor::Hide,
            Clear(ClearType::All)
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let arg = std::env::args().nth(1);
    if matches!(arg.as_deref(), Some("-h") | Some("--help")) {
        println!("{USAGE}");
        return;
    }

    if let Err(e) = run(arg.as_deref()) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(arg: Option<&str>) -> anyhow::Result<()> {
    let env_preset = std::env::var(PRESET_ENV).ok();
    let env_fps = std::env::var(FPS_ENV).ok();
    let settings = Settings::resolve(arg, env_preset.as_deref(), env_fps.as_deref())?;
    let raster = Rasterizer::new(settings.preset.config())?;
    log::info!(
        "ascii-globe: {} preset, {:.1} ms/frame",
        settings.preset.name(),
        settings.frame_interval.as_secs_f64() * 1000.0
    );

    let queue = Rc::new(FrameQueue::new());
    let size = Rc::new(Cell::new(terminal::size()?));
    let failed: Rc<RefCell<Option<io::Error>>> = Rc::new(RefCell::new(None));

    // Declared before the guard so it drops after the terminal is restored.
    let handle = globe_core::start(
        queue.clone(),
        Animator::new(raster),
        terminal_sink(size.clone(), failed.clone()),
    );
    let guard = TerminalGuard::enter()?;

    let mut quit = false;
    while !quit {
        let frame_start = Instant::now();
        if queue.run_pending() == 0 {
            break;
        }
        if let Some(e) = failed.borrow_mut().take() {
            return Err(e.into());
        }

        // Handle input until the next frame is due.
        let deadline = frame_start + settings.frame_interval;
        while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            if !event::poll(remaining)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if is_quit(&key) => {
                    quit = true;
                    break;
                }
                Event::Resize(w, h) => {
                    size.set((w, h));
                    execute!(io::stdout(), Clear(ClearType::All))?;
                }
                _ => {}
            }
        }
    }

    drop(guard);
    handle.stop();
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn terminal_sink(
    size: Rc<Cell<(u16, u16)>>,
    failed: Rc<RefCell<Option<io::Error>>>,
) -> impl FnMut(&Grid) + 'static {
    let mut out = io::stdout();
    let mut line = String::new();
    move |grid: &Grid| {
        if let Err(e) = screen::draw(&mut out, grid, size.get(), &mut line) {
            failed.borrow_mut().get_or_insert(e);
        }
    }
}
