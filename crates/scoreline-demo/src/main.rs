#![forbid(unsafe_code)]

//! Scoreline demo binary entry point.

use std::io::{self, Write};
use std::process;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use scoreline::{MemoryViewer, OBJECTIVE_NAME, ProtocolLimits};
use scoreline_demo::cli::Opts;
use scoreline_demo::config::DemoConfig;
use scoreline_demo::driver::Driver;
use scoreline_demo::render::draw_panel;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const FOOTER: &str = "n: next title  c: clear status  q: quit";

fn init_logging() {
    let filter = EnvFilter::try_from_env("SCORELINE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn resolve_limits(opts: &Opts) -> ProtocolLimits {
    match opts.server_version.as_deref() {
        Some(tag) => ProtocolLimits::for_version_tag(tag).unwrap_or_else(|| {
            warn!(tag, "unrecognized server version, using legacy limits");
            ProtocolLimits::LEGACY
        }),
        None => ProtocolLimits::from_env(),
    }
}

enum Action {
    Quit,
    NextTitle,
    ClearStatus,
    None,
}

fn action_for(key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('n') => Action::NextTitle,
        KeyCode::Char('c') => Action::ClearStatus,
        _ => Action::None,
    }
}

fn run(opts: &Opts, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &opts.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let limits = resolve_limits(opts);
    info!(
        title_length = limits.title_length(),
        text_length = limits.text_length(),
        "resolved protocol limits"
    );

    let panel = config.build_panel(limits)?;
    let viewer: MemoryViewer = MemoryViewer::new();
    panel.bind_to(&viewer);
    let board = viewer.board().ok_or("viewer has no board")?;

    let mut driver = Driver::new(&panel);
    let tick = Duration::from_millis(opts.tick_ms.max(1));
    loop {
        let lines = board.render(OBJECTIVE_NAME)?;
        let title = panel.current_title()?;
        draw_panel(out, &title, &lines, FOOTER)?;

        if opts.ticks > 0 && driver.ticks() >= opts.ticks {
            break;
        }
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                match action_for(key) {
                    Action::Quit => break,
                    Action::NextTitle => driver.rotate_now()?,
                    Action::ClearStatus => driver.clear_status()?,
                    Action::None => {}
                }
            }
            continue;
        }
        driver.step()?;
    }
    info!(ticks = driver.ticks(), "demo finished");
    Ok(())
}

fn main() {
    let opts = Opts::parse();
    init_logging();

    let mut stdout = io::stdout();
    let entered = terminal::enable_raw_mode()
        .and_then(|()| execute!(stdout, EnterAlternateScreen, cursor::Hide));
    if let Err(err) = entered {
        eprintln!("Failed to initialize terminal: {err}");
        process::exit(1);
    }

    let result = run(&opts, &mut stdout);

    let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = result {
        eprintln!("Runtime error: {err}");
        process::exit(1);
    }
}
