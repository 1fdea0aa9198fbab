use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Write;
use std::path::Path;
use std::thread;
use std::time;

use anyhow::Context;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sparselife::ScreenSize;
use sparselife::camera::Camera;
use sparselife::config::Config;
use sparselife::events::AppEvent;
use sparselife::events::CameraEvent;
use sparselife::events::EngineEvent;
use sparselife::events::Event;
use sparselife::io::EventDecoder;
use sparselife::patterns;
use sparselife::render::ALIVE_COLOR;
use sparselife::render::BACKGROUND_COLOR;
use sparselife::render::Color;
use sparselife::world::World;

/// Rows kept for the status line
const STATUS_ROWS: ScreenSize = 1;

fn setup_world(path: Option<&Path>) -> anyhow::Result<World> {
    let mut world = World::new();

    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open pattern file {}", path.display()))?;

            let n = world
                .load(BufReader::new(file))
                .with_context(|| format!("Failed to load pattern file {}", path.display()))?;

            info!(path = %path.display(), cells = n, "Loaded pattern");
        }
        None => {
            world.seed(patterns::DEFAULT_SEED.cells.iter().copied());

            info!(pattern = patterns::DEFAULT_SEED.name, "Using hardcoded pattern");
        }
    }

    Ok(world)
}

fn term_color(c: Color) -> style::Color {
    style::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

struct App {
    world: World,
    cam: Camera,
    decoder: EventDecoder,
    paused: bool,
}

impl App {
    /// Returns false once the app should exit
    fn handle(&mut self, event: Event) -> bool {
        match event {
            Event::AppEvent(AppEvent::Exit) => return false,
            Event::AppEvent(AppEvent::CameraEvent(e)) => match e {
                CameraEvent::Move { dx, dy } => self.cam.pan(dx, dy),
                CameraEvent::ZoomIn => self.cam.zoom_in(),
                CameraEvent::ZoomOut => self.cam.zoom_out(),
                CameraEvent::ResetView => self.cam.reset_view(),
                CameraEvent::Resize { cols, rows } => {
                    self.cam.resize(cols, rows.saturating_sub(STATUS_ROWS))
                }
            },
            Event::EngineEvent(e) => match e {
                EngineEvent::TogglePause => self.paused = !self.paused,
                EngineEvent::Advance(n) => self.world.advance(n),
                EngineEvent::Clear => self.world.clear(),
            },
        }

        true
    }

    fn present<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.cam.reset();
        self.cam.draw(self.world.drawables());

        let status = format!(
            "gen {}  pop {}  zoom 1:{}{}",
            self.world.generation(),
            self.world.population(),
            1u64 << self.cam.zoom_level(),
            if self.paused { "  [paused]" } else { "" },
        );

        queue!(
            out,
            style::SetForegroundColor(term_color(ALIVE_COLOR)),
            style::SetBackgroundColor(term_color(BACKGROUND_COLOR)),
            cursor::MoveTo(0, 0)
        )?;

        for line in self.cam.render().lines() {
            queue!(out, style::Print(line), cursor::MoveToNextLine(1))?;
        }

        queue!(
            out,
            style::Print(status),
            terminal::Clear(terminal::ClearType::UntilNewLine),
            style::ResetColor
        )?;

        out.flush()
    }

    fn run<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        loop {
            let t = time::Instant::now();

            // Poll events for as long as FRAMETIME
            while event::poll(Config::FRAMETIME.saturating_sub(t.elapsed()))? {
                let Some(event) = self.decoder.convert_event(event::read()?) else {
                    continue;
                };

                if !self.handle(event) {
                    return Ok(());
                }
            }

            if !self.paused {
                self.world.update();
            }

            self.present(out).context("Failed to draw frame")?;

            thread::sleep(Config::FRAMETIME.saturating_sub(t.elapsed()));
        }
    }
}

/// Raw mode, alternate screen and mouse capture, undone on drop. Every exit path out of `main`,
/// including a failed setup, leaves the terminal as it was found.
struct TerminalGuard;

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;

        execute!(
            out,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide
        )
        .context("Failed to set up terminal")?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let res = execute!(
            io::stdout(),
            cursor::Show,
            event::DisableMouseCapture,
            terminal::LeaveAlternateScreen
        )
        .and_then(|()| terminal::disable_raw_mode());

        if let Err(e) = res {
            error!(error = %e, "Failed to restore terminal");
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = std::env::args().nth(1);
    let world = setup_world(path.as_deref().map(Path::new))?;

    let (cols, rows) = terminal::size().context("Failed to get terminal size")?;
    let mut cam = Camera::new(cols, rows.saturating_sub(STATUS_ROWS));
    cam.reset_view();

    let mut app = App {
        world,
        cam,
        decoder: EventDecoder::new(),
        paused: false,
    };

    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;

    app.run(&mut stdout)
}
