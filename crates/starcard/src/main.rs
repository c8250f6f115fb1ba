use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};
use starcard_config::{Config, MemoryStorage, PreferenceStore, Storage};
use starcard_core::initials_from_name;
use starcard_sky::{AnimationDriver, CellCanvas};

mod card;
mod clock;
mod link;
mod logging;
mod theme;

use card::CardView;
use clock::FrameClock;
use link::{LinkActions, TerminalClipboard};
use theme::ThemeProvider;

/// Longest the event loop sleeps when no frame or feedback is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    logging::init(&config.logging.level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting starcard");

    let storage: Box<dyn Storage> = match PreferenceStore::open_default() {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "preferences opened");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "preferences unavailable, theme will not persist");
            Box::new(MemoryStorage::default())
        }
    };

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableFocusChange)
        .map_err(color_eyre::Report::from)
        .and_then(|()| App::new(config, storage).run(terminal));
    if let Err(e) = execute!(stdout(), DisableFocusChange) {
        tracing::warn!(error = %e, "failed to disable focus reporting");
    }
    ratatui::restore();
    result
}

/// In-progress edit of the display name.
#[derive(Debug)]
struct NameEdit {
    /// Name to restore if the edit is cancelled.
    original: String,
}

/// The main application which holds the state and logic of the application.
pub struct App {
    /// Is the application running?
    running: bool,
    config: Config,
    /// Current display name; the initials follow it.
    name: String,
    editing: Option<NameEdit>,
    theme: ThemeProvider,
    sky: AnimationDriver<FrameClock, fastrand::Rng>,
    canvas: CellCanvas,
    links: LinkActions<TerminalClipboard>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, storage: Box<dyn Storage>) -> Self {
        let theme = ThemeProvider::load(storage, config.appearance.default_theme);
        let animation = &config.animation;
        let dpr = animation.pixel_ratio();
        let interval = Duration::from_millis(animation.frame_interval_ms.max(1));

        let sky = AnimationDriver::new(FrameClock::new(interval), fastrand::Rng::new(), dpr)
            .with_reduced_motion(animation.reduced_motion)
            .with_frame_interval(animation.frame_interval_ms);
        let canvas = CellCanvas::new(
            animation.cell_width_px as f32 * dpr,
            animation.cell_height_px as f32 * dpr,
            theme.current().backdrop(),
        );

        Self {
            running: false,
            name: config.profile.name.clone(),
            editing: None,
            theme,
            sky,
            canvas,
            links: LinkActions::new(TerminalClipboard),
            config,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let size = terminal.size()?;
        self.resize(size.width, size.height);
        self.sky.start();

        while self.running {
            let now = Instant::now();
            if let Some(id) = self.sky.scheduler_mut().take_due(now) {
                let scheme = self.theme.current().scheme();
                self.sky.on_frame(id, &mut self.canvas, &scheme);
            }
            self.links.expire(now);

            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.sky.stop();
        tracing::info!("bye");
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let theme = self.theme.current();
        let now = Instant::now();

        frame.render_widget(&self.canvas, area);

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Card
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let initials = initials_from_name(self.name.trim());
        let profile = &self.config.profile;
        let card = CardView {
            name: &self.name,
            initials: &initials,
            title: &profile.title,
            tagline: &profile.tagline,
            url: &profile.url,
            theme,
            copy_label: self.links.copy_label(now),
            copy_disabled: self.links.is_flashing(now),
            editing: self.editing.is_some(),
        };
        frame.render_widget(card, chunks[0]);

        let accent = theme.accent();
        let help = if self.editing.is_some() {
            Line::from(vec![
                "enter".bold().fg(accent),
                " save  ".fg(theme.muted()),
                "esc".bold().fg(accent),
                " cancel".fg(theme.muted()),
            ])
        } else {
            let motion = if self.sky.reduced_motion() { " motion off  " } else { " motion on  " };
            Line::from(vec![
                "q".bold().fg(accent),
                " quit  ".fg(theme.muted()),
                "t".bold().fg(accent),
                format!(" {} theme  ", theme.toggle().as_pref()).fg(theme.muted()),
                "m".bold().fg(accent),
                motion.fg(theme.muted()),
                "e".bold().fg(accent),
                " edit name".fg(theme.muted()),
            ])
        };
        frame.render_widget(help.centered(), chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Sleeps no longer than the next animation frame or feedback deadline.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::FocusGained => self.sky.set_visible(true),
                Event::FocusLost => self.sky.set_visible(false),
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        let frame = self.sky.scheduler().timeout(now);
        let flash = self
            .links
            .deadline()
            .map(|until| until.saturating_duration_since(now));
        [frame, flash].into_iter().flatten().fold(IDLE_POLL, Duration::min)
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        if self.editing.is_some() {
            self.on_edit_key(key);
            return;
        }
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('t')) => self.toggle_theme(),
            (_, KeyCode::Char('s')) => self.share(),
            (_, KeyCode::Char('c')) => self.copy_link(),
            (_, KeyCode::Char('m')) => self.toggle_motion(),
            (_, KeyCode::Char('e')) => self.begin_edit(),
            _ => {}
        }
    }

    fn on_edit_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Enter) => self.finish_edit(true),
            (_, KeyCode::Esc) => self.finish_edit(false),
            (_, KeyCode::Backspace) => {
                self.name.pop();
            }
            (modifiers, KeyCode::Char(ch))
                if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.name.push(ch);
            }
            _ => {}
        }
    }

    fn begin_edit(&mut self) {
        self.editing = Some(NameEdit {
            original: self.name.clone(),
        });
    }

    fn finish_edit(&mut self, keep: bool) {
        if let Some(edit) = self.editing.take() {
            if keep {
                self.name = self.name.trim().to_string();
                tracing::info!(name = %self.name, "display name changed");
            } else {
                self.name = edit.original;
            }
        }
    }

    /// Resize the sky to a `cols` x `rows` terminal.
    fn resize(&mut self, cols: u16, rows: u16) {
        let (width, height) = self.canvas.surface_size(cols, rows);
        self.sky.resize(&mut self.canvas, width, height);
    }

    fn toggle_theme(&mut self) {
        let theme = self.theme.toggle();
        self.canvas.set_backdrop(theme.backdrop());
        if !self.sky.is_running() {
            self.sky.repaint(&mut self.canvas, &theme.scheme());
        }
        tracing::info!(theme = theme.as_pref(), "theme changed");
    }

    fn toggle_motion(&mut self) {
        let reduced = !self.sky.reduced_motion();
        self.sky.set_reduced_motion(reduced);
        tracing::info!(reduced_motion = reduced, "motion preference changed");
    }

    fn share(&mut self) {
        let profile = &self.config.profile;
        self.links.share(&profile.url, profile.share_command.as_deref(), Instant::now());
    }

    fn copy_link(&mut self) {
        self.links.copy(self.config.profile.copy_link(), Instant::now());
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
