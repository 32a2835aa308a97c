use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use glade_config::Config;
use glade_core::{ColorTheme, Cursor, Viewport};
use glade_field::{FieldCanvas, ParticleField};
use glade_fonts::{GLYPH_HEIGHT, art_width, build_stopwatch_art};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Paragraph, Wrap},
};

use crate::quotes::{self, Quote};
use crate::scheduler::Scheduler;
use crate::stopwatch::{Stopwatch, Task};

/// Config file the app was started from, written back on exit.
#[derive(Debug)]
pub struct SettingsFile {
    pub path: PathBuf,
    pub config: Config,
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Effective settings, including command-line overrides.
    config: Config,
    /// Where theme and background choices are persisted.
    settings: Option<SettingsFile>,
    /// Current color theme.
    color_theme: ColorTheme,
    /// Whether the park is drawn and animated.
    show_background: bool,
    /// The park, created once the terminal size is known.
    field: Option<ParticleField>,
    /// Pointer position in park units.
    cursor: Cursor,
    stopwatch: Stopwatch,
    scheduler: Scheduler<Task>,
    /// Quote currently on screen.
    quote: &'static Quote,
    rng: StdRng,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config, settings: Option<SettingsFile>) -> Self {
        let mut rng = StdRng::from_entropy();
        let quote = quotes::random(&mut rng);
        Self {
            running: false,
            color_theme: config.color_theme,
            show_background: config.background,
            field: None,
            cursor: Cursor::away(),
            stopwatch: Stopwatch::new(config.tick_interval(), config.quote_interval()),
            scheduler: Scheduler::new(),
            quote,
            rng,
            config,
            settings,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        let frame_interval = self.config.frame_interval();
        let mut next_frame = Instant::now();
        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            // Skip frames rather than queueing them when drawing falls behind.
            next_frame = (next_frame + frame_interval).max(Instant::now());
            while self.running {
                self.handle_crossterm_events(self.wake_at(next_frame))?;
                let now = Instant::now();
                if now >= next_frame {
                    break;
                }
                self.run_due(now);
            }
            self.on_frame(Instant::now());
        }
        self.save_settings();
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        if self.show_background {
            let field = self.sync_field(area);
            frame.render_widget(FieldCanvas::new(field), area);
        }

        let color = self.color_theme.color();
        let chunks = Layout::vertical([
            Constraint::Fill(1),                     // Top padding
            Constraint::Length(GLYPH_HEIGHT as u16), // Big digits
            Constraint::Length(1),                   // Run state
            Constraint::Length(1),                   // Spacing
            Constraint::Length(2),                   // Quote
            Constraint::Length(1),                   // Attribution
            Constraint::Fill(1),                     // Bottom padding
            Constraint::Length(1),                   // Help text
        ])
        .split(area);

        // Fall back to plain text when the block digits do not fit.
        let readout = self.stopwatch.display();
        let digits: Vec<Line> = if art_width(&readout) <= usize::from(area.width) {
            build_stopwatch_art(self.stopwatch.elapsed_secs())
                .into_iter()
                .map(|s| Line::from(s).style(Style::new().fg(color)))
                .collect()
        } else {
            vec![Line::from(readout).style(Style::new().fg(color).bold())]
        };
        frame.render_widget(
            Paragraph::new(digits).alignment(Alignment::Center),
            chunks[1],
        );

        let state = if self.stopwatch.is_running() {
            "running"
        } else {
            "paused"
        };
        frame.render_widget(Line::from(state).dark_gray().centered(), chunks[2]);

        let quote = Paragraph::new(self.quote.content)
            .style(Style::new().fg(color).italic())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(quote, chunks[4]);
        if let Some(author) = self.quote.attribution() {
            frame.render_widget(Line::from(author).dark_gray().centered(), chunks[5]);
        }

        let help = Line::from(vec![
            "s".bold().fg(color),
            " start  ".dark_gray(),
            "p".bold().fg(color),
            " pause  ".dark_gray(),
            "r".bold().fg(color),
            " reset  ".dark_gray(),
            "n".bold().fg(color),
            " quote  ".dark_gray(),
            "b".bold().fg(color),
            " park  ".dark_gray(),
            "c".bold().fg(color),
            " color  ".dark_gray(),
            "q".bold().fg(color),
            " quit".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[7]);
    }

    /// Create the park on first use and keep it matched to the terminal size.
    fn sync_field(&mut self, area: Rect) -> &ParticleField {
        let viewport = Viewport::from_cells(area.width, area.height);
        let seed = self.config.seed;
        let field = self.field.get_or_insert_with(|| match seed {
            Some(seed) => ParticleField::with_seed(viewport, seed),
            None => ParticleField::new(viewport),
        });
        field.resize(viewport, self.config.resize_policy);
        field
    }

    /// Reads the crossterm events until `deadline` and updates the state of [`App`].
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::FocusLost => self.cursor.leave(),
                Event::Resize(cols, rows) => log::debug!("terminal resized to {cols}x{rows}"),
                _ => {}
            }
        }
        Ok(())
    }

    /// Wake for the next frame, or earlier when a scheduled task falls due.
    fn wake_at(&self, next_frame: Instant) -> Instant {
        self.scheduler
            .next_deadline()
            .map_or(next_frame, |due| due.min(next_frame))
    }

    fn run_due(&mut self, now: Instant) {
        for task in self.scheduler.due(now) {
            match task {
                Task::Tick => self.stopwatch.tick(),
                Task::RotateQuote => self.show_quote(),
            }
        }
    }

    /// Fire due scheduled work, then advance the park by one frame.
    fn on_frame(&mut self, now: Instant) {
        self.run_due(now);
        if self.show_background
            && let Some(field) = &mut self.field
        {
            field.step(self.cursor);
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('s')) => self.start(Instant::now()),
            (_, KeyCode::Char('p')) => self.pause(),
            (_, KeyCode::Char(' ')) => self.toggle(Instant::now()),
            (_, KeyCode::Char('r')) => self.reset(),
            (_, KeyCode::Char('n')) => self.show_quote(),
            (_, KeyCode::Char('b')) => self.toggle_background(),
            (_, KeyCode::Char('c')) => self.cycle_color_theme(),
            _ => {}
        }
    }

    /// Track the pointer in park units.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.cursor
                    .move_to(Viewport::cell_to_point(mouse.column, mouse.row));
            }
            _ => {}
        }
    }

    /// Start the stopwatch and quote rotation, showing a fresh quote.
    fn start(&mut self, now: Instant) {
        if self.stopwatch.start(&mut self.scheduler, now) {
            self.show_quote();
        }
    }

    fn pause(&mut self) {
        self.stopwatch.pause(&mut self.scheduler);
    }

    fn toggle(&mut self, now: Instant) {
        if self.stopwatch.is_running() {
            self.pause();
        } else {
            self.start(now);
        }
    }

    /// Stop, zero the stopwatch and show a fresh quote.
    fn reset(&mut self) {
        self.stopwatch.reset(&mut self.scheduler);
        self.show_quote();
    }

    fn show_quote(&mut self) {
        self.quote = quotes::random(&mut self.rng);
    }

    fn toggle_background(&mut self) {
        self.show_background = !self.show_background;
    }

    /// Cycle through available color themes.
    fn cycle_color_theme(&mut self) {
        self.color_theme = self.color_theme.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }

    /// Write theme and background choices back to the config file.
    ///
    /// Command-line overrides are not persisted. Failures are logged only.
    fn save_settings(&mut self) {
        let Some(settings) = &mut self.settings else {
            return;
        };
        if settings.config.color_theme == self.color_theme
            && settings.config.background == self.show_background
        {
            return;
        }
        settings.config.color_theme = self.color_theme;
        settings.config.background = self.show_background;
        if let Err(e) = settings.config.save(&settings.path) {
            log::warn!("could not save settings: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use tempfile::TempDir;

    fn new_app() -> App {
        let config = Config {
            seed: Some(7),
            ..Config::default()
        };
        App::new(config, None)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_start_then_ticks_advance_the_readout() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('s'));
        assert!(app.stopwatch.is_running());
        app.on_frame(Instant::now() + Duration::from_millis(3500));
        assert_eq!(app.stopwatch.elapsed_secs(), 3);
        assert_eq!(app.stopwatch.display(), "00:03");
    }

    #[test]
    fn test_space_toggles() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.stopwatch.is_running());
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.stopwatch.is_running());
        assert_eq!(app.scheduler.next_deadline(), None);
    }

    #[test]
    fn test_reset_stops_and_zeroes() {
        let mut app = new_app();
        press(&mut app, KeyCode::Char('s'));
        app.on_frame(Instant::now() + Duration::from_millis(2500));
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.stopwatch.elapsed_secs(), 0);
        assert!(!app.stopwatch.is_running());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);

        let mut app = new_app();
        app.running = true;
        press(&mut app, KeyCode::Char('c'));
        assert!(app.running);
        assert_eq!(app.color_theme, ColorTheme::Sunflower);
    }

    #[test]
    fn test_pointer_moves_and_leaves() {
        let mut app = new_app();
        app.on_mouse_event(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 10,
            row: 2,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.cursor, Cursor::at(84.0, 40.0));
        app.cursor.leave();
        assert!(!app.cursor.is_on_screen());
    }

    #[test]
    fn test_render_creates_and_steps_the_park() {
        let mut app = new_app();
        assert!(app.field.is_none());
        let text = screen(&mut app);
        assert!(text.contains("quit"));
        assert!(text.contains("paused"));

        let field = app.field.as_ref().unwrap();
        assert_eq!(field.viewport(), Viewport::from_cells(80, 24));
        assert_eq!(field.seed(), 7);

        app.on_frame(Instant::now());
        assert_eq!(app.field.as_ref().unwrap().frames(), 1);
    }

    #[test]
    fn test_narrow_terminal_shows_plain_readout() {
        let mut app = new_app();
        let mut terminal = Terminal::new(TestBackend::new(20, 24)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("00:00"));
        assert!(!text.contains('█'));

        assert!(screen(&mut app).contains('█'));
    }

    #[test]
    fn test_wakes_for_scheduled_ticks() {
        let mut app = new_app();
        let now = Instant::now();
        let far = now + Duration::from_secs(5);
        assert_eq!(app.wake_at(far), far);

        app.start(now);
        assert_eq!(app.wake_at(far), now + Duration::from_secs(1));
        let soon = now + Duration::from_millis(10);
        assert_eq!(app.wake_at(soon), soon);
    }

    #[test]
    fn test_hidden_park_is_not_stepped() {
        let mut app = new_app();
        screen(&mut app);
        press(&mut app, KeyCode::Char('b'));
        app.on_frame(Instant::now());
        assert_eq!(app.field.as_ref().unwrap().frames(), 0);
    }

    #[test]
    fn test_settings_saved_only_when_changed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let settings = SettingsFile {
            path: path.clone(),
            config: Config::default(),
        };
        let mut app = App::new(Config::default(), Some(settings));
        app.save_settings();
        assert!(!path.exists());

        press(&mut app, KeyCode::Char('c'));
        app.save_settings();
        let saved = Config::load(&path).unwrap();
        assert_eq!(saved.color_theme, ColorTheme::Sunflower);
    }
}
