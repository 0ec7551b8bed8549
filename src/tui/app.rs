use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::io::scan::load_items;
use crate::model::{Config, Item};
use crate::ops::selection::filter_tags;
use crate::ops::{Selection, assign_tag_colors};

use super::input;
use super::render;
use super::theme::Theme;

/// How long the event loop waits for input before a tick
const TICK: Duration = Duration::from_millis(500);

/// Rows taken by the tab bar and the status row
const CHROME_ROWS: u16 = 3;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigation,
    FilterEntry,
    Help,
}

/// Main application state
pub struct App {
    pub selection: Selection,
    pub mode: Mode,
    pub theme: Theme,
    /// Directory that was scanned, shown in the tab bar
    pub root: PathBuf,
    pub show_key_hints: bool,
    pub should_quit: bool,
    /// Caret position in the filter input (byte offset into the filter text)
    pub filter_cursor: usize,
    /// Blink phase of the filter caret
    pub caret_visible: bool,
    /// First visible row of the list
    pub scroll_offset: usize,
    /// Terminal size in cells
    pub width: u16,
    pub height: u16,
    /// Transient message shown in the status row until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Build the app from scanned items. `seed` fixes the tag hue offset.
    pub fn new(items: Vec<Item>, config: &Config, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let tag_colors = assign_tag_colors(&items, &mut rng);
        let theme = Theme::from_config(&config.ui, tag_colors);

        App {
            selection: Selection::new(items),
            mode: Mode::Navigation,
            theme,
            root: PathBuf::from("."),
            show_key_hints: config.ui.show_key_hints,
            should_quit: false,
            filter_cursor: 0,
            caret_visible: true,
            scroll_offset: 0,
            width: 80,
            height: 24,
            status_message: None,
        }
    }

    /// Rows available for the task list
    pub fn list_height(&self) -> usize {
        self.height.saturating_sub(CHROME_ROWS).max(1) as usize
    }

    /// Record a new terminal size. Layout only; no mode change.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Periodic tick: blink the filter caret
    pub fn tick(&mut self) {
        if self.mode == Mode::FilterEntry {
            self.caret_visible = !self.caret_visible;
        } else {
            self.caret_visible = true;
        }
    }

    /// Keep the cursor row inside the list window
    pub fn adjust_scroll(&mut self) {
        self.scroll_to_fit(self.list_height());
    }

    /// Keep the cursor row inside a window of `height` rows
    pub fn scroll_to_fit(&mut self, height: usize) {
        let height = height.max(1);
        let cursor = self.selection.cursor().unwrap_or(0);
        let max_offset = self.selection.visible_len().saturating_sub(height);
        if cursor < self.scroll_offset {
            self.scroll_offset = cursor;
        } else if cursor >= self.scroll_offset + height {
            self.scroll_offset = cursor + 1 - height;
        }
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    /// Regex matching the filter tags at the start of a tag, for highlighting
    pub fn filter_re(&self) -> Option<Regex> {
        let tags = filter_tags(self.selection.filter_text());
        if tags.is_empty() {
            return None;
        }
        let alternation = tags
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!("^(?:{})", alternation)).ok()
    }
}

/// Seed for the tag hue offset when none is configured
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Run the TUI application
pub fn run(root: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Scan before touching the terminal so startup failures print plainly
    let items = load_items(root, &config.scan)?;
    let seed = config.ui.color_seed.unwrap_or_else(clock_seed);
    log::debug!("tag color seed {}", seed);

    let mut app = App::new(items, config, seed);
    app.root = root.to_path_buf();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    log::info!("session ended");

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Resize(width, height) => app.resize(width, height),
                _ => {}
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
