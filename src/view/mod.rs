//! Terminal host for the history list (impure shell)
//!
//! - `surface`: TerminalSurface - scroll offset and content extent in rows
//! - `row`: RowSlot / RowTemplate - pooled rows
//! - `render`: drawing rows and the status line

pub mod render;
pub mod row;
pub mod surface;

pub use render::{render_history, split_area, status_text, TerminalHistory};
pub use row::{RowSlot, RowTemplate};
pub use surface::TerminalSurface;

use crate::history::{HistoryList, RowMetrics};
use crate::scroller::ScrollerConfig;
use crate::source::demo_line;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// How long the event loop waits for input before ticking the list.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Settings the terminal host needs from the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Layout and pooling parameters.
    pub scroller: ScrollerConfig,
    /// History row sizing.
    pub metrics: RowMetrics,
}

impl ViewOptions {
    /// Create view options.
    pub fn new(scroller: ScrollerConfig, metrics: RowMetrics) -> Self {
        Self { scroller, metrics }
    }

    /// Build an empty history list over a not-yet-laid-out surface.
    ///
    /// The first draw gives the surface its area; until then a data reset
    /// waits for a usable width.
    pub fn history(&self) -> TerminalHistory {
        HistoryList::new(
            self.scroller,
            self.metrics,
            TerminalSurface::default(),
            RowTemplate::new(),
        )
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::new(ScrollerConfig::terminal(), RowMetrics::terminal())
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    history: TerminalHistory,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create the app on the real terminal.
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(history: TerminalHistory) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, history))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Resizes are picked up by the
    /// next draw.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;

            if !event::poll(TICK_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create the app on any backend.
    pub fn with_terminal(terminal: Terminal<B>, history: TerminalHistory) -> Self {
        Self { terminal, history }
    }

    /// Apply one key press. Returns true if the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let page = isize::try_from(self.history.page_height()).unwrap_or(isize::MAX);
        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char('j') | KeyCode::Down => self.history.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.history.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.history.scroll_by(page),
            KeyCode::PageUp => self.history.scroll_by(-page),
            KeyCode::Char('g') | KeyCode::Home => self.history.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.history.scroll_to_bottom(),
            KeyCode::Char('a') => {
                let line = demo_line(self.history.rows().len());
                self.history.append_line(line);
            }
            _ => {}
        }
        false
    }

    /// Give the list its current area, tick it and draw one frame.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let (list_area, _) = split_area(Rect::new(0, 0, size.width, size.height));
        if let Some(surface) = self.history.surface_mut() {
            surface.set_area(list_area);
        }
        self.history.tick();

        let history = &self.history;
        self.terminal.draw(|frame| {
            let area = frame.area();
            render_history(frame, area, history);
        })?;
        Ok(())
    }

    /// The history list.
    pub fn history(&self) -> &TerminalHistory {
        &self.history
    }

    /// The terminal, for inspecting a test backend.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// The terminal, for resizing a test backend.
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Show `lines` in the terminal until the user quits.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_lines(lines: Vec<String>, options: ViewOptions) -> Result<(), TuiError> {
    let mut history = options.history();
    info!(lines = lines.len(), "Starting history view");
    history.set_history(lines);

    let mut app = TuiApp::new(history)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
