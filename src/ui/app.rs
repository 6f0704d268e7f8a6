//! Main TUI application state and logic

use crate::algorithm::Algorithm;
use crate::driver::{NullSink, PlaybackState, ReplayDriver, MAX_SPEED, MIN_SPEED};
use crate::store::{
    now_millis, NewVisualization, VisualizationStore, VisualizationSummary, DEFAULT_LIST_LIMIT,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::panes::{
    render_bars_pane, render_pseudocode_pane, render_saved_pane, render_status_bar,
    render_steps_pane, BarsRenderData, SavedRenderData, StatusRenderData, StepsScrollState,
};

/// Longest we block waiting for input when no tick is due
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Steps,
    Saved,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Steps => FocusedPane::Saved,
            FocusedPane::Saved => FocusedPane::Steps,
        }
    }
}

/// The main application state
pub struct App {
    /// The replay session being shown
    pub driver: ReplayDriver,

    /// Where `s` saves to and `o` loads from
    pub store: Box<dyn VisualizationStore>,

    /// Algorithm currently chosen in the selector
    pub selected: Algorithm,

    /// Playback speed, higher is faster
    pub speed: u32,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub steps_scroll: StepsScrollState,

    /// Cached listing for the saved pane
    pub saved: Vec<VisualizationSummary>,
    pub saved_selected: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around `driver`.
    ///
    /// If the driver already has a log loaded (replaying a saved record), the
    /// selector follows its algorithm.
    pub fn new(
        driver: ReplayDriver,
        store: Box<dyn VisualizationStore>,
        algorithm: Algorithm,
        speed: u32,
    ) -> Self {
        let selected = if driver.state() == PlaybackState::Idle {
            algorithm
        } else {
            driver.algorithm()
        };
        let mut app = App {
            driver,
            store,
            selected,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            focused_pane: FocusedPane::Steps,
            steps_scroll: StepsScrollState::default(),
            saved: Vec::new(),
            saved_selected: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        };
        app.refresh_saved();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // The frame for the previous tick is on screen; the next one may fire.
            self.poll_playback(Instant::now());

            let timeout = self
                .driver
                .next_tick_in(Instant::now())
                .map_or(IDLE_POLL, |due| due.min(IDLE_POLL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Fire a due tick and update the status line
    pub fn poll_playback(&mut self, now: Instant) {
        let was_playing = self.driver.is_playing();
        match self.driver.poll(now, self.speed, &mut NullSink) {
            Ok(Some(_)) => {
                self.steps_scroll.follow = true;
                if was_playing && self.driver.state() == PlaybackState::Complete {
                    self.set_status("Playback complete");
                }
            }
            Ok(None) => {}
            Err(e) => self.set_error(format!("Replay stopped: {e}")),
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        // Left column: Chart (top) | Steps (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        // Right column: Pseudocode (top) | Saved (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let shown_algorithm = if self.driver.state() == PlaybackState::Idle {
            self.selected
        } else {
            self.driver.algorithm()
        };

        render_bars_pane(
            frame,
            left_rows[0],
            BarsRenderData {
                array: self.driver.working_array(),
                highlights: self.driver.highlights(),
                algorithm: shown_algorithm,
                state: self.driver.state(),
            },
        );

        render_steps_pane(
            frame,
            left_rows[1],
            self.driver.step_log(),
            self.driver.cursor(),
            self.focused_pane == FocusedPane::Steps,
            &mut self.steps_scroll,
        );

        render_pseudocode_pane(frame, right_rows[0], shown_algorithm);

        render_saved_pane(
            frame,
            right_rows[1],
            SavedRenderData {
                entries: &self.saved,
                selected: self.saved_selected,
                now_millis: now_millis(),
            },
            self.focused_pane == FocusedPane::Saved,
        );

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                cursor: self.driver.cursor(),
                total_steps: self.driver.step_log().len(),
                state: self.driver.state(),
                speed: self.speed,
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                // Debounce so a held key does not flicker between states
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play(Instant::now());
                }
            }
            KeyCode::Right => {
                self.driver.pause();
                self.step_forward(1);
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.driver.pause();
                let n = c.to_digit(10).map_or(1, |d| d as usize);
                self.step_forward(n);
            }
            KeyCode::Enter if self.focused_pane == FocusedPane::Saved => {
                self.open_selected();
            }
            KeyCode::Enter => {
                self.jump_to_end();
            }
            KeyCode::Char('r') | KeyCode::Backspace => {
                self.driver.reset();
                self.steps_scroll = StepsScrollState::default();
                self.set_status("Reset");
            }
            KeyCode::Char('a') => self.select_algorithm(self.selected.next()),
            KeyCode::Char('A') => self.select_algorithm(self.selected.prev()),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.speed = (self.speed + 1).min(MAX_SPEED);
                self.set_status(format!("Speed {}", self.speed));
            }
            KeyCode::Char('-') => {
                self.speed = self.speed.saturating_sub(1).max(MIN_SPEED);
                self.set_status(format!("Speed {}", self.speed));
            }
            KeyCode::Char('s') => self.save_current(),
            KeyCode::Char('l') => {
                self.refresh_saved();
                self.set_status(format!("{} saved visualization(s)", self.saved.len()));
            }
            KeyCode::Char('o') => self.open_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Steps => {
                    self.steps_scroll.follow = false;
                    self.steps_scroll.offset = self.steps_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Saved => {
                    self.saved_selected = self.saved_selected.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Steps => {
                    self.steps_scroll.follow = false;
                    self.steps_scroll.offset = self.steps_scroll.offset.saturating_add(1);
                }
                FocusedPane::Saved => {
                    if self.saved_selected + 1 < self.saved.len() {
                        self.saved_selected += 1;
                    }
                }
            },
            _ => {}
        }
    }

    /// Play from idle loads the selected algorithm first
    pub fn toggle_play(&mut self, now: Instant) {
        match self.driver.state() {
            PlaybackState::Playing => {
                self.driver.pause();
                self.set_status("Paused");
            }
            PlaybackState::Idle => {
                if self.ensure_loaded() {
                    self.start(now);
                }
            }
            PlaybackState::Paused => self.start(now),
            PlaybackState::Complete => {
                self.set_status("Playback complete, press r to reset");
            }
        }
    }

    fn start(&mut self, now: Instant) {
        if self.driver.play(now) {
            self.steps_scroll.follow = true;
            self.set_status("Playing...");
        } else {
            self.set_status("Nothing to play");
        }
    }

    fn select_algorithm(&mut self, algorithm: Algorithm) {
        self.selected = algorithm;
        match self.driver.select_algorithm(algorithm) {
            Ok(()) => {
                self.steps_scroll = StepsScrollState::default();
                self.set_status(format!(
                    "{} loaded: {} steps",
                    algorithm.title(),
                    self.driver.step_log().len()
                ));
            }
            Err(e) => self.set_error(format!("Cannot load: {e}")),
        }
    }

    /// Load the selected algorithm if nothing is loaded yet
    fn ensure_loaded(&mut self) -> bool {
        if self.driver.state() != PlaybackState::Idle {
            return true;
        }
        let source = self.driver.source_array().to_vec();
        match self.driver.load(self.selected, &source) {
            Ok(()) => true,
            Err(e) => {
                self.set_error(format!("Cannot load: {e}"));
                false
            }
        }
    }

    fn step_forward(&mut self, n: usize) {
        if !self.ensure_loaded() {
            return;
        }
        let mut stepped = 0;
        for _ in 0..n {
            match self.driver.step() {
                Ok(Some(_)) => stepped += 1,
                Ok(None) => break,
                Err(e) => {
                    self.set_error(format!("Cannot step forward: {e}"));
                    return;
                }
            }
        }
        self.steps_scroll.follow = true;
        self.set_status(format!("Stepped forward {} step(s)", stepped));
    }

    fn jump_to_end(&mut self) {
        self.driver.pause();
        if !self.ensure_loaded() {
            return;
        }
        match self.driver.run_to_completion(&mut NullSink) {
            Ok(_) => {
                self.steps_scroll.follow = true;
                self.set_status("Jumped to end");
            }
            Err(e) => self.set_error(format!("Replay stopped: {e}")),
        }
    }

    fn save_current(&mut self) {
        if self.driver.step_log().is_empty() {
            self.set_error("No steps to save. Run the visualization first.");
            return;
        }
        let record = NewVisualization {
            algorithm: self.driver.algorithm(),
            array: self.driver.source_array().to_vec(),
            steps: self.driver.step_log().as_ref().clone(),
        };
        match self.store.create(record) {
            Ok(saved) => {
                self.refresh_saved();
                self.set_status(format!("Saved {}", saved.id));
            }
            Err(e) => self.set_error(format!("Failed to save: {e}")),
        }
    }

    fn refresh_saved(&mut self) {
        match self.store.list(DEFAULT_LIST_LIMIT) {
            Ok(entries) => {
                self.saved = entries;
                self.saved_selected = self.saved_selected.min(self.saved.len().saturating_sub(1));
            }
            Err(e) => self.set_error(format!("Failed to list saved visualizations: {e}")),
        }
    }

    fn open_selected(&mut self) {
        let Some(id) = self.saved.get(self.saved_selected).map(|s| s.id.clone()) else {
            self.set_error("No saved visualization selected");
            return;
        };
        let loaded = self.store.get(&id).map_err(|e| e.to_string()).and_then(|viz| {
            let algorithm = viz.algorithm;
            self.driver
                .load_record(algorithm, viz.array, Arc::new(viz.steps))
                .map(|()| algorithm)
                .map_err(|e| e.to_string())
        });
        match loaded {
            Ok(algorithm) => {
                self.selected = algorithm;
                self.steps_scroll = StepsScrollState::default();
                self.set_status("Visualization loaded!");
            }
            Err(e) => self.set_error(format!("Failed to load visualization: {e}")),
        }
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.saved.get(self.saved_selected).map(|s| s.id.clone()) else {
            return;
        };
        match self.store.delete(&id) {
            Ok(()) => {
                self.refresh_saved();
                self.set_status("Visualization deleted");
            }
            Err(e) => self.set_error(format!("Failed to delete: {e}")),
        }
    }
}
