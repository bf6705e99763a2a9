//! Main TUI application state and logic

use crate::driver::{SortDriver, StatePublisher};
use crate::state::SortState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// How often pending key events are drained
const INPUT_TICK: Duration = Duration::from_millis(50);

/// Minimum gap between two accepted pause toggles
const PAUSE_DEBOUNCE: Duration = Duration::from_millis(200);

/// The main application state
pub struct App {
    /// Drives runs and owns the shared controls
    pub driver: SortDriver,

    /// Array restored by the reset key
    pub initial_values: Vec<u32>,

    /// Latest state received from the driver
    pub state: SortState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    publisher: StatePublisher,
    updates: watch::Receiver<SortState>,
    task: Option<JoinHandle<Vec<u32>>>,

    /// Last time space was accepted (for debouncing)
    last_space_press: Instant,
}

impl App {
    /// Create a new app showing `initial_values`, idle
    pub fn new(driver: SortDriver, initial_values: Vec<u32>) -> Self {
        let state = SortState::new(initial_values.clone());
        let (publisher, updates) = StatePublisher::channel(state.clone());
        App {
            driver,
            initial_values,
            state,
            should_quit: false,
            status_message: String::from("Ready!"),
            publisher,
            updates,
            task: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application until the user quits
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut tick = tokio::time::interval(INPUT_TICK);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            self.sync_state();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Redraw as soon as the driver publishes; otherwise check input
            let input_due = tokio::select! {
                _ = self.updates.changed() => false,
                _ = tick.tick() => true,
            };
            if input_due {
                self.poll_input()?;
            }
        }

        if let Some(task) = self.task.take() {
            task.abort();
        }
        Ok(())
    }

    /// Pull the latest published state and notice finished runs
    pub fn sync_state(&mut self) {
        self.state = self.updates.borrow_and_update().clone();

        if self.task.as_ref().is_some_and(|task| task.is_finished()) {
            self.task = None;
            self.status_message = format!(
                "Sorted: {} comparisons, {} swaps",
                self.state.comparisons, self.state.swaps
            );
        }
    }

    fn poll_input(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }
        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        // Left column: chart (top) | controls (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(columns[0]);

        let controls = self.driver.controls();

        super::panes::render_chart_pane(
            frame,
            left_rows[0],
            &self.state.array,
            self.state.highlighted,
        );

        super::panes::render_controls_pane(
            frame,
            left_rows[1],
            super::panes::ControlsRenderData {
                is_running: controls.is_running(),
                is_paused: controls.is_paused(),
                speed: controls.speed(),
            },
        );

        super::panes::render_parameters_pane(frame, columns[1], &self.state.memory);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            super::panes::StatusRenderData {
                message: &self.status_message,
                is_running: controls.is_running(),
                is_paused: controls.is_paused(),
                comparisons: self.state.comparisons,
                swaps: self.state.swaps,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Enter => {
                self.start_sort();
            }
            KeyCode::Char(' ') => {
                // Toggle pause (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= PAUSE_DEBOUNCE {
                    self.last_space_press = Instant::now();
                    self.toggle_pause();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                let speed = self.driver.controls().speed().increase();
                self.status_message = format!("Speed {}", speed);
            }
            KeyCode::Char('-') | KeyCode::Left => {
                let speed = self.driver.controls().speed().decrease();
                self.status_message = format!("Speed {}", speed);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.reset();
            }
            _ => {}
        }
    }

    /// Start a run over the currently displayed array
    fn start_sort(&mut self) {
        let array = self.state.array.clone();
        match self.driver.start(array, self.publisher.clone()) {
            Some(task) => {
                info!(values = ?self.state.array, "sort requested");
                self.task = Some(task);
                self.status_message = "Sorting...".to_string();
            }
            None => {
                debug!("start pressed while a sort is running");
            }
        }
    }

    fn toggle_pause(&mut self) {
        match self.driver.controls().toggle_pause() {
            Some(true) => self.status_message = "Paused".to_string(),
            Some(false) => self.status_message = "Sorting...".to_string(),
            None => {}
        }
    }

    /// Put the initial values back on screen
    fn reset(&mut self) {
        if self.driver.controls().is_running() {
            warn!("reset ignored while a sort is running");
            return;
        }
        self.publisher
            .replace(SortState::new(self.initial_values.clone()));
        self.status_message = "Reset".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_then_second_start_ignored() {
        let mut app = App::new(SortDriver::default(), vec![3, 2, 1]);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.driver.controls().is_running());
        assert_eq!(app.status_message, "Sorting...");

        app.status_message = "busy".to_string();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.status_message, "busy");
        assert!(app.task.is_some());

        tokio::time::sleep(Duration::from_secs(60)).await;
        app.sync_state();
        assert!(!app.driver.controls().is_running());
        assert_eq!(app.state.array, vec![1, 2, 3]);
        assert!(app.state.memory.is_empty());
        assert!(app.task.is_none());
        assert_eq!(app.status_message, "Sorted: 3 comparisons, 3 swaps");
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_disabled_while_idle() {
        let mut app = App::new(SortDriver::default(), vec![2, 1]);
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.driver.controls().is_paused());
        assert_eq!(app.status_message, "Ready!");
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_initial_values() {
        let mut app = App::new(SortDriver::default(), vec![2, 1]);
        press(&mut app, KeyCode::Char('s'));
        tokio::time::sleep(Duration::from_secs(10)).await;
        app.sync_state();
        assert_eq!(app.state.array, vec![1, 2]);

        press(&mut app, KeyCode::Char('r'));
        app.sync_state();
        assert_eq!(app.state.array, vec![2, 1]);
    }

    #[test]
    fn test_speed_keys() {
        let mut app = App::new(SortDriver::default(), vec![1]);
        press(&mut app, KeyCode::Char('+'));
        assert_eq!(app.driver.controls().speed().value(), 600);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.driver.controls().speed().value(), 400);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(SortDriver::default(), vec![1]);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
