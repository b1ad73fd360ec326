//! TUI application state and logic

use super::rendering::{tile_at, ui};
use crate::config::GameConfig;
use crate::core::Direction;
use crate::engine::{Game, Intent, LossReason, Phase, Verdict};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use std::time::{Duration, Instant};

/// How long to wait for input before advancing the clock
const TICK: Duration = Duration::from_millis(50);

/// Messages kept in the side panel
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App {
    pub game: Game,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Area of the last drawn frame, for mapping mouse clicks onto tiles
    pub frame_area: Rect,
    recorded_generation: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
    Hint,
}

/// Results across every round played this session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub gave_up: usize,
    /// Wins by mistakes made (index 0 = flawless)
    pub mistake_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, phase: Phase, mistakes: u32) {
        self.rounds_played += 1;
        match phase {
            Phase::Won => {
                self.rounds_won += 1;
                let slot = mistakes as usize;
                if self.mistake_distribution.len() <= slot {
                    self.mistake_distribution.resize(slot + 1, 0);
                }
                self.mistake_distribution[slot] += 1;
            }
            Phase::Lost(LossReason::GaveUp) => self.gave_up += 1,
            Phase::Lost(LossReason::OutOfMistakes) | Phase::Playing => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played > 0 {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut app = Self {
            game: Game::new(config),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            frame_area: Rect::default(),
            recorded_generation: None,
        };
        app.add_message(
            "Find four groups of four words that share something.",
            MessageStyle::Info,
        );
        app.add_message(
            "Arrows move, Space picks, 's' submits. Click tiles too.",
            MessageStyle::Info,
        );
        app
    }

    /// Map a key press to an intent and apply it
    pub fn handle_key(&mut self, key: KeyEvent) {
        let intent = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Up | KeyCode::Char('k') => Intent::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('j') => Intent::Move(Direction::Down),
            KeyCode::Left | KeyCode::Char('h') => Intent::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('l') => Intent::Move(Direction::Right),
            KeyCode::Char(' ') | KeyCode::Enter => Intent::Confirm,
            KeyCode::Char('s') => Intent::Submit,
            KeyCode::Char('r') => Intent::Shuffle,
            KeyCode::Char('g') => Intent::GiveUp,
            KeyCode::Char('m') => Intent::SetMode(self.game.mode().toggled()),
            KeyCode::Char('n') => Intent::Replay,
            _ => return,
        };
        self.apply(intent);
    }

    /// A left click on a tile toggles it
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if let Some(index) = tile_at(self.frame_area, mouse.column, mouse.row) {
            self.apply(Intent::Select(index));
        }
    }

    /// Apply an intent and report what happened in the message panel
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Submit => self.submit(),
            Intent::SetMode(mode) => {
                self.game.set_mode(mode);
                self.add_message(&format!("Switched to {mode} mode."), MessageStyle::Info);
            }
            Intent::Replay => {
                self.game.replay();
                self.add_message("New round. Good luck!", MessageStyle::Info);
            }
            Intent::GiveUp => {
                if self.game.give_up() {
                    self.add_message("Gave up. Here are the groups.", MessageStyle::Error);
                }
            }
            Intent::Shuffle => {
                self.game.shuffle();
            }
            other => {
                self.game.dispatch(other);
            }
        }
        self.record_if_over();
    }

    fn submit(&mut self) {
        match self.game.submit() {
            None => {
                if self.game.round().phase().is_playing() && self.game.round().selection().len() < 4
                {
                    self.add_message("Pick four tiles first.", MessageStyle::Info);
                }
            }
            Some(Verdict::Correct(group)) => {
                let name = self.game.group(group).name().to_uppercase();
                self.add_message(&format!("{name}!"), MessageStyle::Success);
            }
            Some(Verdict::Incorrect { near_miss }) => {
                let left = self.game.round().mistakes_left();
                if self.game.round().phase().is_lost() {
                    self.add_message("Out of mistakes.", MessageStyle::Error);
                } else {
                    self.add_message(
                        &format!("Not a group. {left} mistakes left."),
                        MessageStyle::Error,
                    );
                }
                if near_miss {
                    self.add_message("One away...", MessageStyle::Hint);
                }
            }
        }
    }

    /// Advance the game clock by real elapsed time
    pub fn tick(&mut self, elapsed: Duration) {
        if self.game.advance(elapsed) > 0 {
            self.record_if_over();
        }
    }

    /// Count a finished round exactly once
    fn record_if_over(&mut self) {
        let round = self.game.round();
        let generation = self.game.generation();
        if !round.phase().is_over() || self.recorded_generation == Some(generation) {
            return;
        }
        let (phase, mistakes) = (round.phase(), round.mistakes());
        self.recorded_generation = Some(generation);
        self.stats.record(phase, mistakes);
        if phase.is_won() {
            let text = match mistakes {
                0 => "Perfect! All four groups, no mistakes.",
                1 => "Great! Solved with one slip.",
                _ => "Solved! All four groups found.",
            };
            self.add_message(text, MessageStyle::Success);
        }
        self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        let frame = terminal.draw(|f| ui(f, &app))?;
        app.frame_area = frame.area;

        if event::poll(TICK)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        let now = Instant::now();
        app.tick(now - last_tick);
        last_tick = now;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::board_grid;
    use crossterm::event::KeyEventState;

    fn app() -> App {
        App::new(GameConfig::default().with_seed(3))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn group_tiles(app: &App, group: usize) -> Vec<usize> {
        app.game
            .round()
            .tiles()
            .iter()
            .enumerate()
            .filter(|(_, t)| t.group().index() == group)
            .map(|(i, _)| i)
            .collect()
    }

    fn solve_group(app: &mut App, group: usize) {
        for i in group_tiles(app, group) {
            app.apply(Intent::Select(i));
        }
        app.apply(Intent::Submit);
        app.tick(Duration::from_millis(700));
    }

    #[test]
    fn quit_keys() {
        let mut a = app();
        press(&mut a, KeyCode::Char('q'));
        assert!(a.should_quit);

        let mut b = app();
        b.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(b.should_quit);
    }

    #[test]
    fn arrows_and_space_pick_tiles() {
        let mut a = app();
        assert_eq!(a.game.round().focus(), 0);
        press(&mut a, KeyCode::Right);
        press(&mut a, KeyCode::Down);
        assert_eq!(a.game.round().focus(), 5);
        press(&mut a, KeyCode::Char(' '));
        assert_eq!(a.game.round().selection(), &[5]);
        press(&mut a, KeyCode::Enter);
        assert!(a.game.round().selection().is_empty());
    }

    #[test]
    fn wrong_guess_reports_mistake() {
        let mut a = app();
        let picks: Vec<usize> = (0..4).map(|g| group_tiles(&a, g)[0]).collect();
        for i in picks {
            a.apply(Intent::Select(i));
        }
        press(&mut a, KeyCode::Char('s'));
        assert_eq!(a.game.round().mistakes(), 1);
        let last = a.messages.last().map(|m| m.style);
        assert_eq!(last, Some(MessageStyle::Error));
    }

    #[test]
    fn win_is_recorded_once() {
        let mut a = app();
        for group in 0..4 {
            solve_group(&mut a, group);
        }
        assert!(a.game.round().phase().is_won());
        assert_eq!(a.stats.rounds_played, 1);
        assert_eq!(a.stats.rounds_won, 1);
        assert_eq!(a.stats.mistake_distribution, vec![1]);

        a.tick(Duration::from_secs(5));
        press(&mut a, KeyCode::Char('s'));
        assert_eq!(a.stats.rounds_played, 1);
    }

    #[test]
    fn give_up_then_replay_counts_both_rounds() {
        let mut a = app();
        press(&mut a, KeyCode::Char('g'));
        assert_eq!(a.stats.gave_up, 1);
        press(&mut a, KeyCode::Char('n'));
        assert!(a.game.round().phase().is_playing());
        press(&mut a, KeyCode::Char('g'));
        assert_eq!(a.stats.rounds_played, 2);
        assert!(a.stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn mode_key_toggles_mode() {
        let mut a = app();
        let before = a.game.mode();
        press(&mut a, KeyCode::Char('m'));
        assert_eq!(a.game.mode(), before.toggled());
    }

    #[test]
    fn click_selects_tile_under_cursor() {
        let mut a = app();
        a.frame_area = Rect::new(0, 0, 100, 40);
        let grid = board_grid(a.frame_area);
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: grid.x + 1,
            row: grid.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        a.handle_mouse(mouse);
        assert_eq!(a.game.round().selection(), &[0]);

        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..mouse
        };
        a.handle_mouse(release);
        assert_eq!(a.game.round().selection(), &[0]);
    }

    #[test]
    fn ignores_unbound_keys() {
        let mut a = app();
        let key = KeyEvent {
            code: KeyCode::F(5),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        a.handle_key(key);
        assert!(!a.should_quit);
        assert!(a.game.round().selection().is_empty());
    }
}
