//! TUI (Terminal User Interface) for the Wordle game
//!
//! Renders the tile grid and an on-screen keyboard with Ratatui and turns
//! key presses into board input events.
//!
//! # Architecture
//! - `TuiInterface`: terminal setup, rendering and input, implements
//!   `GameInterface` so `game_loop` can drive it
//! - Pure helpers (`tile_row`, `key_action`) hold the logic that does not
//!   need a terminal
//!
//! Revealing a row is staggered per tile. The board has already been
//! updated when the animation starts, so input is never blocked by it.

use crate::evaluator::LetterResult;
use crate::game_state::{Board, GameInterface, InputEvent, Outcome, Update, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io;
use std::time::{Duration, Instant};

const EVENT_POLL_TIMEOUT_MS: u64 = 50;
const REVEAL_STEP_MS: u64 = 100;
const ADVISORY_DURATION_MS: u64 = 1500;
const ROW_SPACING: u16 = 2;
const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TileState {
    Empty,
    Entered,
    Scored(LetterResult),
}

impl TileState {
    fn colors(self) -> (Color, Color) {
        match self {
            Self::Empty | Self::Entered => (Color::DarkGray, Color::White),
            Self::Scored(LetterResult::Correct) => (Color::Green, Color::Black),
            Self::Scored(LetterResult::Present) => (Color::Yellow, Color::Black),
            Self::Scored(LetterResult::Absent) => (Color::Gray, Color::White),
        }
    }

    fn key_colors(result: Option<LetterResult>) -> (Color, Color) {
        match result {
            Some(r) => Self::Scored(r).colors(),
            None => (Color::Rgb(129, 131, 132), Color::White),
        }
    }
}

/// Staggered reveal of one row.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    row: usize,
    started: Instant,
}

impl Reveal {
    #[must_use]
    pub fn new(row: usize, started: Instant) -> Self {
        Self { row, started }
    }

    /// Tiles of the row shown in colour at `now`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn revealed(&self, now: Instant, width: usize) -> usize {
        let elapsed = now.saturating_duration_since(self.started).as_millis() as u64;
        ((elapsed / REVEAL_STEP_MS) as usize + 1).min(width)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant, width: usize) -> bool {
        now.saturating_duration_since(self.started)
            >= Duration::from_millis(REVEAL_STEP_MS * width as u64)
    }
}

/// Letters and tile states for one board row as seen at `now`.
#[must_use]
pub fn tile_row(
    board: &Board,
    row: usize,
    reveal: Option<&Reveal>,
    now: Instant,
) -> Vec<(char, TileState)> {
    let width = board.width();
    if let Some(scored) = board.rows().get(row) {
        let shown = match reveal {
            Some(r) if r.row == row => r.revealed(now, width),
            _ => width,
        };
        return scored
            .guess
            .chars()
            .zip(&scored.results)
            .enumerate()
            .map(|(i, (c, &result))| {
                let state = if i < shown {
                    TileState::Scored(result)
                } else {
                    TileState::Entered
                };
                (c, state)
            })
            .collect();
    }

    let typed = if row == board.current_row() && !board.is_over() {
        board.current_guess()
    } else {
        ""
    };
    let mut tiles: Vec<(char, TileState)> =
        typed.chars().map(|c| (c, TileState::Entered)).collect();
    tiles.resize(width, (' ', TileState::Empty));
    tiles
}

/// Result of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    Action(UserAction),
    Reject(String),
    Ignore,
}

/// Map a key press to an action. Keys with Alt or Control are ignored.
#[must_use]
pub fn key_action(key: &KeyEvent, game_over: bool) -> KeyResponse {
    if key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    {
        return KeyResponse::Ignore;
    }
    if game_over {
        return match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => {
                KeyResponse::Action(UserAction::Input(InputEvent::Reset))
            }
            KeyCode::Esc => KeyResponse::Action(UserAction::Exit),
            _ => KeyResponse::Ignore,
        };
    }
    match key.code {
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            KeyResponse::Action(UserAction::Input(InputEvent::Letter(c)))
        }
        KeyCode::Char(c) if c == '\u{FFFD}' || c.is_control() => KeyResponse::Ignore,
        KeyCode::Char(c) => KeyResponse::Reject(format!("Only letters are allowed! ('{c}')")),
        KeyCode::Backspace => KeyResponse::Action(UserAction::Input(InputEvent::Delete)),
        KeyCode::Enter => KeyResponse::Action(UserAction::Input(InputEvent::Submit)),
        KeyCode::Esc => KeyResponse::Action(UserAction::Exit),
        _ => KeyResponse::Ignore,
    }
}

struct RenderContext<'a> {
    board: &'a Board,
    reveal: Option<&'a Reveal>,
    advisory: Option<&'a str>,
    now: Instant,
}

impl RenderContext<'_> {
    fn reveal_finished(&self) -> bool {
        self.reveal
            .is_none_or(|r| r.is_finished(self.now, self.board.width()))
    }
}

/// Main TUI interface component.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    reveal: Option<Reveal>,
    advisory: Option<(String, Instant)>,
}

impl TuiInterface {
    /// # Errors
    /// Returns an error if the terminal cannot be switched to raw mode.
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            reveal: None,
            advisory: None,
        })
    }

    /// # Errors
    /// Returns an error if the terminal cannot be restored.
    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self, board: &Board) -> Result<(), io::Error> {
        let now = Instant::now();
        let expiry = Duration::from_millis(ADVISORY_DURATION_MS);
        if self
            .advisory
            .as_ref()
            .is_some_and(|(_, at)| now.duration_since(*at) >= expiry)
        {
            self.advisory = None;
        }

        let ctx = RenderContext {
            board,
            reveal: self.reveal.as_ref(),
            advisory: self.advisory.as_ref().map(|(m, _)| m.as_str()),
            now,
        };
        self.terminal.draw(|f| Self::render_static(f, &ctx))?;
        Ok(())
    }

    fn draw_or_log(&mut self, board: &Board) {
        if let Err(e) = self.draw(board) {
            debug_log!("Draw error: {}", e);
        }
    }

    fn set_advisory(&mut self, message: String) {
        debug_log!("advisory: {}", message);
        self.advisory = Some((message, Instant::now()));
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let board_height = u16::try_from(ctx.board.max_attempts())
            .unwrap_or(u16::MAX)
            .saturating_mul(ROW_SPACING)
            .saturating_add(2);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Title
                Constraint::Length(board_height), // Tile grid
                Constraint::Length(8),            // Keyboard
                Constraint::Length(3),            // Message
                Constraint::Length(3),            // Instructions
                Constraint::Min(0),
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_board(f, chunks[1], ctx);
        Self::render_keyboard(f, chunks[2], ctx.board);
        Self::render_message(f, chunks[3], ctx);
        Self::render_instructions(f, chunks[4], ctx.board.is_over());

        if ctx.board.is_over() && ctx.reveal_finished() {
            let area = f.area();
            Self::render_end_panel(f, area, ctx.board);
        }
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("WORDLE")
            .alignment(Alignment::Center)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn tile_spans(tiles: &[(char, TileState)]) -> Vec<Span<'static>> {
        let mut spans = Vec::with_capacity(tiles.len() * 2);
        for &(letter, state) in tiles {
            let (bg, fg) = state.colors();
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        spans
    }

    fn render_board(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default().title("Board").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        // Rows that do not fit are not drawn
        for row in 0..ctx.board.max_attempts() {
            let offset = u16::try_from(row)
                .unwrap_or(u16::MAX)
                .saturating_mul(ROW_SPACING);
            if offset >= inner.height {
                return;
            }
            let y = inner.y + offset;
            let tiles = tile_row(ctx.board, row, ctx.reveal, ctx.now);
            let line = Line::from(Self::tile_spans(&tiles));
            f.render_widget(
                Paragraph::new(line).alignment(Alignment::Center),
                Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                },
            );
        }
    }

    fn render_keyboard(f: &mut Frame, area: Rect, board: &Board) {
        let key_span = |label: String, result: Option<LetterResult>| {
            let (bg, fg) = TileState::key_colors(result);
            Span::styled(label, Style::default().fg(fg).bg(bg))
        };

        let mut lines = Vec::new();
        for (i, keys) in KEYBOARD_ROWS.iter().enumerate() {
            let mut spans = Vec::new();
            if i == KEYBOARD_ROWS.len() - 1 {
                spans.push(key_span(" ENTER ".to_string(), None));
                spans.push(Span::raw(" "));
            }
            for letter in keys.chars() {
                spans.push(key_span(format!(" {letter} "), board.keyboard().get(letter)));
                spans.push(Span::raw(" "));
            }
            if i == KEYBOARD_ROWS.len() - 1 {
                spans.push(key_span(" DEL ".to_string(), None));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title("Keyboard").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_message(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let line = match ctx.advisory {
            Some(message) => Line::from(Span::styled(message.to_string(), ERROR_STYLE)),
            None => Line::from(Span::styled(
                format!("{} attempts left", ctx.board.attempts_left()),
                INFO_STYLE,
            )),
        };
        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, game_over: bool) {
        let text = if game_over {
            "N / ENTER: New Game | ESC: Quit"
        } else {
            "Type letters | ENTER: Submit | BACKSPACE: Delete | ESC: Quit"
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_end_panel(f: &mut Frame, area: Rect, board: &Board) {
        let Some(outcome) = board.outcome() else {
            return;
        };
        let summary = match outcome.result {
            Outcome::Won => format!("Solved in {}/{}", outcome.attempts, board.max_attempts()),
            Outcome::Lost => "Out of attempts".to_string(),
        };
        let lines = vec![
            Line::from(Span::styled("Thanks for playing!", HEADER_STYLE)),
            Line::from(""),
            Line::from(Span::styled(outcome.solution, SUCCESS_STYLE)),
            Line::from(summary),
            Line::from(""),
            Line::from("N / ENTER: Play again | ESC: Quit"),
        ];

        let popup = centered_rect(area, 40, 8);
        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            popup,
        );
    }

    fn handle_input(&mut self, board: &Board) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };
        // Only Press, so Release and Repeat do not double up input
        if key.kind != KeyEventKind::Press {
            return Ok(None);
        }

        debug_log!(
            "handle_input() - Key event: code={:?}, modifiers={:?}",
            key.code,
            key.modifiers
        );
        match key_action(&key, board.is_over()) {
            KeyResponse::Action(action) => Ok(Some(action)),
            KeyResponse::Reject(message) => {
                self.set_advisory(message);
                Ok(None)
            }
            KeyResponse::Ignore => Ok(None),
        }
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl GameInterface for TuiInterface {
    fn display_board(&mut self, board: &Board) {
        self.draw_or_log(board);
    }

    fn read_action(&mut self, board: &Board) -> Option<UserAction> {
        loop {
            // Redraw every poll so reveals and advisories advance
            if self.draw(board).is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.handle_input(board) {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error {}, returning Exit", e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_update(&mut self, board: &Board, update: &Update) {
        match update {
            Update::RowRevealed(reveal) => {
                self.reveal = Some(Reveal::new(reveal.row, Instant::now()));
                self.advisory = None;
            }
            Update::Advisory(err) => self.set_advisory(err.to_string()),
            Update::Reset => {
                self.reveal = None;
                self.advisory = None;
            }
            Update::LetterAdded { .. } | Update::LetterRemoved { .. } | Update::Ignored => {}
        }
        self.draw_or_log(board);
    }

    fn display_exit_message(&mut self) {
        info_log!("TuiInterface - exiting");
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
