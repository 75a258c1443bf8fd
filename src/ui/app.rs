use crate::config::AppConfig;
use crate::game::{GameEvent, COLS};
use crate::session::Session;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use super::game_view::{self, ViewModel, CELL_WIDTH};

/// Upper bound on catch-up ticks after a stall (e.g. a suspended terminal).
const MAX_TICKS_PER_FRAME: u32 = 64;

pub struct App {
    session: Session,
    events: mpsc::Receiver<GameEvent>,
    status: String,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    board_x: u16,
    tick_interval: Duration,
    last_tick: Instant,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let mut session = Session::new(config);
        let (tx, rx) = mpsc::channel::<GameEvent>();
        session.subscribe(Box::new(tx));
        let status = format!("{}'s turn", session.engine().current_turn().name());

        App {
            session,
            events: rx,
            status,
            selected_column: COLS / 2, // Start in middle
            should_quit: false,
            message: None,
            board_x: 0,
            tick_interval: Duration::from_millis(config.animation.tick_interval_ms),
            last_tick: Instant::now(),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            let mut board_x = self.board_x;
            terminal
                .draw(|f| board_x = self.render(f))
                .map_err(|e| -> io::Error { e.into() })?;
            self.board_x = board_x;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.advance_animation();
            self.drain_game_events();
        }
        Ok(())
    }

    /// Run as many animation ticks as the elapsed time calls for, so the
    /// fall speed does not depend on how fast frames are drawn.
    fn advance_animation(&mut self) {
        let mut ticks = 0;
        while self.last_tick.elapsed() >= self.tick_interval {
            if ticks == MAX_TICKS_PER_FRAME {
                self.last_tick = Instant::now();
                break;
            }
            self.session.tick();
            self.last_tick += self.tick_interval;
            ticks += 1;
        }
    }

    fn drain_game_events(&mut self) {
        for event in self.events.try_iter() {
            self.status = event.status_text();
        }
    }

    /// Handle terminal events, waiting at most until the next tick is due.
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = self.tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                let column = c as usize - '1' as usize;
                self.selected_column = column;
                self.drop_piece(column);
            }
            KeyCode::Char('n') | KeyCode::Char('r') => {
                self.session.start_new_game();
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        self.message = None;
        let cell_size = self.session.animation().config().cell_size;
        let x = board_pixel_x(mouse.column, self.board_x, cell_size);
        if let Some(column) = self.session.animation().config().column_at(x) {
            self.selected_column = column;
            self.drop_piece(column);
        }
    }

    /// Drop piece in the given column
    fn drop_piece(&mut self, column: usize) {
        if let Err(err) = self.session.try_move(column) {
            self.message = Some(format!("{err}"));
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) -> u16 {
        game_view::render(
            frame,
            &ViewModel {
                engine: self.session.engine(),
                animation: self.session.animation(),
                selected_column: self.selected_column,
                status: &self.status,
                message: self.message.as_deref(),
            },
        )
    }
}

/// Convert a terminal column into a horizontal board pixel, given the
/// screen x where the first board cell starts. Clicks left of the board map
/// to negative values.
pub fn board_pixel_x(screen_x: u16, board_x: u16, cell_size: i32) -> i32 {
    let offset = i32::from(screen_x) - i32::from(board_x);
    offset
        .saturating_mul(cell_size)
        .div_euclid(i32::from(CELL_WIDTH))
}
