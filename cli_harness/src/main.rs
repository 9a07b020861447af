//! CLI harness for testing pingpong_core with a single paddle.
//!
//! Plays the role of the host event layer: it launches the ball, calls
//! update once per frame, and decides when to ask for wall or paddle
//! reflections.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        poll, read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, Clear, ClearType,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use pingpong_core::{fx, *};
use std::io::{self, stdout, Result, Write};
use std::time::{Duration, Instant};

/// Screen pixels per terminal column
const CELL_W: i32 = 4;
/// Screen pixels per terminal row
const CELL_H: i32 = 8;
const FIELD_COLS: usize = (SCREEN_WIDTH / CELL_W) as usize;
const FIELD_ROWS: usize = (SCREEN_HEIGHT / CELL_H) as usize;

/// Y of the paddle's top edge in screen pixels
const PADDLE_TOP: i32 = 128;
/// Paddle movement per frame in pixels
const PADDLE_SPEED: i32 = 3;
/// Launch position and angle (straight down from mid-screen)
const SERVE: (i32, i32, Angle) = (80, 72, 270);
const START_LIVES: u8 = 3;

/// Keyboard capability detection
#[derive(Debug, Clone, Copy)]
enum KeyboardMode {
    Enhanced, // Supports KeyEventKind::Release
    Tap,      // Fallback: each press nudges the paddle
}

fn detect_keyboard_capabilities() -> KeyboardMode {
    match supports_keyboard_enhancement() {
        Ok(true) => KeyboardMode::Enhanced,
        Ok(false) | Err(_) => KeyboardMode::Tap,
    }
}

/// Paddle input state
#[derive(Default)]
struct PaddleInput {
    left_held: bool,
    right_held: bool,
    /// Pending moves from tap mode, in frames
    nudge: i32,
}

impl PaddleInput {
    fn handle_key_event(&mut self, event: KeyEvent, mode: KeyboardMode) {
        let direction = match event.code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => -1,
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => 1,
            _ => return,
        };

        match mode {
            KeyboardMode::Enhanced => {
                let held = event.kind != KeyEventKind::Release;
                if direction < 0 {
                    self.left_held = held;
                } else {
                    self.right_held = held;
                }
            }
            KeyboardMode::Tap => {
                if event.kind == KeyEventKind::Press {
                    // Reversing cancels any pending travel
                    if self.nudge.signum() == -direction {
                        self.nudge = 0;
                    }
                    self.nudge = (self.nudge + direction * 4).clamp(-12, 12);
                }
            }
        }
    }

    /// Direction to move this frame: -1, 0 or 1
    fn step(&mut self) -> i32 {
        if self.left_held != self.right_held {
            return if self.left_held { -1 } else { 1 };
        }

        let direction = self.nudge.signum();
        self.nudge -= direction;
        direction
    }
}

/// Breakout-style rally state around the engine
struct Rally {
    engine: Engine,
    paddle_x: i32,
    lives: u8,
    returns: u32,
    last_pos: (i32, i32),
}

impl Rally {
    fn new(config: Config) -> Self {
        Rally {
            engine: Engine::new(config),
            paddle_x: SCREEN_WIDTH / 2,
            lives: START_LIVES,
            returns: 0,
            last_pos: (SERVE.0, SERVE.1),
        }
    }

    fn serve(&mut self) {
        if self.engine.is_active() || self.lives == 0 {
            return;
        }
        self.engine.init(SERVE.0, SERVE.1, SERVE.2);
        self.last_pos = self.engine.position();
    }

    fn restart(&mut self) {
        self.engine.reset();
        self.paddle_x = SCREEN_WIDTH / 2;
        self.lives = START_LIVES;
        self.returns = 0;
        self.last_pos = (SERVE.0, SERVE.1);
    }

    fn move_paddle(&mut self, direction: i32) {
        let half = self.engine.config.paddle_width / 2;
        self.paddle_x =
            (self.paddle_x + direction * PADDLE_SPEED).clamp(half, SCREEN_WIDTH - 1 - half);
    }

    /// One frame of the event script: update, walls, paddle, miss
    fn tick(&mut self) -> std::result::Result<(), PhysicsError> {
        if !self.engine.is_active() {
            return Ok(());
        }

        let (x, y) = self.engine.update();
        let vel = self.engine.ball.vel;

        if (x <= 0 && vel.x < 0) || (x >= SCREEN_WIDTH - 1 && vel.x > 0) {
            self.engine.reflect_off_wall(Axis::Vertical);
        }
        if y <= 0 && vel.y < 0 {
            self.engine.reflect_off_wall(Axis::Horizontal);
        }

        if self.engine.ball.vel.y > 0
            && self.engine.reflect_off_paddle(self.paddle_x, PADDLE_TOP)?
        {
            self.returns += 1;
        }

        if y >= SCREEN_HEIGHT {
            self.engine.set_active(false);
            self.lives = self.lives.saturating_sub(1);
        }

        self.last_pos = (x, y);
        Ok(())
    }

    fn status_string(&self) -> &'static str {
        if self.engine.is_active() {
            "Playing"
        } else if self.lives == 0 {
            "Game over"
        } else {
            "Press SPACE to serve"
        }
    }
}

/// CLI application state
struct CliApp {
    rally: Rally,
    running: bool,
    last_tick: Instant,
    mode: KeyboardMode,
    input: PaddleInput,
    show_help: bool,
}

impl CliApp {
    fn new() -> Self {
        let mode = detect_keyboard_capabilities();

        eprintln!("Input mode: {mode:?}");

        Self {
            rally: Rally::new(Config::default()),
            running: true,
            last_tick: Instant::now(),
            mode,
            input: PaddleInput::default(),
            show_help: true,
        }
    }

    fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;

        let mut stdout = stdout();
        let enhanced = matches!(self.mode, KeyboardMode::Enhanced);

        if enhanced {
            queue!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                )
            )?;
        }

        execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All))?;

        let result = self.main_loop();

        if enhanced {
            queue!(stdout, PopKeyboardEnhancementFlags)?;
        }

        execute!(stdout, LeaveAlternateScreen, Show)?;
        disable_raw_mode()?;
        result
    }

    fn main_loop(&mut self) -> Result<()> {
        let frame_time = Duration::from_millis(1000 / 60);

        while self.running {
            self.handle_input()?;
            self.update()?;
            self.render()?;

            std::thread::sleep(frame_time.saturating_sub(self.last_tick.elapsed()));
        }

        Ok(())
    }

    fn handle_input(&mut self) -> Result<()> {
        while poll(Duration::from_millis(0))? {
            if let Event::Key(event) = read()? {
                if event.kind == KeyEventKind::Press {
                    match event.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') => self.running = false,
                        KeyCode::Char('h') | KeyCode::Char('H') => {
                            self.show_help = !self.show_help
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            self.rally.restart();
                            self.input = PaddleInput::default();
                        }
                        KeyCode::Char(' ') => self.rally.serve(),
                        KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                            self.running = false;
                        }
                        _ => {}
                    }
                }

                self.input.handle_key_event(event, self.mode);
            }
        }

        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let now = Instant::now();

        if now.duration_since(self.last_tick) >= Duration::from_millis(1000 / 60) {
            let direction = self.input.step();
            self.rally.move_paddle(direction);
            self.rally.tick().map_err(io::Error::other)?;
            self.last_tick = now;
        }

        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let mut out = stdout();
        let mut row = 0;

        queue!(out, Clear(ClearType::All))?;

        queue!(
            out,
            MoveTo(0, row),
            SetForegroundColor(Color::Cyan),
            Print("PINGPONG PHYSICS CLI HARNESS"),
            ResetColor
        )?;
        row += 1;

        queue!(
            out,
            MoveTo(0, row),
            Print(format!("Status: {}", self.rally.status_string()))
        )?;
        row += 1;

        queue!(
            out,
            MoveTo(0, row),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Lives: {}  Returns: {}",
                self.rally.lives, self.rally.returns
            )),
            ResetColor
        )?;
        row += 1;

        row = self.render_field(&mut out, row)?;

        if self.show_help {
            self.render_help(&mut out, row)?;
        }

        out.flush()?;
        Ok(())
    }

    fn render_field(&self, out: &mut impl Write, mut row: u16) -> Result<u16> {
        let (ball_x, ball_y) = self.rally.last_pos;
        let ball_cell = (self.rally.engine.is_active()
            && (0..SCREEN_WIDTH).contains(&ball_x)
            && (0..SCREEN_HEIGHT).contains(&ball_y))
        .then(|| ((ball_x / CELL_W) as usize, (ball_y / CELL_H) as usize));

        let half = self.rally.engine.config.paddle_width / 2;
        let paddle_left = ((self.rally.paddle_x - half) / CELL_W) as usize;
        let paddle_right = ((self.rally.paddle_x + half) / CELL_W) as usize;
        let paddle_row = (PADDLE_TOP / CELL_H) as usize;

        queue!(
            out,
            MoveTo(0, row),
            Print(format!("┌{}┐", "─".repeat(FIELD_COLS)))
        )?;
        row += 1;

        for y in 0..FIELD_ROWS {
            queue!(out, MoveTo(0, row), Print("│"))?;

            for x in 0..FIELD_COLS {
                let (glyph, color) = if ball_cell == Some((x, y)) {
                    ('●', Color::Red)
                } else if y == paddle_row && (paddle_left..=paddle_right).contains(&x) {
                    ('█', Color::Blue)
                } else {
                    (' ', Color::White)
                };

                queue!(out, SetForegroundColor(color), Print(glyph), ResetColor)?;
            }

            queue!(out, Print("│"))?;
            row += 1;
        }

        queue!(
            out,
            MoveTo(0, row),
            Print(format!("└{}┘", "─".repeat(FIELD_COLS)))
        )?;
        row += 1;

        Ok(row)
    }

    fn render_help(&self, out: &mut impl Write, mut row: u16) -> Result<()> {
        row += 1;

        let ball = self.rally.engine.ball;
        let lines = [
            "--- CONTROLS ---".to_string(),
            "A/D or ←/→: move paddle".to_string(),
            "SPACE: Serve  |  R: Reset  |  H: Toggle help  |  Q: Quit".to_string(),
            format!(
                "Input Mode: {:?} | Paddle x: {}",
                self.mode, self.rally.paddle_x
            ),
            format!(
                "Ball: ({}, {}) | Angle: {} | Vel: ({:+}, {:+}) /256 px",
                fx::to_int(ball.pos.x),
                fx::to_int(ball.pos.y),
                ball.angle,
                ball.vel.x,
                ball.vel.y
            ),
        ];

        for line in lines {
            queue!(
                out,
                MoveTo(0, row),
                SetForegroundColor(Color::DarkGrey),
                Print(line),
                ResetColor
            )?;
            row += 1;
        }

        Ok(())
    }
}

fn main() -> Result<()> {
    let mut app = CliApp::new();

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), Show);
        std::process::exit(0);
    })
    .expect("Error setting Ctrl-C handler");

    app.run()
}
