//! Ball register set driven by the host's event layer.

use log::{debug, trace};

use crate::error::PhysicsError;
use crate::physics::Physics;
use crate::types::{fx, *};

/// Ball state plus the settings it is simulated with
#[derive(Debug, Clone)]
pub struct Engine {
    pub config: Config,
    pub ball: Ball,
    pub active: bool,
}

impl Engine {
    /// Create an idle engine with the given configuration
    pub fn new(config: Config) -> Self {
        Engine {
            config,
            ball: Ball::default(),
            active: false,
        }
    }

    /// Place the ball at a pixel position and launch it at `angle` degrees
    /// (0 = right, 90 = up, 180 = left, 270 = down)
    pub fn init(&mut self, x: i32, y: i32, angle: Angle) {
        self.ball = Physics::init_ball(x, y, angle, self.config.ball_speed);
        self.active = true;

        debug!(
            "ball init at ({x}, {y}) angle {} vel ({}, {})",
            self.ball.angle, self.ball.vel.x, self.ball.vel.y
        );
    }

    /// Advance one frame and return the pixel position to draw the ball at.
    ///
    /// An inactive ball stays where it is.
    pub fn update(&mut self) -> (i32, i32) {
        if !self.active {
            return self.position();
        }

        Physics::update_ball(&mut self.ball)
    }

    /// Paddle collision check and reflection.
    ///
    /// Returns `Ok(false)` on a miss, leaving the ball untouched; the caller
    /// runs its own miss handling.
    pub fn reflect_off_paddle(
        &mut self,
        paddle_centre_x: i32,
        paddle_top_y: i32,
    ) -> Result<bool, PhysicsError> {
        let ball_px = (
            fx::to_int_rounded(self.ball.pos.x),
            fx::to_int_rounded(self.ball.pos.y),
        );
        let paddle = Paddle::new(paddle_centre_x, paddle_top_y);

        if !Physics::paddle_contact(ball_px, &paddle, &self.config) {
            return Ok(false);
        }

        let angle =
            Physics::reflect_off_paddle(&mut self.ball, ball_px.0, paddle_centre_x, &self.config)?;

        debug!(
            "paddle hit at x={} (paddle centre {paddle_centre_x}) -> angle {angle}",
            ball_px.0
        );
        Ok(true)
    }

    /// Bounce off a flat wall. Only flips velocity; `angle` keeps its old value.
    pub fn reflect_off_wall(&mut self, axis: Axis) {
        Physics::reflect_off_wall(&mut self.ball, axis);
        trace!("wall reflect {axis:?} -> vel ({}, {})", self.ball.vel.x, self.ball.vel.y);
    }

    /// Pause or resume the ball
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Whether the ball is in play
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clear all ball state, as on entering a new scene
    pub fn reset(&mut self) {
        self.ball = Ball::default();
        self.active = false;
        debug!("ball state reset");
    }

    /// Current truncated pixel position
    pub fn position(&self) -> (i32, i32) {
        (fx::to_int(self.ball.pos.x), fx::to_int(self.ball.pos.y))
    }

    /// Current stored angle
    pub fn angle(&self) -> Angle {
        self.ball.angle
    }

    /// Create a snapshot of the ball registers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball: self.ball,
            active: self.active,
        }
    }

    /// Restore ball registers from a snapshot
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.ball = snapshot.ball;
        self.active = snapshot.active;
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(Config::default())
    }
}
