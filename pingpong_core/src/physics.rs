//! Deterministic ball physics: velocity resolution, integration and reflection.

use crate::error::PhysicsError;
use crate::trig;
use crate::types::{fx, *};

/// Physics calculations for the ball simulation
pub struct Physics;

impl Physics {
    /// Decompose a launch angle and integer speed into a fixed-point velocity.
    ///
    /// Screen Y grows downward while 90° means "up", so the Y component is negated.
    pub fn angle_to_velocity(angle: Angle, speed: i32) -> Vec2 {
        let speed = fx::to_fixed(speed);
        Vec2::new(
            fx::mul(speed, trig::cos(angle)),
            -fx::mul(speed, trig::sin(angle)),
        )
    }

    /// Place a ball at a pixel position and launch it at `angle`
    pub fn init_ball(x: i32, y: i32, angle: Angle, speed: i32) -> Ball {
        let angle = trig::normalize(angle);
        Ball::new(
            Vec2::new(fx::to_fixed(x), fx::to_fixed(y)),
            Self::angle_to_velocity(angle, speed),
            angle,
        )
    }

    /// Advance the ball one frame and return its truncated pixel position.
    ///
    /// No screen clamping happens here; the caller decides on wall bounces.
    /// Integration wraps on overflow like the 8-bit target's adds, in every
    /// build profile.
    pub fn update_ball(ball: &mut Ball) -> (i32, i32) {
        ball.pos.x = ball.pos.x.wrapping_add(ball.vel.x);
        ball.pos.y = ball.pos.y.wrapping_add(ball.vel.y);

        (fx::to_int(ball.pos.x), fx::to_int(ball.pos.y))
    }

    /// Outgoing angle for a paddle hit.
    ///
    /// The hit offset `(ball_x - centre) / half_width` is clamped to [-1, 1],
    /// scaled by `max_angle` and added to 90°. The result is clamped to
    /// [`MIN_REFLECT_ANGLE`, `MAX_REFLECT_ANGLE`] whatever `max_angle` is,
    /// then rounded half up. `half_width` is `paddle_width / 2` in whole
    /// pixels, the same edge [`Physics::paddle_contact`] uses, so a width
    /// below 2 has no half width and is a division by zero.
    pub fn reflection_angle(
        ball_x: i32,
        paddle_centre_x: i32,
        paddle_width: i32,
        max_angle: Angle,
    ) -> Result<Angle, PhysicsError> {
        if paddle_width < 0 {
            return Err(PhysicsError::InvalidPaddleWidth(paddle_width));
        }

        let half = (paddle_width / 2) as i64;
        if half == 0 {
            return Err(PhysicsError::DivisionByZero);
        }

        let offset = (ball_x as i64 - paddle_centre_x as i64).clamp(-half, half);

        let angle = (90 * half + offset * max_angle as i64).clamp(
            MIN_REFLECT_ANGLE as i64 * half,
            MAX_REFLECT_ANGLE as i64 * half,
        );

        // floor(angle / half + 1/2)
        Ok((2 * angle + half).div_euclid(2 * half) as Angle)
    }

    /// Redirect the ball off a paddle at `speed`, updating angle and velocity together
    pub fn reflect_off_paddle(
        ball: &mut Ball,
        ball_x: i32,
        paddle_centre_x: i32,
        config: &Config,
    ) -> Result<Angle, PhysicsError> {
        let angle = Self::reflection_angle(
            ball_x,
            paddle_centre_x,
            config.paddle_width,
            config.max_angle,
        )?;

        ball.angle = angle;
        ball.vel = Self::angle_to_velocity(angle, config.ball_speed);

        Ok(angle)
    }

    /// Flip one velocity component. The stored angle is left as it was.
    pub fn reflect_off_wall(ball: &mut Ball, axis: Axis) {
        match axis {
            Axis::Horizontal => ball.vel.y = -ball.vel.y,
            Axis::Vertical => ball.vel.x = -ball.vel.x,
        }
    }

    /// Whether a ball at pixel `(x, y)` touches the paddle's top edge
    pub fn paddle_contact(ball_px: (i32, i32), paddle: &Paddle, config: &Config) -> bool {
        let (x, y) = ball_px;

        if y < paddle.top_y - config.paddle_reach_above
            || y > paddle.top_y + config.paddle_reach_below
        {
            return false;
        }

        let half_width = config.paddle_width / 2;
        x >= paddle.centre_x - half_width && x <= paddle.centre_x + half_width
    }
}
