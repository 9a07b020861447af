use pingpong_core::{fx, trig, Axis, Config, Engine, Physics, PhysicsError, FX_ONE};

const SEED: u64 = 0x9A6E_B0B1;
const SAMPLES: usize = 10_000;

fn sample_angles() -> Vec<i32> {
    let mut rng = fastrand::Rng::with_seed(SEED);
    (0..SAMPLES)
        .map(|_| rng.i32(-1_000_000_000..1_000_000_000))
        .collect()
}

#[test]
fn sin_is_periodic() {
    for d in sample_angles() {
        assert_eq!(trig::sin(d), trig::sin(d + 360), "d = {d}");
        assert_eq!(trig::sin(d), trig::sin(d - 360), "d = {d}");
    }
}

#[test]
fn sin_is_antisymmetric_over_half_turn() {
    for d in -720..720 {
        assert_eq!(trig::sin(d), -trig::sin(d + 180), "d = {d}");
    }
    for d in sample_angles() {
        assert_eq!(trig::sin(d), -trig::sin(d + 180), "d = {d}");
    }
}

#[test]
fn cos_is_shifted_sin() {
    for d in sample_angles() {
        assert_eq!(trig::cos(d), trig::sin((d + 90).rem_euclid(360)), "d = {d}");
    }
}

#[test]
fn sin_stays_in_unit_range() {
    for d in 0..360 {
        assert!((-FX_ONE..=FX_ONE).contains(&trig::sin(d)), "d = {d}");
    }
}

#[test]
fn fixed_round_trip() {
    for n in -8_000_000..8_000_000 {
        if n % 997 == 0 {
            assert_eq!(fx::to_int(fx::to_fixed(n)), n);
        }
    }
    for n in [i32::MIN >> 8, -1, 0, 1, i32::MAX >> 8] {
        assert_eq!(fx::to_int(fx::to_fixed(n)), n);
    }
}

#[test]
fn reflection_never_leaves_clamp_range() {
    let mut rng = fastrand::Rng::with_seed(SEED);
    for _ in 0..SAMPLES {
        let paddle_x = rng.i32(0..160);
        let ball_x = rng.i32(-200..400);
        let width = rng.i32(2..64);
        let max_angle = rng.i32(60..360);

        let angle = Physics::reflection_angle(ball_x, paddle_x, width, max_angle).unwrap();
        assert!(
            (30..=150).contains(&angle),
            "ball {ball_x} paddle {paddle_x} width {width} max {max_angle} -> {angle}"
        );
    }
}

#[test]
fn centre_hit_is_straight_up_for_any_width() {
    for width in 2..200 {
        for max_angle in [0, 15, 60, 90, 400] {
            assert_eq!(
                Physics::reflection_angle(80, 80, width, max_angle),
                Ok(90)
            );
        }
    }
}

#[test]
fn edge_hits_reach_the_clamp_for_any_width() {
    for width in 2..80 {
        let half = width / 2;
        assert_eq!(
            Physics::reflection_angle(80 - half, 80, width, 60),
            Ok(30),
            "width {width}"
        );
        assert_eq!(
            Physics::reflection_angle(80 + half, 80, width, 60),
            Ok(150),
            "width {width}"
        );
    }
}

#[test]
fn odd_width_edge_contact_gives_full_deflection() {
    let mut engine = Engine::new(Config {
        paddle_width: 25,
        ..Config::default()
    });
    engine.init(68, 130, 270);

    assert_eq!(engine.reflect_off_paddle(80, 130), Ok(true));
    assert_eq!(engine.angle(), 30);

    engine.init(92, 130, 270);

    assert_eq!(engine.reflect_off_paddle(80, 130), Ok(true));
    assert_eq!(engine.angle(), 150);
}

#[test]
fn sub_two_pixel_paddle_is_rejected() {
    assert_eq!(
        Physics::reflection_angle(80, 80, 1, 60),
        Err(PhysicsError::DivisionByZero)
    );
}

#[test]
fn velocity_at_cardinals() {
    for speed in 1..=8 {
        let up = Physics::angle_to_velocity(90, speed);
        assert_eq!(fx::to_int(up.x), 0);
        assert!(up.y < 0);

        let right = Physics::angle_to_velocity(0, speed);
        assert_eq!(fx::to_int(right.y), 0);
        assert!(right.x > 0);
    }
}

#[test]
fn high_speed_diagonal_stays_within_speed() {
    let speed = 8;
    let vel = Physics::angle_to_velocity(45, speed);
    assert!(fx::to_int(vel.x).abs() <= speed);
    assert!(fx::to_int(vel.y).abs() <= speed);
}

#[test]
fn launch_down_moves_down() {
    let mut engine = Engine::default();
    engine.init(80, 72, 270);

    let (x, y) = engine.update();

    assert_eq!(x, 80);
    assert!(y > 72);
    assert!((y - 72 - engine.config.ball_speed).abs() <= 1);
}

#[test]
fn rally_stays_on_screen() {
    // A ball bouncing in a box with a paddle that follows it never escapes
    let mut engine = Engine::default();
    engine.init(80, 72, 250);
    let paddle_top = 130;

    for _ in 0..2_000 {
        let (x, y) = engine.update();

        let vel = engine.ball.vel;
        if (x <= 0 && vel.x < 0) || (x >= 159 && vel.x > 0) {
            engine.reflect_off_wall(Axis::Vertical);
        }
        if y <= 0 && vel.y < 0 {
            engine.reflect_off_wall(Axis::Horizontal);
        }
        if engine.ball.vel.y > 0 {
            let hit = engine.reflect_off_paddle(x, paddle_top).unwrap();
            if hit {
                assert!((30..=150).contains(&engine.angle()));
            }
        }

        assert!((-8..=168).contains(&x), "x escaped: {x}");
        assert!((-8..=paddle_top + 8).contains(&y), "y escaped: {y}");
    }
}
