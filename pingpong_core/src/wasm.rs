//! WASM bridge module for JavaScript interop

use crate::{trig, Axis, Config, Engine, Physics, Snapshot};
use js_sys::Int32Array;
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => {
        web_sys::console::log_1(&format!($($t)*).into())
    };
}

fn to_js_error(err: impl core::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-compatible wrapper around the ball engine
#[wasm_bindgen]
pub struct WasmBall {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmBall {
    /// Create an engine from JSON configuration; empty or invalid JSON uses defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: String) -> WasmBall {
        let config = if config_json.trim().is_empty() {
            Config::default()
        } else {
            match serde_json::from_str(&config_json) {
                Ok(config) => config,
                Err(e) => {
                    console_log!("Failed to parse config JSON, using defaults: {}", e);
                    Config::default()
                }
            }
        };

        WasmBall {
            inner: Engine::new(config),
        }
    }

    /// Place and launch the ball
    pub fn init(&mut self, x: i32, y: i32, angle: i32) {
        self.inner.init(x, y, angle);
    }

    /// Advance one frame; returns `[x, y]` in pixels
    pub fn update(&mut self) -> Int32Array {
        let (x, y) = self.inner.update();
        Int32Array::from(&[x, y][..])
    }

    /// Paddle collision; returns whether the paddle was hit
    pub fn reflect_off_paddle(
        &mut self,
        paddle_centre_x: i32,
        paddle_top_y: i32,
    ) -> Result<bool, JsValue> {
        self.inner
            .reflect_off_paddle(paddle_centre_x, paddle_top_y)
            .map_err(to_js_error)
    }

    /// Bounce off a floor or ceiling
    pub fn reflect_horizontal(&mut self) {
        self.inner.reflect_off_wall(Axis::Horizontal);
    }

    /// Bounce off a side wall
    pub fn reflect_vertical(&mut self) {
        self.inner.reflect_off_wall(Axis::Vertical);
    }

    pub fn set_active(&mut self, active: bool) {
        self.inner.set_active(active);
    }

    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    pub fn angle(&self) -> i32 {
        self.inner.angle()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Ball registers as bytes
    pub fn snapshot_bytes(&self) -> Vec<u8> {
        self.inner.snapshot().encode().to_vec()
    }

    /// Restore ball registers from snapshot bytes
    pub fn restore_bytes(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let snapshot = Snapshot::decode(bytes).map_err(to_js_error)?;
        self.inner.restore(&snapshot);
        Ok(())
    }

    /// Ball registers as a JSON string
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.snapshot()).map_err(to_js_error)
    }
}

/// Create a default config as JSON string (utility for JavaScript)
#[wasm_bindgen]
pub fn default_config_json() -> String {
    match serde_json::to_string_pretty(&Config::default()) {
        Ok(json) => json,
        Err(_) => "{}".to_string(),
    }
}

/// Sine of a whole-degree angle, 8.8 fixed-point
#[wasm_bindgen]
pub fn sin(degrees: i32) -> i32 {
    trig::sin(degrees)
}

/// Cosine of a whole-degree angle, 8.8 fixed-point
#[wasm_bindgen]
pub fn cos(degrees: i32) -> i32 {
    trig::cos(degrees)
}

/// Paddle reflection angle in degrees
#[wasm_bindgen]
pub fn reflection_angle(
    ball_x: i32,
    paddle_centre_x: i32,
    paddle_width: i32,
    max_angle: i32,
) -> Result<i32, JsValue> {
    Physics::reflection_angle(ball_x, paddle_centre_x, paddle_width, max_angle)
        .map_err(to_js_error)
}

/// Initialize WASM module (called automatically)
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
