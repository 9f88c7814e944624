//! Tunable constants for a game session.
//!
//! Every field has a default so a configuration file only needs to name the
//! values it changes.  Distances are world pixels (y-up), velocities are
//! pixels per frame, and intervals are seconds.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use serde::Deserialize;

use crate::error::{GameError, Result};

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 1000.0;
pub const SCREEN_HEIGHT: f32 = 650.0;
pub const SCREEN_TITLE: &str = "Frog Jump";

pub const TILE_SIZE: f32 = 64.0;

pub const PLAYER_LEFT: f32 = 64.0;
pub const PLAYER_WIDTH: f32 = 48.0;
pub const PLAYER_HEIGHT: f32 = 40.0;

pub const GRAVITY: f32 = 1.0;
pub const PLAYER_JUMP_SPEED: f32 = 20.0;
/// World scroll speed while the frog is in the air.
pub const SCROLL_SPEED: f32 = 5.0;

pub const DECORATION_COUNT: usize = 5;
pub const DECORATION_SIZE: f32 = 48.0;

pub const BUG_WIDTH: f32 = 40.0;
pub const BUG_HEIGHT: f32 = 30.0;
pub const BUG_SPEED: f32 = 4.0;

pub const DEATH_SPEED: f32 = 12.0;

/// Upper bound on the ground conveyor; wider screens need bigger tiles.
pub const MAX_GROUND_TILES: usize = 1024;

// ── Ranges ───────────────────────────────────────────────────────────────────

/// Half-open range `[min, max)` sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T> Span<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T> Span<T>
where
    T: SampleUniform + PartialOrd + Copy,
{
    pub fn sample(&self, rng: &mut impl Rng) -> T {
        rng.gen_range(self.min..self.max)
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value < self.max
    }

    fn is_empty(&self) -> bool {
        !(self.min < self.max)
    }
}

impl Span<f32> {
    fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

// ── Config ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub tile_size: f32,

    pub player_left: f32,
    pub player_width: f32,
    pub player_height: f32,

    pub gravity: f32,
    pub jump_speed: f32,
    pub scroll_speed: f32,

    pub decoration_count: usize,
    pub decoration_size: f32,
    /// Offset beyond the right edge at which a replacement decoration appears.
    pub decoration_respawn: Span<f32>,

    pub bug_width: f32,
    pub bug_height: f32,
    pub bug_speed: f32,
    /// Band for the centre height of a freshly spawned bug.
    pub bug_spawn_height: Span<i32>,
    /// Seconds between spawns.
    pub spawn_interval: Span<u32>,

    pub death_speed: f32,
    /// Launch angle of a struck bug, degrees counter-clockwise from +x.
    pub death_angle: Span<f32>,
    /// Spin magnitude of a struck bug, degrees per frame.
    pub death_spin: Span<f32>,

    pub sound: bool,
    /// Glyph overrides keyed by sprite name, e.g. `fly = "}o{"`.
    pub glyphs: HashMap<String, String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            tile_size: TILE_SIZE,
            player_left: PLAYER_LEFT,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            gravity: GRAVITY,
            jump_speed: PLAYER_JUMP_SPEED,
            scroll_speed: SCROLL_SPEED,
            decoration_count: DECORATION_COUNT,
            decoration_size: DECORATION_SIZE,
            decoration_respawn: Span::new(0.0, 400.0),
            bug_width: BUG_WIDTH,
            bug_height: BUG_HEIGHT,
            bug_speed: BUG_SPEED,
            bug_spawn_height: Span::new(100, 400),
            spawn_interval: Span::new(2, 6),
            death_speed: DEATH_SPEED,
            death_angle: Span::new(30.0, 75.0),
            death_spin: Span::new(4.0, 12.0),
            sound: true,
            glyphs: HashMap::new(),
        }
    }
}

impl GameConfig {
    /// Read and validate a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: GameConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Top of the ground track; tiles sit on y = 0.
    pub fn ground_top(&self) -> f32 {
        self.tile_size
    }

    /// Number of ground tiles: enough to span the screen plus one spare.
    pub fn tile_count(&self) -> usize {
        (self.width / self.tile_size).ceil() as usize + 1
    }

    /// Distance a recycled tile is moved to the right.
    pub fn conveyor_length(&self) -> f32 {
        self.tile_count() as f32 * self.tile_size
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("tile_size", self.tile_size),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("gravity", self.gravity),
            ("jump_speed", self.jump_speed),
            ("scroll_speed", self.scroll_speed),
            ("decoration_size", self.decoration_size),
            ("bug_width", self.bug_width),
            ("bug_height", self.bug_height),
            ("bug_speed", self.bug_speed),
            ("death_speed", self.death_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(format!("{name} must be positive and finite, got {value}")));
            }
        }
        if self.width / self.tile_size > MAX_GROUND_TILES as f32 {
            return Err(invalid(format!(
                "width {} over tile_size {} needs more than {MAX_GROUND_TILES} ground tiles",
                self.width, self.tile_size
            )));
        }

        if self.spawn_interval.min < 1 {
            return Err(invalid("spawn_interval.min must be at least 1 second".into()));
        }
        if self.spawn_interval.is_empty() {
            return Err(invalid(format!(
                "spawn_interval is empty: [{}, {})",
                self.spawn_interval.min, self.spawn_interval.max
            )));
        }
        if self.bug_spawn_height.is_empty() {
            return Err(invalid(format!(
                "bug_spawn_height is empty: [{}, {})",
                self.bug_spawn_height.min, self.bug_spawn_height.max
            )));
        }
        if !self.decoration_respawn.is_finite()
            || self.decoration_respawn.is_empty()
            || self.decoration_respawn.min < 0.0
        {
            return Err(invalid("decoration_respawn must be a finite, non-empty band at or beyond the right edge".into()));
        }
        if !self.death_spin.is_finite() || self.death_spin.is_empty() {
            return Err(invalid("death_spin must be a finite, non-empty band".into()));
        }
        // A struck bug must rise so it always reaches the exit zone.
        if !self.death_angle.is_finite()
            || self.death_angle.is_empty()
            || self.death_angle.min <= 0.0
            || self.death_angle.max > 180.0
        {
            return Err(invalid(format!(
                "death_angle must be a non-empty band inside (0, 180) degrees, got [{}, {})",
                self.death_angle.min, self.death_angle.max
            )));
        }
        if !self.player_left.is_finite()
            || self.player_left < 0.0
            || self.player_left + self.player_width > self.width
        {
            return Err(invalid(format!(
                "player_left {} puts the frog off screen",
                self.player_left
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> GameError {
    GameError::InvalidConfig(message)
}
