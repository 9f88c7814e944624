//! All game entity types — plain data, no game logic.

use crate::config::GameConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned box with a velocity.  `x`/`y` is the centre, y grows upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Body {
    /// A stationary body whose bottom-left corner sits at `(left, bottom)`.
    pub fn from_corner(left: f32, bottom: f32, width: f32, height: f32) -> Self {
        Body {
            x: left + width / 2.0,
            y: bottom + height / 2.0,
            width,
            height,
            vx: 0.0,
            vy: 0.0,
        }
    }

    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn set_left(&mut self, left: f32) {
        self.x = left + self.width / 2.0;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom + self.height / 2.0;
    }

    /// Advance by one frame of the body's own velocity.
    pub fn integrate(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    Grounded,
    Airborne,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    pub motion: Motion,
}

impl Player {
    pub fn jumping(&self) -> bool {
        self.motion == Motion::Airborne
    }
}

// ── Scenery ───────────────────────────────────────────────────────────────────

/// One segment of the ground conveyor.  Recycled, never destroyed.
#[derive(Clone, Debug, PartialEq)]
pub struct GroundTile {
    pub body: Body,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationKind {
    Sprout,
    Mushroom,
    Rock,
    Bush,
}

impl DecorationKind {
    pub const ALL: [DecorationKind; 4] = [
        DecorationKind::Sprout,
        DecorationKind::Mushroom,
        DecorationKind::Rock,
        DecorationKind::Bush,
    ];
}

/// Background scenery.  Replaced (not recycled) once it leaves the screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoration {
    pub kind: DecorationKind,
    pub body: Body,
}

// ── Bugs ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BugKind {
    Fly,
}

impl BugKind {
    /// Points awarded for squashing one bug of this kind.
    pub fn value(self) -> u32 {
        match self {
            BugKind::Fly => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bug {
    pub kind: BugKind,
    pub value: u32,
    pub body: Body,
}

impl Bug {
    pub fn new(kind: BugKind, body: Body) -> Self {
        Bug {
            kind,
            value: kind.value(),
            body,
        }
    }
}

/// A struck bug on its way off screen.  `body.vx`/`body.vy` hold the
/// spin-away trajectory.
#[derive(Clone, Debug, PartialEq)]
pub struct DyingBug {
    pub bug: Bug,
    /// Degrees per frame; the sign is the spin direction.
    pub spin: f32,
    /// Accumulated rotation in degrees.
    pub angle: f32,
}

// ── Spawn timer ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnTimer {
    /// Seconds until the next bug appears.
    pub remaining: f32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything one session owns.  Cloneable so the update functions can
/// return a fresh copy without touching their input.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub ground: Vec<GroundTile>,
    pub decorations: Vec<Decoration>,
    /// Bugs that can still be hit.
    pub bugs: Vec<Bug>,
    /// Bugs that were hit and are spinning away.
    pub dying_bugs: Vec<DyingBug>,
    pub score: u32,
    pub spawn_timer: SpawnTimer,
    pub frame: u64,
    pub config: GameConfig,
}
