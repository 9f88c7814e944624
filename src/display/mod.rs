//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable view of the
//! game state.  No game logic is performed; this module only translates
//! world coordinates into terminal cells and cells into terminal commands.

pub mod atlas;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{Body, GameState, Motion};
use atlas::{GlyphAtlas, SpriteKey};

// ── Colour palette ────────────────────────────────────────────────────────────

/// Cornflower blue sky.
pub const C_SKY: Color = Color::Rgb { r: 100, g: 149, b: 237 };
const C_GRASS: Color = Color::Green;
const C_SOIL: Color = Color::DarkYellow;
const C_FROG: Color = Color::DarkGreen;
const C_FLY: Color = Color::Black;
const C_FLY_DYING: Color = Color::DarkGrey;
const C_SCORE: Color = Color::White;

fn decoration_color(key: SpriteKey) -> Color {
    match key {
        SpriteKey::Sprout => Color::Green,
        SpriteKey::Mushroom => Color::Red,
        SpriteKey::Rock => Color::Grey,
        _ => Color::DarkGreen,
    }
}

/// Smallest terminal the game will draw into.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 12;

// ── Draw order ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Decorations,
    Ground,
    Player,
    DyingBugs,
    Bugs,
    Score,
}

/// Back to front.
pub const DRAW_ORDER: [Layer; 6] = [
    Layer::Decorations,
    Layer::Ground,
    Layer::Player,
    Layer::DyingBugs,
    Layer::Bugs,
    Layer::Score,
];

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Maps the world rectangle `[0, world_width] x [0, world_height]` onto a
/// `cols` x `rows` terminal, flipping y so the ground is at the bottom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub world_width: f32,
    pub world_height: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, world_width: f32, world_height: f32) -> Self {
        Viewport {
            cols,
            rows,
            world_width,
            world_height,
        }
    }

    pub fn is_too_small(&self) -> bool {
        self.cols < MIN_COLS || self.rows < MIN_ROWS
    }

    /// Column for world x, or `None` when off screen.
    pub fn col(&self, x: f32) -> Option<u16> {
        if x < 0.0 || x >= self.world_width {
            return None;
        }
        let col = (x / self.world_width * self.cols as f32) as u16;
        Some(col.min(self.cols.saturating_sub(1)))
    }

    /// Row for world y, or `None` when off screen.
    pub fn row(&self, y: f32) -> Option<u16> {
        if y < 0.0 || y >= self.world_height {
            return None;
        }
        let from_bottom = (y / self.world_height * self.rows as f32) as u16;
        Some(self.rows.saturating_sub(1).saturating_sub(from_bottom))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    state: &GameState,
    atlas: &GlyphAtlas,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(style::SetBackgroundColor(C_SKY))?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if view.is_too_small() {
        draw_too_small(out, view)?;
    } else {
        for layer in DRAW_ORDER {
            draw_layer(out, state, atlas, view, layer)?;
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_layer<W: Write>(
    out: &mut W,
    state: &GameState,
    atlas: &GlyphAtlas,
    view: Viewport,
    layer: Layer,
) -> std::io::Result<()> {
    match layer {
        Layer::Decorations => {
            for decoration in &state.decorations {
                let key = SpriteKey::from(decoration.kind);
                draw_sprite(out, view, &decoration.body, atlas.glyph(key), decoration_color(key))?;
            }
        }
        Layer::Ground => draw_ground(out, state, atlas, view)?,
        Layer::Player => {
            let key = match state.player.motion {
                Motion::Grounded => SpriteKey::Frog,
                Motion::Airborne => SpriteKey::FrogJump,
            };
            draw_sprite(out, view, &state.player.body, atlas.glyph(key), C_FROG)?;
        }
        Layer::DyingBugs => {
            for dying in &state.dying_bugs {
                let key = if ((dying.angle / 45.0).floor() as i64).rem_euclid(2) == 0 {
                    SpriteKey::FlySpinA
                } else {
                    SpriteKey::FlySpinB
                };
                draw_sprite(out, view, &dying.bug.body, atlas.glyph(key), C_FLY_DYING)?;
            }
        }
        Layer::Bugs => {
            for bug in &state.bugs {
                draw_sprite(out, view, &bug.body, atlas.glyph(SpriteKey::Fly), C_FLY)?;
            }
        }
        Layer::Score => draw_score(out, state)?,
    }
    Ok(())
}

// ── Sprites ───────────────────────────────────────────────────────────────────

/// Print `glyph` centred on the body's centre cell, clipped to the screen.
fn draw_sprite<W: Write>(
    out: &mut W,
    view: Viewport,
    body: &Body,
    glyph: &str,
    color: Color,
) -> std::io::Result<()> {
    let Some(row) = view.row(body.y) else {
        return Ok(());
    };
    let Some(centre) = view.col(body.x) else {
        return Ok(());
    };

    let len = glyph.chars().count() as u16;
    let start = centre.saturating_sub(len / 2);
    let room = view.cols.saturating_sub(start) as usize;
    let visible: String = glyph.chars().take(room).collect();

    out.queue(cursor::MoveTo(start, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(visible))?;
    Ok(())
}

fn draw_ground<W: Write>(
    out: &mut W,
    state: &GameState,
    atlas: &GlyphAtlas,
    view: Viewport,
) -> std::io::Result<()> {
    let Some(top_row) = state
        .ground
        .first()
        .and_then(|tile| view.row(tile.body.top() - 1.0))
    else {
        return Ok(());
    };

    let grass = atlas.glyph(SpriteKey::Ground);
    let soil = atlas.glyph(SpriteKey::Soil);

    for tile in &state.ground {
        let from = view.col(tile.body.left().max(0.0));
        let to = view.col((tile.body.right() - 1.0).min(view.world_width - 1.0));
        let (Some(from), Some(to)) = (from, to) else {
            continue;
        };
        let span = (to - from + 1) as usize;

        out.queue(cursor::MoveTo(from, top_row))?;
        out.queue(style::SetForegroundColor(C_GRASS))?;
        out.queue(Print(grass.repeat(span)))?;

        out.queue(style::SetForegroundColor(C_SOIL))?;
        for row in top_row + 1..view.rows {
            out.queue(cursor::MoveTo(from, row))?;
            out.queue(Print(soil.repeat(span)))?;
        }
    }
    Ok(())
}

// ── Score overlay ─────────────────────────────────────────────────────────────

fn draw_score<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;
    Ok(())
}

fn draw_too_small<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let msg = format!("Terminal too small: need {MIN_COLS}x{MIN_ROWS}");
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    let visible: String = msg.chars().take(view.cols as usize).collect();
    out.queue(Print(visible))?;
    Ok(())
}
